// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Request and response messages for the `AdGroupCriterionService`.
//!
//! Only the criterion types used by Shopping campaigns are modeled. The
//! polymorphic types of the API (`Criterion`, `ProductDimension`, `Bids` and
//! `AdGroupCriterion`) are represented as enums, tagged in JSON with the same
//! `<Type>.Type` discriminator the service uses.

/// The operation to perform on an operand in a `mutate` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum Operator {
    /// Create the operand.
    Add,
    /// Remove the operand. Only the identifying fields need to be set.
    Remove,
    /// Update the operand. For product partitions only the bids may change.
    Set,
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Add => "ADD",
            Self::Remove => "REMOVE",
            Self::Set => "SET",
        };
        f.write_str(name)
    }
}

/// Whether a product partition is a leaf or has children.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ProductPartitionType {
    /// A subdivision of the product catalog. It must have children.
    Subdivision,
    /// A leaf of the tree, it may carry a bid or be excluded.
    Unit,
    /// A value not known to this version of the library.
    Unknown,
}

/// The level or index of a leveled product dimension.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Deserialize, serde::Serialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ProductDimensionType {
    BiddingCategoryL1,
    BiddingCategoryL2,
    BiddingCategoryL3,
    BiddingCategoryL4,
    BiddingCategoryL5,
    ProductTypeL1,
    ProductTypeL2,
    ProductTypeL3,
    ProductTypeL4,
    ProductTypeL5,
    #[serde(rename = "CUSTOM_ATTRIBUTE_0")]
    CustomAttribute0,
    #[serde(rename = "CUSTOM_ATTRIBUTE_1")]
    CustomAttribute1,
    #[serde(rename = "CUSTOM_ATTRIBUTE_2")]
    CustomAttribute2,
    #[serde(rename = "CUSTOM_ATTRIBUTE_3")]
    CustomAttribute3,
    #[serde(rename = "CUSTOM_ATTRIBUTE_4")]
    CustomAttribute4,
    Unknown,
}

/// The canonical condition of a product.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Deserialize, serde::Serialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum CanonicalCondition {
    New,
    Used,
    Refurbished,
    Unknown,
}

/// The channel where a product is sold.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Deserialize, serde::Serialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ShoppingProductChannel {
    Online,
    Local,
    Unknown,
}

/// Whether a product is sold in one or several channels.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Deserialize, serde::Serialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ShoppingProductChannelExclusivity {
    SingleChannel,
    MultiChannel,
    Unknown,
}

/// The bidding strategy used by a criterion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum BiddingStrategyType {
    ManualCpc,
    ManualCpm,
    PageOnePromoted,
    TargetSpend,
    EnhancedCpc,
    TargetCpa,
    TargetRoas,
    TargetOutrankShare,
    None,
    Unknown,
}

/// The status set by the advertiser on a biddable criterion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum UserStatus {
    Enabled,
    Removed,
    Paused,
}

/// A monetary amount, in micros of the account currency.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Money {
    /// The amount, one unit of currency is 1,000,000 micros.
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub micro_amount: i64,
}

impl Money {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [micro_amount][Money::micro_amount] field.
    pub fn set_micro_amount<T: Into<i64>>(mut self, v: T) -> Self {
        self.micro_amount = v.into();
        self
    }
}

/// A cost-per-click bid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CpcBid {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bid: Option<Money>,
}

impl CpcBid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [bid][CpcBid::bid] field.
    pub fn set_bid<T: Into<Money>>(mut self, v: T) -> Self {
        self.bid = Some(v.into());
        self
    }

    /// Sets or clears the [bid][CpcBid::bid] field.
    pub fn set_or_clear_bid<T: Into<Money>>(mut self, v: Option<T>) -> Self {
        self.bid = v.map(Into::into);
        self
    }
}

/// A bid attached to a [BiddingStrategyConfiguration].
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(tag = "Bids.Type")]
#[non_exhaustive]
pub enum Bids {
    #[serde(rename = "CpcBid")]
    CpcBid(CpcBid),
}

impl Bids {
    /// The bid amount in micros, if this is a [CpcBid] with an amount.
    pub fn cpc_micro_amount(&self) -> Option<i64> {
        match self {
            Self::CpcBid(b) => b.bid.as_ref().map(|m| m.micro_amount),
        }
    }
}

impl From<CpcBid> for Bids {
    fn from(value: CpcBid) -> Self {
        Self::CpcBid(value)
    }
}

/// The bidding strategy and bids of a biddable criterion.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BiddingStrategyConfiguration {
    /// The id of a portfolio bidding strategy, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub bidding_strategy_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bidding_strategy_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bidding_strategy_type: Option<BiddingStrategyType>,

    /// The bids. An empty list means the criterion inherits its bid.
    pub bids: Vec<Bids>,
}

impl BiddingStrategyConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [bidding_strategy_id][BiddingStrategyConfiguration::bidding_strategy_id] field.
    pub fn set_bidding_strategy_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.bidding_strategy_id = Some(v.into());
        self
    }

    /// Sets or clears the [bidding_strategy_id][BiddingStrategyConfiguration::bidding_strategy_id] field.
    pub fn set_or_clear_bidding_strategy_id<T: Into<i64>>(mut self, v: Option<T>) -> Self {
        self.bidding_strategy_id = v.map(Into::into);
        self
    }

    /// Sets the [bidding_strategy_name][BiddingStrategyConfiguration::bidding_strategy_name] field.
    pub fn set_bidding_strategy_name<T: Into<String>>(mut self, v: T) -> Self {
        self.bidding_strategy_name = Some(v.into());
        self
    }

    /// Sets the [bidding_strategy_type][BiddingStrategyConfiguration::bidding_strategy_type] field.
    pub fn set_bidding_strategy_type(mut self, v: BiddingStrategyType) -> Self {
        self.bidding_strategy_type = Some(v);
        self
    }

    /// Sets the [bids][BiddingStrategyConfiguration::bids] field.
    pub fn set_bids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Bids>,
    {
        self.bids = v.into_iter().map(Into::into).collect();
        self
    }
}

/// Matches products by bidding category.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ProductBiddingCategory {
    /// One of the `BiddingCategoryL*` levels.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub dimension_type: Option<ProductDimensionType>,

    /// The category id. `None` matches every other category at this level.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub value: Option<i64>,
}

/// Matches products by brand.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ProductBrand {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Matches products by condition.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ProductCanonicalCondition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<CanonicalCondition>,
}

/// Matches products by one of the merchant defined custom attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ProductCustomAttribute {
    /// One of the `CustomAttribute*` indices.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub dimension_type: Option<ProductDimensionType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Matches products by offer id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ProductOfferId {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Matches products by the merchant defined product type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ProductType {
    /// One of the `ProductType*` levels.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub dimension_type: Option<ProductDimensionType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Matches products by sales channel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ProductChannel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<ShoppingProductChannel>,
}

/// Matches products by channel exclusivity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ProductChannelExclusivity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_exclusivity: Option<ShoppingProductChannelExclusivity>,
}

impl ProductBiddingCategory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [dimension_type][ProductBiddingCategory::dimension_type] field.
    pub fn set_dimension_type(mut self, v: ProductDimensionType) -> Self {
        self.dimension_type = Some(v);
        self
    }

    /// Sets or clears the [value][ProductBiddingCategory::value] field.
    pub fn set_or_clear_value<T: Into<i64>>(mut self, v: Option<T>) -> Self {
        self.value = v.map(Into::into);
        self
    }
}

impl ProductBrand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or clears the [value][ProductBrand::value] field.
    pub fn set_or_clear_value<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.value = v.map(Into::into);
        self
    }
}

impl ProductCanonicalCondition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or clears the [condition][ProductCanonicalCondition::condition] field.
    pub fn set_or_clear_condition(mut self, v: Option<CanonicalCondition>) -> Self {
        self.condition = v;
        self
    }
}

impl ProductCustomAttribute {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [dimension_type][ProductCustomAttribute::dimension_type] field.
    pub fn set_dimension_type(mut self, v: ProductDimensionType) -> Self {
        self.dimension_type = Some(v);
        self
    }

    /// Sets or clears the [value][ProductCustomAttribute::value] field.
    pub fn set_or_clear_value<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.value = v.map(Into::into);
        self
    }
}

impl ProductOfferId {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or clears the [value][ProductOfferId::value] field.
    pub fn set_or_clear_value<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.value = v.map(Into::into);
        self
    }
}

impl ProductType {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [dimension_type][ProductType::dimension_type] field.
    pub fn set_dimension_type(mut self, v: ProductDimensionType) -> Self {
        self.dimension_type = Some(v);
        self
    }

    /// Sets or clears the [value][ProductType::value] field.
    pub fn set_or_clear_value<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.value = v.map(Into::into);
        self
    }
}

impl ProductChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or clears the [channel][ProductChannel::channel] field.
    pub fn set_or_clear_channel(mut self, v: Option<ShoppingProductChannel>) -> Self {
        self.channel = v;
        self
    }
}

impl ProductChannelExclusivity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or clears the [channel_exclusivity][ProductChannelExclusivity::channel_exclusivity] field.
    pub fn set_or_clear_channel_exclusivity(
        mut self,
        v: Option<ShoppingProductChannelExclusivity>,
    ) -> Self {
        self.channel_exclusivity = v;
        self
    }
}

/// The attribute a product partition matches on.
///
/// A dimension without a value (for example a [ProductBrand] with no `value`)
/// matches every product not matched by its siblings, it is the "everything
/// else" case of its level in the tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(tag = "ProductDimension.Type")]
#[non_exhaustive]
pub enum ProductDimension {
    #[serde(rename = "ProductBiddingCategory")]
    BiddingCategory(ProductBiddingCategory),
    #[serde(rename = "ProductBrand")]
    Brand(ProductBrand),
    #[serde(rename = "ProductCanonicalCondition")]
    CanonicalCondition(ProductCanonicalCondition),
    #[serde(rename = "ProductCustomAttribute")]
    CustomAttribute(ProductCustomAttribute),
    #[serde(rename = "ProductOfferId")]
    OfferId(ProductOfferId),
    #[serde(rename = "ProductType")]
    Type(ProductType),
    #[serde(rename = "ProductChannel")]
    Channel(ProductChannel),
    #[serde(rename = "ProductChannelExclusivity")]
    ChannelExclusivity(ProductChannelExclusivity),
}

impl ProductDimension {
    /// Returns true if this is the "everything else" case of its kind.
    pub fn is_other(&self) -> bool {
        match self {
            Self::BiddingCategory(d) => d.value.is_none(),
            Self::Brand(d) => d.value.is_none(),
            Self::CanonicalCondition(d) => d.condition.is_none(),
            Self::CustomAttribute(d) => d.value.is_none(),
            Self::OfferId(d) => d.value.is_none(),
            Self::Type(d) => d.value.is_none(),
            Self::Channel(d) => d.channel.is_none(),
            Self::ChannelExclusivity(d) => d.channel_exclusivity.is_none(),
        }
    }

    /// The level or index of leveled dimensions.
    pub fn dimension_type(&self) -> Option<ProductDimensionType> {
        match self {
            Self::BiddingCategory(d) => d.dimension_type,
            Self::CustomAttribute(d) => d.dimension_type,
            Self::Type(d) => d.dimension_type,
            _ => None,
        }
    }
}

/// A node in the product partition tree of a Shopping ad group.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ProductPartition {
    /// The criterion id. Negative values are temporary ids, valid within a
    /// single `mutate` request.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition_type: Option<ProductPartitionType>,

    /// The id of the parent partition. Not set for the root.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub parent_criterion_id: Option<i64>,

    /// The dimension matched by this partition. Not set for the root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_value: Option<ProductDimension>,
}

impl ProductPartition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [id][ProductPartition::id] field.
    pub fn set_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets or clears the [id][ProductPartition::id] field.
    pub fn set_or_clear_id<T: Into<i64>>(mut self, v: Option<T>) -> Self {
        self.id = v.map(Into::into);
        self
    }

    /// Sets the [partition_type][ProductPartition::partition_type] field.
    pub fn set_partition_type(mut self, v: ProductPartitionType) -> Self {
        self.partition_type = Some(v);
        self
    }

    /// Sets the [parent_criterion_id][ProductPartition::parent_criterion_id] field.
    pub fn set_parent_criterion_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.parent_criterion_id = Some(v.into());
        self
    }

    /// Sets or clears the [parent_criterion_id][ProductPartition::parent_criterion_id] field.
    pub fn set_or_clear_parent_criterion_id<T: Into<i64>>(mut self, v: Option<T>) -> Self {
        self.parent_criterion_id = v.map(Into::into);
        self
    }

    /// Sets the [case_value][ProductPartition::case_value] field.
    pub fn set_case_value<T: Into<ProductDimension>>(mut self, v: T) -> Self {
        self.case_value = Some(v.into());
        self
    }

    /// Sets or clears the [case_value][ProductPartition::case_value] field.
    pub fn set_or_clear_case_value<T: Into<ProductDimension>>(mut self, v: Option<T>) -> Self {
        self.case_value = v.map(Into::into);
        self
    }
}

/// The targeting criterion of an [AdGroupCriterion].
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(tag = "Criterion.Type")]
#[non_exhaustive]
pub enum Criterion {
    #[serde(rename = "ProductPartition")]
    ProductPartition(ProductPartition),
}

impl Criterion {
    /// The criterion id.
    pub fn id(&self) -> Option<i64> {
        match self {
            Self::ProductPartition(p) => p.id,
        }
    }

    /// The value of the criterion, if it holds a `ProductPartition`.
    pub fn product_partition(&self) -> Option<&ProductPartition> {
        match self {
            Self::ProductPartition(p) => Some(p),
        }
    }
}

impl From<ProductPartition> for Criterion {
    fn from(value: ProductPartition) -> Self {
        Self::ProductPartition(value)
    }
}

/// The fields shared by all the [AdGroupCriterion] variants.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BaseAdGroupCriterion {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub ad_group_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub criterion: Option<Criterion>,
}

impl BaseAdGroupCriterion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [ad_group_id][BaseAdGroupCriterion::ad_group_id] field.
    pub fn set_ad_group_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.ad_group_id = Some(v.into());
        self
    }

    /// Sets the [criterion][BaseAdGroupCriterion::criterion] field.
    pub fn set_criterion<T: Into<Criterion>>(mut self, v: T) -> Self {
        self.criterion = Some(v.into());
        self
    }
}

/// A criterion that matches products and carries a bid.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BiddableAdGroupCriterion {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub ad_group_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub criterion: Option<Criterion>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_status: Option<UserStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bidding_strategy_configuration: Option<BiddingStrategyConfiguration>,
}

impl BiddableAdGroupCriterion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [ad_group_id][BiddableAdGroupCriterion::ad_group_id] field.
    pub fn set_ad_group_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.ad_group_id = Some(v.into());
        self
    }

    /// Sets the [criterion][BiddableAdGroupCriterion::criterion] field.
    pub fn set_criterion<T: Into<Criterion>>(mut self, v: T) -> Self {
        self.criterion = Some(v.into());
        self
    }

    /// Sets the [user_status][BiddableAdGroupCriterion::user_status] field.
    pub fn set_user_status(mut self, v: UserStatus) -> Self {
        self.user_status = Some(v);
        self
    }

    /// Sets the [bidding_strategy_configuration][BiddableAdGroupCriterion::bidding_strategy_configuration] field.
    pub fn set_bidding_strategy_configuration<T: Into<BiddingStrategyConfiguration>>(
        mut self,
        v: T,
    ) -> Self {
        self.bidding_strategy_configuration = Some(v.into());
        self
    }
}

/// A criterion that excludes the matching products.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NegativeAdGroupCriterion {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub ad_group_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub criterion: Option<Criterion>,
}

impl NegativeAdGroupCriterion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [ad_group_id][NegativeAdGroupCriterion::ad_group_id] field.
    pub fn set_ad_group_id<T: Into<i64>>(mut self, v: T) -> Self {
        self.ad_group_id = Some(v.into());
        self
    }

    /// Sets the [criterion][NegativeAdGroupCriterion::criterion] field.
    pub fn set_criterion<T: Into<Criterion>>(mut self, v: T) -> Self {
        self.criterion = Some(v.into());
        self
    }
}

/// A criterion attached to an ad group.
///
/// `REMOVE` operations only need the [Base][AdGroupCriterion::Base] variant.
/// `ADD` and `SET` operations use the biddable or negative variants.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(tag = "AdGroupCriterion.Type")]
#[non_exhaustive]
pub enum AdGroupCriterion {
    #[serde(rename = "AdGroupCriterion")]
    Base(BaseAdGroupCriterion),
    #[serde(rename = "BiddableAdGroupCriterion")]
    Biddable(BiddableAdGroupCriterion),
    #[serde(rename = "NegativeAdGroupCriterion")]
    Negative(NegativeAdGroupCriterion),
}

impl AdGroupCriterion {
    pub fn ad_group_id(&self) -> Option<i64> {
        match self {
            Self::Base(c) => c.ad_group_id,
            Self::Biddable(c) => c.ad_group_id,
            Self::Negative(c) => c.ad_group_id,
        }
    }

    pub fn criterion(&self) -> Option<&Criterion> {
        match self {
            Self::Base(c) => c.criterion.as_ref(),
            Self::Biddable(c) => c.criterion.as_ref(),
            Self::Negative(c) => c.criterion.as_ref(),
        }
    }

    /// The product partition, if the criterion holds one.
    pub fn product_partition(&self) -> Option<&ProductPartition> {
        self.criterion().and_then(Criterion::product_partition)
    }

    /// The value of the biddable variant, if this is a biddable criterion.
    pub fn biddable(&self) -> Option<&BiddableAdGroupCriterion> {
        match self {
            Self::Biddable(c) => Some(c),
            _ => None,
        }
    }

    /// The value of the negative variant, if this is a negative criterion.
    pub fn negative(&self) -> Option<&NegativeAdGroupCriterion> {
        match self {
            Self::Negative(c) => Some(c),
            _ => None,
        }
    }
}

impl From<BaseAdGroupCriterion> for AdGroupCriterion {
    fn from(value: BaseAdGroupCriterion) -> Self {
        Self::Base(value)
    }
}

impl From<BiddableAdGroupCriterion> for AdGroupCriterion {
    fn from(value: BiddableAdGroupCriterion) -> Self {
        Self::Biddable(value)
    }
}

impl From<NegativeAdGroupCriterion> for AdGroupCriterion {
    fn from(value: NegativeAdGroupCriterion) -> Self {
        Self::Negative(value)
    }
}

/// One element of the `operations` list in an `AdGroupCriterionService.mutate` request.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct AdGroupCriterionOperation {
    pub operator: Operator,
    pub operand: AdGroupCriterion,
}

impl AdGroupCriterionOperation {
    pub fn new<T: Into<AdGroupCriterion>>(operator: Operator, operand: T) -> Self {
        Self {
            operator,
            operand: operand.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;
    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test_case(Operator::Add, "ADD")]
    #[test_case(Operator::Remove, "REMOVE")]
    #[test_case(Operator::Set, "SET")]
    fn operator_names(input: Operator, want: &str) -> TestResult {
        assert_eq!(input.to_string(), want);
        let got = serde_json::to_value(input)?;
        assert_eq!(got, json!(want));
        let roundtrip = serde_json::from_value::<Operator>(got)?;
        assert_eq!(roundtrip, input);
        Ok(())
    }

    #[test_case(ProductDimensionType::BiddingCategoryL3, "BIDDING_CATEGORY_L3")]
    #[test_case(ProductDimensionType::ProductTypeL1, "PRODUCT_TYPE_L1")]
    #[test_case(ProductDimensionType::CustomAttribute0, "CUSTOM_ATTRIBUTE_0")]
    #[test_case(ProductDimensionType::CustomAttribute4, "CUSTOM_ATTRIBUTE_4")]
    fn dimension_type_names(input: ProductDimensionType, want: &str) -> TestResult {
        let got = serde_json::to_value(input)?;
        assert_eq!(got, json!(want));
        Ok(())
    }

    #[test]
    fn biddable_operation() -> TestResult {
        let partition = ProductPartition::new()
            .set_id(-4)
            .set_parent_criterion_id(-3)
            .set_partition_type(ProductPartitionType::Unit)
            .set_case_value(ProductDimension::Brand(ProductBrand {
                value: Some("google".to_string()),
            }));
        let config = BiddingStrategyConfiguration::new()
            .set_bidding_strategy_id(-2)
            .set_bids([CpcBid::new().set_bid(Money::new().set_micro_amount(1_500_000))]);
        let operand = BiddableAdGroupCriterion::new()
            .set_ad_group_id(-1)
            .set_criterion(partition)
            .set_bidding_strategy_configuration(config);
        let operation = AdGroupCriterionOperation::new(Operator::Add, operand);

        let got = serde_json::to_value(&operation)?;
        let want = json!({
            "operator": "ADD",
            "operand": {
                "AdGroupCriterion.Type": "BiddableAdGroupCriterion",
                "adGroupId": "-1",
                "criterion": {
                    "Criterion.Type": "ProductPartition",
                    "id": "-4",
                    "partitionType": "UNIT",
                    "parentCriterionId": "-3",
                    "caseValue": {
                        "ProductDimension.Type": "ProductBrand",
                        "value": "google"
                    }
                },
                "biddingStrategyConfiguration": {
                    "biddingStrategyId": "-2",
                    "bids": [
                        { "Bids.Type": "CpcBid", "bid": { "microAmount": "1500000" } }
                    ]
                }
            }
        });
        assert_eq!(got, want);

        let roundtrip = serde_json::from_value::<AdGroupCriterionOperation>(got)?;
        assert_eq!(roundtrip, operation);
        Ok(())
    }

    #[test]
    fn remove_operation_only_has_ids() -> TestResult {
        let operand = BaseAdGroupCriterion::new()
            .set_ad_group_id(123)
            .set_criterion(ProductPartition::new().set_id(456));
        let operation = AdGroupCriterionOperation::new(Operator::Remove, operand);
        let got = serde_json::to_value(&operation)?;
        let want = json!({
            "operator": "REMOVE",
            "operand": {
                "AdGroupCriterion.Type": "AdGroupCriterion",
                "adGroupId": "123",
                "criterion": { "Criterion.Type": "ProductPartition", "id": "456" }
            }
        });
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn deserialize_leveled_dimension() -> TestResult {
        let input = json!({
            "ProductDimension.Type": "ProductBiddingCategory",
            "type": "BIDDING_CATEGORY_L2",
            "value": "1234"
        });
        let got = serde_json::from_value::<ProductDimension>(input)?;
        let want = ProductDimension::BiddingCategory(ProductBiddingCategory {
            dimension_type: Some(ProductDimensionType::BiddingCategoryL2),
            value: Some(1234),
        });
        assert_eq!(got, want);
        assert_eq!(
            got.dimension_type(),
            Some(ProductDimensionType::BiddingCategoryL2)
        );
        assert!(!got.is_other(), "{got:?}");
        Ok(())
    }

    #[test]
    fn other_dimension() {
        let brand = ProductDimension::Brand(ProductBrand::default());
        assert!(brand.is_other(), "{brand:?}");
        assert_eq!(brand.dimension_type(), None);
        let condition = ProductDimension::CanonicalCondition(ProductCanonicalCondition {
            condition: Some(CanonicalCondition::Used),
        });
        assert!(!condition.is_other(), "{condition:?}");
    }

    #[test]
    fn criterion_accessors() {
        let negative = AdGroupCriterion::from(
            NegativeAdGroupCriterion::new()
                .set_ad_group_id(7)
                .set_criterion(ProductPartition::new().set_id(8)),
        );
        assert_eq!(negative.ad_group_id(), Some(7));
        assert_eq!(negative.criterion().and_then(Criterion::id), Some(8));
        assert!(negative.negative().is_some());
        assert!(negative.biddable().is_none());
        assert_eq!(
            negative.product_partition(),
            Some(&ProductPartition::new().set_id(8))
        );
    }

    #[test]
    fn cpc_micro_amount() {
        let bid = Bids::from(CpcBid::new().set_bid(Money::new().set_micro_amount(42)));
        assert_eq!(bid.cpc_micro_amount(), Some(42));
        let bid = Bids::from(CpcBid::new());
        assert_eq!(bid.cpc_micro_amount(), None);
    }

    #[test]
    fn unknown_fields_are_ignored() -> TestResult {
        let input = json!({
            "bidSource": "ADGROUP",
            "bid": { "microAmount": "10000" }
        });
        let got = serde_json::from_value::<CpcBid>(input)?;
        assert_eq!(got, CpcBid::new().set_bid(Money::new().set_micro_amount(10_000)));
        Ok(())
    }
}
