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

//! Factory functions for [ProductDimension] values.
//!
//! Every function takes an optional value. Passing `None` creates the
//! "everything else" case of that dimension, which matches all the products
//! not matched by its siblings.
//!
//! # Example
//! ```
//! use google_ads_adwords_shopping::dimensions;
//! let brand = dimensions::create_brand(Some("google"));
//! let other = dimensions::create_brand(None);
//! assert!(!brand.is_other());
//! assert!(other.is_other());
//! ```

use cm::model::{
    CanonicalCondition, ProductBiddingCategory, ProductBrand, ProductCanonicalCondition,
    ProductChannel, ProductChannelExclusivity, ProductCustomAttribute, ProductDimension,
    ProductDimensionType, ProductOfferId, ProductType, ShoppingProductChannel,
    ShoppingProductChannelExclusivity,
};

/// Creates a bidding category dimension at the given level.
pub fn create_bidding_category(
    level: ProductDimensionType,
    value: Option<i64>,
) -> ProductDimension {
    ProductDimension::BiddingCategory(
        ProductBiddingCategory::new()
            .set_dimension_type(level)
            .set_or_clear_value(value),
    )
}

/// Creates a brand dimension.
pub fn create_brand(value: Option<&str>) -> ProductDimension {
    ProductDimension::Brand(ProductBrand::new().set_or_clear_value(value))
}

/// Creates a canonical condition dimension.
pub fn create_canonical_condition(condition: Option<CanonicalCondition>) -> ProductDimension {
    ProductDimension::CanonicalCondition(
        ProductCanonicalCondition::new().set_or_clear_condition(condition),
    )
}

/// Creates a custom attribute dimension for the given attribute index.
pub fn create_custom_attribute(
    index: ProductDimensionType,
    value: Option<&str>,
) -> ProductDimension {
    ProductDimension::CustomAttribute(
        ProductCustomAttribute::new()
            .set_dimension_type(index)
            .set_or_clear_value(value),
    )
}

/// Creates an offer id dimension.
pub fn create_offer_id(value: Option<&str>) -> ProductDimension {
    ProductDimension::OfferId(ProductOfferId::new().set_or_clear_value(value))
}

/// Creates a product type dimension at the given level.
pub fn create_type(level: ProductDimensionType, value: Option<&str>) -> ProductDimension {
    ProductDimension::Type(
        ProductType::new()
            .set_dimension_type(level)
            .set_or_clear_value(value),
    )
}

/// Creates a channel dimension.
pub fn create_channel(channel: Option<ShoppingProductChannel>) -> ProductDimension {
    ProductDimension::Channel(ProductChannel::new().set_or_clear_channel(channel))
}

/// Creates a channel exclusivity dimension.
pub fn create_channel_exclusivity(
    exclusivity: Option<ShoppingProductChannelExclusivity>,
) -> ProductDimension {
    ProductDimension::ChannelExclusivity(
        ProductChannelExclusivity::new().set_or_clear_channel_exclusivity(exclusivity),
    )
}

/// Formats a dimension for logs and tree outlines.
///
/// The root of a tree has no dimension, it is formatted as `<root>`.
pub fn describe(dimension: Option<&ProductDimension>) -> String {
    let Some(dimension) = dimension else {
        return "<root>".to_string();
    };
    fn or_other<T: std::fmt::Debug>(v: &Option<T>) -> String {
        v.as_ref()
            .map(|v| format!("{v:?}"))
            .unwrap_or_else(|| "OTHER".to_string())
    }
    match dimension {
        ProductDimension::BiddingCategory(d) => format!(
            "ProductBiddingCategory({:?}, {})",
            d.dimension_type,
            or_other(&d.value)
        ),
        ProductDimension::Brand(d) => format!("ProductBrand({})", or_other(&d.value)),
        ProductDimension::CanonicalCondition(d) => {
            format!("ProductCanonicalCondition({})", or_other(&d.condition))
        }
        ProductDimension::CustomAttribute(d) => format!(
            "ProductCustomAttribute({:?}, {})",
            d.dimension_type,
            or_other(&d.value)
        ),
        ProductDimension::OfferId(d) => format!("ProductOfferId({})", or_other(&d.value)),
        ProductDimension::Type(d) => format!(
            "ProductType({:?}, {})",
            d.dimension_type,
            or_other(&d.value)
        ),
        ProductDimension::Channel(d) => format!("ProductChannel({})", or_other(&d.channel)),
        ProductDimension::ChannelExclusivity(d) => format!(
            "ProductChannelExclusivity({})",
            or_other(&d.channel_exclusivity)
        ),
        other => format!("{other:?}"),
    }
}
