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

//! Converts product partition nodes into `AdGroupCriterionService` operations.
//!
//! The functions in this module are stateless. They read a node of a
//! [ProductPartitionTree][crate::ProductPartitionTree], and return the
//! operation that creates, removes, or updates the corresponding criterion.
//!
//! # Example
//! ```
//! # use google_ads_adwords_shopping::{Result, ProductPartitionTree, adapter, dimensions};
//! # use google_ads_adwords_shopping::model::{BiddingStrategyConfiguration, Operator};
//! # fn main() -> Result<()> {
//! let mut tree = ProductPartitionTree::builder(123).build()?;
//! let root = tree.root_id();
//! let brand = tree.add_child(root, dimensions::create_brand(Some("google")))?;
//! tree.set_bid(brand, Some(1_500_000))?;
//!
//! let config = BiddingStrategyConfiguration::new();
//! let node = tree.node(brand).expect("node was just added");
//! let operation = adapter::create_criterion_for_add(node, 123, &config);
//! assert_eq!(operation.operator, Operator::Add);
//! # Ok(()) }
//! ```

use crate::node::{NodeState, ProductPartitionNode};
use crate::{Error, Result};
use cm::model::{
    AdGroupCriterion, AdGroupCriterionOperation, BaseAdGroupCriterion, BiddableAdGroupCriterion,
    BiddingStrategyConfiguration, CpcBid, Money, NegativeAdGroupCriterion, Operator,
    ProductPartition,
};

/// Creates the operation to remove the criterion for `node`.
///
/// The operation only carries the ad group id and the partition id. Removing
/// a subdivision also removes all its descendants in the service.
pub fn create_criterion_for_remove(
    node: ProductPartitionNode<'_>,
    ad_group_id: i64,
) -> AdGroupCriterionOperation {
    let operand = BaseAdGroupCriterion::new()
        .set_ad_group_id(ad_group_id)
        .set_criterion(ProductPartition::new().set_id(node.partition_id()));
    AdGroupCriterionOperation::new(Operator::Remove, operand)
}

/// Creates the operation to add the criterion for `node`.
///
/// Excluded nodes become a negative criterion, without bids. Biddable nodes
/// become a biddable criterion using `bidding_config`, with a single
/// [CpcBid] if the node has a bid, or no bids if it does not.
pub fn create_criterion_for_add(
    node: ProductPartitionNode<'_>,
    ad_group_id: i64,
    bidding_config: &BiddingStrategyConfiguration,
) -> AdGroupCriterionOperation {
    let parent_id = node.parent().map(|p| p.partition_id());
    let operand = criterion(
        node,
        node.partition_id(),
        parent_id,
        ad_group_id,
        bidding_config,
    );
    AdGroupCriterionOperation::new(Operator::Add, operand)
}

/// Creates the operation to change the bid of `node`.
///
/// Returns [Error::InvalidArgument] if the node is excluded, excluded nodes
/// have no bids. Use [create_criterion_for_remove] and
/// [create_criterion_for_add] to change between biddable and excluded.
pub fn create_criterion_for_set_bid(
    node: ProductPartitionNode<'_>,
    ad_group_id: i64,
    bidding_config: &BiddingStrategyConfiguration,
) -> Result<AdGroupCriterionOperation> {
    if node.state().is_excluded() {
        return Err(Error::invalid_argument(format!(
            "cannot set the bid of excluded node {} (partition id {})",
            node.id(),
            node.partition_id()
        )));
    }
    let parent_id = node.parent().map(|p| p.partition_id());
    let operand = criterion(
        node,
        node.partition_id(),
        parent_id,
        ad_group_id,
        bidding_config,
    );
    Ok(AdGroupCriterionOperation::new(Operator::Set, operand))
}

/// Builds the `ADD` operation for `node` with explicit partition and parent ids.
///
/// Used when a node is re-created under new temporary ids.
pub(crate) fn create_criterion_for_add_with_ids(
    node: ProductPartitionNode<'_>,
    partition_id: i64,
    parent_id: Option<i64>,
    ad_group_id: i64,
    bidding_config: &BiddingStrategyConfiguration,
) -> AdGroupCriterionOperation {
    let operand = criterion(node, partition_id, parent_id, ad_group_id, bidding_config);
    AdGroupCriterionOperation::new(Operator::Add, operand)
}

fn criterion(
    node: ProductPartitionNode<'_>,
    partition_id: i64,
    parent_id: Option<i64>,
    ad_group_id: i64,
    bidding_config: &BiddingStrategyConfiguration,
) -> AdGroupCriterion {
    let partition = ProductPartition::new()
        .set_id(partition_id)
        .set_or_clear_parent_criterion_id(parent_id)
        .set_partition_type(node.partition_type())
        .set_or_clear_case_value(node.dimension().cloned());
    match node.state() {
        NodeState::Excluded => NegativeAdGroupCriterion::new()
            .set_ad_group_id(ad_group_id)
            .set_criterion(partition)
            .into(),
        NodeState::Biddable { bid } => {
            let bids =
                bid.map(|micros| CpcBid::new().set_bid(Money::new().set_micro_amount(micros)));
            let config = bidding_config.clone().set_bids(bids);
            BiddableAdGroupCriterion::new()
                .set_ad_group_id(ad_group_id)
                .set_criterion(partition)
                .set_bidding_strategy_configuration(config)
                .into()
        }
    }
}
