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

use crate::{Error, Result};
use crate::adapter::{
    create_criterion_for_add_with_ids, create_criterion_for_remove, create_criterion_for_set_bid,
};
use crate::node::{NodeData, ProductPartitionNode};
use crate::tree::{Arena, ProductPartitionTree};
use cm::model::AdGroupCriterionOperation;

impl ProductPartitionTree {
    /// Returns the operations that change the partitions loaded from the
    /// service into the current state of the tree.
    ///
    /// All the `REMOVE` operations come first, followed by the `ADD` and `SET`
    /// operations in parent-first order. Removing a node removes its subtree
    /// in the service, so only the topmost removed node appears in the
    /// operations. Nodes that changed between unit and subdivision, or between
    /// biddable and excluded, cannot be updated in place. They are removed and
    /// added again under a new temporary id.
    ///
    /// The tree is not modified, calling this function twice returns the same
    /// operations. Once the operations succeed, rebuild the tree from the
    /// criteria in the service to pick up the assigned partition ids.
    #[tracing::instrument(level = "debug", skip(self), fields(ad_group_id = self.ad_group_id()))]
    pub fn mutate_operations(&self) -> Result<Vec<AdGroupCriterionOperation>> {
        let mut diff = Diff {
            tree: self,
            original: self.original.as_ref(),
            next_temporary_id: self.next_temporary_id,
            removes: Vec::new(),
            updates: Vec::new(),
        };
        diff.visit(self.root(), None)?;
        tracing::debug!(
            "computed {} REMOVE and {} ADD or SET operations",
            diff.removes.len(),
            diff.updates.len()
        );
        let mut operations = diff.removes;
        operations.extend(diff.updates);
        Ok(operations)
    }
}

struct Diff<'a> {
    tree: &'a ProductPartitionTree,
    original: Option<&'a Arena>,
    next_temporary_id: i64,
    removes: Vec<AdGroupCriterionOperation>,
    updates: Vec<AdGroupCriterionOperation>,
}

impl<'a> Diff<'a> {
    // `parent_id` is the partition id of the parent in the operations, which
    // differs from its current id if the parent was replaced.
    fn visit(&mut self, node: ProductPartitionNode<'a>, parent_id: Option<i64>) -> Result<()> {
        let tree = self.tree;
        let ad_group_id = tree.ad_group_id();
        let config = tree.bidding_strategy_configuration();
        let Some(original) = self.original.and_then(|o| o.get(node.id())) else {
            self.updates.push(create_criterion_for_add_with_ids(
                node,
                node.partition_id(),
                parent_id,
                ad_group_id,
                config,
            ));
            return self.visit_children(node, node.partition_id());
        };

        if must_replace(original, node) {
            let partition_id = self.allocate_temporary_id()?;
            tracing::debug!(
                "replacing partition {} with {partition_id}",
                node.partition_id()
            );
            self.removes
                .push(create_criterion_for_remove(node, ad_group_id));
            self.updates.push(create_criterion_for_add_with_ids(
                node,
                partition_id,
                parent_id,
                ad_group_id,
                config,
            ));
            // Any original children were removed together with the node.
            return self.visit_children(node, partition_id);
        }

        if node.is_biddable_unit() && original.state.bid() != node.bid() {
            self.updates
                .push(create_criterion_for_set_bid(node, ad_group_id, config)?);
        }
        if let Some(arena) = self.original {
            let removed = original
                .children
                .values()
                .filter(|id| tree.node(**id).is_none())
                .filter_map(|id| arena.get(*id).map(|data| (*id, data)));
            for (id, data) in removed {
                let node = ProductPartitionNode { tree, id, data };
                self.removes
                    .push(create_criterion_for_remove(node, ad_group_id));
            }
        }
        self.visit_children(node, node.partition_id())
    }

    fn allocate_temporary_id(&mut self) -> Result<i64> {
        let id = self.next_temporary_id;
        self.next_temporary_id = id.checked_sub(1).ok_or_else(|| {
            Error::invalid_state(format!("ran out of temporary ids at {id}"))
        })?;
        Ok(id)
    }

    fn visit_children(&mut self, node: ProductPartitionNode<'a>, partition_id: i64) -> Result<()> {
        for child in node.children() {
            self.visit(child, Some(partition_id))?;
        }
        Ok(())
    }
}

fn must_replace(original: &NodeData, node: ProductPartitionNode<'_>) -> bool {
    original.partition_type() != node.partition_type()
        || original.state.is_excluded() != node.state().is_excluded()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimensions::*;
    use cm::model::{
        AdGroupCriterion, BiddableAdGroupCriterion, BiddingStrategyConfiguration,
        CanonicalCondition, CpcBid, Money, NegativeAdGroupCriterion, Operator, ProductDimension,
        ProductPartition, ProductPartitionType,
    };
    use pretty_assertions::assert_eq;

    const AD_GROUP_ID: i64 = 100;

    fn biddable(
        id: i64,
        parent: Option<i64>,
        dimension: Option<ProductDimension>,
        bid: Option<i64>,
    ) -> AdGroupCriterion {
        let config = BiddingStrategyConfiguration::new()
            .set_bids(bid.map(|b| CpcBid::new().set_bid(Money::new().set_micro_amount(b))));
        BiddableAdGroupCriterion::new()
            .set_ad_group_id(AD_GROUP_ID)
            .set_criterion(
                ProductPartition::new()
                    .set_id(id)
                    .set_or_clear_parent_criterion_id(parent)
                    .set_or_clear_case_value(dimension),
            )
            .set_bidding_strategy_configuration(config)
            .into()
    }

    fn negative(id: i64, parent: i64, dimension: ProductDimension) -> AdGroupCriterion {
        NegativeAdGroupCriterion::new()
            .set_ad_group_id(AD_GROUP_ID)
            .set_criterion(
                ProductPartition::new()
                    .set_id(id)
                    .set_parent_criterion_id(parent)
                    .set_case_value(dimension),
            )
            .into()
    }

    // root(1) -> { new(2): 200_000, used(3) -> { acme(5): 10, other(6) }, other(4): excluded }
    fn loaded() -> Result<ProductPartitionTree> {
        let condition = create_canonical_condition;
        ProductPartitionTree::builder(AD_GROUP_ID)
            .with_criteria([
                biddable(1, None, None, None),
                biddable(2, Some(1), Some(condition(Some(CanonicalCondition::New))), Some(200_000)),
                biddable(3, Some(1), Some(condition(Some(CanonicalCondition::Used))), None),
                negative(4, 1, condition(None)),
                biddable(5, Some(3), Some(create_brand(Some("acme"))), Some(10)),
                biddable(6, Some(3), Some(create_brand(None)), None),
            ])
            .build()
    }

    // (operator, partition id, parent id, partition type)
    type Summary = (Operator, Option<i64>, Option<i64>, Option<ProductPartitionType>);

    fn summarize(operations: &[AdGroupCriterionOperation]) -> Vec<Summary> {
        operations
            .iter()
            .map(|o| {
                let p = o.operand.product_partition();
                (
                    o.operator,
                    p.and_then(|p| p.id),
                    p.and_then(|p| p.parent_criterion_id),
                    p.and_then(|p| p.partition_type),
                )
            })
            .collect()
    }

    #[test]
    fn new_tree_adds_every_node() -> Result<()> {
        let mut tree = ProductPartitionTree::builder(AD_GROUP_ID).build()?;
        let root = tree.root_id();
        let other = tree.add_child(root, create_canonical_condition(None))?;
        let new = tree.add_child(root, create_canonical_condition(Some(CanonicalCondition::New)))?;
        tree.set_bid(new, Some(1_000))?;
        tree.add_child(other, create_brand(Some("acme")))?;
        let other_brand = tree.add_child(other, create_brand(None))?;
        tree.as_excluded_unit(other_brand)?;

        let operations = tree.mutate_operations()?;
        use Operator::Add;
        use ProductPartitionType::{Subdivision, Unit};
        assert_eq!(
            summarize(&operations),
            vec![
                (Add, Some(-1), None, Some(Subdivision)),
                (Add, Some(-3), Some(-1), Some(Unit)),
                (Add, Some(-2), Some(-1), Some(Subdivision)),
                (Add, Some(-4), Some(-2), Some(Unit)),
                (Add, Some(-5), Some(-2), Some(Unit)),
            ]
        );
        assert!(operations[4].operand.negative().is_some(), "{:?}", operations[4]);
        Ok(())
    }

    #[test]
    fn new_root_only() -> Result<()> {
        let tree = ProductPartitionTree::builder(AD_GROUP_ID).build()?;
        let operations = tree.mutate_operations()?;
        assert_eq!(
            summarize(&operations),
            vec![(Operator::Add, Some(-1), None, Some(ProductPartitionType::Unit))]
        );
        Ok(())
    }

    #[test]
    fn unchanged() -> Result<()> {
        let tree = loaded()?;
        assert_eq!(tree.mutate_operations()?, Vec::new());
        Ok(())
    }

    #[test]
    fn bid_changes() -> Result<()> {
        let mut tree = loaded()?;
        let root = tree.root_id();
        let new = tree
            .child(root, &create_canonical_condition(Some(CanonicalCondition::New)))
            .expect("new exists");
        tree.set_bid(new, Some(300_000))?;
        let used = tree
            .child(root, &create_canonical_condition(Some(CanonicalCondition::Used)))
            .expect("used exists");
        let acme = tree.child(used, &create_brand(Some("acme"))).expect("acme exists");
        tree.set_bid(acme, None)?;

        let operations = tree.mutate_operations()?;
        use Operator::Set;
        use ProductPartitionType::Unit;
        assert_eq!(
            summarize(&operations),
            vec![
                (Set, Some(2), Some(1), Some(Unit)),
                (Set, Some(5), Some(3), Some(Unit)),
            ]
        );
        let bids = |o: &AdGroupCriterionOperation| {
            o.operand
                .biddable()
                .and_then(|c| c.bidding_strategy_configuration.as_ref())
                .map(|c| c.bids.iter().filter_map(|b| b.cpc_micro_amount()).collect::<Vec<_>>())
        };
        assert_eq!(bids(&operations[0]), Some(vec![300_000]));
        assert_eq!(bids(&operations[1]), Some(Vec::new()));
        Ok(())
    }

    #[test]
    fn removes_topmost_only() -> Result<()> {
        let mut tree = loaded()?;
        let root = tree.root_id();
        tree.remove_child(root, &create_canonical_condition(Some(CanonicalCondition::Used)))?;
        let operations = tree.mutate_operations()?;
        assert_eq!(
            summarize(&operations),
            vec![(Operator::Remove, Some(3), None, None)]
        );
        Ok(())
    }

    #[test]
    fn unit_becomes_subdivision() -> Result<()> {
        let mut tree = loaded()?;
        let root = tree.root_id();
        let new = tree
            .child(root, &create_canonical_condition(Some(CanonicalCondition::New)))
            .expect("new exists");
        tree.add_child(new, create_brand(Some("acme")))?;
        tree.add_child(new, create_brand(None))?;

        let operations = tree.mutate_operations()?;
        use Operator::{Add, Remove};
        use ProductPartitionType::{Subdivision, Unit};
        assert_eq!(
            summarize(&operations),
            vec![
                (Remove, Some(2), None, None),
                (Add, Some(-3), Some(1), Some(Subdivision)),
                (Add, Some(-1), Some(-3), Some(Unit)),
                (Add, Some(-2), Some(-3), Some(Unit)),
            ]
        );
        Ok(())
    }

    #[test]
    fn subdivision_becomes_excluded() -> Result<()> {
        let mut tree = loaded()?;
        let root = tree.root_id();
        let used = tree
            .child(root, &create_canonical_condition(Some(CanonicalCondition::Used)))
            .expect("used exists");
        tree.as_excluded_unit(used)?;

        let operations = tree.mutate_operations()?;
        use Operator::{Add, Remove};
        assert_eq!(
            summarize(&operations),
            vec![
                (Remove, Some(3), None, None),
                (Add, Some(-1), Some(1), Some(ProductPartitionType::Unit)),
            ]
        );
        assert!(operations[1].operand.negative().is_some(), "{:?}", operations[1]);
        Ok(())
    }

    #[test]
    fn excluded_becomes_biddable() -> Result<()> {
        let mut tree = loaded()?;
        let root = tree.root_id();
        let other = tree
            .child(root, &create_canonical_condition(None))
            .expect("other exists");
        tree.as_biddable_unit(other)?;
        tree.set_bid(other, Some(50))?;

        let operations = tree.mutate_operations()?;
        use Operator::{Add, Remove};
        assert_eq!(
            summarize(&operations),
            vec![
                (Remove, Some(4), None, None),
                (Add, Some(-1), Some(1), Some(ProductPartitionType::Unit)),
            ]
        );
        assert!(operations[1].operand.biddable().is_some(), "{:?}", operations[1]);
        Ok(())
    }

    #[test]
    fn removed_and_added_again() -> Result<()> {
        let mut tree = loaded()?;
        let root = tree.root_id();
        let dimension = create_canonical_condition(Some(CanonicalCondition::New));
        tree.remove_child(root, &dimension)?;
        let new = tree.add_child(root, dimension)?;
        tree.set_bid(new, Some(1))?;

        let operations = tree.mutate_operations()?;
        use Operator::{Add, Remove};
        assert_eq!(
            summarize(&operations),
            vec![
                (Remove, Some(2), None, None),
                (Add, Some(-1), Some(1), Some(ProductPartitionType::Unit)),
            ]
        );
        Ok(())
    }

    #[test]
    fn does_not_modify_tree() -> Result<()> {
        let mut tree = loaded()?;
        let root = tree.root_id();
        tree.as_biddable_unit(root)?;
        let first = tree.mutate_operations()?;
        let second = tree.mutate_operations()?;
        assert_eq!(first, second);
        assert_eq!(
            summarize(&first),
            vec![
                (Operator::Remove, Some(1), None, None),
                (Operator::Add, Some(-1), None, Some(ProductPartitionType::Unit)),
            ]
        );
        Ok(())
    }

    #[test]
    fn wire_format() -> anyhow::Result<()> {
        let mut tree = loaded()?;
        let root = tree.root_id();
        let other = tree
            .child(root, &create_canonical_condition(None))
            .expect("other exists");
        tree.as_biddable_unit(other)?;

        let got = serde_json::to_value(tree.mutate_operations()?)?;
        let want = serde_json::json!([
            {
                "operator": "REMOVE",
                "operand": {
                    "AdGroupCriterion.Type": "AdGroupCriterion",
                    "adGroupId": "100",
                    "criterion": { "Criterion.Type": "ProductPartition", "id": "4" }
                }
            },
            {
                "operator": "ADD",
                "operand": {
                    "AdGroupCriterion.Type": "BiddableAdGroupCriterion",
                    "adGroupId": "100",
                    "criterion": {
                        "Criterion.Type": "ProductPartition",
                        "id": "-1",
                        "partitionType": "UNIT",
                        "parentCriterionId": "1",
                        "caseValue": { "ProductDimension.Type": "ProductCanonicalCondition" }
                    },
                    "biddingStrategyConfiguration": { "bids": [] }
                }
            }
        ]);
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn replaced_node_with_nested_children() -> Result<()> {
        let mut tree = loaded()?;
        let root = tree.root_id();
        let new = tree
            .child(root, &create_canonical_condition(Some(CanonicalCondition::New)))
            .expect("new exists");
        let acme = tree.add_child(new, create_brand(Some("acme")))?;
        tree.add_child(new, create_brand(None))?;
        let offer = tree.add_child(acme, create_offer_id(Some("sku-1")))?;
        tree.set_bid(offer, Some(5))?;
        tree.add_child(acme, create_offer_id(None))?;

        let operations = tree.mutate_operations()?;
        use Operator::{Add, Remove};
        use ProductPartitionType::{Subdivision, Unit};
        assert_eq!(
            summarize(&operations),
            vec![
                (Remove, Some(2), None, None),
                (Add, Some(-5), Some(1), Some(Subdivision)),
                (Add, Some(-1), Some(-5), Some(Subdivision)),
                (Add, Some(-3), Some(-1), Some(Unit)),
                (Add, Some(-4), Some(-1), Some(Unit)),
                (Add, Some(-2), Some(-5), Some(Unit)),
            ]
        );

        let removed: Vec<i64> = operations
            .iter()
            .filter(|o| o.operator == Remove)
            .filter_map(|o| o.operand.product_partition().and_then(|p| p.id))
            .collect();
        let mut added = Vec::new();
        for operation in operations.iter().filter(|o| o.operator == Add) {
            let partition = operation.operand.product_partition().expect("partition");
            if let Some(parent) = partition.parent_criterion_id {
                assert!(!removed.contains(&parent), "{operation:?}");
                assert!(parent > 0 || added.contains(&parent), "{operation:?}");
            }
            added.extend(partition.id);
        }
        Ok(())
    }

    #[test]
    fn temporary_ids_exhausted() -> Result<()> {
        let mut tree = ProductPartitionTree::builder(AD_GROUP_ID)
            .with_criteria([
                biddable(1, None, None, None),
                biddable(2, Some(1), Some(create_brand(None)), None),
            ])
            .with_next_temporary_id(i64::MIN)
            .build()?;
        let root = tree.root_id();
        tree.as_biddable_unit(root)?;
        let err = tree.mutate_operations().unwrap_err();
        assert!(err.is_invalid_state(), "{err:?}");
        Ok(())
    }
}
