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

// [START adwords_add_product_partition_tree]
use google_ads_adwords_shopping::ProductPartitionTree;
use google_ads_adwords_shopping::dimensions::{
    create_bidding_category, create_brand, create_canonical_condition,
};
use google_ads_adwords_shopping::model::{
    AdGroupCriterion, AdGroupCriterionOperation, BiddingStrategyConfiguration,
    BiddingStrategyType, CanonicalCondition, ProductDimensionType,
};

/// Builds the following tree and prints the operations to create it.
///
/// ```text
/// ProductPartition (root)
///   ProductCanonicalCondition(New)          $0.20
///   ProductCanonicalCondition(Used)         $0.10
///   ProductCanonicalCondition(OTHER)
///     ProductBrand("CoolBrand")             $0.90
///     ProductBrand("CheapBrand")            $0.01
///     ProductBrand(OTHER)
///       ProductBiddingCategory(L1, luggage) $0.75
///       ProductBiddingCategory(L1, OTHER)   excluded
/// ```
pub fn sample(ad_group_id: i64) -> anyhow::Result<Vec<AdGroupCriterionOperation>> {
    let config = BiddingStrategyConfiguration::new()
        .set_bidding_strategy_type(BiddingStrategyType::ManualCpc);
    let mut tree = ProductPartitionTree::builder(ad_group_id)
        .with_bidding_strategy_configuration(config)
        .build()?;

    let root = tree.root_id();
    let new = tree.add_child(root, create_canonical_condition(Some(CanonicalCondition::New)))?;
    tree.set_bid(new, Some(200_000))?;
    let used = tree.add_child(root, create_canonical_condition(Some(CanonicalCondition::Used)))?;
    tree.set_bid(used, Some(100_000))?;
    let other_condition = tree.add_child(root, create_canonical_condition(None))?;

    let cool = tree.add_child(other_condition, create_brand(Some("CoolBrand")))?;
    tree.set_bid(cool, Some(900_000))?;
    let cheap = tree.add_child(other_condition, create_brand(Some("CheapBrand")))?;
    tree.set_bid(cheap, Some(10_000))?;
    let other_brand = tree.add_child(other_condition, create_brand(None))?;

    let luggage = tree.add_child(
        other_brand,
        create_bidding_category(ProductDimensionType::BiddingCategoryL1, Some(LUGGAGE)),
    )?;
    tree.set_bid(luggage, Some(750_000))?;
    let other_category = tree.add_child(
        other_brand,
        create_bidding_category(ProductDimensionType::BiddingCategoryL1, None),
    )?;
    tree.as_excluded_unit(other_category)?;

    println!("{tree}");
    let operations = tree.mutate_operations()?;
    println!("{}", serde_json::to_string_pretty(&operations)?);
    Ok(operations)
}
// [END adwords_add_product_partition_tree]

/// The bidding category for luggage and bags.
pub const LUGGAGE: i64 = -5914235892932915235;

/// Applies `ADD` operations the way the service would, replacing each
/// temporary id with a positive id.
pub fn simulate_mutate(
    operations: Vec<AdGroupCriterionOperation>,
) -> anyhow::Result<Vec<AdGroupCriterion>> {
    let mut ids = std::collections::HashMap::new();
    let mut criteria = Vec::new();
    for operation in operations {
        let partition = operation
            .operand
            .product_partition()
            .ok_or_else(|| anyhow::anyhow!("expected a product partition in {operation:?}"))?;
        let temporary_id = partition
            .id
            .ok_or_else(|| anyhow::anyhow!("missing partition id in {operation:?}"))?;
        let id = 1_000 + criteria.len() as i64;
        ids.insert(temporary_id, id);
        let parent = partition
            .parent_criterion_id
            .map(|p| ids.get(&p).copied().unwrap_or(p));
        let partition = partition
            .clone()
            .set_id(id)
            .set_or_clear_parent_criterion_id(parent);
        let criterion: AdGroupCriterion = match operation.operand {
            AdGroupCriterion::Biddable(c) => c.set_criterion(partition).into(),
            AdGroupCriterion::Negative(c) => c.set_criterion(partition).into(),
            other => anyhow::bail!("only ADD operations are supported, got {other:?}"),
        };
        criteria.push(criterion);
    }
    Ok(criteria)
}
