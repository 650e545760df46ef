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

// [START adwords_get_product_partition_tree]
use google_ads_adwords_shopping::ProductPartitionTree;
use google_ads_adwords_shopping::model::AdGroupCriterion;

/// Loads the tree from the `ProductPartition` criteria of an ad group and
/// prints its outline.
///
/// Applications get `criteria` from `AdGroupCriterionService.get`, selecting
/// the `Id`, `ParentCriterionId`, `PartitionType`, `CaseValue`, and
/// `CpcBid` fields.
pub fn sample(ad_group_id: i64, criteria: Vec<AdGroupCriterion>) -> anyhow::Result<String> {
    let tree = ProductPartitionTree::builder(ad_group_id)
        .with_criteria(criteria)
        .build()?;
    let outline = tree.to_string();
    println!("{outline}");
    Ok(outline)
}
// [END adwords_get_product_partition_tree]
