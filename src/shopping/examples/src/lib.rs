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

//! Samples for the product partition tree.
//!
//! Each sample builds or loads a tree for a Shopping ad group and prints the
//! result. Sending the operations to the `AdGroupCriterionService` is left to
//! the application.

pub mod add_product_partition_tree;
pub mod get_product_partition_tree;

/// Runs all the samples against `ad_group_id`.
pub fn run_samples(ad_group_id: i64) -> anyhow::Result<()> {
    let _guard = {
        use tracing_subscriber::fmt::format::FmtSpan;
        let subscriber = tracing_subscriber::fmt()
            .with_level(true)
            .with_thread_ids(true)
            .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
            .finish();

        tracing::subscriber::set_default(subscriber)
    };

    tracing::info!("running add_product_partition_tree::sample");
    let operations = add_product_partition_tree::sample(ad_group_id)?;
    tracing::info!("success with {} operations", operations.len());

    // Pretend the service accepted the operations, and assigned ids.
    let criteria = add_product_partition_tree::simulate_mutate(operations)?;
    tracing::info!("running get_product_partition_tree::sample");
    get_product_partition_tree::sample(ad_group_id, criteria)?;
    tracing::info!("success on get_product_partition_tree::sample");
    Ok(())
}
