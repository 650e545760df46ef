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

//! Product partition trees for AdWords Shopping campaigns.
//!
//! **WARNING:** this crate is under active development. We expect multiple
//! breaking changes in the upcoming releases.
//!
//! The product partitions of a Shopping ad group form a tree. Each node
//! narrows the products matched by its parent using a [ProductDimension]
//! (brand, condition, product type, and so on). The leaves either carry a bid
//! or exclude the matching products.
//!
//! This crate lets applications load the tree from the existing criteria,
//! edit it, and compute the `AdGroupCriterionService` operations that apply
//! the changes. It does not send any requests.
//!
//! # Example
//! ```
//! # use google_ads_adwords_shopping::{Result, ProductPartitionTree, dimensions};
//! # use google_ads_adwords_shopping::model::CanonicalCondition;
//! # fn main() -> Result<()> {
//! let mut tree = ProductPartitionTree::builder(123).build()?;
//! let root = tree.root_id();
//! let condition = dimensions::create_canonical_condition(Some(CanonicalCondition::Used));
//! let used = tree.add_child(root, condition)?;
//! tree.set_bid(used, Some(100_000))?;
//! tree.add_child(root, dimensions::create_canonical_condition(None))?;
//!
//! for operation in tree.mutate_operations()? {
//!     println!("{operation:?}");
//! }
//! # Ok(()) }
//! ```
//!
//! [ProductDimension]: model::ProductDimension

pub mod adapter;
mod comparator;
pub mod dimensions;
mod error;
mod mutate;
mod node;
mod tree;

/// The criterion types produced and consumed by this crate.
pub use cm::model;

pub use comparator::ProductDimensionComparator;
pub use error::{Error, Result};
pub use node::{NodeId, NodeState, ProductPartitionNode};
pub use tree::{ProductPartitionTree, ProductPartitionTreeBuilder};

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(ProductPartitionTree: Send, Sync, Clone, std::fmt::Debug);
    assert_impl_all!(ProductPartitionNode<'static>: Send, Sync, Copy);
    assert_impl_all!(Error: Send, Sync, std::error::Error);
}
