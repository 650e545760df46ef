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

use crate::ProductDimensionComparator;
use crate::tree::ProductPartitionTree;
use cm::model::{ProductDimension, ProductPartitionType};
use std::collections::BTreeMap;

/// A handle to a node in a [ProductPartitionTree].
///
/// Handles are only meaningful for the tree that created them. They remain
/// valid until the node is removed, and are never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Whether a node bids on the products it matches or excludes them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeState {
    /// The node is biddable. Units without a bid, and all subdivisions, use
    /// the bid inherited from the ad group.
    Biddable {
        /// The cost-per-click bid in micros.
        bid: Option<i64>,
    },
    /// The matching products are excluded. Excluded nodes have no bid and no
    /// children.
    Excluded,
}

impl NodeState {
    /// Returns true for [NodeState::Excluded].
    pub fn is_excluded(&self) -> bool {
        matches!(self, Self::Excluded)
    }

    /// The bid in micros, `None` if there is no bid or the node is excluded.
    pub fn bid(&self) -> Option<i64> {
        match self {
            Self::Biddable { bid } => *bid,
            Self::Excluded => None,
        }
    }
}

// Orders sibling dimensions with `ProductDimensionComparator`.
#[derive(Clone, Debug)]
pub(crate) struct DimensionKey(pub(crate) ProductDimension);

impl PartialEq for DimensionKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for DimensionKey {}

impl PartialOrd for DimensionKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DimensionKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        ProductDimensionComparator::compare(Some(&self.0), Some(&other.0))
    }
}

/// The data stored for each node in the tree arena.
#[derive(Clone, Debug)]
pub(crate) struct NodeData {
    pub(crate) partition_id: i64,
    pub(crate) parent: Option<NodeId>,
    pub(crate) dimension: Option<ProductDimension>,
    pub(crate) state: NodeState,
    pub(crate) children: BTreeMap<DimensionKey, NodeId>,
}

impl NodeData {
    pub(crate) fn new(
        partition_id: i64,
        parent: Option<NodeId>,
        dimension: Option<ProductDimension>,
    ) -> Self {
        Self {
            partition_id,
            parent,
            dimension,
            state: NodeState::Biddable { bid: None },
            children: BTreeMap::new(),
        }
    }

    pub(crate) fn partition_type(&self) -> ProductPartitionType {
        if self.children.is_empty() {
            ProductPartitionType::Unit
        } else {
            ProductPartitionType::Subdivision
        }
    }
}

/// A read-only view of one node in a [ProductPartitionTree].
///
/// The view borrows the tree, which lets it navigate to the parent and the
/// children of the node. Use the methods in [ProductPartitionTree] to modify
/// the node.
#[derive(Clone, Copy)]
pub struct ProductPartitionNode<'a> {
    pub(crate) tree: &'a ProductPartitionTree,
    pub(crate) id: NodeId,
    pub(crate) data: &'a NodeData,
}

impl<'a> ProductPartitionNode<'a> {
    /// The handle for this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The criterion id of the partition.
    ///
    /// Nodes that do not exist in the service yet have negative, temporary
    /// ids assigned by the tree.
    pub fn partition_id(&self) -> i64 {
        self.data.partition_id
    }

    /// The dimension matched by this node, `None` for the root.
    pub fn dimension(&self) -> Option<&'a ProductDimension> {
        self.data.dimension.as_ref()
    }

    /// Whether the node is biddable or excluded.
    pub fn state(&self) -> NodeState {
        self.data.state
    }

    /// The bid in micros. Always `None` for excluded nodes.
    pub fn bid(&self) -> Option<i64> {
        self.data.state.bid()
    }

    /// The parent node, `None` for the root.
    pub fn parent(&self) -> Option<ProductPartitionNode<'a>> {
        self.data.parent.and_then(|id| self.tree.node(id))
    }

    /// The children of this node, in [ProductDimensionComparator] order.
    pub fn children(self) -> impl Iterator<Item = ProductPartitionNode<'a>> {
        let tree = self.tree;
        self.data.children.values().filter_map(move |id| tree.node(*id))
    }

    /// The child matching `dimension`, if any.
    pub fn child(&self, dimension: &ProductDimension) -> Option<ProductPartitionNode<'a>> {
        self.data
            .children
            .get(&DimensionKey(dimension.clone()))
            .and_then(|id| self.tree.node(*id))
    }

    pub fn has_children(&self) -> bool {
        !self.data.children.is_empty()
    }

    /// `Subdivision` if the node has children, `Unit` otherwise.
    pub fn partition_type(&self) -> ProductPartitionType {
        self.data.partition_type()
    }

    pub fn is_root(&self) -> bool {
        self.data.parent.is_none()
    }

    pub fn is_unit(&self) -> bool {
        !self.has_children()
    }

    pub fn is_subdivision(&self) -> bool {
        self.has_children()
    }

    pub fn is_biddable_unit(&self) -> bool {
        self.is_unit() && !self.data.state.is_excluded()
    }

    pub fn is_excluded_unit(&self) -> bool {
        self.data.state.is_excluded()
    }
}

impl std::fmt::Debug for ProductPartitionNode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("ProductPartitionNode");
        debug_struct.field("id", &self.id);
        debug_struct.field("partition_id", &self.data.partition_id);
        debug_struct.field("dimension", &self.data.dimension);
        debug_struct.field("state", &self.data.state);
        debug_struct.field("children", &self.data.children.len());
        debug_struct.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimensions::create_brand;

    #[test]
    fn state() {
        let biddable = NodeState::Biddable { bid: Some(10) };
        assert!(!biddable.is_excluded());
        assert_eq!(biddable.bid(), Some(10));
        assert!(NodeState::Excluded.is_excluded());
        assert_eq!(NodeState::Excluded.bid(), None);
    }

    #[test]
    fn dimension_key_uses_comparator() {
        let a = DimensionKey(create_brand(Some("a")));
        let b = DimensionKey(create_brand(Some("b")));
        let other = DimensionKey(create_brand(None));
        assert!(a < b);
        assert!(b < other);
        assert_eq!(a, DimensionKey(create_brand(Some("a"))));
    }

    #[test]
    fn partition_type() {
        let mut data = NodeData::new(-1, None, None);
        assert_eq!(data.partition_type(), ProductPartitionType::Unit);
        data.children.insert(DimensionKey(create_brand(None)), NodeId(1));
        assert_eq!(data.partition_type(), ProductPartitionType::Subdivision);
    }

    #[test]
    fn display_id() {
        assert_eq!(NodeId(7).to_string(), "#7");
    }
}
