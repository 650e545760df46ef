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
use crate::dimensions::describe;
use crate::node::{DimensionKey, NodeData, NodeId, NodeState, ProductPartitionNode};
use crate::{Error, Result};
use cm::model::{AdGroupCriterion, BiddingStrategyConfiguration, ProductDimension};
use std::collections::{HashMap, HashSet, VecDeque};

/// The nodes of a tree, indexed by [NodeId].
///
/// Removed nodes leave an empty slot, so handles are never reused.
#[derive(Clone, Debug)]
pub(crate) struct Arena {
    pub(crate) nodes: Vec<Option<NodeData>>,
    pub(crate) root: NodeId,
}

impl Arena {
    fn with_root(root: NodeData) -> Self {
        Self {
            nodes: vec![Some(root)],
            root: NodeId(0),
        }
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    fn get_mut(&mut self, id: NodeId) -> Result<&mut NodeData> {
        self.nodes
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or(Error::NodeNotFound(id))
    }

    fn insert(&mut self, data: NodeData) -> NodeId {
        self.nodes.push(Some(data));
        NodeId(self.nodes.len() - 1)
    }

    // Removes the descendants of `id`, but not `id` itself.
    fn clear_children(&mut self, id: NodeId) -> Result<()> {
        let children = std::mem::take(&mut self.get_mut(id)?.children);
        let mut pending: Vec<NodeId> = children.into_values().collect();
        while let Some(next) = pending.pop() {
            if let Some(data) = self.nodes.get_mut(next.0).and_then(Option::take) {
                pending.extend(data.children.into_values());
            }
        }
        Ok(())
    }
}

/// The product partition tree of a Shopping ad group.
///
/// The tree owns its nodes. Applications refer to nodes using [NodeId]
/// handles, and read them via [ProductPartitionNode] views. A tree remembers
/// the state it was built from, which is the state of the partitions in the
/// service. [mutate_operations][ProductPartitionTree::mutate_operations]
/// returns the operations to change the service state into the current state
/// of the tree.
///
/// # Example
/// ```
/// # use google_ads_adwords_shopping::{Result, ProductPartitionTree, dimensions};
/// # use google_ads_adwords_shopping::model::CanonicalCondition;
/// # fn main() -> Result<()> {
/// let mut tree = ProductPartitionTree::builder(123).build()?;
/// let root = tree.root_id();
/// let condition = dimensions::create_canonical_condition(Some(CanonicalCondition::New));
/// let new = tree.add_child(root, condition)?;
/// tree.set_bid(new, Some(200_000))?;
/// let other = tree.add_child(root, dimensions::create_canonical_condition(None))?;
/// tree.as_excluded_unit(other)?;
///
/// let operations = tree.mutate_operations()?;
/// assert_eq!(operations.len(), 3);
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct ProductPartitionTree {
    ad_group_id: i64,
    bidding_strategy_configuration: BiddingStrategyConfiguration,
    pub(crate) current: Arena,
    // `None` if the ad group had no partitions when the tree was built.
    pub(crate) original: Option<Arena>,
    pub(crate) next_temporary_id: i64,
}

impl ProductPartitionTree {
    /// Returns a builder for a tree in the given ad group.
    pub fn builder(ad_group_id: i64) -> ProductPartitionTreeBuilder {
        ProductPartitionTreeBuilder::new(ad_group_id)
    }

    pub fn ad_group_id(&self) -> i64 {
        self.ad_group_id
    }

    /// The bidding configuration used for biddable `ADD` and `SET` operations.
    pub fn bidding_strategy_configuration(&self) -> &BiddingStrategyConfiguration {
        &self.bidding_strategy_configuration
    }

    pub fn root_id(&self) -> NodeId {
        self.current.root
    }

    pub fn root(&self) -> ProductPartitionNode<'_> {
        let id = self.current.root;
        // The root slot is never emptied.
        self.node(id).unwrap_or_else(|| unreachable!("missing root node {id}"))
    }

    /// Returns a view of the node, or `None` if it is not part of the tree.
    pub fn node(&self, id: NodeId) -> Option<ProductPartitionNode<'_>> {
        self.current.get(id).map(|data| ProductPartitionNode {
            tree: self,
            id,
            data,
        })
    }

    /// Returns the child of `parent` matching `dimension`.
    pub fn child(&self, parent: NodeId, dimension: &ProductDimension) -> Option<NodeId> {
        self.current
            .get(parent)?
            .children
            .get(&DimensionKey(dimension.clone()))
            .copied()
    }

    /// Adds a biddable child, without a bid, to `parent`.
    ///
    /// The parent becomes a subdivision, any bid it had is cleared. The new
    /// node gets a temporary partition id.
    ///
    /// Fails if the parent is excluded, if a sibling already matches the same
    /// dimension, or if the siblings use a different dimension type.
    pub fn add_child(&mut self, parent: NodeId, dimension: ProductDimension) -> Result<NodeId> {
        let data = self.current.get(parent).ok_or(Error::NodeNotFound(parent))?;
        if data.state.is_excluded() {
            return Err(Error::invalid_state(format!(
                "cannot add children to excluded node {parent}"
            )));
        }
        let key = DimensionKey(dimension);
        if data.children.contains_key(&key) {
            return Err(Error::invalid_argument(format!(
                "node {parent} already has a child for {}",
                describe(Some(&key.0))
            )));
        }
        if let Some(sibling) = data.children.keys().next() {
            if !ProductDimensionComparator::same_type(&sibling.0, &key.0) {
                return Err(Error::invalid_argument(format!(
                    "{} does not match the dimension type of its siblings {}",
                    describe(Some(&key.0)),
                    describe(Some(&sibling.0))
                )));
            }
        }

        let partition_id = self.allocate_temporary_id()?;
        let id = self
            .current
            .insert(NodeData::new(partition_id, Some(parent), Some(key.0.clone())));
        let data = self.current.get_mut(parent)?;
        data.state = NodeState::Biddable { bid: None };
        data.children.insert(key, id);
        tracing::debug!(
            "added node {id} with partition id {partition_id} under {parent}: {}",
            describe(self.current.get(id).and_then(|d| d.dimension.as_ref()))
        );
        Ok(id)
    }

    /// Removes the child of `parent` matching `dimension`, and all its descendants.
    pub fn remove_child(&mut self, parent: NodeId, dimension: &ProductDimension) -> Result<()> {
        let key = DimensionKey(dimension.clone());
        let data = self.current.get_mut(parent)?;
        let Some(child) = data.children.remove(&key) else {
            return Err(Error::invalid_argument(format!(
                "node {parent} has no child for {}",
                describe(Some(dimension))
            )));
        };
        self.current.clear_children(child)?;
        self.current.nodes[child.0] = None;
        tracing::debug!(
            "removed node {child} under {parent}: {}",
            describe(Some(dimension))
        );
        Ok(())
    }

    /// Sets or clears the bid of a biddable unit.
    ///
    /// Excluded nodes and subdivisions cannot have bids.
    pub fn set_bid(&mut self, id: NodeId, bid: Option<i64>) -> Result<()> {
        let data = self.current.get_mut(id)?;
        if data.state.is_excluded() {
            return Err(Error::invalid_state(format!(
                "cannot set the bid of excluded node {id}"
            )));
        }
        if !data.children.is_empty() && bid.is_some() {
            return Err(Error::invalid_state(format!(
                "cannot set the bid of subdivision {id}"
            )));
        }
        data.state = NodeState::Biddable { bid };
        Ok(())
    }

    /// Changes the node into a biddable unit.
    ///
    /// The descendants of the node are removed. A biddable unit keeps its bid.
    pub fn as_biddable_unit(&mut self, id: NodeId) -> Result<()> {
        self.current.clear_children(id)?;
        let data = self.current.get_mut(id)?;
        if data.state.is_excluded() {
            data.state = NodeState::Biddable { bid: None };
        }
        Ok(())
    }

    /// Changes the node into an excluded unit.
    ///
    /// The descendants of the node are removed, and any bid is cleared.
    pub fn as_excluded_unit(&mut self, id: NodeId) -> Result<()> {
        self.current.clear_children(id)?;
        self.current.get_mut(id)?.state = NodeState::Excluded;
        Ok(())
    }

    /// Changes the node into a biddable node without a bid, ready to receive children.
    ///
    /// The node remains a unit until a child is added.
    pub fn as_subdivision(&mut self, id: NodeId) -> Result<()> {
        self.current.get_mut(id)?.state = NodeState::Biddable { bid: None };
        Ok(())
    }

    fn allocate_temporary_id(&mut self) -> Result<i64> {
        let id = self.next_temporary_id;
        self.next_temporary_id = id.checked_sub(1).ok_or_else(|| {
            Error::invalid_state(format!("ran out of temporary ids at {id}"))
        })?;
        Ok(id)
    }
}

impl std::fmt::Display for ProductPartitionTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "ProductPartitionTree(ad_group_id={})", self.ad_group_id)?;
        let mut pending = vec![(self.root(), 0_usize)];
        while let Some((node, depth)) = pending.pop() {
            write!(
                f,
                "{:indent$}id: {}, type: {:?}, dimension: {}",
                "",
                node.partition_id(),
                node.partition_type(),
                describe(node.dimension()),
                indent = depth * 2
            )?;
            match node.state() {
                NodeState::Excluded => write!(f, ", excluded")?,
                NodeState::Biddable { bid: Some(bid) } => write!(f, ", bid: {bid}")?,
                NodeState::Biddable { bid: None } => {}
            }
            writeln!(f)?;
            let children: Vec<_> = node.children().collect();
            pending.extend(children.into_iter().rev().map(|c| (c, depth + 1)));
        }
        Ok(())
    }
}

/// Configures and creates a [ProductPartitionTree].
///
/// # Example
/// ```
/// # use google_ads_adwords_shopping::{Result, ProductPartitionTree};
/// # use google_ads_adwords_shopping::model::{AdGroupCriterion, BiddingStrategyConfiguration, BiddingStrategyType};
/// # fn main() -> Result<()> {
/// let config = BiddingStrategyConfiguration::new()
///     .set_bidding_strategy_type(BiddingStrategyType::ManualCpc);
/// let tree = ProductPartitionTree::builder(123)
///     .with_bidding_strategy_configuration(config)
///     .with_criteria(Vec::<AdGroupCriterion>::new())
///     .build()?;
/// assert!(tree.root().is_biddable_unit());
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct ProductPartitionTreeBuilder {
    ad_group_id: i64,
    bidding_strategy_configuration: BiddingStrategyConfiguration,
    criteria: Vec<AdGroupCriterion>,
    next_temporary_id: i64,
}

impl ProductPartitionTreeBuilder {
    fn new(ad_group_id: i64) -> Self {
        Self {
            ad_group_id,
            bidding_strategy_configuration: BiddingStrategyConfiguration::default(),
            criteria: Vec::new(),
            next_temporary_id: -1,
        }
    }

    /// Sets the bidding configuration used for biddable `ADD` and `SET` operations.
    ///
    /// The bids in the configuration are replaced by the bid of each node.
    pub fn with_bidding_strategy_configuration<T: Into<BiddingStrategyConfiguration>>(
        mut self,
        v: T,
    ) -> Self {
        self.bidding_strategy_configuration = v.into();
        self
    }

    /// Sets the existing criteria of the ad group.
    ///
    /// Typically these are all the `ProductPartition` criteria returned by the
    /// `AdGroupCriterionService` for the ad group. Criteria that do not hold a
    /// `ProductPartition` are ignored. If empty, the tree starts with a single
    /// biddable root, which does not exist in the service.
    pub fn with_criteria<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<AdGroupCriterion>,
    {
        self.criteria = v.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the first temporary id assigned to new nodes. It must be negative.
    ///
    /// Temporary ids must be unique within a single `mutate` request. Use this
    /// to avoid collisions when the operations are sent together with other
    /// operations using temporary ids.
    pub fn with_next_temporary_id(mut self, v: i64) -> Self {
        self.next_temporary_id = v;
        self
    }

    pub fn build(self) -> Result<ProductPartitionTree> {
        if self.next_temporary_id >= 0 {
            return Err(Error::invalid_argument(format!(
                "temporary ids must be negative, got {}",
                self.next_temporary_id
            )));
        }
        let mut next_temporary_id = self.next_temporary_id;
        let (current, original) = match load_criteria(self.ad_group_id, &self.criteria)? {
            Some(arena) => {
                tracing::debug!(
                    "loaded tree for ad group {} with {} nodes",
                    self.ad_group_id,
                    arena.nodes.len()
                );
                (arena.clone(), Some(arena))
            }
            None => {
                let root = NodeData::new(next_temporary_id, None, None);
                next_temporary_id = next_temporary_id.checked_sub(1).ok_or_else(|| {
                    Error::invalid_argument("the first temporary id leaves no ids for new nodes")
                })?;
                tracing::debug!(
                    "created empty tree for ad group {} with root {}",
                    self.ad_group_id,
                    root.partition_id
                );
                (Arena::with_root(root), None)
            }
        };
        Ok(ProductPartitionTree {
            ad_group_id: self.ad_group_id,
            bidding_strategy_configuration: self.bidding_strategy_configuration,
            current,
            original,
            next_temporary_id,
        })
    }
}

fn load_criteria(ad_group_id: i64, criteria: &[AdGroupCriterion]) -> Result<Option<Arena>> {
    struct Loaded<'a> {
        partition_id: i64,
        dimension: Option<&'a ProductDimension>,
        state: NodeState,
    }

    let mut root = None;
    let mut by_parent: HashMap<i64, Vec<Loaded>> = HashMap::new();
    let mut seen = HashSet::new();
    for criterion in criteria {
        let Some(partition) = criterion.product_partition() else {
            continue;
        };
        if let Some(id) = criterion.ad_group_id().filter(|id| *id != ad_group_id) {
            return Err(Error::invalid_argument(format!(
                "criterion belongs to ad group {id}, expected {ad_group_id}"
            )));
        }
        let partition_id = partition.id.ok_or_else(|| {
            Error::invalid_argument(format!("product partition without an id: {partition:?}"))
        })?;
        if !seen.insert(partition_id) {
            return Err(Error::invalid_argument(format!(
                "duplicate product partition id {partition_id}"
            )));
        }
        let state = match criterion {
            AdGroupCriterion::Negative(_) => NodeState::Excluded,
            AdGroupCriterion::Biddable(c) => NodeState::Biddable {
                bid: c
                    .bidding_strategy_configuration
                    .iter()
                    .flat_map(|config| config.bids.iter())
                    .find_map(|b| b.cpc_micro_amount()),
            },
            _ => NodeState::Biddable { bid: None },
        };
        let loaded = Loaded {
            partition_id,
            dimension: partition.case_value.as_ref(),
            state,
        };
        match partition.parent_criterion_id {
            None if root.is_some() => {
                return Err(Error::invalid_argument(format!(
                    "more than one root partition, found {partition_id}"
                )));
            }
            None => root = Some(loaded),
            Some(parent) => by_parent.entry(parent).or_default().push(loaded),
        }
    }

    let Some(root) = root else {
        if seen.is_empty() {
            return Ok(None);
        }
        return Err(Error::invalid_argument(
            "the product partitions do not include a root partition",
        ));
    };

    let mut root_data = NodeData::new(root.partition_id, None, None);
    root_data.state = root.state;
    let mut arena = Arena::with_root(root_data);
    let mut pending = VecDeque::from([(arena.root, root.partition_id)]);
    let mut loaded = 1_usize;
    while let Some((parent, parent_partition_id)) = pending.pop_front() {
        for child in by_parent.remove(&parent_partition_id).unwrap_or_default() {
            let dimension = child.dimension.cloned().ok_or_else(|| {
                Error::invalid_argument(format!(
                    "product partition {} has a parent but no case value",
                    child.partition_id
                ))
            })?;
            let key = DimensionKey(dimension.clone());
            let mut data = NodeData::new(child.partition_id, Some(parent), Some(dimension));
            data.state = child.state;
            let id = arena.insert(data);
            let parent_data = arena.get_mut(parent)?;
            if parent_data.children.insert(key, id).is_some() {
                return Err(Error::invalid_argument(format!(
                    "duplicate dimension under product partition {parent_partition_id}"
                )));
            }
            loaded += 1;
            pending.push_back((id, child.partition_id));
        }
    }
    if loaded != seen.len() {
        let orphans: Vec<i64> = by_parent.keys().copied().collect();
        return Err(Error::invalid_argument(format!(
            "product partitions reference missing parents {orphans:?}"
        )));
    }
    Ok(Some(arena))
}
