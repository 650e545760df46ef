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

use crate::NodeId;

/// The result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned when building or converting product partition trees.
///
/// None of these errors are transient. Retrying the same call with the same
/// inputs fails in the same way.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The input is not valid regardless of the state of the tree.
    ///
    /// For example, requesting a `SET` operation for an excluded node, adding
    /// a child whose dimension duplicates one of its siblings, or building a
    /// tree from criteria without a root.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation is not valid for the current state of the node.
    ///
    /// For example, adding children to an excluded node, or setting a bid on
    /// a subdivision.
    #[error("invalid node state: {0}")]
    InvalidState(String),

    /// The node handle does not belong to the tree, or the node was removed.
    #[error("node {0} is not part of the tree")]
    NodeNotFound(NodeId),
}

impl Error {
    pub(crate) fn invalid_argument<T: Into<String>>(msg: T) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub(crate) fn invalid_state<T: Into<String>>(msg: T) -> Self {
        Self::InvalidState(msg.into())
    }

    /// Returns true if the error was caused by an invalid argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Returns true if the operation is not valid for the state of the node.
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates() {
        let e = Error::invalid_argument("excluded nodes have no bids");
        assert!(e.is_invalid_argument(), "{e:?}");
        assert!(!e.is_invalid_state(), "{e:?}");
        assert_eq!(e.to_string(), "invalid argument: excluded nodes have no bids");

        let e = Error::invalid_state("subdivisions cannot have bids");
        assert!(e.is_invalid_state(), "{e:?}");
        assert!(!e.is_invalid_argument(), "{e:?}");
    }

    #[test]
    fn node_not_found() {
        let e = Error::NodeNotFound(NodeId(42));
        assert_eq!(e.to_string(), "node #42 is not part of the tree");
    }
}
