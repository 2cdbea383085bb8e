//! Open set ordered by the active [`NodeOrdering`].
//!
//! The frontier stores node ids, not nodes: nodes stay in the arena so that
//! popped and discarded nodes remain available for path reconstruction.
//! Several entries may refer to the same state; the driver resolves them
//! against the best-cost table when they are popped.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::contract::Cost;
use crate::node::{NodeId, SearchNode};
use crate::policy::NodeOrdering;

/// The frontier ordering key: `(primary, creation_order)`.
///
/// Lower `primary` first; ties go to the node created first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierKey {
    pub primary: i64,
    pub creation_order: NodeId,
}

impl FrontierKey {
    #[must_use]
    pub fn new(ordering: NodeOrdering, g: Cost, h: Cost, id: NodeId) -> Self {
        Self {
            primary: ordering.key(g, h),
            creation_order: id,
        }
    }
}

/// `BinaryHeap` is a max-heap, so entries are keyed by `Reverse<FrontierKey>`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
}

/// Priority frontier for one search pass.
#[derive(Debug)]
pub struct Frontier {
    ordering: NodeOrdering,
    heap: BinaryHeap<FrontierEntry>,
    high_water: u64,
}

impl Frontier {
    #[must_use]
    pub fn new(ordering: NodeOrdering) -> Self {
        Self {
            ordering,
            heap: BinaryHeap::new(),
            high_water: 0,
        }
    }

    /// Insert a node under the frontier's ordering.
    pub fn push<S, R>(&mut self, node: &SearchNode<S, R>) {
        let key = FrontierKey::new(self.ordering, node.g(), node.h(), node.id());
        self.heap.push(FrontierEntry { key: Reverse(key) });
        self.high_water = self.high_water.max(self.heap.len() as u64);
    }

    /// Remove and return the best node id.
    #[must_use]
    pub fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|entry| entry.key.0.creation_order)
    }

    /// Key of the node that would be popped next.
    #[must_use]
    pub fn peek_key(&self) -> Option<FrontierKey> {
        self.heap.peek().map(|entry| entry.key.0)
    }

    #[must_use]
    pub fn ordering(&self) -> NodeOrdering {
        self.ordering
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the frontier reached.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}
