//! Search nodes and the per-pass node arena.
//!
//! Nodes live in a [`NodeArena`] and refer to their parent by [`NodeId`], so
//! the explored tree has no ownership cycles and a root-to-node path is
//! recovered in O(depth) by walking parent links.

use crate::contract::{Cost, Rule};

/// Index of a node inside its [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// An immutable point in the explored search tree.
///
/// `f = g + h` is always derived from `g` and `h`; it is never stored.
#[derive(Debug, Clone)]
pub struct SearchNode<S, R> {
    id: NodeId,
    parent: Option<NodeId>,
    rule: Option<R>,
    state: S,
    g: Cost,
    h: Cost,
    depth: u32,
}

impl<S, R> SearchNode<S, R> {
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Parent node (`None` for the root).
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The rule that produced this node (`None` for the root).
    #[must_use]
    pub fn rule(&self) -> Option<&R> {
        self.rule.as_ref()
    }

    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Accumulated path cost.
    #[must_use]
    pub fn g(&self) -> Cost {
        self.g
    }

    /// Heuristic estimate to the goal.
    #[must_use]
    pub fn h(&self) -> Cost {
        self.h
    }

    /// `g + h`, widened so it cannot wrap.
    #[must_use]
    pub fn f(&self) -> u64 {
        u64::from(self.g) + u64::from(self.h)
    }

    /// Number of rules applied from the root.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Append-only storage for the nodes of one search pass.
///
/// Node ids double as creation order, which the frontier uses to break ties.
#[derive(Debug)]
pub struct NodeArena<S, R> {
    nodes: Vec<SearchNode<S, R>>,
}

impl<S, R: Rule> NodeArena<S, R> {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Create the root node: no parent, no rule, `g = 0`.
    pub fn push_root(&mut self, state: S, h: Cost) -> NodeId {
        self.push(SearchNode {
            id: NodeId(self.nodes.len()),
            parent: None,
            rule: None,
            state,
            g: 0,
            h,
            depth: 0,
        })
    }

    /// Create a child of `parent` reached through `rule`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not allocated by this arena.
    pub fn push_child(&mut self, parent: NodeId, rule: R, state: S, g: Cost, h: Cost) -> NodeId {
        let depth = self.nodes[parent.0].depth.saturating_add(1);
        self.push(SearchNode {
            id: NodeId(self.nodes.len()),
            parent: Some(parent),
            rule: Some(rule),
            state,
            g,
            h,
            depth,
        })
    }

    fn push(&mut self, node: SearchNode<S, R>) -> NodeId {
        let id = node.id;
        self.nodes.push(node);
        id
    }

    /// Look up a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not allocated by this arena.
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode<S, R> {
        &self.nodes[id.0]
    }

    /// Rules applied from the root to `id`, in application order.
    #[must_use]
    pub fn rule_path(&self, id: NodeId) -> Vec<R> {
        let mut path = Vec::with_capacity(self.get(id).depth as usize);
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.get(node_id);
            if let Some(rule) = &node.rule {
                path.push(rule.clone());
            }
            current = node.parent;
        }
        path.reverse();
        path
    }

    /// Node ids from the root to `id`, inclusive.
    #[must_use]
    pub fn node_path(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            path.push(node_id);
            current = self.get(node_id).parent;
        }
        path.reverse();
        path
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<S, R: Rule> Default for NodeArena<S, R> {
    fn default() -> Self {
        Self::new()
    }
}
