//! Arena-backed search tree.
//!
//! Every node of one search lives in a single `Vec`; parent and child links are
//! indices into it, so the whole tree is dropped at once when the search returns.

use crate::game::game_move::Move;

/// Index of a node inside its [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Move that led here, `None` for the root
    pub mv: Option<Move>,
    pub parent: Option<NodeId>,
    /// Children in expansion order
    pub children: Vec<NodeId>,
    pub visits: u32,
    /// Sum of backpropagated rollout scores
    pub score: f64,
}

impl Node {
    fn new(mv: Option<Move>, parent: Option<NodeId>) -> Self {
        Self {
            mv,
            parent,
            children: Vec::new(),
            visits: 0,
            score: 0.0,
        }
    }

    /// Mean score, 0.0 for an unvisited node.
    pub fn average_score(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.score / self.visits as f64
        }
    }
}

/// Search tree with arena storage. The root always sits at [`NodeId::ROOT`].
#[derive(Debug, Clone)]
pub struct SearchTree {
    nodes: Vec<Node>,
}

impl Default for SearchTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(None, None)],
        }
    }

    #[inline]
    pub fn root(&self) -> &Node {
        self.get(NodeId::ROOT)
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Number of nodes, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocates a child of `parent` reached by `mv` and returns its id.
    pub fn add_child(&mut self, parent: NodeId, mv: Move) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(Some(mv), Some(parent)));
        self.get_mut(parent).children.push(id);
        id
    }

    /// Moves of the children of `id`, in expansion order.
    pub fn child_moves(&self, id: NodeId) -> impl Iterator<Item = Move> + '_ {
        self.get(id)
            .children
            .iter()
            .filter_map(move |&child| self.get(child).mv)
    }

    /// First move of `legal_moves` without a child under `id`.
    pub fn first_untried(&self, id: NodeId, legal_moves: &[Move]) -> Option<Move> {
        legal_moves
            .iter()
            .copied()
            .find(|&mv| !self.child_moves(id).any(|tried| tried == mv))
    }

    /// Every legal move at `id` already has a child.
    pub fn is_fully_expanded(&self, id: NodeId, legal_moves: &[Move]) -> bool {
        self.first_untried(id, legal_moves).is_none()
    }
}
