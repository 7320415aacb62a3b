//! UCT selection and backpropagation over a [`SearchTree`].
//!
//! Score of a child: `wins / visits + C * sqrt(ln(parent_visits) / visits) + weight / divisor`,
//! where `weight` comes from the position weight table.

use crate::mcts::hyperparameters::MCTSHyperparameters;
use crate::mcts::node::{Node, NodeId, SearchTree};
use crate::strategy::position_evaluation::position_weight;

/// UCT score of `child` under a parent visited `parent_visits` times.
/// An unvisited child scores `+inf` so it is always tried first.
pub fn uct_score(child: &Node, parent_visits: u32, params: &MCTSHyperparameters) -> f64 {
    if child.visits == 0 {
        return f64::INFINITY;
    }

    let visits = child.visits as f64;
    let exploitation = child.score / visits;
    let exploration =
        params.exploration_constant * ((parent_visits as f64).ln() / visits).sqrt();
    let position_bonus = child
        .mv
        .map(|mv| position_weight(mv) as f64 / params.position_bonus_divisor)
        .unwrap_or(0.0);

    exploitation + exploration + position_bonus
}

/// Child of `id` with the highest UCT score; the first one wins ties.
pub fn select_child(
    tree: &SearchTree,
    id: NodeId,
    params: &MCTSHyperparameters,
) -> Option<NodeId> {
    let parent = tree.get(id);
    let mut best: Option<(NodeId, f64)> = None;

    for &child in &parent.children {
        let score = uct_score(tree.get(child), parent.visits, params);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((child, score)),
        }
    }

    best.map(|(child, _)| child)
}

/// Adds one visit and `value` to every node from `leaf` up to the root.
pub fn backpropagate(tree: &mut SearchTree, leaf: NodeId, value: f64) {
    let mut current = Some(leaf);
    while let Some(id) = current {
        let node = tree.get_mut(id);
        node.visits += 1;
        node.score += value;
        current = node.parent;
    }
}
