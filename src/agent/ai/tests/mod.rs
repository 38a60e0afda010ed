// Shared fixtures for the search tests: a hand-built game tree whose leaf
// values are given directly, plus call-counting clocks.

use crate::agent::ai::{Deadline, Searcher};
use crate::game_repr::{GameState, Move, MoveList, PlayerId};
use std::cell::Cell;
use std::sync::Arc;


// ==================== GAME TREE FIXTURE ====================

/// Shape of a test tree. Internal nodes carry a value too, used when the
/// search is cut off at that node by the depth limit.
pub enum Spec {
    Leaf(f64),
    Node(f64, Vec<Spec>),
}

pub fn leaf(value: f64) -> Spec {
    Spec::Leaf(value)
}

pub fn node(children: Vec<Spec>) -> Spec {
    Spec::Node(0.0, children)
}

pub fn valued(value: f64, children: Vec<Spec>) -> Spec {
    Spec::Node(value, children)
}

struct TreeNode {
    value: f64,
    children: Vec<usize>,
}

/// Game whose positions are nodes of a fixed tree. The move to child `i` of
/// node `n` is `Move::new(n, i)`; players alternate by ply and a player
/// without children to move into has lost.
#[derive(Clone)]
pub struct TreeGame {
    nodes: Arc<Vec<TreeNode>>,
    at: usize,
    active: PlayerId,
}

impl TreeGame {
    pub fn new(spec: Spec) -> Self {
        let mut nodes = Vec::new();
        build(&spec, &mut nodes);
        TreeGame {
            nodes: Arc::new(nodes),
            at: 0,
            active: PlayerId::First,
        }
    }

    pub fn value(&self) -> f64 {
        self.nodes[self.at].value
    }

    pub fn child(&self, index: usize) -> TreeGame {
        self.forecast_move(Move::new(self.at as i32, index as i32))
    }

    /// Move from this node to its `index`-th child
    pub fn move_to(&self, index: usize) -> Move {
        Move::new(self.at as i32, index as i32)
    }
}

fn build(spec: &Spec, nodes: &mut Vec<TreeNode>) -> usize {
    let id = nodes.len();
    nodes.push(TreeNode {
        value: 0.0,
        children: Vec::new(),
    });
    match spec {
        Spec::Leaf(value) => nodes[id].value = *value,
        Spec::Node(value, children) => {
            nodes[id].value = *value;
            let ids: Vec<usize> = children.iter().map(|child| build(child, nodes)).collect();
            nodes[id].children = ids;
        }
    }
    id
}

impl GameState for TreeGame {
    fn active_player(&self) -> PlayerId {
        self.active
    }

    fn legal_moves_for(&self, player: PlayerId) -> MoveList {
        if player != self.active {
            return MoveList::new();
        }
        (0..self.nodes[self.at].children.len())
            .map(|i| self.move_to(i))
            .collect()
    }

    fn forecast_move(&self, mv: Move) -> Self {
        TreeGame {
            nodes: Arc::clone(&self.nodes),
            at: self.nodes[self.at].children[mv.col as usize],
            active: self.active.opponent(),
        }
    }

    fn is_winner(&self, player: PlayerId) -> bool {
        player != self.active && self.nodes[self.at].children.is_empty()
    }

    fn is_loser(&self, player: PlayerId) -> bool {
        player == self.active && self.nodes[self.at].children.is_empty()
    }
}

/// Textbook two-ply tree: minimax value 3 through the first child.
/// Depth-1 values of the children are 1, 7, 0.
pub fn classic_tree() -> TreeGame {
    TreeGame::new(node(vec![
        valued(1.0, vec![leaf(3.0), leaf(12.0), leaf(8.0)]),
        valued(7.0, vec![leaf(2.0), leaf(4.0), leaf(6.0)]),
        valued(0.0, vec![leaf(14.0), leaf(5.0), leaf(2.0)]),
    ]))
}

pub static LEAF_VALUE: fn(&TreeGame, PlayerId) -> f64 = |game, _| game.value();

// ==================== CLOCKS ====================

pub fn unlimited() -> f64 {
    f64::INFINITY
}

/// Clock that reports plenty of time for the first `budget` readings and an
/// overdrawn budget afterwards. `reads` counts every reading.
pub fn clock_with_budget(reads: &Cell<u32>, budget: u32) -> impl Fn() -> f64 + '_ {
    move || {
        reads.set(reads.get() + 1);
        if reads.get() <= budget {
            100.0
        } else {
            -1.0
        }
    }
}

/// Searcher over a [`TreeGame`] scoring leaves by their stored value, with a
/// zero safety threshold.
pub fn tree_searcher(clock: &dyn Fn() -> f64) -> Searcher<'_, TreeGame> {
    Searcher::new(&LEAF_VALUE, Deadline::new(clock, 0.0), PlayerId::First)
}
