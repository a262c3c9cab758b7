// A scripted game tree for exercising the search strategies, plus clocks that
// run out on cue.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;
use timed_minimax::{Evaluation, Game, Move};

/// A node in an explicit game tree. Leaves carry the score for player 0.
pub enum Node {
    Leaf(Evaluation),
    Branch(Evaluation, Vec<Node>),
}

pub fn leaf(v: Evaluation) -> Node {
    Node::Leaf(v)
}

/// An interior node whose heuristic value, if searched no deeper, is `v`.
pub fn branch(v: Evaluation, children: Vec<Node>) -> Node {
    Node::Branch(v, children)
}

/// A position in a `Node` tree. Move `(i, 0)` descends into child `i`.
/// Players 0 and 1 alternate, starting with 0 at the root.
#[derive(Clone)]
pub struct TreeGame {
    root: Rc<Node>,
    path: Vec<usize>,
}

impl TreeGame {
    pub fn new(root: Node) -> Self {
        TreeGame { root: Rc::new(root), path: Vec::new() }
    }

    fn node(&self) -> &Node {
        let mut node = &*self.root;
        for &i in &self.path {
            node = match node {
                Node::Branch(_, children) => &children[i],
                Node::Leaf(_) => unreachable!(),
            };
        }
        node
    }

    /// Heuristic value of this position for player 0.
    pub fn value(&self) -> Evaluation {
        match self.node() {
            Node::Leaf(v) | Node::Branch(v, _) => *v,
        }
    }
}

impl Game for TreeGame {
    type Player = u8;

    fn active_player(&self) -> u8 {
        (self.path.len() % 2) as u8
    }

    fn legal_moves_for(&self, player: u8) -> Vec<Move> {
        if player != self.active_player() {
            return Vec::new();
        }
        match self.node() {
            Node::Leaf(_) => Vec::new(),
            Node::Branch(_, children) => (0..children.len() as i32).map(|i| Move::new(i, 0)).collect(),
        }
    }

    fn forecast_move(&self, m: Move) -> Self {
        let mut path = self.path.clone();
        path.push(m.row as usize);
        TreeGame { root: self.root.clone(), path }
    }

    fn opponent(&self, player: u8) -> u8 {
        1 - player
    }

    fn player_location(&self, _player: u8) -> Option<(i32, i32)> {
        None
    }

    fn width(&self) -> i32 {
        0
    }

    fn height(&self) -> i32 {
        0
    }
}

/// Scores a tree position from the given player's side.
pub fn tree_value(g: &TreeGame, player: u8) -> Evaluation {
    if player == 0 {
        g.value()
    } else {
        -g.value()
    }
}

/// A clock that reports `plenty` for the first `polls` reads, then zero.
pub fn clock_after(polls: usize, plenty: f64) -> (Rc<Cell<usize>>, impl Fn() -> f64) {
    let count = Rc::new(Cell::new(0));
    let counter = count.clone();
    let clock = move || {
        counter.set(counter.get() + 1);
        if counter.get() <= polls {
            plenty
        } else {
            0.
        }
    };
    (count, clock)
}

/// A clock that loses `step` milliseconds on every read.
pub fn draining_clock(start: f64, step: f64) -> (Rc<Cell<usize>>, impl Fn() -> f64) {
    let count = Rc::new(Cell::new(0));
    let counter = count.clone();
    let clock = move || {
        counter.set(counter.get() + 1);
        start - step * counter.get() as f64
    };
    (count, clock)
}
