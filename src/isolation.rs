//! A definition of the game Isolation using the library, for use in tests,
//! benchmarks and demos.
//!
//! Two players share a rectangular board. On their first turn a player may
//! stand on any blank cell; afterwards they move like a chess knight. Every
//! cell a player lands on is blocked for the rest of the game. The player to
//! move with no legal moves loses.

use super::interface::{self, Move};
use std::fmt::{self, Display, Formatter};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    First,
    Second,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }
}

const KNIGHT_DIRECTIONS: [(i32, i32); 8] =
    [(-2, -1), (-2, 1), (-1, -2), (-1, 2), (1, -2), (1, 2), (2, -1), (2, 1)];

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    width: i32,
    height: i32,
    // Column-major, indexed by `row + col * height`.
    blocked: Vec<bool>,
    locations: [Option<(i32, i32)>; 2],
    active: Player,
    move_count: usize,
}

impl Default for Board {
    fn default() -> Board {
        Board::new(7, 7)
    }
}

impl Board {
    /// An empty board with neither player placed. `Player::First` moves first.
    pub fn new(width: i32, height: i32) -> Board {
        let cells = (width.max(0) * height.max(0)) as usize;
        Board {
            width,
            height,
            blocked: vec![false; cells],
            locations: [None, None],
            active: Player::First,
            move_count: 0,
        }
    }

    fn index(&self, row: i32, col: i32) -> usize {
        (row + col * self.height) as usize
    }

    pub fn is_blank(&self, row: i32, col: i32) -> bool {
        row >= 0
            && row < self.height
            && col >= 0
            && col < self.width
            && !self.blocked[self.index(row, col)]
    }

    /// Blank cells in column-major order.
    pub fn blank_cells(&self) -> Vec<Move> {
        let mut cells = Vec::new();
        for col in 0..self.width {
            for row in 0..self.height {
                if self.is_blank(row, col) {
                    cells.push(Move::new(row, col));
                }
            }
        }
        cells
    }

    /// Whether `m` is legal for the player to act.
    pub fn is_legal(&self, m: Move) -> bool {
        interface::Game::legal_moves(self).contains(&m)
    }

    /// Number of moves made so far.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// The player to act has no legal moves.
    pub fn is_over(&self) -> bool {
        interface::Game::legal_moves(self).is_empty()
    }

    /// Apply `m` for the active player in place. The move is not validated.
    pub fn apply_move(&mut self, m: Move) {
        let index = self.index(m.row, m.col);
        self.blocked[index] = true;
        self.locations[self.active.index()] = Some((m.row, m.col));
        self.active = self.active.other();
        self.move_count += 1;
    }
}

impl interface::Game for Board {
    type Player = Player;

    fn active_player(&self) -> Player {
        self.active
    }

    fn legal_moves_for(&self, player: Player) -> Vec<Move> {
        match self.locations[player.index()] {
            None => self.blank_cells(),
            Some((row, col)) => KNIGHT_DIRECTIONS
                .iter()
                .map(|&(dr, dc)| (row + dr, col + dc))
                .filter(|&(r, c)| self.is_blank(r, c))
                .map(Move::from)
                .collect(),
        }
    }

    fn forecast_move(&self, m: Move) -> Board {
        let mut next = self.clone();
        next.apply_move(m);
        next
    }

    fn opponent(&self, player: Player) -> Player {
        player.other()
    }

    fn player_location(&self, player: Player) -> Option<(i32, i32)> {
        self.locations[player.index()]
    }

    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for row in 0..self.height {
            write!(f, "|")?;
            for col in 0..self.width {
                let cell = if self.locations[0] == Some((row, col)) {
                    '1'
                } else if self.locations[1] == Some((row, col)) {
                    '2'
                } else if self.blocked[self.index(row, col)] {
                    '-'
                } else {
                    ' '
                };
                write!(f, " {} |", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::Game;

    #[test]
    fn unplaced_player_may_stand_anywhere() {
        let b = Board::new(3, 2);
        let moves = b.legal_moves();
        assert_eq!(moves.len(), 6);
        // Column-major enumeration.
        assert_eq!(moves[0], Move::new(0, 0));
        assert_eq!(moves[1], Move::new(1, 0));
        assert_eq!(moves[2], Move::new(0, 1));
    }

    #[test]
    fn placed_player_moves_like_a_knight() {
        let mut b = Board::new(7, 7);
        b.apply_move(Move::new(3, 3));
        b.apply_move(Move::new(1, 2));
        // (1, 2) is taken by the second player.
        let moves = b.legal_moves_for(Player::First);
        assert_eq!(
            moves,
            vec![
                Move::new(1, 4),
                Move::new(2, 1),
                Move::new(2, 5),
                Move::new(4, 1),
                Move::new(4, 5),
                Move::new(5, 2),
                Move::new(5, 4),
            ]
        );
    }

    #[test]
    fn forecast_does_not_mutate() {
        let b = Board::new(5, 5);
        let next = b.forecast_move(Move::new(2, 2));
        assert_eq!(b.move_count(), 0);
        assert_eq!(b.player_location(Player::First), None);
        assert_eq!(next.player_location(Player::First), Some((2, 2)));
        assert_eq!(next.active_player(), Player::Second);
        assert!(!next.is_blank(2, 2));
    }

    #[test]
    fn center_of_three_by_three_is_stuck() {
        let mut b = Board::new(3, 3);
        b.apply_move(Move::new(1, 1));
        b.apply_move(Move::new(0, 0));
        assert!(b.is_over());
        assert!(b.legal_moves().is_empty());
        assert!(!b.legal_moves_for(Player::Second).is_empty());
    }

    #[test]
    fn display_marks_players_and_blocked_cells() {
        let mut b = Board::new(3, 3);
        b.apply_move(Move::new(0, 0));
        b.apply_move(Move::new(1, 2));
        b.apply_move(Move::new(2, 1));
        assert_eq!(b.to_string(), "| - |   |   |\n|   |   | 2 |\n|   | 1 |   |\n");
    }
}
