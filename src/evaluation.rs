use crate::board::{Board, Color};

// Terminal sentinels. Large enough to dominate any heuristic value the line
// scoring below can produce on a finite grid.
pub const WIN_SCORE: f64 = 1_000_000.0;
pub const LOSS_SCORE: f64 = -1_000_000.0;
pub const DRAW_SCORE: f64 = 0.0;

pub struct Evaluator {
    // Per-line scoring weight
    pub line_weight: f64,
}

impl Evaluator {
    pub fn new() -> Self {
        Self { line_weight: 10.0 }
    }

    /// Heuristic value of the position from `color`'s point of view.
    ///
    /// A decided game returns one of the sentinels. Otherwise every row and
    /// every column contributes (own pieces - opponent pieces) * line_weight.
    pub fn evaluate<B: Board>(&self, board: &B, color: Color) -> f64 {
        if let Some(winner) = board.winner(color) {
            if winner == color {
                return WIN_SCORE;
            } else if winner == color.opposite() {
                return LOSS_SCORE;
            } else {
                // Neutral marker: draw
                return DRAW_SCORE;
            }
        }

        let size = board.size();
        let opponent = color.opposite();
        let mut score = 0.0;

        for row in 0..size {
            let mut count_mine = 0;
            let mut count_opponent = 0;
            for col in 0..size {
                let owner = board.cell_owner(row, col);
                if owner == color {
                    count_mine += 1;
                }
                if owner == opponent {
                    count_opponent += 1;
                }
            }
            score += self.line_score(count_mine, count_opponent);
        }

        for col in 0..size {
            let mut count_mine = 0;
            let mut count_opponent = 0;
            for row in 0..size {
                let owner = board.cell_owner(row, col);
                if owner == color {
                    count_mine += 1;
                }
                if owner == opponent {
                    count_opponent += 1;
                }
            }
            score += self.line_score(count_mine, count_opponent);
        }

        score
    }

    fn line_score(&self, count_mine: i32, count_opponent: i32) -> f64 {
        (count_mine - count_opponent) as f64 * self.line_weight
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}
