use crate::board::{Board, Color};
use crate::error::SearchError;
use crate::evaluation::Evaluator;
use std::time::{Duration, Instant};

pub const DEFAULT_MAX_DEPTH: u32 = 3;

// Subtracted from the nominal budget so the driver hands back a move before
// any hard deadline imposed on the caller fires.
const SAFETY_MARGIN: Duration = Duration::from_millis(5);

pub struct Search {
    evaluator: Evaluator,
    max_depth: u32,
    nodes_searched: u64,
    start_time: Instant,
    budget: Duration,
}

impl Search {
    pub fn new() -> Self {
        Self {
            evaluator: Evaluator::new(),
            max_depth: DEFAULT_MAX_DEPTH,
            nodes_searched: 0,
            start_time: Instant::now(),
            budget: Duration::from_secs(5),
        }
    }

    /// Pick a move for `color` within the given wall-clock budget.
    ///
    /// The board is explored in place through its apply/undo pair and is
    /// restored to its pre-call state before this returns. When the budget
    /// runs out the search degrades to the shallower results gathered so
    /// far instead of failing.
    pub fn choose_move<B: Board>(
        &mut self,
        board: &mut B,
        color: Color,
        budget: Duration,
    ) -> Result<B::Move, SearchError> {
        self.nodes_searched = 0;
        self.start_time = Instant::now();
        self.budget = budget;

        let mut moves = board.legal_moves(color);
        if moves.is_empty() {
            return Err(SearchError::NoLegalMoves(color));
        }

        // Only one option: no point spending budget on it
        if moves.len() == 1 {
            return Ok(moves.remove(0));
        }

        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;
        let mut best_value = f64::NEG_INFINITY;
        let mut best_move = moves[0].clone();

        for mv in &moves {
            board.apply_move(mv);
            let value = self.min_value(board, color, 1, alpha, beta);
            board.undo_move(mv);

            // Strict improvement keeps the first-enumerated move on ties
            if value > best_value {
                best_value = value;
                best_move = mv.clone();
            }
            alpha = alpha.max(best_value);
        }

        Ok(best_move)
    }

    // Opponent to move: minimize over their replies.
    fn min_value<B: Board>(
        &mut self,
        board: &mut B,
        color: Color,
        depth: u32,
        alpha: f64,
        mut beta: f64,
    ) -> f64 {
        self.nodes_searched += 1;

        if self.out_of_time() {
            return self.evaluator.evaluate(board, color);
        }
        if board.winner(color).is_some() || depth >= self.max_depth {
            return self.evaluator.evaluate(board, color);
        }
        let moves = board.legal_moves(color.opposite());
        if moves.is_empty() {
            return self.evaluator.evaluate(board, color);
        }

        let mut value = f64::INFINITY;
        for mv in &moves {
            board.apply_move(mv);
            value = value.min(self.max_value(board, color, depth + 1, alpha, beta));
            board.undo_move(mv);

            if value <= alpha {
                return value;
            }
            beta = beta.min(value);
        }
        value
    }

    // Our color to move: maximize.
    fn max_value<B: Board>(
        &mut self,
        board: &mut B,
        color: Color,
        depth: u32,
        mut alpha: f64,
        beta: f64,
    ) -> f64 {
        self.nodes_searched += 1;

        if self.out_of_time() {
            return self.evaluator.evaluate(board, color);
        }
        if board.winner(color).is_some() || depth >= self.max_depth {
            return self.evaluator.evaluate(board, color);
        }
        let moves = board.legal_moves(color);
        if moves.is_empty() {
            return self.evaluator.evaluate(board, color);
        }

        let mut value = f64::NEG_INFINITY;
        for mv in &moves {
            board.apply_move(mv);
            value = value.max(self.min_value(board, color, depth + 1, alpha, beta));
            board.undo_move(mv);

            if value >= beta {
                return value;
            }
            alpha = alpha.max(value);
        }
        value
    }

    fn out_of_time(&self) -> bool {
        self.start_time.elapsed() > self.budget.saturating_sub(SAFETY_MARGIN)
    }

    pub fn set_max_depth(&mut self, depth: u32) {
        self.max_depth = depth;
    }

    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }
}

impl Default for Search {
    fn default() -> Self {
        Self::new()
    }
}
