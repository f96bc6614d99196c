pub mod board;
pub mod error;
pub mod evaluation;
pub mod search;

pub use board::{Board, Color};
pub use error::SearchError;
pub use evaluation::{Evaluator, DRAW_SCORE, LOSS_SCORE, WIN_SCORE};
pub use search::{Search, DEFAULT_MAX_DEPTH};
