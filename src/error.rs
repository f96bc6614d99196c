use crate::board::Color;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    #[error("no legal moves available for {0:?}")]
    NoLegalMoves(Color),
}
