#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
    Empty, // vacant cell, also the draw marker reported by winner()
}

impl Color {
    pub fn opposite(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
            Color::Empty => Color::Empty,
        }
    }
}

/// Capability interface the search engine requires from the host game.
///
/// The engine never copies the board. It explores the game tree by applying
/// a move in place, recursing, and undoing it, so `undo_move` must restore
/// the exact state that preceded the matching `apply_move`. Calling
/// `undo_move` out of order is a contract violation by the implementor and
/// is not detected here.
pub trait Board {
    type Move: Clone + PartialEq;

    /// All legal moves for `color` in the current state. May be empty.
    /// Enumeration order decides tie-breaks: among equally scored candidates
    /// the engine keeps the first one seen.
    fn legal_moves(&self, color: Color) -> Vec<Self::Move>;

    fn apply_move(&mut self, mv: &Self::Move);

    fn undo_move(&mut self, mv: &Self::Move);

    /// The decided winner, `Some(Color::Empty)` for a draw, or `None` while
    /// the game is still open. `perspective` is the color asking.
    fn winner(&self, perspective: Color) -> Option<Color>;

    /// Dimension of the (square) grid.
    fn size(&self) -> usize;

    fn cell_owner(&self, row: usize, col: usize) -> Color;
}
