use minnow::{Board, Color};

#[derive(Clone, PartialEq, Debug)]
pub struct Place {
    pub row: usize,
    pub col: usize,
    pub color: Color,
}

/// Instrumented placement game: any empty cell is a legal move, a full
/// row/column/diagonal of one color wins, a full board with no line draws.
/// Counts apply/undo calls so tests can observe how much the engine searched.
pub struct PlacementBoard {
    size: usize,
    cells: Vec<Color>,
    pub apply_count: u64,
    pub undo_count: u64,
}

impl PlacementBoard {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Color::Empty; size * size],
            apply_count: 0,
            undo_count: 0,
        }
    }

    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new(rows.len());
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                board.cells[r * board.size + c] = match ch {
                    'X' => Color::White,
                    'O' => Color::Black,
                    _ => Color::Empty,
                };
            }
        }
        board
    }

    pub fn set(&mut self, row: usize, col: usize, color: Color) {
        self.cells[row * self.size + col] = color;
    }

    pub fn snapshot(&self) -> Vec<Color> {
        self.cells.clone()
    }

    fn has_line(&self, color: Color) -> bool {
        let n = self.size;
        for i in 0..n {
            if (0..n).all(|j| self.cell_owner(i, j) == color)
                || (0..n).all(|j| self.cell_owner(j, i) == color)
            {
                return true;
            }
        }
        (0..n).all(|i| self.cell_owner(i, i) == color)
            || (0..n).all(|i| self.cell_owner(i, n - 1 - i) == color)
    }
}

impl Board for PlacementBoard {
    type Move = Place;

    fn legal_moves(&self, color: Color) -> Vec<Place> {
        let mut moves = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                if self.cell_owner(row, col) == Color::Empty {
                    moves.push(Place { row, col, color });
                }
            }
        }
        moves
    }

    fn apply_move(&mut self, mv: &Place) {
        self.apply_count += 1;
        self.cells[mv.row * self.size + mv.col] = mv.color;
    }

    fn undo_move(&mut self, mv: &Place) {
        self.undo_count += 1;
        self.cells[mv.row * self.size + mv.col] = Color::Empty;
    }

    fn winner(&self, _perspective: Color) -> Option<Color> {
        if self.has_line(Color::White) {
            return Some(Color::White);
        }
        if self.has_line(Color::Black) {
            return Some(Color::Black);
        }
        if self.cells.iter().all(|&c| c != Color::Empty) {
            Some(Color::Empty)
        } else {
            None
        }
    }

    fn size(&self) -> usize {
        self.size
    }

    fn cell_owner(&self, row: usize, col: usize) -> Color {
        self.cells[row * self.size + col]
    }
}
