#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Cube,
}

#[derive(Clone)]
pub struct Board {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Cell>,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[self.idx(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, value: Cell) {
        let idx = self.idx(x, y);
        self.cells[idx] = value;
    }

    pub fn is_empty(&self, x: usize, y: usize) -> bool {
        matches!(self.get(x, y), Cell::Empty)
    }

    /// Rows from the highest locked cube down to the floor.
    pub fn stack_height(&self) -> usize {
        for y in 0..self.height {
            if (0..self.width).any(|x| !self.is_empty(x, y)) {
                return self.height - y;
            }
        }
        0
    }
}
