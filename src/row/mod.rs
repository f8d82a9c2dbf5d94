// vim: set ai et ts=4 sw=4 sts=4:
mod solver;

pub use self::solver::{fit_left, fit_right, update_squares, UpdateResult};

use super::grid::SquareStatus::{self, FilledIn, Unknown};
use super::util::Direction;

// One line of the grid: a horizontal row or a vertical column, together with
// its clue (the ordered run lengths), its own copy of the cells, and the
// cached extreme block placements from the last update.
#[derive(Clone, Debug)]
pub struct Row {
    pub direction:   Direction,
    pub index:       usize,
    pub length:      usize,
    pub run_lengths: Vec<usize>,
    pub cells:       Vec<SquareStatus>,
    pub lfit:        Option<Vec<usize>>,
    pub rfit:        Option<Vec<usize>>,
    pub completed:   bool,
    pub n_unknown:   usize,
}

impl Row {
    pub fn new(direction: Direction,
               index: usize,
               length: usize,
               run_lengths: &[usize]) -> Self
    {
        Row {
            direction,
            index,
            length,
            run_lengths: run_lengths.to_vec(),
            cells:       vec![Unknown; length],
            lfit:        None,
            rfit:        None,
            completed:   false,
            n_unknown:   length,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    // Lengths of the maximal runs of filled squares currently in the line.
    // On a completed line this is exactly the clue it was solved against.
    pub fn filled_runs(&self) -> Vec<usize> {
        let mut result = Vec::new();
        let mut current = 0usize;
        for &status in &self.cells {
            if status == FilledIn {
                current += 1;
            } else if current > 0 {
                result.push(current);
                current = 0;
            }
        }
        if current > 0 {
            result.push(current);
        }
        result
    }
}
