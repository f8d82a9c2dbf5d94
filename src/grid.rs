// vim: set ai et ts=4 sts=4:
use std::fmt;
use ansi_term::Style;

use super::puzzle::Puzzle;
use super::row::{update_squares, Row, UpdateResult};
use super::util::{Direction, Direction::*};

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum SquareStatus {
    FilledIn,
    CrossedOut,
    Unknown,
}

impl SquareStatus {
    pub fn to_char(self) -> char {
        match self {
            SquareStatus::FilledIn   => 'X',
            SquareStatus::CrossedOut => '.',
            SquareStatus::Unknown    => '~',
        }
    }
}

impl fmt::Display for SquareStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

// Solving state of a puzzle: every square exists in a horizontal row and in a
// vertical one, and both views are kept mirrored at all times.
#[derive(Clone, Debug)]
pub struct Grid {
    pub rows: Vec<Row>,
    pub cols: Vec<Row>,
    n_settled: usize,
    is_final: bool,
}

impl Grid {
    pub fn new(puzzle: &Puzzle) -> Self
    {
        let rows = puzzle.row_run_lengths.iter()
                         .enumerate()
                         .map(|(y, run_lengths)| Row::new(Horizontal, y, puzzle.width, run_lengths))
                         .collect::<Vec<_>>();
        let cols = puzzle.col_run_lengths.iter()
                         .enumerate()
                         .map(|(x, run_lengths)| Row::new(Vertical, x, puzzle.height, run_lengths))
                         .collect::<Vec<_>>();
        Grid {
            rows,
            cols,
            n_settled: 0,
            is_final: false,
        }
    }

    pub fn width(&self) -> usize { self.cols.len() }
    pub fn height(&self) -> usize { self.rows.len() }

    pub fn get_square(&self, x: usize, y: usize) -> SquareStatus {
        self.rows[y].cells[x]
    }

    // Settles a square in both views. Squares only ever move out of Unknown;
    // regressing a settled square is a logic bug, not a recoverable state.
    pub fn set_square(&mut self, x: usize, y: usize, new_status: SquareStatus) {
        let current = self.rows[y].cells[x];
        assert_eq!(current, self.cols[x].cells[y],
                   "mirror invariant violated at (x={}, y={})", x, y);
        assert_ne!(new_status, SquareStatus::Unknown,
                   "cannot revert square (x={}, y={}) to unknown", x, y);
        assert_eq!(current, SquareStatus::Unknown,
                   "square (x={}, y={}) is already {}, refusing to make it {}",
                   x, y, current, new_status);

        self.rows[y].cells[x] = new_status;
        self.cols[x].cells[y] = new_status;
        self.rows[y].n_unknown -= 1;
        self.cols[x].n_unknown -= 1;
        self.n_settled += 1;
    }

    pub fn line(&self, direction: Direction, index: usize) -> &Row {
        match direction {
            Horizontal => &self.rows[index],
            Vertical   => &self.cols[index],
        }
    }
    fn line_mut(&mut self, direction: Direction, index: usize) -> &mut Row {
        match direction {
            Horizontal => &mut self.rows[index],
            Vertical   => &mut self.cols[index],
        }
    }

    // indices of the lines still worth visiting, most constrained first
    // (fewest unknown squares first) to cut down on speculation later
    pub fn rows_solve_order(&self) -> Vec<usize> {
        Self::solve_order(&self.rows)
    }
    pub fn cols_solve_order(&self) -> Vec<usize> {
        Self::solve_order(&self.cols)
    }
    fn solve_order(lines: &[Row]) -> Vec<usize> {
        let mut order = lines.iter()
                             .filter(|line| !line.is_completed())
                             .map(|line| line.index)
                             .collect::<Vec<_>>();
        order.sort_by_key(|&i| lines[i].n_unknown);
        order
    }

    // Runs the line updater on one row or column and installs whatever it
    // settled, mirroring every changed square into the perpendicular lines.
    // The updater itself works on a copy of the cells so that both views
    // stay consistent no matter what it concludes.
    pub fn update_line(&mut self, direction: Direction, index: usize) -> UpdateResult {
        let line = self.line(direction, index);
        if line.completed {
            return UpdateResult {
                rules_fit: true,
                n_updated: 0,
                completed: true,
                lfit: line.lfit.clone(),
                rfit: line.rfit.clone(),
            };
        }

        let run_lengths = line.run_lengths.clone();
        let mut scratch = line.cells.clone();
        let update = update_squares(&run_lengths, &mut scratch);
        if !update.rules_fit {
            return update;
        }

        for at in 0..scratch.len() {
            if scratch[at] != self.line(direction, index).cells[at] {
                let (x, y) = match direction {
                    Horizontal => (at, index),
                    Vertical   => (index, at),
                };
                self.set_square(x, y, scratch[at]);
            }
        }

        let line = self.line_mut(direction, index);
        line.lfit = update.lfit.clone();
        line.rfit = update.rfit.clone();
        line.completed = update.completed;
        update
    }

    // position of the first unknown square in scan order, if any
    pub fn first_unknown(&self) -> Option<(usize, usize)> {
        for (y, row) in self.rows.iter().enumerate() {
            if let Some(x) = row.cells.iter().position(|&s| s == SquareStatus::Unknown) {
                return Some((x, y));
            }
        }
        None
    }

    pub fn is_complete(&self) -> bool {
        self.n_settled == self.width() * self.height()
    }
    pub fn is_final(&self) -> bool { self.is_final }

    pub fn mark_final(&mut self) {
        assert!(self.is_complete(), "cannot mark a grid with unknown squares as final");
        self.is_final = true;
    }

    // Renders the grid as text, each square printed twice for better
    // proportions on a terminal. With color enabled, filled squares are
    // emitted in reverse video so they show up as solid blocks.
    pub fn render(&self, emit_color: bool) -> String {
        let mut result = String::new();
        for row in &self.rows {
            for &status in &row.cells {
                let pair: String = [status.to_char(), status.to_char()].iter().collect();
                if emit_color && status == SquareStatus::FilledIn {
                    result.push_str(&Style::new().reverse().paint(pair).to_string());
                } else {
                    result.push_str(&pair);
                }
            }
            result.push('\n');
        }
        result
    }

    // Debug dump of the cached extreme placements of every line; printed
    // when the solver runs out of logically-inferrable changes.
    pub fn dump_fits(&self) -> String {
        let mut result = String::from("cached placements at stall:\n");
        for line in self.rows.iter().chain(self.cols.iter()) {
            result.push_str(&format!("  {:-6} {:2}: lfit={:?} rfit={:?}\n",
                line.direction.label(), line.index, line.lfit, line.rfit));
        }
        result
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::Puzzle;

    fn cross_puzzle() -> Puzzle {
        // 3x3 plus sign: rows 1 / 3 / 1, cols 1 / 3 / 1
        Puzzle {
            width: 3,
            height: 3,
            col_run_lengths: vec![vec![1], vec![3], vec![1]],
            row_run_lengths: vec![vec![1], vec![3], vec![1]],
        }
    }

    #[test]
    fn new_grid_starts_unknown() {
        let grid = Grid::new(&cross_puzzle());
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert!(!grid.is_complete());
        assert!(!grid.is_final());
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(grid.get_square(x, y), SquareStatus::Unknown);
            }
        }
    }

    #[test]
    fn set_square_updates_both_views() {
        let mut grid = Grid::new(&cross_puzzle());
        grid.set_square(2, 0, SquareStatus::FilledIn);
        assert_eq!(grid.rows[0].cells[2], SquareStatus::FilledIn);
        assert_eq!(grid.cols[2].cells[0], SquareStatus::FilledIn);
        assert_eq!(grid.rows[0].n_unknown, 2);
        assert_eq!(grid.cols[2].n_unknown, 2);

        // the mirror invariant must hold for every square, not just the one set
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                assert_eq!(grid.rows[y].cells[x], grid.cols[x].cells[y]);
            }
        }
    }

    #[test]
    #[should_panic(expected = "already")]
    fn set_square_refuses_to_regress() {
        let mut grid = Grid::new(&cross_puzzle());
        grid.set_square(0, 0, SquareStatus::FilledIn);
        grid.set_square(0, 0, SquareStatus::CrossedOut);
    }

    #[test]
    fn solve_order_prefers_most_constrained() {
        let mut grid = Grid::new(&cross_puzzle());
        grid.set_square(0, 1, SquareStatus::FilledIn);
        grid.set_square(1, 1, SquareStatus::FilledIn);
        // row 1 now has a single unknown square left and should come first
        assert_eq!(grid.rows_solve_order()[0], 1);
    }

    #[test]
    fn render_doubles_every_square() {
        let mut grid = Grid::new(&cross_puzzle());
        grid.set_square(1, 0, SquareStatus::FilledIn);
        grid.set_square(0, 0, SquareStatus::CrossedOut);
        assert_eq!(grid.render(false), "..XX~~\n~~~~~~\n~~~~~~\n");
    }
}
