// vim: set ai et ts=4 sts=4 sw=4:
use log::{debug, log_enabled, trace, Level::Debug};

use super::super::grid::{Grid, SquareStatus::{CrossedOut, FilledIn}};
use super::super::util::Direction::{Horizontal, Vertical};
use super::Puzzle;

impl Puzzle {
    // Solves the puzzle: propagates forced squares line by line until
    // nothing more can be inferred, then resolves the residual ambiguity by
    // speculating on individual squares. The returned grid has its final
    // flag set iff a full assignment was found.
    pub fn solve(&self) -> Grid {
        let grid = Grid::new(self);
        solve_iter(grid)
    }
}

// One round of constraint propagation: run the line updater over every
// not-yet-completed column, then every not-yet-completed row, and repeat
// until a full pass settles nothing. Returns false as soon as some line
// turns out to admit no placement, which fails the whole (speculative) grid.
fn propagate(grid: &mut Grid) -> bool {
    loop {
        let mut updated = false;

        for index in grid.cols_solve_order() {
            let update = grid.update_line(Vertical, index);
            if !update.rules_fit {
                debug!("column {} admits no placement, abandoning this grid", index);
                return false;
            }
            trace!("updated column {}: {} squares settled", index, update.n_updated);
            updated = updated || update.n_updated > 0;
        }
        for index in grid.rows_solve_order() {
            let update = grid.update_line(Horizontal, index);
            if !update.rules_fit {
                debug!("row {} admits no placement, abandoning this grid", index);
                return false;
            }
            trace!("updated row {}: {} squares settled", index, update.n_updated);
            updated = updated || update.n_updated > 0;
        }

        if !updated {
            return true;
        }
        debug!("propagation pass settled new squares, rerunning");
    }
}

fn solve_iter(mut grid: Grid) -> Grid {
    if !propagate(&mut grid) {
        return grid; // infeasible; the final flag stays unset
    }

    if let Some((x, y)) = grid.first_unknown() {
        // out of logically-inferrable changes; speculate on a single square
        // and keep whichever assignment leads to a full solution
        debug!("propagation stalled, speculating on square (x={}, y={})", x, y);
        if log_enabled!(Debug) {
            debug!("{}", grid.dump_fits());
        }

        for &status in &[FilledIn, CrossedOut] {
            let mut branch = grid.clone();
            branch.set_square(x, y, status);
            let outcome = solve_iter(branch);
            if outcome.is_final() {
                return outcome;
            }
            debug!("speculative {} at (x={}, y={}) went nowhere", status, x, y);
        }
        return grid; // neither value works out; let the parent branch roll back
    }

    grid.mark_final();
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn propagation_alone_solves_a_forced_puzzle() {
        let puzzle = Puzzle::parse("3 3\n1\n3\n1\n1\n3\n1\n").unwrap();
        let mut grid = Grid::new(&puzzle);
        assert!(propagate(&mut grid));
        assert!(grid.is_complete());
        assert_eq!(grid.render(false), "..XX..\nXXXXXX\n..XX..\n");
    }

    #[test]
    fn propagation_reports_an_infeasible_grid() {
        // the row clue wants both squares filled in, but the first column's
        // empty clue forbids its square
        let puzzle = Puzzle {
            width: 2,
            height: 1,
            col_run_lengths: vec![vec![], vec![1]],
            row_run_lengths: vec![vec![2]],
        };
        let mut grid = Grid::new(&puzzle);
        assert!(!propagate(&mut grid));
    }

    #[test]
    fn speculation_resolves_an_ambiguous_puzzle() {
        // two symmetric solutions; propagation cannot settle a single square
        let puzzle = Puzzle::parse("2 2\n1\n1\n1\n1\n").unwrap();
        let grid = puzzle.solve();
        assert!(grid.is_final());
        for line in grid.rows.iter().chain(grid.cols.iter()) {
            assert_eq!(line.filled_runs(), line.run_lengths);
        }
    }
}
