// vim: set ai et ts=4 sts=4 sw=4:
use super::super::grid::SquareStatus::{self, CrossedOut, FilledIn, Unknown};

// Outcome of running the line updater on a single row or column.
#[derive(Debug)]
pub struct UpdateResult {
    pub rules_fit: bool,
    pub n_updated: usize,
    pub completed: bool,
    pub lfit:      Option<Vec<usize>>,
    pub rfit:      Option<Vec<usize>>,
}

impl UpdateResult {
    fn infeasible() -> Self {
        UpdateResult {
            rules_fit: false,
            n_updated: 0,
            completed: false,
            lfit:      None,
            rfit:      None,
        }
    }
}

// Places the remaining runs left-to-right into cells[pos..], trying each
// candidate start position in increasing order; the first success is
// therefore the leftmost placement of every remaining run. Successful starts
// are appended to `fit`.
//
// Advancing past a filled square is never allowed: the current run either
// covers it from this position or the whole branch fails, since no later run
// may start before it either.
fn fit_iter(run_lengths: &[usize],
            cells: &[SquareStatus],
            start: usize,
            fit: &mut Vec<usize>) -> bool
{
    let (&run, remaining) = match run_lengths.split_first() {
        Some(x) => x,
        None    => return true,
    };
    let is_last_run = remaining.is_empty();
    // a non-final run needs room for itself plus a separating square
    let min_required_space = if is_last_run { run } else { run + 1 };

    let mut pos = start;
    while pos + min_required_space <= cells.len() {
        let mut can_place = cells[pos..pos+run].iter().all(|&s| s != CrossedOut);
        if is_last_run {
            // everything after the final run has to stay clear
            can_place = can_place && cells[pos+run..].iter().all(|&s| s != FilledIn);
        } else {
            can_place = can_place && cells[pos+run] != FilledIn;
        }

        if can_place {
            fit.push(pos);
            if fit_iter(remaining, cells, pos + run + 1, fit) {
                return true;
            }
            fit.pop();
        }

        if cells[pos] == FilledIn {
            // this run was the last chance to cover the filled square at pos
            return false;
        }
        pos += 1;
    }
    false
}

// Leftmost valid placement of the clue's runs against the line, or None when
// no valid placement exists. Expects a non-empty clue; the empty clue is the
// updater's business.
pub fn fit_left(run_lengths: &[usize], cells: &[SquareStatus]) -> Option<Vec<usize>> {
    let mut fit = Vec::with_capacity(run_lengths.len());
    if fit_iter(run_lengths, cells, 0, &mut fit) {
        Some(fit)
    } else {
        None
    }
}

// Rightmost valid placement, by symmetry: run the leftmost search on the
// reversed clue and reversed line, then map each start back.
pub fn fit_right(run_lengths: &[usize], cells: &[SquareStatus]) -> Option<Vec<usize>> {
    let reversed_runs  = run_lengths.iter().rev().cloned().collect::<Vec<_>>();
    let reversed_cells = cells.iter().rev().cloned().collect::<Vec<_>>();

    let mut fit = fit_left(&reversed_runs, &reversed_cells)?;
    fit.reverse();
    for (i, start) in fit.iter_mut().enumerate() {
        *start = cells.len() - *start - run_lengths[i];
    }
    Some(fit)
}

// The line updater: settles every square whose value is forced by the
// clue's extreme placements, in place.
//
// Two deduction rules, both derived from the leftmost fit L and rightmost
// fit R:
//  - intersection: run i occupies [R[i], L[i]+len_i) in every placement,
//    so those squares are filled in;
//  - gap: squares before L[0], between R[i]+len_i and L[i+1], or from
//    R[k-1]+len_{k-1} onwards are out of reach of every run, so they are
//    crossed out.
//
// The line is completed once every run has a unique position (L == R).
pub fn update_squares(run_lengths: &[usize], cells: &mut [SquareStatus]) -> UpdateResult {
    let mut n_updated = 0usize;

    if run_lengths.is_empty() {
        // a clueless line holds no filled squares at all
        if cells.iter().any(|&s| s == FilledIn) {
            return UpdateResult::infeasible();
        }
        for status in cells.iter_mut() {
            if *status == Unknown {
                *status = CrossedOut;
                n_updated += 1;
            }
        }
        return UpdateResult {
            rules_fit: true,
            n_updated,
            completed: true,
            lfit:      Some(Vec::new()),
            rfit:      Some(Vec::new()),
        };
    }

    let lfit = match fit_left(run_lengths, cells) {
        Some(fit) => fit,
        None      => return UpdateResult::infeasible(),
    };
    let rfit = fit_right(run_lengths, cells)
        .expect("no rightmost fit on a line that has a leftmost fit");
    for i in 0..run_lengths.len() {
        assert!(lfit[i] <= rfit[i],
                "leftmost fit {:?} crosses rightmost fit {:?}", lfit, rfit);
    }

    for (i, &run) in run_lengths.iter().enumerate() {
        for at in rfit[i] .. lfit[i] + run {
            match cells[at] {
                FilledIn   => {},
                Unknown    => { cells[at] = FilledIn; n_updated += 1; },
                CrossedOut => panic!("crossed-out square at {} inside the forced span of run {}", at, i),
            }
        }
    }

    let last = run_lengths.len() - 1;
    cross_out(cells, 0, lfit[0], &mut n_updated);
    for i in 0..last {
        cross_out(cells, rfit[i] + run_lengths[i], lfit[i+1], &mut n_updated);
    }
    cross_out(cells, rfit[last] + run_lengths[last], cells.len(), &mut n_updated);

    let completed = lfit == rfit;
    UpdateResult {
        rules_fit: true,
        n_updated,
        completed,
        lfit: Some(lfit),
        rfit: Some(rfit),
    }
}

// Crosses out every square in [from, to); the range may be empty or inverted
// when the neighbouring runs' reaches overlap.
fn cross_out(cells: &mut [SquareStatus], from: usize, to: usize, n_updated: &mut usize) {
    for at in from..to.max(from) {
        match cells[at] {
            CrossedOut => {},
            Unknown    => { cells[at] = CrossedOut; *n_updated += 1; },
            FilledIn   => panic!("filled square at {} out of reach of every run", at),
        }
    }
}
