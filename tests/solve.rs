// vim: set ai et ts=4 sts=4 sw=4:
use nonogram::{Grid, ParseError, Puzzle};

fn solve(input: &str) -> Grid {
    let puzzle = Puzzle::parse(input).expect("puzzle should parse");
    let grid = puzzle.solve();
    assert!(grid.is_final(), "solver left the grid incomplete:\n{}", grid.render(false));
    grid
}

fn rows_of(grid: &Grid) -> Vec<String> {
    grid.rows.iter()
        .map(|row| row.cells.iter().map(|s| s.to_char()).collect())
        .collect()
}

// every row and column must reproduce its clue by exact run-length match
fn assert_satisfies_clues(grid: &Grid) {
    for line in grid.rows.iter().chain(grid.cols.iter()) {
        assert_eq!(line.filled_runs(), line.run_lengths,
                   "{} {} does not match its clue", line.direction, line.index);
    }
}

#[test]
fn single_row_with_isolated_squares() {
    let grid = solve("5 1\n1\n\n1\n\n1\n1 1 1\n");
    assert_eq!(rows_of(&grid), vec!["X.X.X"]);
    assert_satisfies_clues(&grid);
}

#[test]
fn single_row_with_a_centered_block() {
    // the empty column clues are spelled as a lone 0 here
    let grid = solve("5 1\n0\n1\n1\n1\n0\n3\n");
    assert_eq!(rows_of(&grid), vec![".XXX."]);
    assert_satisfies_clues(&grid);
}

#[test]
fn five_by_five_ladder() {
    let input = "5 5\n\
                 5\n\
                 1 1 1\n\
                 5\n\
                 1 1 1\n\
                 5\n\
                 5\n\
                 1 1\n\
                 5\n\
                 1 1\n\
                 5\n";
    let grid = solve(input);
    assert_eq!(rows_of(&grid), vec![
        "XXXXX",
        "X...X",
        "XXXXX",
        "X...X",
        "XXXXX",
    ]);
    assert_satisfies_clues(&grid);
}

#[test]
fn all_clues_empty_means_all_crossed_out() {
    let grid = solve("3 2\n\n\n\n\n\n");
    assert_eq!(rows_of(&grid), vec!["...", "..."]);
    assert_satisfies_clues(&grid);
}

#[test]
fn solution_print_doubles_every_square() {
    let grid = solve("5 1\n1\n\n1\n\n1\n1 1 1\n");
    assert_eq!(grid.render(false), "XX..XX..XX\n");
}

#[test]
fn ambiguous_puzzle_still_gets_a_valid_assignment() {
    // two mirror-image solutions exist; either one satisfies every clue
    let grid = solve("2 2\n1\n1\n1\n1\n");
    assert_satisfies_clues(&grid);
}

#[test]
fn eight_by_eight_picture() {
    //   ..XXXX..
    //   .X....X.
    //   X.X..X.X
    //   X......X
    //   X.X..X.X
    //   X..XX..X
    //   .X....X.
    //   ..XXXX..
    let input = "8 8\n\
                 4\n\
                 1 1\n\
                 1 1 1 1\n\
                 1 1 1\n\
                 1 1 1\n\
                 1 1 1 1\n\
                 1 1\n\
                 4\n\
                 4\n\
                 1 1\n\
                 1 1 1 1\n\
                 1 1\n\
                 1 1 1 1\n\
                 1 2 1\n\
                 1 1\n\
                 4\n";
    let grid = solve(input);
    assert_satisfies_clues(&grid);
}

#[test]
fn parse_errors_surface_before_solving() {
    assert!(matches!(Puzzle::parse(""), Err(ParseError::BadHeader)));
    assert!(matches!(Puzzle::parse("2 2\n1\n1\n1\n"),
                     Err(ParseError::MissingClueLines { .. })));
    assert!(matches!(Puzzle::parse("2 1\n1\nx\n1 1\n"),
                     Err(ParseError::BadRunLength { line: 3, .. })));
}
