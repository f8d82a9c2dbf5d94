// vim: set ai et ts=4 sts=4 sw=4:
use std::fs;
use std::io;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{App, Arg};
use fern;
use log;

use nonogram::util::is_a_tty;
use nonogram::Puzzle;

fn main() -> Result<()> {
    let matches = App::new("nonogram")
                      .arg(Arg::with_name("input_file")
                               .required(true)
                               .help("input file containing the puzzle definition")
                               .index(1))
                      .arg(Arg::with_name("quiet")
                               .help("suppress the puzzle echo and the solution print")
                               .short("q")
                               .long("quiet"))
                      .arg(Arg::with_name("benchmark")
                               .help("print the wall-clock time taken by the solver")
                               .short("b")
                               .long("benchmark"))
                      .arg(Arg::with_name("color")
                               .help("whether to output ANSI color escape sequences")
                               .long("color")
                               .possible_values(&["yes", "no", "auto"])
                               .default_value("auto"))
                      .arg(Arg::with_name("verbose")
                               .help("Increases logging verbosity each use for up to 2 times")
                               .short("v")
                               .long("verbose")
                               .multiple(true))
                      .get_matches();

    let mut log_config = fern::Dispatch::new()
                            .format(|out, msg, _record| {
                                out.finish(format_args!("{}", msg))
                            })
                            .chain(io::stdout());
    log_config = match matches.occurrences_of("verbose") {
        0 => log_config.level(log::LevelFilter::Info),
        1 => log_config.level(log::LevelFilter::Debug),
        _ => log_config.level(log::LevelFilter::Trace),
    };
    log_config.apply().expect("failed to install the logger");

    let quiet = matches.is_present("quiet");
    let emit_color = match matches.value_of("color") {
        Some("yes") => true,
        Some("no")  => false,
        _           => is_a_tty(io::stdout()),
    };

    let input_file = matches.value_of("input_file").unwrap();
    let contents = fs::read_to_string(input_file)
                       .with_context(|| format!("failed to read {}", input_file))?;
    let puzzle = Puzzle::parse(&contents)
                        .with_context(|| format!("failed to parse {}", input_file))?;

    if !quiet {
        print!("{}", puzzle);
    }

    let solution = if matches.is_present("benchmark") {
        let begin = Instant::now();
        let solution = puzzle.solve();
        println!("solve_puzzle took {} ns", begin.elapsed().as_nanos());
        solution
    } else {
        puzzle.solve()
    };

    // the inputs in scope are guaranteed solvable; coming back without a
    // full assignment means the solver itself is broken
    assert!(solution.is_final(),
            "solver returned an incomplete grid:\n{}", solution.render(false));

    if !quiet {
        print!("{}", solution.render(emit_color));
    }
    Ok(())
}
