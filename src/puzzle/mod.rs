// vim: set ai et ts=4 sw=4 sts=4:
mod solver;

use std::fmt;
use std::num::ParseIntError;
use thiserror::Error;

// The parsed puzzle definition: dimensions plus the clue of every column and
// every row. Lines of the input file are, in order: `width height`, one clue
// line per column, one clue line per row. A clue line is whitespace-separated
// run lengths; a blank line (or a lone 0) is an empty clue.
#[derive(Clone, Debug)]
pub struct Puzzle {
    pub width:  usize,
    pub height: usize,
    pub col_run_lengths: Vec<Vec<usize>>,
    pub row_run_lengths: Vec<Vec<usize>>,
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line 1: expected `<width> <height>`")]
    BadHeader,

    #[error("line {line}: invalid run length: {source}")]
    BadRunLength {
        line: usize,
        source: ParseIntError,
    },

    #[error("expected {expected} clue lines, found {found}")]
    MissingClueLines {
        expected: usize,
        found: usize,
    },

    #[error("{direction} clue {index} needs {needed} squares but its line only has {available}")]
    ClueTooLong {
        direction: &'static str,
        index: usize,
        needed: usize,
        available: usize,
    },
}

impl Puzzle {
    pub fn parse(input: &str) -> Result<Puzzle, ParseError> {
        let mut lines = input.lines();

        let header = lines.next().ok_or(ParseError::BadHeader)?;
        let mut dims = header.split_whitespace()
                             .map(|v| v.parse::<usize>());
        let (width, height) = match (dims.next(), dims.next(), dims.next()) {
            (Some(Ok(w)), Some(Ok(h)), None) => (w, h),
            _ => return Err(ParseError::BadHeader),
        };

        let expected = width + height;
        let mut clues = Vec::with_capacity(expected);
        for (i, line) in lines.enumerate() {
            if clues.len() == expected {
                break; // trailing content is ignored
            }
            let clue = Self::parse_clue(line, i + 2)?;
            clues.push(clue);
        }
        if clues.len() < expected {
            return Err(ParseError::MissingClueLines { expected, found: clues.len() });
        }

        let row_run_lengths = clues.split_off(width);
        let puzzle = Puzzle {
            width,
            height,
            col_run_lengths: clues,
            row_run_lengths,
        };
        puzzle.validate()?;
        Ok(puzzle)
    }

    fn parse_clue(line: &str, line_no: usize) -> Result<Vec<usize>, ParseError> {
        let run_lengths = line.split_whitespace()
                              .map(|v| v.parse::<usize>())
                              .collect::<Result<Vec<_>, _>>()
                              .map_err(|source| ParseError::BadRunLength { line: line_no, source })?;
        // a lone 0 is an alternate spelling of the empty clue
        Ok(run_lengths.into_iter().filter(|&len| len > 0).collect())
    }

    // every clue has to physically fit its line: run lengths plus one
    // separating square between consecutive runs
    fn validate(&self) -> Result<(), ParseError> {
        let check = |direction, run_lengths: &[Vec<usize>], available: usize| {
            for (index, clue) in run_lengths.iter().enumerate() {
                if clue.is_empty() {
                    continue;
                }
                let needed = clue.iter().sum::<usize>() + clue.len() - 1;
                if needed > available {
                    return Err(ParseError::ClueTooLong { direction, index, needed, available });
                }
            }
            Ok(())
        };
        check("column", &self.col_run_lengths, self.height)?;
        check("row", &self.row_run_lengths, self.width)?;
        Ok(())
    }
}

impl Puzzle {
    // helper for Puzzle::fmt: one clue list plus the total number of filled
    // squares it implies
    fn fmt_run_lengths(f: &mut fmt::Formatter, run_lengths: &[Vec<usize>]) -> fmt::Result {
        let mut sum = 0usize;
        writeln!(f, "[")?;
        for clue in run_lengths {
            write!(f, " [")?;
            for &len in clue {
                write!(f, " {}", len)?;
                sum += len;
            }
            writeln!(f, " ]")?;
        }
        writeln!(f, "]")?;
        writeln!(f, "sum: {}", sum)
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "width: {} height: {}", self.width, self.height)?;
        write!(f, "columns: ")?;
        Self::fmt_run_lengths(f, &self.col_run_lengths)?;
        write!(f, "rows: ")?;
        Self::fmt_run_lengths(f, &self.row_run_lengths)
    }
}
