// vim: set ai et ts=4 sts=4 sw=4:
pub mod util;
pub mod grid;
pub mod row;
pub mod puzzle;

pub use crate::grid::{Grid, SquareStatus};
pub use crate::puzzle::{ParseError, Puzzle};
