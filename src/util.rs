// vim: set ai et ts=4 sw=4 sts=4:
use std::fmt;
use std::os::unix::io::AsRawFd;

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    // how a line of this orientation is referred to in messages
    pub fn label(self) -> &'static str {
        match self {
            Direction::Horizontal => "row",
            Direction::Vertical   => "column",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn is_a_tty<T: AsRawFd>(handle: T) -> bool {
    unsafe { libc::isatty(handle.as_raw_fd()) != 0 }
}
