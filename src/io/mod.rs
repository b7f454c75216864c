//! Writers for the SRIM input files.
//!
//! - [`trim`] – `TRIM.IN` for full transport runs
//! - [`sr`] – `SR.IN` for stopping-and-range tables
//! - [`autotrim`] – `TRIMAUTO`, the unattended start switch
//!
//! Every writer takes any [`std::io::Write`]; `write_to_dir` renders into
//! memory first and writes the file in one call. All lines end in CRLF,
//! as the SRIM programs expect.

/// `writeln!` with a CRLF terminator.
macro_rules! crlf {
    ($dst:expr, $($arg:tt)*) => {{
        write!($dst, $($arg)*).and_then(|_| $dst.write_all(b"\r\n"))
    }};
}

pub mod autotrim;
pub mod error;
pub mod sr;
pub mod trim;
mod util;

pub use error::Error;
pub use util::real;
