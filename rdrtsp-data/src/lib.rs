//! Location file loading for the rdrtsp planner.
//!
//! Input files hold one location per line as four comma-separated fields:
//! `name,x,y,day`. There is no header. `x` and `y` are finite decimal
//! coordinates and `day` is the zero-based day index (0, 1 or 2).
//! Whitespace around fields is ignored and blank lines are skipped.
#![forbid(unsafe_code)]

mod error;
pub mod fs;
mod reader;

pub use error::{Field, LoadError};
pub use reader::{load_locations, read_locations};
