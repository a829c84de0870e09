//! File system I/O: campus maps and the text history log.
//!
//! Nothing in the search core depends on this module.

mod campus_load;
mod history_file;

pub use campus_load::*;
pub use history_file::*;
