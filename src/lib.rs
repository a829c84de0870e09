pub mod config;
pub mod error;
pub mod fs;
pub mod graph;
pub mod history;
pub mod logging;
pub mod search;
pub mod sets;
pub mod statistics;
