// Frameworks layer: configuration, logging and the command-line entry point.

pub mod cli;
pub mod config;
pub mod logging;
