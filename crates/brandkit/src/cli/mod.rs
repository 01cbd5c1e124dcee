//! CLI subcommand implementations for the `brandkit` binary.

pub mod doctor;
pub mod output;
pub mod scrape_cmd;
pub mod serve_cmd;
