//! Command-line interface orchestration for minspan.
//!
//! `span` builds the tree for a point file, `random` for a seeded uniform
//! sample. Both render the edges as text or JSON and can append the preorder
//! tour of the tree.

mod commands;
mod render;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, OutputArgs, OutputFormat, RandomCommand,
    SpanCommand, StrategyArg, generate_points, run_cli,
};
pub use render::render_summary;
