//! Command-line surface: `generate` writes a random grid graph document and
//! `solve` searches a document for a low-cost edge dominating set.

mod commands;
mod render;

pub use commands::{
    Cli, CliError, Command, CommandOutcome, DEFAULT_DOCUMENT, GenerateCommand, GenerateReport,
    SolveCommand, SolveReport, StrategyArg, render_outcome, run_cli,
};
pub use render::render_grid;
