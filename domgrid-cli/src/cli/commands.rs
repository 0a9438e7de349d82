//! Command implementations and argument parsing for the domgrid CLI.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::{Args, Parser, Subcommand, ValueEnum};
use domgrid_core::{
    DEFAULT_EDGE_COUNT, DEFAULT_SEED, DEFAULT_VERTEX_COUNT, DocumentError, GenerationError,
    GraphDocument, GraphGeneratorBuilder, SolveError, SolveStrategy, Solution, WeightedGraph,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::render::render_grid;

/// Document path used by both commands when none is given.
pub const DEFAULT_DOCUMENT: &str = "graph.json";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "domgrid",
    about = "Generate grid graphs and search them for minimum edge dominating sets."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a random connected grid graph and write it as JSON.
    Generate(GenerateCommand),
    /// Load a graph document and search it for an edge dominating set.
    Solve(SolveCommand),
}

/// Options accepted by `generate`.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Seed for the pseudo-random stream.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of vertices.
    #[arg(long, default_value_t = DEFAULT_VERTEX_COUNT)]
    pub nodes: usize,

    /// Number of edges.
    #[arg(long, default_value_t = DEFAULT_EDGE_COUNT)]
    pub edges: usize,

    /// Destination of the node-link JSON document.
    #[arg(long, default_value = DEFAULT_DOCUMENT)]
    pub output: PathBuf,
}

/// Options accepted by `solve`.
#[derive(Debug, Args, Clone)]
pub struct SolveCommand {
    /// Node-link JSON document to read.
    #[arg(long, default_value = DEFAULT_DOCUMENT)]
    pub input: PathBuf,

    /// Search strategy.
    #[arg(long, value_enum, default_value_t = StrategyArg::Greedy)]
    pub strategy: StrategyArg,

    /// Render the grid and edge list after the statistics line (default).
    #[arg(long = "graph", overrides_with = "no_graph")]
    pub graph: bool,

    /// Print only the statistics line.
    #[arg(long = "no-graph", overrides_with = "graph")]
    pub no_graph: bool,

    /// Write the document back with the chosen edges coloured red.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl SolveCommand {
    /// Whether the grid rendering follows the statistics line.
    #[must_use]
    pub const fn renders_graph(&self) -> bool {
        !self.no_graph
    }
}

/// Strategy names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Breadth-first search returning the first valid set.
    Greedy,
    /// Exact search over every subset.
    Exhaustive,
}

impl From<StrategyArg> for SolveStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Greedy => Self::Greedy,
            StrategyArg::Exhaustive => Self::Exhaustive,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading or writing a document failed.
    #[error("failed to access `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// A document could not be encoded or decoded.
    #[error("malformed graph document `{path}`: {source}")]
    Json {
        /// Path of the document.
        path: PathBuf,
        /// Underlying decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// Graph generation failed.
    #[error(transparent)]
    Generation(#[from] GenerationError),
    /// The solver rejected the graph.
    #[error(transparent)]
    Solve(#[from] SolveError),
    /// The document does not describe a supported graph.
    #[error(transparent)]
    Document(#[from] DocumentError),
}

impl CliError {
    /// Stable code of the underlying core error, when there is one.
    #[must_use]
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Self::Generation(err) => Some(err.code().as_str()),
            Self::Solve(err) => Some(err.code().as_str()),
            Self::Document(err) => Some(err.code().as_str()),
            Self::Io { .. } | Self::Json { .. } => None,
        }
    }
}

/// Result of a successful `generate`.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    /// Where the document was written.
    pub path: PathBuf,
    /// The generated graph.
    pub graph: WeightedGraph,
}

/// Result of a successful `solve`.
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// Strategy that ran.
    pub strategy: SolveStrategy,
    /// Input graph with the solution's edges marked selected.
    pub graph: WeightedGraph,
    /// The dominating set found.
    pub solution: Solution,
    /// Wall-clock time spent in the solver.
    pub elapsed: Duration,
    /// Whether rendering should include the grid.
    pub render_graph: bool,
}

/// What a command produced.
#[derive(Debug, Clone)]
pub enum CommandOutcome {
    /// Output of `generate`.
    Generated(GenerateReport),
    /// Output of `solve`.
    Solved(SolveReport),
}

/// Executes the command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when document I/O, generation or the search fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use domgrid_cli::cli::{Cli, Command, CommandOutcome, GenerateCommand, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let cli = Cli {
///     command: Command::Generate(GenerateCommand {
///         seed: 7,
///         nodes: 4,
///         edges: 5,
///         output: dir.path().join("graph.json"),
///     }),
/// };
/// let CommandOutcome::Generated(report) = run_cli(cli)? else {
///     unreachable!("generate yields a generation report");
/// };
/// assert_eq!(report.graph.edge_count(), 5);
/// assert!(report.path.exists());
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<CommandOutcome, CliError> {
    match cli.command {
        Command::Generate(command) => {
            Span::current().record("command", "generate");
            run_generate(command).map(CommandOutcome::Generated)
        }
        Command::Solve(command) => {
            Span::current().record("command", "solve");
            run_solve(command).map(CommandOutcome::Solved)
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(path = %command.output.display()),
)]
pub(super) fn run_generate(command: GenerateCommand) -> Result<GenerateReport, CliError> {
    let graph = GraphGeneratorBuilder::new()
        .with_vertex_count(command.nodes)
        .with_edge_count(command.edges)
        .with_seed(command.seed)
        .build()?
        .generate()?;
    write_document(&command.output, &graph)?;
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph document written"
    );
    Ok(GenerateReport {
        path: command.output,
        graph,
    })
}

#[instrument(
    name = "cli.solve",
    err,
    skip(command),
    fields(path = %command.input.display(), strategy = field::Empty),
)]
pub(super) fn run_solve(command: SolveCommand) -> Result<SolveReport, CliError> {
    let strategy = SolveStrategy::from(command.strategy);
    Span::current().record("strategy", strategy.as_str());

    let mut graph = read_document(&command.input)?;
    let started = Instant::now();
    let solution = strategy.solve(&graph)?;
    let elapsed = started.elapsed();
    graph.mark_selected(&solution);

    if let Some(path) = &command.output {
        write_document(path, &graph)?;
    }
    info!(
        cost = solution.cost(),
        size = solution.edges().len(),
        elapsed_ms = elapsed.as_secs_f64() * 1_000.0,
        "solve command completed"
    );
    Ok(SolveReport {
        strategy,
        graph,
        solution,
        elapsed,
        render_graph: command.renders_graph(),
    })
}

pub(super) fn read_document(path: &Path) -> Result<WeightedGraph, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document: GraphDocument =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(document.into_graph()?)
}

pub(super) fn write_document(path: &Path, graph: &WeightedGraph) -> Result<(), CliError> {
    let io_error = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, &GraphDocument::from_graph(graph)).map_err(|source| {
        CliError::Json {
            path: path.to_path_buf(),
            source,
        }
    })?;
    writer.flush().map_err(io_error)
}

/// Renders `outcome` to `writer`.
///
/// `solve` prints `candidates,operations,cost,seconds` on one line, followed
/// by the grid rendering unless it was disabled. Floats always carry a
/// fractional part, so a cost of two prints as `2.0`.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
pub fn render_outcome(outcome: &CommandOutcome, mut writer: impl Write) -> io::Result<()> {
    match outcome {
        CommandOutcome::Generated(report) => writeln!(
            writer,
            "wrote {} vertices and {} edges to {}",
            report.graph.vertex_count(),
            report.graph.edge_count(),
            report.path.display()
        ),
        CommandOutcome::Solved(report) => {
            let stats = report.solution.stats();
            writeln!(
                writer,
                "{},{},{:?},{:?}",
                stats.candidates_examined(),
                stats.operations(),
                report.solution.cost(),
                report.elapsed.as_secs_f64()
            )?;
            if report.render_graph {
                render_grid(&report.graph, &mut writer)?;
            }
            Ok(())
        }
    }
}
