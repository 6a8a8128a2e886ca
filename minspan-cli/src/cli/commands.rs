//! Command implementations and argument parsing for the minspan CLI.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use minspan_core::{MergeStrategy, MinSpanError, MstBuilder, Point, SpanningTree};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use crate::points::{PointsFileError, read_points};

const DEFAULT_RANDOM_COUNT: usize = 200;
const DEFAULT_SEED: u64 = 42;
const DEFAULT_WIDTH: i32 = 1_600;
const DEFAULT_HEIGHT: i32 = 900;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "minspan",
    about = "Compute Euclidean minimum spanning trees over integer points."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Build the tree for points read from a file.
    Span(SpanCommand),
    /// Build the tree for seeded random points.
    Random(RandomCommand),
}

/// Options accepted by the `span` command.
#[derive(Debug, Args, Clone)]
pub struct SpanCommand {
    /// Path to a UTF-8 file with one `x y` or `x,y` point per line.
    pub path: PathBuf,

    /// Override name for the point source (defaults to the file stem).
    #[arg(long)]
    pub name: Option<String>,

    /// Output and build options.
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Options accepted by the `random` command.
#[derive(Debug, Args, Clone)]
pub struct RandomCommand {
    /// Number of points to generate.
    #[arg(long, default_value_t = DEFAULT_RANDOM_COUNT)]
    pub count: usize,

    /// Seed for the point generator.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Points are drawn with `0 <= x < width`.
    #[arg(
        long,
        default_value_t = DEFAULT_WIDTH,
        value_parser = clap::value_parser!(i32).range(1..),
    )]
    pub width: i32,

    /// Points are drawn with `0 <= y < height`.
    #[arg(
        long,
        default_value_t = DEFAULT_HEIGHT,
        value_parser = clap::value_parser!(i32).range(1..),
    )]
    pub height: i32,

    /// Output and build options.
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Options shared by every command.
#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    /// Output format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Component bookkeeping used by the builder.
    #[arg(long, value_enum, default_value_t = StrategyArg::DisjointSet)]
    pub strategy: StrategyArg,

    /// Also emit the preorder tour of the tree.
    #[arg(long)]
    pub tour: bool,
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated edge lines after a short header.
    Text,
    /// A single pretty-printed JSON document.
    Json,
}

/// Merge strategies selectable from the command line.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum StrategyArg {
    /// Rewrite labels of the absorbed component on each merge.
    Relabel,
    /// Union by rank with path compression.
    DisjointSet,
}

impl StrategyArg {
    pub(super) const fn label(self) -> &'static str {
        match self {
            Self::Relabel => "relabel",
            Self::DisjointSet => "disjoint-set",
        }
    }
}

impl From<StrategyArg> for MergeStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Relabel => Self::Relabel,
            StrategyArg::DisjointSet => Self::DisjointSet,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while opening a point file.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The point file was malformed.
    #[error(transparent)]
    Points(#[from] PointsFileError),
    /// The spanning tree build failed.
    #[error(transparent)]
    Core(#[from] MinSpanError),
}

/// Outcome of a CLI command, ready to render.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the point source.
    pub source: String,
    /// Points the tree was built over.
    pub points: Vec<Point>,
    /// Strategy the builder ran with.
    pub strategy: StrategyArg,
    /// The tree, absent when fewer than two points were supplied.
    pub tree: Option<SpanningTree>,
    /// Preorder tour, present when requested and a tree exists.
    pub tour: Option<Vec<usize>>,
    /// Requested output format.
    pub format: OutputFormat,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading points or building the tree fails.
///
/// # Examples
/// ```
/// use minspan_cli::cli::{
///     Cli, Command, OutputArgs, OutputFormat, RandomCommand, StrategyArg, run_cli,
/// };
///
/// let cli = Cli {
///     command: Command::Random(RandomCommand {
///         count: 10,
///         seed: 7,
///         width: 100,
///         height: 100,
///         output: OutputArgs {
///             format: OutputFormat::Text,
///             strategy: StrategyArg::DisjointSet,
///             tour: true,
///         },
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.tree.map(|tree| tree.len()), Some(9));
/// assert_eq!(summary.tour.map(|tour| tour.len()), Some(10));
/// # Ok::<(), minspan_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Span(command) => {
            Span::current().record("command", field::display("span"));
            run_span(command)
        }
        Command::Random(command) => {
            Span::current().record("command", field::display("random"));
            run_random(command)
        }
    }
}

#[instrument(
    name = "cli.span",
    err,
    skip(command),
    fields(path = %command.path.display(), override_name = field::Empty),
)]
pub(super) fn run_span(command: SpanCommand) -> Result<ExecutionSummary, CliError> {
    let SpanCommand { path, name, output } = command;
    Span::current().record(
        "override_name",
        field::display(name.as_deref().unwrap_or("<derived>")),
    );
    let source = derive_source_name(&path, name.as_deref());
    let points = load_points(&path)?;
    summarise(source, points, &output)
}

#[instrument(
    name = "cli.random",
    err,
    skip(command),
    fields(count = command.count, seed = command.seed),
)]
pub(super) fn run_random(command: RandomCommand) -> Result<ExecutionSummary, CliError> {
    let points = generate_points(command.count, command.seed, command.width, command.height);
    let source = format!("random(seed={})", command.seed);
    summarise(source, points, &command.output)
}

#[instrument(name = "cli.load_points", err, fields(points = field::Empty))]
pub(super) fn load_points(path: &Path) -> Result<Vec<Point>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let points = read_points(BufReader::new(file))?;
    Span::current().record("points", points.len());
    Ok(points)
}

fn summarise(
    source: String,
    points: Vec<Point>,
    output: &OutputArgs,
) -> Result<ExecutionSummary, CliError> {
    let tree = MstBuilder::new()
        .with_merge_strategy(output.strategy.into())
        .build(&points)?;
    let tour = tree
        .as_ref()
        .filter(|_| output.tour)
        .map(SpanningTree::preorder_tour);

    info!(
        source = source.as_str(),
        points = points.len(),
        edges = tree.as_ref().map_or(0, SpanningTree::len),
        "command completed"
    );
    Ok(ExecutionSummary {
        source,
        points,
        strategy: output.strategy,
        tree,
        tour,
        format: output.format,
    })
}

/// Draws `count` points uniformly from `[0, width) × [0, height)`.
///
/// The same seed always yields the same points.
///
/// # Examples
/// ```
/// use minspan_cli::cli::generate_points;
///
/// let points = generate_points(5, 1, 10, 10);
/// assert_eq!(points.len(), 5);
/// assert_eq!(points, generate_points(5, 1, 10, 10));
/// ```
#[must_use]
pub fn generate_points(count: usize, seed: u64, width: i32, height: i32) -> Vec<Point> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Point::new(
                rng.gen_range(0..width.max(1)),
                rng.gen_range(0..height.max(1)),
            )
        })
        .collect()
}

pub(super) fn derive_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "points".to_owned(), ToOwned::to_owned)
}
