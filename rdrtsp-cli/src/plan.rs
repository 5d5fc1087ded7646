//! Plan command: load a location file, print its summary and the route.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, ValueEnum};
use log::debug;
use rdrtsp_core::{Day, Locations, Planner, Route, StopIdentity};
use rdrtsp_data::{fs::is_regular_file, load_locations};
use rdrtsp_planner::{BoundPolicy, ExhaustiveConfig, ExhaustivePlanner, GreedyPlanner};

use crate::{ARG_BOUND, ARG_SOURCE, ARG_START, ARG_STRATEGY, CliError};

/// Search strategy selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Strategy {
    /// Nearest-neighbour search.
    #[default]
    Greedy,
    /// Branch-and-bound search for a minimal-cost route.
    Exhaustive,
}

impl Strategy {
    const fn name(self) -> &'static str {
        match self {
            Self::Greedy => "greedy",
            Self::Exhaustive => "exhaustive",
        }
    }
}

/// Bound policy for the exhaustive strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum BoundArg {
    /// Tighten the bound after every improved route.
    Tightening,
    /// Hand every branch the caller's bound.
    Deferred,
}

impl From<BoundArg> for BoundPolicy {
    fn from(value: BoundArg) -> Self {
        match value {
            BoundArg::Tightening => Self::Tightening,
            BoundArg::Deferred => Self::Deferred,
        }
    }
}

/// How visited stops are removed from the candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum IdentityArg {
    /// Stops sharing a name are one stop.
    #[default]
    Name,
    /// Every record is its own stop.
    Record,
}

impl From<IdentityArg> for StopIdentity {
    fn from(value: IdentityArg) -> Self {
        match value {
            IdentityArg::Name => Self::Name,
            IdentityArg::Record => Self::Record,
        }
    }
}

/// Positional arguments and planner flags.
#[derive(Debug, Clone, Args)]
pub(crate) struct PlanArgs {
    /// Location file with one `name,x,y,day` record per line.
    #[arg(value_name = "path")]
    pub(crate) source: Utf8PathBuf,
    /// Name of the stop the route starts from.
    #[arg(value_name = "start")]
    pub(crate) start: String,
    /// Search strategy.
    #[arg(long = ARG_STRATEGY, value_enum, default_value_t = Strategy::Greedy)]
    pub(crate) strategy: Strategy,
    /// Bound policy for the exhaustive strategy [default: tightening].
    #[arg(long = ARG_BOUND, value_enum)]
    pub(crate) bound: Option<BoundArg>,
    /// Stop identity used when removing visited stops.
    #[arg(long, value_enum, default_value_t = IdentityArg::Name)]
    pub(crate) identity: IdentityArg,
}

/// Resolved planner selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PlannerChoice {
    Greedy(StopIdentity),
    Exhaustive(ExhaustiveConfig),
}

/// Resolved plan command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    pub(crate) source: Utf8PathBuf,
    pub(crate) start: String,
    pub(crate) planner: PlannerChoice,
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        if args.start.trim().is_empty() {
            return Err(CliError::EmptyArgument { field: ARG_START });
        }
        let identity = StopIdentity::from(args.identity);
        let planner = match (args.strategy, args.bound) {
            (Strategy::Greedy, None) => PlannerChoice::Greedy(identity),
            (Strategy::Greedy, Some(_)) => {
                return Err(CliError::FlagRequiresStrategy {
                    flag: ARG_BOUND,
                    strategy: Strategy::Exhaustive.name(),
                });
            }
            (Strategy::Exhaustive, bound) => PlannerChoice::Exhaustive(ExhaustiveConfig {
                bound: bound.map(BoundPolicy::from).unwrap_or_default(),
                identity,
            }),
        };
        Ok(Self {
            source: args.source,
            start: args.start,
            planner,
        })
    }
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.source, ARG_SOURCE)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match is_regular_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

/// Builds the planner for the current invocation.
pub(super) trait PlannerBuilder {
    fn build(&self, choice: PlannerChoice) -> Box<dyn Planner>;
}

pub(super) struct DefaultPlannerBuilder;

impl PlannerBuilder for DefaultPlannerBuilder {
    fn build(&self, choice: PlannerChoice) -> Box<dyn Planner> {
        match choice {
            PlannerChoice::Greedy(identity) => Box::new(GreedyPlanner::with_identity(identity)),
            PlannerChoice::Exhaustive(config) => Box::new(ExhaustivePlanner::with_config(config)),
        }
    }
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &DefaultPlannerBuilder, &mut stdout)
}

pub(super) fn run_plan_with(
    args: PlanArgs,
    builder: &dyn PlannerBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = PlanConfig::try_from(args)?;
    config.validate_sources()?;
    let locations = load_locations(&config.source)?;
    write_summary(writer, &locations)?;

    let planner = builder.build(config.planner);
    let plan = planner.plan(&locations, &config.start)?;
    debug!(
        "planned {} stops at cost {} ({} branches explored, {} pruned)",
        plan.route.len(),
        plan.route.total_distance(),
        plan.diagnostics.branches_explored,
        plan.diagnostics.branches_pruned
    );
    write_route(writer, &plan.route)
}

/// Summary line: distinct names, then the record count of each day pool.
pub(super) fn summary_line(locations: &Locations) -> String {
    let [first, second, third] = Day::ALL.map(|day| locations.pool(day).len());
    format!(
        "Loaded {} locations, day 1: {first}, day 2: {second}, day 3: {third}.",
        locations.unique_names()
    )
}

fn write_summary(writer: &mut dyn Write, locations: &Locations) -> Result<(), CliError> {
    writeln!(writer, "{}", summary_line(locations)).map_err(CliError::WriteOutput)
}

fn write_route(writer: &mut dyn Write, route: &Route) -> Result<(), CliError> {
    for name in route.names() {
        writeln!(writer, "{name}").map_err(CliError::WriteOutput)?;
    }
    writer.flush().map_err(CliError::WriteOutput)
}
