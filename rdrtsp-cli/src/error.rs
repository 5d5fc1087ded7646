//! Error types emitted by the rdrtsp CLI.
//!
//! Messages stay short; the binary renders the full source chain.

use camino::Utf8PathBuf;
use rdrtsp_core::PlanError;
use rdrtsp_data::LoadError;
use thiserror::Error;

/// Errors emitted by the rdrtsp CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// The start name was empty.
    #[error("{field} must not be empty")]
    EmptyArgument {
        /// Argument name.
        field: &'static str,
    },
    /// A flag only applies to a different strategy.
    #[error("--{flag} only applies to the {strategy} strategy")]
    FlagRequiresStrategy {
        /// Offending flag.
        flag: &'static str,
        /// Strategy the flag belongs to.
        strategy: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Argument name.
        field: &'static str,
        /// Requested path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Argument name.
        field: &'static str,
        /// Requested path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}")]
    InspectSourcePath {
        /// Argument name.
        field: &'static str,
        /// Requested path.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Loading the location file failed.
    #[error("failed to load locations")]
    Load(#[from] LoadError),
    /// The planner rejected the problem.
    #[error("failed to plan a route")]
    Plan(#[from] PlanError),
    /// Writing the summary or route failed.
    #[error("failed to write output")]
    WriteOutput(#[source] std::io::Error),
}
