//! Test helpers for writing location files and invoking the plan command.

use super::*;
use crate::plan::{DefaultPlannerBuilder, run_plan_with};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

pub(super) const THREE_STOPS: &str = "A,0,0,0\nB,1,0,0\nC,5,5,1\n";
pub(super) const ZIGZAG: &str = "S,0,0,0\nL,-2,0,0\nR,1,0,0\nRR,3,0,0\n";

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// Temporary directory holding location files for one test.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn file(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.root.join(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}

/// Parse `args` after the program name and run the plan command, capturing
/// standard output.
pub(super) fn invoke<I, S>(args: I) -> (Result<(), CliError>, String)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let argv = std::iter::once("rdrtsp".to_owned()).chain(args.into_iter().map(Into::into));
    let mut stdout = Vec::new();
    let outcome = Cli::try_parse_from(argv)
        .map_err(CliError::from)
        .and_then(|cli| run_plan_with(cli.plan, &DefaultPlannerBuilder, &mut stdout));
    let printed = String::from_utf8(stdout).expect("stdout utf-8");
    (outcome, printed)
}
