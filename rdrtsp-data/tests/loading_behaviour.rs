//! Behavioural tests for loading location files from disk.

use std::cell::RefCell;

use camino::Utf8PathBuf;
use rdrtsp_core::{Day, Locations};
use rdrtsp_data::{LoadError, load_locations};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;

#[derive(Debug)]
struct LoadWorld {
    dir: TempDir,
    path: RefCell<Option<Utf8PathBuf>>,
    outcome: RefCell<Option<Result<Locations, LoadError>>>,
}

impl LoadWorld {
    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn file(&self, name: &str) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(self.dir.path().join(name)).expect("utf-8 temp path")
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn loaded(&self) -> Locations {
        let outcome = self.outcome.borrow();
        match outcome.as_ref().expect("file should be loaded first") {
            Ok(locations) => locations.clone(),
            Err(err) => panic!("expected load success, got {err}"),
        }
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn failure<T>(&self, check: impl FnOnce(&LoadError) -> T) -> T {
        let outcome = self.outcome.borrow();
        match outcome.as_ref().expect("file should be loaded first") {
            Ok(_) => panic!("expected load failure"),
            Err(err) => check(err),
        }
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn write(&self, contents: &str) {
        let path = self.file("stops.csv");
        std::fs::write(&path, contents).expect("write location file");
        self.path.replace(Some(path));
    }
}

#[fixture]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn world() -> LoadWorld {
    LoadWorld {
        dir: TempDir::new().expect("temp dir"),
        path: RefCell::new(None),
        outcome: RefCell::new(None),
    }
}

#[given("a location file with stops A and B on day 1 and C on day 2")]
fn given_well_formed_file(world: &LoadWorld) {
    world.write("A,0,0,0\nB,1,0,0\nC,5,5,1\n");
}

#[given("a location file whose second record has three fields")]
fn given_short_record(world: &LoadWorld) {
    world.write("A,0,0,0\nB,1,0\n");
}

#[given("a location file that does not exist")]
fn given_missing_file(world: &LoadWorld) {
    world.path.replace(Some(world.file("missing.csv")));
}

#[when("the file is loaded")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn when_loaded(world: &LoadWorld) {
    let path = world.path.borrow().clone().expect("path should be set");
    world.outcome.replace(Some(load_locations(&path)));
}

#[then("{count} records are loaded")]
fn then_record_count(world: &LoadWorld, count: usize) {
    assert_eq!(world.loaded().len(), count);
}

#[then("day 1 holds {count} records")]
fn then_first_pool(world: &LoadWorld, count: usize) {
    assert_eq!(world.loaded().pool(Day::First).len(), count);
}

#[then("loading fails on line {line}")]
fn then_fails_on_line(world: &LoadWorld, line: u64) {
    assert_eq!(world.failure(LoadError::line), Some(line));
}

#[then("loading fails to open the file")]
fn then_fails_to_open(world: &LoadWorld) {
    assert!(world.failure(|err| matches!(err, LoadError::Open { .. })));
}

#[scenario(path = "tests/features/loading.feature", index = 0)]
fn loads_well_formed_file(world: LoadWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/loading.feature", index = 1)]
fn rejects_short_record(world: LoadWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/loading.feature", index = 2)]
fn reports_missing_file(world: LoadWorld) {
    let _ = world;
}
