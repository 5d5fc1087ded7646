//! Test-only builders for locations and problems.
//!
//! The helpers are available to unit tests and, behind the `test-support`
//! feature, to other crates' tests and benches.

use geo::Coord;

use crate::{Day, Location, Locations};

/// Construct a location from a zero-based day index.
///
/// # Panics
/// Panics when `day_index` is outside `0..=2`, so a malformed fixture fails
/// loudly instead of landing in another day's pool.
///
/// # Examples
/// ```rust
/// use rdrtsp_core::Day;
/// use rdrtsp_core::test_support::location;
///
/// let stop = location("A", 1.0, 2.0, 1, 0);
/// assert_eq!(stop.day, Day::Second);
/// ```
#[must_use]
pub fn location(name: &str, x: f64, y: f64, day_index: i64, record: usize) -> Location {
    let day = match Day::try_from(day_index) {
        Ok(day) => day,
        Err(err) => panic!("fixture row {name:?} has an invalid day: {err}"),
    };
    Location::new(name, Coord { x, y }, day, record)
}

/// Build a problem from `(name, x, y, day)` rows, numbering records in order.
///
/// # Examples
/// ```rust
/// use rdrtsp_core::Day;
/// use rdrtsp_core::test_support::problem;
///
/// let locations = problem(&[("A", 0.0, 0.0, 0), ("B", 1.0, 0.0, 0), ("C", 5.0, 5.0, 1)]);
/// assert_eq!(locations.pool(Day::First).len(), 2);
/// ```
#[must_use]
pub fn problem(rows: &[(&str, f64, f64, i64)]) -> Locations {
    rows.iter()
        .enumerate()
        .map(|(record, &(name, x, y, day))| location(name, x, y, day, record))
        .collect()
}

/// A grid of uniquely named stops spread across all three days.
///
/// Stop `i` sits at `(i % width, i / width)` and belongs to day
/// `i * 3 / count`, so each pool holds a contiguous third of the stops.
#[must_use]
#[expect(
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    clippy::cast_precision_loss,
    reason = "grid coordinates are small integers"
)]
pub fn grid(count: usize, width: usize) -> Locations {
    let columns = width.max(1);
    let total = count.max(1);
    (0..count)
        .map(|i| {
            let day = match i * 3 / total {
                0 => Day::First,
                1 => Day::Second,
                _ => Day::Third,
            };
            let position = Coord {
                x: (i % columns) as f64,
                y: (i / columns) as f64,
            };
            Location::new(format!("S{i}"), position, day, i)
        })
        .collect()
}
