//! Manhattan travel cost between stops.

use crate::Location;

/// Manhattan distance between two stops: `|dx| + |dy|`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use rdrtsp_core::{Day, Location, distance::manhattan};
///
/// let a = Location::new("A", Coord { x: 0.0, y: 0.0 }, Day::First, 0);
/// let b = Location::new("B", Coord { x: 3.0, y: -4.0 }, Day::First, 1);
/// assert_eq!(manhattan(&a, &b), 7.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "travel cost is a sum of coordinate differences"
)]
pub fn manhattan(from: &Location, to: &Location) -> f64 {
    let delta = from.position - to.position;
    delta.x.abs() + delta.y.abs()
}

/// Sum of [`manhattan`] legs between consecutive stops.
///
/// Routes with fewer than two stops cost nothing.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use rdrtsp_core::{Day, Location, distance::total_distance};
///
/// let stops = [
///     Location::new("A", Coord { x: 0.0, y: 0.0 }, Day::First, 0),
///     Location::new("B", Coord { x: 1.0, y: 0.0 }, Day::First, 1),
///     Location::new("C", Coord { x: 1.0, y: 2.0 }, Day::First, 2),
/// ];
/// assert_eq!(total_distance(&stops), 3.0);
/// assert_eq!(total_distance(&stops[..1]), 0.0);
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "accumulates leg costs")]
pub fn total_distance<'a, I>(stops: I) -> f64
where
    I: IntoIterator<Item = &'a Location>,
{
    let mut stops = stops.into_iter();
    let Some(mut previous) = stops.next() else {
        return 0.0;
    };
    stops.fold(0.0, |total, stop| {
        let leg = manhattan(previous, stop);
        previous = stop;
        total + leg
    })
}
