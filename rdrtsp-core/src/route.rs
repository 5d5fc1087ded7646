//! Visiting orders produced by planners.

use crate::Location;
use crate::distance::total_distance;

/// An ordered visiting sequence with its Manhattan cost.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use rdrtsp_core::{Day, Location, Route};
///
/// let route = Route::new(vec![
///     Location::new("A", Coord { x: 0.0, y: 0.0 }, Day::First, 0),
///     Location::new("B", Coord { x: 2.0, y: 1.0 }, Day::First, 1),
/// ]);
///
/// assert_eq!(route.names().collect::<Vec<_>>(), ["A", "B"]);
/// assert_eq!(route.total_distance(), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    stops: Vec<Location>,
    total_distance: f64,
}

impl Route {
    /// Construct a route, computing its cost from the stops.
    #[must_use]
    pub fn new(stops: Vec<Location>) -> Self {
        let total_distance = total_distance(&stops);
        Self {
            stops,
            total_distance,
        }
    }

    /// Construct a route by cloning borrowed stops.
    #[must_use]
    pub fn from_stops<'a, I>(stops: I) -> Self
    where
        I: IntoIterator<Item = &'a Location>,
    {
        Self::new(stops.into_iter().cloned().collect())
    }

    /// Stops in visiting order.
    #[must_use]
    pub fn stops(&self) -> &[Location] {
        &self.stops
    }

    /// Stop names in visiting order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.stops.iter().map(|stop| stop.name.as_str())
    }

    /// Sum of leg distances.
    #[must_use]
    pub const fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Number of stops.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Whether the route has no stops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}
