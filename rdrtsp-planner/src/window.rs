//! Search seeding and the day-advance rule shared by both planners.

use log::{debug, warn};
use rdrtsp_core::{Day, Location, Locations, PlanError, StopIdentity};

/// Initial search state: the start stop(s) plus the first day's candidates.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSeed<'a> {
    /// Route so far, holding the start records.
    pub visited: Vec<&'a Location>,
    /// First-day pool minus the start.
    pub options: Vec<&'a Location>,
}

impl<'a> SearchSeed<'a> {
    /// Resolve `start` and collect the first day's candidates.
    ///
    /// Under [`StopIdentity::Name`] every record named `start` opens the
    /// route, in insertion order, and all of them count toward the day
    /// quota. Under [`StopIdentity::Record`] only the first such record does;
    /// its namesakes stay ordinary candidates.
    ///
    /// The start may belong to any day; candidates always come from the
    /// first pool. Fails with [`PlanError::EmptyOptions`] when no candidate
    /// remains.
    pub fn new(
        locations: &'a Locations,
        start: &str,
        identity: StopIdentity,
    ) -> Result<Self, PlanError> {
        let origin = locations.lookup(start)?;
        let visited: Vec<&'a Location> = match identity {
            StopIdentity::Name => locations.named(start).iter().collect(),
            StopIdentity::Record => vec![origin],
        };
        let options = identity.filter(&visited, locations.pool(Day::First));
        if options.is_empty() {
            return Err(PlanError::EmptyOptions { day: Day::First });
        }
        debug!(
            "seeded search at {:?} ({} records) with {} candidates",
            origin.name,
            visited.len(),
            options.len()
        );
        Ok(Self { visited, options })
    }
}

/// Tracks the open day and replaces candidates when the quota is reached.
///
/// The window is `Copy` so each search branch owns its own day state.
#[derive(Debug, Clone, Copy)]
pub struct DayWindow<'a> {
    locations: &'a Locations,
    identity: StopIdentity,
    day: Day,
}

impl<'a> DayWindow<'a> {
    /// A window opened on the first day.
    #[must_use]
    pub const fn new(locations: &'a Locations, identity: StopIdentity) -> Self {
        Self {
            locations,
            identity,
            day: Day::First,
        }
    }

    /// Day whose pool currently supplies candidates.
    #[must_use]
    pub const fn day(&self) -> Day {
        self.day
    }

    /// Apply the day-advance rule for a route of `visited` stops.
    ///
    /// Returns the replacement candidates when the next day opens: that
    /// day's full pool minus everything already visited. Candidates left over
    /// from the previous day are dropped.
    pub fn advance(&mut self, visited: &[&'a Location]) -> Option<Vec<&'a Location>> {
        let next = self.day.advance_for(visited.len())?;
        self.day = next;
        let opened = self.identity.filter(visited, self.locations.pool(next));
        if opened.is_empty() {
            warn!(
                "{next} opened after {} stops with no unvisited locations; route ends",
                visited.len()
            );
        } else {
            debug!("{next} opened after {} stops", visited.len());
        }
        Some(opened)
    }
}
