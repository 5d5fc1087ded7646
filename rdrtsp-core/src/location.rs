use geo::Coord;

use crate::Day;

/// A named stop assigned to one day partition.
///
/// `record` is the zero-based position of the source record and
/// distinguishes stops that share a name.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use rdrtsp_core::{Day, Location};
///
/// let stop = Location::new("Harbour", Coord { x: 1.0, y: 2.0 }, Day::First, 0);
///
/// assert_eq!(stop.name, "Harbour");
/// assert_eq!(stop.day, Day::First);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// Display name, also used for start lookup and name-based filtering.
    pub name: String,
    /// Planar position.
    pub position: Coord<f64>,
    /// Day partition the stop belongs to.
    pub day: Day,
    /// Zero-based index of the source record.
    pub record: usize,
}

impl Location {
    /// Construct a `Location`.
    pub fn new(name: impl Into<String>, position: Coord<f64>, day: Day, record: usize) -> Self {
        Self {
            name: name.into(),
            position,
            day,
            record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_record_index() {
        let stop = Location::new("Pier", Coord { x: 0.0, y: 0.0 }, Day::Third, 7);
        assert_eq!(stop.record, 7);
        assert_eq!(stop.day, Day::Third);
    }
}
