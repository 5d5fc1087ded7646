//! CSV parsing of location records.

use std::io::Read;

use camino::Utf8Path;
use csv::{ReaderBuilder, StringRecord, Trim};
use geo::Coord;
use log::{debug, info};
use rdrtsp_core::{Day, Location, Locations};

use crate::error::{Field, LoadError};
use crate::fs::open_file;

const FIELD_COUNT: usize = 4;

/// Load and partition the locations stored at `path`.
///
/// # Errors
///
/// Returns [`LoadError::Open`] when the file cannot be opened, and any error
/// [`read_locations`] reports for its contents.
pub fn load_locations(path: &Utf8Path) -> Result<Locations, LoadError> {
    let file = open_file(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let locations = read_locations(file)?;
    info!(
        "loaded {} records ({} names) from {path}",
        locations.len(),
        locations.unique_names()
    );
    Ok(locations)
}

/// Parse `name,x,y,day` records from `reader`.
///
/// Records are numbered from zero in input order. Parsing stops at the first
/// malformed record.
///
/// # Errors
///
/// Returns a [`LoadError`] naming the first offending line.
///
/// # Examples
/// ```
/// use rdrtsp_core::Day;
/// use rdrtsp_data::read_locations;
///
/// let locations = read_locations(b"A, 0, 0, 0\nB,1,0,0\nC,5,5,1\n".as_slice())?;
/// assert_eq!(locations.pool(Day::First).len(), 2);
/// assert_eq!(locations.lookup("C")?.record, 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn read_locations<R: Read>(reader: R) -> Result<Locations, LoadError> {
    let mut rows = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut locations = Locations::new();
    for (index, result) in rows.records().enumerate() {
        let record = result?;
        let line = record.position().map_or(0, csv::Position::line);
        let location = parse_record(&record, line, index)?;
        debug!("line {line}: {} on {}", location.name, location.day);
        locations.insert(location);
    }
    Ok(locations)
}

fn parse_record(record: &StringRecord, line: u64, index: usize) -> Result<Location, LoadError> {
    let [name, x_text, y_text, day_text] = fields(record).ok_or_else(|| LoadError::FieldCount {
        line,
        found: record.len(),
    })?;
    let position = Coord {
        x: parse_coordinate(x_text, Field::X, line)?,
        y: parse_coordinate(y_text, Field::Y, line)?,
    };
    let value: i64 = day_text.parse().map_err(|_| LoadError::Parse {
        line,
        field: Field::Day,
        value: day_text.to_owned(),
    })?;
    let day = Day::try_from(value).map_err(|_| LoadError::DayOutOfRange { line, value })?;
    Ok(Location::new(name, position, day, index))
}

fn fields(record: &StringRecord) -> Option<[&str; FIELD_COUNT]> {
    if record.len() != FIELD_COUNT {
        return None;
    }
    Some([record.get(0)?, record.get(1)?, record.get(2)?, record.get(3)?])
}

fn parse_coordinate(text: &str, field: Field, line: u64) -> Result<f64, LoadError> {
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| LoadError::Parse {
            line,
            field,
            value: text.to_owned(),
        })
}
