//! Input records and the CSV loader.

use crate::errors::{self, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

pub type Year = u16;

/// One stop: what it was about, what happened, and who was stopped where.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Record {
    description: String,
    arrested: bool,
    frisked: bool,
    gender: String,
    race: String,
    location: String,
}

impl Record {
    pub fn new(
        description: &str,
        arrested: bool,
        frisked: bool,
        gender: &str,
        race: &str,
        location: &str,
    ) -> Record {
        Record {
            description: description.to_owned(),
            arrested,
            frisked,
            gender: gender.to_owned(),
            race: race.to_owned(),
            location: location.to_owned(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn arrested(&self) -> bool {
        self.arrested
    }

    pub fn frisked(&self) -> bool {
        self.frisked
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn race(&self) -> &str {
        &self.race
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

/// Where to find each field in a row.
#[derive(Clone, Debug)]
pub struct Layout {
    pub year: usize,
    pub description: usize,
    pub arrested: usize,
    pub frisked: usize,
    pub gender: usize,
    pub race: usize,
    pub location: usize,
    /// Value of a flag column that means "yes".
    pub marker: String,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            year: 0,
            description: 2,
            arrested: 13,
            frisked: 16,
            gender: 52,
            race: 66,
            location: 71,
            marker: "Y".to_owned(),
        }
    }
}

impl Layout {
    /// Minimum number of fields a row must have.
    pub fn width(&self) -> usize {
        [
            self.year,
            self.description,
            self.arrested,
            self.frisked,
            self.gender,
            self.race,
            self.location,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
            + 1
    }

    fn parse_row(&self, line: u64, row: &csv::StringRecord) -> Result<(Year, Record)> {
        if row.len() < self.width() {
            return Err(errors::invalid_input(format!(
                "line {line}: expected at least {} fields, got {}",
                self.width(),
                row.len()
            )));
        }
        let field = |i: usize| row.get(i).unwrap_or_default();
        let year = field(self.year);
        let year: Year = year
            .trim()
            .parse()
            .map_err(|e| {
                errors::invalid_input(format!("line {line}: invalid year '{year}': {e}"))
            })?;
        let record = Record::new(
            field(self.description),
            field(self.arrested) == self.marker,
            field(self.frisked) == self.marker,
            field(self.gender),
            field(self.race),
            field(self.location),
        );
        Ok((year, record))
    }
}

/// Parse all rows after the header line.
pub fn read_records<R: io::Read>(reader: R, layout: &Layout) -> Result<Vec<(Year, Record)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let mut records = Vec::new();
    for (i, row) in rdr.records().enumerate() {
        let row = row.map_err(|e| {
            let line = e.position().map_or(i as u64 + 2, |p| p.line());
            errors::invalid_input(format!("line {line}: {e}"))
        })?;
        let line = row.position().map_or(i as u64 + 2, |p| p.line());
        records.push(layout.parse_row(line, &row)?);
    }
    debug!(target: "sfstats", "parsed {} rows", records.len());
    Ok(records)
}

pub fn read_file<P: AsRef<Path>>(path: P, layout: &Layout) -> Result<Vec<(Year, Record)>> {
    let path = path.as_ref();
    info!(target: "sfstats", "read: {}", path.display());
    let file = fs::File::open(path)?;
    read_records(file, layout)
}
