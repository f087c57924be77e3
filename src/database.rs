//! Records grouped by year, and the queries over them.

use crate::borough::Borough;
use crate::errors::{self, Result};
use crate::information;
use crate::input::{self, Layout, Record, Year};
use crate::output::{GenderBreakdown, GenderRow, StopRates};
use itertools::Itertools;
use std::collections::hash_map::Entry::{Occupied, Vacant};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// All records of one year, in file order.
#[derive(Debug)]
pub struct YearBucket {
    year: Year,
    records: Vec<Record>,
}

impl YearBucket {
    pub fn new(year: Year) -> YearBucket {
        YearBucket {
            year,
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn year(&self) -> Year {
        self.year
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn count<F: Fn(&Record) -> bool>(&self, f: F) -> usize {
        self.records.iter().filter(|&r| f(r)).count()
    }

    /// `count` as a percentage of all records; the bucket must not be empty.
    fn percent(&self, count: usize) -> f64 {
        count as f64 / self.len() as f64 * 100.0
    }
}

#[derive(Debug, Default)]
pub struct Database {
    buckets: HashMap<Year, YearBucket>,
}

impl Database {
    /// Build the database in one pass.
    pub fn load<I>(records: I) -> Database
    where
        I: IntoIterator<Item = (Year, Record)>,
    {
        let mut buckets = HashMap::new();
        for (year, record) in records {
            let bucket = match buckets.entry(year) {
                Occupied(e) => e.into_mut(),
                Vacant(e) => e.insert(YearBucket::new(year)),
            };
            bucket.push(record);
        }
        Database { buckets }
    }

    /// Read a CSV file and build the database from it.
    pub fn from_file<P: AsRef<Path>>(path: P, layout: &Layout) -> Result<Database> {
        let db = Database::load(input::read_file(path, layout)?);
        information::statistics(&db);
        Ok(db)
    }

    pub fn bucket(&self, year: Year) -> Option<&YearBucket> {
        self.buckets.get(&year)
    }

    /// Years present, in ascending order.
    pub fn years(&self) -> Vec<Year> {
        self.buckets.keys().copied().sorted().collect_vec()
    }

    /// Total number of records.
    pub fn len(&self) -> usize {
        self.buckets.values().map(|b| b.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn existing(&self, year: Year) -> Result<&YearBucket> {
        self.bucket(year).ok_or_else(|| errors::year_not_found(year))
    }

    fn nonempty(&self, year: Year) -> Result<&YearBucket> {
        let bucket = self.existing(year)?;
        if bucket.is_empty() {
            return Err(errors::empty_cohort(format!("no records in {year}")));
        }
        Ok(bucket)
    }

    /// Records of the given year and race; empty if the year is not present.
    pub fn records_by_race(&self, year: Year, race: &str) -> Vec<&Record> {
        match self.bucket(year) {
            None => vec![],
            Some(bucket) => bucket
                .records()
                .iter()
                .filter(|r| r.race() == race)
                .collect_vec(),
        }
    }

    /// Number of records per race code; empty if the year is not present.
    pub fn race_counts(&self, year: Year) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        if let Some(bucket) = self.bucket(year) {
            for r in bucket.records() {
                *counts.entry(r.race().to_owned()).or_default() += 1;
            }
        }
        counts
    }

    pub fn frisked_vs_arrested(&self, year: Year) -> Result<StopRates> {
        let bucket = self.nonempty(year)?;
        let mut frisked = 0;
        let mut arrested = 0;
        for r in bucket.records() {
            if r.frisked() {
                frisked += 1;
            }
            if r.arrested() {
                arrested += 1;
            }
        }
        Ok(StopRates {
            frisked: bucket.percent(frisked),
            arrested: bucket.percent(arrested),
        })
    }

    pub fn gender_breakdown(&self, year: Year) -> Result<GenderBreakdown> {
        let bucket = self.existing(year)?;
        // Indexed by race (Black, White) and by gender (F, M).
        let mut totals = [0usize; 2];
        let mut counts = [[0usize; 2]; 2];
        for r in bucket.records() {
            let race = match r.race() {
                "B" => 0,
                "W" => 1,
                _ => continue,
            };
            totals[race] += 1;
            let gender = match r.gender() {
                "F" => 0,
                "M" => 1,
                _ => continue,
            };
            counts[gender][race] += 1;
        }
        if totals == [0, 0] {
            return Err(errors::empty_cohort(format!(
                "no Black or White records in {year}"
            )));
        }
        let cell = |gender: usize, race: usize| {
            if totals[race] == 0 {
                None
            } else {
                Some(counts[gender][race] as f64 / totals[race] as f64 * 0.5 * 100.0)
            }
        };
        Ok(GenderBreakdown {
            black: totals[0],
            white: totals[1],
            female: GenderRow::new(cell(0, 0), cell(0, 1)),
            male: GenderRow::new(cell(1, 0), cell(1, 1)),
        })
    }

    /// Change in the share of records matching `description`, from `year1`
    /// to `year2`, in percentage points.
    pub fn crime_trend(&self, description: &str, year1: Year, year2: Year) -> Result<f64> {
        self.existing(year1)?;
        self.existing(year2)?;
        let share = |year: Year| -> Result<f64> {
            let bucket = self.nonempty(year)?;
            Ok(bucket.percent(bucket.count(|r| r.description().contains(description))))
        };
        Ok(share(year2)? - share(year1)?)
    }

    /// Number of records per borough, in [Borough::ALL] order.
    pub fn location_counts(&self, year: Year) -> Result<[(Borough, usize); 5]> {
        let bucket = self.existing(year)?;
        let mut counts = [0usize; 5];
        for r in bucket.records() {
            if let Some(b) = Borough::from_location(r.location()) {
                counts[b.index()] += 1;
            }
        }
        Ok(Borough::ALL.map(|b| (b, counts[b.index()])))
    }

    /// The borough with the most stops; ties go to the earliest in [Borough::ALL].
    pub fn most_frequent_location(&self, year: Year) -> Result<Borough> {
        let counts = self.location_counts(year)?;
        let mut best = counts[0];
        for c in counts {
            if c.1 > best.1 {
                best = c;
            }
        }
        Ok(best.0)
    }
}
