//! Data structures for representing the output.

use crate::borough::Borough;
use crate::input::Year;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Percentages of stops that involved a frisk and an arrest.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct StopRates {
    pub frisked: f64,
    pub arrested: f64,
}

/// One row of the gender table.
///
/// A cell is `None` if there were no records of that race at all; the total
/// is then `None` as well.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct GenderRow {
    pub black: Option<f64>,
    pub white: Option<f64>,
    pub total: Option<f64>,
}

impl GenderRow {
    pub fn new(black: Option<f64>, white: Option<f64>) -> GenderRow {
        GenderRow {
            black,
            white,
            total: black.zip(white).map(|(b, w)| b + w),
        }
    }

    fn cells(&self) -> [Option<f64>; 3] {
        [self.black, self.white, self.total]
    }
}

/// Gender of Black and White people stopped.
///
/// Each cell is half of the share of that gender within the race, so that
/// the two races together make up 100.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct GenderBreakdown {
    /// Number of Black records.
    pub black: usize,
    /// Number of White records.
    pub white: usize,
    pub female: GenderRow,
    pub male: GenderRow,
}

impl GenderBreakdown {
    /// The table as `[[black F, white F, total F], [black M, white M, total M]]`.
    pub fn table(&self) -> [[Option<f64>; 3]; 2] {
        [self.female.cells(), self.male.cells()]
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Trend {
    pub description: String,
    pub from: Year,
    pub to: Year,
    /// Change in percentage points.
    pub delta: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct YearReport {
    pub year: Year,
    pub records: usize,
    pub races: BTreeMap<String, usize>,
    pub rates: StopRates,
    pub gender: Option<GenderBreakdown>,
    pub locations: Vec<(Borough, usize)>,
    pub most_frequent_location: Borough,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Report {
    pub years: Vec<Year>,
    pub records: usize,
    pub per_year: Vec<YearReport>,
    pub trend: Option<Trend>,
}

#[derive(Serialize)]
pub struct OError {
    pub error: String,
}

pub fn pretty_percent(x: f64) -> String {
    format!("{x:.2}%")
}

pub fn pretty_delta(x: f64) -> String {
    format!("{x:+.2} pp")
}

pub fn pretty_cell(x: Option<f64>) -> String {
    match x {
        None => "n/a".to_owned(),
        Some(x) => pretty_percent(x),
    }
}

pub fn pretty_years(years: &[Year]) -> String {
    if years.len() >= 5 {
        pretty_years(&years[0..2]) + ", ..., " + &years[years.len() - 1].to_string()
    } else {
        years.iter().join(", ")
    }
}

fn table_line(a: &str, b: &str, c: &str, d: &str) -> String {
    format!("{a:<8}{b:>10}{c:>10}{d:>10}")
}

pub fn gender_table_string(gb: &GenderBreakdown) -> String {
    let row = |label: &str, r: &GenderRow| {
        table_line(
            label,
            &pretty_cell(r.black),
            &pretty_cell(r.white),
            &pretty_cell(r.total),
        )
    };
    [
        table_line("", "Black", "White", "Total"),
        row("Female", &gb.female),
        row("Male", &gb.male),
    ]
    .join("\n")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pretty_percent_basic() {
        assert_eq!(pretty_percent(25.0), "25.00%");
        assert_eq!(pretty_percent(100.0 / 3.0), "33.33%");
    }

    #[test]
    fn pretty_delta_basic() {
        assert_eq!(pretty_delta(0.0), "+0.00 pp");
        assert_eq!(pretty_delta(1.5), "+1.50 pp");
        assert_eq!(pretty_delta(-12.5), "-12.50 pp");
    }

    #[test]
    fn pretty_years_basic() {
        assert_eq!(pretty_years(&[]), "");
        assert_eq!(pretty_years(&[2011]), "2011");
        assert_eq!(pretty_years(&[2011, 2012, 2013, 2014]), "2011, 2012, 2013, 2014");
        assert_eq!(
            pretty_years(&[2011, 2012, 2013, 2014, 2015]),
            "2011, 2012, ..., 2015"
        );
    }

    #[test]
    fn gender_row_total() {
        let r = GenderRow::new(Some(20.0), Some(15.0));
        assert_eq!(r.total, Some(35.0));
        let r = GenderRow::new(Some(25.0), None);
        assert_eq!(r.total, None);
        let r = GenderRow::new(None, Some(10.0));
        assert_eq!(r.total, None);
    }

    #[test]
    fn table_layout() {
        let gb = GenderBreakdown {
            black: 2,
            white: 0,
            female: GenderRow::new(Some(25.0), None),
            male: GenderRow::new(Some(25.0), None),
        };
        let t = gb.table();
        assert_eq!(t[0], [Some(25.0), None, None]);
        assert_eq!(t[1], [Some(25.0), None, None]);
        assert_eq!(
            gender_table_string(&gb),
            [
                "             Black     White     Total",
                "Female      25.00%       n/a       n/a",
                "Male        25.00%       n/a       n/a",
            ]
            .join("\n")
        );
    }

    #[test]
    fn table_row_sums() {
        let gb = GenderBreakdown {
            black: 4,
            white: 2,
            female: GenderRow::new(Some(12.5), Some(25.0)),
            male: GenderRow::new(Some(37.5), Some(25.0)),
        };
        for row in gb.table() {
            assert_eq!(row[2], Some(row[0].unwrap() + row[1].unwrap()));
        }
        assert_eq!(
            gender_table_string(&gb),
            [
                "             Black     White     Total",
                "Female      12.50%    25.00%    37.50%",
                "Male        37.50%    25.00%    62.50%",
            ]
            .join("\n")
        );
    }
}
