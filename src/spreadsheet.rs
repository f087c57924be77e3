//! Writing reports as Excel workbooks.

use crate::errors::Result;
use crate::output::{GenderRow, Report};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::path::Path;
use std::result;

fn header(ws: &mut Worksheet, titles: &[&str], bold: &Format) -> result::Result<(), XlsxError> {
    for (col, title) in titles.iter().enumerate() {
        ws.write_string_with_format(0, col as u16, *title, bold)?;
    }
    Ok(())
}

fn cell(ws: &mut Worksheet, row: u32, col: u16, x: Option<f64>) -> result::Result<(), XlsxError> {
    match x {
        None => ws.write_string(row, col, "n/a")?,
        Some(x) => ws.write_number(row, col, x)?,
    };
    Ok(())
}

fn gender_row(
    ws: &mut Worksheet,
    row: u32,
    year: u16,
    label: &str,
    gr: &GenderRow,
) -> result::Result<(), XlsxError> {
    ws.write_number(row, 0, year as f64)?;
    ws.write_string(row, 1, label)?;
    cell(ws, row, 2, gr.black)?;
    cell(ws, row, 3, gr.white)?;
    cell(ws, row, 4, gr.total)?;
    Ok(())
}

pub fn build_workbook(report: &Report) -> result::Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let ws = workbook.add_worksheet();
    ws.set_name("summary")?;
    header(
        ws,
        &["year", "records", "frisked %", "arrested %", "most stops"],
        &bold,
    )?;
    for (i, y) in report.per_year.iter().enumerate() {
        let row = i as u32 + 1;
        ws.write_number(row, 0, y.year as f64)?;
        ws.write_number(row, 1, y.records as f64)?;
        ws.write_number(row, 2, y.rates.frisked)?;
        ws.write_number(row, 3, y.rates.arrested)?;
        ws.write_string(row, 4, y.most_frequent_location.name())?;
    }

    let ws = workbook.add_worksheet();
    ws.set_name("gender")?;
    header(ws, &["year", "gender", "Black %", "White %", "total %"], &bold)?;
    let mut row = 1;
    for y in &report.per_year {
        match &y.gender {
            None => {
                ws.write_number(row, 0, y.year as f64)?;
                ws.write_string(row, 1, "n/a")?;
                row += 1;
            }
            Some(gb) => {
                gender_row(ws, row, y.year, "female", &gb.female)?;
                gender_row(ws, row + 1, y.year, "male", &gb.male)?;
                row += 2;
            }
        }
    }

    if let Some(trend) = &report.trend {
        let ws = workbook.add_worksheet();
        ws.set_name("trend")?;
        header(ws, &["description", "from", "to", "change (pp)"], &bold)?;
        ws.write_string(1, 0, &trend.description)?;
        ws.write_number(1, 1, trend.from as f64)?;
        ws.write_number(1, 2, trend.to as f64)?;
        ws.write_number(1, 3, trend.delta)?;
    }
    Ok(workbook)
}

pub fn write_report<P: AsRef<Path>>(report: &Report, path: P) -> Result<()> {
    let mut workbook = build_workbook(report)?;
    workbook.save(path.as_ref())?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::borough::Borough;
    use crate::output::{GenderBreakdown, StopRates, Trend, YearReport};
    use std::collections::BTreeMap;

    #[test]
    fn workbook_bytes() {
        let report = Report {
            years: vec![2012, 2013],
            records: 3,
            per_year: vec![
                YearReport {
                    year: 2012,
                    records: 2,
                    races: BTreeMap::from([("B".to_owned(), 2)]),
                    rates: StopRates {
                        frisked: 50.0,
                        arrested: 0.0,
                    },
                    gender: Some(GenderBreakdown {
                        black: 2,
                        white: 0,
                        female: GenderRow::new(Some(25.0), None),
                        male: GenderRow::new(Some(25.0), None),
                    }),
                    locations: Borough::ALL.iter().map(|&b| (b, 0)).collect(),
                    most_frequent_location: Borough::Brooklyn,
                },
                YearReport {
                    year: 2013,
                    records: 1,
                    races: BTreeMap::from([("Q".to_owned(), 1)]),
                    rates: StopRates {
                        frisked: 0.0,
                        arrested: 0.0,
                    },
                    gender: None,
                    locations: Borough::ALL.iter().map(|&b| (b, 0)).collect(),
                    most_frequent_location: Borough::Brooklyn,
                },
            ],
            trend: Some(Trend {
                description: "CPW".to_owned(),
                from: 2012,
                to: 2013,
                delta: -10.0,
            }),
        };
        let mut workbook = build_workbook(&report).unwrap();
        let bytes = workbook.save_to_buffer().unwrap();
        assert!(bytes.starts_with(b"PK"));
    }
}
