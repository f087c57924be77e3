use crate::database::Database;
use crate::output;
use itertools::Itertools;
use log::{debug, info};
use std::collections::{HashMap, HashSet};

fn explain_codes_one(k: &str, vv: &HashSet<&str>) -> String {
    let vals = vv
        .iter()
        .map(|&v| if v.is_empty() { "(empty)" } else { v })
        .sorted()
        .collect_vec();
    format!("{} = {}", k, vals.join(", "))
}

fn explain_codes(codes: &HashMap<&str, HashSet<&str>>) -> String {
    let keys = codes.keys().copied().sorted().collect_vec();
    keys.iter().map(|k| explain_codes_one(k, &codes[k])).join("; ")
}

pub fn statistics(db: &Database) {
    let years = db.years();
    let mut codes: HashMap<&str, HashSet<&str>> = HashMap::new();
    for &year in &years {
        let Some(bucket) = db.bucket(year) else {
            continue;
        };
        debug!(target: "sfstats", "{}: {} records", year, bucket.len());
        for r in bucket.records() {
            codes.entry("gender").or_default().insert(r.gender());
            codes.entry("race").or_default().insert(r.race());
        }
    }
    info!(target: "sfstats", "records: {}", db.len());
    info!(target: "sfstats", "years: {}", output::pretty_years(&years));
    info!(target: "sfstats", "codes: {}", explain_codes(&codes));
}
