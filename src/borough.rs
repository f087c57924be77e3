//! The five boroughs that locations are matched against.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub enum Borough {
    Brooklyn,
    Manhattan,
    Bronx,
    Queens,
    #[serde(rename = "Staten Island")]
    StatenIsland,
}

impl Borough {
    /// All boroughs, in tie-break order.
    pub const ALL: [Borough; 5] = [
        Borough::Brooklyn,
        Borough::Manhattan,
        Borough::Bronx,
        Borough::Queens,
        Borough::StatenIsland,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Borough::Brooklyn => "Brooklyn",
            Borough::Manhattan => "Manhattan",
            Borough::Bronx => "Bronx",
            Borough::Queens => "Queens",
            Borough::StatenIsland => "Staten Island",
        }
    }

    /// Position in [Borough::ALL].
    pub fn index(self) -> usize {
        self as usize
    }

    /// The borough whose name equals `location`, ignoring case.
    pub fn from_location(location: &str) -> Option<Borough> {
        Borough::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(location))
    }
}

impl fmt::Display for Borough {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn order() {
        for (i, b) in Borough::ALL.into_iter().enumerate() {
            assert_eq!(b.index(), i);
        }
    }

    #[test]
    fn from_location() {
        assert_eq!(Borough::from_location("BROOKLYN"), Some(Borough::Brooklyn));
        assert_eq!(Borough::from_location("bronx"), Some(Borough::Bronx));
        assert_eq!(
            Borough::from_location("STATEN ISLAND"),
            Some(Borough::StatenIsland)
        );
        assert_eq!(Borough::from_location("STATEN IS"), None);
        assert_eq!(Borough::from_location(" QUEENS"), None);
        assert_eq!(Borough::from_location(""), None);
    }

    #[test]
    fn display() {
        assert_eq!(Borough::StatenIsland.to_string(), "Staten Island");
        assert_eq!(
            serde_json::to_string(&Borough::StatenIsland).unwrap(),
            "\"Staten Island\""
        );
    }
}
