//! Errors and error-related utilities.

use crate::input::Year;
use std::{error, fmt, result};

/// The result type used throughout this library.
pub type Result<T> = result::Result<T, Box<dyn error::Error>>;

/// Invalid input.
#[derive(Debug)]
pub struct InvalidInput(pub String);

/// Invalid command line argument.
#[derive(Debug)]
pub struct InvalidArgument(pub String);

/// A query referred to a year that is not in the database.
#[derive(Debug, PartialEq, Eq)]
pub struct YearNotFound(pub Year);

/// A ratio would have been computed over an empty set of records.
#[derive(Debug, PartialEq, Eq)]
pub struct EmptyCohort(pub String);

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid input: {}", self.0)
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid argument: {}", self.0)
    }
}

impl fmt::Display for YearNotFound {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "year not found: {}", self.0)
    }
}

impl fmt::Display for EmptyCohort {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "empty cohort: {}", self.0)
    }
}

impl error::Error for InvalidInput {}

impl error::Error for InvalidArgument {}

impl error::Error for YearNotFound {}

impl error::Error for EmptyCohort {}

/// A helper for constructing [InvalidInput].
pub fn invalid_input(s: String) -> Box<dyn error::Error> {
    InvalidInput(s).into()
}

/// A helper for constructing [InvalidArgument].
pub fn invalid_argument(s: String) -> Box<dyn error::Error> {
    InvalidArgument(s).into()
}

/// A helper for constructing [YearNotFound].
pub fn year_not_found(year: Year) -> Box<dyn error::Error> {
    YearNotFound(year).into()
}

/// A helper for constructing [EmptyCohort].
pub fn empty_cohort(s: String) -> Box<dyn error::Error> {
    EmptyCohort(s).into()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(year_not_found(2011).to_string(), "year not found: 2011");
        assert_eq!(
            empty_cohort("no records in 2012".to_owned()).to_string(),
            "empty cohort: no records in 2012"
        );
        assert_eq!(
            invalid_input("line 3: bad year".to_owned()).to_string(),
            "invalid input: line 3: bad year"
        );
    }

    #[test]
    fn downcast() {
        let e = year_not_found(1999);
        assert_eq!(e.downcast_ref::<YearNotFound>(), Some(&YearNotFound(1999)));
        assert!(e.downcast_ref::<EmptyCohort>().is_none());
    }
}
