pub mod borough;
pub mod database;
pub mod driver;
pub mod errors;
mod information;
pub mod input;
pub mod output;
pub mod spreadsheet;
