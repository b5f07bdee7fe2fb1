//! Client-side document exports: printable reports and the staff
//! directory spreadsheet. Builders are pure; the browser download is the
//! only side effect and lives in [`download`].

pub mod download;
pub mod reports;
pub mod spreadsheet;
