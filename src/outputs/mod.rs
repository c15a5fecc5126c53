//! Output generation modules for the terminal table and file exports.
//!
//! This module contains submodules responsible for presenting the
//! aggregated job records:
//!
//! # Submodules
//!
//! - [`table`]: Renders records as a Markdown table for the terminal
//! - [`csv`]: Writes records to a CSV file for spreadsheets
//! - [`json`]: Writes records to a JSON file for scripts
//!
//! All three carry the same five columns in the same order:
//! `Title, Company, Summary, Link, Source`.

pub mod csv;
pub mod json;
pub mod table;
