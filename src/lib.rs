//! Daily English: story and dialogue entries for language learners.
//!
//! Stories are produced by filling a template's `{placeholder}` slots with
//! vocabulary that has not been used before; dialogues are picked from
//! authored scripts. Results are kept as YAML records indexed by CSV files,
//! and a duplicate check guards against repeated words and titles.

pub mod config;
pub mod content;
pub mod core;
pub mod date;
pub mod schema;
pub mod store;
