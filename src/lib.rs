//! Locale Audit - translation completeness checker
//!
//! Compares every locale JSON file in a directory against a reference locale,
//! reports missing and additional keys on the console, writes a markdown
//! summary, and exits non-zero when any locale is missing keys.
//!
//! ## Module Structure
//!
//! - `audit`: Set comparison of candidate locales against the reference
//! - `cli`: Command-line interface layer (arguments, console report, exit status)
//! - `config`: Configuration file loading and parsing
//! - `error`: Error types for loading and auditing locale files
//! - `locales`: Locale file loading and candidate enumeration
//! - `markdown`: Markdown report rendering and writing

pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod locales;
pub mod markdown;
