//! Analyzers for chart directories.

pub mod chartlint;
