//! File output for computed cases.

pub mod export;
