// crates/sbb-cli/src/io/mod.rs

pub mod profile;
pub mod series;
pub mod snapshot;
