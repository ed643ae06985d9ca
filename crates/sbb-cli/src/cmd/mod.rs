// crates/sbb-cli/src/cmd/mod.rs

pub mod inspect;
pub mod plan;
pub mod replay;
