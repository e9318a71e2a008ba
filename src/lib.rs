//! Scaffolding CLI for modular data pipelines.
//!
//! A pipeworks project keeps its pipeline packages under
//! `<source_dir>/<package>/pipelines`, their tests under
//! `<source_dir>/tests/pipelines` and their per-environment configuration
//! under `<conf_source>/<env>`. The commands in this crate instantiate a
//! pipeline template into those locations and tear it down again.

pub mod areas;
pub mod artifacts;
pub mod commands;
