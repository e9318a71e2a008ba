//! Pipeline scaffolding building blocks
//!
//! This module contains the types and algorithms the commands are built from:
//!
//! - `pipeline`: Pipeline names and on-disk artifact locations
//! - `scratch`: Guard for disposable generated directories
//! - `sync`: The directory merge-copier
//! - `template`: Pipeline template instantiation

pub mod pipeline;
pub mod scratch;
pub mod sync;
pub mod template;
