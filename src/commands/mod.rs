//! Pipeline command implementations
//!
//! Each command is an `impl Project` block: the command reads its inputs,
//! validates before mutating, and writes its status lines through the
//! project's injected writer.

pub mod porcelain;
