pub mod artifacts;
pub mod pipeline_name;

/// File marking a directory as a pipeline. Its presence drives both the
/// global uniqueness check on create and the child-pipeline check on delete.
pub const PIPELINE_MARKER: &str = "pipeline.toml";

pub const STARTS_WITH_LETTER_REGEX: &str = r"^[a-zA-Z_]";
pub const DOTTED_IDENTIFIER_REGEX: &str = r"^\w(\w+\.)*\w+$";
