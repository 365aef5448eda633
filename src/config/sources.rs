//! Configuration sources, each adding one layer to the builder.

pub mod environment;
pub mod global_file;
pub mod workspace_file;
