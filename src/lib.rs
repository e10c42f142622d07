//! fsgen - Randomized workload generator for filesystem testing
//!
//! This library keeps an in-memory model of a directory tree and emits a
//! script of `cd`, `mkdir`, `touch`, `write` and `rm` lines, closed by a
//! single `checkfs`, that a filesystem-under-test driver can replay. Every
//! line refers to an entry that exists at that point of the script, and the
//! number of live entries never exceeds the configured capacity.

pub mod commands;
pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod names;

pub use commands::{ScriptLine, TargetKind};
pub use config::{ConfigFile, GeneratorOptions};
pub use error::GenError;
pub use generator::{generate_to_path, generate_to_string, DriverState, GenerationReport, Generator};
pub use model::{DirId, TreeModel};
pub use names::NameGenerator;
