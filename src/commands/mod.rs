// src/commands/mod.rs
pub mod cd;
pub mod mkdir;
pub mod registry;
pub mod rm;
pub mod sink;
pub mod touch;
pub mod types;
pub mod write;

pub use registry::CommandSelector;
pub use sink::{LineCounts, ScriptSink, ScriptWriter};
pub use types::{Command, CommandContext, ScriptLine, TargetKind, WalkState, JUST_MOVED};
