// src/commands/types.rs
use std::fmt;

use rand::{Rng, RngCore};

use super::sink::ScriptSink;
use crate::error::GenError;
use crate::model::{DirId, TreeModel};
use crate::names::NameGenerator;

/// Value of `actions_since_cd` right after a directory change. The driver's
/// per-iteration increment brings it to zero.
pub const JUST_MOVED: i64 = -1;

/// One line of the output script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptLine {
    Cd(String),
    Mkdir(String),
    Touch(String),
    Write { payload: String, name: String },
    Rm(String),
    CheckFs,
}

impl ScriptLine {
    /// The command word that starts the line.
    pub fn command(&self) -> &'static str {
        match self {
            ScriptLine::Cd(_) => "cd",
            ScriptLine::Mkdir(_) => "mkdir",
            ScriptLine::Touch(_) => "touch",
            ScriptLine::Write { .. } => "write",
            ScriptLine::Rm(_) => "rm",
            ScriptLine::CheckFs => "checkfs",
        }
    }
}

impl fmt::Display for ScriptLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptLine::Cd(name) => write!(f, "cd {}", name),
            ScriptLine::Mkdir(name) => write!(f, "mkdir {}", name),
            ScriptLine::Touch(name) => write!(f, "touch {}", name),
            ScriptLine::Write { payload, name } => write!(f, "write {} {}", payload, name),
            ScriptLine::Rm(name) => write!(f, "rm {}", name),
            ScriptLine::CheckFs => write!(f, "checkfs"),
        }
    }
}

/// What an `rm` is aiming at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    File,
    Directory,
}

impl TargetKind {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            TargetKind::File
        } else {
            TargetKind::Directory
        }
    }
}

/// Mutable state of the random walk.
#[derive(Debug, Clone)]
pub struct WalkState {
    pub tree: TreeModel,
    pub cwd: DirId,
    /// Operations since the last directory change; `JUST_MOVED` after a move.
    pub actions_since_cd: i64,
}

impl WalkState {
    pub fn new(tree: TreeModel) -> Self {
        let cwd = tree.root();
        Self { tree, cwd, actions_since_cd: 0 }
    }

    pub fn move_to(&mut self, dir: DirId) {
        self.cwd = dir;
        self.actions_since_cd = JUST_MOVED;
    }

    pub fn record_action(&mut self) {
        self.actions_since_cd += 1;
    }
}

/// Everything a command needs to run one step.
pub struct CommandContext<'a> {
    pub walk: &'a mut WalkState,
    pub names: &'a NameGenerator,
    pub rng: &'a mut dyn RngCore,
    pub sink: &'a mut dyn ScriptSink,
}

/// A generator command. `execute` emits at most the lines it commits to the
/// model; an inapplicable command returns without emitting anything.
pub trait Command {
    fn name(&self) -> &'static str;
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<(), GenError>;
}
