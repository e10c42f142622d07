// src/commands/cd/mod.rs
use crate::commands::{Command, CommandContext, ScriptLine};
use crate::error::GenError;
use crate::model::ChildEntry;

pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<(), GenError> {
        let entry = ctx.walk.tree.choose_child_entry(ctx.walk.cwd, &mut *ctx.rng)?;
        change_directory(ctx, &entry)?;
        Ok(())
    }
}

/// Move the walk to `entry` and emit the `cd` line. Returns `false` when the
/// entry leads nowhere (the root's `..`) or would bounce straight back up
/// before anything was done in the current directory.
pub(crate) fn change_directory(ctx: &mut CommandContext<'_>, entry: &ChildEntry) -> Result<bool, GenError> {
    if entry.target() == ctx.walk.cwd {
        return Ok(false);
    }
    if entry.is_parent() && ctx.walk.actions_since_cd <= 0 {
        return Ok(false);
    }
    ctx.sink.emit(ScriptLine::Cd(entry.name().to_string()))?;
    ctx.walk.move_to(entry.target());
    Ok(true)
}
