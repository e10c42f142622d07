// src/commands/mkdir/mod.rs
use crate::commands::{Command, CommandContext, ScriptLine};
use crate::error::GenError;

pub struct MkdirCommand;

impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<(), GenError> {
        if ctx.walk.tree.is_full() {
            return Ok(());
        }
        let name = ctx.names.name(&mut *ctx.rng);
        ctx.sink.emit(ScriptLine::Mkdir(name.clone()))?;
        ctx.walk.tree.create_directory(ctx.walk.cwd, name)?;
        Ok(())
    }
}
