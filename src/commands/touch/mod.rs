// src/commands/touch/mod.rs
use crate::commands::{Command, CommandContext, ScriptLine};
use crate::error::GenError;

pub struct TouchCommand;

impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<(), GenError> {
        if ctx.walk.tree.is_full() {
            return Ok(());
        }
        let name = ctx.names.name(&mut *ctx.rng);
        // a name collision skips the step; no second draw
        if ctx.walk.tree.files(ctx.walk.cwd)?.contains(&name) {
            return Ok(());
        }
        ctx.sink.emit(ScriptLine::Touch(name.clone()))?;
        ctx.walk.tree.create_file(ctx.walk.cwd, name)?;
        Ok(())
    }
}
