// src/commands/write/mod.rs
use rand::Rng;

use crate::commands::{Command, CommandContext, ScriptLine};
use crate::error::GenError;

pub struct WriteCommand;

impl Command for WriteCommand {
    fn name(&self) -> &'static str {
        "write"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<(), GenError> {
        let files = ctx.walk.tree.files(ctx.walk.cwd)?;
        if files.is_empty() {
            return Ok(());
        }
        let index = ctx.rng.gen_range(0..files.len());
        let name = files[index].clone();
        let payload = ctx.names.payload(&mut *ctx.rng);
        ctx.sink.emit(ScriptLine::Write { payload, name })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::Harness;

    #[test]
    fn test_write_without_files_is_noop() {
        let mut h = Harness::new(1);
        let root = h.walk.tree.root();
        let a = h.walk.tree.create_directory(root, "fresh".to_string()).unwrap().unwrap();
        h.walk.move_to(a);
        h.run(&WriteCommand);
        assert!(h.lines.is_empty());
        assert_eq!(h.walk.cwd, a);
    }

    #[test]
    fn test_write_targets_existing_file() {
        let mut h = Harness::new(2);
        let root = h.walk.tree.root();
        h.walk.tree.create_file(root, "f1".to_string()).unwrap();
        h.walk.tree.create_file(root, "f2".to_string()).unwrap();
        for _ in 0..50 {
            h.run(&WriteCommand);
        }
        assert_eq!(h.lines.len(), 50);
        for line in &h.lines {
            match line {
                ScriptLine::Write { payload, name } => {
                    assert!(name == "f1" || name == "f2");
                    assert!((1..=320).contains(&payload.len()));
                }
                other => panic!("unexpected line {:?}", other),
            }
        }
        assert_eq!(h.walk.tree.entry_count(), 2);
    }
}
