// src/commands/rm/mod.rs
use rand::Rng;

use crate::commands::cd::change_directory;
use crate::commands::{Command, CommandContext, ScriptLine, TargetKind};
use crate::error::GenError;
use crate::model::ChildEntry;

/// Removes a file or an empty directory, descending into a non-empty
/// subdirectory to find one when needed.
#[derive(Debug, Default)]
pub struct RmCommand {
    target: Option<TargetKind>,
}

enum Step {
    Done,
    Descend(ChildEntry),
}

impl RmCommand {
    /// An `rm` that always starts from `kind` instead of a coin flip.
    pub fn targeting(kind: TargetKind) -> Self {
        Self { target: Some(kind) }
    }
}

impl Command for RmCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<(), GenError> {
        let mut target = match self.target {
            Some(kind) => kind,
            None => TargetKind::random(&mut *ctx.rng),
        };
        // every descent lands one level lower, so the walk bottoms out
        // within the height of the starting subtree
        let levels = ctx.walk.tree.height(ctx.walk.cwd)? + 1;
        for _ in 0..levels {
            match remove_here(ctx, target)? {
                Step::Done => return Ok(()),
                Step::Descend(entry) => {
                    change_directory(ctx, &entry)?;
                    target = TargetKind::random(&mut *ctx.rng);
                }
            }
        }
        log::debug!("rm: descent limit of {} levels reached", levels);
        Ok(())
    }
}

/// One removal attempt in the current directory.
fn remove_here(ctx: &mut CommandContext<'_>, target: TargetKind) -> Result<Step, GenError> {
    let cwd = ctx.walk.cwd;
    let has_files = !ctx.walk.tree.files(cwd)?.is_empty();
    let has_subdirs = !ctx.walk.tree.subdirectories(cwd)?.is_empty();

    let target = match (target, has_files, has_subdirs) {
        (_, false, false) => return Ok(Step::Done),
        (TargetKind::File, true, _) | (TargetKind::Directory, true, false) => TargetKind::File,
        _ => TargetKind::Directory,
    };

    match target {
        TargetKind::File => {
            let files = ctx.walk.tree.files(cwd)?;
            let name = files[ctx.rng.gen_range(0..files.len())].clone();
            ctx.sink.emit(ScriptLine::Rm(name.clone()))?;
            ctx.walk.tree.remove_file(cwd, &name)?;
            Ok(Step::Done)
        }
        TargetKind::Directory => {
            let subdirs = ctx.walk.tree.subdirectories(cwd)?;
            let index = ctx.rng.gen_range(0..subdirs.len());
            let (name, id) = subdirs[index].clone();
            if ctx.walk.tree.is_empty(id)? {
                ctx.sink.emit(ScriptLine::Rm(name))?;
                ctx.walk.tree.remove_directory(cwd, index)?;
                Ok(Step::Done)
            } else {
                Ok(Step::Descend(ChildEntry::Child { index, name, id }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::Harness;
    use crate::commands::JUST_MOVED;

    #[test]
    fn test_rm_directory_on_bare_root_is_noop() {
        let mut h = Harness::new(1);
        let root = h.walk.tree.root();
        h.run(&RmCommand::targeting(TargetKind::Directory));
        assert!(h.lines.is_empty());
        assert_eq!(h.walk.cwd, root);
        assert_eq!(h.walk.tree.entry_count(), 0);
    }

    #[test]
    fn test_rm_file_on_bare_root_is_noop() {
        let mut h = Harness::new(2);
        h.run(&RmCommand::targeting(TargetKind::File));
        assert!(h.lines.is_empty());
    }

    #[test]
    fn test_rm_removes_only_empty_subdirectory() {
        let mut h = Harness::new(3);
        let root = h.walk.tree.root();
        h.walk.tree.create_directory(root, "x".to_string()).unwrap().unwrap();
        let before = h.walk.tree.entry_count();
        h.run(&RmCommand::targeting(TargetKind::Directory));
        assert_eq!(h.lines, vec![ScriptLine::Rm("x".to_string())]);
        assert_eq!(h.walk.tree.entry_count(), before - 1);
        assert!(h.walk.tree.is_empty(root).unwrap());
        assert_eq!(h.walk.cwd, root);
    }

    #[test]
    fn test_mkdir_then_rm_directory() {
        let mut h = Harness::new(8);
        h.run(&crate::commands::mkdir::MkdirCommand);
        let created = match &h.lines[0] {
            ScriptLine::Mkdir(name) => name.clone(),
            other => panic!("unexpected line {:?}", other),
        };
        h.run(&RmCommand::targeting(TargetKind::Directory));
        assert_eq!(h.lines[1], ScriptLine::Rm(created));
        assert_eq!(h.walk.tree.entry_count(), 0);
    }

    #[test]
    fn test_rm_file_falls_back_to_directory() {
        let mut h = Harness::new(4);
        let root = h.walk.tree.root();
        h.walk.tree.create_directory(root, "x".to_string()).unwrap().unwrap();
        h.run(&RmCommand::targeting(TargetKind::File));
        assert_eq!(h.lines, vec![ScriptLine::Rm("x".to_string())]);
        assert_eq!(h.walk.tree.entry_count(), 0);
    }

    #[test]
    fn test_rm_directory_falls_back_to_file() {
        let mut h = Harness::new(5);
        let root = h.walk.tree.root();
        h.walk.tree.create_file(root, "f1".to_string()).unwrap();
        h.run(&RmCommand::targeting(TargetKind::Directory));
        assert_eq!(h.lines, vec![ScriptLine::Rm("f1".to_string())]);
        assert!(h.walk.tree.files(root).unwrap().is_empty());
    }

    #[test]
    fn test_rm_descends_into_non_empty_directory() {
        let mut h = Harness::new(6);
        let root = h.walk.tree.root();
        let a = h.walk.tree.create_directory(root, "a".to_string()).unwrap().unwrap();
        h.walk.tree.create_file(a, "inner".to_string()).unwrap();
        h.run(&RmCommand::targeting(TargetKind::Directory));
        // whatever kind the child level draws, its only entry is the file
        assert_eq!(
            h.lines,
            vec![ScriptLine::Cd("a".to_string()), ScriptLine::Rm("inner".to_string())]
        );
        assert_eq!(h.walk.cwd, a);
        assert_eq!(h.walk.actions_since_cd, JUST_MOVED);
        assert_eq!(h.walk.tree.entry_count(), 1);
    }

    #[test]
    fn test_rm_deep_chain_terminates() {
        let mut h = Harness::with_capacity(7, 64);
        let mut dir = h.walk.tree.root();
        for n in 0..10 {
            dir = h.walk.tree.create_directory(dir, format!("d{}", n)).unwrap().unwrap();
        }
        h.run(&RmCommand::targeting(TargetKind::Directory));
        // ten cd lines down the chain, then the leaf goes
        assert_eq!(h.lines.len(), 10);
        assert_eq!(h.lines.last(), Some(&ScriptLine::Rm("d9".to_string())));
        assert_eq!(h.walk.tree.depth(h.walk.cwd).unwrap(), 9);
        assert_eq!(h.walk.tree.entry_count(), 9);
    }
}
