// src/commands/registry.rs
use rand::Rng;

use super::cd::CdCommand;
use super::mkdir::MkdirCommand;
use super::rm::RmCommand;
use super::touch::TouchCommand;
use super::types::Command;
use super::write::WriteCommand;

/// The pool a generator step draws from. Each slot is equally likely, so a
/// command registered twice is picked twice as often.
pub struct CommandSelector {
    slots: Vec<Box<dyn Command>>,
}

impl CommandSelector {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.slots.push(cmd);
    }

    /// Draw one slot uniformly. `None` only for an empty selector.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&dyn Command> {
        if self.slots.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.slots.len());
        Some(self.slots[index].as_ref())
    }

    pub fn names(&self) -> Vec<&str> {
        self.slots.iter().map(|c| c.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for CommandSelector {
    fn default() -> Self {
        let mut selector = Self::new();
        register_default_slots(&mut selector);
        selector
    }
}

/// cd, touch, mkdir, write, and `rm` twice.
pub fn register_default_slots(selector: &mut CommandSelector) {
    selector.register(Box::new(CdCommand));
    selector.register(Box::new(TouchCommand));
    selector.register(Box::new(MkdirCommand));
    selector.register(Box::new(WriteCommand));
    selector.register(Box::new(RmCommand::default()));
    selector.register(Box::new(RmCommand::default()));
}
