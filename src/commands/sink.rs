// src/commands/sink.rs
use std::io::{BufWriter, Write};

use serde::Serialize;

use super::types::ScriptLine;
use crate::error::GenError;

/// Append-only destination for script lines.
pub trait ScriptSink {
    fn emit(&mut self, line: ScriptLine) -> Result<(), GenError>;
}

impl ScriptSink for Vec<ScriptLine> {
    fn emit(&mut self, line: ScriptLine) -> Result<(), GenError> {
        self.push(line);
        Ok(())
    }
}

/// Number of lines written per command word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LineCounts {
    pub cd: u64,
    pub mkdir: u64,
    pub touch: u64,
    pub write: u64,
    pub rm: u64,
    pub checkfs: u64,
}

impl LineCounts {
    pub fn record(&mut self, line: &ScriptLine) {
        let slot = match line {
            ScriptLine::Cd(_) => &mut self.cd,
            ScriptLine::Mkdir(_) => &mut self.mkdir,
            ScriptLine::Touch(_) => &mut self.touch,
            ScriptLine::Write { .. } => &mut self.write,
            ScriptLine::Rm(_) => &mut self.rm,
            ScriptLine::CheckFs => &mut self.checkfs,
        };
        *slot += 1;
    }

    pub fn total(&self) -> u64 {
        self.cd + self.mkdir + self.touch + self.write + self.rm + self.checkfs
    }
}

/// Buffered newline-terminated script output.
pub struct ScriptWriter<W: Write> {
    out: BufWriter<W>,
    counts: LineCounts,
}

impl<W: Write> ScriptWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: BufWriter::new(out),
            counts: LineCounts::default(),
        }
    }

    pub fn counts(&self) -> &LineCounts {
        &self.counts
    }

    /// Flush and hand back the underlying writer. Consuming `self` closes the
    /// script exactly once.
    pub fn finish(self) -> Result<(W, LineCounts), GenError> {
        let counts = self.counts;
        let out = self.out.into_inner().map_err(|e| e.into_error())?;
        Ok((out, counts))
    }
}

impl<W: Write> ScriptSink for ScriptWriter<W> {
    fn emit(&mut self, line: ScriptLine) -> Result<(), GenError> {
        writeln!(self.out, "{}", line)?;
        log::trace!("{}", line);
        self.counts.record(&line);
        Ok(())
    }
}
