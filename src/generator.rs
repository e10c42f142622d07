//! Workload Generator
//!
//! Drives the random walk: draws a command slot per iteration, applies it to
//! the tree model, and closes the script with a single `checkfs`.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::commands::{CommandContext, CommandSelector, LineCounts, ScriptLine, ScriptSink, ScriptWriter, WalkState};
use crate::config::GeneratorOptions;
use crate::error::GenError;
use crate::model::TreeModel;
use crate::names::NameGenerator;

/// Driver state. A generator runs once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Running,
    Done,
}

/// Summary of a finished run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub seed: u64,
    pub iterations: u64,
    /// Lines written, `checkfs` included
    pub lines_written: u64,
    pub lines: LineCounts,
    /// Iterations that emitted nothing
    pub noops: u64,
    pub capacity: usize,
    pub final_entries: usize,
    pub peak_entries: usize,
    pub final_depth: usize,
}

/// The workload generator.
pub struct Generator {
    options: GeneratorOptions,
    walk: WalkState,
    selector: CommandSelector,
    names: NameGenerator,
    rng: StdRng,
    seed: u64,
    state: DriverState,
}

impl Generator {
    pub fn new(options: GeneratorOptions) -> Result<Self, GenError> {
        options.validate()?;
        let seed = options.seed.unwrap_or_else(rand::random);
        Ok(Self {
            walk: WalkState::new(TreeModel::new(options.capacity)),
            selector: CommandSelector::default(),
            names: options.name_generator(),
            rng: StdRng::seed_from_u64(seed),
            seed,
            state: DriverState::Running,
            options,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn walk(&self) -> &WalkState {
        &self.walk
    }

    /// One loop iteration: draw a slot, apply it, count the action.
    pub fn step(&mut self, sink: &mut dyn ScriptSink) -> Result<(), GenError> {
        if let Some(cmd) = self.selector.pick(&mut self.rng) {
            let mut ctx = CommandContext {
                walk: &mut self.walk,
                names: &self.names,
                rng: &mut self.rng,
                sink,
            };
            cmd.execute(&mut ctx)?;
        }
        self.walk.record_action();
        Ok(())
    }

    /// Run every iteration into `out`, append `checkfs`, flush, and hand the
    /// writer back.
    pub fn run<W: Write>(&mut self, out: W) -> Result<(W, GenerationReport), GenError> {
        if self.state == DriverState::Done {
            return Err(GenError::AlreadyFinished);
        }
        log::info!("generating {} commands", self.options.command_count);
        log::debug!("seed {} options {:?}", self.seed, self.options);

        let mut writer = ScriptWriter::new(out);
        let looped = self.drive(&mut writer);
        self.state = DriverState::Done;
        let (noops, peak_entries) = looped?;

        writer.emit(ScriptLine::CheckFs)?;
        let (out, lines) = writer.finish()?;

        let report = GenerationReport {
            seed: self.seed,
            iterations: self.options.command_count,
            lines_written: lines.total(),
            lines,
            noops,
            capacity: self.walk.tree.capacity(),
            final_entries: self.walk.tree.entry_count(),
            peak_entries,
            final_depth: self.walk.tree.depth(self.walk.cwd)?,
        };
        log::info!(
            "wrote {} lines ({} no-op iterations), {} live entries",
            report.lines_written,
            report.noops,
            report.final_entries
        );
        Ok((out, report))
    }

    fn drive<W: Write>(&mut self, writer: &mut ScriptWriter<W>) -> Result<(u64, usize), GenError> {
        let mut noops = 0;
        let mut peak = self.walk.tree.entry_count();
        for _ in 0..self.options.command_count {
            let before = writer.counts().total();
            self.step(writer)?;
            if writer.counts().total() == before {
                noops += 1;
            }
            peak = peak.max(self.walk.tree.entry_count());
        }
        Ok((noops, peak))
    }
}

/// Generate a script into the file at `path`, replacing it.
pub fn generate_to_path(options: GeneratorOptions, path: &Path) -> Result<GenerationReport, GenError> {
    let mut generator = Generator::new(options)?;
    let file = File::create(path).map_err(|source| GenError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let (_file, report) = generator.run(file)?;
    Ok(report)
}

/// Generate a script in memory.
pub fn generate_to_string(options: GeneratorOptions) -> Result<(String, GenerationReport), GenError> {
    let mut generator = Generator::new(options)?;
    let (out, report) = generator.run(Vec::new())?;
    // names and payloads are ASCII alphanumerics
    let script = String::from_utf8_lossy(&out).into_owned();
    Ok((script, report))
}
