//! Line-oriented edit session
//!
//! Mirrors the add / remove / clear / process workflow over stdin so chunk
//! lists can be built up and corrected before anything is rendered.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::app::{ProcessOutcome, RemoveInteractor};
use crate::domain::model::IntervalId;
use crate::domain::rules::IntervalPolicy;
use crate::domain::store::IntervalStore;
use crate::utils::format_duration;

const HELP: &str = "\
Commands:
  add <start> <end>   queue a chunk to remove (HH:MM:SS.fff or MM:SS.fff)
  remove <id>         drop a queued chunk by id (as shown by list)
  remove-at <index>   drop a queued chunk by list position
  clear               drop every queued chunk
  list                show queued chunks
  plan                show the ffmpeg filter graph
  process             render the output
  help                show this help
  quit                leave the session";

/// One parsed session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Add { start: String, end: String },
    Remove(IntervalId),
    RemoveAt(usize),
    Clear,
    List,
    Plan,
    Process,
    Help,
    Quit,
}

impl SessionCommand {
    /// Parse one input line; blank lines yield `None`
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let command = match words.as_slice() {
            [] => return Ok(None),
            ["add", start, end] => SessionCommand::Add {
                start: start.to_string(),
                end: end.to_string(),
            },
            ["remove", id] => {
                let id = id
                    .trim_start_matches('#')
                    .parse::<u64>()
                    .map_err(|_| format!("not an interval id: {}", id))?;
                SessionCommand::Remove(IntervalId(id))
            }
            ["remove-at", index] => SessionCommand::RemoveAt(
                index
                    .parse::<usize>()
                    .map_err(|_| format!("not a list position: {}", index))?,
            ),
            ["clear"] => SessionCommand::Clear,
            ["list"] => SessionCommand::List,
            ["plan"] => SessionCommand::Plan,
            ["process"] => SessionCommand::Process,
            ["help"] => SessionCommand::Help,
            ["quit"] | ["exit"] => SessionCommand::Quit,
            [other, ..] => return Err(format!("unknown command or wrong arguments: {}", other)),
        };
        Ok(Some(command))
    }
}

/// Interactive session owning the interval store for one asset
pub struct EditSession {
    interactor: Arc<RemoveInteractor>,
    input: PathBuf,
    output: PathBuf,
    store: IntervalStore,
}

impl EditSession {
    pub fn new(
        interactor: Arc<RemoveInteractor>,
        input: PathBuf,
        output: PathBuf,
        store: IntervalStore,
    ) -> Self {
        Self {
            interactor,
            input,
            output,
            store,
        }
    }

    pub fn store(&self) -> &IntervalStore {
        &self.store
    }

    /// Read commands until `quit` or end of input.
    ///
    /// Command errors are printed and the session carries on.
    pub async fn run<R, W>(&mut self, reader: R, mut out: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        writeln!(out, "Editing {} -> {}", self.input.display(), self.output.display())?;
        writeln!(out, "Type 'help' for commands.")?;

        let mut lines = reader.lines();
        loop {
            write!(out, "> ")?;
            out.flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            let command = match SessionCommand::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(message) => {
                    writeln!(out, "error: {}", message)?;
                    continue;
                }
            };
            debug!(?command, "Session command");

            if command == SessionCommand::Quit {
                break;
            }
            self.apply(command, &mut out).await?;
        }

        Ok(())
    }

    async fn apply<W: Write>(&mut self, command: SessionCommand, out: &mut W) -> Result<()> {
        match command {
            SessionCommand::Add { start, end } => match self.store.add(&start, &end) {
                Ok(id) => {
                    if let Some(interval) = self.store.get(id) {
                        writeln!(out, "added {} {}", id, interval)?;
                    }
                }
                Err(e) => writeln!(out, "error: {}", e)?,
            },
            SessionCommand::Remove(id) => match self.store.remove(id) {
                Some(interval) => writeln!(out, "removed {} {}", id, interval)?,
                None => writeln!(out, "no chunk {}", id)?,
            },
            SessionCommand::RemoveAt(index) => match self.store.remove_at(index) {
                Some(interval) => writeln!(out, "removed {}", interval)?,
                None => writeln!(out, "no chunk at position {}", index)?,
            },
            SessionCommand::Clear => {
                self.store.clear();
                writeln!(out, "cleared")?;
            }
            SessionCommand::List => self.list(out)?,
            SessionCommand::Plan => {
                match self.interactor.plan(&self.input, &self.output, &self.store) {
                    Ok(plan) => {
                        for (index, segment) in plan.segments.iter().enumerate() {
                            writeln!(out, "keep {} {}", index, segment)?;
                        }
                        writeln!(out, "{}", plan.graph)?;
                    }
                    Err(e) => writeln!(out, "error: {}", e)?,
                }
            }
            SessionCommand::Process => {
                writeln!(out, "processing...")?;
                out.flush()?;
                match self
                    .interactor
                    .process(&self.input, &self.output, &self.store)
                    .await
                {
                    ProcessOutcome::Completed {
                        output_path,
                        report,
                    } => writeln!(
                        out,
                        "done: {} ({})",
                        output_path.display(),
                        format_duration(report.elapsed)
                    )?,
                    ProcessOutcome::Rejected(e) => writeln!(out, "error: {}", e)?,
                    ProcessOutcome::Failed { diagnostic } => {
                        writeln!(out, "failed:\n{}", diagnostic)?
                    }
                }
            }
            SessionCommand::Help => writeln!(out, "{}", HELP)?,
            SessionCommand::Quit => {}
        }
        Ok(())
    }

    fn list<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.store.is_empty() {
            writeln!(out, "no chunks queued")?;
            return Ok(());
        }
        for (position, (id, interval)) in self.store.iter().enumerate() {
            writeln!(
                out,
                "{:>3}  {:<5} {}  {}  ({:.3}s)",
                position,
                id.to_string(),
                interval.start(),
                interval.end(),
                interval.duration()
            )?;
        }
        writeln!(
            out,
            "{} chunk(s), {:.3}s removed",
            self.store.len(),
            IntervalPolicy::removed_seconds(&self.store.snapshot())
        )?;
        Ok(())
    }
}
