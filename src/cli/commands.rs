//! Command implementations

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Serialize;
use tokio::io::BufReader;
use tracing::{info, warn};

use crate::adapters::{CutListAdapter, Settings};
use crate::app::{AppContainer, ProcessOutcome};
use crate::cli::args::{CutArgs, EditArgs, IntervalArgs, PlanArgs};
use crate::cli::session::EditSession;
use crate::domain::errors::DomainError;
use crate::domain::model::RemovalInterval;
use crate::domain::rules::IntervalPolicy;
use crate::domain::store::IntervalStore;
use crate::error::{RemoverError, RemoverResult};
use crate::planner::RenderPlan;
use crate::utils::format_duration;
use crate::utils::path::{default_output_path, same_file};

/// Execute the cut command
pub async fn cut(args: CutArgs, container: &dyn AppContainer, settings: &Settings) -> Result<()> {
    info!("Starting cut operation");
    info!("Input: {}", args.input.display());

    check_input(&args.input)?;
    let output = resolve_output(&args.input, args.output.as_deref(), settings)?;
    info!("Output: {}", output.display());

    let store = build_store(&args.intervals).context("Failed to collect chunks to remove")?;
    let interactor = container.remove_interactor();

    let outcome = tokio::select! {
        outcome = interactor.process(&args.input, &output, &store) => outcome,
        _ = tokio::signal::ctrl_c() => {
            warn!("Interrupted, stopping transcoder");
            bail!("Interrupted");
        }
    };

    report_outcome(outcome)
}

/// Execute the plan command
pub fn plan(args: PlanArgs, container: &dyn AppContainer, settings: &Settings) -> Result<()> {
    let output = resolve_output(&args.input, args.output.as_deref(), settings)?;
    let store = build_store(&args.intervals).context("Failed to collect chunks to remove")?;

    let plan = container
        .remove_interactor()
        .plan(&args.input, &output, &store)?;

    if args.json {
        let document = PlanDocument {
            program: &settings.ffmpeg_path,
            removed: store.snapshot(),
            plan: &plan,
        };
        let json = serde_json::to_string_pretty(&document)
            .context("Failed to serialize plan to JSON")?;
        println!("{}", json);
    } else {
        display_plan(&settings.ffmpeg_path, &store.snapshot(), &plan);
    }

    Ok(())
}

/// Execute the edit command
pub async fn edit(args: EditArgs, container: &dyn AppContainer, settings: &Settings) -> Result<()> {
    check_input(&args.input)?;
    let output = resolve_output(&args.input, args.output.as_deref(), settings)?;
    let store = build_store(&args.intervals).context("Failed to collect chunks to remove")?;

    let mut session = EditSession::new(container.remove_interactor(), args.input, output, store);
    let stdin = BufReader::new(tokio::io::stdin());
    session
        .run(stdin, std::io::stdout())
        .await
        .context("Edit session failed")
}

/// JSON document printed by `plan --json`
#[derive(Serialize)]
struct PlanDocument<'a> {
    program: &'a str,
    removed: Vec<RemovalInterval>,
    plan: &'a RenderPlan,
}

/// Collect intervals from the cut list, then from `--remove` arguments
pub fn build_store(args: &IntervalArgs) -> RemoverResult<IntervalStore> {
    let mut store = IntervalStore::new();

    if let Some(path) = &args.cut_list {
        CutListAdapter::load_into(path, &mut store)?;
    }
    for range in &args.remove {
        let (start, end) = split_range(range)?;
        store.add(start, end)?;
    }

    Ok(store)
}

/// Split a `START-END` argument
pub fn split_range(range: &str) -> Result<(&str, &str), DomainError> {
    range
        .split_once('-')
        .ok_or_else(|| DomainError::parse(range, "expected START-END"))
}

fn check_input(input: &Path) -> RemoverResult<()> {
    if !input.is_file() {
        return Err(RemoverError::InputFileNotFound {
            path: input.to_path_buf(),
        });
    }
    Ok(())
}

fn resolve_output(
    input: &Path,
    output: Option<&Path>,
    settings: &Settings,
) -> RemoverResult<PathBuf> {
    let output = match output {
        Some(path) => path.to_path_buf(),
        None => default_output_path(input, &settings.output_extension)?,
    };
    if same_file(input, &output) {
        return Err(RemoverError::OutputIsInput { path: output });
    }
    Ok(output)
}

/// Map the processing outcome to the command result
pub fn report_outcome(outcome: ProcessOutcome) -> Result<()> {
    match outcome {
        ProcessOutcome::Completed {
            output_path,
            report,
        } => {
            info!("Cut operation completed successfully");
            println!(
                "Wrote {} in {}",
                output_path.display(),
                format_duration(report.elapsed)
            );
            Ok(())
        }
        ProcessOutcome::Rejected(e) => Err(e.into()),
        ProcessOutcome::Failed { diagnostic } => Err(DomainError::Execution(diagnostic).into()),
    }
}

/// Display a render plan in human-readable format
pub fn display_plan(program: &str, removed: &[RemovalInterval], plan: &RenderPlan) {
    println!("Input:  {}", plan.input_path.display());
    println!("Output: {}", plan.output_path.display());
    println!();

    println!(
        "Remove ({:.3}s total):",
        IntervalPolicy::removed_seconds(removed)
    );
    for interval in removed {
        println!("  {}", interval);
    }
    println!();

    println!("Keep:");
    for (index, segment) in plan.segments.iter().enumerate() {
        println!("  v{index}/a{index} {}", segment);
    }
    println!();

    println!("Filter graph:");
    println!("  {}", plan.graph);
    println!();

    println!("Command:");
    println!("  {}", command_line(program, &plan.args));
}

/// Render a command line that can be pasted into a POSIX shell
pub fn command_line(program: &str, args: &[OsString]) -> String {
    std::iter::once(shell_quote(program))
        .chain(args.iter().map(|arg| shell_quote(&arg.to_string_lossy())))
        .collect::<Vec<_>>()
        .join(" ")
}

fn shell_quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=,+@%".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
