mod cli;
mod render;

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use engine_logging::{engine_debug, engine_error, engine_info};
use gridsim_content::{load_challenge, save_challenge, Challenge};
use gridsim_core::diff;

use crate::cli::{Cli, Command};
use crate::render::{render_diff, render_grid};

fn main() -> ExitCode {
    let cli = Cli::parse();
    engine_logging::initialize(&cli.log_destination(), cli.log_level());

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            engine_error!("{err:#}");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Preview {
            path,
            step,
            no_diff,
        } => {
            let challenge = load(&path)?;
            print!("{}", preview(&challenge, step, !no_diff));
            Ok(())
        }
        Command::Convert { input, output } => {
            let challenge = load(&input)?;
            save_challenge(&output, &challenge)
                .with_context(|| format!("failed to write {}", output.display()))?;
            engine_info!("Converted {:?} to {:?}", input, output);
            Ok(())
        }
    }
}

fn load(path: &Path) -> Result<Challenge> {
    load_challenge(path).with_context(|| format!("failed to load {}", path.display()))
}

/// Title, the untouched grid, the grid at `step` (default: last step) and,
/// when asked, what changed between the two.
fn preview(challenge: &Challenge, step: Option<isize>, with_diff: bool) -> String {
    let last = isize::try_from(challenge.steps.len()).unwrap_or(isize::MAX) - 1;
    let step = step.unwrap_or(last);
    engine_debug!("Previewing {:?} at step {step}", challenge.id);

    let before = challenge.before();
    let after = challenge.at(step);

    let mut out = format!("# {}\n", challenge.title);
    if let Some(description) = &challenge.description {
        out.push_str(description);
        out.push('\n');
    }
    out.push_str("\nBefore:\n");
    out.push_str(&render_grid(&before.view()));

    let shown = step.min(last);
    let label = if shown < 0 {
        "before any step".to_string()
    } else {
        format!("step {shown}")
    };
    out.push_str(&format!("\nAfter {label}:\n"));
    if let Some(instruction) = usize::try_from(shown)
        .ok()
        .and_then(|index| challenge.steps.get(index))
        .map(|s| s.instruction.as_str())
        .filter(|text| !text.is_empty())
    {
        out.push_str(&format!("({instruction})\n"));
    }
    out.push_str(&render_grid(&after.view()));

    if with_diff {
        out.push_str("\nChanges:\n");
        out.push_str(&render_diff(&diff(&before, &after), &after.styles));
    }
    out
}
