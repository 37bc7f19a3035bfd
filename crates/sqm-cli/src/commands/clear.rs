use std::io::{BufRead, Write};

use anyhow::{Context, bail};
use sqm_core::responses::ClearResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ClearArgs;
use crate::context::AppContext;
use crate::output::emit;
use crate::ui;

/// Handle `sqm clear`.
pub fn handle(args: &ClearArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !args.yes && !ctx.store.is_empty() {
        if !ui::prefs().interactive {
            bail!(
                "refusing to delete {} markers without confirmation; pass --yes",
                ctx.store.len()
            );
        }
        if !confirm("Delete all local markers?")? {
            if !flags.quiet {
                eprintln!("cancelled");
            }
            return Ok(());
        }
    }

    let response = ClearResponse {
        cleared: ctx.store.clear(),
    };
    emit(&response, flags, || String::from("cleared"))
}

fn confirm(question: &str) -> anyhow::Result<bool> {
    let mut stderr = std::io::stderr();
    write!(stderr, "{question} [y/N] ")?;
    stderr.flush()?;

    let mut answer = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("failed to read confirmation")?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::is_yes;

    #[test]
    fn only_explicit_yes_confirms() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("yep"));
    }
}
