use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub table_color: bool,
    pub term_width: Option<usize>,
    pub interactive: bool,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let is_tty = std::io::stdout().is_terminal();
    let table_color = is_tty
        && flags.output == OutputFormat::Table
        && !flags.quiet
        && std::env::var_os("NO_COLOR").is_none();

    let term_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    let _ = UI_PREFS.set(UiPrefs {
        table_color,
        term_width,
        interactive: std::io::stdin().is_terminal(),
    });
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        table_color: false,
        term_width: None,
        interactive: false,
    })
}
