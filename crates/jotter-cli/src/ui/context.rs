//! UI context for environment detection.

use std::io::IsTerminal;

/// Terminal context for UI decisions.
#[derive(Debug, Clone, Copy)]
pub struct UiContext {
    /// Whether stdout is a TTY
    pub is_tty: bool,
    /// Whether color output is enabled
    pub color: bool,
}

impl UiContext {
    /// Resolve from the environment and the `[ui] color` setting.
    ///
    /// Color is off when stdout is not a TTY, NO_COLOR is set, or TERM=dumb.
    pub fn from_env(color_setting: bool) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();
        Self {
            is_tty,
            color: is_tty && color_setting && !no_color_env && !term_is_dumb,
        }
    }

    /// Uncolored output, as when piped.
    #[cfg(test)]
    pub fn plain() -> Self {
        Self {
            is_tty: false,
            color: false,
        }
    }
}
