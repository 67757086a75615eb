use std::io::{stdout, Write};

use crossterm::{
    execute,
    style::{Color as CtColor, Print, ResetColor, SetForegroundColor},
};
use owo_colors::OwoColorize;

use crate::error::LinkError;
use crate::manifest::MANIFEST_FILE_NAME;

/// Terminal printer for progress, results and usage.
///
/// Everything goes to stdout; styling is dropped when `colored` is false.
#[derive(Debug, Clone, Copy)]
pub struct Ui {
    colored: bool,
}

impl Ui {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Print info message
    pub fn info(&self, message: &str) {
        self.line(CtColor::Blue, message);
    }

    /// Print success message
    pub fn success(&self, message: &str) {
        self.line(CtColor::Green, message);
    }

    /// Print error message
    pub fn error(&self, error: &LinkError) {
        self.line(CtColor::Red, &format!("ERROR: {}", error));
    }

    pub fn usage(&self) {
        let heading = if self.colored {
            "Usage:".bold().to_string()
        } else {
            "Usage:".to_string()
        };

        let mut out = stdout();
        let _ = writeln!(out, "{}", heading);
        let _ = writeln!(out, "  create-links create");
        let _ = writeln!(out, "  create-links remove");
        let _ = writeln!(out);
        let _ = writeln!(out, "Creates or removes the links for a deployment folder.");
        let _ = writeln!(
            out,
            "The link information is read from \"{}\" in the same folder.",
            MANIFEST_FILE_NAME
        );
        let _ = out.flush();
    }

    fn line(&self, color: CtColor, message: &str) {
        if self.colored {
            let _ = execute!(
                stdout(),
                SetForegroundColor(color),
                Print(message),
                Print("\n"),
                ResetColor
            );
        } else {
            let mut out = stdout();
            let _ = writeln!(out, "{}", message);
            let _ = out.flush();
        }
    }
}
