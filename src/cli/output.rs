//! Terminal output for citizen
//!
//! Styled status lines, alerts and simple tables. Everything user-facing goes
//! through here; diagnostics go through `tracing`.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Output handler for consistent CLI formatting
pub struct Output {
    verbose: bool,
    quiet: bool,
    to_stderr: bool,
}

impl Output {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            to_stderr: false,
        }
    }

    /// Send every human-facing line to stderr, keeping stdout free for
    /// machine-readable results
    pub fn with_stderr(mut self, to_stderr: bool) -> Self {
        self.to_stderr = to_stderr;
        self
    }

    pub fn is_stderr(&self) -> bool {
        self.to_stderr
    }

    fn emit(&self, line: std::fmt::Arguments<'_>) {
        if self.to_stderr {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if !self.quiet {
            self.emit(format_args!("{} {}", style("✔").green(), message));
        }
    }

    /// Print an error message. Errors are shown even in quiet mode.
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("✖").red(), message);
    }

    pub fn warning(&self, message: &str) {
        if !self.quiet {
            self.emit(format_args!("{} {}", style("⚠").yellow(), message));
        }
    }

    pub fn info(&self, message: &str) {
        if !self.quiet {
            self.emit(format_args!("{} {}", style("ℹ").blue(), message));
        }
    }

    /// Print a message only in verbose mode
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            self.emit(format_args!("{} {}", style("ℹ").dim(), style(message).dim()));
        }
    }

    pub fn header(&self, title: &str) {
        if !self.quiet {
            self.emit(format_args!("\n{}", style(title).bold().underlined()));
        }
    }

    pub fn step(&self, step: &str) {
        if !self.quiet {
            self.emit(format_args!("{} {}", style("❯").cyan(), step));
        }
    }

    /// Titled alert box, the terminal counterpart of a dialog
    pub fn alert(&self, title: &str, body: &str) {
        if self.quiet {
            return;
        }
        self.emit(format_args!("\n{}", style(title).bold().cyan()));
        for line in body.lines() {
            self.emit(format_args!("  {}", line));
        }
    }

    /// Spinner shown while waiting on the network
    pub fn spinner(&self, message: &str) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    pub fn table_row(&self, key: &str, value: &str) {
        if !self.quiet {
            self.emit(format_args!("  {:<20} {}", style(key).dim(), value));
        }
    }

    pub fn list_item(&self, item: &str) {
        if !self.quiet {
            self.emit(format_args!("  • {}", item));
        }
    }

    pub fn indent(&self, message: &str) {
        if !self.quiet {
            self.emit(format_args!("    {}", message));
        }
    }

    pub fn blank_line(&self) {
        if !self.quiet {
            self.emit(format_args!(""));
        }
    }
}
