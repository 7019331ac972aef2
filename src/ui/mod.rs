//! UI/Progress presentation layer
//!
//! This module handles:
//! - Confirmation prompts behind the [`Confirmer`] trait
//! - Per-item progress reporting for batch installs and removals
//! - Styled status lines shared by the commands
//!
//! All per-item output goes through the [`ProgressReporter`] trait so the same
//! operation can draw a progress bar on a terminal, print plain lines when
//! piped, or stay silent in tests.

mod confirm;

#[cfg(test)]
pub use confirm::CannedConfirmer;
pub use confirm::{AssumeYes, Confirmer, PromptConfirmer};

use console::Style;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Progress reporter for batch operations
pub trait ProgressReporter {
    /// Begin a batch of `total` items
    fn start(&mut self, total: usize);

    /// Print the result line of one item and advance progress
    fn item_done(&mut self, line: &str);

    /// End the batch
    fn finish(&mut self);
}

/// Interactive progress reporter with a visual progress bar
///
/// Item lines are printed above the bar so the log survives after the bar is
/// cleared. The bar draws to stdout, next to the rest of the output; when its
/// target turns out to be hidden, lines are printed directly instead.
pub struct InteractiveProgressReporter {
    pb: Option<ProgressBar>,
    draw_target: fn() -> ProgressDrawTarget,
}

impl InteractiveProgressReporter {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stdout)
    }

    pub fn with_draw_target(draw_target: fn() -> ProgressDrawTarget) -> Self {
        Self {
            pb: None,
            draw_target,
        }
    }
}

impl Default for InteractiveProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn start(&mut self, total: usize) {
        let pb = ProgressBar::with_draw_target(Some(total as u64), (self.draw_target)());
        if pb.is_hidden() {
            tracing::debug!("progress bar target is hidden, printing plain lines");
            self.pb = None;
            return;
        }

        let style = ProgressStyle::default_bar()
            .template("  [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        pb.set_style(style);
        self.pb = Some(pb);
    }

    fn item_done(&mut self, line: &str) {
        match self.pb {
            Some(ref pb) => {
                pb.println(line);
                pb.inc(1);
            }
            None => println!("{line}"),
        }
    }

    fn finish(&mut self) {
        if let Some(pb) = self.pb.take() {
            pb.finish_and_clear();
        }
    }
}

/// Plain line reporter used when stdout is not a terminal
#[derive(Default)]
pub struct PlainProgressReporter;

impl ProgressReporter for PlainProgressReporter {
    fn start(&mut self, _total: usize) {}

    fn item_done(&mut self, line: &str) {
        println!("{line}");
    }

    fn finish(&mut self) {}
}

/// Silent progress reporter that records lines instead of printing them
#[cfg(test)]
#[derive(Default)]
pub struct SilentProgressReporter {
    pub lines: Vec<String>,
    pub completed: usize,
}

#[cfg(test)]
impl ProgressReporter for SilentProgressReporter {
    fn start(&mut self, _total: usize) {}

    fn item_done(&mut self, line: &str) {
        self.lines.push(line.to_string());
        self.completed += 1;
    }

    fn finish(&mut self) {}
}

/// Pick a reporter for the current stdout
pub fn reporter_for_stdout() -> Box<dyn ProgressReporter> {
    if console::Term::stdout().is_term() {
        Box::new(InteractiveProgressReporter::new())
    } else {
        Box::new(PlainProgressReporter)
    }
}

/// Bracketed tag that starts a top-level status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Warning,
    Install,
    Success,
    Cancelled,
    Info,
    Found,
}

impl Status {
    pub fn tag(self) -> &'static str {
        match self {
            Status::Ok => "[OK]",
            Status::Warning => "[WARNING]",
            Status::Install => "[INSTALL]",
            Status::Success => "[SUCCESS]",
            Status::Cancelled => "[CANCELLED]",
            Status::Info => "[INFO]",
            Status::Found => "[FOUND]",
        }
    }

    fn style(self) -> Style {
        match self {
            Status::Ok | Status::Success => Style::new().green().bold(),
            Status::Warning | Status::Cancelled => Style::new().yellow().bold(),
            Status::Install | Status::Info | Status::Found => Style::new().cyan().bold(),
        }
    }
}

/// `[TAG] message` with the tag colored
pub fn status_line(status: Status, message: &str) -> String {
    format!("{} {message}", status.style().apply_to(status.tag()))
}

/// `  + name` in green
pub fn added_line(name: &str) -> String {
    format!("  {} {name}", Style::new().green().apply_to("+"))
}

/// `  - text` in green
pub fn removed_line(text: &str) -> String {
    format!("  {} {text}", Style::new().green().apply_to("-"))
}

/// `  ! text` in red
pub fn failed_line(text: &str) -> String {
    format!("  {} {text}", Style::new().red().bold().apply_to("!"))
}

/// `  ⚠ text` in yellow
pub fn skipped_line(text: &str) -> String {
    format!("  {} {text}", Style::new().yellow().apply_to("⚠"))
}

/// Bold heading with a rule underneath
pub fn print_banner(title: &str) {
    println!("{}", Style::new().bold().apply_to(title));
    println!("{}", "=".repeat(40));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_progress_reporter_records_lines() {
        let mut reporter = SilentProgressReporter::default();
        reporter.start(2);
        reporter.item_done("  + a");
        reporter.item_done("  + b");
        reporter.finish();

        assert_eq!(reporter.lines, vec!["  + a", "  + b"]);
        assert_eq!(reporter.completed, 2);
    }

    #[test]
    fn test_hidden_draw_target_falls_back_to_plain_lines() {
        let mut reporter =
            InteractiveProgressReporter::with_draw_target(ProgressDrawTarget::hidden);
        reporter.start(2);

        assert!(reporter.pb.is_none());
        reporter.item_done("  + a");
        reporter.item_done("  ! Failed to install b: boom");
        reporter.finish();
        assert!(reporter.pb.is_none());
    }

    #[test]
    fn test_status_line_without_colors() {
        console::set_colors_enabled(false);
        assert_eq!(
            status_line(Status::Ok, "Target directory: /x"),
            "[OK] Target directory: /x"
        );
        assert_eq!(Status::Cancelled.tag(), "[CANCELLED]");
    }

    #[test]
    fn test_status_lines_contain_text() {
        assert!(added_line("commit").ends_with("commit"));
        assert!(removed_line("Removed skill: commit").contains("Removed skill: commit"));
        assert!(failed_line("boom").contains("boom"));
        assert!(skipped_line("Skipping c (no SKILL.md)").contains("Skipping c"));
    }
}
