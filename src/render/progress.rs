use crate::pipeline::{PipelineState, ProgressReporter};
use indicatif::{ProgressBar, ProgressStyle};

/// Shows pipeline progress as a bar on stderr.
pub struct TerminalReporter {
    bar: ProgressBar,
}

impl TerminalReporter {
    pub fn new() -> Self {
        let bar = ProgressBar::new(100);
        if let Ok(style) = ProgressStyle::with_template("{bar:40.cyan/blue} {pos:>3}% {msg}") {
            bar.set_style(style.progress_chars("##-"));
        }
        Self { bar }
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for TerminalReporter {
    fn progress(&mut self, state: PipelineState, percent: u8, message: &str) {
        self.bar.set_position(u64::from(percent));
        match state {
            PipelineState::Done | PipelineState::Failed => self.bar.finish_and_clear(),
            _ => self.bar.set_message(message.to_string()),
        }
    }

    fn alert(&mut self, message: &str) {
        // Printed even when stderr is not a terminal and the bar is hidden
        self.bar.suspend(|| eprintln!("[x] {}", message));
    }
}
