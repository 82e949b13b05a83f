//! Attempt progress display for seating generation

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static ATTEMPT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Attempts: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks generation attempts against the attempt budget
pub struct AttemptProgress {
    bar: ProgressBar,
    rejected: usize,
}

impl AttemptProgress {
    /// Create a visible progress bar for `max_attempts`
    pub fn new(max_attempts: usize) -> Self {
        let bar = ProgressBar::new(max_attempts as u64);
        bar.set_style(ATTEMPT_STYLE.clone());
        Self { bar, rejected: 0 }
    }

    /// Create a progress tracker that draws nothing
    pub fn hidden(max_attempts: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(max_attempts as u64);
        Self { bar, rejected: 0 }
    }

    /// Record a rejected attempt and its reason
    pub fn reject(&mut self, reason: &impl ToString) {
        self.rejected += 1;
        self.bar.inc(1);
        self.bar.set_message(reason.to_string());
    }

    /// Record the accepted attempt and close the bar
    pub fn accept(&self) {
        self.bar.inc(1);
        self.bar.finish_with_message("seating found");
    }

    /// Close the bar after running out of attempts
    pub fn abandon(&self) {
        self.bar.abandon_with_message("no valid seating");
    }

    /// Attempts rejected so far
    pub const fn rejected(&self) -> usize {
        self.rejected
    }

    /// Attempts recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}
