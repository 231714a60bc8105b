use indicatif::{ProgressBar, ProgressStyle};

const TICKS: [&str; 8] = ["◐", "◓", "◑", "◒", "◐", "◓", "◑", "◒"];
pub const LOADING_MESSAGE: &str = "Processing... turning your idea into an image";

/// Shown on stderr while a request is in flight; hidden entirely when quiet.
pub fn loading_overlay(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let overlay = ProgressBar::new_spinner();
    overlay.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&TICKS)
            .template("{spinner:.blue} {msg:.bold} {elapsed:.dim}"),
    );
    overlay.set_message(LOADING_MESSAGE);
    overlay.enable_steady_tick(120);
    overlay
}
