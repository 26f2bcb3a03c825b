//! Progress reporting for chat turns

use barista_application::ChatProgressNotifier;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner shown while waiting on the agent or the catalog
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start(&self, message: &'static str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            // A turn that never completed leaves its spinner behind
            if let Some(stale) = slot.replace(pb) {
                stale.finish_and_clear();
            }
        }
    }

    fn finish(&self) {
        if let Some(pb) = self.spinner.lock().ok().and_then(|mut slot| slot.take()) {
            pb.finish_and_clear();
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatProgressNotifier for ProgressReporter {
    fn on_agent_request_start(&self) {
        self.start("Barista is typing...");
    }

    fn on_agent_request_complete(&self, _success: bool) {
        self.finish();
    }

    fn on_menu_fetch_start(&self) {
        self.start("Loading menu...");
    }

    fn on_menu_fetch_complete(&self, _success: bool) {
        self.finish();
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ChatProgressNotifier for SimpleProgress {
    fn on_agent_request_start(&self) {
        println!("{} {}", "->".cyan(), "Barista is typing...".dimmed());
    }

    fn on_agent_request_complete(&self, success: bool) {
        if !success {
            println!("  {} agent request failed", "x".red());
        }
    }

    fn on_menu_fetch_complete(&self, success: bool) {
        if !success {
            println!("  {} menu unavailable", "x".red());
        }
    }
}
