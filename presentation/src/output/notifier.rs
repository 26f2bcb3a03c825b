//! Console implementation of the cart notification channel

use barista_application::OrderNotifier;
use colored::Colorize;

/// Prints cart notifications as a highlighted line on stdout
pub struct ConsoleNotifier;

impl OrderNotifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        println!("{} {}", "+".green().bold(), message.green());
    }
}
