//! Console output formatter for chat replies, the menu and the cart

use barista_domain::{AgentReply, CartStore, CartTotal, MenuItems, OrderSnapshot};
use colored::Colorize;

/// Formats chat output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Opening assistant message
    pub fn format_greeting(greeting: &str) -> String {
        format!(
            "{}\n\n{}\n",
            Self::header("Old Kasturi Coffee"),
            Self::indent(greeting, "  ")
        )
    }

    /// Assistant reply; fallback texts are shown dimmed
    pub fn format_reply(reply: &AgentReply, fallback: bool) -> String {
        let label = "Barista:".cyan().bold();
        let content = reply.content();
        if fallback {
            format!("{} {}", label, content.yellow())
        } else {
            format!("{} {}", label, content)
        }
    }

    pub fn format_menu(menu: &MenuItems) -> String {
        let mut output = Self::section_header("Menu");
        if menu.is_empty() {
            output.push_str(&format!("  {}\n", "The menu is empty.".dimmed()));
            return output;
        }

        let width = menu.iter().map(|(name, _)| name.chars().count()).max().unwrap_or(0);
        for (name, price) in menu.iter() {
            output.push_str(&format!(
                "  {:<width$}  {}\n",
                name,
                Self::format_price(price).green(),
                width = width
            ));
        }
        output
    }

    /// Cart contents, with prices when the menu could be loaded
    pub fn format_cart(cart: &CartStore, total: Option<&CartTotal>) -> String {
        let mut output = Self::section_header("Your cart");
        if !cart.has_items() {
            output.push_str(&format!("  {}\n", "Your cart is empty.".dimmed()));
            return output;
        }

        for (item, quantity) in cart.items() {
            output.push_str(&format!("  {:>3} x {}\n", quantity, item));
        }

        if let Some(total) = total {
            output.push_str(&format!(
                "\n  {} {}\n",
                "Total:".bold(),
                Self::format_price(total.total).green().bold()
            ));
            if !total.unpriced.is_empty() {
                output.push_str(&format!(
                    "  {} {}\n",
                    "Not on the menu:".yellow(),
                    total.unpriced.join(", ")
                ));
            }
        }
        output
    }

    /// The order last reported by the agent
    pub fn format_order(order: &OrderSnapshot) -> String {
        let mut output = Self::section_header("Agent's order");
        if order.is_empty() {
            output.push_str(&format!("  {}\n", "No order yet.".dimmed()));
            return output;
        }
        for line in order.iter() {
            output.push_str(&format!("  - {}\n", line));
        }
        output
    }

    pub fn format_price(amount: f64) -> String {
        format!("${:.2}", amount)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(44);
        format!("{}\n{:^44}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(30))
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
