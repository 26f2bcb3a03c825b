//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::ConsoleFormatter;
use barista_application::ChatFlowController;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

/// Removing without a quantity drops the whole line
const REMOVE_ALL: i64 = -(u32::MAX as i64);

/// A parsed slash command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Menu,
    Refresh,
    Cart,
    Add { quantity: u32, item: String },
    Remove { item: String, quantity: Option<u32> },
    Clear,
    Order,
    Quit,
}

impl ReplCommand {
    /// Parse a line starting with `/`. The error is a message for the user.
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut parts = line.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        match name {
            "/help" | "/h" | "/?" => Ok(ReplCommand::Help),
            "/menu" => Ok(ReplCommand::Menu),
            "/refresh" => Ok(ReplCommand::Refresh),
            "/cart" => Ok(ReplCommand::Cart),
            "/clear" => Ok(ReplCommand::Clear),
            "/order" => Ok(ReplCommand::Order),
            "/quit" | "/exit" | "/q" => Ok(ReplCommand::Quit),
            "/add" => Self::parse_add(&args),
            "/remove" | "/rm" => Self::parse_remove(&args),
            _ => Err(format!(
                "Unknown command: {}\nType /help for available commands",
                name
            )),
        }
    }

    /// `/add [qty] <item>`; quantity defaults to 1
    fn parse_add(args: &[&str]) -> Result<Self, String> {
        let (quantity, rest) = match args.split_first() {
            Some((first, rest)) if first.chars().all(|c| c.is_ascii_digit()) => {
                let quantity = first
                    .parse::<u32>()
                    .map_err(|_| format!("Quantity too large: {}", first))?;
                (quantity, rest)
            }
            _ => (1, args),
        };
        if quantity == 0 {
            return Err("Quantity must be at least 1".to_string());
        }
        let item = rest.join(" ");
        if item.is_empty() {
            return Err("Usage: /add <qty> <item>".to_string());
        }
        Ok(ReplCommand::Add { quantity, item })
    }

    /// `/remove <item> [qty]`
    fn parse_remove(args: &[&str]) -> Result<Self, String> {
        let (quantity, rest) = match args.split_last() {
            Some((last, rest)) if !rest.is_empty() => match last.parse::<u32>() {
                Ok(quantity) => (Some(quantity), rest),
                Err(_) => (None, args),
            },
            _ => (None, args),
        };
        let item = rest.join(" ");
        if item.is_empty() {
            return Err("Usage: /remove <item> [qty]".to_string());
        }
        Ok(ReplCommand::Remove { item, quantity })
    }
}

/// Interactive chat REPL
pub struct ChatRepl {
    controller: Arc<ChatFlowController>,
    history_path: Option<PathBuf>,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(controller: Arc<ChatFlowController>) -> Self {
        Self {
            controller,
            history_path: None,
        }
    }

    /// Set where line history is persisted
    pub fn with_history(mut self, path: Option<PathBuf>) -> Self {
        self.history_path = path;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline("you> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    if line.starts_with('/') {
                        match ReplCommand::parse(line) {
                            Ok(command) => {
                                if self.handle_command(command).await {
                                    break;
                                }
                            }
                            Err(message) => println!("{}", message),
                        }
                        continue;
                    }

                    self.process_message(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = self.history_path
            && let Err(e) = rl.save_history(path)
        {
            warn!("Could not save history to {}: {}", path.display(), e);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!(
            "{}",
            ConsoleFormatter::format_greeting(self.controller.greeting())
        );
        println!("Type /help for commands.");
        println!();
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  /help, /h, /?         - Show this help");
        println!("  /menu                 - Show the menu");
        println!("  /refresh              - Reload the menu from the catalog");
        println!("  /cart                 - Show your cart and total");
        println!("  /add <qty> <item>     - Add an item to the cart");
        println!("  /remove <item> [qty]  - Remove an item (all of it by default)");
        println!("  /clear                - Empty the cart");
        println!("  /order                - Show the order the barista has taken");
        println!("  /quit, /exit, /q      - Exit chat");
        println!();
    }

    /// Run a slash command. Returns true if the REPL should exit.
    async fn handle_command(&self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Help => Self::print_help(),
            ReplCommand::Menu => match self.controller.menu().await {
                Ok(menu) => println!("{}", ConsoleFormatter::format_menu(&menu)),
                Err(e) => eprintln!("Error: {}", e),
            },
            ReplCommand::Refresh => match self.controller.refresh_menu().await {
                Ok(menu) => println!("Menu reloaded ({} items).", menu.len()),
                Err(e) => eprintln!("Error: {}", e),
            },
            ReplCommand::Cart => self.print_cart().await,
            ReplCommand::Add { quantity, item } => {
                match self.controller.add_item(&item, quantity).await {
                    Ok(key) => println!("Added {} x {} to your cart.", quantity, key),
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            ReplCommand::Remove { item, quantity } => {
                let delta = quantity.map_or(REMOVE_ALL, |q| -i64::from(q));
                match self.controller.adjust_item(&item, delta).await {
                    Ok((key, 0)) => println!("Removed {} from your cart.", key),
                    Ok((key, left)) => println!("{} x {} left in your cart.", left, key),
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            ReplCommand::Clear => {
                self.controller.empty_cart().await;
                println!("Your cart is empty.");
            }
            ReplCommand::Order => {
                let order = self.controller.current_order().await;
                println!("{}", ConsoleFormatter::format_order(&order));
            }
        }
        false
    }

    async fn print_cart(&self) {
        let cart = self.controller.cart_snapshot().await;
        let total = match self.controller.cart_total().await {
            Ok(total) => Some(total),
            Err(e) => {
                warn!("Cart shown without prices: {}", e);
                None
            }
        };
        println!("{}", ConsoleFormatter::format_cart(&cart, total.as_ref()));
    }

    async fn process_message(&self, text: &str) {
        println!();
        match self.controller.send_message(text).await {
            Ok(outcome) => {
                println!(
                    "{}",
                    ConsoleFormatter::format_reply(&outcome.reply, outcome.fallback)
                );
            }
            Err(e) => {
                eprintln!("Error: {}", e);
            }
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(ReplCommand::parse("/help"), Ok(ReplCommand::Help));
        assert_eq!(ReplCommand::parse("/?"), Ok(ReplCommand::Help));
        assert_eq!(ReplCommand::parse("/menu"), Ok(ReplCommand::Menu));
        assert_eq!(ReplCommand::parse("/refresh"), Ok(ReplCommand::Refresh));
        assert_eq!(ReplCommand::parse("/cart"), Ok(ReplCommand::Cart));
        assert_eq!(ReplCommand::parse("/clear"), Ok(ReplCommand::Clear));
        assert_eq!(ReplCommand::parse("/order"), Ok(ReplCommand::Order));
        assert_eq!(ReplCommand::parse("/q"), Ok(ReplCommand::Quit));
    }

    #[test]
    fn test_parse_add() {
        assert_eq!(
            ReplCommand::parse("/add 2 Iced Latte"),
            Ok(ReplCommand::Add {
                quantity: 2,
                item: "Iced Latte".to_string()
            })
        );
        assert_eq!(
            ReplCommand::parse("/add Croissant"),
            Ok(ReplCommand::Add {
                quantity: 1,
                item: "Croissant".to_string()
            })
        );
    }

    #[test]
    fn test_parse_add_rejects_bad_input() {
        assert!(ReplCommand::parse("/add").is_err());
        assert!(ReplCommand::parse("/add 3").is_err());
        assert!(ReplCommand::parse("/add 0 Latte").is_err());
        assert!(ReplCommand::parse("/add 99999999999 Latte").is_err());
    }

    #[test]
    fn test_parse_remove() {
        assert_eq!(
            ReplCommand::parse("/remove Iced Latte 1"),
            Ok(ReplCommand::Remove {
                item: "Iced Latte".to_string(),
                quantity: Some(1)
            })
        );
        assert_eq!(
            ReplCommand::parse("/remove Croissant"),
            Ok(ReplCommand::Remove {
                item: "Croissant".to_string(),
                quantity: None
            })
        );
        // A lone number is an item name, not a quantity
        assert_eq!(
            ReplCommand::parse("/remove 7"),
            Ok(ReplCommand::Remove {
                item: "7".to_string(),
                quantity: None
            })
        );
        assert!(ReplCommand::parse("/remove").is_err());
    }

    #[test]
    fn test_parse_unknown() {
        let err = ReplCommand::parse("/dance").unwrap_err();
        assert!(err.starts_with("Unknown command: /dance"));
    }
}
