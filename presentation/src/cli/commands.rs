//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for barista
#[derive(Parser, Debug)]
#[command(name = "barista")]
#[command(author, version, about = "Order coffee by chatting with the shop's ordering agent")]
#[command(long_about = r#"
Barista is a chat front-end for a coffee shop's hosted ordering agent.

Every message is sent to the agent together with the conversation so far.
When the agent reports an updated order, the cart is replaced with it and
the newly added items are announced.

Configuration files are loaded from (in priority order):
1. BARISTA_* environment variables (e.g. BARISTA_AGENT__URL)
2. --config <path>     Explicit config file
3. ./barista.toml      Project-level config
4. ~/.config/barista/config.toml   Global config

Example:
  barista "Two cappuccinos and a croissant, please"
  barista --menu
  barista            (starts the interactive chat)
"#)]
pub struct Cli {
    /// Send one message and exit (starts the interactive chat when omitted)
    pub message: Option<String>,

    /// Print the menu and exit
    #[arg(long)]
    pub menu: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_one_shot_message() {
        let cli = Cli::try_parse_from(["barista", "-vv", "One latte please"]).unwrap();
        assert_eq!(cli.message.as_deref(), Some("One latte please"));
        assert_eq!(cli.verbose, 2);
        assert!(!cli.menu);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "barista",
            "--menu",
            "--quiet",
            "--config",
            "shop.toml",
            "--no-config",
        ])
        .unwrap();
        assert!(cli.message.is_none());
        assert!(cli.menu);
        assert!(cli.quiet);
        assert!(cli.no_config);
        assert_eq!(cli.config, Some(PathBuf::from("shop.toml")));
    }
}
