pub mod commands;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::domain::ItemId;

#[derive(Parser)]
#[command(name = "taproom")]
#[command(about = "Browse a paginated beer catalog", long_about = None)]
pub struct Cli {
    /// Catalog API base URL (overrides the config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Number of pages to load before the list is complete
    #[arg(long, global = true)]
    pub max_pages: Option<u32>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Fold command-line overrides into `config`.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(max_pages) = self.max_pages {
            config.api.max_pages = max_pages.max(1);
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load every page and list the items
    List {
        /// Print items as JSON instead of one line each
        #[arg(long)]
        json: bool,
    },
    /// Show the details of one item
    Show {
        /// Id of the item
        id: ItemId,
    },
    /// Launch the TUI
    Tui,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply_to_config() {
        let cli = Cli::parse_from(["taproom", "--base-url", "http://localhost:9000", "--max-pages", "2", "list"]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.api.base_url, "http://localhost:9000");
        assert_eq!(config.api.max_pages, 2);
        assert!(matches!(cli.command, Commands::List { json: false }));
    }

    #[test]
    fn test_show_takes_an_id() {
        let cli = Cli::parse_from(["taproom", "show", "7"]);
        assert!(matches!(cli.command, Commands::Show { id: 7 }));
    }

    #[test]
    fn test_zero_pages_is_clamped() {
        let cli = Cli::parse_from(["taproom", "--max-pages", "0", "tui"]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.api.max_pages, 1);
    }
}
