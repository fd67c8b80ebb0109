use clap::{Args, Parser, Subcommand};

use crate::games::{GameForm, GamePatch};

#[derive(Parser)]
#[command(name = "games-admin")]
#[command(author, version, about = "Admin table for game records served over REST - GUI-first application", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the configured backend base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Override the configured node segment
    #[arg(long, global = true)]
    pub node: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all game records
    List,

    /// Create a game record
    Add(AddArgs),

    /// Update fields of an existing game record
    Update {
        /// App ID of the record to update
        app_id: String,

        #[command(flatten)]
        fields: UpdateArgs,
    },

    /// Delete a game record
    Delete {
        /// App ID of the record to delete
        app_id: String,
    },

    /// Show status and configuration
    Status,

    /// Launch the GUI
    Gui,
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(long)]
    pub app_id: String,
    #[arg(long)]
    pub name: String,
    /// Release date as YYYY-MM-DD
    #[arg(long)]
    pub release_date: String,
    #[arg(long)]
    pub price: String,
    #[arg(long)]
    pub developers: String,
    #[arg(long)]
    pub publishers: String,
}

impl AddArgs {
    /// Same checks as the GUI form
    pub fn into_form(self) -> GameForm {
        GameForm {
            app_id: self.app_id,
            name: self.name,
            release_date: self.release_date,
            price: self.price,
            developers: self.developers,
            publishers: self.publishers,
        }
    }
}

#[derive(Args)]
pub struct UpdateArgs {
    #[arg(long)]
    pub name: Option<String>,
    /// Release date as YYYY-MM-DD
    #[arg(long)]
    pub release_date: Option<String>,
    #[arg(long)]
    pub price: Option<f64>,
    #[arg(long)]
    pub developers: Option<String>,
    #[arg(long)]
    pub publishers: Option<String>,
}

impl From<UpdateArgs> for GamePatch {
    fn from(args: UpdateArgs) -> Self {
        GamePatch {
            name: args.name,
            release_date: args.release_date,
            price: args.price,
            developers: args.developers,
            publishers: args.publishers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_means_gui() {
        let cli = Cli::parse_from(["games-admin"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_update_builds_partial_patch() {
        let cli = Cli::parse_from(["games-admin", "update", "1", "--price", "4.99", "--node", "node2"]);
        assert_eq!(cli.node.as_deref(), Some("node2"));

        match cli.command {
            Some(Commands::Update { app_id, fields }) => {
                assert_eq!(app_id, "1");
                let patch = GamePatch::from(fields);
                assert_eq!(patch.price, Some(4.99));
                assert_eq!(patch.name, None);
            }
            _ => panic!("expected update command"),
        }
    }

    #[test]
    fn test_update_with_bad_date_or_blank_name_is_invalid() {
        let cli = Cli::parse_from([
            "games-admin",
            "update",
            "1",
            "--release-date",
            "01/01/2020",
            "--name",
            "",
        ]);

        match cli.command {
            Some(Commands::Update { fields, .. }) => {
                let errors = GamePatch::from(fields).validate().unwrap_err();
                assert_eq!(errors.len(), 2);
            }
            _ => panic!("expected update command"),
        }
    }

    #[test]
    fn test_add_requires_every_field() {
        let result = Cli::try_parse_from(["games-admin", "add", "--app-id", "1", "--name", "A"]);
        assert!(result.is_err());
    }
}
