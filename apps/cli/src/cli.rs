use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "forkify")]
#[command(author, version, about = "Search, scale, bookmark and upload recipes")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: platform config dir/forkify.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search recipes and show one page of results
    Search {
        /// Search query
        query: String,

        /// Page to show
        #[arg(short, long, default_value = "1")]
        page: usize,
    },

    /// Show a recipe
    Recipe {
        /// Recipe id
        id: String,

        /// Rescale to this many servings
        #[arg(short, long, allow_negative_numbers = true)]
        servings: Option<i64>,

        /// Bookmark the recipe, or remove its bookmark
        #[arg(short, long)]
        toggle_bookmark: bool,
    },

    /// Show bookmarked recipes
    Bookmarks {
        /// Delete every bookmark first
        #[arg(long)]
        clear: bool,
    },

    /// Upload a new recipe
    Upload {
        /// Form field as name=value, repeatable
        /// (e.g. --field title=Soup --field ingredient-1=1,l,Water)
        #[arg(short, long = "field", value_name = "NAME=VALUE")]
        fields: Vec<String>,
    },

    /// Interactive session, one UI event per line
    Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_recipe_flags() {
        let cli = Cli::parse_from(["forkify", "recipe", "abc", "--servings", "6", "-t"]);
        match cli.command {
            Commands::Recipe {
                id,
                servings,
                toggle_bookmark,
            } => {
                assert_eq!(id, "abc");
                assert_eq!(servings, Some(6));
                assert!(toggle_bookmark);
            }
            _ => panic!("expected recipe"),
        }
    }

    #[test]
    fn test_parse_upload_fields() {
        let cli = Cli::parse_from([
            "forkify",
            "--config",
            "/tmp/f.toml",
            "upload",
            "--field",
            "title=Soup",
            "-f",
            "servings=2",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/f.toml")));
        match cli.command {
            Commands::Upload { fields } => assert_eq!(fields, vec!["title=Soup", "servings=2"]),
            _ => panic!("expected upload"),
        }
    }
}
