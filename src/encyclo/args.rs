use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "encyclo")]
#[command(about = "A personal encyclopedia for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Account username
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    /// Account password
    #[arg(short, long, global = true)]
    pub password: Option<String>,

    /// Path to the encyclopedia database file
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new account
    Register,

    /// Create a new article
    #[command(alias = "n")]
    Create {
        /// Title of the article
        title: String,

        /// Article body text
        content: String,

        /// Comma-separated categories (defaults to "uncategorized")
        #[arg(short, long, default_value = "")]
        category: String,

        /// Attach an image file
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// List all articles
    #[command(alias = "ls")]
    List,

    /// Search articles by title and/or category
    Search {
        /// Title substring to match (case-insensitive)
        #[arg(short, long)]
        query: Option<String>,

        /// Category to filter by ("all" matches everything)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// View one or more articles in full
    #[command(alias = "v")]
    View {
        /// Article titles
        #[arg(required = true, num_args = 1..)]
        titles: Vec<String>,
    },

    /// Edit an article
    #[command(alias = "e")]
    Edit {
        /// Title of the article to edit
        title: String,

        /// New title (defaults to the current one)
        #[arg(long = "title", value_name = "NEW_TITLE")]
        new_title: Option<String>,

        /// New comma-separated categories (defaults to the current ones)
        #[arg(short, long)]
        category: Option<String>,

        /// New body text (defaults to the current one)
        #[arg(long)]
        content: Option<String>,

        /// Replace the attached image
        #[arg(long, conflicts_with = "remove_image")]
        image: Option<PathBuf>,

        /// Remove the attached image
        #[arg(long)]
        remove_image: bool,
    },

    /// Delete one or more articles
    #[command(alias = "rm")]
    Delete {
        /// Article titles
        #[arg(required = true, num_args = 1..)]
        titles: Vec<String>,
    },

    /// Show article statistics
    Stats,

    /// List every category in use
    Categories,
}
