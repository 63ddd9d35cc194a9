use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "itemlist")]
#[command(about = "A small list of titled notes with selection, search, and backups", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the item list file (or set ITEMLIST_FILE env var)
    #[arg(long, value_name = "FILE", env = "ITEMLIST_FILE", global = true)]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add an item to the end of the list
    Add {
        title: String,
        #[arg(long)]
        content: Option<String>,
        /// Add even if an item with the same title already exists
        #[arg(long)]
        force: bool,
    },
    /// List all items in order
    List,
    /// Get a specific item
    Get {
        #[arg(long)]
        id: Uuid,
    },
    /// Flip the selection of an item
    Toggle {
        #[arg(long)]
        id: Uuid,
    },
    /// Select every item (or clear every selection with --deselect)
    SelectAll {
        #[arg(long)]
        deselect: bool,
    },
    /// Delete all selected items
    DeleteSelected,
    /// Delete every item
    Clear,
    /// Edit an item's title or content
    Update {
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    /// Print a web search URL for free text or an item's title
    Search {
        query: Option<String>,
        #[arg(long, conflicts_with = "query")]
        id: Option<Uuid>,
    },
    /// Write a JSON backup of the list
    Export {
        /// Destination file (defaults to the configured backup path)
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Write to the temporary staging location instead
        #[arg(long, conflicts_with = "output")]
        staging: bool,
    },
    /// Replace the list with the contents of a backup
    Import {
        #[arg(value_name = "BACKUP")]
        path: PathBuf,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
