use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_ROOT;

#[derive(Parser, Debug)]
#[command(name = "pronote")]
#[command(version, about = "A small note store with local JSON persistence")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Storage directory holding notes.json
    #[arg(long, global = true, default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new note
    New {
        /// Note title
        title: String,

        /// Note content
        #[arg(long, short = 'c', conflicts_with = "stdin")]
        content: Option<String>,

        /// Read content from stdin
        #[arg(long)]
        stdin: bool,

        /// Tint color, either a name (purple, teal, red, orange, blue) or "#RRGGBB"
        #[arg(long)]
        color: Option<String>,

        /// Mark the note as favorite
        #[arg(long)]
        favorite: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List notes, most recently modified first
    List {
        /// Only show favorites
        #[arg(long, short = 'f')]
        favorites: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single note
    Show {
        /// List position (like "1") or UUID prefix
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit an existing note
    Edit {
        /// List position (like "1") or UUID prefix
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New content
        #[arg(long, short = 'c', conflicts_with = "stdin")]
        content: Option<String>,

        /// Read new content from stdin
        #[arg(long)]
        stdin: bool,

        /// New tint color
        #[arg(long)]
        color: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Toggle the favorite flag of a note
    Favorite {
        /// List position (like "1") or UUID prefix
        id: String,
    },

    /// Delete a note
    Delete {
        /// List position (like "1") or UUID prefix
        id: String,

        /// Skip confirmation
        #[arg(long)]
        force: bool,
    },

    /// Search titles and contents ("is:favorite" restricts to favorites)
    Search {
        /// Search query
        query: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the available tint colors
    Colors,
}
