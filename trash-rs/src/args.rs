use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "trash", version)]
#[command(about = "Move files to the trash, and list, restore or delete them", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Use this trash directory instead of the per-user one
    #[arg(long, global = true, value_name = "DIR")]
    pub trash_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Move files or directories to the trash
    Put {
        /// Files or directories to trash
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Required for directories: move them with their contents
        #[arg(short, long)]
        recursive: bool,

        /// Output names while moving them to the trash
        #[arg(short, long)]
        verbose: bool,
    },

    /// List everything currently in the trash
    #[command(alias = "ls")]
    List,

    /// Move an item back to its original location
    Restore {
        /// Name of the item in the trash
        name: String,

        /// Replace whatever is at the original location
        #[arg(short, long)]
        overwrite: bool,

        /// Output names while restoring them
        #[arg(short, long)]
        verbose: bool,
    },

    /// Permanently delete an item from the trash
    #[command(alias = "rm")]
    Delete {
        /// Name of the item in the trash
        name: String,

        /// Required for directories: delete them with their contents
        #[arg(short, long)]
        recursive: bool,

        /// Output names while deleting them
        #[arg(short, long)]
        verbose: bool,
    },

    /// Permanently delete everything in the trash
    Empty {
        /// Ask for confirmation first
        #[arg(short, long)]
        confirm: bool,

        /// Output names while deleting them
        #[arg(short, long)]
        verbose: bool,
    },

    /// Report items whose content or record is missing
    Check,
}
