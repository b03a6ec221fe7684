//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "triplog")]
#[command(about = "Travel journal with date-aware places", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Evaluate as if today were this date (YYYY-MM-DD, today, +3, ...)
    #[arg(long, global = true, value_name = "DATE", allow_hyphen_values = true)]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new store
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Create a journal for a trip
    New {
        /// Journal title
        title: String,

        /// First day of the trip
        #[arg(long, allow_hyphen_values = true)]
        start: String,

        /// Last day of the trip (default: same as start)
        #[arg(long, allow_hyphen_values = true)]
        end: Option<String>,

        /// Mark the journal as public
        #[arg(long)]
        public: bool,
    },

    /// List journals with their travel status
    List {
        /// Only show journals with this status (future, ongoing, past)
        #[arg(long)]
        status: Option<String>,
    },

    /// Show which place statuses and dates a journal accepts
    Status {
        /// Journal id
        journal: String,
    },

    /// Add a place to a journal
    Add {
        /// Journal id
        journal: String,

        /// Place name
        name: String,

        /// visited or planned (default: first status the journal allows)
        #[arg(long)]
        status: Option<String>,

        /// Day of the visit, or first day of a multi-day stay
        #[arg(long, alias = "from", allow_hyphen_values = true)]
        date: Option<String>,

        /// Last day of a multi-day stay
        #[arg(long, alias = "to", allow_hyphen_values = true)]
        until: Option<String>,

        /// Rating from 1 to 5
        #[arg(long)]
        rating: Option<u8>,

        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// List the places of a journal
    Places {
        /// Journal id
        journal: String,
    },

    /// Flip a place between visited and planned
    Toggle {
        /// Journal id
        journal: String,

        /// Place number (from 'places') or name
        place: String,
    },

    /// Check whether a date is allowed for a place status
    Check {
        /// Journal id
        journal: String,

        /// Date to check
        #[arg(allow_hyphen_values = true)]
        date: String,

        /// visited or planned
        #[arg(long)]
        status: String,
    },

    /// Suggest default dates for a place status
    Suggest {
        /// Journal id
        journal: String,

        /// visited or planned
        #[arg(long)]
        status: String,
    },
}
