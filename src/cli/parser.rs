use clap::{Parser, Subcommand};

/// Command-line interface definition for smartcal
#[derive(Parser)]
#[command(
    name = "smartcal",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small calendar CLI: record prioritized events, browse their history, get reminded before they start",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Add a new event
    Add {
        /// Event name
        name: String,

        /// Event date (YYYY-MM-DD)
        #[arg(long, short = 'd')]
        date: String,

        /// Event time (HH:MM)
        #[arg(long, short = 't')]
        time: String,

        /// Priority, 1 (highest) to 5 (lowest)
        #[arg(long, short = 'p', default_value_t = 1)]
        priority: i64,
    },

    /// List events, most important first
    List,

    /// Show a single event and its history
    Show {
        /// Event id
        id: i64,
    },

    /// Print the event history, most recent first
    History,

    /// Delete an event and its history
    Del {
        /// Event id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Stay in the foreground and print reminders as they come due
    Watch,
}
