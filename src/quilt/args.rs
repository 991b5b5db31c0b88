use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "quilt")]
#[command(about = "A dated journal and todo notebook for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a notebook in the current directory
    Init,

    /// Ensure the journal entry for a date exists and open it in the editor
    #[command(alias = "j")]
    Journal {
        /// today, yesterday, tomorrow, or yyyy-mm-dd
        #[arg(default_value = "today")]
        date: String,
    },

    /// Print the journal entry for a date
    #[command(alias = "v")]
    View {
        /// today, yesterday, tomorrow, or yyyy-mm-dd
        #[arg(default_value = "today")]
        date: String,
    },

    /// List the journal entries between two dates (inclusive)
    Range {
        /// First day of the range
        start: String,

        /// Last day of the range
        end: String,
    },

    /// Print the file path of a journal entry
    Path {
        /// today, yesterday, tomorrow, or yyyy-mm-dd
        #[arg(default_value = "today")]
        date: String,
    },

    /// List the notebook's todo index
    Todos,
}
