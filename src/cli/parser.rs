use crate::core::theme::HslStyle;
use crate::export::OutputFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rdelivery
#[derive(Parser)]
#[command(
    name = "rdelivery",
    version = env!("CARGO_PKG_VERSION"),
    about = "Delivery time-slot planner: turn store working hours into orderable delivery windows",
    long_about = None
)]
pub struct Cli {
    /// Override the store settings file (JSON, as served by /api/settings)
    #[arg(global = true, long = "settings", value_name = "FILE")]
    pub settings: Option<String>,

    /// Override the store timezone (IANA name, e.g. Asia/Jerusalem)
    #[arg(global = true, long = "tz", value_name = "ZONE")]
    pub tz: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and a sample store settings file
    Init,

    /// Manage the configuration file (view or edit)
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

    /// List the delivery slots for a date
    Slots {
        /// Delivery date (YYYY-MM-DD, `today` or `tomorrow`)
        date: Option<String>,

        /// Reference time (RFC 3339, or `YYYY-MM-DD HH:MM` in the store timezone)
        #[arg(long, value_name = "TIME")]
        now: Option<String>,

        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Write the result to a file instead of stdout
        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// List the dates a delivery can be booked for
    Dates {
        #[arg(long, value_name = "TIME")]
        now: Option<String>,

        /// Days ahead to offer (defaults to maxDeliveryTimeDays)
        #[arg(long, value_name = "N")]
        days: Option<u32>,

        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show the weekly working hours
    Hours {
        /// Print schema.org openingHours entries instead of the summary
        #[arg(long)]
        schema: bool,
    },

    /// Convert a stored theme into CSS custom properties
    Theme {
        /// Theme JSON file
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_enum, default_value = "css")]
        style: HslStyle,

        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Convert a color between hex and HSL
    Color {
        /// `#rrggbb`, `#rgb`, `hsl(h, s%, l%)` or `h s% l%`
        value: String,
    },
}
