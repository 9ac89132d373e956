//! Cornice studio: preview corner decorations from the command line.

mod args;
mod commands;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use cornice_engine::logging::{init_logging, LoggingConfig};

use args::{BorderArg, SizeArg};

/// Corner decoration previewer
#[derive(Parser)]
#[command(name = "cornice-studio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log at debug level (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the normalized request and its border profile
    Profile {
        /// Option string, e.g. "bite 12px top cc:#336699"
        options: String,
    },

    /// Render a decorated box to a PNG file
    Render {
        /// Option string, e.g. "round 10px tl bl"
        options: String,

        /// Output PNG path
        #[arg(short, long)]
        out: String,

        /// Box size as WIDTHxHEIGHT
        #[arg(long, default_value = "160x96")]
        size: SizeArg,

        /// Uniform padding in pixels
        #[arg(long, default_value_t = 0)]
        padding: i32,

        /// Parent background shown around the box
        #[arg(long, default_value = "#ffffff", value_parser = args::parse_color)]
        parent: cornice_engine::paint::Color,

        /// Box background
        #[arg(long, default_value = "#3366cc", value_parser = args::parse_color)]
        background: cornice_engine::paint::Color,

        /// Box border as WIDTH:#COLOR
        #[arg(long)]
        border: Option<BorderArg>,

        /// Treat the box height as fixed (pins the bottom band)
        #[arg(long)]
        fixed_height: bool,

        /// Parent background margin around the box
        #[arg(long, default_value_t = 8)]
        margin: u32,
    },

    /// Decode a location record (file path or "-" for stdin) and print the map URL
    Map {
        input: String,

        /// Embed base URL
        #[arg(long)]
        embed: Option<String>,
    },

    /// Print the lookup URL for a query
    LookupUrl {
        /// Service base URL
        #[arg(long)]
        base: String,

        /// IP or hostname; empty looks up the caller
        #[arg(default_value = "")]
        query: String,
    },

    /// Print the coordinate submission URL
    SubmitUrl {
        /// Service base URL
        #[arg(long)]
        base: String,

        #[arg(allow_negative_numbers = true)]
        latitude: f64,

        #[arg(allow_negative_numbers = true)]
        longitude: f64,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = if cli.verbose {
        LoggingConfig::with_filter("debug")
    } else {
        LoggingConfig::default()
    };
    init_logging(config);

    let result = match cli.command {
        Commands::Profile { options } => commands::profile(&options),
        Commands::Render {
            options,
            out,
            size,
            padding,
            parent,
            background,
            border,
            fixed_height,
            margin,
        } => commands::render(&commands::RenderArgs {
            options: &options,
            out: &out,
            size,
            padding,
            parent,
            background,
            border,
            fixed_height,
            margin,
        }),
        Commands::Map { input, embed } => commands::map(&input, embed.as_deref()),
        Commands::LookupUrl { base, query } => commands::lookup_url(&base, &query),
        Commands::SubmitUrl { base, latitude, longitude } => {
            commands::submit_url(&base, latitude, longitude)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
