mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use jam_routes::JamRoutesOptions;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "jam-routes")]
#[command(version, about = "Compile file-system routes into a React Router route config", long_about = None)]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile routes and print the configuration as JSON
    Build {
        #[command(flatten)]
        input: InputArgs,

        /// Write the configuration to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Compile routes and print them as a tree
    Tree {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Recompile whenever a route file changes
    #[cfg(feature = "watch")]
    Watch {
        #[command(flatten)]
        input: InputArgs,
    },
}

/// Options shared by every command; flags override the config file
#[derive(Args)]
struct InputArgs {
    /// Config file (default: ./jam-routes.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// App root directory
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Routes directory, relative to the root
    #[arg(long)]
    routes: Option<String>,

    /// Glob pattern of entries to ignore (repeatable)
    #[arg(short, long = "ignore")]
    ignore: Vec<String>,
}

impl InputArgs {
    fn into_options(self) -> Result<JamRoutesOptions> {
        let mut options = match &self.config {
            Some(path) => JamRoutesOptions::load(path)?,
            None => JamRoutesOptions::load_default()?,
        };

        if let Some(root) = self.root {
            options = options.with_root_directory(root);
        }
        if let Some(routes) = self.routes {
            options = options.with_routes_directory(routes);
        }
        if !self.ignore.is_empty() {
            options.ignored_file_patterns.extend(self.ignore);
        }

        Ok(options)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::WARN
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Build { input, out, pretty } => {
            commands::build::execute(input.into_options()?, out, pretty).await?;
        }
        Commands::Tree { input } => {
            commands::tree::execute(input.into_options()?).await?;
        }
        #[cfg(feature = "watch")]
        Commands::Watch { input } => {
            commands::watch::execute(input.into_options()?).await?;
        }
    }

    Ok(())
}
