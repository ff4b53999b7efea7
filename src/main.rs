use clap::{Parser, Subcommand};
use std::path::PathBuf;

use routekit::cli::{self, RouteRequest};
use routekit::{init_json_logging, init_logging, EntityId, SmoothingMode, BUILD_DATE, VERSION};

#[derive(Parser, Debug)]
#[command(name = "routekit")]
#[command(about = "Route connectors between diagram entities around obstacles")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Route between two entities of a scene file and print the points as JSON
    Route {
        /// Scene file (JSON)
        #[arg(short, long)]
        scene: PathBuf,

        /// Start entity id
        #[arg(long)]
        from: u64,

        /// End entity id
        #[arg(long)]
        to: u64,

        /// Configuration file (.json or .toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Smoothing mode override: none, rounded or catmull-rom
        #[arg(long)]
        smoothing: Option<SmoothingMode>,
    },

    /// Write the default configuration
    Config {
        /// Output file (.json or .toml)
        #[arg(short, long, default_value = "routekit.toml")]
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.json_logs {
        init_json_logging()?;
    } else {
        init_logging()?;
    }
    tracing::debug!("routekit {} built {}", VERSION, BUILD_DATE);

    match args.command {
        Commands::Route {
            scene,
            from,
            to,
            config,
            smoothing,
        } => {
            let request = RouteRequest {
                scene,
                from: EntityId(from),
                to: EntityId(to),
                config,
                smoothing,
            };
            let path = cli::route_scene_file(&request)?;
            println!("{}", cli::path_to_json(&path)?);
        }
        Commands::Config { output } => cli::write_default_config(&output)?,
    }

    Ok(())
}
