use std::error::Error;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use blockglyph_grid::GridConfig;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "blockglyph", version, about = "Block alphabet and text grid tools")]
struct Args {
    /// TOML file with grid options (separator, padding, unknown-character policy)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every block type with its display character, colour and flags
    Palette {
        /// Emit a TOML document instead of a table
        #[arg(long)]
        toml: bool,
    },
    /// Resolve each character of CHARS to a block type
    Lookup { chars: String },
    /// Parse a grid file and print its size and block counts
    Check { path: PathBuf },
    /// Parse a grid file and print it back in normalized form
    Render { path: PathBuf },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    if let Err(e) = run(args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let cfg = match &args.config {
        Some(path) => {
            let cfg = GridConfig::from_path(path)
                .map_err(|e| format!("config {}: {}", path.display(), e))?;
            log::debug!("loaded {} -> {:?}", path.display(), cfg);
            cfg
        }
        None => GridConfig::default(),
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.cmd {
        Command::Palette { toml: false } => commands::palette(&mut out),
        Command::Palette { toml: true } => commands::palette_toml(&mut out),
        Command::Lookup { chars } => commands::lookup(&chars, &mut out),
        Command::Check { path } => {
            let text = read_grid(&path)?;
            commands::check(&text, &cfg, &mut out).map(|_| ())
        }
        Command::Render { path } => {
            let text = read_grid(&path)?;
            commands::render(&text, &cfg, &mut out)
        }
    }
}

fn read_grid(path: &Path) -> Result<String, Box<dyn Error>> {
    log::info!("reading {}", path.display());
    fs::read_to_string(path).map_err(|e| format!("{}: {}", path.display(), e).into())
}
