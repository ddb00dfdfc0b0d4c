//! Block Templater CLI
//!
//! Usage:
//!   block-templater [OPTIONS] [NAME]
//!
//! Options:
//!   -f, --file <FILE>           Build a template file instead of a named template
//!   -a, --at <X> <Y> <Z>        Anchor position [default: 0 64 0]
//!   -d, --facing <DIRECTION>    north, south, east or west [default: north]
//!   -r, --sign-rotation <N>     Derive the facing from a sign rotation (0-15)
//!   -l, --library <FILE>        Template library manifest (TOML format)
//!   --list                      List available template names
//!   --no-slash                  Print commands without a leading '/'
//!   -v, --verbose               Increase log output (repeatable)
//!   -h, --help                  Print help

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use block_templater::{
    parse, placement, BlockPos, CommandConfig, CommandWorld, Direction, TemplateLibrary,
    Templater,
};

#[derive(Parser)]
#[command(name = "block-templater")]
#[command(about = "Build layered text templates as block placement commands")]
struct Cli {
    /// Template name (unknown names fall back to the library default)
    name: Option<String>,

    /// Build a template file instead of a named template
    #[arg(short, long, conflicts_with = "name")]
    file: Option<PathBuf>,

    /// Anchor position
    #[arg(
        short,
        long,
        num_args = 3,
        value_names = ["X", "Y", "Z"],
        allow_negative_numbers = true,
        default_values_t = [0, 64, 0]
    )]
    at: Vec<i32>,

    /// Facing: north, south, east or west
    #[arg(short = 'd', long, default_value = "north")]
    facing: Direction,

    /// Derive the facing from a sign rotation value (0-15)
    #[arg(short = 'r', long, conflicts_with = "facing")]
    sign_rotation: Option<u8>,

    /// Template library manifest (TOML format)
    #[arg(short, long)]
    library: Option<PathBuf>,

    /// List available template names
    #[arg(long)]
    list: bool,

    /// Print commands without a leading '/'
    #[arg(long)]
    no_slash: bool,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let library = match &cli.library {
        Some(path) => match TemplateLibrary::from_file(path) {
            Ok(library) => library,
            Err(e) => {
                eprintln!("Error loading library '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => TemplateLibrary::builtin(),
    };

    if cli.list {
        for name in library.names() {
            let marker = if name == library.fallback() { " (default)" } else { "" };
            println!("{}{}", name, marker);
        }
        return ExitCode::SUCCESS;
    }

    let position = BlockPos::new(cli.at[0], cli.at[1], cli.at[2]);
    let direction = cli
        .sign_rotation
        .map(Direction::from_sign_rotation)
        .unwrap_or(cli.facing);
    let mut world =
        CommandWorld::with_config(CommandConfig::new().with_slash_prefix(!cli.no_slash));
    let templater = Templater::new().with_library(library);

    if let Some(path) = &cli.file {
        let source = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        };
        let template = match parse(&source) {
            Ok(template) => template,
            Err(errors) => {
                let filename = path.display().to_string();
                for error in &errors {
                    eprintln!("{}", error.format(&source, &filename));
                }
                return ExitCode::FAILURE;
            }
        };
        placement::fill_template(
            &template,
            position,
            direction,
            &templater.placement,
            &mut world,
        );
    } else {
        let name = cli
            .name
            .as_deref()
            .unwrap_or_else(|| templater.library.fallback());
        if let Err(e) = templater.fill(name, position, direction, &mut world) {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    }

    println!("{}", world.render());
    ExitCode::SUCCESS
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = format!("block_templater={}", level);
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}
