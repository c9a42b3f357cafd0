use clap::{Arg, ArgAction, Command};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use veralign::config::{self, Config};
use veralign::{fallback, formatting, parsing};

mod problem;

use problem::{concise_loading_error, concise_tree_error};

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("veralign")
        .version(VERSION)
        .propagate_version(true)
        .about("Column-aligning formatter for Verilog and SystemVerilog.")
        .disable_help_subcommand(true)
        .subcommand(
            Command::new("format")
                .about("Format the given file from its syntax tree, falling back to line alignment")
                .arg(
                    Arg::new("tree")
                        .long("tree")
                        .help("The syntax tree JSON for the file. Defaults to <filename>.tree.json next to the source."),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .help("A JSON file of column options. Missing options keep their defaults."),
                )
                .arg(
                    Arg::new("write")
                        .short('w')
                        .long("write")
                        .action(ArgAction::SetTrue)
                        .help("Rewrite the file in place instead of printing to standard output."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The Verilog source file you want to format."),
                ),
        )
        .subcommand(
            Command::new("align")
                .about("Align declarations line-by-line, without a syntax tree")
                .arg(
                    Arg::new("config")
                        .long("config")
                        .help("A JSON file of column options. Missing options keep their defaults."),
                )
                .arg(
                    Arg::new("write")
                        .short('w')
                        .long("write")
                        .action(ArgAction::SetTrue)
                        .help("Rewrite the file in place instead of printing to standard output."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The Verilog source file you want to align."),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("format", submatches)) => {
            if let Some(filename) = submatches.get_one::<String>("filename") {
                let config = resolve_config(submatches.get_one::<String>("config"));
                run_format(
                    Path::new(filename),
                    submatches
                        .get_one::<String>("tree")
                        .map(PathBuf::from),
                    &config,
                    submatches.get_flag("write"),
                );
            }
        }
        Some(("align", submatches)) => {
            if let Some(filename) = submatches.get_one::<String>("filename") {
                let config = resolve_config(submatches.get_one::<String>("config"));
                run_align(
                    Path::new(filename),
                    &config,
                    submatches.get_flag("write"),
                );
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: veralign [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn resolve_config(path: Option<&String>) -> Config {
    match path {
        Some(path) => match config::load(Path::new(path)) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("{}", concise_loading_error(&error));
                std::process::exit(1);
            }
        },
        None => Config::default(),
    }
}

fn run_format(filename: &Path, tree: Option<PathBuf>, config: &Config, write: bool) {
    let content = match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", concise_loading_error(&error));
            std::process::exit(1);
        }
    };

    let tree_file = tree.unwrap_or_else(|| parsing::tree_path(filename));
    debug!("Looking for syntax tree at {}", tree_file.display());

    let output = match parsing::load_tree(&tree_file) {
        Ok(root) => {
            info!("Formatting {} from its syntax tree", filename.display());
            formatting::format(&root, config)
        }
        Err(error) => {
            // degraded mode: align what the patterns recognize, leave the
            // rest untouched
            eprintln!("{}", concise_tree_error(&error));
            info!("Falling back to line alignment for {}", filename.display());
            fallback::align(&content, config)
        }
    };

    emit(filename, output, write);
}

fn run_align(filename: &Path, config: &Config, write: bool) {
    let content = match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", concise_loading_error(&error));
            std::process::exit(1);
        }
    };

    info!("Aligning {} line-by-line", filename.display());
    let output = fallback::align(&content, config);
    emit(filename, output, write);
}

fn emit(filename: &Path, output: String, write: bool) {
    if write {
        if let Err(error) = std::fs::write(filename, output) {
            eprintln!("error: {}: {}", filename.display(), error);
            std::process::exit(1);
        }
    } else {
        print!("{}", output);
    }
}
