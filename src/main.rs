//! snipsight - preview a code snippet in the terminal
//!
//! Reads a snippet from a file or stdin, detects its language unless one
//! is given, and prints it highlighted.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use tracing::Level;
use tracing_subscriber::EnvFilter;

use snipsight::config::Config;
use snipsight::error::{Error, Result};
use snipsight::preview::highlight_snippet;
use snipsight::render::{RenderOptions, Renderer};
use snipsight::syntax::detect_language_scored;

/// Parsed command line
#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    language: Option<String>,
    detect_only: bool,
    line_numbers: bool,
    no_color: bool,
    path: Option<String>,
    help: bool,
    version: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = parse_args(env::args().skip(1))?;

    if args.help {
        print_usage();
        return Ok(());
    }
    if args.version {
        print_version();
        return Ok(());
    }

    let code = read_input(args.path.as_deref())?;

    if args.detect_only {
        let detection = detect_language_scored(&code);
        let how = if detection.fallback { " (fallback)" } else { "" };
        println!("{} {:.1}{}", detection.language, detection.score(), how);
        return Ok(());
    }

    let mut config = Config::load()?;
    if args.line_numbers {
        config.show_line_numbers = true;
    }
    if args.no_color {
        config.color = false;
    }

    let snippet = highlight_snippet(&code, args.language.as_deref());
    tracing::info!(language = %snippet.language, lines = snippet.line_count(), "rendering");

    let options = RenderOptions {
        line_numbers: config.show_line_numbers,
        tab_width: config.tab_width,
        max_width: config.max_width,
    };
    let mut renderer = Renderer::new(io::stdout().lock(), config.palette()?, options);
    renderer.render(&snippet)?;

    Ok(())
}

fn parse_args<I: Iterator<Item = String>>(mut argv: I) -> Result<Args> {
    let mut args = Args::default();

    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--help" | "-h" => args.help = true,
            "--version" | "-V" => args.version = true,
            "--detect" | "-d" => args.detect_only = true,
            "--line-numbers" | "-n" => args.line_numbers = true,
            "--no-color" => args.no_color = true,
            "--lang" | "-l" => {
                let language = argv
                    .next()
                    .ok_or_else(|| Error::Usage(format!("{} needs a language name", arg)))?;
                args.language = Some(language);
            }
            "-" => args.path = None,
            other if other.starts_with('-') => {
                return Err(Error::Usage(format!("unknown option: {}", other)));
            }
            path => {
                if args.path.is_some() {
                    return Err(Error::Usage("only one input file may be given".to_string()));
                }
                args.path = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut code = String::new();
            io::stdin().read_to_string(&mut code)?;
            Ok(code)
        }
    }
}

fn print_usage() {
    println!("snipsight {} - preview code snippets in the terminal", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: snipsight [OPTIONS] [FILE]");
    println!();
    println!("Reads FILE, or stdin when FILE is omitted or '-'.");
    println!();
    println!("Options:");
    println!("  -l, --lang LANG      Highlight as LANG instead of detecting");
    println!("  -d, --detect         Print the detected language and its score");
    println!("  -n, --line-numbers   Show line numbers");
    println!("      --no-color       Disable colors");
    println!("  -h, --help           Show this help message");
    println!("  -V, --version        Show version information");
    println!();
    println!("Settings are read from ~/.snipsight.toml; RUST_LOG controls logging.");
}

fn print_version() {
    println!("snipsight {}", env!("CARGO_PKG_VERSION"));
}
