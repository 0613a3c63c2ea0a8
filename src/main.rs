//! kvforge CLI
//!
//! Usage:
//!   kvforge [OPTIONS] [FILE]
//!
//! Options:
//!   -o, --output <FILE>   Write the compiled KV markup to FILE (stdout if omitted)
//!   -c, --canvas <WxH>    Reference canvas size for pos_hint projection
//!   -h, --help            Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use kvforge::{compile_with_config, CompileConfig, Document, WidgetRegistry};

#[derive(Parser)]
#[command(name = "kvforge")]
#[command(about = "Compile an editor layout file to Kivy KV markup")]
struct Cli {
    /// Layout file in TOML format (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Output file for the compiled markup (stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Reference canvas size as WIDTHxHEIGHT, e.g. 800x600
    #[arg(short, long)]
    canvas: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let config = match &cli.canvas {
        Some(spec) => match parse_canvas(spec) {
            Some((w, h)) => CompileConfig::new().with_canvas(w, h),
            None => {
                eprintln!("Error: invalid canvas size '{}', expected WIDTHxHEIGHT", spec);
                std::process::exit(1);
            }
        },
        None => CompileConfig::default(),
    };

    // Read the layout
    let document = match &cli.input {
        Some(path) => match Document::from_file(path) {
            Ok(doc) => doc,
            Err(e) => {
                eprintln!("Error reading layout '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading from stdin: {}", e);
                std::process::exit(1);
            }
            match Document::from_toml(&buffer) {
                Ok(doc) => doc,
                Err(e) => {
                    eprintln!("Error parsing layout: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let registry = WidgetRegistry::with_defaults();
    let kv = match compile_with_config(&document, &registry, &config) {
        Ok(kv) => kv,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &kv) {
                eprintln!("Error writing '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => println!("{}", kv),
    }
}

/// Parse a `WIDTHxHEIGHT` canvas spec
fn parse_canvas(spec: &str) -> Option<(f64, f64)> {
    let (w, h) = spec.split_once(['x', 'X'])?;
    let w: f64 = w.trim().parse().ok()?;
    let h: f64 = h.trim().parse().ok()?;
    if w > 0.0 && h > 0.0 {
        Some((w, h))
    } else {
        None
    }
}

fn print_intro() {
    println!(
        r#"kvforge - Compile an editor layout file to Kivy KV markup

USAGE:
    kvforge [OPTIONS] [FILE]
    cat layout.toml | kvforge

OPTIONS:
    -o, --output <FILE>   Write the compiled markup to FILE (stdout if omitted)
    -c, --canvas <WxH>    Reference canvas size for pos_hint projection
    -h, --help            Print help

LAYOUT FORMAT:
    [[widgets]]
    id = "widget_1"
    type = "button"
    x = 100
    y = 200
"#
    );
}
