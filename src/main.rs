//! Svgscribe CLI
//!
//! Renders the demo document to stdout as a startup smoke test, then serves
//! it over HTTP. A writer failure during the smoke test is fatal.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use svgscribe::{serve, write_document, DocStyle, Path};

#[derive(Parser)]
#[command(name = "svgscribe")]
#[command(about = "Streaming SVG document writer and demo server")]
struct Cli {
    /// Document style file (TOML: width, height, css)
    #[arg(short, long)]
    style: Option<PathBuf>,

    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    listen: String,

    /// Render the demo document to stdout and exit
    #[arg(long)]
    once: bool,
}

fn main() {
    let cli = Cli::parse();

    let style = match &cli.style {
        Some(path) => match DocStyle::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading style '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => DocStyle::default(),
    };

    let paths = vec![Path::example()];

    // Smoke test: the demo document must render cleanly before we serve it.
    if let Err(e) = write_document(io::stdout().lock(), &paths, &style) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    if cli.once {
        return;
    }

    if let Err(e) = serve(&cli.listen, &paths, &style) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
