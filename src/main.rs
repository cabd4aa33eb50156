//! texweave CLI
//!
//! Usage:
//!   texweave [OPTIONS] [FILE]
//!
//! Options:
//!   -o, --output <FILE>    Write the rendered document to a file
//!   -p, --profile <FILE>   Renderer profile (TOML format)
//!   -r, --renderer <CMD>   Renderer command, overriding the profile
//!   --format <FORMAT>      Format selector passed to the renderer
//!   --image                Wrap fragments as inline HTML <img> tags
//!   --check                Validate the template without rendering
//!   --syntax               Show placeholder syntax reference
//!   -h, --help             Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use texweave::{
    parse, render_with_config, write_document, CommandRenderer, Profile, RenderConfig,
    RenderError, WrapMode,
};

#[derive(Parser)]
#[command(name = "texweave")]
#[command(about = "Render embedded markup fragments into a text template")]
struct Cli {
    /// Template file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Renderer profile (TOML format)
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Renderer command, overriding the profile
    #[arg(short, long)]
    renderer: Option<String>,

    /// Format selector passed to the renderer as its final argument
    #[arg(long)]
    format: Option<String>,

    /// Wrap each fragment as an inline HTML <img> with a base64 SVG payload
    #[arg(long)]
    image: bool,

    /// Parse the template and report placeholders without rendering
    #[arg(long)]
    check: bool,

    /// Show placeholder syntax reference
    #[arg(long)]
    syntax: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if cli.syntax {
        print_syntax();
        return;
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load renderer profile
    let profile = match &cli.profile {
        Some(path) => match Profile::from_file(path) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Error loading profile '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Profile::default(),
    };

    // Read template
    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    if cli.check {
        match parse(&source) {
            Ok(template) => {
                println!("{}: {} placeholder(s)", filename, template.placeholders().count());
                return;
            }
            Err(e) => {
                eprintln!("{}", e.format(&source, &filename));
                std::process::exit(1);
            }
        }
    }

    // CLI overrides replace the profile's invocation wholesale
    let renderer = match &cli.renderer {
        Some(command) => {
            let renderer = CommandRenderer::new(command.as_str());
            match cli.format.clone().or_else(|| profile.format.clone()) {
                Some(format) => renderer.with_format(format),
                None => renderer,
            }
        }
        None => {
            let renderer = CommandRenderer::from_profile(&profile);
            match &cli.format {
                Some(format) => renderer.with_format(format.as_str()),
                None => renderer,
            }
        }
    };

    let wrap = if cli.image { WrapMode::Image } else { profile.wrap };
    let config = RenderConfig::new().with_renderer(renderer).with_wrap(wrap);

    let document = match render_with_config(&source, &config) {
        Ok(document) => document,
        Err(RenderError::Template(e)) => {
            eprintln!("{}", e.format(&source, &filename));
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Written only after every placeholder rendered, staged and renamed
    // into place; a failed run leaves no partial output file behind
    match &cli.output {
        Some(path) => {
            if let Err(e) = write_document(path, &document) {
                eprintln!("Error writing '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => print!("{}", document),
    }
}

fn print_intro() {
    println!(
        r#"texweave - render embedded markup fragments into a text template

USAGE:
    texweave [OPTIONS] [FILE]
    echo 'template' | texweave

OPTIONS:
    -o, --output     Write the rendered document to a file
    -p, --profile    Renderer profile (TOML file)
    -r, --renderer   Renderer command, overriding the profile
    --format         Format selector passed to the renderer
    --image          Wrap fragments as inline HTML <img> tags
    --check          Validate the template without rendering
    --syntax         Show placeholder syntax reference
    -h, --help       Print help

QUICK START:
    echo '# {{{{\LaTeX}}}}clippings' | texweave -r katex -o README.md

Each {{{{ ... }}}} placeholder is piped through the renderer command and
replaced by its output; everything else is copied through unchanged.
Run --syntax for the placeholder syntax reference."#
    );
}

fn print_syntax() {
    println!(
        r#"TEXWEAVE TEMPLATE SYNTAX
========================

PLACEHOLDERS
------------
{{{{markup}}}}          Replaced by the renderer's output for `markup`
                    (contents forwarded verbatim, including whitespace)

LITERAL TEXT
------------
Everything outside {{{{ }}}} is copied through unchanged, single braces
and unmatched }}}} included:

    \frac{{1}}{{2}}     literal text
    a }}}} b          literal text
    {{{{\sqrt{{2}}}}}}    placeholder `\sqrt{{2` followed by a literal `}}`

The first }}}} after a {{{{ always closes the placeholder; there is no
nesting and no escape for a literal {{{{.

RENDERER PROFILE (TOML)
-----------------------
[renderer]
command = "latex2svg"      # program invoked once per placeholder
args = ["--standalone"]    # fixed arguments
format = "svg"             # optional, appended as the final argument
wrap = "image"             # "raw" (default) or "image"

The renderer receives the placeholder markup on stdin and writes the
rendered fragment to stdout. A non-zero exit aborts the whole run and
no output file is written."#
    );
}
