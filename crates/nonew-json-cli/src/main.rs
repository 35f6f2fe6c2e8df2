//! `nonew` CLI — format, check, and convert nonew-json documents.
//!
//! ## Usage
//!
//! ```sh
//! # Re-serialize a document (stdin → stdout)
//! echo '{"name":"John","age":25}' | nonew format
//!
//! # Pretty-print from file to file
//! nonew format --pretty -i family.nonew -o family.pretty.nonew
//!
//! # Validate only; exits non-zero with line/column on failure
//! nonew check -i family.nonew
//!
//! # Convert to and from standard JSON
//! nonew to-json -i family.nonew
//! nonew from-json -i family.json
//!
//! # Walk through the object API
//! nonew demo
//! ```
//!
//! Logging goes to stderr; set `RUST_LOG` or pass `-v` for debug output.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nonew_json::{Object, ParserConfig};
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "nonew",
    version,
    about = "Format, check, and convert nonew-json documents"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a document and write it back out in canonical form
    Format {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// One entry per line with two-space indentation
        #[arg(long)]
        pretty: bool,
        /// Deepest object nesting accepted
        #[arg(long, default_value_t = nonew_json::parser::DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },
    /// Validate a document without producing output
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Deepest object nesting accepted
        #[arg(long, default_value_t = nonew_json::parser::DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },
    /// Convert a document to pretty-printed standard JSON
    ToJson {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Convert standard JSON into a document
    FromJson {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// One entry per line with two-space indentation
        #[arg(long)]
        pretty: bool,
    },
    /// Build, nest, serialize, and re-parse the family example
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Format {
            input,
            output,
            pretty,
            max_depth,
        } => {
            let text = read_input(input.as_deref())?;
            let config = ParserConfig::default().with_max_depth(max_depth);
            let object = Object::parse_with(&text, &config).context("Failed to parse document")?;
            write_output(output.as_deref(), &render(&object, pretty))?;
        }
        Commands::Check { input, max_depth } => {
            let text = read_input(input.as_deref())?;
            let config = ParserConfig::default().with_max_depth(max_depth);
            let object = Object::parse_with(&text, &config).context("Invalid document")?;
            debug!(entries = object.len(), "document is valid");
            println!("ok");
        }
        Commands::ToJson { input, output } => {
            let text = read_input(input.as_deref())?;
            let object = Object::parse(&text).context("Failed to parse document")?;
            let json = serde_json::to_string_pretty(&object)?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::FromJson {
            input,
            output,
            pretty,
        } => {
            let json = read_input(input.as_deref())?;
            let object = Object::from_json_str(&json).context("Failed to convert JSON")?;
            write_output(output.as_deref(), &render(&object, pretty))?;
        }
        Commands::Demo => run_demo()?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn render(object: &Object, pretty: bool) -> String {
    let mut text = if pretty {
        nonew_json::serialize_pretty(object)
    } else {
        nonew_json::serialize(object)
    };
    text.push('\n');
    text
}

/// The walkthrough: typed get, nesting, serialize/parse, vectors, and the
/// key and emptiness queries.
fn run_demo() -> Result<()> {
    let mut john = Object::new();
    john.add("name", "John");
    john.add("age", 25);
    println!("{}", john.get::<String>("name")?);
    println!("{}", john.get::<i64>("age")?);

    let mut johnny = Object::new();
    johnny.add("name", "Johnny");
    johnny.add("age", 3);

    let mut baby = Object::new();
    baby.add("name", "Baby");
    baby.add("age", 1);
    baby.add("weight", 10.5);

    johnny.add("grand son", baby);
    johnny.add("height", 0.75);
    john.add("son", johnny);
    john.add("height", 1.75);

    println!("{}", john.get::<Object>("son")?.get::<String>("name")?);
    println!("{john}");

    let parsed = Object::parse(&john.to_string()).context("Failed to re-parse demo object")?;
    println!("PARSED");
    println!("{parsed}");
    println!("{}", parsed.get::<Object>("son")?.get::<String>("name")?);

    let mut family = parsed;
    family.add("lucky", vec![1, 2, 3]);
    family.add("doubles", vec![12.3, 22.3, 3.0]);
    family
        .get_mut::<Object>("son")?
        .add("toys", vec!["car", "ball", "doll"]);
    family.add("empty", Vec::<String>::new());
    println!("{family}");

    let reparsed = Object::parse(&family.to_string()).context("Failed to re-parse family")?;
    println!("{reparsed}");

    println!("son is a key: {}", reparsed.has_key("son"));
    println!("daughter is a key: {}", reparsed.has_key("daughter"));
    println!("empty is empty: {}", reparsed.is_empty_vector("empty")?);
    println!("doubles is empty: {}", reparsed.is_empty_vector("doubles")?);
    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
