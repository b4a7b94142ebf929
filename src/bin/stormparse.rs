extern crate pest;
extern crate storm_lang;

use std::io::Read;

use clap::{Parser as CParser, ValueEnum};
use log::{error, info};
use storm_lang::{parse_query, Node};

#[derive(CParser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Storm query file to parse. Omit to read the query from stdin.
    #[arg(index = 1)]
    file: Option<std::path::PathBuf>,

    /// Print the lowered AST to stdout instead of just validating.
    #[arg(short, long)]
    print: bool,

    /// Log level.
    #[arg(value_enum, short, long, default_value_t = LogLevel::default())]
    verbosity: LogLevel,
}

#[derive(ValueEnum, Clone, Default, Debug)]
enum LogLevel {
    #[default]
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<&LogLevel> for log::Level {
    fn from(value: &LogLevel) -> Self {
        match value {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

fn main() {
    let args = Cli::parse();
    simple_logger::init_with_level(log::Level::from(&args.verbosity)).unwrap();

    let text = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .unwrap_or_else(|err| panic!("could not read file '{}': {err}", path.to_string_lossy())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .expect("could not read query from stdin");
            buf
        }
    };

    info!("parsing {} bytes", text.len());

    match parse_query(&text) {
        Ok(ast) => {
            if args.print {
                print_node(&ast, 0);
            }
        }
        Err(err) => {
            error!("{}", err);
            std::process::exit(-1);
        }
    }
}

fn print_node(node: &Node, depth: usize) {
    let indent = "  ".repeat(depth);
    println!("{}{:?} {:?}", indent, node.kind, node.value);
    for kid in &node.kids {
        print_node(kid, depth + 1);
    }
}
