use clap::{Arg, ArgAction, ArgMatches, Command};
use owo_colors::OwoColorize;
use std::path::Path;
use tracing::{debug, Level};

use lmy::parsing;

mod problem;

#[derive(Eq, Debug, PartialEq)]
enum Output {
    Native,
    Json,
}

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("lmy")
        .version(VERSION)
        .propagate_version(true)
        .about("The lmy workspace description language.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit debugging output on standard error."),
        )
        .subcommand(
            Command::new("check")
                .about("Syntax-check the given file")
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the workspace description you want to check."),
                ),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse the given file and print the resulting syntax tree")
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .action(ArgAction::Set)
                        .value_parser(["native", "json"])
                        .default_value("native")
                        .help("Which kind of representation to print the tree in."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the workspace description you want to parse."),
                ),
        )
        .get_matches();

    let level = if matches.get_flag("debug") {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match matches.subcommand() {
        Some(("check", submatches)) => {
            let filename = required_filename(submatches);
            debug!(?filename);

            let content = load_or_exit(filename);

            match parsing::parse(&content) {
                Ok(document) => {
                    debug!(
                        "Syntax check of {} passed with {} definitions",
                        filename.display(),
                        document.len()
                    );
                }
                Err(error) => {
                    eprintln!(
                        "{}",
                        problem::full_parsing_error(&error, filename, &content)
                    );
                    std::process::exit(1);
                }
            }
        }
        Some(("parse", submatches)) => {
            let output = match submatches
                .get_one::<String>("output")
                .map(String::as_str)
            {
                Some("json") => Output::Json,
                _ => Output::Native,
            };
            debug!(?output);

            let filename = required_filename(submatches);
            debug!(?filename);

            let content = load_or_exit(filename);

            let document = match parsing::parse(&content) {
                Ok(document) => document,
                Err(error) => {
                    eprintln!(
                        "{}",
                        problem::concise_parsing_error(&error, filename, &content)
                    );
                    std::process::exit(1);
                }
            };

            match output {
                Output::Native => {
                    println!("{:#?}", document);
                }
                Output::Json => match serde_json::to_string_pretty(&document) {
                    Ok(text) => println!("{}", text),
                    Err(error) => {
                        eprintln!("{}: {}", "error".bright_red(), error);
                        std::process::exit(1);
                    }
                },
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: lmy [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn required_filename(submatches: &ArgMatches) -> &Path {
    match submatches.get_one::<String>("filename") {
        Some(filename) => Path::new(filename),
        None => {
            eprintln!("{}: a filename is required", "error".bright_red());
            std::process::exit(2);
        }
    }
}

fn load_or_exit(filename: &Path) -> String {
    match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            std::process::exit(1);
        }
    }
}
