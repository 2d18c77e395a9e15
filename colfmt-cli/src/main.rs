//! Command-line interface for colfmt
//! This binary checks fixed-column source files and shows how each line was classified.
//!
//! Usage:
//!   colfmt check `<path>` [--format `<format>`] [--config `<file>`]  - Report column-rule issues
//!   colfmt lines `<path>` [--format `<format>`]                     - Show every classified line
//!   colfmt config [--config `<file>`]                               - Print the effective configuration
//!
//! Exit status: 0 on success, 1 when issues were found (and `check.fail_on_issues` is set),
//! 2 when the file cannot be read, is blank, or the configuration is invalid.

mod output;

use clap::{Arg, ArgAction, ArgMatches, Command};
use colfmt_config::{ColfmtConfig, Loader};
use colfmt_parser::colfmt::{PreProcessor, SourceLoader};
use log::{debug, info};

const EXIT_OK: i32 = 0;
const EXIT_ISSUES: i32 = 1;
const EXIT_FATAL: i32 = 2;

/// Configuration file picked up from the working directory when `--config` is not given.
const LOCAL_CONFIG: &str = "colfmt.toml";

fn build_cli() -> Command {
    let path_arg = Arg::new("path")
        .help("Path to the source file")
        .required(true)
        .index(1);
    let format_arg = Arg::new("format")
        .long("format")
        .short('f')
        .help("Output format (overrides output.format)")
        .value_parser(["text", "json", "yaml"]);

    Command::new("colfmt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for checking fixed-column source files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("Increase log output (-v info, -vv debug, -vvv trace)"),
        )
        .subcommand(
            Command::new("check")
                .about("Report lines that break the column rules")
                .arg(path_arg.clone())
                .arg(format_arg.clone())
                .arg(
                    Arg::new("show-lines")
                        .long("show-lines")
                        .help("List every classified line before the issues")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("no-fail")
                        .long("no-fail")
                        .help("Exit with status 0 even when issues were found")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("lines")
                .about("Show how every line was classified")
                .arg(path_arg)
                .arg(format_arg),
        )
        .subcommand(Command::new("config").about("Print the effective configuration"))
}

fn main() {
    let matches = build_cli().get_matches();
    init_logging(matches.get_count("verbose"));

    let code = match matches.subcommand() {
        Some(("check", check_matches)) => handle_check_command(check_matches),
        Some(("lines", lines_matches)) => handle_lines_command(lines_matches),
        Some(("config", config_matches)) => handle_config_command(config_matches),
        _ => unreachable!(),
    };
    std::process::exit(code);
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Layer the defaults, the config file and the command-line overrides.
fn load_config(matches: &ArgMatches) -> ColfmtConfig {
    let mut loader = match matches.get_one::<String>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file(LOCAL_CONFIG),
    };

    let overrides = [
        ("output.format", arg_string(matches, "format")),
        ("output.show_lines", flag(matches, "show-lines").then(|| "true".to_string())),
        ("check.fail_on_issues", flag(matches, "no-fail").then(|| "false".to_string())),
    ];
    for (key, value) in overrides {
        let Some(value) = value else { continue };
        debug!("override {} = {}", key, value);
        loader = loader.set_override(key, value).unwrap_or_else(|e| {
            eprintln!("Configuration error: {}", e);
            std::process::exit(EXIT_FATAL);
        });
    }

    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(EXIT_FATAL);
    })
}

/// Value of an optional string argument; `None` when the subcommand has no such argument.
fn arg_string(matches: &ArgMatches, id: &str) -> Option<String> {
    matches.try_get_one::<String>(id).ok().flatten().cloned()
}

fn flag(matches: &ArgMatches, id: &str) -> bool {
    matches.try_get_one::<bool>(id).ok().flatten().copied().unwrap_or(false)
}

fn load_source(path: &str) -> PreProcessor {
    let preprocessor = SourceLoader::from_path(path)
        .and_then(|loader| loader.preprocess())
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_FATAL);
        });
    info!(
        "{}: {} lines, {} issues",
        path,
        preprocessor.line_count(),
        preprocessor.issue_count()
    );
    preprocessor
}

/// Handle the check command
fn handle_check_command(matches: &ArgMatches) -> i32 {
    let config = load_config(matches);
    let path = matches.get_one::<String>("path").unwrap();
    let preprocessor = load_source(path);

    let rendered = output::render_check(&preprocessor, &config).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(EXIT_FATAL);
    });
    print!("{}", rendered);

    if preprocessor.has_issues() && config.check.fail_on_issues {
        EXIT_ISSUES
    } else {
        EXIT_OK
    }
}

/// Handle the lines command
fn handle_lines_command(matches: &ArgMatches) -> i32 {
    let config = load_config(matches);
    let path = matches.get_one::<String>("path").unwrap();
    let preprocessor = load_source(path);

    let rendered =
        output::render_line_table(&preprocessor, config.output.format).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_FATAL);
        });
    print!("{}", rendered);
    EXIT_OK
}

/// Handle the config command
fn handle_config_command(matches: &ArgMatches) -> i32 {
    print!("{}", load_config(matches));
    EXIT_OK
}
