// Command-line interface for antisync
//
// This binary checks antiblog markup files and reports how they relate to what the blog
// currently stores. It never talks to the network: the remote index is read from a JSON file
// (the body of the blog's /api/index endpoint) and entries are printed as JSON for whatever
// does the upload.
//
// Usage:
//  antisync check <target> [paths...]                 - Parse every file, report errors
//  antisync show <target> <file>                      - Print the canonical map of one file
//  antisync status <target> --index <file> [paths...] - Compare files against the remote index
//  antisync inject-id <target> <file> <id>            - Write an assigned id back into a file
//
// Paths may be files or directories (walked recursively) and default to the current directory.

mod report;

use antisync_config::{AntisyncConfig, Loader};
use antisync_markup::{load, FileSet, RemoteIndex, StatusReport};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command, ValueHint};
use report::Reporter;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

fn build_cli() -> Command {
    Command::new("antisync")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Check antiblog markup files and compare them with a blog")
        .long_about(
            "antisync parses antiblog markup files into blog entries.\n\n\
            Commands:\n  \
            - check:     Parse files and report errors\n  \
            - show:      Print the canonical map of a file as JSON\n  \
            - status:    Compare files against the remote index\n  \
            - inject-id: Write an id assigned by the blog back into a file\n\n\
            Examples:\n  \
            antisync check prod posts/                       # Check every file below posts/\n  \
            antisync show prod posts/hello.txt               # Print the entry for prod\n  \
            antisync status prod --index index.json posts/   # What would a push do?\n  \
            antisync inject-id prod posts/hello.txt 42       # Record the new id",
        )
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an antisync.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Also report files that need no attention")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("check")
                .about("Parse files and report errors")
                .arg(target_arg())
                .arg(paths_arg()),
        )
        .subcommand(
            Command::new("show")
                .about("Print the canonical map of a file as JSON")
                .arg(target_arg())
                .arg(
                    Arg::new("file")
                        .help("Source file")
                        .required(true)
                        .index(2)
                        .value_parser(value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("status")
                .about("Compare files against the remote index")
                .long_about(
                    "Classify every file published for the target:\n  \
                    [NEW]      no id yet\n  \
                    [BACKUP]   has an id the blog does not know\n  \
                    [SAME]     unchanged (only shown with --verbose)\n  \
                    [CHANGED]  differs from the blog\n\n\
                    Entries the blog has but no file claims are listed as [MISSING].",
                )
                .arg(target_arg())
                .arg(
                    Arg::new("index")
                        .long("index")
                        .value_name("FILE")
                        .help("JSON file holding the remote index")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(paths_arg()),
        )
        .subcommand(
            Command::new("inject-id")
                .about("Write an id assigned by the blog back into a file")
                .arg(target_arg())
                .arg(
                    Arg::new("file")
                        .help("Source file")
                        .required(true)
                        .index(2)
                        .value_parser(value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("id")
                        .help("Entry id")
                        .required(true)
                        .index(3)
                        .value_parser(value_parser!(i64)),
                ),
        )
}

fn target_arg() -> Arg {
    Arg::new("target")
        .help("Deployment target name, as used in '~ public <target>'")
        .required(true)
        .index(1)
        .value_hint(ValueHint::Other)
}

fn paths_arg() -> Arg {
    Arg::new("paths")
        .help("Files or directories to scan")
        .num_args(1..)
        .index(2)
        .default_value(".")
        .value_parser(value_parser!(PathBuf))
        .value_hint(ValueHint::AnyPath)
}

fn main() {
    let matches = build_cli().get_matches();
    let verbose = matches.get_flag("verbose");

    env_logger::Builder::from_default_env()
        .filter_level(if verbose {
            log::LevelFilter::Info
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()), verbose);

    let Some((name, sub_matches)) = matches.subcommand() else {
        eprintln!("Unknown subcommand. Use --help for usage information.");
        std::process::exit(1);
    };
    let target = sub_matches
        .get_one::<String>("target")
        .expect("target is required");

    let result = match name {
        "check" => handle_check_command(target, &paths(sub_matches), &config),
        "show" => {
            let file = sub_matches
                .get_one::<PathBuf>("file")
                .expect("file is required");
            handle_show_command(target, file)
        }
        "status" => {
            let index = sub_matches
                .get_one::<PathBuf>("index")
                .expect("index is required");
            handle_status_command(target, index, &paths(sub_matches), &config)
        }
        "inject-id" => {
            let file = sub_matches
                .get_one::<PathBuf>("file")
                .expect("file is required");
            let id = *sub_matches.get_one::<i64>("id").expect("id is required");
            handle_inject_id_command(target, file, id, &config)
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("Error writing output: {err}");
            std::process::exit(1);
        }
    }
}

fn paths(matches: &ArgMatches) -> Vec<PathBuf> {
    matches
        .get_many::<PathBuf>("paths")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

/// Handle the check command. Returns false if any file failed.
fn handle_check_command(
    target: &str,
    paths: &[PathBuf],
    config: &AntisyncConfig,
) -> io::Result<bool> {
    let mut reporter = Reporter::new(io::stdout().lock(), config.report.verbose);
    check_files(target, paths, config, &mut reporter)
}

fn check_files<W: Write>(
    target: &str,
    paths: &[PathBuf],
    config: &AntisyncConfig,
    reporter: &mut Reporter<W>,
) -> io::Result<bool> {
    let (files, mut ok) = collect_files(paths, config, reporter)?;
    for path in &files {
        match load(target, path) {
            Ok(entry) if entry.is_published() => {
                reporter.babble(format_args!("[OK] {}", path.display()))?
            }
            Ok(_) => reporter.babble(format_args!("[SKIP] {}", path.display()))?,
            Err(err) => {
                ok = false;
                reporter.error(path, err)?;
            }
        }
    }
    log::info!("checked {} file(s) for {target}", files.len());
    Ok(ok)
}

/// Handle the show command
fn handle_show_command(target: &str, file: &Path) -> io::Result<bool> {
    let entry = load(target, file).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });
    let json = serde_json::to_string_pretty(&entry.to_map()).map_err(io::Error::other)?;
    let mut out = io::stdout().lock();
    writeln!(out, "{json}")?;
    Ok(true)
}

/// Handle the status command
fn handle_status_command(
    target: &str,
    index_path: &Path,
    paths: &[PathBuf],
    config: &AntisyncConfig,
) -> io::Result<bool> {
    let target_config = config.target(target).unwrap_or_else(|err| {
        eprintln!("Error: {err}");
        std::process::exit(1);
    });
    let raw = fs::read_to_string(index_path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {e}", index_path.display());
        std::process::exit(1);
    });
    let index = RemoteIndex::from_json(&raw).unwrap_or_else(|e| {
        eprintln!("Invalid remote index '{}': {e}", index_path.display());
        std::process::exit(1);
    });

    let mut reporter = Reporter::new(io::stdout().lock(), config.report.verbose);
    let report = status_files(target, &index, paths, config, &mut reporter)?;
    for id in report.missing() {
        reporter.say(format_args!("[MISSING] {}", target_config.entry_url(id)))?;
    }
    Ok(true)
}

fn status_files<'a, W: Write>(
    target: &str,
    index: &'a RemoteIndex,
    paths: &[PathBuf],
    config: &AntisyncConfig,
    reporter: &mut Reporter<W>,
) -> io::Result<StatusReport<'a>> {
    let (files, _) = collect_files(paths, config, reporter)?;
    let mut report = StatusReport::new(index);
    for path in files {
        let parsed = load(target, &path);
        let outcome = report.record(path, parsed);
        reporter.outcome(outcome)?;
    }
    Ok(report)
}

/// Handle the inject-id command
fn handle_inject_id_command(
    target: &str,
    file: &Path,
    id: i64,
    config: &AntisyncConfig,
) -> io::Result<bool> {
    if let Err(e) = antisync_markup::inject_id_into_file(target, file, id) {
        eprintln!("Error updating file '{}': {e}", file.display());
        std::process::exit(1);
    }
    let mut reporter = Reporter::new(io::stdout().lock(), config.report.verbose);
    match config.target(target) {
        Ok(target_config) => reporter.say(format_args!(
            "[OK] {} => {}",
            file.display(),
            target_config.entry_url(id)
        ))?,
        Err(_) => reporter.say(format_args!("[OK] {} => {id}", file.display()))?,
    }
    Ok(true)
}

/// Expand the command-line paths into source files. Unreadable paths are reported and the
/// returned flag is false.
fn collect_files<W: Write>(
    paths: &[PathBuf],
    config: &AntisyncConfig,
    reporter: &mut Reporter<W>,
) -> io::Result<(Vec<PathBuf>, bool)> {
    let mut files = FileSet::new().with_skip_hidden(config.scan.skip_hidden);
    let mut ok = true;
    for path in paths {
        if !path.exists() {
            ok = false;
            reporter.error(path, "No such file or directory")?;
            continue;
        }
        if let Err(err) = files.add(path) {
            ok = false;
            reporter.error(path, err)?;
        }
    }
    Ok((files.into_vec(), ok))
}

fn load_cli_config(explicit_path: Option<&str>, verbose: bool) -> AntisyncConfig {
    let loader = Loader::new().with_optional_file("antisync.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };
    let loader = if verbose {
        loader.set_override("report.verbose", true)
    } else {
        Ok(loader)
    };

    loader.and_then(Loader::build).unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}
