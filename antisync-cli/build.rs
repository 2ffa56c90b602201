use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of build_cli() from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
fn target_arg() -> Arg {
    Arg::new("target")
        .help("Deployment target name")
        .required(true)
        .index(1)
        .value_hint(ValueHint::Other)
}

fn paths_arg() -> Arg {
    Arg::new("paths")
        .help("Files or directories to scan")
        .num_args(1..)
        .index(2)
        .value_hint(ValueHint::AnyPath)
}

fn file_arg() -> Arg {
    Arg::new("file")
        .help("Source file")
        .required(true)
        .index(2)
        .value_hint(ValueHint::FilePath)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("antisync")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Check antiblog markup files and compare them with a blog")
        .arg_required_else_help(true)
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
                .arg(file_arg()),
        )
        .subcommand(
            Command::new("status")
                .about("Compare files against the remote index")
                .arg(target_arg())
                .arg(
                    Arg::new("index")
                        .long("index")
                        .value_name("FILE")
                        .required(true)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(paths_arg()),
        )
        .subcommand(
            Command::new("inject-id")
                .about("Write an id assigned by the blog back into a file")
                .arg(target_arg())
                .arg(file_arg())
                .arg(Arg::new("id").help("Entry id").required(true).index(3)),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "antisync", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "antisync", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "antisync", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
