//! Reckon CLI entry point.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use reckon_runtime::Repl;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    expressions: Vec<String>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "-e" | "--eval" => {
                i += 1;
                if i >= args.len() {
                    return Err("-e requires an expression".into());
                }
                config.expressions.push(args[i].clone());
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("reckon {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut repl = Repl::new()?;

    // Evaluate files first, then -e expressions, sharing one session.
    for file in &config.files {
        let source = fs::read_to_string(file)
            .map_err(|e| format!("failed to read {}: {e}", file.display()))?;
        for line in source.lines() {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                repl.eval_and_print(trimmed);
            }
        }
    }

    for expression in &config.expressions {
        repl.eval_and_print(expression);
    }

    if config.batch_mode || !config.expressions.is_empty() {
        return Ok(());
    }

    // If files were loaded, suppress banner since context is established
    if !config.files.is_empty() {
        repl = repl.without_banner();
    }

    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mReckon\x1b[0m - Arithmetic expression calculator

\x1b[1mUSAGE:\x1b[0m
    reckon [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Files of expressions to evaluate before starting the REPL

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -e, --eval EXPR    Evaluate an expression and exit
    -b, --batch        Evaluate files and exit (no REPL)

\x1b[1mEXAMPLES:\x1b[0m
    reckon                       Start interactive REPL
    reckon -e '1 + 2 * 3'        Print 7
    reckon -e 'x = 5' -e 'x * 2' Session state carries across -e flags
    reckon -b session.rk         Evaluate session.rk line by line and exit

\x1b[1mREPL COMMANDS:\x1b[0m
    :reset               Clear session variables
    :vars                List session variables
    :bytecode EXPR       Show compiled instructions without executing
    :tokens EXPR         Show the annotated token stream
    exit, quit, Ctrl+D   Exit REPL"
    );
}
