use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use rustyline::{Editor, error::ReadlineError, history::DefaultHistory};
use tinycalc::{evaluate_line, interpreter::evaluator::core::Context};

/// tinycalc is a line-oriented calculator with variables: integers,
/// `+ - * /`, parentheses, and assignments like `x = 2 + 3`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate the lines of a script file instead of starting the prompt.
    script: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match args.script {
        Some(path) => run_script(&path),
        None => run_repl(),
    }
}

/// Evaluates a file line by line against one session store.
///
/// Expression lines print their value, assignment lines print nothing, and
/// blank lines are skipped, the same contract as the prompt. The first
/// error aborts with its 1-based line number.
fn run_script(path: &Path) -> ExitCode {
    let Ok(source) = fs::read_to_string(path) else {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  path.display());
        return ExitCode::FAILURE;
    };

    let mut context = Context::new();
    for (number, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match evaluate_line(line, &mut context) {
            Ok(Some(value)) => println!("{value}"),
            Ok(None) => {},
            Err(e) => {
                eprintln!("Line {}: {e}", number + 1);
                return ExitCode::FAILURE;
            },
        }
    }
    ExitCode::SUCCESS
}

/// Runs the interactive prompt.
///
/// Every line is evaluated to completion before the next one is read.
/// Errors are reported and the session continues; the variable store lives
/// until the session ends.
fn run_repl() -> ExitCode {
    println!("tinycalc: integers, + - * /, parentheses, and variables.");
    println!("Type 'exit' or 'quit' to end.");

    let mut editor: Editor<(), DefaultHistory> = match Editor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Failed to start the interactive prompt: {e}");
            return ExitCode::FAILURE;
        },
    };
    let mut context = Context::new();

    loop {
        let line = match editor.readline("calc> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Input error: {e}");
                return ExitCode::FAILURE;
            },
        };

        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text.eq_ignore_ascii_case("exit") || text.eq_ignore_ascii_case("quit") {
            break;
        }
        let _ = editor.add_history_entry(text);

        match evaluate_line(text, &mut context) {
            Ok(Some(value)) => println!("{value}"),
            Ok(None) => {},
            Err(e) => eprintln!("{e}"),
        }
    }
    ExitCode::SUCCESS
}
