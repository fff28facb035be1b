use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use moonlet::{
    interpreter::{
        evaluator::{builtin, core::evaluate},
        lexer::tokenize,
        parser::core::parse,
        scope::ScopeRef,
        value::Value,
    },
    run,
};

/// moonlet is a small embeddable interpreter for a Lua-like scripting
/// language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells moonlet to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// The script to run, or a path to one with `--file`. When omitted,
    /// moonlet starts an interactive session.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        repl();

        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    match run(&script) {
        Ok(value) => println!("=> {value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

/// Runs an interactive read-eval-print loop.
///
/// Bindings persist across lines in a single root scope, and an error on
/// one line leaves the session usable.
fn repl() {
    let scope = builtin::root_scope();
    let stdin = io::stdin();

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }
        if line.trim().is_empty() {
            continue;
        }

        match eval_line(&line, &scope) {
            Ok(value) => println!("=> {value}"),
            Err(e) => eprintln!("{e}"),
        }
    }
}

fn eval_line(line: &str, scope: &ScopeRef) -> Result<Value, Box<dyn std::error::Error>> {
    let tokens = tokenize(line)?;
    let statements = parse(&tokens)?;

    Ok(evaluate(&statements, scope)?)
}
