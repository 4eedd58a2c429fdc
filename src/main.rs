mod cli;

use std::{fs::read_to_string, process::exit, time::Instant};

use clap::Parser;
use indentc::{display_error, lexer::lexer::tokenize, parser::parser::parse};

fn main() {
    let args = cli::Cli::parse();

    let file_path = args.input.to_string_lossy().to_string();
    let file_name = args
        .input
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| file_path.clone());

    let source = match read_to_string(&args.input) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path, error);
            exit(1);
        }
    };

    let start = Instant::now();
    let tokens = match tokenize(source.clone(), Some(file_name)) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprint!("{}", display_error(&error, &source));
            exit(1);
        }
    };

    if args.timings {
        println!("Tokenized in {:?}", start.elapsed());
    }
    if args.tokens {
        for token in &tokens {
            println!("{}", token);
        }
    }

    let parse_start = Instant::now();
    let ast = match parse(tokens) {
        Ok(ast) => ast,
        Err(error) => {
            eprint!("{}", display_error(&error, &source));
            exit(1);
        }
    };

    if args.timings {
        println!("Parsed in {:?}", parse_start.elapsed());
        println!("Total time: {:?}", start.elapsed());
    }
    if args.ast {
        println!("{}", pretty_print(format!("{:?}", ast)));
    }
}

/// Indents a `Debug` dump by bracket depth.
fn pretty_print(string: String) -> String {
    let mut result = String::new();
    let mut indent: usize = 0;
    let mut ignore_next_space = false;
    let mut in_string = false;
    let mut escaped = false;

    for c in string.chars() {
        if in_string {
            result.push(c);
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                result.push(c);
            }
            '{' | '(' | '[' => {
                indent += 1;
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                ignore_next_space = true;
            }
            '}' | ')' | ']' => {
                indent = indent.saturating_sub(1);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                result.push(c);
            }
            ',' => {
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                ignore_next_space = true;
            }
            ' ' if ignore_next_space => {
                ignore_next_space = false;
            }
            _ => {
                ignore_next_space = false;
                result.push(c);
            }
        }
    }

    result
}
