// dwparse: recognize one line of do-while statements and print the AST

mod parser;

use std::io::{self, BufRead, Write};

use clap::{Arg, Command};

use parser::builder::AstBuilder;
use parser::classifier::do_while_classifier;
use parser::token::is_terminated;

fn main() {
    let matches = Command::new("dwparse")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Recognizes do-while statements and prints lexemes, tokens, and the AST")
        .arg(
            Arg::new("statement")
                .help("Statement to parse, e.g. 'do a := 0x5 while ( a <= 0x4 ) ;' (prompts when omitted)")
                .index(1),
        )
        .get_matches();

    let line = match matches.get_one::<String>("statement") {
        Some(statement) => statement.clone(),
        None => match read_line() {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                std::process::exit(1);
            }
        },
    };

    let lexemes: Vec<&str> = line.split_whitespace().collect();

    println!("Lexemes:");
    for (i, lexeme) in lexemes.iter().enumerate() {
        println!("{}) {}", i, lexeme);
    }

    let classifier = do_while_classifier();
    let tokens = classifier.classify(&lexemes);

    println!("Tokens:");
    for (i, token) in tokens.iter().enumerate() {
        println!("{}) type: {}, value: {}", i, token.kind, token.text);
    }

    if !is_terminated(&tokens) {
        eprintln!("Parse error: token sequence is not terminated");
        std::process::exit(1);
    }

    match AstBuilder::new(tokens).build_tree() {
        Ok(ast) => print!("{}", ast),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

/// Prompt for a statement and read one line from stdin.
fn read_line() -> io::Result<String> {
    print!("Enter a statement to parse: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}
