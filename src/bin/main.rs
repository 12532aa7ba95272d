//! # Command line interface
//!
//! Factorizes a single positive integer, taken from the first positional
//! argument or from standard input, and prints the result as prime powers
//! joined by `" * "`.
use std::io;
use std::io::BufRead;
use std::process::exit;

use clap::{App, Arg};

use prime_factor::data::factorization::Factorization;

fn main() {
    let matches = App::new("prime-factor")
        .version(clap::crate_version!())
        .about("Prints the prime-power factorization of a positive integer")
        .arg(
            Arg::new("number")
                .index(1)
                .help("Integer to factorize; read from standard input when absent"),
        )
        .get_matches();

    let input = match matches.value_of("number") {
        Some(argument) => argument.to_string(),
        None => {
            let stdin = io::stdin();
            let mut line = String::new();
            if let Err(error) = stdin.lock().read_line(&mut line) {
                eprintln!("failed to read standard input: {}", error);
                exit(1);
            }
            line
        },
    };

    let n: i64 = match input.trim().parse() {
        Ok(n) => n,
        Err(error) => {
            eprintln!("not an integer: {}", error);
            exit(1);
        },
    };

    match Factorization::compute(n) {
        Ok(factorization) => println!("{}", factorization),
        Err(error) => {
            eprintln!("{}", error);
            exit(1);
        },
    }
}
