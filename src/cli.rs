use crate::{
    data::{parse, store},
    error::TokenError,
};

use clap::Parser;
use std::path::PathBuf;

/// Convert Esperanto text into an int32 .npy array of character tokens.
///
/// '.' is token 0, the letters a..z of the Esperanto alphabet are 1..28 and a space is 29. Every
/// other character, line breaks included, is dropped.
#[derive(Parser, Debug)]
#[command(name = "eotoken", version, about)]
pub struct Cli {
    /// Text file to tokenize.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Destination array; ".npy" is appended when missing.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,
}

// Tokenize the input file and save the array, nothing is written if reading fails.
pub fn run(cli: Cli) -> Result<(), TokenError> {
    let tokens = parse::tokenize_file(&cli.input)?;
    let path = store::write_tokens(&tokens, &cli.output)?;

    println!("wrote {} tokens to {}", tokens.len(), path.display());

    Ok(())
}
