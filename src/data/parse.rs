use crate::{data::tokenize, error::TokenError};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

// Read the file line by line and collect the tokens of every line in file order. The file is
// closed when the reader goes out of scope, before any output is written.
pub fn tokenize_file(path: &Path) -> Result<Vec<i32>, TokenError> {
    let file = File::open(path).map_err(|e| TokenError::input(path, e))?;
    let reader = BufReader::new(file);

    let mut tokens = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| TokenError::input(path, e))?;
        tokenize::tokenize_line(&line, &mut tokens);
    }

    Ok(tokens)
}
