use crate::{data::convert, error::TokenError};

use candle_core::{Device, Tensor};

// Append the tokens of a single line. Characters without a token are dropped and no separator is
// added for the line break.
pub fn tokenize_line(line: &str, tokens: &mut Vec<i32>) {
    tokens.extend(line.chars().filter_map(convert::ltoi));
}

// Tokenize a whole text as one character stream.
pub fn tokenize_text(text: &str) -> Vec<i32> {
    let mut tokens = Vec::with_capacity(text.len());
    tokenize_line(text, &mut tokens);
    tokens
}

// Render tokens back as lowercase text, skipping anything outside the vocabulary.
pub fn detokenize(tokens: &[i32]) -> String {
    tokens.iter().filter_map(|&token| convert::itol(token)).collect()
}

// Pack the token sequence into a 1-D i32 tensor.
pub fn to_tensor(tokens: &[i32], device: &Device) -> Result<Tensor, TokenError> {
    let tensor = Tensor::from_slice(tokens, tokens.len(), device)?;
    Ok(tensor)
}
