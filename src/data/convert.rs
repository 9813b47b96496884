//! Input text is folded to the lowercase Esperanto alphabet and mapped onto a contiguous vocabulary:
//! the '.' delimiter is 0, the lowercase letters follow in alphabet order starting at 1, and the
//! space comes right after the last letter. Any other character has no token.

// The lowercase alphabet, in token order.
pub const LOWER_LETTERS: &[char] = &[
    'a', 'b', 'c', 'ĉ', 'd', 'e', 'f', 'g', 'ĝ', 'h', 'ĥ', 'i', 'j', 'ĵ', 'k', 'l', 'm', 'n', 'o', 'p', 'r', 's', 'ŝ', 't', 'u', 'ŭ', 'v', 'z',
];

// Capitals used for case folding. There is no 'V', so this table is one shorter than LOWER_LETTERS
// and folding is by position: 'Z' sits in the slot of 'v'.
pub const UPPER_LETTERS: &[char] = &[
    'A', 'B', 'C', 'Ĉ', 'D', 'E', 'F', 'G', 'Ĝ', 'H', 'Ĥ', 'I', 'J', 'Ĵ', 'K', 'L', 'M', 'N', 'O', 'P', 'R', 'S', 'Ŝ', 'T', 'U', 'Ŭ', 'Z',
];

// Marks the end of a sentence, always token 0.
pub const DELIMITER: char = '.';

pub const SPACE: char = ' ';

pub const DELIMITER_TOKEN: i32 = 0;
pub const SPACE_TOKEN: i32 = LOWER_LETTERS.len() as i32 + 1;

// Delimiter, letters and space.
pub const VOCAB_SIZE: usize = LOWER_LETTERS.len() + 2;

// Fold a capital onto the lowercase letter at the same table position.
pub fn to_lower(letter: char) -> char {
    match UPPER_LETTERS.iter().position(|&c| c == letter) {
        Some(index) => LOWER_LETTERS[index],
        None => letter,
    }
}

// Convert a letter into its token, or None when the character is not part of the vocabulary.
pub fn ltoi(letter: char) -> Option<i32> {
    let letter = to_lower(letter);

    if letter == DELIMITER {
        return Some(DELIMITER_TOKEN);
    }

    if let Some(index) = LOWER_LETTERS.iter().position(|&c| c == letter) {
        return Some(index as i32 + 1);
    }

    if letter == SPACE {
        return Some(SPACE_TOKEN);
    }

    None
}

// Convert a token back to its lowercase character.
pub fn itol(token: i32) -> Option<char> {
    match token {
        DELIMITER_TOKEN => Some(DELIMITER),
        SPACE_TOKEN => Some(SPACE),
        _ if token > 0 => LOWER_LETTERS.get(token as usize - 1).copied(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_tokens() {
        assert_eq!(ltoi('.'), Some(0));
        assert_eq!(ltoi('a'), Some(1));
        assert_eq!(ltoi('A'), Some(1));
        assert_eq!(ltoi('ĉ'), Some(4));
        assert_eq!(ltoi('v'), Some(27));
        assert_eq!(ltoi('z'), Some(28));
        assert_eq!(ltoi(' '), Some(29));
    }

    #[test]
    fn vocabulary_is_contiguous() {
        let mut tokens: Vec<i32> = LOWER_LETTERS.iter().filter_map(|&c| ltoi(c)).collect();
        tokens.extend(ltoi(DELIMITER));
        tokens.extend(ltoi(SPACE));
        tokens.sort();

        let expected: Vec<i32> = (0..VOCAB_SIZE as i32).collect();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn capitals_fold_by_position() {
        for (upper, lower) in UPPER_LETTERS.iter().zip(LOWER_LETTERS) {
            assert_eq!(to_lower(*upper), *lower);
            assert_eq!(ltoi(*upper), ltoi(*lower));
        }

        // 'Z' lands in the 'v' slot and there is no 'V' at all.
        assert_eq!(to_lower('Z'), 'v');
        assert_eq!(ltoi('Z'), Some(27));
        assert_eq!(to_lower('V'), 'V');
        assert_eq!(ltoi('V'), None);
    }

    #[test]
    fn folding_leaves_other_characters_alone() {
        for c in ['a', 'ŭ', '.', ' ', '\n', '7', 'Q', 'ß'] {
            assert_eq!(to_lower(c), c);
        }
    }

    #[test]
    fn unknown_characters_have_no_token() {
        for c in ['\n', '\r', '\t', ',', '!', '?', '0', '9', 'q', 'w', 'x', 'y', 'Q', 'W', 'é', 'ü'] {
            assert_eq!(ltoi(c), None, "{:?} should not map", c);
        }
    }

    #[test]
    fn itol_inverts_ltoi() {
        for token in 0..VOCAB_SIZE as i32 {
            let letter = itol(token).unwrap();
            assert_eq!(ltoi(letter), Some(token));
        }

        assert_eq!(itol(-1), None);
        assert_eq!(itol(VOCAB_SIZE as i32), None);
    }
}
