//! Street-number extraction from raw address strings.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Unit designations written directly before a comma ("123A, ...").
    static ref UNIT_BEFORE_COMMA: Regex = Regex::new(r"\b(\d{1,3})([A-Za-z]),").unwrap();
    /// Generic street number: 1-3 digits, optional dash range, optional
    /// standalone letter.
    static ref STREET_NUMBER: Regex =
        Regex::new(r"\b(\d{1,3})(?:-\d{1,3})?(?:\s*([A-Za-z]))?\b").unwrap();
}

/// A house number with an optional letter suffix ("45", "45B").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreetNumber {
    /// The numeric part, kept as a string (1-3 digits).
    pub number: String,
    /// Optional single-letter suffix.
    pub letter: Option<char>,
}

impl fmt::Display for StreetNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.letter {
            Some(letter) => write!(f, "{}{}", self.number, letter),
            None => write!(f, "{}", self.number),
        }
    }
}

/// Extract a street number from a raw address string.
///
/// When the string contains a comma, a number-with-adjacent-letter token
/// sitting directly before a comma wins ("123A, Building 2" names unit 123A,
/// not building 2). Otherwise the first generic number token is taken: 1-3
/// digits, an optional dash range (only the first number is kept), and an
/// optional standalone letter. A letter immediately followed by `/` or `,`
/// belongs to the next token and is dropped. Numbers with a leading zero are
/// not street numbers; the whole extraction returns `None` for them.
///
/// Pure function, deterministic; missing data is a record-level concern
/// handled by the caller.
pub fn extract_street_number(raw: &str) -> Option<StreetNumber> {
    if raw.contains(',')
        && let Some(caps) = UNIT_BEFORE_COMMA.captures(raw)
    {
        let number = caps[1].to_string();
        if number.starts_with('0') {
            return None;
        }
        let letter = caps[2].chars().next();
        return Some(StreetNumber { number, letter });
    }

    let caps = STREET_NUMBER.captures(raw)?;
    let number = caps[1].to_string();
    if number.starts_with('0') {
        return None;
    }

    let letter = caps.get(2).and_then(|m| {
        // The original pattern used a lookahead here; the regex crate has
        // none, so the character after the letter is checked by hand.
        match raw[m.end()..].chars().next() {
            Some('/') | Some(',') => None,
            _ => m.as_str().chars().next(),
        }
    });

    Some(StreetNumber { number, letter })
}
