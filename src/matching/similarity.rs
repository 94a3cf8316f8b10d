//! String-similarity metrics for street-name matching.
//!
//! All metrics return an integer score in the range 0..=100, where 100 means
//! identical (for `token_set_ratio`, identical token sets). Scores are
//! deterministic: token sets are kept sorted so equal inputs always produce
//! equal scores.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
/// This is the minimum number of single-character edits (insertions,
/// deletions, or substitutions) required to change one string into another.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    levenshtein_chars(&s1_chars, &s2_chars)
}

#[allow(clippy::needless_range_loop)]
fn levenshtein_chars(s1_chars: &[char], s2_chars: &[char]) -> usize {
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut matrix = vec![vec![0; len2 + 1]; len1 + 1];

    // Initialize first row and column
    for i in 0..=len1 {
        matrix[i][0] = i;
    }
    for j in 0..=len2 {
        matrix[0][j] = j;
    }

    // Fill the matrix
    for i in 1..=len1 {
        for j in 1..=len2 {
            let cost = if s1_chars[i - 1] == s2_chars[j - 1] {
                0
            } else {
                1
            };

            matrix[i][j] = min(
                min(
                    matrix[i - 1][j] + 1, // deletion
                    matrix[i][j - 1] + 1, // insertion
                ),
                matrix[i - 1][j - 1] + cost, // substitution
            );
        }
    }

    matrix[len1][len2]
}

fn ratio_chars(s1_chars: &[char], s2_chars: &[char]) -> u8 {
    let max_len = s1_chars.len().max(s2_chars.len());
    if max_len == 0 {
        return 100;
    }

    let distance = levenshtein_chars(s1_chars, s2_chars);
    ((1.0 - distance as f64 / max_len as f64) * 100.0).round() as u8
}

/// Normalized edit-distance similarity, 0..=100.
///
/// Two empty strings are identical and score 100.
pub fn ratio(s1: &str, s2: &str) -> u8 {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    ratio_chars(&s1_chars, &s2_chars)
}

/// Best substring-tolerant similarity, 0..=100.
///
/// Slides the shorter string across every same-length character window of
/// the longer string and returns the maximum [`ratio`] found, so a candidate
/// fully contained in the other string scores 100.
pub fn partial_ratio(s1: &str, s2: &str) -> u8 {
    if s1.is_empty() && s2.is_empty() {
        return 100;
    }
    if s1.is_empty() || s2.is_empty() {
        return 0;
    }

    // Shorter string is the needle
    let (shorter, longer) = if s1.chars().count() <= s2.chars().count() {
        (s1, s2)
    } else {
        (s2, s1)
    };

    let shorter_chars: Vec<char> = shorter.chars().collect();
    let longer_chars: Vec<char> = longer.chars().collect();
    let shorter_len = shorter_chars.len();
    let longer_len = longer_chars.len();

    if shorter_len == longer_len {
        return ratio_chars(&shorter_chars, &longer_chars);
    }

    let mut max_score = 0u8;
    for start in 0..=(longer_len - shorter_len) {
        let window = &longer_chars[start..start + shorter_len];
        let score = ratio_chars(&shorter_chars, window);
        max_score = max_score.max(score);
        if max_score == 100 {
            break;
        }
    }

    max_score
}

/// Extract unique lowercase tokens from a string as a sorted set.
fn token_set(s: &str) -> Vec<String> {
    let mut tokens: Vec<String> = s.split_whitespace().map(|t| t.to_lowercase()).collect();
    tokens.sort_unstable();
    tokens.dedup();
    tokens
}

fn join_tokens(head: &[String], tail: &[String]) -> String {
    if tail.is_empty() {
        return head.join(" ");
    }
    if head.is_empty() {
        return tail.join(" ");
    }
    format!("{} {}", head.join(" "), tail.join(" "))
}

/// Set-based token similarity, 0..=100.
///
/// Insensitive to token order and duplication, symmetric; a candidate whose
/// token set is a subset of the other's scores 100. Compares the token-set
/// intersection against each side's combined (intersection + difference)
/// string as well as the sorted token strings against each other, and takes
/// the maximum.
pub fn token_set_ratio(s1: &str, s2: &str) -> u8 {
    let tokens1 = token_set(s1);
    let tokens2 = token_set(s2);

    if tokens1.is_empty() && tokens2.is_empty() {
        return 100;
    }
    if tokens1.is_empty() || tokens2.is_empty() {
        return 0;
    }

    // Sorted vecs keep intersection and differences in a stable order
    let intersection: Vec<String> = tokens1
        .iter()
        .filter(|t| tokens2.binary_search(t).is_ok())
        .cloned()
        .collect();
    let diff1: Vec<String> = tokens1
        .iter()
        .filter(|t| tokens2.binary_search(t).is_err())
        .cloned()
        .collect();
    let diff2: Vec<String> = tokens2
        .iter()
        .filter(|t| tokens1.binary_search(t).is_err())
        .cloned()
        .collect();

    let intersection_str = intersection.join(" ");
    let combined1 = join_tokens(&intersection, &diff1);
    let combined2 = join_tokens(&intersection, &diff2);

    let mut best = 0u8;
    if !intersection_str.is_empty() {
        best = best.max(ratio(&intersection_str, &combined1));
        best = best.max(ratio(&intersection_str, &combined2));
    }
    best = best.max(ratio(&combined1, &combined2));
    best = best.max(ratio(&tokens1.join(" "), &tokens2.join(" ")));

    best
}
