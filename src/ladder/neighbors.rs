use itertools::Itertools;

use super::dictionary::Dictionary;

pub const ALPHABET: std::ops::RangeInclusive<char> = 'a'..='z';

/// Every word one substitution, insertion or deletion away from `word`.
///
/// Candidates are listed in generation order and may repeat, e.g. inserting
/// a letter next to an equal letter.
pub fn single_edits(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let length = chars.len();
    let mut candidates = Vec::with_capacity(length * 25 + (length + 1) * 26 + length);

    for position in 0..length {
        for letter in ALPHABET.filter(|&letter| letter != chars[position]) {
            let mut candidate = chars.clone();
            candidate[position] = letter;
            candidates.push(candidate.into_iter().collect());
        }
    }

    for position in 0..=length {
        for letter in ALPHABET {
            let mut candidate = chars.clone();
            candidate.insert(position, letter);
            candidates.push(candidate.into_iter().collect());
        }
    }

    for position in 0..length {
        let mut candidate = chars.clone();
        candidate.remove(position);
        candidates.push(candidate.into_iter().collect());
    }

    candidates
}

/// Dictionary words one edit away from `word`, sorted and without
/// duplicates.
pub fn neighbors(word: &str, dictionary: &Dictionary) -> Vec<String> {
    single_edits(word)
        .into_iter()
        .filter(|candidate| dictionary.contains(candidate))
        .sorted()
        .dedup()
        .collect()
}
