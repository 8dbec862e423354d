/// Returns `true` iff the Levenshtein distance between `a` and `b` is at most
/// `limit`. Insertions, deletions and substitutions cost one each.
///
/// Runs the two row dynamic program and stops as soon as every entry of a row
/// exceeds `limit`, since entries never decrease from one row to the next.
pub fn bounded_edit_distance(a: &str, b: &str, limit: usize) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.len().abs_diff(b.len()) > limit {
        return false;
    }

    let mut previous_row: Vec<usize> = (0..=b.len()).collect();
    let mut current_row = vec![0; b.len() + 1];

    for (i, a_char) in a.iter().enumerate() {
        current_row[0] = i + 1;
        let mut row_min = current_row[0];

        for (j, b_char) in b.iter().enumerate() {
            let substitution_cost = usize::from(a_char != b_char);
            current_row[j + 1] = (previous_row[j] + substitution_cost)
                .min(previous_row[j + 1] + 1)
                .min(current_row[j] + 1);
            row_min = row_min.min(current_row[j + 1]);
        }

        std::mem::swap(&mut previous_row, &mut current_row);

        if row_min > limit {
            return false;
        }
    }

    previous_row[b.len()] <= limit
}

/// Two words are adjacent if at most one single character edit turns one into
/// the other. Identical words count as adjacent.
pub fn is_adjacent(a: &str, b: &str) -> bool {
    bounded_edit_distance(a, b, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflexive_for_every_limit() {
        for word in ["", "a", "ladder", "mississippi"] {
            for limit in 0..3 {
                assert!(bounded_edit_distance(word, word, limit));
            }
        }
    }

    #[test]
    fn symmetric() {
        let words = ["", "cat", "cart", "act", "dog", "kitten", "sitting", "flaw", "lawn"];
        for a in words {
            for b in words {
                for limit in 0..4 {
                    assert_eq!(
                        bounded_edit_distance(a, b, limit),
                        bounded_edit_distance(b, a, limit),
                        "{a} {b} {limit}"
                    );
                }
            }
        }
    }

    #[test]
    fn classic_distances() {
        assert!(bounded_edit_distance("kitten", "sitting", 3));
        assert!(!bounded_edit_distance("kitten", "sitting", 2));
        assert!(bounded_edit_distance("flaw", "lawn", 2));
        assert!(!bounded_edit_distance("flaw", "lawn", 1));
        assert!(bounded_edit_distance("", "abc", 3));
        assert!(!bounded_edit_distance("", "abc", 2));
    }

    #[test]
    fn length_difference_exceeds_limit() {
        assert!(!bounded_edit_distance("a", "abcd", 2));
        assert!(!bounded_edit_distance("abcd", "", 3));
    }

    #[test]
    fn adjacency() {
        // substitution, insertion, deletion
        assert!(is_adjacent("cat", "cot"));
        assert!(is_adjacent("cat", "chat"));
        assert!(is_adjacent("chat", "cat"));
        assert!(is_adjacent("cat", "at"));
        assert!(is_adjacent("cat", "cats"));
        assert!(is_adjacent("cat", "cat"));

        assert!(!is_adjacent("cat", "dog"));
        assert!(!is_adjacent("cat", "act"));
        assert!(!is_adjacent("cat", "cheat"));
        assert!(!is_adjacent("zoom", "zo"));
    }
}
