use std::collections::VecDeque;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::{dictionary::Dictionary, neighbors::neighbors};

/// Words from the begin word to the end word, each one edit away from the
/// previous one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ladder {
    pub words: Vec<String>,
}

impl Ladder {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of edits, one less than the number of words.
    pub fn steps(&self) -> usize {
        self.words.len().saturating_sub(1)
    }
}

/// Requests rejected before searching.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LadderError {
    #[error("start and end words are identical ('{word}')")]
    IdenticalWords { word: String },

    #[error("end word '{end}' is not in the dictionary")]
    EndNotInDictionary { end: String },
}

/// Breadth first search for a shortest ladder from `begin` to `end`.
///
/// `begin` does not have to be a dictionary word, every other word of the
/// ladder is. Neighbors are expanded in lexicographic order, so among several
/// shortest ladders the same one is returned on every call. Returns
/// `Ok(None)` if the two words are not connected.
pub fn find_ladder(
    begin: &str,
    end: &str,
    dictionary: &Dictionary,
) -> Result<Option<Ladder>, LadderError> {
    if begin == end {
        let error = LadderError::IdenticalWords {
            word: begin.to_string(),
        };
        warn!(begin, end, "{}", error);
        return Err(error);
    }
    if !dictionary.contains(end) {
        let error = LadderError::EndNotInDictionary {
            end: end.to_string(),
        };
        warn!(begin, end, "{}", error);
        return Err(error);
    }

    // Every discovered word maps to the word it was discovered from. The begin
    // word has no predecessor, which also marks it as visited.
    let mut predecessors: AHashMap<String, Option<String>> = AHashMap::new();
    predecessors.insert(begin.to_string(), None);

    let mut queue = VecDeque::from([begin.to_string()]);
    while let Some(word) = queue.pop_front() {
        for neighbor in neighbors(&word, dictionary) {
            if predecessors.contains_key(&neighbor) {
                continue;
            }
            predecessors.insert(neighbor.clone(), Some(word.clone()));

            if neighbor == end {
                let ladder = backtrace(&predecessors, neighbor);
                debug!(
                    begin,
                    end,
                    visited = predecessors.len(),
                    words = ladder.len(),
                    "found ladder"
                );
                return Ok(Some(ladder));
            }
            queue.push_back(neighbor);
        }
    }

    debug!(begin, end, visited = predecessors.len(), "no ladder");
    Ok(None)
}

fn backtrace(predecessors: &AHashMap<String, Option<String>>, end: String) -> Ladder {
    let mut words = vec![end];
    while let Some(Some(predecessor)) = words.last().and_then(|word| predecessors.get(word)) {
        words.push(predecessor.clone());
    }
    words.reverse();
    Ladder { words }
}
