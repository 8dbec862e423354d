//! Shortest word ladders: sequences of dictionary words where each word is a
//! single substitution, insertion or deletion away from the previous one.

pub mod dictionary;
pub mod edit_distance;
pub mod neighbors;
pub mod search;
