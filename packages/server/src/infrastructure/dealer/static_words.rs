//! 組み込みの単語ペアリストを使った Dealer 実装

use rand::Rng;

use crate::domain::{Dealer, WordPair};

/// (お題の単語, インポスター用の似た単語)
pub const WORD_PAIRS: [(&str, &str); 15] = [
    ("elephant", "rhinoceros"),
    ("ocean", "lake"),
    ("mountain", "hill"),
    ("fire", "flame"),
    ("sun", "star"),
    ("book", "novel"),
    ("car", "vehicle"),
    ("tree", "plant"),
    ("music", "song"),
    ("computer", "machine"),
    ("coffee", "drink"),
    ("phone", "device"),
    ("city", "town"),
    ("food", "meal"),
    ("game", "sport"),
];

/// Dealer backed by [`WORD_PAIRS`] and the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticWordList;

impl StaticWordList {
    pub fn new() -> Self {
        Self
    }
}

impl Dealer for StaticWordList {
    fn word_pair(&self) -> WordPair {
        let (word, impostor_word) = WORD_PAIRS[rand::thread_rng().gen_range(0..WORD_PAIRS.len())];
        WordPair::new(word, impostor_word)
    }

    fn impostor_index(&self, player_count: usize) -> usize {
        if player_count == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..player_count)
    }
}
