//! Dealer の実装
//!
//! - `static_words`: 組み込みの単語ペアリストから乱数で選ぶ実装

pub mod static_words;

pub use static_words::{StaticWordList, WORD_PAIRS};
