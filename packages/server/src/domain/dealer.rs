//! Dealer trait 定義
//!
//! ラウンド開始時の「お題の単語ペア」と「インポスターの選出」を抽象化します。
//! 現在の実装は固定の単語リスト（Infrastructure 層の `StaticWordList`）ですが、
//! 生成 AI による単語ペア生成などに差し替えられるようにしています。

/// Secret word and the decoy word of the same pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPair {
    /// インポスター以外のプレイヤーに伝える単語
    pub word: String,
    /// インポスター用の似た単語（ラウンド終了時に公開）
    pub impostor_word: String,
}

impl WordPair {
    pub fn new(word: impl Into<String>, impostor_word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            impostor_word: impostor_word.into(),
        }
    }
}

/// Dealer trait
///
/// UseCase 層はこの trait に依存し、乱数や単語リストの具体的な実装には依存しない。
#[cfg_attr(test, mockall::automock)]
pub trait Dealer: Send + Sync {
    /// 単語ペアを 1 つ選ぶ
    fn word_pair(&self) -> WordPair;

    /// インポスターにするプレイヤーの index を選ぶ（`0..player_count`）
    fn impostor_index(&self, player_count: usize) -> usize;
}
