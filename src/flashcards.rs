// ============================================
// src/flashcards.rs
// フラッシュカードのデッキとカーソル管理
// ============================================

use std::collections::BTreeSet;

use rand::Rng;
use tracing::debug;

use crate::error::EmptyDeckError;
use crate::words::VocabularyEntry;

/// `cursor` の次のインデックス (末尾なら先頭に戻る)
pub fn next_index(cursor: usize, len: usize) -> Result<usize, EmptyDeckError> {
    if len == 0 {
        return Err(EmptyDeckError);
    }
    Ok((cursor + 1) % len)
}

/// `cursor` の前のインデックス (先頭なら末尾に戻る)
pub fn previous_index(cursor: usize, len: usize) -> Result<usize, EmptyDeckError> {
    if len == 0 {
        return Err(EmptyDeckError);
    }
    Ok(if cursor == 0 { len - 1 } else { cursor - 1 })
}

/// フラッシュカードの状態を管理する
///
/// `cursor` は常に `0 <= cursor < deck.len()` を満たす。
#[derive(Debug, Clone)]
pub struct Navigator {
    deck: Vec<VocabularyEntry>,
    cursor: usize,
    /// 裏面 (意味・例文) を表示中か
    revealed: bool,

    // セッション中だけ覚えておく
    known: BTreeSet<&'static str>,
    review: BTreeSet<&'static str>,
}

impl Navigator {
    pub fn new(deck: Vec<VocabularyEntry>) -> Result<Self, EmptyDeckError> {
        if deck.is_empty() {
            return Err(EmptyDeckError);
        }
        Ok(Self {
            deck,
            cursor: 0,
            revealed: false,
            known: BTreeSet::new(),
            review: BTreeSet::new(),
        })
    }

    /// 現在表示中のカード
    pub fn current(&self) -> &VocabularyEntry {
        &self.deck[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn known_count(&self) -> usize {
        self.known.len()
    }

    pub fn review_count(&self) -> usize {
        self.review.len()
    }

    /// 次のカードへ。表裏はリセット
    pub fn next(&mut self) -> usize {
        // デッキは空にならないので `unwrap_or` には落ちない
        self.cursor = next_index(self.cursor, self.deck.len()).unwrap_or(0);
        self.revealed = false;
        self.cursor
    }

    /// 前のカードへ。表裏はリセット
    pub fn previous(&mut self) -> usize {
        self.cursor = previous_index(self.cursor, self.deck.len()).unwrap_or(0);
        self.revealed = false;
        self.cursor
    }

    /// カードを裏返す (デッキとカーソルは変えない)
    pub fn flip(&mut self) -> bool {
        self.revealed = !self.revealed;
        self.revealed
    }

    /// Fisher–Yates でデッキを並べ替え、先頭のカードに戻る
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.deck.len()).rev() {
            let j = rng.random_range(0..=i);
            self.deck.swap(i, j);
        }
        self.cursor = 0;
        self.revealed = false;
        debug!(first = self.current().word, "deck shuffled");
    }

    /// 「覚えた」にして次のカードへ
    pub fn mark_known(&mut self) -> &'static str {
        let word = self.current().word;
        self.review.remove(word);
        self.known.insert(word);
        self.next();
        word
    }

    /// 「あとで復習」にして次のカードへ
    pub fn mark_for_review(&mut self) -> &'static str {
        let word = self.current().word;
        self.known.remove(word);
        self.review.insert(word);
        self.next();
        word
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::FLASHCARDS;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn navigator() -> Navigator {
        Navigator::new(FLASHCARDS.to_vec()).unwrap()
    }

    #[test]
    fn empty_deck_is_rejected() {
        assert_eq!(Navigator::new(Vec::new()).unwrap_err(), EmptyDeckError);
        assert!(next_index(0, 0).is_err());
        assert!(previous_index(0, 0).is_err());
    }

    #[test]
    fn next_wraps_after_full_cycle() {
        let mut nav = navigator();
        for start in 0..nav.len() {
            while nav.cursor() != start {
                nav.next();
            }
            for _ in 0..nav.len() {
                nav.next();
            }
            assert_eq!(nav.cursor(), start);
        }
    }

    #[test]
    fn previous_inverts_next() {
        let mut nav = navigator();
        for _ in 0..nav.len() * 2 {
            let before = nav.cursor();
            nav.next();
            nav.previous();
            assert_eq!(nav.cursor(), before);
            nav.next();
        }
        assert_eq!(previous_index(0, 5), Ok(4));
    }

    #[test]
    fn single_card_deck_stays_in_bounds() {
        let mut nav = Navigator::new(vec![FLASHCARDS[0]]).unwrap();
        assert_eq!(nav.next(), 0);
        assert_eq!(nav.previous(), 0);
    }

    #[test]
    fn shuffle_keeps_cards_and_resets_cursor() {
        let mut nav = navigator();
        nav.next();
        nav.next();
        nav.flip();
        let mut rng = StdRng::seed_from_u64(7);
        nav.shuffle(&mut rng);

        assert_eq!(nav.cursor(), 0);
        assert!(!nav.is_revealed());

        let mut before: Vec<_> = FLASHCARDS.iter().map(|c| c.word).collect();
        let mut after = Vec::new();
        for _ in 0..nav.len() {
            after.push(nav.current().word);
            nav.next();
        }
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn flip_only_toggles_revealed() {
        let mut nav = navigator();
        nav.next();
        assert!(nav.flip());
        assert_eq!(nav.cursor(), 1);
        assert!(!nav.flip());
    }

    #[test]
    fn moving_resets_flip() {
        let mut nav = navigator();
        nav.flip();
        nav.next();
        assert!(!nav.is_revealed());
        nav.flip();
        nav.previous();
        assert!(!nav.is_revealed());
    }

    #[test]
    fn marking_moves_word_between_sets() {
        let mut nav = navigator();
        let word = nav.mark_for_review();
        assert_eq!(word, "Eloquent");
        assert_eq!(nav.cursor(), 1);
        assert_eq!(nav.review_count(), 1);

        nav.previous();
        nav.mark_known();
        assert_eq!(nav.known_count(), 1);
        assert_eq!(nav.review_count(), 0);
    }
}
