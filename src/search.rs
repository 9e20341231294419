// ============================================
// src/search.rs
// 単語リストの検索とカテゴリ絞り込み
// ============================================

use std::fmt;

use crate::words::{WordListEntry, WordType};

/// カテゴリボタン1つ分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Kind(WordType),
}

impl CategoryFilter {
    pub fn matches(self, entry: &WordListEntry) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Kind(kind) => entry.kind == kind,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Kind(kind) => write!(f, "{kind}"),
        }
    }
}

/// 大文字小文字を無視した部分一致
fn matches_query(entry: &WordListEntry, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    entry
        .display_text()
        .to_lowercase()
        .contains(&query.to_lowercase())
}

/// テキスト検索。空のクエリなら全件をそのままの順で返す
pub fn filter_by_text<'a, 'q, I>(
    entries: I,
    query: &'q str,
) -> impl Iterator<Item = &'a WordListEntry> + use<'a, 'q, I>
where
    I: IntoIterator<Item = &'a WordListEntry>,
{
    entries.into_iter().filter(move |e| matches_query(e, query))
}

/// カテゴリ (品詞) での絞り込み
pub fn filter_by_category<'a, I>(
    entries: I,
    category: CategoryFilter,
) -> impl Iterator<Item = &'a WordListEntry>
where
    I: IntoIterator<Item = &'a WordListEntry>,
{
    entries.into_iter().filter(move |e| category.matches(e))
}

/// 検索とカテゴリの両方に合う単語
pub fn visible<'a, 'q>(
    entries: &'a [WordListEntry],
    query: &'q str,
    category: CategoryFilter,
) -> impl Iterator<Item = &'a WordListEntry> + use<'a, 'q> {
    filter_by_category(filter_by_text(entries, query), category)
}

/// カテゴリボタン群。常にどれか1つだけがアクティブ
#[derive(Debug, Clone)]
pub struct CategorySelector {
    options: Vec<CategoryFilter>,
    active: usize,
}

impl Default for CategorySelector {
    fn default() -> Self {
        let mut options = vec![CategoryFilter::All];
        options.extend(WordType::ALL.into_iter().map(CategoryFilter::Kind));
        Self { options, active: 0 }
    }
}

impl CategorySelector {
    pub fn options(&self) -> &[CategoryFilter] {
        &self.options
    }

    pub fn active(&self) -> CategoryFilter {
        self.options[self.active]
    }

    pub fn is_active(&self, filter: CategoryFilter) -> bool {
        self.active() == filter
    }

    /// 指定のカテゴリを選び、他は全部非アクティブにする
    pub fn select(&mut self, filter: CategoryFilter) -> CategoryFilter {
        if let Some(idx) = self.options.iter().position(|f| *f == filter) {
            self.active = idx;
        }
        self.active()
    }

    pub fn select_next(&mut self) -> CategoryFilter {
        self.active = (self.active + 1) % self.options.len();
        self.active()
    }

    pub fn select_previous(&mut self) -> CategoryFilter {
        self.active = if self.active == 0 {
            self.options.len() - 1
        } else {
            self.active - 1
        };
        self.active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::WORD_LIST;

    #[test]
    fn empty_query_returns_everything_in_order() {
        let all: Vec<_> = filter_by_text(WORD_LIST, "").collect();
        assert_eq!(all.len(), WORD_LIST.len());
        assert!(all.iter().zip(WORD_LIST).all(|(a, b)| *a == b));
    }

    #[test]
    fn unmatched_query_returns_nothing() {
        assert_eq!(filter_by_text(WORD_LIST, "zz-no-match").count(), 0);
    }

    #[test]
    fn query_is_case_insensitive() {
        let hits: Vec<_> = filter_by_text(WORD_LIST, "BEAUTIFUL").map(|e| e.word).collect();
        assert!(hits.contains(&"Beautiful"));
    }

    #[test]
    fn query_matches_meaning_and_type() {
        assert!(filter_by_text(WORD_LIST, "pleasing to look").any(|e| e.word == "Beautiful"));
        assert!(filter_by_text(WORD_LIST, "adverb").all(|e| {
            e.kind == WordType::Adverb || e.display_text().to_lowercase().contains("adverb")
        }));
    }

    #[test]
    fn category_is_an_exact_tag_match() {
        let verbs: Vec<_> =
            filter_by_category(WORD_LIST, CategoryFilter::Kind(WordType::Verb)).collect();
        assert!(!verbs.is_empty());
        assert!(verbs.iter().all(|e| e.kind == WordType::Verb));
        assert_eq!(filter_by_category(WORD_LIST, CategoryFilter::All).count(), WORD_LIST.len());
    }

    #[test]
    fn query_borrow_does_not_limit_results() {
        let hits: Vec<&'static WordListEntry> = {
            let query = String::from("bechaini");
            visible(WORD_LIST, &query, CategoryFilter::All).collect()
        };
        assert_eq!(hits.len(), 1);
        assert!(filter_by_text(WORD_LIST, "takkar").count() >= 1);
    }

    #[test]
    fn visible_combines_both_filters() {
        let hits: Vec<_> =
            visible(WORD_LIST, "quick", CategoryFilter::Kind(WordType::Adverb)).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].word, "Quickly");
        assert_eq!(
            visible(WORD_LIST, "quick", CategoryFilter::Kind(WordType::Noun)).count(),
            0
        );
    }

    #[test]
    fn selector_is_single_select() {
        let mut selector = CategorySelector::default();
        assert_eq!(selector.active(), CategoryFilter::All);

        selector.select(CategoryFilter::Kind(WordType::Noun));
        let active: Vec<_> = selector
            .options()
            .iter()
            .filter(|f| selector.is_active(**f))
            .collect();
        assert_eq!(active, vec![&CategoryFilter::Kind(WordType::Noun)]);
    }

    #[test]
    fn selector_cycles_both_ways() {
        let mut selector = CategorySelector::default();
        assert_eq!(selector.select_previous(), CategoryFilter::Kind(WordType::Adverb));
        assert_eq!(selector.select_next(), CategoryFilter::All);
        assert_eq!(selector.select_next(), CategoryFilter::Kind(WordType::Noun));
    }
}
