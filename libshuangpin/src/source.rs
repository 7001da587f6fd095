//! Syllable sources: where pronunciations of Han characters come from.
//!
//! The converters never guess a pronunciation themselves. They ask a
//! [`SyllableSource`] for the candidate syllables of a character and for
//! the initial/final decomposition of the canonical one. [`PinyinSource`]
//! answers from the `pinyin` crate's dictionary; tests plug in small
//! map-backed sources through the same trait.

use pinyin::{ToPinyin, ToPinyinMulti};

use crate::syllables::{normalize_syllable, split_syllable};

/// A toneless pinyin syllable split into initial and final.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syllable {
    /// Consonant initial, empty for zero-initial syllables.
    pub initial: String,
    /// Remaining vowel/nasal cluster.
    pub final_part: String,
}

impl Syllable {
    pub fn new<I: Into<String>, F: Into<String>>(initial: I, final_part: F) -> Self {
        Self {
            initial: initial.into(),
            final_part: final_part.into(),
        }
    }

    /// Split a full syllable string with the standard initial table.
    pub fn parse(full: &str) -> Self {
        let (initial, final_part) = split_syllable(full);
        Self::new(initial, final_part)
    }

    /// Initial and final concatenated.
    pub fn full(&self) -> String {
        format!("{}{}", self.initial, self.final_part)
    }

    pub fn is_zero_initial(&self) -> bool {
        self.initial.is_empty()
    }
}

/// Output style for plain pinyin conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Full toneless syllable, e.g. `zhong`.
    #[default]
    Normal,
    /// First letter of the syllable, e.g. `z`.
    FirstLetter,
}

impl Style {
    /// Render `syllable` in this style.
    pub fn apply(self, syllable: &str) -> String {
        match self {
            Style::Normal => syllable.to_string(),
            Style::FirstLetter => syllable.chars().take(1).collect(),
        }
    }
}

/// Trait that pronunciation backends must implement.
///
/// Only `pronunciations` is required. The decomposition and styling
/// methods are derived from the canonical (first) candidate and may be
/// overridden by backends that carry their own initial/final data.
pub trait SyllableSource {
    /// Candidate toneless syllables for `ch`, canonical reading first,
    /// without duplicates. Empty if `ch` has no known pronunciation.
    fn pronunciations(&self, ch: char) -> Vec<String>;

    /// The canonical (first) pronunciation of `ch`.
    fn canonical(&self, ch: char) -> Option<String> {
        self.pronunciations(ch).into_iter().next()
    }

    /// Decomposition of the canonical pronunciation.
    fn syllable(&self, ch: char) -> Option<Syllable> {
        self.canonical(ch).map(|p| Syllable::parse(&p))
    }

    /// Initial of the canonical pronunciation; empty for zero-initial or
    /// unknown characters.
    fn initial(&self, ch: char) -> String {
        self.syllable(ch).map(|s| s.initial).unwrap_or_default()
    }

    /// Final of the canonical pronunciation; empty for unknown characters.
    fn final_part(&self, ch: char) -> String {
        self.syllable(ch).map(|s| s.final_part).unwrap_or_default()
    }

    /// The canonical pronunciation of `ch` rendered in `style`.
    fn styled_char(&self, ch: char, style: Style) -> Option<String> {
        self.canonical(ch).map(|p| style.apply(&p))
    }

    /// One entry per character of `text` that has a pronunciation, in order.
    fn styled(&self, text: &str, style: Style) -> Vec<String> {
        text.chars().filter_map(|c| self.styled_char(c, style)).collect()
    }

    /// Every distinct candidate of each pronounceable character of `text`,
    /// rendered in `style`.
    fn styled_heteronyms(&self, text: &str, style: Style) -> Vec<Vec<String>> {
        text.chars()
            .map(|c| dedup(self.pronunciations(c).iter().map(|p| style.apply(p))))
            .filter(|readings| !readings.is_empty())
            .collect()
    }
}

/// Syllable source backed by the `pinyin` crate's character dictionary.
///
/// Readings are reported without tones, so heteronyms that differ only in
/// tone collapse into one candidate (`好` hǎo/hào -> `hao`).
#[derive(Debug, Clone, Copy, Default)]
pub struct PinyinSource;

impl PinyinSource {
    pub fn new() -> Self {
        Self
    }
}

impl SyllableSource for PinyinSource {
    fn pronunciations(&self, ch: char) -> Vec<String> {
        let first = ch.to_pinyin().map(|p| p.plain());
        let rest = ch
            .to_pinyin_multi()
            .into_iter()
            .flat_map(|multi| multi.into_iter().map(|p| p.plain()));

        dedup(
            first
                .into_iter()
                .chain(rest)
                .map(normalize_syllable)
                .filter(|p| !p.is_empty()),
        )
    }
}

fn dedup<I: IntoIterator<Item = String>>(items: I) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}
