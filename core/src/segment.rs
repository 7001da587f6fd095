// core/src/segment.rs
//
// Han run segmentation.
//
// A line of mixed text is scanned once; every code point is classified as
// Han, run punctuation or other, and maximal stretches of Han/punctuation
// become `HanRun`s. Runs are the unit of replacement for the converters in
// libshuangpin; the gaps between them are left for normalization.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::Config;

static HAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{Han}$").expect("valid Han pattern"));

/// Classification of a single code point for segmentation purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Unicode `Han` script.
    Han,
    /// Punctuation allowed inside a run (e.g. `，` next to Han text).
    Punctuation,
    /// Anything else; terminates a run.
    Other,
}

/// True if `ch` belongs to the Unicode `Han` script.
pub fn is_han(ch: char) -> bool {
    let mut buf = [0u8; 4];
    HAN.is_match(ch.encode_utf8(&mut buf))
}

/// A maximal run of Han text (plus run punctuation) inside a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HanRun<'a> {
    /// Byte offset of the first character of the run.
    pub start: usize,
    /// Byte offset one past the last character of the run.
    pub end: usize,
    /// The run text, `&line[start..end]`.
    pub text: &'a str,
}

/// A slice of a segmented line: either text between runs or a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    Gap(&'a str),
    Run(HanRun<'a>),
}

impl<'a> Piece<'a> {
    pub fn as_str(&self) -> &'a str {
        match *self {
            Piece::Gap(s) => s,
            Piece::Run(run) => run.text,
        }
    }
}

/// Splits lines into Han runs.
///
/// Punctuation only extends a run; a stretch made solely of punctuation is
/// not a run, so `"，，"` on its own produces nothing.
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    punctuation: Vec<char>,
}

impl Segmenter {
    /// Segmenter whose runs may also contain the given punctuation marks.
    pub fn new<I: IntoIterator<Item = char>>(punctuation: I) -> Self {
        let mut punctuation: Vec<char> = punctuation.into_iter().filter(|c| !is_han(*c)).collect();
        punctuation.sort_unstable();
        punctuation.dedup();
        Self { punctuation }
    }

    /// Segmenter that only groups Han characters.
    pub fn han_only() -> Self {
        Self::default()
    }

    /// Build a segmenter from the run settings in `config`.
    pub fn from_config(config: &Config) -> Self {
        if config.punctuation_in_runs {
            Self::new(config.run_punctuation.chars())
        } else {
            Self::han_only()
        }
    }

    /// Punctuation marks accepted inside runs, sorted.
    pub fn punctuation(&self) -> &[char] {
        &self.punctuation
    }

    pub fn classify(&self, ch: char) -> CharClass {
        if is_han(ch) {
            CharClass::Han
        } else if self.punctuation.binary_search(&ch).is_ok() {
            CharClass::Punctuation
        } else {
            CharClass::Other
        }
    }

    /// Ordered, non-overlapping Han runs of `line`.
    pub fn segment<'a>(&self, line: &'a str) -> Vec<HanRun<'a>> {
        let mut runs = Vec::new();
        // (start offset, run contains Han)
        let mut open: Option<(usize, bool)> = None;

        for (pos, ch) in line.char_indices() {
            match self.classify(ch) {
                CharClass::Other => {
                    if let Some((start, true)) = open.take() {
                        runs.push(HanRun { start, end: pos, text: &line[start..pos] });
                    }
                }
                class => {
                    let han = class == CharClass::Han;
                    open = match open {
                        Some((start, seen)) => Some((start, seen || han)),
                        None => Some((pos, han)),
                    };
                }
            }
        }

        if let Some((start, true)) = open {
            runs.push(HanRun { start, end: line.len(), text: &line[start..] });
        }

        runs
    }

    /// Runs of `line` interleaved with the gaps between them.
    ///
    /// Concatenating `as_str()` of every piece yields `line` again. Empty
    /// gaps are omitted.
    pub fn pieces<'a>(&self, line: &'a str) -> Vec<Piece<'a>> {
        let mut pieces = Vec::new();
        let mut cursor = 0;
        for run in self.segment(line) {
            if run.start > cursor {
                pieces.push(Piece::Gap(&line[cursor..run.start]));
            }
            cursor = run.end;
            pieces.push(Piece::Run(run));
        }
        if cursor < line.len() {
            pieces.push(Piece::Gap(&line[cursor..]));
        }
        pieces
    }
}
