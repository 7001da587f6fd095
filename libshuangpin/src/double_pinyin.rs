//! Double Pinyin (Shuangpin 双拼) encoding
//!
//! Double pinyin writes every syllable with exactly 2 keys: one for the
//! initial consonant and one for the final. This module turns Han
//! characters (through a [`SyllableSource`]) into those key pairs.
//!
//! ## Supported Schemes
//!
//! 1. **XiaoHe** (小鹤) - default, phonetic-based key layout
//! 2. **Microsoft Shuangpin** (微软双拼)
//!
//! ## How it works
//!
//! - First key: initial (shengmu 声母), `zh`/`ch`/`sh` get their own keys
//! - Second key: final (yunmu 韵母)
//! - Zero-initial syllables (`a`, `er`, `ang`, ...) have a fixed two-key
//!   spelling per scheme and are never split
//!
//! Example (XiaoHe scheme):
//! - "zh" + "ang" = "zhang" → typed as "vh" (v=zh, h=ang)
//! - "h" + "ao" = "hao" → typed as "hc" (c=ao)
//! - "ang" → typed as "ah"
//!
//! Syllables the tables cannot spell (interjections such as `ng`, `hm`)
//! fall back to their plain pinyin.

use std::fmt;
use std::str::FromStr;

use phf::phf_map;
use serde::{Deserialize, Serialize};

use crate::source::SyllableSource;
use crate::syllables::split_syllable;

/// Double pinyin schemes supported by the encoder.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DoublePinyinScheme {
    /// XiaoHe (小鹤)
    #[default]
    #[value(name = "xiaohe")]
    XiaoHe,
    /// Microsoft Shuangpin (微软双拼)
    #[value(name = "microsoft")]
    Microsoft,
}

impl DoublePinyinScheme {
    /// Get the key tables for this scheme.
    pub fn tables(&self) -> &'static SchemeTables {
        match self {
            DoublePinyinScheme::XiaoHe => &XIAOHE,
            DoublePinyinScheme::Microsoft => &MICROSOFT,
        }
    }

    pub fn name(&self) -> &'static str {
        self.tables().name
    }
}

impl fmt::Display for DoublePinyinScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DoublePinyinScheme {
    type Err = shuangpin_core::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xiaohe" | "flypy" => Ok(DoublePinyinScheme::XiaoHe),
            "microsoft" | "ms" | "mspy" => Ok(DoublePinyinScheme::Microsoft),
            other => Err(shuangpin_core::Error::UnknownScheme(other.to_string())),
        }
    }
}

/// Whether to emit both keys or only the initial key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyMode {
    #[default]
    Full,
    InitialOnly,
}

/// Key tables for one double pinyin scheme.
///
/// Every initial produced by `split_syllable` and every final of the
/// standard syllable inventory has an entry, so a miss means the input was
/// not a regular Mandarin syllable.
#[derive(Debug)]
pub struct SchemeTables {
    /// Scheme name
    pub name: &'static str,

    /// Initial -> key, e.g. "sh" -> 'u'
    pub initials: &'static phf::Map<&'static str, char>,

    /// Final -> key, e.g. "ang" -> 'h'
    pub finals: &'static phf::Map<&'static str, char>,

    /// Zero-initial syllable -> full two-key code, e.g. "ang" -> "ah"
    pub zero_initial: &'static phf::Map<&'static str, &'static str>,
}

impl SchemeTables {
    pub fn initial_key(&self, initial: &str) -> Option<char> {
        self.initials.get(initial).copied()
    }

    pub fn final_key(&self, final_part: &str) -> Option<char> {
        self.finals.get(final_part).copied()
    }

    pub fn zero_initial_code(&self, syllable: &str) -> Option<&'static str> {
        self.zero_initial.get(syllable).copied()
    }

    /// Encode a syllable that is already known, splitting it with the
    /// standard initial table.
    pub fn encode_syllable(&self, syllable: &str, mode: KeyMode) -> String {
        let (initial, final_part) = split_syllable(syllable);
        self.encode_parts(syllable, initial, final_part, mode)
    }

    /// Encode `syllable` given its decomposition.
    ///
    /// Zero-initial syllables use their fixed code. Otherwise both parts
    /// must be in the tables; if either is missing the plain syllable (or
    /// its first letter in `InitialOnly` mode) is returned instead.
    pub fn encode_parts(
        &self,
        syllable: &str,
        initial: &str,
        final_part: &str,
        mode: KeyMode,
    ) -> String {
        if let Some(code) = self.zero_initial_code(syllable) {
            return match mode {
                KeyMode::Full => code.to_string(),
                KeyMode::InitialOnly => code.chars().take(1).collect(),
            };
        }

        match (self.initial_key(initial), self.final_key(final_part)) {
            (Some(i), Some(f)) => match mode {
                KeyMode::Full => [i, f].iter().collect(),
                KeyMode::InitialOnly => i.to_string(),
            },
            _ => {
                tracing::debug!(
                    scheme = self.name,
                    syllable,
                    initial,
                    final_part,
                    "no shuangpin keys, falling back to pinyin"
                );
                match mode {
                    KeyMode::Full => syllable.to_string(),
                    KeyMode::InitialOnly => syllable.chars().take(1).collect(),
                }
            }
        }
    }
}

/// Encodes Han characters as double pinyin using a syllable source.
pub struct ShuangpinEncoder<'a, S: ?Sized> {
    source: &'a S,
    tables: &'static SchemeTables,
}

impl<'a, S: SyllableSource + ?Sized> ShuangpinEncoder<'a, S> {
    pub fn new(source: &'a S, tables: &'static SchemeTables) -> Self {
        Self { source, tables }
    }

    /// Shuangpin code for `ch`.
    ///
    /// Only the canonical (first) pronunciation is used. Returns `None` when
    /// the source knows no pronunciation for `ch`. The initial and final are
    /// taken from the source's own decomposition, never by slicing the
    /// pinyin string.
    pub fn encode(&self, ch: char, mode: KeyMode) -> Option<String> {
        let syllable = self.source.canonical(ch)?;
        if self.tables.zero_initial_code(&syllable).is_some() {
            return Some(self.tables.encode_parts(&syllable, "", &syllable, mode));
        }

        let initial = self.source.initial(ch);
        let final_part = self.source.final_part(ch);
        Some(self.tables.encode_parts(&syllable, &initial, &final_part, mode))
    }

    /// Codes for every character of `text` that has a pronunciation.
    pub fn encode_str(&self, text: &str, mode: KeyMode) -> Vec<String> {
        text.chars().filter_map(|c| self.encode(c, mode)).collect()
    }
}

static STANDARD_INITIALS: phf::Map<&'static str, char> = phf_map! {
    "b" => 'b', "p" => 'p', "m" => 'm', "f" => 'f',
    "d" => 'd', "t" => 't', "n" => 'n', "l" => 'l',
    "g" => 'g', "k" => 'k', "h" => 'h',
    "j" => 'j', "q" => 'q', "x" => 'x',
    "z" => 'z', "c" => 'c', "s" => 's', "r" => 'r',
    "zh" => 'v', "ch" => 'i', "sh" => 'u',
    "y" => 'y', "w" => 'w',
};

/// XiaoHe (小鹤) scheme
/// Popular modern scheme with phonetic-based mappings
pub static XIAOHE: SchemeTables = SchemeTables {
    name: "XiaoHe",
    initials: &STANDARD_INITIALS,
    finals: &XIAOHE_FINALS,
    zero_initial: &XIAOHE_ZERO_INITIAL,
};

static XIAOHE_FINALS: phf::Map<&'static str, char> = phf_map! {
    "a" => 'a', "o" => 'o', "e" => 'e', "i" => 'i', "u" => 'u', "v" => 'v',
    "ai" => 'd', "ei" => 'w', "ao" => 'c', "ou" => 'z',
    "an" => 'j', "en" => 'f', "ang" => 'h', "eng" => 'g',
    "ong" => 's', "iong" => 's',
    "ia" => 'x', "ua" => 'x',
    "ie" => 'p', "iao" => 'n', "iu" => 'q', "ian" => 'm', "in" => 'b',
    "iang" => 'l', "uang" => 'l',
    "ing" => 'k', "uai" => 'k',
    "uo" => 'o', "ui" => 'v', "uan" => 'r', "un" => 'y', "vn" => 'y',
    "ue" => 't', "ve" => 't',
};

static XIAOHE_ZERO_INITIAL: phf::Map<&'static str, &'static str> = phf_map! {
    "a" => "aa", "o" => "oo", "e" => "ee",
    "ai" => "ai", "ei" => "ei", "ao" => "ao", "ou" => "ou",
    "an" => "an", "en" => "en", "ang" => "ah", "eng" => "eg",
    "er" => "er",
};

/// Microsoft Shuangpin (微软双拼) scheme
/// Zero-initial syllables are typed with `o` as the initial key.
pub static MICROSOFT: SchemeTables = SchemeTables {
    name: "Microsoft",
    initials: &STANDARD_INITIALS,
    finals: &MICROSOFT_FINALS,
    zero_initial: &MICROSOFT_ZERO_INITIAL,
};

static MICROSOFT_FINALS: phf::Map<&'static str, char> = phf_map! {
    "a" => 'a', "o" => 'o', "e" => 'e', "i" => 'i', "u" => 'u', "v" => 'y',
    "ai" => 'l', "ei" => 'z', "ao" => 'k', "ou" => 'b',
    "an" => 'j', "en" => 'f', "ang" => 'h', "eng" => 'g',
    "ong" => 's', "iong" => 's',
    "ia" => 'w', "ua" => 'w',
    "ie" => 'x', "iao" => 'c', "iu" => 'q', "ian" => 'm', "in" => 'n',
    "iang" => 'd', "uang" => 'd',
    "ing" => ';', "uai" => 'y',
    "uo" => 'o', "ui" => 'v', "uan" => 'r', "un" => 'p', "vn" => 'p',
    "ue" => 't', "ve" => 'v',
};

static MICROSOFT_ZERO_INITIAL: phf::Map<&'static str, &'static str> = phf_map! {
    "a" => "oa", "o" => "oo", "e" => "oe",
    "ai" => "ol", "ei" => "oz", "ao" => "ok", "ou" => "ob",
    "an" => "oj", "en" => "of", "ang" => "oh", "eng" => "og",
    "er" => "or",
};
