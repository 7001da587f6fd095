//! libshuangpin crate root
//!
//! This crate annotates Chinese text with pinyin or double pinyin
//! (shuangpin). It composes the text handling from `shuangpin-core` with a
//! pronunciation backend and the shuangpin key tables.
//!
//! Public API exported here:
//! - `SyllableSource`, `PinyinSource`, `Syllable`, `Style` from `source`
//! - `ShuangpinEncoder`, `DoublePinyinScheme`, `SchemeTables`, `KeyMode` from `double_pinyin`
//! - `LineComposer`, `ComposeOptions` from `compose`
//! - `process_lines` from `stream`
//! - `ShuangpinConfig` from `config`

pub mod compose;
pub mod config;
pub mod double_pinyin;
pub mod source;
pub mod stream;
pub mod syllables;

// Re-export the shared text handling from core.
pub use shuangpin_core::{
    collapse_whitespace, to_half_width, Config, Error, HanRun, Result, Segmenter,
};

// Convenience re-exports for common types used by callers.
pub use compose::{ComposeOptions, LineComposer};
pub use config::ShuangpinConfig;
pub use double_pinyin::{
    DoublePinyinScheme, KeyMode, SchemeTables, ShuangpinEncoder, MICROSOFT, XIAOHE,
};
pub use source::{PinyinSource, Style, Syllable, SyllableSource};
pub use stream::{process_lines, StreamSummary};
pub use syllables::{split_syllable, PINYIN_SYLLABLES};
