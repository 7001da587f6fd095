//! Error type shared by the shuangpin crates.

use thiserror::Error;

/// Errors raised while loading configuration or streaming lines.
///
/// Phonetic lookups never fail: unmapped syllables fall back to plain
/// pinyin instead of surfacing here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("cannot serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("unknown shuangpin scheme: {0}")]
    UnknownScheme(String),
}

pub type Result<T> = std::result::Result<T, Error>;
