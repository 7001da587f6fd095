//! shuangpin-core
//!
//! Text handling shared by the transliteration crates: full-width folding,
//! Han run segmentation, whitespace cleanup, the base configuration and the
//! error type.
//!
//! Public API:
//! - `to_half_width` / `half_width` - full-width to ASCII folding
//! - `Segmenter` / `HanRun` / `Piece` - Han run segmentation
//! - `collapse_whitespace` - whitespace cleanup for converted lines
//! - `Config` - run segmentation settings, TOML backed
//! - `Error` / `Result`
use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

pub mod width;
pub use width::{half_width, is_full_width, to_half_width};

pub mod segment;
pub use segment::{is_han, CharClass, HanRun, Piece, Segmenter};

pub mod text;
pub use text::collapse_whitespace;

/// CJK punctuation accepted inside Han runs by default.
pub const DEFAULT_RUN_PUNCTUATION: &str = "，。！？：；（）【】";

/// Generic configuration for line segmentation.
///
/// Language-specific options (output style, shuangpin scheme) live in
/// `ShuangpinConfig` in libshuangpin, which flattens this struct.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Let CJK punctuation adjacent to Han text join the Han run, so it is
    /// emitted as a separate half-width token ("你好，" -> "ni hao ,").
    pub punctuation_in_runs: bool,

    /// The punctuation marks allowed inside runs when `punctuation_in_runs`
    /// is set.
    pub run_punctuation: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            punctuation_in_runs: true,
            run_punctuation: DEFAULT_RUN_PUNCTUATION.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded segmentation config");
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Build the segmenter described by this configuration.
    pub fn segmenter(&self) -> Segmenter {
        Segmenter::from_config(self)
    }
}
