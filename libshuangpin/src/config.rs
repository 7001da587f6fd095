/// Shuangpin-specific configuration that extends the base `Config` from core.
///
/// This configuration includes:
/// - All segmentation options from `shuangpin_core::Config` (flattened via serde)
/// - Output style switches (initials, double pinyin, converted-only, heteronyms)
/// - The double pinyin scheme
///
/// # Example
///
/// ```rust
/// use libshuangpin::ShuangpinConfig;
///
/// let config = ShuangpinConfig::from_toml_str("xiaohe = true\ninitials = true").unwrap();
/// assert!(config.compose_options().xiaohe);
/// ```
use serde::{Deserialize, Serialize};
use shuangpin_core::{Result, Segmenter};

use crate::compose::ComposeOptions;
use crate::double_pinyin::{DoublePinyinScheme, SchemeTables};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ShuangpinConfig {
    /// Base configuration fields (run punctuation)
    #[serde(flatten)]
    pub base: shuangpin_core::Config,

    /// Emit initials only
    pub initials: bool,

    /// Emit double pinyin codes instead of full pinyin
    pub xiaohe: bool,

    /// Print converted text only
    pub only: bool,

    /// Print every reading of heteronyms in pinyin mode
    pub heteronym: bool,

    /// Double pinyin scheme ("xiaohe" or "microsoft")
    pub scheme: DoublePinyinScheme,
}

impl ShuangpinConfig {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded shuangpin config");
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Convert this config into the base config.
    pub fn into_base(self) -> shuangpin_core::Config {
        self.base
    }

    /// Get a reference to the base config
    pub fn base(&self) -> &shuangpin_core::Config {
        &self.base
    }

    /// Get a mutable reference to the base config
    pub fn base_mut(&mut self) -> &mut shuangpin_core::Config {
        &mut self.base
    }

    /// Output options for a `LineComposer`.
    pub fn compose_options(&self) -> ComposeOptions {
        ComposeOptions {
            initials: self.initials,
            xiaohe: self.xiaohe,
            only: self.only,
            heteronym: self.heteronym,
            scheme: self.scheme,
        }
    }

    /// Key tables of the configured scheme.
    pub fn scheme_tables(&self) -> &'static SchemeTables {
        self.scheme.tables()
    }

    /// Segmenter described by the base config.
    pub fn segmenter(&self) -> Segmenter {
        self.base.segmenter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_plain_pinyin() {
        let cfg = ShuangpinConfig::default();
        let opts = cfg.compose_options();
        assert!(!opts.initials && !opts.xiaohe && !opts.only && !opts.heteronym);
        assert_eq!(opts.scheme, DoublePinyinScheme::XiaoHe);
        assert!(cfg.base().punctuation_in_runs);
    }

    #[test]
    fn flattened_base_fields_parse() {
        let cfg = ShuangpinConfig::from_toml_str(
            "punctuation_in_runs = false\nxiaohe = true\nscheme = \"microsoft\"\n",
        )
        .unwrap();
        assert!(!cfg.base.punctuation_in_runs);
        assert!(cfg.xiaohe);
        assert_eq!(cfg.scheme, DoublePinyinScheme::Microsoft);
        assert_eq!(cfg.scheme_tables().name, "Microsoft");
    }

    #[test]
    fn round_trips_through_toml() {
        let mut cfg = ShuangpinConfig::default();
        cfg.only = true;
        cfg.scheme = DoublePinyinScheme::Microsoft;
        cfg.base_mut().run_punctuation = "，".to_string();
        let text = cfg.to_toml_string().unwrap();
        assert_eq!(ShuangpinConfig::from_toml_str(&text).unwrap(), cfg);
    }

    #[test]
    fn unknown_scheme_is_rejected() {
        assert!(ShuangpinConfig::from_toml_str("scheme = \"ziranma\"").is_err());
    }
}
