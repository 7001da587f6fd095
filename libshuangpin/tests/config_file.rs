// libshuangpin/tests/config_file.rs
//
// Loading a ShuangpinConfig from disk and converting with it.

use libshuangpin::{DoublePinyinScheme, Error, LineComposer, PinyinSource, ShuangpinConfig};

#[test]
fn config_file_drives_the_composer() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shuangpin.toml");
    std::fs::write(&path, "xiaohe = true\nonly = true\npunctuation_in_runs = false\n").unwrap();

    let cfg = ShuangpinConfig::load_toml(&path).unwrap();
    assert_eq!(cfg.scheme, DoublePinyinScheme::XiaoHe);

    let source = PinyinSource::new();
    let composer = LineComposer::new(&source, cfg.segmenter(), cfg.compose_options());
    // Punctuation stays in the gap between the two runs and is folded there.
    assert_eq!(composer.compose("你好，世界"), "ni hc , ui jp");
}

#[test]
fn saved_config_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.toml");

    let mut cfg = ShuangpinConfig::default();
    cfg.initials = true;
    cfg.heteronym = true;
    cfg.save_toml(&path).unwrap();

    assert_eq!(ShuangpinConfig::load_toml(&path).unwrap(), cfg);
}

#[test]
fn broken_config_reports_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "xiaohe = [").unwrap();

    let err = ShuangpinConfig::load_toml(&path).unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
}
