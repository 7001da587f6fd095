// libshuangpin/tests/mock_source.rs
//
// Encoder and composer behaviour with a hand-written syllable source, so
// fallback and missing-pronunciation paths can be driven directly.

use std::collections::HashMap;

use libshuangpin::{
    ComposeOptions, KeyMode, LineComposer, Segmenter, ShuangpinEncoder, SyllableSource, XIAOHE,
};

// Mock source: fixed readings plus an optional override of the
// initial/final decomposition.
#[derive(Default)]
struct MockSource {
    readings: HashMap<char, Vec<&'static str>>,
    parts: HashMap<char, (&'static str, &'static str)>,
}

impl MockSource {
    fn with(mut self, ch: char, readings: &[&'static str]) -> Self {
        self.readings.insert(ch, readings.to_vec());
        self
    }

    fn split(mut self, ch: char, initial: &'static str, final_part: &'static str) -> Self {
        self.parts.insert(ch, (initial, final_part));
        self
    }
}

impl SyllableSource for MockSource {
    fn pronunciations(&self, ch: char) -> Vec<String> {
        self.readings
            .get(&ch)
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .unwrap_or_default()
    }

    fn initial(&self, ch: char) -> String {
        match self.parts.get(&ch) {
            Some((initial, _)) => initial.to_string(),
            None => self.syllable(ch).map(|s| s.initial).unwrap_or_default(),
        }
    }

    fn final_part(&self, ch: char) -> String {
        match self.parts.get(&ch) {
            Some((_, final_part)) => final_part.to_string(),
            None => self.syllable(ch).map(|s| s.final_part).unwrap_or_default(),
        }
    }
}

#[test]
fn uses_first_candidate_only() {
    let src = MockSource::default().with('长', &["chang", "zhang"]);
    let enc = ShuangpinEncoder::new(&src, &XIAOHE);
    assert_eq!(enc.encode('长', KeyMode::Full).as_deref(), Some("ih"));
    assert_eq!(enc.encode('长', KeyMode::InitialOnly).as_deref(), Some("i"));
}

#[test]
fn decomposition_comes_from_the_source() {
    // A source that reports "z" + "hang" instead of "zh" + "ang".
    let src = MockSource::default().with('张', &["zhang"]).split('张', "z", "hang");
    let enc = ShuangpinEncoder::new(&src, &XIAOHE);
    // "hang" is not a final, so the raw syllable comes back.
    assert_eq!(enc.encode('张', KeyMode::Full).as_deref(), Some("zhang"));
}

#[test]
fn table_miss_falls_back_to_pinyin() {
    let src = MockSource::default().with('嗯', &["ng"]).with('呣', &["m"]);
    let enc = ShuangpinEncoder::new(&src, &XIAOHE);
    assert_eq!(enc.encode('嗯', KeyMode::Full).as_deref(), Some("ng"));
    assert_eq!(enc.encode('嗯', KeyMode::InitialOnly).as_deref(), Some("n"));
    assert_eq!(enc.encode('呣', KeyMode::Full).as_deref(), Some("m"));
}

#[test]
fn zero_initial_skips_decomposition() {
    // Even a nonsense split is ignored for zero-initial syllables.
    let src = MockSource::default().with('昂', &["ang"]).split('昂', "x", "x");
    let enc = ShuangpinEncoder::new(&src, &XIAOHE);
    assert_eq!(enc.encode('昂', KeyMode::Full).as_deref(), Some("ah"));
}

#[test]
fn table_path_is_two_keys_and_never_empty() {
    let src = MockSource::default()
        .with('中', &["zhong"])
        .with('国', &["guo"])
        .with('女', &["nv"]);
    let enc = ShuangpinEncoder::new(&src, &XIAOHE);
    for ch in ['中', '国', '女'] {
        let code = enc.encode(ch, KeyMode::Full).unwrap();
        assert_eq!(code.chars().count(), 2, "{ch} -> {code}");
    }
    assert_eq!(enc.encode_str("中国女", KeyMode::Full), vec!["vs", "go", "nv"]);
}

#[test]
fn unknown_character_emits_nothing() {
    let src = MockSource::default().with('你', &["ni"]);
    let enc = ShuangpinEncoder::new(&src, &XIAOHE);
    assert_eq!(enc.encode('𠀀', KeyMode::Full), None);

    let composer = LineComposer::new(
        &src,
        Segmenter::han_only(),
        ComposeOptions { xiaohe: true, ..Default::default() },
    );
    assert_eq!(composer.compose("你𠀀"), "你𠀀\tni");
}

#[test]
fn styled_output_uses_source_readings() {
    let src = MockSource::default().with('乐', &["le", "yue"]);
    let plain = LineComposer::new(&src, Segmenter::han_only(), ComposeOptions::default());
    assert_eq!(plain.convert("快乐"), "le");

    let all = LineComposer::new(
        &src,
        Segmenter::han_only(),
        ComposeOptions { heteronym: true, ..Default::default() },
    );
    assert_eq!(all.convert("乐"), "le yue");
}
