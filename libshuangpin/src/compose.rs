// libshuangpin/src/compose.rs
//
// Line composer: splices converted Han runs back into a line and decides
// what gets printed for it.
//
// Pipeline per line:
//   segment -> expand each run (shuangpin codes or styled pinyin, run
//   punctuation folded to ASCII) -> fold full-width text in the gaps ->
//   collapse whitespace -> pair with the original line.
//
// No state is kept between lines.

use shuangpin_core::{collapse_whitespace, half_width, is_han, to_half_width, Piece, Segmenter};

use crate::double_pinyin::{DoublePinyinScheme, KeyMode, ShuangpinEncoder};
use crate::source::{Style, SyllableSource};

/// Output options for a composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComposeOptions {
    /// Emit only initials (first letter / first key) per character.
    pub initials: bool,
    /// Emit double pinyin codes instead of full pinyin.
    pub xiaohe: bool,
    /// Print the converted text alone, without the original line.
    pub only: bool,
    /// In pinyin mode, print every distinct reading of a character.
    pub heteronym: bool,
    /// Key tables used when `xiaohe` is set.
    pub scheme: DoublePinyinScheme,
}

impl ComposeOptions {
    pub fn style(&self) -> Style {
        if self.initials {
            Style::FirstLetter
        } else {
            Style::Normal
        }
    }

    pub fn key_mode(&self) -> KeyMode {
        if self.initials {
            KeyMode::InitialOnly
        } else {
            KeyMode::Full
        }
    }
}

/// Converts lines of mixed text using a syllable source.
pub struct LineComposer<'a, S: ?Sized> {
    source: &'a S,
    segmenter: Segmenter,
    options: ComposeOptions,
}

impl<'a, S: SyllableSource + ?Sized> LineComposer<'a, S> {
    pub fn new(source: &'a S, segmenter: Segmenter, options: ComposeOptions) -> Self {
        Self {
            source,
            segmenter,
            options,
        }
    }

    /// The converted form of `line`.
    ///
    /// Every Han run is replaced by its space-separated tokens, padded with
    /// a space on each side; text between runs is folded to half-width.
    /// Whitespace is collapsed and trimmed afterwards.
    pub fn convert(&self, line: &str) -> String {
        let mut out = String::with_capacity(line.len() * 2);
        for piece in self.segmenter.pieces(line) {
            match piece {
                Piece::Gap(text) => out.push_str(&to_half_width(text)),
                Piece::Run(run) => {
                    out.push(' ');
                    out.push_str(&self.expand_run(run.text));
                    out.push(' ');
                }
            }
        }
        collapse_whitespace(&out)
    }

    /// The output record for `line`, without the trailing newline.
    ///
    /// `only` mode always prints the converted text. Otherwise the line is
    /// printed as `original\tconverted` when conversion changed it, and
    /// unchanged when it did not.
    pub fn compose(&self, line: &str) -> String {
        let converted = self.convert(line);
        if self.options.only {
            converted
        } else if converted != line {
            format!("{}\t{}", line, converted)
        } else {
            line.to_string()
        }
    }

    fn expand_run(&self, run: &str) -> String {
        tracing::debug!(run, "expanding han run");
        let tokens: Vec<String> = run
            .chars()
            .filter_map(|ch| {
                if is_han(ch) {
                    self.convert_han(ch)
                } else {
                    Some(half_width(ch).unwrap_or(ch).to_string())
                }
            })
            .collect();
        tokens.join(" ")
    }

    fn convert_han(&self, ch: char) -> Option<String> {
        if self.options.xiaohe {
            let encoder = ShuangpinEncoder::new(self.source, self.options.scheme.tables());
            return encoder.encode(ch, self.options.key_mode());
        }

        let style = self.options.style();
        if self.options.heteronym {
            let readings = self
                .source
                .styled_heteronyms(ch.encode_utf8(&mut [0u8; 4]), style)
                .into_iter()
                .next()?;
            Some(readings.join(" "))
        } else {
            self.source.styled_char(ch, style)
        }
    }
}
