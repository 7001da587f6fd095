//! Line-by-line driver used by the `shuangpin` binary.

use std::io::{self, BufRead, Write};

use crate::compose::LineComposer;
use crate::source::SyllableSource;

/// Outcome of streaming a reader through a composer.
#[derive(Debug, Default)]
pub struct StreamSummary {
    /// Number of lines written.
    pub lines: usize,
    /// The read error that stopped the loop, if input did not end cleanly.
    pub read_error: Option<io::Error>,
}

/// Compose every line of `reader` and write the records to `writer`.
///
/// A failed read (I/O error, invalid UTF-8) ends the loop but is not an
/// error of this function: what was already written stands and the error
/// is handed back in the summary. Write failures are returned.
pub fn process_lines<S, R, W>(
    composer: &LineComposer<'_, S>,
    reader: R,
    mut writer: W,
) -> io::Result<StreamSummary>
where
    S: SyllableSource + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut summary = StreamSummary::default();

    for line in reader.lines() {
        match line {
            Ok(line) => {
                writeln!(writer, "{}", composer.compose(&line))?;
                summary.lines += 1;
            }
            Err(e) => {
                tracing::error!(error = %e, lines = summary.lines, "failed to read input");
                summary.read_error = Some(e);
                break;
            }
        }
    }

    writer.flush()?;
    Ok(summary)
}
