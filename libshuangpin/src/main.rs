use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;

use libshuangpin::{
    process_lines, DoublePinyinScheme, LineComposer, PinyinSource, ShuangpinConfig, StreamSummary,
};

#[derive(Parser)]
#[command(name = "shuangpin")]
#[command(about = "Reads from standard input and converts Chinese characters to Pinyin")]
#[command(version)]
struct Cli {
    /// Convert to Pinyin initials
    #[arg(long)]
    initials: bool,

    /// Convert to Xiaohe Shuangpin
    #[arg(long)]
    xiaohe: bool,

    /// Print only converted text, not original text
    #[arg(long)]
    only: bool,

    /// Print every reading of characters with several pronunciations
    #[arg(long)]
    heteronym: bool,

    /// Shuangpin key layout (implies --xiaohe)
    #[arg(long, value_enum)]
    scheme: Option<DoublePinyinScheme>,

    /// TOML config file; command line flags override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// More log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn apply(&self, config: &mut ShuangpinConfig) {
        config.initials |= self.initials;
        config.xiaohe |= self.xiaohe;
        config.only |= self.only;
        config.heteronym |= self.heteronym;
        if let Some(scheme) = self.scheme {
            config.scheme = scheme;
            config.xiaohe = true;
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn report_read_error<W: Write>(summary: &StreamSummary, mut err: W) -> io::Result<()> {
    if let Some(e) = &summary.read_error {
        writeln!(err, "reading standard input: {}", e)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => ShuangpinConfig::load_toml(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ShuangpinConfig::default(),
    };
    cli.apply(&mut config);
    tracing::info!(
        options = ?config.compose_options(),
        scheme = config.scheme_tables().name,
        "starting conversion"
    );

    let source = PinyinSource::new();
    let composer = LineComposer::new(&source, config.segmenter(), config.compose_options());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = process_lines(&composer, stdin.lock(), stdout.lock())
        .context("failed to write output")?;

    report_read_error(&summary, io::stderr().lock())?;
    tracing::info!(lines = summary.lines, "done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merged(args: &[&str], config: &str) -> ShuangpinConfig {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        let mut cfg = ShuangpinConfig::from_toml_str(config).unwrap();
        cli.apply(&mut cfg);
        cfg
    }

    #[test]
    fn scheme_flag_selects_layout_and_enables_shuangpin() {
        let cfg = merged(&["shuangpin", "--scheme", "microsoft"], "");
        assert!(cfg.xiaohe);
        assert_eq!(cfg.scheme, DoublePinyinScheme::Microsoft);
        assert!(!cfg.initials && !cfg.only && !cfg.heteronym);
    }

    #[test]
    fn config_file_settings_survive_without_flags() {
        let cfg = merged(&["shuangpin"], "only = true\nscheme = \"microsoft\"\n");
        assert!(cfg.only);
        assert!(!cfg.xiaohe);
        assert_eq!(cfg.scheme, DoublePinyinScheme::Microsoft);
    }

    #[test]
    fn flags_switch_options_on_over_config() {
        let cfg = merged(&["shuangpin", "--initials", "--xiaohe", "--heteronym"], "only = true");
        assert!(cfg.initials && cfg.xiaohe && cfg.heteronym && cfg.only);
        let opts = cfg.compose_options();
        assert!(opts.initials && opts.xiaohe);
    }

    #[test]
    fn unknown_scheme_flag_is_rejected() {
        assert!(Cli::try_parse_from(["shuangpin", "--scheme", "ziranma"]).is_err());
    }

    #[test]
    fn read_error_is_reported_once() {
        let mut err = Vec::new();
        report_read_error(&StreamSummary::default(), &mut err).unwrap();
        assert!(err.is_empty());

        let summary = StreamSummary {
            lines: 3,
            read_error: Some(io::Error::new(io::ErrorKind::Other, "device gone")),
        };
        report_read_error(&summary, &mut err).unwrap();
        assert_eq!(String::from_utf8(err).unwrap(), "reading standard input: device gone\n");
    }

    #[test]
    fn verbosity_counts_repeated_flags() {
        let cli = Cli::try_parse_from(["shuangpin", "-vv", "-c", "cfg.toml"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("cfg.toml")));
    }
}
