use clap::{Parser, Subcommand};
use itertools::Itertools;
use readability_scores::{
    config::{Config, ConfigStore, FileConfigStore},
    report::{write_report, ReportFormat, Scored},
    sample::{ScoredSample, DEFAULT_TOLERANCE},
    Metric, ReadabilityEngine, ReadabilityError, UnicodeSegmenter,
};
use std::{
    error::Error,
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process::ExitCode,
};
use tracing_subscriber::EnvFilter;

/// readability metrics for english text
#[derive(Parser, Debug)]
#[clap(
    version,
    about,
    long_about = "Scores English text with Flesch-Kincaid grade level and reading ease, Coleman-Liau, ARI, SMOG, Dale-Chall and FORCAST."
)]
pub struct Cli {
    /// config file to use instead of the platform default
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    /// familiar-word list to use instead of the bundled dale-chall list (.json or one word per line)
    #[clap(long, global = true)]
    word_list: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// score text files, or stdin when no files are given
    Score {
        files: Vec<PathBuf>,

        /// output format
        #[clap(short = 'f', long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,

        /// only report this metric (repeatable)
        #[clap(short = 'm', long = "metric", value_parser = parse_metric)]
        metrics: Vec<Metric>,

        /// score the text exactly as given, without collapsing whitespace
        #[clap(long)]
        keep_whitespace: bool,
    },

    /// score reference samples and report metrics outside the tolerance
    Check {
        #[clap(required = true)]
        samples: Vec<PathBuf>,

        /// allowed relative error
        #[clap(short = 't', long, default_value_t = DEFAULT_TOLERANCE)]
        tolerance: f64,
    },

    /// print the effective configuration
    Config {
        /// save it to the config file
        #[clap(long)]
        write: bool,
    },
}

fn parse_metric(name: &str) -> Result<Metric, String> {
    Metric::from_name(name).ok_or_else(|| {
        format!(
            "unknown metric '{name}', expected one of: {}",
            Metric::ALL.iter().join(", ")
        )
    })
}

impl Cli {
    fn store(&self) -> FileConfigStore {
        match &self.config {
            Some(path) => FileConfigStore::with_path(path),
            None => FileConfigStore::new(),
        }
    }

    fn to_config(&self, store: &FileConfigStore) -> Config {
        let mut cfg = store.load();
        if let Some(path) = &self.word_list {
            cfg.word_list = Some(path.clone());
        }
        cfg
    }
}

fn normalize(text: &str, collapse_whitespace: bool) -> String {
    if collapse_whitespace {
        text.split_whitespace().join(" ")
    } else {
        text.to_string()
    }
}

fn read_input(path: &Path) -> Result<String, ReadabilityError> {
    fs::read_to_string(path).map_err(|e| ReadabilityError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

fn run_score(
    cfg: &Config,
    files: &[PathBuf],
    format: ReportFormat,
    metrics: &[Metric],
    keep_whitespace: bool,
) -> Result<ExitCode, Box<dyn Error>> {
    let engine = ReadabilityEngine::from_config(cfg)?;
    let collapse = cfg.collapse_whitespace && !keep_whitespace;

    let inputs = if files.is_empty() {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        vec![("-".to_string(), text)]
    } else {
        files
            .iter()
            .map(|path| Ok((path.display().to_string(), read_input(path)?)))
            .collect::<Result<Vec<_>, ReadabilityError>>()?
    };

    let rows: Vec<Scored> = inputs
        .into_iter()
        .map(|(source, text)| Scored {
            source,
            result: engine.score_text(&normalize(&text, collapse), &UnicodeSegmenter),
        })
        .collect();

    let metrics = if metrics.is_empty() {
        Metric::ALL.to_vec()
    } else {
        metrics.to_vec()
    };

    write_report(io::stdout().lock(), format, &rows, &metrics)?;
    Ok(ExitCode::SUCCESS)
}

fn run_check(
    cfg: &Config,
    samples: &[PathBuf],
    tolerance: f64,
) -> Result<ExitCode, Box<dyn Error>> {
    let engine = ReadabilityEngine::from_config(cfg)?;
    let mut failed = 0;

    for path in samples {
        let sample = ScoredSample::from_path(path)?;
        let text = normalize(&sample.text, cfg.collapse_whitespace);
        let actual = engine.score_text(&text, &UnicodeSegmenter);
        let deviations = sample.deviations(&actual, tolerance);

        if deviations.is_empty() {
            println!("ok    {}", path.display());
            continue;
        }

        failed += 1;
        println!("FAIL  {}", path.display());
        for d in deviations {
            println!(
                "      {}: expected {:.2}, got {:.2}",
                d.metric, d.expected, d.actual
            );
        }
    }

    if failed > 0 {
        eprintln!(
            "{failed} of {} samples outside tolerance {tolerance}",
            samples.len()
        );
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn run_config(
    store: &FileConfigStore,
    cfg: &Config,
    write: bool,
) -> Result<ExitCode, Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(cfg)?);
    if write {
        store.save(cfg)?;
        eprintln!("saved to {}", store.path().display());
    }
    Ok(ExitCode::SUCCESS)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    init_tracing();

    let cli = Cli::parse();
    let store = cli.store();
    let cfg = cli.to_config(&store);

    match &cli.command {
        Command::Score {
            files,
            format,
            metrics,
            keep_whitespace,
        } => run_score(&cfg, files, *format, metrics, *keep_whitespace),
        Command::Check { samples, tolerance } => run_check(&cfg, samples, *tolerance),
        Command::Config { write } => run_config(&store, &cfg, *write),
    }
}
