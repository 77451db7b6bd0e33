use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "ingredient-normalizr",
    about = "Normalize free-text ingredient lists into canonical dictionary forms",
    version
)]
pub struct Cli {
    /// Input spreadsheet (must contain the configured ingredients column)
    #[arg(default_value = "data/database.xlsx")]
    pub input: PathBuf,

    /// Output spreadsheet [default: <input stem>_normalized.xlsx beside the input]
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Config file [default: ./.ingredient-normalizr/config.toml, fallback ~/.config/ingredient-normalizr/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Extra lemma table (one `word<TAB>lemma` entry per line), merged over the built-in dictionary
    #[arg(long, value_name = "FILE")]
    pub lemmas: Option<PathBuf>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Show the most frequent normalized ingredients
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}

impl Cli {
    /// Effective output path: `--output` if given, otherwise the input path
    /// with `_normalized` appended to its stem (`data/database.xlsx` →
    /// `data/database_normalized.xlsx`).
    pub fn output_path(&self) -> PathBuf {
        if let Some(path) = &self.output {
            return path.clone();
        }
        let stem = self
            .input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("output");
        let ext = self
            .input
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("xlsx");
        self.input
            .with_file_name(format!("{}_normalized.{}", stem, ext))
    }
}
