use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "hangman", version, about = "Terminal hangman with accounts and game history")]
pub struct Args {
    /// SQLite database file (defaults to the platform data directory)
    #[arg(long, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// JSON file mapping categories to word lists, read on first start only
    #[arg(long, value_name = "PATH")]
    pub words: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, value_name = "DIR", default_value = "logs")]
    pub log_dir: PathBuf,
}
