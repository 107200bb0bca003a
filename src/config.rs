//! Runtime configuration resolved from command-line arguments.

use anyhow::Result;
use std::path::PathBuf;

use crate::{args::Args, db};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    /// Seed catalog; the embedded one is used when `None`
    pub words_path: Option<PathBuf>,
    pub log_dir: PathBuf,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        let db_path = match args.db {
            Some(path) => path,
            None => db::get_db_path()?,
        };

        Ok(Self {
            db_path,
            words_path: args.words,
            log_dir: args.log_dir,
        })
    }
}
