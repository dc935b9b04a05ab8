use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sitekit", version, about = "Check site forms against the page validation rules")]
pub struct Cli {
    /// Log file (defaults to the cache directory)
    #[arg(long, global = true)]
    pub log: Option<PathBuf>,

    /// Log at trace level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Simulate submitting a form described in JSON
    Check {
        form: PathBuf,

        /// Site configuration JSON
        #[arg(long)]
        config: Option<PathBuf>,

        /// Date to treat as today (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check() {
        let cli = Cli::try_parse_from([
            "sitekit", "-v", "check", "contact.json", "--today", "2025-06-01",
        ])
        .unwrap();
        assert!(cli.verbose);
        let Cmd::Check { form, config, today } = cli.cmd;
        assert_eq!(form, PathBuf::from("contact.json"));
        assert!(config.is_none());
        assert_eq!(today, NaiveDate::from_ymd_opt(2025, 6, 1));
    }

    #[test]
    fn test_rejects_bad_date() {
        assert!(Cli::try_parse_from(["sitekit", "check", "f.json", "--today", "01/06/2025"]).is_err());
    }
}
