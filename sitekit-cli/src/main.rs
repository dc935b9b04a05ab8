mod cli;
mod form;
mod paths;

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::Parser;
use pagedom::{Document, Selector};
use simplelog::{Config, LevelFilter, WriteLogger};
use sitekit::{Clock, FixedClock, LocalClock, Page, SiteConfig};

use crate::cli::{Cli, Cmd};
use crate::form::FormSpec;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log, cli.verbose);

    let result = match cli.cmd {
        Cmd::Check {
            form,
            config,
            today,
        } => check(&form, config.as_deref(), today),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn init_logging(path: Option<PathBuf>, verbose: bool) {
    let Some(path) = path.or_else(paths::log_file) else {
        return;
    };
    let level = if verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Info
    };
    match open_log_file(&path) {
        Ok(file) => {
            WriteLogger::init(level, Config::default(), file).expect("Failed to initialize logger")
        }
        Err(e) => eprintln!("Cannot open log file {}: {}", path.display(), e),
    }
}

/// Create the log file, and its directory if needed.
fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    File::create(path)
}

/// Returns whether the submission would go through.
fn check(form: &Path, config: Option<&Path>, today: Option<NaiveDate>) -> sitekit::Result<bool> {
    let spec = FormSpec::load(form)?;
    let config = match config {
        Some(path) => SiteConfig::load(path)?,
        None => SiteConfig::default(),
    };
    let today = today.unwrap_or_else(|| LocalClock.today());
    log::info!("[check] {} as of {today}", form.display());

    let banner_selector = Selector::parse(&format!(".{}", config.messages.class))?;
    let mut page = Page::with_clock(spec.to_tree(), config, FixedClock(today))?;
    let gate = page.handle_submit(&spec.id)?;

    for field in &spec.fields {
        match page.validator().validity(&field.id).violation() {
            Some(violation) => println!(
                "  x {}: {}",
                field.id,
                violation.message(&page.config().validation)
            ),
            None => println!("  ok {}", field.id),
        }
    }

    if gate.is_open() {
        println!("{}: ready to send", spec.id);
    } else {
        let doc = page.document();
        let banner = doc
            .query_first(&banner_selector)
            .and_then(|id| doc.element(&id))
            .map(|el| el.text.clone())
            .unwrap_or_default();
        println!("{}: blocked. {}", spec.id, banner);
    }
    Ok(gate.is_open())
}
