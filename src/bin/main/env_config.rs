use std::fs::File;

use env_logger::{Env, Target};
use folio_core::{app::AppConfig, render::VisualStyle};
use log::{info, warn};

const LOG_FILE_VAR: &str = "FOLIO_LOG_FILE";
const CHAR_MS_VAR: &str = "FOLIO_CHAR_MS";
const BOOT_LINE_MS_VAR: &str = "FOLIO_BOOT_LINE_MS";
const SNIPPET_PAUSE_MS_VAR: &str = "FOLIO_SNIPPET_PAUSE_MS";
const LIGHT_VAR: &str = "FOLIO_LIGHT";

/// The terminal owns stdout, so logs go to a file when one is configured and
/// stay quiet on stderr otherwise.
pub(super) fn init_logging() {
    let log_file = std::env::var(LOG_FILE_VAR).ok();
    let default_filter = if log_file.is_some() { "info" } else { "warn" };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter));

    if let Some(path) = log_file.as_deref() {
        match File::create(path) {
            Ok(file) => {
                builder.target(Target::Pipe(Box::new(file)));
            }
            Err(err) => eprintln!("folio: cannot open log file {path}: {err}"),
        }
    }

    builder.init();
}

pub(super) fn app_config_from_env() -> AppConfig {
    let mut config = AppConfig::default();

    if let Some(char_ms) = env_u32(CHAR_MS_VAR) {
        config.snippet.char_interval_ms = char_ms;
        config.boot.char_interval_ms = char_ms;
    }
    if let Some(line_ms) = env_u32(BOOT_LINE_MS_VAR) {
        config.boot.line_delay_ms = line_ms;
    }
    if let Some(pause_ms) = env_u32(SNIPPET_PAUSE_MS_VAR) {
        config.snippet.script_delay_ms = pause_ms;
    }
    if std::env::var(LIGHT_VAR).is_ok_and(|value| value == "1") {
        config.style = VisualStyle { dark: false };
    }

    info!(
        "config: char_ms={} boot_line_ms={} snippet_pause_ms={} dark={}",
        config.boot.char_interval_ms,
        config.boot.line_delay_ms,
        config.snippet.script_delay_ms,
        config.style.dark
    );
    config
}

fn env_u32(name: &str) -> Option<u32> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse::<u32>() {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("config: ignoring {}={:?}: {}", name, raw, err);
            None
        }
    }
}
