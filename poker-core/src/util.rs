use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use std::time::Duration;

/// Install a terminal logger. Info by default, Debug when `verbose`.
pub fn init_logging(verbose: bool) -> Result<(), log::SetLoggerError> {
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    TermLogger::init(level, config, TerminalMode::Mixed, ColorChoice::Auto)
}

/// Parse a duration like "30s", "5m", "2h" or "1d".
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    let last = s.char_indices().last().map_or(0, |(i, _)| i);
    let (num, unit) = s.split_at(last);
    let value: u64 = num.parse().ok()?;
    let secs = match unit {
        "s" => value,
        "m" => value.checked_mul(60)?,
        "h" => value.checked_mul(3600)?,
        "d" => value.checked_mul(86400)?,
        _ => return None,
    };
    Some(Duration::from_secs(secs))
}
