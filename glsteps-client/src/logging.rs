//! Logger setup for the binary.
//!
//! Lines look like `[12:34:56 INFO glsteps::lessons] Running lesson ...` and go
//! to stdout.

use log::LevelFilter;

/// Overrides the configured level, e.g. `GLSTEPS_LOG=debug`.
pub const LOG_ENV: &str = "GLSTEPS_LOG";

/// Parses a single level name. Case and surrounding whitespace are ignored.
pub fn parse_level(text: &str) -> Option<LevelFilter> {
    text.trim().parse().ok()
}

/// Picks the level from the environment override, then the configured text,
/// then `Info`.
pub fn resolve_level(configured: &str, env: Option<&str>) -> LevelFilter {
    env.and_then(parse_level)
        .or_else(|| parse_level(configured))
        .unwrap_or(LevelFilter::Info)
}

/// Installs the global logger. Fails if one is already installed.
pub fn init(configured: &str) -> Result<(), String> {
    let env = std::env::var(LOG_ENV).ok();
    let level = resolve_level(configured, env.as_deref());

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
        .map_err(|e| format!("Failed to install the logger: {}", e))?;

    if parse_level(configured).is_none() {
        log::warn!("Unknown log level `{}`, using {}", configured, level);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_parse_loosely() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" WARN "), Some(LevelFilter::Warn));
        assert_eq!(parse_level("off"), Some(LevelFilter::Off));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn environment_wins_over_config() {
        assert_eq!(resolve_level("info", Some("trace")), LevelFilter::Trace);
        assert_eq!(resolve_level("error", None), LevelFilter::Error);
        assert_eq!(resolve_level("error", Some("nonsense")), LevelFilter::Error);
        assert_eq!(resolve_level("nonsense", None), LevelFilter::Info);
    }
}
