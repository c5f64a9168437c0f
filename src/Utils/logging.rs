use crate::errors::ConversionError;
use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use std::fs::File;
use std::path::Path;

/// Installs the global logger: the terminal, plus `log_file` if given.
/// Fails if a logger is already installed.
pub fn init_logging(level: LevelFilter, log_file: Option<&Path>) -> Result<(), ConversionError> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if let Some(path) = log_file {
        let file = File::create(path).map_err(|e| ConversionError::io(path, e))?;
        loggers.push(WriteLogger::new(level, Config::default(), file));
    }
    CombinedLogger::init(loggers)?;
    Ok(())
}

/// `error`, `warn`, `info`, `debug`, `trace` or `off`; anything else is `info`
pub fn level_from_str(level: &str) -> LevelFilter {
    level.parse().unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::warn;
    use std::fs;
    use tempfile::NamedTempFile;

    #[test]
    fn test_init_twice_is_an_error() {
        let log_file = NamedTempFile::new().unwrap();
        let first = init_logging(LevelFilter::Warn, Some(log_file.path()));
        let second = init_logging(LevelFilter::Warn, None);
        assert!(matches!(second, Err(ConversionError::Logger(_))));
        if first.is_ok() {
            warn!("written to the log file");
            let content = fs::read_to_string(log_file.path()).unwrap();
            assert!(content.contains("written to the log file"));
        }
    }

    #[test]
    fn test_level_from_str() {
        assert_eq!(level_from_str("debug"), LevelFilter::Debug);
        assert_eq!(level_from_str("WARN"), LevelFilter::Warn);
        assert_eq!(level_from_str("loud"), LevelFilter::Info);
    }
}
