use fern::Dispatch;
use log::LevelFilter;

use crate::config::Config;

/// # parse log level
/// read a verbosity name as used in the `LOGGING_LEVEL` variable.
/// unknown names default to info.
pub fn parse_log_level(verbosity: &str) -> LevelFilter {
    match verbosity.trim().to_uppercase().as_str() {
        "OFF" => LevelFilter::Off,
        "ERROR" => LevelFilter::Error,
        "WARN" => LevelFilter::Warn,
        "DEBUG" => LevelFilter::Debug,
        "TRACE" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

pub fn setup_logging(config: &Config) -> Result<(), fern::InitError> {
    let base_config = Dispatch::new().level(config.log_level);

    let mut output_config = Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .chain(std::io::stdout());

    if let Some(log_file) = &config.log_file {
        output_config = output_config.chain(fern::log_file(log_file)?);
    }

    base_config
        .chain(output_config)
        .apply()?;

    Ok(())
}
