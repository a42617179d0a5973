use std::path::Path;
use std::process;

use log::{debug, error, info, LevelFilter};

use failure::{Error, Fail};

use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;

use micromidi_core::{Config, Converter};

mod demo;

const APP_NAME: &str = "micromidi";

const MICROMIDI_CONFIG: &str = "MICROMIDI_CONFIG";
const DEFAULT_MICROMIDI_CONFIG: &str = "micromidi.toml";

const MICROMIDI_LOG_CONFIG: &str = "MICROMIDI_LOG_CONFIG";
const DEFAULT_MICROMIDI_LOG_CONFIG: &str = "log4rs.yaml";

const CONSOLE_PATTERN: &str = "{h({l})} {m}{n}";

#[derive(Debug, Fail)]
enum MainError {
  #[fail(display = "Failed to init logging: {}", cause)]
  LoggingInit { cause: String },

  #[fail(display = "Failed to load configuration from {}: {}", path, cause)]
  ConfigLoad { path: String, cause: String },
}

fn main() -> Result<(), Error> {
  let args: Vec<String> = std::env::args().skip(1).collect();
  let (input, output) = match paths(&args) {
    Some(paths) => paths,
    None => {
      usage();
      process::exit(1);
    }
  };

  init_logging()?;

  let config = init_config()?;

  let converter = Converter::new(&config)?;

  if let Err(err) = converter.convert_file(input, output) {
    error!("{}", err);
    process::exit(1);
  }

  Ok(())
}

fn paths(args: &[String]) -> Option<(&str, &str)> {
  match args {
    [input, output, ..] => Some((input.as_str(), output.as_str())),
    _ => None,
  }
}

fn usage_text() -> String {
  format!(
    "Usage: {} <input.csv> <output.mid>\n\
     Exits with status 1 when arguments are missing, the input is missing or unreadable, \
     no row is valid or the output cannot be written.",
    APP_NAME
  )
}

/// Runs before logging is set up, so it reports on stdout and stderr only.
fn usage() {
  println!("{}", usage_text());

  let demo_path = Path::new(demo::DEMO_INPUT);
  match demo::scaffold(demo_path) {
    Ok(true) => println!("Created demo input file: {}", demo_path.display()),
    Ok(false) => {}
    Err(err) => eprintln!("Failed to create {}: {}", demo_path.display(), err),
  }
}

/// Reads the log4rs file when present. Without an explicit path and with no
/// file in the working directory, logs go to the console.
fn init_logging() -> Result<(), Error> {
  let explicit_path = std::env::var(MICROMIDI_LOG_CONFIG).ok();
  let log_config_path = explicit_path
    .clone()
    .unwrap_or_else(|| DEFAULT_MICROMIDI_LOG_CONFIG.to_string());

  if explicit_path.is_some() || Path::new(&log_config_path).exists() {
    log4rs::init_file(log_config_path.as_str(), Default::default()).map_err(|err| {
      MainError::LoggingInit {
        cause: err.to_string(),
      }
    })?;
  } else {
    init_console_logging()?;
  }

  Ok(())
}

fn init_console_logging() -> Result<(), Error> {
  let stdout = ConsoleAppender::builder()
    .encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN)))
    .build();

  let config = LogConfig::builder()
    .appender(Appender::builder().build("stdout", Box::new(stdout)))
    .build(Root::builder().appender("stdout").build(LevelFilter::Info))
    .map_err(|err| MainError::LoggingInit {
      cause: err.to_string(),
    })?;

  log4rs::init_config(config).map_err(|err| MainError::LoggingInit {
    cause: err.to_string(),
  })?;

  Ok(())
}

fn init_config() -> Result<Config, Error> {
  let explicit_path = std::env::var(MICROMIDI_CONFIG).ok();
  let config_path = explicit_path
    .clone()
    .unwrap_or_else(|| DEFAULT_MICROMIDI_CONFIG.to_string());

  let config = if explicit_path.is_some() || Path::new(&config_path).exists() {
    info!("Loading configuration from {} ...", config_path);
    Config::from_file(config_path.as_str()).map_err(|err| MainError::ConfigLoad {
      path: config_path.clone(),
      cause: err.to_string(),
    })?
  } else {
    Config::default()
  };
  debug!("{:#?}", config);

  Ok(config)
}
