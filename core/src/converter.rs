use std::fs;
use std::path::{Path, PathBuf};

use failure::Fail;
use log::{debug, info, warn};

use crate::config::{Config, ConfigError};
use crate::input::RowDecoder;
use crate::sequence::{Assembler, Document, Partitions, Translator};

#[derive(Debug, Fail)]
pub enum ConvertError {
  #[fail(display = "Invalid configuration: {}", cause)]
  InvalidConfig { cause: ConfigError },

  #[fail(display = "Input file not found: {}", path)]
  InputNotFound { path: String },

  #[fail(display = "Failed to read {}: {}", path, cause)]
  Read { path: String, cause: String },

  #[fail(display = "No valid events found.")]
  NoValidEvents,

  #[fail(display = "Failed to write {}: {}", path, cause)]
  Write { path: String, cause: String },
}

pub type ConvertResult<T> = Result<T, ConvertError>;

impl From<ConfigError> for ConvertError {
  fn from(cause: ConfigError) -> Self {
    ConvertError::InvalidConfig { cause }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
  pub output: PathBuf,
  pub standard_notes: usize,
  pub bent_notes: usize,
  pub skipped_rows: usize,
}

/// Result of converting the note table, before anything is written
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
  pub document: Document,
  pub skipped_rows: usize,
}

pub struct Converter {
  translator: Translator,
  assembler: Assembler,
}

impl Converter {
  pub fn new(config: &Config) -> ConvertResult<Converter> {
    let assembler = Assembler::from_config(config)?;
    Ok(Converter {
      translator: Translator::new(config.timing.ticks_per_second),
      assembler,
    })
  }

  /// Decodes and translates every row first, then schedules and assembles
  /// both partitions. Invalid rows are reported and skipped.
  pub fn convert_str(&self, content: &str) -> ConvertResult<Conversion> {
    let mut partitions = Partitions::new();
    let mut skipped_rows = 0;

    for row in RowDecoder::new(content) {
      let result = row
        .result
        .and_then(|input| self.translator.translate_into(&input, &mut partitions));

      match result {
        Ok(channel) => debug!("Line {}: {:?} note", row.line, channel),
        Err(err) => {
          warn!("Skipping invalid row {} ({}): {}", row.line, row.text.trim(), err);
          skipped_rows += 1;
        }
      }
    }

    if partitions.is_empty() {
      return Err(ConvertError::NoValidEvents);
    }

    let Partitions { clean, bent } = partitions;
    let document = self.assembler.assemble(clean, bent);

    Ok(Conversion {
      document,
      skipped_rows,
    })
  }

  pub fn convert_file<P, Q>(&self, input: P, output: Q) -> ConvertResult<Summary>
  where
    P: AsRef<Path>,
    Q: AsRef<Path>,
  {
    let input = input.as_ref();
    let output = output.as_ref();

    if !input.exists() {
      return Err(ConvertError::InputNotFound {
        path: input.display().to_string(),
      });
    }

    info!("Reading notes from {} ...", input.display());
    let content = fs::read_to_string(input).map_err(|err| ConvertError::Read {
      path: input.display().to_string(),
      cause: err.to_string(),
    })?;

    let Conversion {
      document,
      skipped_rows,
    } = self.convert_str(&content)?;

    document.save(output).map_err(|err| ConvertError::Write {
      path: output.display().to_string(),
      cause: err.to_string(),
    })?;

    info!("Success! Saved to {}", output.display());
    info!("Standard notes: {}", document.standard_notes);
    info!("Bent notes: {}", document.bent_notes);
    if skipped_rows > 0 {
      warn!("Skipped rows: {}", skipped_rows);
    }

    Ok(Summary {
      output: output.to_path_buf(),
      standard_notes: document.standard_notes,
      bent_notes: document.bent_notes,
      skipped_rows,
    })
  }
}
