use std::str::FromStr;

use failure::Fail;

use crate::midi::types::Bend;
use crate::pitch::PitchError;

pub const NUM_FIELDS: usize = 5;

/// One decoded data row. Columns are read by position:
/// note name, pitch bend, normalized velocity, duration (s), start (s).
#[derive(Debug, Clone, PartialEq)]
pub struct InputRow {
  pub note_name: String,
  pub bend: Bend,
  pub velocity_norm: f64,
  pub duration_sec: f64,
  pub start_sec: f64,
}

#[derive(Debug, Fail, Clone, PartialEq)]
pub enum RowError {
  #[fail(display = "Expected {} fields but found {}", expected, found)]
  MissingFields { expected: usize, found: usize },

  #[fail(display = "Invalid note format: {}", name)]
  InvalidPitchFormat { name: String },

  #[fail(display = "Invalid {}: {:?}", field, value)]
  InvalidNumericField { field: &'static str, value: String },
}

impl From<PitchError> for RowError {
  fn from(err: PitchError) -> Self {
    match err {
      PitchError::InvalidPitchFormat { name } => RowError::InvalidPitchFormat { name },
    }
  }
}

fn parse_field<T: FromStr>(field: &'static str, value: &str) -> Result<T, RowError> {
  value
    .trim()
    .parse::<T>()
    .map_err(|_| RowError::InvalidNumericField {
      field,
      value: value.trim().to_string(),
    })
}

fn parse_seconds(field: &'static str, value: &str) -> Result<f64, RowError> {
  let seconds: f64 = parse_field(field, value)?;
  if seconds.is_finite() && seconds >= 0.0 {
    Ok(seconds)
  } else {
    Err(RowError::InvalidNumericField {
      field,
      value: value.trim().to_string(),
    })
  }
}

/// Splits a line into fields on commas. Double quoted fields may contain
/// commas, and `""` inside quotes is a literal quote.
pub fn split_fields(line: &str) -> Vec<String> {
  let mut fields = Vec::new();
  let mut current = String::new();
  let mut in_quotes = false;
  let mut chars = line.chars().peekable();

  while let Some(c) = chars.next() {
    match c {
      '"' if in_quotes => {
        if chars.peek() == Some(&'"') {
          current.push('"');
          chars.next();
        } else {
          in_quotes = false;
        }
      }
      '"' if current.trim().is_empty() => {
        current.clear();
        in_quotes = true;
      }
      ',' if !in_quotes => fields.push(std::mem::replace(&mut current, String::new())),
      _ => current.push(c),
    }
  }
  fields.push(current);

  fields
}

impl InputRow {
  pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Result<InputRow, RowError> {
    if fields.len() < NUM_FIELDS {
      return Err(RowError::MissingFields {
        expected: NUM_FIELDS,
        found: fields.len(),
      });
    }

    let velocity_norm: f64 = parse_field("velocity", fields[2].as_ref())?;
    if !velocity_norm.is_finite() {
      return Err(RowError::InvalidNumericField {
        field: "velocity",
        value: fields[2].as_ref().trim().to_string(),
      });
    }

    Ok(InputRow {
      note_name: fields[0].as_ref().trim().to_string(),
      bend: parse_field("pitch bend", fields[1].as_ref())?,
      velocity_norm,
      duration_sec: parse_seconds("duration", fields[3].as_ref())?,
      start_sec: parse_seconds("start time", fields[4].as_ref())?,
    })
  }
}

impl FromStr for InputRow {
  type Err = RowError;

  fn from_str(line: &str) -> Result<Self, Self::Err> {
    InputRow::from_fields(&split_fields(line))
  }
}
