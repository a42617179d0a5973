//! Scientific pitch notation
//!
//! Accepted form, case insensitive and surrounded by optional whitespace:
//! `<letter><accidental><octave>`
//!
//! - Letter: A to G
//! - Accidental: `#` (sharp), `b` (flat) or nothing
//! - Octave: integer with an optional leading `-`
//!
//! C4 is key 60. Keys beyond the MIDI range saturate to 0 or 127.

use failure::Fail;

use crate::midi::types::{U7, U7_MAX};

#[derive(Debug, Fail, Clone, PartialEq)]
pub enum PitchError {
  #[fail(display = "Invalid note format: {}", name)]
  InvalidPitchFormat { name: String },
}

fn letter_offset(letter: char) -> Option<i64> {
  match letter {
    'C' => Some(0),
    'D' => Some(2),
    'E' => Some(4),
    'F' => Some(5),
    'G' => Some(7),
    'A' => Some(9),
    'B' => Some(11),
    _ => None,
  }
}

/// Octave digits that overflow saturate, so the final key clamps the same way
fn parse_octave(s: &str) -> Option<i64> {
  let (negative, digits) = match s.strip_prefix('-') {
    Some(digits) => (true, digits),
    None => (false, s),
  };

  if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
    return None;
  }

  let magnitude = digits.parse::<i64>().unwrap_or(i64::max_value());
  Some(if negative { -magnitude } else { magnitude })
}

pub fn parse_pitch(name: &str) -> Result<U7, PitchError> {
  let trimmed = name.trim();
  let invalid = || PitchError::InvalidPitchFormat {
    name: trimmed.to_string(),
  };

  let upper = trimmed.to_ascii_uppercase();
  let mut chars = upper.chars();
  let offset = chars.next().and_then(letter_offset).ok_or_else(invalid)?;

  let rest = chars.as_str();
  let (accidental, octave_part) = match rest.chars().next() {
    Some('#') => (1, &rest[1..]),
    Some('B') => (-1, &rest[1..]),
    _ => (0, rest),
  };

  let octave = parse_octave(octave_part).ok_or_else(invalid)?;

  let key = octave
    .saturating_add(1)
    .saturating_mul(12)
    .saturating_add(offset + accidental);

  Ok(key.max(0).min(i64::from(U7_MAX)) as U7)
}
