//! Line oriented decoder for the note table.
//!
//! The first line is a header and is skipped regardless of its content.
//! Blank lines are ignored. Every other line yields either an [`InputRow`]
//! or the reason it was rejected, together with its 1-based line number.

pub mod row;

pub use self::row::{split_fields, InputRow, RowError, NUM_FIELDS};

use std::str::Lines;

#[derive(Debug, Clone, PartialEq)]
pub struct DecodedRow {
  pub line: usize,
  pub text: String,
  pub result: Result<InputRow, RowError>,
}

pub struct RowDecoder<'a> {
  lines: Lines<'a>,
  line: usize,
}

impl<'a> RowDecoder<'a> {
  pub fn new(data: &'a str) -> RowDecoder<'a> {
    let mut lines = data.lines();
    lines.next();
    RowDecoder { lines, line: 1 }
  }
}

impl<'a> Iterator for RowDecoder<'a> {
  type Item = DecodedRow;

  fn next(&mut self) -> Option<DecodedRow> {
    for text in &mut self.lines {
      self.line += 1;
      if text.trim().is_empty() {
        continue;
      }
      return Some(DecodedRow {
        line: self.line,
        text: text.to_string(),
        result: text.parse(),
      });
    }
    None
  }
}

#[cfg(test)]
mod test {

  use super::{InputRow, RowDecoder, RowError};

  #[test]
  pub fn skips_header() {
    let rows: Vec<_> = RowDecoder::new("C4,0,0.5,1.0,0.0\nD4,0,0.5,1.0,0.0\n").collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].line, 2);
    assert_eq!(rows[0].result.as_ref().unwrap().note_name, "D4");
  }

  #[test]
  pub fn header_only() {
    assert_eq!(RowDecoder::new("Note_Name,Pitch_Bend\n").count(), 0);
    assert_eq!(RowDecoder::new("").count(), 0);
  }

  #[test]
  pub fn skips_blank_lines_and_keeps_line_numbers() {
    let text = "header\n\nC4,0,0.5,1.0,0.0\r\n   \nE4,x,0.5,1.0,0.0\n";
    let rows: Vec<_> = RowDecoder::new(text).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].line, 3);
    assert_eq!(
      rows[0].result,
      Ok(InputRow {
        note_name: "C4".to_string(),
        bend: 0,
        velocity_norm: 0.5,
        duration_sec: 1.0,
        start_sec: 0.0,
      })
    );
    assert_eq!(rows[1].line, 5);
    assert_eq!(rows[1].text, "E4,x,0.5,1.0,0.0");
    assert_eq!(
      rows[1].result,
      Err(RowError::InvalidNumericField {
        field: "pitch bend",
        value: "x".to_string()
      })
    );
  }
}
