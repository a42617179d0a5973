use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

pub const DEMO_INPUT: &str = "sequencer_input.csv";

const DEMO_CONTENT: &str = "\
Note_Name,Pitch_Bend,Velocity_Norm,Duration_Sec,Start_Sec
C4,0,0.8,1.0,0.0
C4,2048,0.8,1.0,1.0
E4,0,0.7,0.5,2.0
G4,0,0.7,0.5,2.5
";

/// Writes a small example table unless the file already exists.
/// Returns whether the file was created.
pub fn scaffold(path: &Path) -> io::Result<bool> {
  let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
    Ok(file) => file,
    Err(ref err) if err.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
    Err(err) => return Err(err),
  };
  file.write_all(DEMO_CONTENT.as_bytes())?;
  Ok(true)
}
