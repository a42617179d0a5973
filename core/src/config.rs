use failure::{Error, Fail};

use serde_derive::Deserialize;

use std::fs::File;
use std::io::Read;

use crate::midi::types::{U4_MAX, U7_MAX};
use crate::time::ticks::DEFAULT_TICKS_PER_SECOND;
use crate::time::{Tempo, TicksPerSecond};

const MAX_TICKS_PER_BEAT: u32 = 0x7fff;
const MAX_MICROS_PER_BEAT: u32 = 0x00ff_ffff;

#[derive(Debug, Fail, Clone, PartialEq)]
pub enum ConfigError {
  #[fail(display = "Tick resolution must be greater than zero")]
  ZeroResolution,

  #[fail(display = "Tempo of {} BPM is out of range", bpm)]
  TempoOutOfRange { bpm: u16 },

  #[fail(
    display = "{} ticks per second at {} BPM does not give a whole number of ticks per beat between 1 and {}",
    ticks_per_second, bpm, max
  )]
  InvalidTicksPerBeat {
    ticks_per_second: TicksPerSecond,
    bpm: u16,
    max: u32,
  },

  #[fail(display = "Invalid {} channel: {} (expected 0 to 15)", track, channel)]
  InvalidChannel { track: &'static str, channel: u8 },

  #[fail(display = "Invalid {} program: {} (expected 0 to 127)", track, program)]
  InvalidProgram { track: &'static str, program: u8 },

  #[fail(display = "Clean and bent notes must use different channels (both are {})", channel)]
  SharedChannel { channel: u8 },
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Timing {
  pub ticks_per_second: TicksPerSecond,
  pub tempo: u16,
}

impl Default for Timing {
  fn default() -> Timing {
    Timing {
      ticks_per_second: DEFAULT_TICKS_PER_SECOND,
      tempo: Tempo::default().get_value(),
    }
  }
}

impl Timing {
  pub fn tempo(&self) -> Tempo {
    Tempo::new(self.tempo)
  }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Tracks {
  pub clean_channel: u8,
  pub bent_channel: u8,
  pub clean_program: u8,
  pub bent_program: u8,
}

impl Default for Tracks {
  fn default() -> Tracks {
    Tracks {
      clean_channel: 0,
      bent_channel: 1,
      clean_program: 0,
      bent_program: 0,
    }
  }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
  pub timing: Timing,
  pub tracks: Tracks,
}

impl Config {
  pub fn from_file<'a, T>(path: T) -> Result<Config, Error>
  where
    T: Into<&'a str>,
  {
    let mut content = String::new();
    let path_str = path.into();
    let mut file = File::open(path_str)?;
    file.read_to_string(&mut content)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
  }

  pub fn from_str<'a, T>(content: T) -> Result<Config, Error>
  where
    T: Into<&'a str>,
  {
    let config: Config = toml::from_str(content.into())?;
    Ok(config)
  }

  /// Ticks per beat written to the file header
  pub fn ticks_per_beat(&self) -> Result<u16, ConfigError> {
    let Timing {
      ticks_per_second,
      tempo,
    } = self.timing;

    if ticks_per_second == 0 {
      return Err(ConfigError::ZeroResolution);
    }

    self
      .timing
      .tempo()
      .ticks_per_beat(ticks_per_second)
      .filter(|ticks| *ticks >= 1 && *ticks <= MAX_TICKS_PER_BEAT)
      .map(|ticks| ticks as u16)
      .ok_or(ConfigError::InvalidTicksPerBeat {
        ticks_per_second,
        bpm: tempo,
        max: MAX_TICKS_PER_BEAT,
      })
  }

  pub fn validate(&self) -> Result<(), ConfigError> {
    let tempo = self.timing.tempo();
    if tempo.get_value() == 0 || tempo.micros_per_beat() > MAX_MICROS_PER_BEAT {
      return Err(ConfigError::TempoOutOfRange {
        bpm: tempo.get_value(),
      });
    }

    self.ticks_per_beat()?;

    let tracks = &self.tracks;
    for &(track, channel) in &[("clean", tracks.clean_channel), ("bent", tracks.bent_channel)] {
      if channel > U4_MAX {
        return Err(ConfigError::InvalidChannel { track, channel });
      }
    }
    for &(track, program) in &[("clean", tracks.clean_program), ("bent", tracks.bent_program)] {
      if program > U7_MAX {
        return Err(ConfigError::InvalidProgram { track, program });
      }
    }
    if tracks.clean_channel == tracks.bent_channel {
      return Err(ConfigError::SharedChannel {
        channel: tracks.clean_channel,
      });
    }

    Ok(())
  }
}
