use super::TicksPerSecond;

const MICROS_PER_MINUTE: u32 = 60_000_000;
const SECONDS_PER_MINUTE: u32 = 60;

/// Tempo in beats per minute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tempo(u16);

impl Tempo {
  pub fn new(value: u16) -> Tempo {
    Tempo(value)
  }

  pub fn get_value(&self) -> u16 {
    self.0
  }

  /// Length of one beat in microseconds, as stored by the tempo meta event.
  pub fn micros_per_beat(&self) -> u32 {
    MICROS_PER_MINUTE / u32::from(self.0.max(1))
  }

  /// Ticks per beat for a timeline running at `ticks_per_second`.
  /// Returns `None` unless the division is exact.
  pub fn ticks_per_beat(&self, ticks_per_second: TicksPerSecond) -> Option<u32> {
    let ticks_per_minute = u64::from(ticks_per_second) * u64::from(SECONDS_PER_MINUTE);
    let bpm = u64::from(self.0);
    if bpm == 0 || ticks_per_minute % bpm != 0 {
      None
    } else {
      Some((ticks_per_minute / bpm) as u32)
    }
  }
}

impl Default for Tempo {
  fn default() -> Tempo {
    Tempo(120)
  }
}
