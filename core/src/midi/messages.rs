use super::types::{Bend, U14, U4, U7, BEND_CENTER, BEND_MAX, BEND_MIN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
  NoteOff { channel: U4, key: U7, velocity: U7 },
  NoteOn { channel: U4, key: U7, velocity: U7 },
  ProgramChange { channel: U4, value: U7 },
  PitchBend { channel: U4, value: U14 },
}

impl Message {
  /// Builds a pitch bend message from a signed offset, clamping it to the 14 bit range.
  pub fn pitch_bend(channel: U4, bend: Bend) -> Message {
    let clamped = bend.max(BEND_MIN).min(BEND_MAX);
    Message::PitchBend {
      channel,
      value: (clamped + Bend::from(BEND_CENTER)) as U14,
    }
  }
}
