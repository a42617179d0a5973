use crate::midi::types::{Bend, U4, U7};
use crate::midi::Message;
use crate::time::TicksTime;

pub type Priority = u8;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NoteEvent {
  PitchBend { time: TicksTime, bend: Bend },
  NoteOn { time: TicksTime, key: U7, velocity: U7 },
  NoteOff { time: TicksTime, key: U7 },
}

impl NoteEvent {
  pub fn time(&self) -> TicksTime {
    match *self {
      NoteEvent::PitchBend { time, .. }
      | NoteEvent::NoteOn { time, .. }
      | NoteEvent::NoteOff { time, .. } => time,
    }
  }

  /// Tie-break between events sharing a timestamp, lower goes first.
  /// A bend must land before the note it retunes.
  pub fn priority(&self) -> Priority {
    match self {
      NoteEvent::PitchBend { .. } => 0,
      NoteEvent::NoteOn { .. } => 1,
      NoteEvent::NoteOff { .. } => 0,
    }
  }

  pub fn is_note_on(&self) -> bool {
    match self {
      NoteEvent::NoteOn { .. } => true,
      _ => false,
    }
  }

  pub fn to_message(&self, channel: U4) -> Message {
    match *self {
      NoteEvent::PitchBend { bend, .. } => Message::pitch_bend(channel, bend),
      NoteEvent::NoteOn { key, velocity, .. } => Message::NoteOn {
        channel,
        key,
        velocity,
      },
      NoteEvent::NoteOff { key, .. } => Message::NoteOff {
        channel,
        key,
        velocity: 0,
      },
    }
  }
}
