use log::warn;
use midly::num;
use midly::{Format, Header, MetaMessage, MidiMessage, PitchBend, Timing, TrackEvent, TrackEventKind};

use super::messages::Message;
use super::types::{U14, U4, U7};
use crate::time::{Tempo, TicksTime};

const U15_MAX: u16 = 0x7fff;
const U24_MAX: u32 = 0x00ff_ffff;
const U28_MAX: u64 = 0x0fff_ffff;

#[inline]
fn u4(d: &U4) -> num::u4 {
  num::u4::new(d & 0x0f)
}

#[inline]
fn u7(d: &U7) -> num::u7 {
  num::u7::new(d & 0x7f)
}

#[inline]
fn u14(d: &U14) -> num::u14 {
  num::u14::new(d & 0x3fff)
}

pub struct Encoder;

impl Encoder {
  pub fn encode(msg: &Message) -> TrackEventKind<'static> {
    match msg {
      Message::NoteOff {
        channel,
        key,
        velocity,
      } => TrackEventKind::Midi {
        channel: u4(channel),
        message: MidiMessage::NoteOff {
          key: u7(key),
          vel: u7(velocity),
        },
      },
      Message::NoteOn {
        channel,
        key,
        velocity,
      } => TrackEventKind::Midi {
        channel: u4(channel),
        message: MidiMessage::NoteOn {
          key: u7(key),
          vel: u7(velocity),
        },
      },
      Message::ProgramChange { channel, value } => TrackEventKind::Midi {
        channel: u4(channel),
        message: MidiMessage::ProgramChange { program: u7(value) },
      },
      Message::PitchBend { channel, value } => TrackEventKind::Midi {
        channel: u4(channel),
        message: MidiMessage::PitchBend {
          bend: PitchBend(u14(value)),
        },
      },
    }
  }

  pub fn tempo(tempo: Tempo) -> TrackEventKind<'static> {
    let micros = tempo.micros_per_beat().min(U24_MAX);
    TrackEventKind::Meta(MetaMessage::Tempo(num::u24::new(micros)))
  }

  pub fn end_of_track() -> TrackEventKind<'static> {
    TrackEventKind::Meta(MetaMessage::EndOfTrack)
  }

  /// Appends an event with its delta time. Gaps beyond the 28 bit variable
  /// length limit are bridged with empty text events so later events keep
  /// their absolute time.
  pub fn push_event(events: &mut Vec<TrackEvent<'static>>, delta: TicksTime, kind: TrackEventKind<'static>) {
    let mut remaining = u64::from(delta);
    if remaining > U28_MAX {
      warn!(
        "Gap of {} ticks exceeds the delta time limit, bridging it with {} filler events",
        remaining,
        (remaining - 1) / U28_MAX
      );
    }
    while remaining > U28_MAX {
      events.push(TrackEvent {
        delta: num::u28::new(U28_MAX as u32),
        kind: TrackEventKind::Meta(MetaMessage::Text(&[])),
      });
      remaining -= U28_MAX;
    }
    events.push(TrackEvent {
      delta: num::u28::new(remaining as u32),
      kind,
    });
  }

  /// Header for a multi-track file where all tracks share the same timeline.
  pub fn header(ticks_per_beat: u16) -> Header {
    Header::new(
      Format::Parallel,
      Timing::Metrical(num::u15::new(ticks_per_beat.min(U15_MAX))),
    )
  }
}
