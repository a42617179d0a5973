use crate::input::{InputRow, RowError};
use crate::midi::types::{U7, U7_MAX};
use crate::pitch::parse_pitch;
use crate::sequence::event::NoteEvent;
use crate::sequence::partition::{Channel, Partitions};
use crate::time::{TicksPerSecond, TicksTime};

/// Events produced by a single row, all destined to the same channel
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
  pub channel: Channel,
  pub events: Vec<NoteEvent>,
}

pub fn velocity_from_norm(velocity_norm: f64) -> U7 {
  let velocity = (velocity_norm * f64::from(U7_MAX)).round();
  velocity.max(0.0).min(f64::from(U7_MAX)) as U7
}

#[derive(Debug, Clone, Copy)]
pub struct Translator {
  ticks_per_second: TicksPerSecond,
}

impl Translator {
  pub fn new(ticks_per_second: TicksPerSecond) -> Translator {
    Translator { ticks_per_second }
  }

  pub fn translate(&self, row: &InputRow) -> Result<Translation, RowError> {
    let key = parse_pitch(&row.note_name)?;
    let velocity = velocity_from_norm(row.velocity_norm);

    let start = TicksTime::from_seconds(row.start_sec, self.ticks_per_second);
    let duration = TicksTime::from_seconds(row.duration_sec, self.ticks_per_second);
    let end = start + duration;

    let channel = Channel::for_bend(row.bend);

    let mut events = Vec::with_capacity(3);
    if channel == Channel::Bent {
      events.push(NoteEvent::PitchBend {
        time: start,
        bend: row.bend,
      });
    }
    events.push(NoteEvent::NoteOn {
      time: start,
      key,
      velocity,
    });
    events.push(NoteEvent::NoteOff { time: end, key });

    Ok(Translation { channel, events })
  }

  /// Translates a row straight into its partition. On error nothing is added.
  pub fn translate_into(&self, row: &InputRow, partitions: &mut Partitions) -> Result<Channel, RowError> {
    let Translation { channel, events } = self.translate(row)?;
    partitions.get_mut(channel).extend(events);
    Ok(channel)
  }
}
