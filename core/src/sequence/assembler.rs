use std::io;
use std::path::Path;

use midly::{Smf, TrackEvent};

use crate::config::{Config, ConfigError};
use crate::midi::types::{U4, U7};
use crate::midi::{Encoder, Message};
use crate::sequence::partition::{Channel, Partition};
use crate::sequence::scheduler::schedule;
use crate::time::{Tempo, TicksTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackSetup {
  pub channel: U4,
  pub program: U7,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackItem {
  Tempo(Tempo),
  Message(Message),
  EndOfTrack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackEntry {
  pub delta: TicksTime,
  pub item: TrackItem,
}

impl TrackEntry {
  fn now(item: TrackItem) -> TrackEntry {
    TrackEntry {
      delta: TicksTime::zero(),
      item,
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Track {
  pub channel: Channel,
  pub entries: Vec<TrackEntry>,
}

impl Track {
  fn encode(&self) -> Vec<TrackEvent<'static>> {
    let mut events = Vec::with_capacity(self.entries.len());
    for entry in &self.entries {
      let kind = match entry.item {
        TrackItem::Tempo(tempo) => Encoder::tempo(tempo),
        TrackItem::Message(ref msg) => Encoder::encode(msg),
        TrackItem::EndOfTrack => Encoder::end_of_track(),
      };
      Encoder::push_event(&mut events, entry.delta, kind);
    }
    events
  }
}

/// Tracks ready to be written, sharing one timeline
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
  pub ticks_per_beat: u16,
  pub tracks: Vec<Track>,
  pub standard_notes: usize,
  pub bent_notes: usize,
}

impl Document {
  pub fn to_smf(&self) -> Smf<'static> {
    let mut smf = Smf::new(Encoder::header(self.ticks_per_beat));
    smf.tracks = self.tracks.iter().map(Track::encode).collect();
    smf
  }

  pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
    self.to_smf().save(path)
  }
}

pub struct Assembler {
  tempo: Tempo,
  ticks_per_beat: u16,
  clean: TrackSetup,
  bent: TrackSetup,
}

impl Assembler {
  pub fn new(tempo: Tempo, ticks_per_beat: u16, clean: TrackSetup, bent: TrackSetup) -> Assembler {
    Assembler {
      tempo,
      ticks_per_beat,
      clean,
      bent,
    }
  }

  pub fn from_config(config: &Config) -> Result<Assembler, ConfigError> {
    config.validate()?;
    let tracks = &config.tracks;
    Ok(Assembler::new(
      config.timing.tempo(),
      config.ticks_per_beat()?,
      TrackSetup {
        channel: tracks.clean_channel,
        program: tracks.clean_program,
      },
      TrackSetup {
        channel: tracks.bent_channel,
        program: tracks.bent_program,
      },
    ))
  }

  /// The clean track is always written and carries the tempo. The bent track
  /// only exists when some note has a bend.
  pub fn assemble(&self, clean: Partition, bent: Partition) -> Document {
    let standard_notes = clean.note_count();
    let bent_notes = bent.note_count();

    let mut tracks = vec![self.render(Channel::Clean, self.clean, Some(self.tempo), clean)];
    if !bent.is_empty() {
      tracks.push(self.render(Channel::Bent, self.bent, None, bent));
    }

    Document {
      ticks_per_beat: self.ticks_per_beat,
      tracks,
      standard_notes,
      bent_notes,
    }
  }

  fn render(&self, channel: Channel, setup: TrackSetup, tempo: Option<Tempo>, partition: Partition) -> Track {
    let mut entries = Vec::with_capacity(partition.len() + 3);

    if let Some(tempo) = tempo {
      entries.push(TrackEntry::now(TrackItem::Tempo(tempo)));
    }
    entries.push(TrackEntry::now(TrackItem::Message(Message::ProgramChange {
      channel: setup.channel,
      value: setup.program,
    })));

    entries.extend(
      schedule(partition.into_events())
        .into_iter()
        .map(|scheduled| TrackEntry {
          delta: scheduled.delta,
          item: TrackItem::Message(scheduled.event.to_message(setup.channel)),
        }),
    );

    entries.push(TrackEntry::now(TrackItem::EndOfTrack));

    Track { channel, entries }
  }
}

#[cfg(test)]
mod test {

  use super::*;
  use crate::sequence::event::NoteEvent;
  use midly::{MetaMessage, MidiMessage, TrackEventKind};

  fn assembler() -> Assembler {
    Assembler::from_config(&Config::default()).unwrap()
  }

  fn clean_partition() -> Partition {
    let mut partition = Partition::new();
    partition.extend(vec![
      NoteEvent::NoteOn {
        time: TicksTime::new(0),
        key: 60,
        velocity: 100,
      },
      NoteEvent::NoteOff {
        time: TicksTime::new(960),
        key: 60,
      },
    ]);
    partition
  }

  fn bent_partition() -> Partition {
    let mut partition = Partition::new();
    partition.extend(vec![
      NoteEvent::PitchBend {
        time: TicksTime::new(480),
        bend: 2048,
      },
      NoteEvent::NoteOn {
        time: TicksTime::new(480),
        key: 60,
        velocity: 100,
      },
      NoteEvent::NoteOff {
        time: TicksTime::new(1440),
        key: 60,
      },
    ]);
    partition
  }

  fn entry(delta: u64, item: TrackItem) -> TrackEntry {
    TrackEntry {
      delta: TicksTime::new(delta),
      item,
    }
  }

  #[test]
  pub fn clean_only() {
    let document = assembler().assemble(clean_partition(), Partition::new());
    assert_eq!(document.ticks_per_beat, 480);
    assert_eq!(document.tracks.len(), 1);
    assert_eq!(document.standard_notes, 1);
    assert_eq!(document.bent_notes, 0);

    let track = &document.tracks[0];
    assert_eq!(track.channel, Channel::Clean);
    assert_eq!(
      track.entries,
      vec![
        entry(0, TrackItem::Tempo(Tempo::new(120))),
        entry(0, TrackItem::Message(Message::ProgramChange { channel: 0, value: 0 })),
        entry(
          0,
          TrackItem::Message(Message::NoteOn {
            channel: 0,
            key: 60,
            velocity: 100
          })
        ),
        entry(
          960,
          TrackItem::Message(Message::NoteOff {
            channel: 0,
            key: 60,
            velocity: 0
          })
        ),
        entry(0, TrackItem::EndOfTrack),
      ]
    );
  }

  #[test]
  pub fn empty_clean_track_is_still_written() {
    let document = assembler().assemble(Partition::new(), bent_partition());
    assert_eq!(document.tracks.len(), 2);
    assert_eq!(document.tracks[0].channel, Channel::Clean);
    assert_eq!(document.tracks[0].entries.len(), 3);
    assert_eq!(document.standard_notes, 0);
    assert_eq!(document.bent_notes, 1);
  }

  #[test]
  pub fn bent_track_has_no_tempo() {
    let document = assembler().assemble(clean_partition(), bent_partition());
    let track = &document.tracks[1];
    assert_eq!(track.channel, Channel::Bent);
    assert_eq!(
      track.entries,
      vec![
        entry(0, TrackItem::Message(Message::ProgramChange { channel: 1, value: 0 })),
        entry(
          480,
          TrackItem::Message(Message::PitchBend {
            channel: 1,
            value: 0x2800
          })
        ),
        entry(
          0,
          TrackItem::Message(Message::NoteOn {
            channel: 1,
            key: 60,
            velocity: 100
          })
        ),
        entry(
          960,
          TrackItem::Message(Message::NoteOff {
            channel: 1,
            key: 60,
            velocity: 0
          })
        ),
        entry(0, TrackItem::EndOfTrack),
      ]
    );
    assert_eq!(document.bent_notes, 1);
  }

  #[test]
  pub fn custom_setup() {
    let clean = TrackSetup {
      channel: 4,
      program: 10,
    };
    let bent = TrackSetup {
      channel: 5,
      program: 11,
    };
    let document = Assembler::new(Tempo::new(60), 960, clean, bent).assemble(clean_partition(), bent_partition());
    assert_eq!(document.ticks_per_beat, 960);
    assert_eq!(
      document.tracks[0].entries[1].item,
      TrackItem::Message(Message::ProgramChange { channel: 4, value: 10 })
    );
    assert_eq!(
      document.tracks[1].entries[0].item,
      TrackItem::Message(Message::ProgramChange { channel: 5, value: 11 })
    );
  }

  #[test]
  pub fn from_invalid_config() {
    let mut config = Config::default();
    config.tracks.bent_channel = 0;
    assert!(Assembler::from_config(&config).is_err());
  }

  #[test]
  pub fn to_smf() {
    let smf = assembler()
      .assemble(clean_partition(), bent_partition())
      .to_smf();
    assert_eq!(smf.tracks.len(), 2);
    assert_eq!(smf.tracks[0].len(), 5);
    assert_eq!(smf.tracks[1].len(), 5);
    match smf.tracks[0][0].kind {
      TrackEventKind::Meta(MetaMessage::Tempo(micros)) => assert_eq!(micros.as_int(), 500_000),
      ref other => panic!("unexpected event {:?}", other),
    }
    match smf.tracks[1][1].kind {
      TrackEventKind::Midi {
        channel,
        message: MidiMessage::PitchBend { bend },
      } => {
        assert_eq!(channel.as_int(), 1);
        assert_eq!(bend.0.as_int(), 0x2800);
        assert_eq!(smf.tracks[1][1].delta.as_int(), 480);
      }
      ref other => panic!("unexpected event {:?}", other),
    }
    assert_eq!(
      smf.tracks[1][4].kind,
      TrackEventKind::Meta(MetaMessage::EndOfTrack)
    );
  }

  #[test]
  pub fn long_gaps_keep_absolute_times() {
    let gap = 2 * 0x0fff_ffff + 10;
    let mut partition = Partition::new();
    partition.extend(vec![
      NoteEvent::NoteOn {
        time: TicksTime::new(0),
        key: 60,
        velocity: 100,
      },
      NoteEvent::NoteOff {
        time: TicksTime::new(gap),
        key: 60,
      },
    ]);
    let smf = assembler().assemble(partition, Partition::new()).to_smf();
    let track = &smf.tracks[0];

    let total: u64 = track.iter().map(|event| u64::from(event.delta.as_int())).sum();
    assert_eq!(total, gap);

    // tempo, program, note on, two fillers, note off, end of track
    assert_eq!(track.len(), 7);
    match track[5].kind {
      TrackEventKind::Midi {
        message: MidiMessage::NoteOff { key, .. },
        ..
      } => assert_eq!(key.as_int(), 60),
      ref other => panic!("unexpected event {:?}", other),
    }
  }
}
