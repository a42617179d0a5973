use crate::midi::types::Bend;
use crate::sequence::event::NoteEvent;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Channel {
  /// Notes played at their nominal pitch
  Clean,
  /// Notes carrying a pitch bend of their own
  Bent,
}

impl Channel {
  pub fn for_bend(bend: Bend) -> Channel {
    if bend == 0 {
      Channel::Clean
    } else {
      Channel::Bent
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
  events: Vec<NoteEvent>,
}

impl Partition {
  pub fn new() -> Partition {
    Partition::default()
  }

  pub fn extend<I>(&mut self, events: I)
  where
    I: IntoIterator<Item = NoteEvent>,
  {
    self.events.extend(events);
  }

  pub fn into_events(self) -> Vec<NoteEvent> {
    self.events
  }

  pub fn len(&self) -> usize {
    self.events.len()
  }

  pub fn is_empty(&self) -> bool {
    self.events.is_empty()
  }

  pub fn note_count(&self) -> usize {
    self.events.iter().filter(|event| event.is_note_on()).count()
  }
}

/// The two channel partitions filled by the translator
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partitions {
  pub clean: Partition,
  pub bent: Partition,
}

impl Partitions {
  pub fn new() -> Partitions {
    Partitions::default()
  }

  pub fn get_mut(&mut self, channel: Channel) -> &mut Partition {
    match channel {
      Channel::Clean => &mut self.clean,
      Channel::Bent => &mut self.bent,
    }
  }

  pub fn is_empty(&self) -> bool {
    self.clean.is_empty() && self.bent.is_empty()
  }
}
