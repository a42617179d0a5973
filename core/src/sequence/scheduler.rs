use crate::sequence::event::NoteEvent;
use crate::time::TicksTime;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ScheduledEvent {
  pub delta: TicksTime,
  pub event: NoteEvent,
}

/// Orders events by time and then priority, keeping insertion order for
/// ties, and encodes each timestamp as the distance to the previous event.
pub fn schedule<I>(events: I) -> Vec<ScheduledEvent>
where
  I: IntoIterator<Item = NoteEvent>,
{
  let mut events: Vec<NoteEvent> = events.into_iter().collect();
  events.sort_by_key(|event| (event.time(), event.priority()));

  let mut last_time = TicksTime::zero();
  events
    .into_iter()
    .map(|event| {
      let time = event.time();
      let delta = time - last_time;
      last_time = time;
      ScheduledEvent { delta, event }
    })
    .collect()
}
