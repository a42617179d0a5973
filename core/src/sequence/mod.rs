pub mod assembler;
pub mod event;
pub mod partition;
pub mod scheduler;
pub mod translator;

pub use self::assembler::{Assembler, Document, Track, TrackEntry, TrackItem, TrackSetup};
pub use self::event::NoteEvent;
pub use self::partition::{Channel, Partition, Partitions};
pub use self::scheduler::{schedule, ScheduledEvent};
pub use self::translator::{Translation, Translator};
