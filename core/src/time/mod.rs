pub mod tempo;
pub mod ticks;

pub use self::tempo::Tempo;
pub use self::ticks::TicksTime;

pub type TicksPerSecond = u32;
