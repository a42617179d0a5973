use std::{
  cmp::{min, Ordering},
  ops::{Add, Sub},
};

use crate::time::TicksPerSecond;

pub const DEFAULT_TICKS_PER_SECOND: TicksPerSecond = 960;

#[derive(Debug, Eq, Copy, Clone)]
pub struct TicksTime(u64);

impl TicksTime {
  pub fn new(ticks: u64) -> TicksTime {
    TicksTime(ticks)
  }

  pub fn zero() -> TicksTime {
    TicksTime(0)
  }

  /// Converts seconds into ticks, truncating any fraction of a tick.
  /// Negative or non-finite inputs map to zero.
  pub fn from_seconds(seconds: f64, ticks_per_second: TicksPerSecond) -> TicksTime {
    let ticks = (seconds * f64::from(ticks_per_second)).floor();
    if ticks.is_finite() && ticks > 0.0 {
      TicksTime(ticks as u64)
    } else {
      TicksTime(0)
    }
  }
}

impl Ord for TicksTime {
  fn cmp(&self, other: &TicksTime) -> Ordering {
    self.0.cmp(&other.0)
  }
}

impl PartialOrd for TicksTime {
  fn partial_cmp(&self, other: &TicksTime) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl PartialEq for TicksTime {
  fn eq(&self, other: &TicksTime) -> bool {
    self.0 == other.0
  }
}

impl Add for TicksTime {
  type Output = TicksTime;
  fn add(self, rhs: TicksTime) -> Self {
    TicksTime::new(self.0.saturating_add(rhs.0))
  }
}

impl Sub for TicksTime {
  type Output = TicksTime;
  fn sub(self, rhs: TicksTime) -> Self {
    TicksTime::new(self.0 - min(self.0, rhs.0))
  }
}

impl From<TicksTime> for u64 {
  fn from(item: TicksTime) -> Self {
    item.0
  }
}

#[cfg(test)]
mod test {

  use super::{TicksTime, DEFAULT_TICKS_PER_SECOND};
  use std::cmp::Ordering;

  #[test]
  pub fn new() {
    let ticks_time = TicksTime::new(1234);
    assert_eq!(ticks_time.0, 1234);
  }

  #[test]
  pub fn zero() {
    let ticks_time = TicksTime::zero();
    assert_eq!(ticks_time.0, 0);
  }

  #[test]
  pub fn from_seconds() {
    assert_eq!(TicksTime::from_seconds(1.0, DEFAULT_TICKS_PER_SECOND), TicksTime(960));
    assert_eq!(TicksTime::from_seconds(0.5, DEFAULT_TICKS_PER_SECOND), TicksTime(480));
    assert_eq!(TicksTime::from_seconds(1.5, 100), TicksTime(150));
  }

  #[test]
  pub fn from_seconds_truncates() {
    // 0.0015s at 960 ticks/s is 1.44 ticks
    assert_eq!(TicksTime::from_seconds(0.0015, 960), TicksTime(1));
    assert_eq!(TicksTime::from_seconds(0.999, 1), TicksTime(0));
  }

  #[test]
  pub fn from_seconds_out_of_range() {
    assert_eq!(TicksTime::from_seconds(-1.0, 960), TicksTime(0));
    assert_eq!(TicksTime::from_seconds(std::f64::NAN, 960), TicksTime(0));
  }

  #[test]
  pub fn ord_cmp() {
    let time1 = TicksTime::new(1234);
    let time2 = TicksTime::new(1235);
    assert_eq!(time1.cmp(&time2), Ordering::Less);
    assert_eq!(time2.cmp(&time1), Ordering::Greater);
    assert_eq!(time1.cmp(&time1), Ordering::Equal);
  }

  #[test]
  pub fn add() {
    let time1 = TicksTime::new(100);
    let time2 = TicksTime::new(50);
    assert_eq!(time1 + time2, TicksTime(150));
  }

  #[test]
  pub fn sub_saturates() {
    let time1 = TicksTime::new(100);
    let time2 = TicksTime::new(30);
    assert_eq!(time1 - time2, TicksTime(70));
    assert_eq!(time2 - time1, TicksTime(0));
  }

  #[test]
  pub fn u64_from() {
    let time1 = TicksTime::new(1234);
    assert_eq!(u64::from(time1), 1234);
  }
}
