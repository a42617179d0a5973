pub type U4 = u8;
pub type U7 = u8;
pub type U14 = u16;

pub const U4_MAX: U4 = 0x0f;
pub const U7_MAX: U7 = 0x7f;

/// Signed pitch bend, 0 is the wheel centre
pub type Bend = i32;

pub const BEND_MIN: Bend = -0x2000;
pub const BEND_MAX: Bend = 0x1fff;
pub const BEND_CENTER: U14 = 0x2000;
