pub mod config;
pub mod converter;
pub mod input;
pub mod midi;
pub mod pitch;
pub mod sequence;
pub mod time;

pub use crate::config::Config;
pub use crate::converter::{ConvertError, ConvertResult, Converter, Summary};
