#![forbid(unsafe_code)]

pub mod catalog;
pub mod model;
pub mod share;
pub mod time;

pub use time::Clock;
