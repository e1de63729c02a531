mod marshal;
mod time;

pub use time::Time;
