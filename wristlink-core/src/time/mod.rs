//! Wall-clock time and peer time synchronization

pub mod datetime;
pub mod sync;

pub use datetime::DateTime;
pub use sync::TimeSynchronizer;
