mod clock;

pub use clock::LogicalClock;
