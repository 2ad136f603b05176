pub mod compose;
pub mod ramp;
