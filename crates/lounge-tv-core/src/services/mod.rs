//! Services orchestrating domain operations over ports.

mod lounge_tv;

pub use lounge_tv::LoungeTv;
