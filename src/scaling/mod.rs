pub mod engine;

pub use engine::{parse_scale_factor, reset_to_original, round_to, scale, validate_factor};
