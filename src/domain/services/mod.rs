pub mod classifier;
pub mod recommendation;

pub use classifier::{assess, classify, classify_or_default, pollution_score};
pub use recommendation::{generate, generate_for, insufficient_data};
