pub mod line_patterns;
pub mod opening;
pub mod position_evaluation;
pub mod tactics;
