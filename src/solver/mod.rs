pub mod constraint;
pub mod constraints;
pub mod engine;
pub mod stats;
