pub mod assembler;
pub mod complement;
pub mod conjugator;
pub mod drill;
pub mod engine;
pub mod pipeline;
