// src/core.rs
pub mod gc;
pub mod input;
pub mod processor;
