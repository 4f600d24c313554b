//! Touch canvas input handling.
//!
//! # Responsibility
//! - Convert gesture callbacks into committed strokes.
//! - Hold the editing state of one note until it is saved.
//!
//! # Invariants
//! - Gesture callbacks are processed in the order the host delivers them.

pub mod accumulator;
pub mod session;
