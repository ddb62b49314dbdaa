//! Animated weather simulation library
//!
//! Rain, snow and hail particles, drifting clouds, and branching lightning
//! composited over a sky gradient, driven by a small weather state machine.
//! The simulation modules are plain Rust stepped one tick at a time; the Bevy
//! modules (`input`, `simulation`, `rendering`, `graphics`) are a thin shell
//! that feeds them commands and paints their snapshots.

pub mod cloud;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod graphics;
pub mod input;
pub mod lightning;
pub mod particle;
pub mod render;
pub mod rendering;
pub mod rng;
pub mod simulation;
pub mod weather;
