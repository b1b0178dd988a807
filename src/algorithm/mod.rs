//! Dataset generation and indicator computation
//!
//! `generation` draws the synthetic employees; `indicators` aggregates them
//! into the figures that get charted.

pub mod generation;
pub mod indicators;
