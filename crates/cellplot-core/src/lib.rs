//! Core types for cellplot terminal charts.
//!
//! This crate provides the primitives shared by chart components drawn on a
//! grid of character cells:
//! - Cell geometry: [`Point`], [`Rect`]
//! - Braille sub-cell resolution: [`braille`]

pub mod braille;
mod geometry;

pub use geometry::{Point, Rect};
