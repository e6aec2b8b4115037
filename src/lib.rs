//! holeview - Golf-hole geometry and camera-framing engine for course maps

pub mod camera;
pub mod config;
pub mod domain;
pub mod geometry;
pub mod snapshot;
