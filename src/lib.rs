//! Space Rocks! game library
//!
//! A small asteroids game: fly the ship, shoot the rocks, watch the big ones
//! break into smaller ones.  The binary wires these modules into a windowed
//! Bevy app; the tests drive them headless.

pub mod bullet;
pub mod collision;
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod graphics;
pub mod menu;
pub mod rendering;
pub mod rock;
pub mod session;
pub mod ship;
pub mod simulation;
