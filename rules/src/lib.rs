//! Ten-pin bowling rules, independent of any engine.
//!
//! Everything in this crate is pure data and pure functions so the whole
//! rule set can be unit tested headless. The Bevy application crate feeds
//! it pin orientations and roll results and renders whatever comes back.

pub mod bowler;
pub mod config;
pub mod knockdown;
pub mod launch;
pub mod rack;
pub mod scoring;
pub mod turn;
