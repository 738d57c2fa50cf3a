//! A terminal rendition of the classic tile-crossing arcade game: guide a
//! character over three lanes of bugs to the water, score a point per
//! crossing, lose everything on contact.
//!
//! `entities` holds pure data, `compute` the pure per-frame logic, and
//! `display` the crossterm rendering.  The binary wires them to a frame
//! loop and an input thread.

pub mod compute;
pub mod display;
pub mod entities;
