#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitgrid;
mod board;
mod common;
mod config;
mod event;
mod game;
mod line;
mod playout;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod render;

pub use bitgrid::{BitGrid, BitGridError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use event::*;
pub use game::*;
pub use line::*;
pub use playout::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use render::*;
