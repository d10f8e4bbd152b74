//! Console front end.
//!
//! Everything here is generic over [`std::io::BufRead`] and
//! [`std::io::Write`], so a whole session can be scripted in memory.

mod input;
mod menu;
pub mod render;

pub use input::{parse_id, parse_int, InputReader};
pub use menu::{prompt_capacity, MenuChoice, MenuState, Session};
