//! Rule families.
//!
//! - `header`: which lines name an exercise.
//! - `summary`: aggregate metrics above the first exercise.
//! - `sets`: weight and rep rows inside an exercise block.

pub(crate) mod header;
pub(crate) mod sets;
pub(crate) mod summary;
