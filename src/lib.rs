//! Check whether a text is a pangram, that is, whether it uses every letter
//! of the 26-letter basic Latin alphabet at least once.

pub mod alphabet;
pub mod checker;

pub use crate::checker::is_pangram;
