//! Random value generation for fill-the-blank questions.
//!
//! A [`Generator`] owns a seedable PRNG and produces question values under
//! a difficulty level. Levels are cumulative capability tiers described by
//! the [`level::LEVELS`] table; a session at level 4 can see everything a
//! session at level 1 could, plus homogeneous arrays.
//!
//! ```
//! use blankout_random::Generator;
//!
//! let mut a = Generator::with_seed([9u8; 32]);
//! let mut b = Generator::with_seed([9u8; 32]);
//! assert_eq!(a.value_for_level(3).unwrap(), b.value_for_level(3).unwrap());
//! ```

pub mod error;
pub mod generator;
pub mod level;

pub use error::GenError;
pub use generator::{Generator, Side, UNIQUE_ATTEMPTS};
pub use level::{spec_for, LevelSpec, LEVELS, LEVEL_COUNT, TOP_LEVEL};
