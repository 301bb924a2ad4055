//! Drill session management: rounds, tiles, scoring, history, and the
//! commentary a front end shows for each judged answer.
//!
//! ```
//! use blankout_session::{Session, SessionOptions};
//!
//! let mut session = Session::new(SessionOptions {
//!     seed: Some([3u8; 32]),
//!     ..SessionOptions::default()
//! });
//! let pick = {
//!     let round = session.start_round().unwrap();
//!     let blank = round.expr.blank_value().unwrap().clone();
//!     round.tiles.iter().position(|t| t.value == blank).unwrap()
//! };
//! let verdict = session.submit(pick).unwrap();
//! assert!(verdict.passed);
//! ```

pub mod error;
pub mod feedback;
pub mod session;

pub use error::SessionError;
pub use feedback::{article, commentary, or_list, plural, question_line};
pub use session::{
    Filter, RetryStrategy, Round, RoundRecord, Score, Session, SessionOptions, Tile,
};
