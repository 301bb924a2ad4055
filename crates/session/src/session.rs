//! Session state: one learner working through questions one at a time.

use crate::error::SessionError;
use crate::feedback;
use blankout_expression::{for_blank, validate, Expr, Outcome, Verdict};
use blankout_random::Generator;
use blankout_value::{to_text, Value};

/// What happens to the round after a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryStrategy {
    /// A wrong guess disables its tile and the question stays posed until a
    /// correct guess resolves it. Every round starts from a fresh set of
    /// tiles.
    DisableAndStay,
    /// Every guess consumes its tile and resolves the round, right or
    /// wrong. Later rounds draw from the remaining tiles, and the pool
    /// regenerates once it runs dry.
    RemoveAndAdvance,
}

/// Session configuration.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Difficulty tier for generated values, 0 through 9.
    pub level: u8,
    /// Candidate tiles offered per fresh pool.
    pub tiles: usize,
    pub strategy: RetryStrategy,
    /// Fixed PRNG seed; two sessions with the same options and seed pose
    /// the same questions.
    pub seed: Option<[u8; 32]>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions {
            level: 3,
            tiles: 4,
            strategy: RetryStrategy::DisableAndStay,
            seed: None,
        }
    }
}

/// One offered candidate answer.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub value: Value,
    /// Played this round (disabled or consumed, depending on strategy).
    pub used: bool,
}

/// A posed question and the tiles offered against it.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub expr: Expr,
    pub tiles: Vec<Tile>,
    /// No further guesses; the next round can start.
    pub resolved: bool,
    /// At least one guess this round passed.
    pub answered_correctly: bool,
}

/// Running score counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    /// Questions posed.
    pub asked: u32,
    /// Guesses judged.
    pub tries: u32,
    /// Guesses that passed.
    pub correct: u32,
}

impl Score {
    /// Rounded percentage of correct guesses, once there has been one.
    pub fn accuracy(&self) -> Option<u32> {
        if self.tries == 0 {
            None
        } else {
            Some((100 * self.correct + self.tries / 2) / self.tries)
        }
    }

    /// One line for a status bar, e.g. `75% accuracy over 4 questions.`
    pub fn summary(&self) -> String {
        match self.accuracy() {
            Some(pct) => format!(
                "{}% accuracy over {} {}.",
                pct,
                self.asked,
                feedback::plural("question", self.asked as usize)
            ),
            None => String::from("No answers yet."),
        }
    }
}

/// Pass/fail filter over the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    All,
    Pass,
    Fail,
}

/// One judged guess, as recorded in the history.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundRecord {
    pub verdict: Verdict,
    pub outcome: Outcome,
}

/// A single learner's drill session.
///
/// All state is owned by the struct, so any number of sessions can run side
/// by side, and a seeded session can be replayed guess for guess.
pub struct Session {
    gen: Generator,
    options: SessionOptions,
    round: Option<Round>,
    /// Tile values available to the next round.
    pool: Vec<Value>,
    score: Score,
    history: Vec<RoundRecord>,
}

impl Session {
    pub fn new(options: SessionOptions) -> Session {
        let gen = match options.seed {
            Some(seed) => Generator::with_seed(seed),
            None => Generator::new(),
        };
        Session {
            gen,
            options,
            round: None,
            pool: Vec::new(),
            score: Score::default(),
            history: Vec::new(),
        }
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    pub fn history_filtered(&self, filter: Filter) -> Vec<&RoundRecord> {
        self.history
            .iter()
            .filter(|r| match filter {
                Filter::All => true,
                Filter::Pass => r.verdict.passed,
                Filter::Fail => !r.verdict.passed,
            })
            .collect()
    }

    /// Poses the next question, replacing any current round. Calling this
    /// on an unresolved round is the "give up and move on" transition.
    ///
    /// The blank is drawn from the offered tiles, so the original value is
    /// always on the board.
    pub fn start_round(&mut self) -> Result<&Round, SessionError> {
        let fresh = match self.options.strategy {
            RetryStrategy::DisableAndStay => true,
            RetryStrategy::RemoveAndAdvance => self.pool.is_empty(),
        };
        if fresh {
            self.pool = self
                .gen
                .unique_values(self.options.tiles, self.options.level)?;
        }
        let blank = self.gen.choice(&self.pool)?;
        let expr = for_blank(&mut self.gen, blank)?;
        let tiles = self
            .pool
            .iter()
            .map(|v| Tile {
                value: v.clone(),
                used: false,
            })
            .collect();
        self.score.asked += 1;
        let round = Round {
            expr,
            tiles,
            resolved: false,
            answered_correctly: false,
        };
        Ok(self.round.insert(round))
    }

    /// Judges the guess on tile `index` and applies the retry strategy.
    ///
    /// The verdict comes back whole either way; what changes per strategy
    /// is only what happens to the tile, the round, and the pool.
    pub fn submit(&mut self, index: usize) -> Result<Verdict, SessionError> {
        let strategy = self.options.strategy;
        let round = self.round.as_mut().ok_or(SessionError::NoRound)?;
        if round.resolved {
            return Err(SessionError::RoundOver);
        }
        if index >= round.tiles.len() {
            return Err(SessionError::BadTile(index));
        }
        if round.tiles[index].used {
            return Err(SessionError::TileUsed(index));
        }
        let answer = round.tiles[index].value.clone();
        let verdict = validate(&round.expr, &answer)?;
        self.score.tries += 1;
        if verdict.passed {
            self.score.correct += 1;
            round.answered_correctly = true;
        }
        match strategy {
            RetryStrategy::DisableAndStay => {
                if verdict.passed {
                    round.resolved = true;
                } else {
                    round.tiles[index].used = true;
                }
            }
            RetryStrategy::RemoveAndAdvance => {
                round.tiles[index].used = true;
                round.resolved = true;
                let text = to_text(&answer);
                self.pool.retain(|v| to_text(v) != text);
            }
        }
        self.history.push(RoundRecord {
            outcome: verdict.outcome(),
            verdict: verdict.clone(),
        });
        Ok(verdict)
    }
}
