use blankout_expression::ExprError;
use blankout_random::GenError;
use thiserror::Error;

/// Errors from driving a drill session.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    /// A guess arrived before any question was posed.
    #[error("no question is posed")]
    NoRound,

    /// A guess arrived after the round was already decided.
    #[error("round already resolved")]
    RoundOver,

    /// Tile index outside the offered tiles.
    #[error("tile {0} is out of range")]
    BadTile(usize),

    /// The tile was already played this round.
    #[error("tile {0} was already used")]
    TileUsed(usize),

    #[error(transparent)]
    Gen(#[from] GenError),

    #[error(transparent)]
    Expr(#[from] ExprError),
}
