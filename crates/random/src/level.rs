//! Difficulty tiers for value generation.

use blankout_value::TypeSet;

/// What one difficulty level may generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelSpec {
    /// Types the level can produce at the top of a value.
    pub types: TypeSet,
    /// Number range, inclusive low and exclusive high.
    pub numbers: (i64, i64),
    /// String length range, inclusive on both ends.
    pub string_len: (usize, usize),
    /// Array length range, inclusive on both ends.
    pub array_len: (usize, usize),
    /// Maximum array nesting depth; 0 means primitives only.
    pub depth: usize,
    /// Whether arrays hold a single element type.
    pub homogeneous: bool,
}

pub const LEVEL_COUNT: usize = 10;
pub const TOP_LEVEL: u8 = 9;

/// The level table. Each tier is a superset of the one before: moving up
/// never removes a shape the learner has already seen, it adds new ones.
///
/// 0 plain small numbers; 1 adds short strings; 2 adds booleans; 3 widens
/// the primitive mix (the session default); 4 adds homogeneous arrays;
/// 5 lets arrays be empty; 6 makes arrays heterogeneous; 7 nests arrays one
/// level deeper; 8 widens the number range into negatives; 9 lengthens
/// strings.
pub static LEVELS: [LevelSpec; LEVEL_COUNT] = [
    LevelSpec {
        types: TypeSet::NUMBER,
        numbers: (0, 10),
        string_len: (1, 4),
        array_len: (1, 3),
        depth: 0,
        homogeneous: true,
    },
    LevelSpec {
        types: TypeSet::NUMBER.union(TypeSet::STRING),
        numbers: (0, 10),
        string_len: (1, 4),
        array_len: (1, 3),
        depth: 0,
        homogeneous: true,
    },
    LevelSpec {
        types: TypeSet::NUMBER.union(TypeSet::STRING).union(TypeSet::BOOLEAN),
        numbers: (0, 10),
        string_len: (1, 4),
        array_len: (1, 3),
        depth: 0,
        homogeneous: true,
    },
    LevelSpec {
        types: TypeSet::NUMBER.union(TypeSet::STRING).union(TypeSet::BOOLEAN),
        numbers: (0, 20),
        string_len: (1, 6),
        array_len: (1, 3),
        depth: 0,
        homogeneous: true,
    },
    LevelSpec {
        types: TypeSet::ANY,
        numbers: (0, 20),
        string_len: (1, 6),
        array_len: (1, 4),
        depth: 1,
        homogeneous: true,
    },
    LevelSpec {
        types: TypeSet::ANY,
        numbers: (0, 20),
        string_len: (1, 6),
        array_len: (0, 4),
        depth: 1,
        homogeneous: true,
    },
    LevelSpec {
        types: TypeSet::ANY,
        numbers: (0, 20),
        string_len: (1, 6),
        array_len: (0, 4),
        depth: 1,
        homogeneous: false,
    },
    LevelSpec {
        types: TypeSet::ANY,
        numbers: (0, 20),
        string_len: (1, 6),
        array_len: (0, 4),
        depth: 2,
        homogeneous: false,
    },
    LevelSpec {
        types: TypeSet::ANY,
        numbers: (-99, 100),
        string_len: (1, 6),
        array_len: (0, 4),
        depth: 2,
        homogeneous: false,
    },
    LevelSpec {
        types: TypeSet::ANY,
        numbers: (-99, 100),
        string_len: (1, 10),
        array_len: (0, 4),
        depth: 2,
        homogeneous: false,
    },
];

/// The [`LevelSpec`] for a level; anything above the top tier clamps to it.
pub fn spec_for(level: u8) -> &'static LevelSpec {
    &LEVELS[level.min(TOP_LEVEL) as usize]
}
