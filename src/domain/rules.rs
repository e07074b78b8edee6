use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RuleParseError;

/// Outer-totalistic rule over binary cells.
///
/// Bit `i` of `keep` set means a live cell with `i` live neighbors survives;
/// bit `i` of `spawn` set means a dead cell with `i` live neighbors is born.
/// Neighborhoods top out at 12 cells, so only the low 13 bits ever matter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule {
    pub keep: u32,
    pub spawn: u32,
}

impl Rule {
    pub const fn new(keep: u32, spawn: u32) -> Self {
        Self { keep, spawn }
    }

    /// Conway's Game of Life (B3/S23)
    pub const fn conway() -> Self {
        Self::new(0b1100, 0b1000)
    }

    /// HighLife (B36/S23), Conway plus birth on 6; grows replicators
    pub const fn highlife() -> Self {
        Self::new(0b1100, 0b100_1000)
    }

    /// Seeds (B2/S), every live cell dies each generation
    pub const fn seeds() -> Self {
        Self::new(0, 0b100)
    }

    /// Day & Night (B3678/S34678), symmetric under inversion
    pub const fn day_and_night() -> Self {
        Self::new(0b1_1101_1000, 0b1_1100_1000)
    }

    /// Hexagonal Life (B2/S34), a common honeycomb rule
    pub const fn hex_life() -> Self {
        Self::new(0b1_1000, 0b100)
    }

    /// Bit `count` of `mask`; counts past the mask width read as 0.
    #[inline]
    pub const fn bit(mask: u32, count: u8) -> bool {
        count < u32::BITS as u8 && (mask >> count as u32) & 1 == 1
    }

    /// Next state of a cell given its live neighbor count
    #[inline]
    pub const fn evolve(&self, alive: bool, neighbors: u8) -> bool {
        if alive {
            Self::bit(self.keep, neighbors)
        } else {
            Self::bit(self.spawn, neighbors)
        }
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self::conway()
    }
}

fn write_counts(f: &mut fmt::Formatter<'_>, mask: u32) -> fmt::Result {
    (0..10u8)
        .filter(|&i| Rule::bit(mask, i))
        .try_for_each(|i| write!(f, "{i}"))
}

fn parse_counts(digits: &str) -> Result<u32, RuleParseError> {
    digits.chars().try_fold(0u32, |mask, c| {
        c.to_digit(10)
            .map(|d| mask | (1 << d))
            .ok_or(RuleParseError::InvalidDigit(c))
    })
}

/// `B3/S23` notation. Counts of 10 and above cannot be written this way and
/// are left out; use the masks directly for those.
impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B")?;
        write_counts(f, self.spawn)?;
        write!(f, "/S")?;
        write_counts(f, self.keep)
    }
}

impl FromStr for Rule {
    type Err = RuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut spawn = None;
        let mut keep = None;

        for part in s.split('/') {
            let mut chars = part.trim().chars();
            let (letter, slot) = match chars.next().map(|c| c.to_ascii_uppercase()) {
                Some('B') => ('B', &mut spawn),
                Some('S') => ('S', &mut keep),
                Some(c) => return Err(RuleParseError::InvalidDigit(c)),
                None => continue,
            };
            if slot.is_some() {
                return Err(RuleParseError::Duplicate(letter));
            }
            *slot = Some(parse_counts(chars.as_str().trim())?);
        }

        Ok(Self {
            keep: keep.ok_or(RuleParseError::MissingSurvival)?,
            spawn: spawn.ok_or(RuleParseError::MissingBirth)?,
        })
    }
}

/// Get all available rules
pub fn all_rules() -> Vec<(&'static str, Rule)> {
    vec![
        ("Conway", Rule::conway()),
        ("HighLife", Rule::highlife()),
        ("Seeds", Rule::seeds()),
        ("Day&Night", Rule::day_and_night()),
        ("Hex Life", Rule::hex_life()),
    ]
}

/// Get default rule (Conway's Life)
pub fn default_rule() -> Rule {
    Rule::conway()
}
