// crates/shared-kernel/src/value_objects/counts.rs
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Number of games stored in an archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameCount(u64);

impl GameCount {
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Reads a count the way the counts file is meant to be read: the leading
    /// run of ASCII digits is the value, anything unparsable is zero.
    ///
    /// `"123abc"` yields 123, `"abc"`, `""` and `"-4"` yield zero.
    pub fn parse_lenient(raw: &str) -> Self {
        let trimmed = raw.trim_start();
        let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        Self(trimmed[..end].parse().unwrap_or_default())
    }

    /// Formats with a `,` between every group of three digits.
    pub fn to_grouped(self) -> String {
        let digits = self.0.to_string();
        let len = digits.len();
        let mut out = String::with_capacity(len + len / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }
}

impl Default for GameCount {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for GameCount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for GameCount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sum for GameCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a GameCount> for GameCount {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<u64> for GameCount {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<GameCount> for u64 {
    fn from(count: GameCount) -> Self {
        count.value()
    }
}

mod display {
    use std::fmt;

    use super::GameCount;

    impl fmt::Display for GameCount {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            if f.alternate() {
                write!(f, "{}", self.to_grouped())
            } else {
                write!(f, "{}", self.value())
            }
        }
    }
}
