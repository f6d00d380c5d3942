// crates/shared-kernel/src/value_objects/file_info.rs
use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
};

use serde::{Deserialize, Serialize};

const UNITS: [&str; 7] = ["B", "kB", "MB", "GB", "TB", "PB", "EB"];

/// Byte size of an archive on disk.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[must_use]
#[repr(transparent)]
#[serde(transparent)]
pub struct FileSize(u64);

impl FileSize {
    #[inline]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn bytes(self) -> u64 {
        self.0
    }

    /// Returns a decimal (powers of 1000) human readable representation with
    /// three significant digits: `0 B`, `999 B`, `1.5 kB`, `12.3 MB`, `123 GB`.
    pub fn to_human(self) -> String {
        let bytes = self.bytes();
        if bytes == 0 {
            return "0 B".to_string();
        }

        let magnitude = bytes.ilog10() as usize;
        let exponent = (magnitude / 3).min(UNITS.len() - 1);
        if exponent == 0 {
            return format!("{bytes} B");
        }

        let scaled = bytes as f64 / 1000_f64.powi(exponent as i32);
        let decimals = 2usize.saturating_sub(magnitude - exponent * 3);
        // Ties round away from zero: 100.5 kB renders as 101 kB, not 100 kB.
        let factor = 10_f64.powi(decimals as i32);
        let rounded = (scaled * factor).round() / factor;
        let rendered = format!("{rounded:.decimals$}");
        format!("{} {}", trim_fraction(&rendered), UNITS[exponent])
    }
}

/// Drops trailing zeros of a fixed-point rendering (`"1.20"` → `"1.2"`, `"10.0"` → `"10"`).
fn trim_fraction(rendered: &str) -> &str {
    if rendered.contains('.') {
        rendered.trim_end_matches('0').trim_end_matches('.')
    } else {
        rendered
    }
}

impl Add for FileSize {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for FileSize {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sum for FileSize {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a FileSize> for FileSize {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<u64> for FileSize {
    fn from(bytes: u64) -> Self {
        Self::new(bytes)
    }
}
impl From<FileSize> for u64 {
    fn from(size: FileSize) -> Self {
        size.bytes()
    }
}

impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.to_human())
        } else {
            write!(f, "{}", self.0)
        }
    }
}
