//! The fixed audiometric frequency set and ear laterality.

use std::fmt;

use crate::error::CoreError;

/// One of the seven frequencies measured by a standard audiogram.
///
/// The set is closed: every [`crate::ThresholdSet`] carries a level for all
/// seven bands at all times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Frequency {
    Hz125,
    Hz250,
    Hz500,
    Hz1000,
    Hz2000,
    Hz4000,
    Hz8000,
}

impl Frequency {
    /// All measured frequencies, ascending.
    pub const ALL: [Frequency; 7] = [
        Frequency::Hz125,
        Frequency::Hz250,
        Frequency::Hz500,
        Frequency::Hz1000,
        Frequency::Hz2000,
        Frequency::Hz4000,
        Frequency::Hz8000,
    ];

    /// The four mid-range frequencies that enter the pure-tone average.
    /// 125, 250 and 8000 Hz are collected but excluded, per standard
    /// audiometric practice.
    pub const PTA: [Frequency; 4] = [
        Frequency::Hz500,
        Frequency::Hz1000,
        Frequency::Hz2000,
        Frequency::Hz4000,
    ];

    pub fn hz(self) -> u32 {
        match self {
            Frequency::Hz125 => 125,
            Frequency::Hz250 => 250,
            Frequency::Hz500 => 500,
            Frequency::Hz1000 => 1000,
            Frequency::Hz2000 => 2000,
            Frequency::Hz4000 => 4000,
            Frequency::Hz8000 => 8000,
        }
    }

    /// Look up a frequency by its Hz value. Anything outside the fixed set
    /// is rejected — the form's controls can't produce such a value, but
    /// untyped callers (wire data, merged analysis output) can.
    pub fn from_hz(hz: u32) -> Result<Frequency, CoreError> {
        match hz {
            125 => Ok(Frequency::Hz125),
            250 => Ok(Frequency::Hz250),
            500 => Ok(Frequency::Hz500),
            1000 => Ok(Frequency::Hz1000),
            2000 => Ok(Frequency::Hz2000),
            4000 => Ok(Frequency::Hz4000),
            8000 => Ok(Frequency::Hz8000),
            other => Err(CoreError::InvalidFrequency(other)),
        }
    }

    /// Position within [`Frequency::ALL`], used as the storage index.
    pub(crate) fn index(self) -> usize {
        match self {
            Frequency::Hz125 => 0,
            Frequency::Hz250 => 1,
            Frequency::Hz500 => 2,
            Frequency::Hz1000 => 3,
            Frequency::Hz2000 => 4,
            Frequency::Hz4000 => 5,
            Frequency::Hz8000 => 6,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Hz", self.hz())
    }
}

/// Which ear a threshold reading belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ear {
    Right,
    Left,
}

impl fmt::Display for Ear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ear::Right => write!(f, "right"),
            Ear::Left => write!(f, "left"),
        }
    }
}
