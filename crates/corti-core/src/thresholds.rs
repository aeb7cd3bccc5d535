//! Per-ear hearing-loss threshold storage.
//!
//! A [`ThresholdSet`] is a total mapping from the seven audiometric
//! frequencies to a dB HL level. Totality is structural — the backing array
//! always has all seven bands, so no partial map is ever observable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::frequency::Frequency;

/// Lowest representable threshold, in dB HL.
pub const MIN_DB_HL: i32 = -10;

/// Highest representable threshold, in dB HL.
pub const MAX_DB_HL: i32 = 120;

/// Slider step, in dB. Enforced by the form controls, not re-validated here.
pub const DB_STEP: i32 = 5;

/// Clamp a level to the representable dB HL range. Out-of-range input is
/// pulled to the nearest bound rather than rejected.
pub fn clamp_db(db: i32) -> i32 {
    db.clamp(MIN_DB_HL, MAX_DB_HL)
}

/// Threshold levels for one ear across all seven frequencies.
///
/// Serializes to the backend's wire shape, an object keyed by Hz:
/// `{"125": 10, "250": 10, ..., "8000": 50}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "BTreeMap<u32, i32>", try_from = "BTreeMap<u32, i32>")]
pub struct ThresholdSet {
    levels: [i32; 7],
}

impl Default for ThresholdSet {
    /// A flat 0 dB HL curve — no measured loss at any band.
    fn default() -> Self {
        ThresholdSet { levels: [0; 7] }
    }
}

impl ThresholdSet {
    /// Build a set from levels listed in ascending frequency order
    /// (125 Hz first). Each level is clamped.
    pub fn from_levels(levels: [i32; 7]) -> Self {
        ThresholdSet {
            levels: levels.map(clamp_db),
        }
    }

    pub fn get(&self, freq: Frequency) -> i32 {
        self.levels[freq.index()]
    }

    /// Overwrite the level at `freq`, clamping to `[-10, 120]`.
    pub fn set(&mut self, freq: Frequency, db: i32) {
        self.levels[freq.index()] = clamp_db(db);
    }

    /// Ingest externally supplied levels (the AI analysis output).
    ///
    /// Only frequencies that are present and non-null in `partial` are
    /// overwritten, after the same clamping as [`ThresholdSet::set`].
    /// Frequencies absent or null are left untouched, and keys outside the
    /// fixed set are ignored — the key set never changes.
    pub fn merge(&mut self, partial: &PartialThresholds) {
        for freq in Frequency::ALL {
            if let Some(Some(db)) = partial.get(freq.hz()) {
                self.set(freq, db);
            }
        }
    }

    /// Arithmetic mean of the four mid-range bands (500–4000 Hz), in dB HL.
    pub fn pure_tone_average(&self) -> f64 {
        let sum: i32 = Frequency::PTA.iter().map(|f| self.get(*f)).sum();
        f64::from(sum) / Frequency::PTA.len() as f64
    }

    /// Iterate `(frequency, level)` pairs in ascending frequency order.
    pub fn iter(&self) -> impl Iterator<Item = (Frequency, i32)> + '_ {
        Frequency::ALL.into_iter().map(|f| (f, self.get(f)))
    }
}

impl From<ThresholdSet> for BTreeMap<u32, i32> {
    fn from(set: ThresholdSet) -> Self {
        set.iter().map(|(f, db)| (f.hz(), db)).collect()
    }
}

impl TryFrom<BTreeMap<u32, i32>> for ThresholdSet {
    type Error = CoreError;

    /// Wire data must carry every canonical frequency and nothing else.
    /// Levels are clamped on the way in.
    fn try_from(map: BTreeMap<u32, i32>) -> Result<Self, CoreError> {
        if let Some(unknown) = map.keys().find(|hz| Frequency::from_hz(**hz).is_err()) {
            return Err(CoreError::InvalidFrequency(*unknown));
        }

        let mut set = ThresholdSet::default();
        for freq in Frequency::ALL {
            let db = map
                .get(&freq.hz())
                .copied()
                .ok_or(CoreError::MissingFrequency(freq.hz()))?;
            set.set(freq, db);
        }
        Ok(set)
    }
}

/// Sparse per-frequency levels as returned by the image-analysis endpoint.
///
/// Keys are raw Hz values (the analysis service is not bound to our fixed
/// set); a null value means the band could not be read from the image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartialThresholds(BTreeMap<u32, Option<i32>>);

impl PartialThresholds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, hz: u32, db: Option<i32>) {
        self.0.insert(hz, db);
    }

    pub fn get(&self, hz: u32) -> Option<Option<i32>> {
        self.0.get(&hz).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(u32, Option<i32>)> for PartialThresholds {
    fn from_iter<I: IntoIterator<Item = (u32, Option<i32>)>>(iter: I) -> Self {
        PartialThresholds(iter.into_iter().collect())
    }
}

/// The two ears of one audiogram.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdPair {
    pub right: ThresholdSet,
    pub left: ThresholdSet,
}
