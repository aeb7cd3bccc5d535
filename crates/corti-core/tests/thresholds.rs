use std::collections::BTreeMap;

use corti_core::thresholds::{MAX_DB_HL, MIN_DB_HL};
use corti_core::{CoreError, Frequency, PartialThresholds, ThresholdSet};

#[test]
fn set_overwrites_a_single_band() {
    let mut set = ThresholdSet::default();
    set.set(Frequency::Hz1000, 45);
    assert_eq!(set.get(Frequency::Hz1000), 45);
    assert_eq!(set.get(Frequency::Hz500), 0);
}

#[test]
fn out_of_range_levels_clamp_to_the_nearest_bound() {
    let mut set = ThresholdSet::default();
    set.set(Frequency::Hz500, 500);
    assert_eq!(set.get(Frequency::Hz500), MAX_DB_HL);
    set.set(Frequency::Hz500, -60);
    assert_eq!(set.get(Frequency::Hz500), MIN_DB_HL);
}

#[test]
fn unknown_frequencies_are_rejected() {
    assert_eq!(Frequency::from_hz(300), Err(CoreError::InvalidFrequency(300)));
    assert_eq!(Frequency::from_hz(0), Err(CoreError::InvalidFrequency(0)));
    assert_eq!(Frequency::from_hz(1000), Ok(Frequency::Hz1000));
}

#[test]
fn merge_touches_only_present_non_null_bands() {
    let mut target = ThresholdSet::from_levels([10, 10, 20, 20, 30, 40, 50]);
    let untouched = ThresholdSet::from_levels([10, 10, 20, 20, 30, 40, 50]);

    let partial: PartialThresholds =
        [(500, Some(30)), (2000, None)].into_iter().collect();
    target.merge(&partial);

    assert_eq!(target.get(Frequency::Hz500), 30);
    // Null entry and absent bands stay as they were.
    assert_eq!(target.get(Frequency::Hz2000), untouched.get(Frequency::Hz2000));
    for freq in Frequency::ALL {
        if freq != Frequency::Hz500 {
            assert_eq!(target.get(freq), untouched.get(freq));
        }
    }
}

#[test]
fn merge_clamps_and_ignores_foreign_keys() {
    let mut target = ThresholdSet::default();
    let partial: PartialThresholds =
        [(4000, Some(999)), (300, Some(15)), (6000, Some(15))]
            .into_iter()
            .collect();
    target.merge(&partial);

    assert_eq!(target.get(Frequency::Hz4000), MAX_DB_HL);
    // The key set never grows or shrinks: all seven bands still readable.
    assert_eq!(target.iter().count(), 7);
}

#[test]
fn wire_round_trip_preserves_levels() {
    let set = ThresholdSet::from_levels([10, 10, 20, 20, 30, 40, 50]);
    let json = serde_json::to_string(&set).unwrap();
    assert!(json.contains("\"125\":10"));
    assert!(json.contains("\"8000\":50"));

    let back: ThresholdSet = serde_json::from_str(&json).unwrap();
    assert_eq!(back, set);
}

#[test]
fn wire_data_must_cover_every_band() {
    let mut map = BTreeMap::new();
    map.insert(125u32, 10i32);
    map.insert(250, 10);
    let err = ThresholdSet::try_from(map).unwrap_err();
    assert!(matches!(err, CoreError::MissingFrequency(_)));
}

#[test]
fn wire_data_with_foreign_keys_is_rejected() {
    let mut map: BTreeMap<u32, i32> = Frequency::ALL.iter().map(|f| (f.hz(), 0)).collect();
    map.insert(6000, 35);
    let err = ThresholdSet::try_from(map).unwrap_err();
    assert_eq!(err, CoreError::InvalidFrequency(6000));
}

#[test]
fn pure_tone_average_uses_the_four_mid_bands() {
    let set = ThresholdSet::from_levels([120, 120, 20, 20, 30, 40, 120]);
    assert!((set.pure_tone_average() - 27.5).abs() < f64::EPSILON);
}
