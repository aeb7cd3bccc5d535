use corti_core::{Diagnosis, Frequency, ThresholdSet, classify};

fn flat(db: i32) -> ThresholdSet {
    ThresholdSet::from_levels([db; 7])
}

#[test]
fn silent_audiogram_is_normal_hearing() {
    let ears = flat(0);
    assert_eq!(classify(&ears, &ears), Diagnosis::Normal);
}

#[test]
fn mid_bands_at_95_are_profound() {
    // Extreme bands stay at 0 — only the four PTA bands matter.
    let mut ear = flat(0);
    for freq in Frequency::PTA {
        ear.set(freq, 95);
    }
    assert_eq!(classify(&ear, &ear), Diagnosis::Profound);
}

#[test]
fn extreme_bands_are_excluded_from_the_average() {
    // 125, 250 and 8000 Hz at maximum loss must not move the diagnosis.
    let mut ear = flat(0);
    ear.set(Frequency::Hz125, 120);
    ear.set(Frequency::Hz250, 120);
    ear.set(Frequency::Hz8000, 120);
    assert_eq!(classify(&ear, &ear), Diagnosis::Normal);
}

#[test]
fn lower_band_bounds_are_inclusive() {
    // Binaural average exactly 25 dB → Mild, not Normal.
    let ear = {
        let mut e = flat(0);
        for freq in Frequency::PTA {
            e.set(freq, 25);
        }
        e
    };
    assert_eq!(classify(&ear, &ear), Diagnosis::Mild);

    assert_eq!(Diagnosis::from_average(24.999), Diagnosis::Normal);
    assert_eq!(Diagnosis::from_average(25.0), Diagnosis::Mild);
    assert_eq!(Diagnosis::from_average(39.999), Diagnosis::Mild);
    assert_eq!(Diagnosis::from_average(40.0), Diagnosis::Moderate);
    assert_eq!(Diagnosis::from_average(55.0), Diagnosis::ModeratelySevere);
    assert_eq!(Diagnosis::from_average(70.0), Diagnosis::Severe);
    assert_eq!(Diagnosis::from_average(89.999), Diagnosis::Severe);
    assert_eq!(Diagnosis::from_average(90.0), Diagnosis::Profound);
}

#[test]
fn sloped_curve_classifies_as_mild() {
    // Mid-band average per ear: (20 + 20 + 30 + 40) / 4 = 27.5 dB.
    let ear = ThresholdSet::from_levels([10, 10, 20, 20, 30, 40, 50]);
    assert_eq!(classify(&ear, &ear), Diagnosis::Mild);
}

#[test]
fn asymmetric_ears_average_together() {
    // Right PTA 20, left PTA 60 → binaural 40 → Moderate.
    let mut right = flat(0);
    let mut left = flat(0);
    for freq in Frequency::PTA {
        right.set(freq, 20);
        left.set(freq, 60);
    }
    assert_eq!(classify(&right, &left), Diagnosis::Moderate);
}

#[test]
fn classification_is_deterministic() {
    let right = ThresholdSet::from_levels([10, 10, 20, 20, 30, 40, 50]);
    let left = ThresholdSet::from_levels([5, 15, 25, 35, 45, 55, 65]);
    assert_eq!(classify(&right, &left), classify(&right, &left));
}

#[test]
fn diagnosis_labels_match_the_backend_vocabulary() {
    assert_eq!(Diagnosis::Normal.to_string(), "Normal Hearing");
    assert_eq!(
        Diagnosis::ModeratelySevere.to_string(),
        "Moderately Severe Hearing Loss"
    );
    assert_eq!(
        serde_json::to_string(&Diagnosis::Profound).unwrap(),
        "\"Profound Hearing Loss\""
    );
}
