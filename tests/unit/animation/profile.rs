use super::*;

#[test]
fn defaults_match_house_style() {
    let p = RevealProfile::default();
    assert_eq!(p.duration, 1.0);
    assert_eq!(p.stagger, 0.03);
    assert_eq!(p.ease, Ease::OutQuint);
    assert_eq!(p.offset_percent, 100.0);
    assert_eq!(p.start.to_string(), "top 75%");
    assert!(p.split.mask);
    p.validate().unwrap();
}

#[test]
fn total_duration_covers_last_unit() {
    let p = RevealProfile::default();
    assert_eq!(p.total_duration(0), 0.0);
    assert_eq!(p.total_duration(1), 1.0);
    assert!((p.total_duration(11) - 1.3).abs() < 1e-9);
}

#[test]
fn partial_json_fills_defaults() {
    let p = RevealProfile::from_json(r#"{ "stagger": 0.05, "start": "top 90%" }"#).unwrap();
    assert_eq!(p.stagger, 0.05);
    assert_eq!(p.duration, 1.0);
    assert_eq!(p.start.to_string(), "top 90%");
}

#[test]
fn invalid_profiles_are_rejected() {
    assert!(RevealProfile::from_json(r#"{ "duration": 0 }"#).is_err());
    assert!(RevealProfile::from_json(r#"{ "stagger": -0.1 }"#).is_err());
    assert!(RevealProfile::from_json(r#"{ "start": "sideways" }"#).is_err());
    assert!(RevealProfile::from_json("[").is_err());
}
