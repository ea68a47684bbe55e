use super::*;

#[test]
fn endpoints_are_stable() {
    for ease in Ease::ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in Ease::ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn power4_out_is_quint_out() {
    let ease = Ease::parse("power4.out").unwrap();
    assert_eq!(ease, Ease::OutQuint);
    let expected = 1.0 - 0.5f64.powi(5);
    assert!((ease.apply(0.5) - expected).abs() < 1e-12);
}

#[test]
fn decelerating_curve_front_loads_motion() {
    // Most of the distance is covered in the first fifth of the duration.
    assert!(Ease::OutQuint.apply(0.2) > 0.6);
}

#[test]
fn parse_is_case_insensitive_and_rejects_unknown() {
    assert_eq!(Ease::parse("Expo.InOut").unwrap(), Ease::InOutExpo);
    assert_eq!(Ease::parse("none").unwrap(), Ease::Linear);
    assert!(Ease::parse("bounce.out").is_err());
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::OutCubic.apply(-3.0), 0.0);
    assert_eq!(Ease::OutCubic.apply(7.0), 1.0);
}

#[test]
fn names_parse_back_and_serialize_as_names() {
    for ease in Ease::ALL {
        assert_eq!(Ease::parse(ease.name()).unwrap(), ease);
    }
    assert_eq!(
        serde_json::to_string(&Ease::OutQuint).unwrap(),
        "\"out_quint\""
    );
    let e: Ease = serde_json::from_str("\"power2.out\"").unwrap();
    assert_eq!(e, Ease::OutCubic);
    assert!(serde_json::from_str::<Ease>("\"wobble\"").is_err());
}
