use super::*;

#[test]
fn default_waits_for_scroll() {
    let c = RunConfig::default();
    assert!(c.scroll_gated);
    assert_eq!(c.start_delay, 0.0);
}

#[test]
fn sanitized_clamps_bad_delays() {
    assert_eq!(RunConfig::immediate(-2.0).sanitized().start_delay, 0.0);
    assert_eq!(RunConfig::on_scroll(f64::NAN).sanitized().start_delay, 0.0);
    assert_eq!(RunConfig::immediate(0.5).sanitized(), RunConfig::immediate(0.5));
}

#[test]
fn json_fields_are_optional() {
    let c: RunConfig = serde_json::from_str(r#"{ "start_delay": 0.2 }"#).unwrap();
    assert_eq!(c, RunConfig::on_scroll(0.2));
}
