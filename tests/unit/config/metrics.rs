use super::*;

#[test]
fn defaults_match_fixed_constants() {
    let m = CalloutMetrics::default();
    assert_eq!(m.arrow_base_width, 24.0);
    assert_eq!(m.arrow_height, 12.0);
    assert_eq!(m.layout_margin, 6.0);
    assert_eq!(m.content_insets, CONTENT_INSETS);
    assert_eq!(m.arrow_inset(), -6.0);
    assert_eq!(m.layout_margins(), Insets::uniform(6.0));
    m.validate().unwrap();
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let m = CalloutMetrics::from_json_str(r#"{ "arrow_height": 16 }"#).unwrap();
    assert_eq!(m.arrow_height, 16.0);
    assert_eq!(m.arrow_base_width, ARROW_BASE_WIDTH);
    assert_eq!(m.arrow_inset(), -10.0);
}

#[test]
fn reader_and_str_agree() {
    let json = r#"{ "layout_margin": 8, "present_scale": 0.9 }"#;
    let a = CalloutMetrics::from_json_str(json).unwrap();
    let b = CalloutMetrics::from_reader(std::io::Cursor::new(json.as_bytes())).unwrap();
    assert_eq!(a, b);
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = CalloutMetrics::from_json_str("{ arrow_height: ").unwrap_err();
    assert!(matches!(err, CalloutError::Serde(_)));
}

#[test]
fn out_of_range_values_are_rejected() {
    for json in [
        r#"{ "arrow_height": -1 }"#,
        r#"{ "layout_margin": -0.5 }"#,
        r#"{ "present_scale": 0 }"#,
        r#"{ "present_scale": 1.5 }"#,
        r#"{ "transition_duration_secs": 0 }"#,
    ] {
        let err = CalloutMetrics::from_json_str(json).unwrap_err();
        assert!(
            err.to_string().contains("validation error:"),
            "expected validation failure for {json}"
        );
    }
}

#[test]
fn negative_content_inset_names_the_side() {
    let m = CalloutMetrics {
        content_insets: Insets::new(0.0, -2.0, 0.0, 0.0),
        ..CalloutMetrics::default()
    };
    let err = m.validate().unwrap_err();
    assert!(err.to_string().contains("content_insets.top"));
}
