use super::*;

#[test]
fn defaults_fill_missing_fields() {
    let s = Settings::from_json_str("{}").unwrap();
    assert_eq!(s, Settings::default());
    assert_eq!(s.frame().unwrap(), Frame::new(16, 50).unwrap());
    assert_eq!(s.element_type, LayoutMode::Tree);
    assert!(!s.is_export_ready());
}

#[test]
fn parses_full_document() {
    let s = Settings::from_json_str(
        r#"{ "directory": "/tmp/lights", "dimensions": { "width": 20, "height": 30 },
             "element_type": "matrix", "pixel_size": 6.0, "gap": 2.0 }"#,
    )
    .unwrap();
    assert_eq!(s.dimensions, Dimensions { width: 20, height: 30 });
    let params = s.layout_params();
    assert_eq!(params.mode, LayoutMode::Matrix);
    assert_eq!(params.pixel_size, 6.0);
    assert_eq!(params.base_gap, 2.0);
    assert!(s.is_export_ready());
    assert_eq!(s.layout().unwrap().frame().columns, 20);
}

#[test]
fn invalid_values_are_rejected() {
    let zero_rows = r#"{ "dimensions": { "width": 4, "height": 0 } }"#;
    assert!(matches!(
        Settings::from_json_str(zero_rows),
        Err(LightgridError::Validation(_))
    ));
    assert!(Settings::from_json_str(r#"{ "pixel_size": 0 }"#).is_err());
    assert!(Settings::from_json_str(r#"{ "gap": -1 }"#).is_err());
    assert!(matches!(
        Settings::from_json_str(r#"{ "element_type": "cone" }"#),
        Err(LightgridError::Serde(_))
    ));
}

#[test]
fn json_round_trip_preserves_settings() {
    let s = Settings {
        directory: "out".to_string(),
        ..Settings::default()
    };
    let back = Settings::from_json_str(&s.to_json_pretty().unwrap()).unwrap();
    assert_eq!(back, s);
}
