use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        LightgridError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        LightgridError::codec("x")
            .to_string()
            .contains("codec error:")
    );
    assert!(
        LightgridError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = LightgridError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn edit_rejections_describe_the_cell() {
    assert!(EditRejected::PaddedArea.to_string().contains("padding"));
    assert!(EditRejected::OutOfFrame.to_string().contains("outside the frame"));
    assert_ne!(EditRejected::PaddedArea, EditRejected::OutsideBuffer);
}
