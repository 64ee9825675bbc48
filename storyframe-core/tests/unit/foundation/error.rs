use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        StoryError::invalid_image("x")
            .to_string()
            .contains("invalid image:")
    );
    assert!(
        StoryError::invalid_config("x")
            .to_string()
            .contains("invalid config:")
    );
    assert!(
        StoryError::invalid_radius("x")
            .to_string()
            .contains("invalid radius:")
    );
    assert!(
        StoryError::invalid_mask("x")
            .to_string()
            .contains("invalid mask:")
    );
    assert!(
        StoryError::export("x")
            .to_string()
            .contains("export failure:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = StoryError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
