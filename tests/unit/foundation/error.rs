use super::*;

#[test]
fn watch_constructor_picks_the_right_variant() {
    assert!(matches!(
        SceneryError::watch("thread refused"),
        SceneryError::Watch(_)
    ));
}

#[test]
fn display_prefixes_the_surface() {
    assert_eq!(
        SceneryError::watch("spawn failed").to_string(),
        "watch error: spawn failed"
    );
}

#[test]
fn anyhow_errors_pass_through_transparently() {
    let err: SceneryError = anyhow::anyhow!("disk on fire").into();
    assert_eq!(err.to_string(), "disk on fire");
}
