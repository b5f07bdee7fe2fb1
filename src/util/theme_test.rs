use super::*;
use crate::state::session::MemoryStorage;

#[test]
fn missing_preference_defaults_to_light() {
    let backend = MemoryStorage::new();
    assert_eq!(read_preference(&backend), Theme::Light);
}

#[test]
fn unknown_value_defaults_to_light() {
    let backend = MemoryStorage::new();
    backend.set_item(THEME_KEY, "sepia");
    assert_eq!(read_preference(&backend), Theme::Light);
}

#[test]
fn toggle_round_trips_through_storage() {
    // Simulated reload: a fresh read must return the last toggled value.
    let backend = MemoryStorage::new();

    let dark = toggle(&backend, read_preference(&backend));
    assert_eq!(dark, Theme::Dark);
    assert_eq!(read_preference(&backend), Theme::Dark);

    let light = toggle(&backend, read_preference(&backend));
    assert_eq!(light, Theme::Light);
    assert_eq!(read_preference(&backend), Theme::Light);
}
