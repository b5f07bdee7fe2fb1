use super::*;

fn notification(id: &str, read: bool) -> Notification {
    Notification {
        id: id.to_owned(),
        message: format!("message {id}"),
        is_read: read,
        created_at: None,
    }
}

#[test]
fn unread_count_ignores_read_items() {
    let mut state = NotificationsState::default();
    state.replace(vec![
        notification("1", false),
        notification("2", true),
        notification("3", false),
    ]);
    assert_eq!(state.unread_count(), 2);
}

#[test]
fn replace_is_last_write_wins() {
    let mut state = NotificationsState::default();
    state.replace(vec![notification("1", false)]);
    state.replace(vec![notification("2", true)]);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, "2");
}

#[test]
fn mark_all_read_zeroes_unread() {
    let mut state = NotificationsState::default();
    state.replace(vec![notification("1", false), notification("2", false)]);
    state.mark_all_read();
    assert_eq!(state.unread_count(), 0);
}

#[test]
fn rollback_restores_pre_toggle_snapshot() {
    let mut state = NotificationsState::default();
    state.replace(vec![notification("1", false), notification("2", true)]);

    let snapshot = state.mark_all_read();
    assert_eq!(state.unread_count(), 0);

    // Simulate the mark-read PATCH failing.
    state.rollback(snapshot);
    assert_eq!(state.unread_count(), 1);
    assert!(!state.items[0].is_read);
    assert!(state.items[1].is_read);
}
