use super::*;

#[test]
fn push_assigns_increasing_ids_in_order() {
    let mut state = NoticeState::default();
    let first = state.push(NoticeKind::Success, "Course added successfully!");
    let second = state.push(NoticeKind::Error, "Enter course title");

    assert!(second > first);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].text, "Course added successfully!");
    assert_eq!(state.items[1].kind, NoticeKind::Error);
}

#[test]
fn dismiss_removes_only_that_notice() {
    let mut state = NoticeState::default();
    let first = state.push(NoticeKind::Success, "one");
    let second = state.push(NoticeKind::Success, "two");

    state.dismiss(first);
    assert_eq!(state.items.iter().map(|n| n.id).collect::<Vec<_>>(), vec![second]);

    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = NoticeState::default();
    let first = state.push(NoticeKind::Success, "one");
    state.dismiss(first);
    assert_ne!(state.push(NoticeKind::Success, "two"), first);
}

#[test]
fn kind_maps_to_css_modifier() {
    assert_eq!(NoticeKind::Success.class(), "toast toast--success");
    assert_eq!(NoticeKind::Error.class(), "toast toast--error");
}
