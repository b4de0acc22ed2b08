use super::*;

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn sample(initial: Option<usize>) -> PickerState {
    PickerState::new(labels(&["dev", "staging *", "prod-east", "prod-west"]), initial, true, 5)
}

#[test]
fn initial_cursor_is_the_highlight() {
    let state = sample(Some(1));
    assert_eq!(state.selected(), Some(1));
}

#[test]
fn no_highlight_means_no_selection() {
    let state = sample(None);
    assert_eq!(state.selected(), None);
    assert!(state.visible().iter().all(|(_, _, cursor)| !cursor));
}

#[test]
fn out_of_range_initial_is_ignored() {
    assert_eq!(sample(Some(10)).selected(), None);
}

#[test]
fn next_from_nothing_starts_at_top() {
    let mut state = sample(None);
    state.next();
    assert_eq!(state.selected(), Some(0));
}

#[test]
fn previous_from_nothing_starts_at_bottom() {
    let mut state = sample(None);
    state.previous();
    assert_eq!(state.selected(), Some(3));
}

#[test]
fn navigation_wraps() {
    let mut state = sample(Some(3));
    state.next();
    assert_eq!(state.selected(), Some(0));
    state.previous();
    assert_eq!(state.selected(), Some(3));
}

#[test]
fn filter_narrows_and_maps_back_to_original_index() {
    let mut state = sample(None);
    for c in "d-w".chars() {
        state.push_char(c);
    }
    assert_eq!(state.match_count(), 1);
    assert_eq!(state.selected(), Some(3));
}

#[test]
fn filter_ignores_case_and_spaces() {
    let mut state = sample(None);
    for c in "PROD-E AST".chars() {
        state.push_char(c);
    }
    assert_eq!(state.selected(), Some(2));
}

#[test]
fn filter_keeps_cursor_on_same_label_when_still_listed() {
    let mut state = sample(Some(3));
    state.push_char('w');
    assert_eq!(state.selected(), Some(3));
}

#[test]
fn no_matches_clears_selection() {
    let mut state = sample(Some(0));
    for c in "xyz".chars() {
        state.push_char(c);
    }
    assert_eq!(state.match_count(), 0);
    assert_eq!(state.selected(), None);
    state.next();
    assert_eq!(state.selected(), None);
}

#[test]
fn backspace_and_clear_restore_the_list() {
    let mut state = sample(None);
    state.push_char('x');
    state.backspace();
    assert_eq!(state.match_count(), 4);
    state.push_char('p');
    state.clear_filter();
    assert_eq!(state.filter(), "");
    assert_eq!(state.match_count(), 4);
}

#[test]
fn typing_is_ignored_when_search_disabled() {
    let mut state = PickerState::new(labels(&["a", "b"]), Some(0), false, 5);
    state.push_char('b');
    assert_eq!(state.filter(), "");
    assert_eq!(state.match_count(), 2);
}

#[test]
fn window_scrolls_to_keep_cursor_visible() {
    let names: Vec<String> = (0..10).map(|i| format!("ctx-{i}")).collect();
    let mut state = PickerState::new(names, Some(7), true, 3);
    let visible: Vec<usize> = state.visible().iter().map(|(i, _, _)| *i).collect();
    assert_eq!(visible, vec![5, 6, 7]);
    assert!(state.has_more_above());
    assert!(state.has_more_below());

    state.next();
    state.next();
    let visible: Vec<usize> = state.visible().iter().map(|(i, _, _)| *i).collect();
    assert_eq!(visible, vec![7, 8, 9]);
    assert!(!state.has_more_below());

    state.next();
    assert_eq!(state.selected(), Some(0));
    assert!(!state.has_more_above());
}

#[test]
fn empty_list_has_nothing_to_select() {
    let mut state = PickerState::new(Vec::new(), None, true, 5);
    assert!(state.is_empty());
    state.next();
    state.previous();
    assert_eq!(state.selected(), None);
}
