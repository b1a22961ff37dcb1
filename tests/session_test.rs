//! Tests for the presentation shell: selection, toasts, walk flow

use std::time::Duration;

use treelab::session::Session;
use treelab::util::testing;
use treelab::{TraversalOrder, TreeVariant};

fn session() -> Session {
    testing::init_test_setup();
    Session::new(TreeVariant::Bst, Duration::ZERO)
}

// ============================================================
// Build Tests
// ============================================================

#[test]
fn given_valid_input_when_building_then_success_toast_and_model_present() {
    let mut session = session();

    let toast = session.build("50, 30, 70");

    assert!(!toast.is_error());
    assert_eq!(session.model().unwrap().node_count(), 3);
}

#[test]
fn given_non_numeric_input_when_building_then_error_toast_and_no_model() {
    let mut session = session();

    let toast = session.build("a, b, c");

    assert!(toast.is_error());
    assert!(session.model().is_none());
}

#[test]
fn given_existing_model_when_rebuilding_then_model_is_replaced_wholesale() {
    let mut session = session();
    session.build("50, 30, 70");
    session.select_value(30);

    session.build("1, 2");

    assert_eq!(session.model().unwrap().node_count(), 2);
    assert!(session.selected().is_none());
    assert!(session.last_walk().is_empty());
}

#[test]
fn given_model_when_switching_variant_then_model_is_discarded() {
    let mut session = session();
    session.build("50, 30, 70");

    let toast = session.set_variant(TreeVariant::LevelOrder);

    assert!(!toast.is_error());
    assert!(session.model().is_none());
    assert_eq!(session.variant(), TreeVariant::LevelOrder);
}

// ============================================================
// Selection Tests
// ============================================================

#[test]
fn given_present_value_when_selecting_then_node_is_selected() {
    let mut session = session();
    session.build("50, 30, 70");

    let toast = session.select_value(30);

    assert!(!toast.is_error());
    assert_eq!(session.selected_value(), Some(30));
}

#[test]
fn given_selected_value_when_selecting_again_then_selection_toggles_off() {
    let mut session = session();
    session.build("50, 30, 70");
    session.select_value(30);

    session.select_value(30);

    assert!(session.selected().is_none());
}

#[test]
fn given_absent_value_when_selecting_then_error_toast() {
    let mut session = session();
    session.build("50, 30, 70");

    assert!(session.select_value(99).is_error());
    assert!(session.selected().is_none());
}

// ============================================================
// Add / Delete Tests
// ============================================================

#[test]
fn given_no_selection_when_adding_child_then_error_toast() {
    let mut session = session();
    session.build("50, 30, 70");

    assert!(session.add_child(10).is_error());
}

#[test]
fn given_selected_leaf_when_adding_children_then_third_add_reports_capacity() {
    let mut session = session();
    session.build("50");
    session.select_value(50);

    assert!(!session.add_child(30).is_error());
    assert!(!session.add_child(70).is_error());
    let toast = session.add_child(99);

    assert!(toast.is_error());
    assert_eq!(session.model().unwrap().node_count(), 3);
}

#[test]
fn given_selected_root_when_deleting_then_model_is_empty_and_selection_cleared() {
    let mut session = session();
    session.build("50, 30, 70");
    session.select_value(50);

    let toast = session.delete_selected();

    assert!(!toast.is_error());
    assert!(session.model().unwrap().is_empty());
    assert!(session.selected().is_none());
}

#[test]
fn given_no_selection_when_deleting_then_error_toast() {
    let mut session = session();
    session.build("50, 30, 70");

    assert!(session.delete_selected().is_error());
    assert_eq!(session.model().unwrap().node_count(), 3);
}

// ============================================================
// Walk Tests
// ============================================================

#[test]
fn given_no_model_when_walking_then_error_toast() {
    let mut session = session();

    let toast = session.walk(TraversalOrder::Pre, |_, _| {});

    assert!(toast.is_error());
}

#[test]
fn given_model_when_walking_then_callback_fires_and_result_is_stored() {
    let mut session = session();
    session.build("50, 30, 70, 20, 40, 60, 80");

    let mut visited = Vec::new();
    let toast = session.walk(TraversalOrder::In, |_, value| visited.push(value));

    assert!(!toast.is_error());
    assert_eq!(visited, vec![20, 30, 40, 50, 60, 70, 80]);
    assert_eq!(session.last_walk(), visited.as_slice());
}

#[test]
fn given_unmodified_model_when_walking_twice_then_results_are_equal() {
    let mut session = session();
    session.build("8, 3, 10, 1, 6");

    session.walk(TraversalOrder::Post, |_, _| {});
    let first = session.last_walk().to_vec();
    session.walk(TraversalOrder::Post, |_, _| {});

    assert_eq!(session.last_walk(), first.as_slice());
}
