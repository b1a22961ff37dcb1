//! Tests for the traversal engine: visit orders, determinism, edge cases

use rstest::rstest;

use treelab::{traverse, traverse_values, TraversalOrder, TreeBuilder, TreeVariant};

// ============================================================
// Canonical Sequence Tests
// ============================================================

#[rstest]
#[case(TraversalOrder::Pre, vec![50, 30, 20, 40, 70, 60, 80])]
#[case(TraversalOrder::In, vec![20, 30, 40, 50, 60, 70, 80])]
#[case(TraversalOrder::Post, vec![20, 40, 30, 60, 80, 70, 50])]
fn given_sample_bst_when_traversing_then_returns_canonical_sequence(
    #[case] order: TraversalOrder,
    #[case] expected: Vec<i64>,
) {
    let model = TreeBuilder::build(TreeVariant::Bst, &[50, 30, 70, 20, 40, 60, 80]);
    assert_eq!(traverse_values(&model, order), expected);
}

// ============================================================
// In-Order Sortedness Tests
// ============================================================

#[rstest]
#[case(vec![2, 1, 3, 4])]
#[case(vec![5, 1, 9, 3, 7])]
#[case(vec![1, 2, 3, 4, 5, 6])]
#[case(vec![6, 5, 4, 3, 2, 1])]
#[case(vec![8, 3, 10, 1, 6, 14, 4, 7, 13])]
fn given_any_duplicate_free_bst_when_traversing_in_order_then_values_are_sorted(
    #[case] values: Vec<i64>,
) {
    let model = TreeBuilder::build(TreeVariant::Bst, &values);

    let mut sorted = values.clone();
    sorted.sort_unstable();
    assert_eq!(traverse_values(&model, TraversalOrder::In), sorted);
}

// ============================================================
// Determinism Tests
// ============================================================

#[rstest]
#[case(TraversalOrder::Pre)]
#[case(TraversalOrder::In)]
#[case(TraversalOrder::Post)]
fn given_unmodified_model_when_traversing_twice_then_sequences_are_equal(
    #[case] order: TraversalOrder,
) {
    let model = TreeBuilder::build(TreeVariant::Bst, &[50, 30, 70, 20, 40, 60, 80]);

    let first = traverse(&model, order);
    let second = traverse(&model, order);
    assert_eq!(first, second);
}

// ============================================================
// Edge Case Tests
// ============================================================

#[rstest]
#[case(TraversalOrder::Pre)]
#[case(TraversalOrder::In)]
#[case(TraversalOrder::Post)]
fn given_empty_model_when_traversing_then_sequence_is_empty(#[case] order: TraversalOrder) {
    let model = TreeBuilder::build(TreeVariant::Bst, &[]);
    assert!(traverse(&model, order).is_empty());
}

#[test]
fn given_single_node_when_traversing_then_all_orders_agree() {
    let model = TreeBuilder::build(TreeVariant::Bst, &[7]);

    for order in [TraversalOrder::Pre, TraversalOrder::In, TraversalOrder::Post] {
        assert_eq!(traverse_values(&model, order), vec![7]);
    }
}

#[test]
fn given_right_chain_when_traversing_then_absent_children_are_skipped() {
    // Ascending BST input: every node has only a right child
    let model = TreeBuilder::build(TreeVariant::Bst, &[1, 2, 3, 4]);

    assert_eq!(
        traverse_values(&model, TraversalOrder::Pre),
        vec![1, 2, 3, 4]
    );
    assert_eq!(
        traverse_values(&model, TraversalOrder::In),
        vec![1, 2, 3, 4]
    );
    assert_eq!(
        traverse_values(&model, TraversalOrder::Post),
        vec![4, 3, 2, 1]
    );
}

#[test]
fn given_level_order_model_when_traversing_then_positional_children_drive_the_order() {
    let model = TreeBuilder::build(TreeVariant::LevelOrder, &[1, 2, 3]);

    assert_eq!(traverse_values(&model, TraversalOrder::In), vec![2, 1, 3]);
    assert_eq!(
        traverse_values(&model, TraversalOrder::Post),
        vec![2, 3, 1]
    );
}

#[test]
fn given_node_count_when_traversing_then_every_node_is_visited_once() {
    let model = TreeBuilder::build(TreeVariant::Bst, &[8, 3, 10, 1, 6, 14]);

    for order in [TraversalOrder::Pre, TraversalOrder::In, TraversalOrder::Post] {
        let mut ids = traverse(&model, order);
        assert_eq!(ids.len(), model.node_count());
        ids.sort_unstable_by_key(|id| id.as_key());
        ids.dedup();
        assert_eq!(ids.len(), model.node_count(), "no node visited twice");
    }
}
