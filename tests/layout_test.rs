//! Tests for the render boundary: layout snapshots and terminal display

use std::collections::HashSet;

use treelab::layout::{project, LayoutNode, TreeDisplay};
use treelab::{TreeBuilder, TreeVariant};

fn collect_ids<'a>(node: &'a LayoutNode, ids: &mut Vec<&'a str>) {
    ids.push(&node.id);
    for child in &node.children {
        collect_ids(child, ids);
    }
}

#[test]
fn given_empty_model_when_projecting_then_returns_none() {
    let model = TreeBuilder::build(TreeVariant::Bst, &[]);
    assert!(project(&model).is_none());
}

#[test]
fn given_sample_bst_when_projecting_then_grid_positions_follow_rank_and_depth() {
    let model = TreeBuilder::build(TreeVariant::Bst, &[50, 30, 70, 20, 40, 60, 80]);

    let root = project(&model).unwrap();
    assert_eq!(root.value, 50);
    assert_eq!(root.depth, 0);
    // In-order rank of 50 among seven sorted values
    assert_eq!(root.x, 3);
    assert_eq!(root.children.len(), 2);

    let left = &root.children[0];
    assert_eq!(left.value, 30);
    assert_eq!(left.depth, 1);
    assert_eq!(left.x, 1);

    let right = &root.children[1];
    assert_eq!(right.value, 70);
    assert_eq!(right.x, 5);
}

#[test]
fn given_projection_when_collecting_ids_then_ids_are_unique() {
    let model = TreeBuilder::build(TreeVariant::LevelOrder, &[9, 9, 9, 9, 9]);

    let root = project(&model).unwrap();
    let mut ids = Vec::new();
    collect_ids(&root, &mut ids);

    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(ids.len(), 5);
    assert_eq!(unique.len(), 5, "renderer keys must be distinct");
}

#[test]
fn given_projection_when_serializing_then_json_carries_the_hierarchy() {
    let model = TreeBuilder::build(TreeVariant::Bst, &[2, 1, 3]);

    let json = serde_json::to_value(project(&model).unwrap()).unwrap();
    assert_eq!(json["value"], 2);
    assert_eq!(json["depth"], 0);
    assert_eq!(json["children"][0]["value"], 1);
    assert_eq!(json["children"][1]["value"], 3);
    assert!(json["id"].as_str().unwrap().starts_with('n'));
}

#[test]
fn given_model_when_rendering_tree_string_then_values_appear() {
    let model = TreeBuilder::build(TreeVariant::Bst, &[50, 30, 70]);

    let rendered = model.to_tree_string().to_string();
    assert!(rendered.contains("50"));
    assert!(rendered.contains("30"));
    assert!(rendered.contains("70"));
}

#[test]
fn given_empty_model_when_rendering_tree_string_then_placeholder_appears() {
    let model = TreeBuilder::build(TreeVariant::Bst, &[]);
    assert!(model.to_tree_string().to_string().contains("(empty tree)"));
}
