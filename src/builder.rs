use std::cmp::Ordering;

use tracing::{debug, instrument};

use crate::arena::{Side, TreeModel, TreeVariant};

/// Constructs a `TreeModel` from a flat ordered value sequence.
///
/// The variant tag selects the placement policy; dispatch is exhaustive
/// at compile time. An empty sequence yields an empty model.
pub struct TreeBuilder;

impl TreeBuilder {
    #[instrument(level = "debug")]
    pub fn build(variant: TreeVariant, values: &[i64]) -> TreeModel {
        match variant {
            TreeVariant::Bst => Self::build_bst(values),
            TreeVariant::LevelOrder => Self::build_level_order(values),
        }
    }

    /// Ordered insertion in input order: less goes left, greater goes
    /// right, until a free slot is reached. No rebalancing, so the shape
    /// depends on insertion order.
    fn build_bst(values: &[i64]) -> TreeModel {
        let mut model = TreeModel::new(TreeVariant::Bst);
        for &value in values {
            Self::insert_bst(&mut model, value);
        }
        model
    }

    fn insert_bst(model: &mut TreeModel, value: i64) {
        let Some(root) = model.root() else {
            model.insert_root(value);
            return;
        };

        let mut current = root;
        loop {
            let Some(node) = model.get_node(current) else {
                return;
            };
            match value.cmp(&node.value) {
                Ordering::Less => match node.left() {
                    Some(left) => current = left,
                    None => {
                        model.place_child(current, Side::Left, value);
                        return;
                    }
                },
                Ordering::Greater => match node.right() {
                    Some(right) => current = right,
                    None => {
                        model.place_child(current, Side::Right, value);
                        return;
                    }
                },
                Ordering::Equal => {
                    // Duplicate policy: discard (see DESIGN.md)
                    debug!(value, "discarding duplicate value");
                    return;
                }
            }
        }
    }

    /// Positional layout: the value at flat index i becomes the node whose
    /// children are the values at 2i+1 and 2i+2. Shape is pure array
    /// geometry, independent of value magnitudes.
    fn build_level_order(values: &[i64]) -> TreeModel {
        let mut model = TreeModel::new(TreeVariant::LevelOrder);
        if values.is_empty() {
            return model;
        }

        let mut ids = Vec::with_capacity(values.len());
        ids.push(model.insert_root(values[0]));
        for (i, &value) in values.iter().enumerate().skip(1) {
            let parent = ids[(i - 1) / 2];
            let side = if i % 2 == 1 { Side::Left } else { Side::Right };
            ids.push(model.place_child(parent, side, value));
        }
        model
    }
}
