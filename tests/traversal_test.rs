//! Traversal orders over hand-built shapes.

use std::ops::ControlFlow;

use bintree::domain::{BinaryTree, TraversalOrder};
use bintree::util::testing;
use rstest::{fixture, rstest};

//      5
//     / \
//    3   8
//   /
//  1
#[fixture]
fn scenario() -> BinaryTree<i32> {
    testing::init_test_setup();
    let mut tree = BinaryTree::new();
    let root = tree.set_root(5).unwrap();
    let three = tree.attach_left(root, 3).unwrap();
    tree.attach_right(root, 8).unwrap();
    tree.attach_left(three, 1).unwrap();
    tree
}

fn visited(tree: &BinaryTree<i32>, order: TraversalOrder) -> Vec<i32> {
    let mut out = vec![];
    tree.for_each(order, |e| out.push(*e));
    out
}

#[rstest]
#[case(TraversalOrder::Preorder, vec![5, 3, 1, 8])]
#[case(TraversalOrder::Inorder, vec![1, 3, 5, 8])]
#[case(TraversalOrder::Postorder, vec![1, 3, 8, 5])]
#[case(TraversalOrder::LevelOrder, vec![5, 3, 8, 1])]
fn given_scenario_tree_when_traversing_then_order_matches(
    scenario: BinaryTree<i32>,
    #[case] order: TraversalOrder,
    #[case] expected: Vec<i32>,
) {
    assert_eq!(visited(&scenario, order), expected);
    let pulled: Vec<i32> = scenario.elements(order).into_iter().copied().collect();
    assert_eq!(pulled, expected);
}

#[rstest]
fn given_scenario_tree_when_cleared_then_no_traversal_visits_anything(
    mut scenario: BinaryTree<i32>,
) {
    scenario.clear();
    assert_eq!(scenario.size(), 0);
    assert!(scenario.is_empty());
    for order in TraversalOrder::ALL {
        assert!(visited(&scenario, order).is_empty(), "{order}");
    }
}

#[rstest]
fn given_visitor_breaking_on_first_element_when_traversing_then_only_one_visit(
    scenario: BinaryTree<i32>,
) {
    for order in TraversalOrder::ALL {
        let mut count = 0;
        let flow = scenario.traverse(order, |e| {
            count += 1;
            ControlFlow::Break(*e)
        });
        assert_eq!(count, 1, "{order}");
        assert!(flow.is_break());
    }
}

#[rstest]
fn given_visitor_breaking_midway_when_inorder_then_break_value_returned(scenario: BinaryTree<i32>) {
    let mut seen = vec![];
    let flow = scenario.inorder(|e| {
        if *e == 5 {
            return ControlFlow::Break(*e * 10);
        }
        seen.push(*e);
        ControlFlow::Continue(())
    });
    assert_eq!(flow, ControlFlow::Break(50));
    assert_eq!(seen, vec![1, 3]);
}

#[rstest]
fn given_fallible_visitor_when_it_fails_then_error_is_propagated(scenario: BinaryTree<i32>) {
    let result: Result<(), String> = scenario.try_traverse(TraversalOrder::Postorder, |e| {
        if *e == 8 {
            Err("boom".into())
        } else {
            Ok(())
        }
    });
    assert_eq!(result, Err("boom".to_string()));

    let ok: Result<(), String> = scenario.try_traverse(TraversalOrder::Postorder, |_| Ok(()));
    assert!(ok.is_ok());
}

#[test]
fn given_right_leaning_chain_when_traversing_then_orders_follow_shape() {
    // 1 -> 2 -> 3 down the right spine
    let tree = BinaryTree::from_level_slots([Some(1), None, Some(2), None, Some(3)]);
    assert_eq!(visited(&tree, TraversalOrder::Preorder), vec![1, 2, 3]);
    assert_eq!(visited(&tree, TraversalOrder::Inorder), vec![1, 2, 3]);
    assert_eq!(visited(&tree, TraversalOrder::Postorder), vec![3, 2, 1]);
    assert_eq!(visited(&tree, TraversalOrder::LevelOrder), vec![1, 2, 3]);
}

#[test]
fn given_iterator_dropped_early_then_remaining_nodes_not_visited() {
    let tree = BinaryTree::from_level_order(1..=15);
    let first_three: Vec<i32> = tree.iter_level_order().take(3).map(|(_, e)| *e).collect();
    assert_eq!(first_three, vec![1, 2, 3]);
}
