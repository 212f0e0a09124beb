use super::*;

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

/// Parents sit midway between their first and last child; nodes on one level never overlap.
fn assert_tidy(children: &[Vec<usize>], pos: &[TidyPos], size: (f64, f64)) {
    for (v, kids) in children.iter().enumerate() {
        if let (Some(&first), Some(&last)) = (kids.first(), kids.last()) {
            assert_close(pos[v].breadth, (pos[first].breadth + pos[last].breadth) / 2.0);
        }
        for &k in kids {
            assert_eq!(pos[k].level, pos[v].level + 1);
        }
    }

    let mut by_level: std::collections::BTreeMap<usize, Vec<f64>> = Default::default();
    let mut stack = vec![0usize];
    while let Some(v) = stack.pop() {
        by_level.entry(pos[v].level).or_default().push(pos[v].breadth);
        stack.extend(children[v].iter().rev());
    }
    for row in by_level.values() {
        for w in row.windows(2) {
            assert!(w[0] < w[1], "level not ordered: {row:?}");
        }
    }

    for p in pos {
        assert!(p.breadth >= -1e-9 && p.breadth <= size.0 + 1e-9);
        assert!(p.depth >= -1e-9 && p.depth <= size.1 + 1e-9);
    }
}

#[test]
fn single_node_is_centered() {
    let pos = tidy_tree(&[vec![]], (100.0, 50.0));
    assert_eq!(pos.len(), 1);
    assert_close(pos[0].breadth, 50.0);
    assert_close(pos[0].depth, 0.0);
}

#[test]
fn root_with_two_children() {
    let children = vec![vec![1, 2], vec![], vec![]];
    let pos = tidy_tree(&children, (100.0, 50.0));
    assert_close(pos[0].breadth, 50.0);
    assert_close(pos[1].breadth, 25.0);
    assert_close(pos[2].breadth, 75.0);
    assert_close(pos[0].depth, 0.0);
    assert_close(pos[1].depth, 50.0);
    assert_close(pos[2].depth, 50.0);
}

#[test]
fn nested_bracket_chain_is_tidy() {
    // root -> [1, 7], 1 -> [2, 6], 2 -> [3, 5], 3 -> [4]
    let children = vec![
        vec![1, 7],
        vec![2, 6],
        vec![3, 5],
        vec![4],
        vec![],
        vec![],
        vec![],
        vec![],
    ];
    let size = (300.0, 400.0);
    let pos = tidy_tree(&children, size);
    assert_tidy(&children, &pos, size);
    assert_close(pos[4].depth, 400.0);
    assert_close(pos[3].breadth, pos[4].breadth);
}

#[test]
fn wide_and_uneven_trees_are_tidy() {
    // Two deep subtrees that would collide without apportioning.
    let children = vec![
        vec![1, 2, 3],
        vec![4, 5],
        vec![],
        vec![6, 7],
        vec![8],
        vec![],
        vec![],
        vec![9],
        vec![],
        vec![],
    ];
    let size = (500.0, 300.0);
    let pos = tidy_tree(&children, size);
    assert_tidy(&children, &pos, size);
}

#[test]
fn layout_is_deterministic() {
    let children = vec![vec![1, 2], vec![3], vec![], vec![]];
    assert_eq!(
        tidy_tree(&children, (10.0, 10.0)),
        tidy_tree(&children, (10.0, 10.0))
    );
    assert!(tidy_tree(&[], (10.0, 10.0)).is_empty());
}
