use lift_tree::{Tree, TreeBuilder};
use proptest::prelude::*;

mod common;
use common::{arb_tree, build, Oracle};

proptest! {
    #[test]
    fn queries_match_parent_chain_oracle((n, edges) in arb_tree(40)) {
        let tree = build(n, &edges);
        let oracle = Oracle::new(n, &edges);

        for u in 0..n {
            for v in 0..n {
                prop_assert_eq!(tree.is_ancestor(u, v).unwrap(), oracle.is_ancestor(u, v), "is_ancestor({}, {})", u, v);
                prop_assert_eq!(tree.find_lca(u, v).unwrap(), oracle.lca(u, v), "find_lca({}, {})", u, v);
                prop_assert_eq!(tree.find_distance(u, v).unwrap(), oracle.distance(u, v), "find_distance({}, {})", u, v);
            }
            prop_assert_eq!(tree.depth(u).unwrap(), oracle.depth(u));
        }
    }

    #[test]
    fn self_queries_are_trivial((n, edges) in arb_tree(64)) {
        let tree = build(n, &edges);
        for v in 0..n {
            prop_assert!(!tree.is_ancestor(v, v).unwrap());
            prop_assert_eq!(tree.find_lca(v, v).unwrap(), v);
            prop_assert_eq!(tree.find_distance(v, v).unwrap(), 0);
        }
    }

    #[test]
    fn lca_and_distance_are_symmetric((n, edges) in arb_tree(40)) {
        let tree = build(n, &edges);
        for u in 0..n {
            for v in 0..n {
                prop_assert_eq!(tree.find_lca(u, v).unwrap(), tree.find_lca(v, u).unwrap());
                prop_assert_eq!(tree.find_distance(u, v).unwrap(), tree.find_distance(v, u).unwrap());
            }
        }
    }

    #[test]
    fn distance_splits_at_lca((n, edges) in arb_tree(40)) {
        let tree = build(n, &edges);
        for u in 0..n {
            for v in 0..n {
                let lca = tree.find_lca(u, v).unwrap();
                let up = tree.distance_to_ancestor(u, lca).unwrap();
                let down = tree.distance_to_ancestor(v, lca).unwrap();
                prop_assert_eq!(tree.find_distance(u, v).unwrap(), up + down);
            }
        }
    }

    #[test]
    fn ancestor_pairs_collapse((n, edges) in arb_tree(40)) {
        let tree = build(n, &edges);
        for u in 0..n {
            for v in 0..n {
                if tree.is_ancestor(u, v).unwrap() {
                    prop_assert_eq!(tree.find_lca(u, v).unwrap(), u);
                    prop_assert_eq!(tree.find_distance(u, v).unwrap(), tree.distance_to_ancestor(v, u).unwrap());
                }
            }
        }
    }

    #[test]
    fn ancestry_is_timestamp_containment((n, edges) in arb_tree(40)) {
        let tree = build(n, &edges);
        for u in 0..n {
            let (in_u, out_u) = tree.timestamps(u).unwrap();
            prop_assert!(in_u < 2 * n && out_u < 2 * n);
            for v in (0..n).filter(|&v| v != u) {
                let (in_v, out_v) = tree.timestamps(v).unwrap();
                prop_assert_eq!(tree.is_ancestor(u, v).unwrap(), in_u < in_v && out_u > out_v);
            }
        }
    }

    #[test]
    fn kth_ancestor_walks_parents((n, edges) in arb_tree(40)) {
        let tree = build(n, &edges);
        for v in 0..n {
            let depth = tree.depth(v).unwrap();
            let mut expected = Some(v);
            for k in 0..=depth + 1 {
                prop_assert_eq!(tree.kth_ancestor(v, k).unwrap(), expected, "kth_ancestor({}, {})", v, k);
                expected = expected.and_then(|node| tree.parent(node).unwrap());
            }
        }
    }

    #[test]
    fn edge_order_changes_timestamps_not_answers((n, edges) in arb_tree(30)) {
        let forward = build(n, &edges);
        let mut reversed_edges = edges.clone();
        reversed_edges.reverse();
        let reversed: Tree = TreeBuilder::with_edges(n, reversed_edges).unwrap().preprocess().unwrap();

        for u in 0..n {
            for v in 0..n {
                prop_assert_eq!(forward.find_distance(u, v).unwrap(), reversed.find_distance(u, v).unwrap());
                prop_assert_eq!(forward.find_lca(u, v).unwrap(), reversed.find_lca(u, v).unwrap());
            }
        }
    }
}
