/// Tests for the coverage tree
///
/// These cover base-path trimming, tree shape, and the aggregation law
/// that every directory equals the sum of the files below it.

#[cfg(test)]
mod tests {
    use crate::tree::*;
    use crate::types::{FileMetrics, Metrics};
    use std::collections::BTreeMap;

    fn file(stmts: (u64, u64), branches: (u64, u64), lines: (u64, u64), uncovered: &[u32]) -> FileMetrics {
        FileMetrics {
            statements: Metrics::new(stmts.0, stmts.1),
            branches: Metrics::new(branches.0, branches.1),
            lines: Metrics::new(lines.0, lines.1),
            uncovered_lines: uncovered.to_vec(),
        }
    }

    fn files(entries: &[(&str, FileMetrics)]) -> BTreeMap<String, FileMetrics> {
        entries.iter().map(|(p, m)| (p.to_string(), m.clone())).collect()
    }

    fn child<'a>(tree: &'a CoverageTree, parent: NodeId, name: &str) -> &'a CoverageNode {
        let id = tree.node(parent).children.get(name).unwrap_or_else(|| panic!("missing child {}", name));
        tree.node(*id)
    }

    fn names(tree: &CoverageTree, ids: &[NodeId]) -> Vec<String> {
        ids.iter().map(|id| tree.node(*id).name.clone()).collect()
    }

    /// Sum of file metrics below `id`, walked independently of the aggregator
    fn file_sum(tree: &CoverageTree, id: NodeId) -> (Metrics, Metrics, Metrics) {
        let mut sum = (Metrics::zero(), Metrics::zero(), Metrics::zero());
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let node = tree.node(current);
            if node.is_file() {
                sum.0 += node.statements;
                sum.1 += node.branches;
                sum.2 += node.lines;
            } else {
                stack.extend(node.children.values().copied());
            }
        }
        sum
    }

    #[test]
    fn test_empty_input_gives_empty_root() {
        let tree = build_tree(&BTreeMap::new());
        let root = tree.node(tree.root());
        assert!(root.children.is_empty());
        assert_eq!(root.statements, Metrics::zero());
        assert_eq!(root.branches, Metrics::zero());
        assert_eq!(root.lines, Metrics::zero());
        assert_eq!(tree.file_count(), 0);
    }

    #[test]
    fn test_single_file_keeps_containing_directory() {
        let tree = build_tree(&files(&[("/home/dev/project/src/Main.java", file((4, 2), (1, 1), (5, 3), &[7]))]));

        let root = tree.root();
        assert_eq!(names(&tree, &tree.sorted_children(root)), vec!["src"]);

        let src = child(&tree, root, "src");
        assert!(!src.is_file());
        assert_eq!(src.statements, Metrics::new(4, 2));

        let main = tree.node(src.children["Main.java"]);
        assert!(main.is_file());
        assert_eq!(main.uncovered_lines, vec![7]);
    }

    #[test]
    fn test_multiple_files_drop_last_shared_segment() {
        let tree = build_tree(&files(&[
            ("/path/to/project/src/a/X.java", file((5, 3), (0, 0), (0, 0), &[])),
            ("/path/to/project/src/b/Y.java", file((3, 3), (0, 0), (0, 0), &[])),
        ]));

        let root = tree.root();
        assert_eq!(names(&tree, &tree.sorted_children(root)), vec!["src"]);

        let src_id = tree.node(root).children["src"];
        assert_eq!(names(&tree, &tree.sorted_children(src_id)), vec!["a", "b"]);
    }

    #[test]
    fn test_siblings_in_same_directory_aggregate() {
        let tree = build_tree(&files(&[
            ("/repo/a/X.ext", file((5, 3), (0, 0), (0, 0), &[])),
            ("/repo/a/Y.ext", file((3, 3), (0, 0), (0, 0), &[])),
        ]));

        let root = tree.node(tree.root());
        assert_eq!(root.statements, Metrics::new(8, 6));
        assert_eq!(child(&tree, tree.root(), "a").statements, Metrics::new(8, 6));
    }

    #[test]
    fn test_end_to_end_totals() {
        let tree = build_tree(&files(&[
            ("/path/to/project/src/Calculator.ext", file((5, 3), (2, 1), (7, 4), &[11, 13, 14])),
            ("/path/to/project/src/StringUtils.ext", file((3, 3), (1, 1), (4, 4), &[])),
        ]));

        let root = tree.node(tree.root());
        assert_eq!(root.statements, Metrics::new(8, 6));
        assert_eq!(root.branches, Metrics::new(3, 2));
        assert_eq!(root.lines, Metrics::new(11, 8));
    }

    #[test]
    fn test_aggregation_law_holds_for_every_directory() {
        let tree = build_tree(&files(&[
            ("/w/app/models/user.rb", file((10, 7), (2, 1), (12, 8), &[3])),
            ("/w/app/models/post.rb", file((6, 6), (1, 1), (7, 7), &[])),
            ("/w/app/controllers/api/v1/users.rb", file((20, 5), (4, 0), (22, 6), &[1, 2])),
            ("/w/app/controllers/home.rb", file((3, 0), (1, 0), (3, 0), &[1, 2, 3])),
            ("/w/app/helpers/empty.rb", file((0, 0), (0, 0), (0, 0), &[])),
        ]));

        for id in tree.ids() {
            let node = tree.node(id);
            if node.is_file() {
                assert!(node.children.is_empty());
                continue;
            }
            let (statements, branches, lines) = file_sum(&tree, id);
            assert_eq!(node.statements, statements, "statements of {}", node.name);
            assert_eq!(node.branches, branches, "branches of {}", node.name);
            assert_eq!(node.lines, lines, "lines of {}", node.name);
        }
    }

    #[test]
    fn test_depth_and_parent_links() {
        let tree = build_tree(&files(&[
            ("/r/src/deep/er/File.ext", file((1, 1), (0, 0), (1, 1), &[])),
            ("/r/src/Top.ext", file((1, 0), (0, 0), (1, 0), &[1])),
        ]));

        assert_eq!(tree.depth(tree.root()), 0);
        let src = tree.node(tree.root()).children["src"];
        assert_eq!(tree.depth(src), 1);
        assert_eq!(tree.node(src).parent, Some(tree.root()));

        let deep = tree.node(src).children["deep"];
        let er = tree.node(deep).children["er"];
        let leaf = tree.node(er).children["File.ext"];
        assert_eq!(tree.depth(leaf), 4);
        assert_eq!(tree.node(leaf).parent, Some(er));
    }

    #[test]
    fn test_sorted_children_dirs_before_files_case_insensitive() {
        let tree = build_tree(&files(&[
            ("/p/root/Zdir/z.ext", file((1, 1), (0, 0), (1, 1), &[])),
            ("/p/root/Afile.ext", file((1, 1), (0, 0), (1, 1), &[])),
            ("/p/root/Bdir/b.ext", file((1, 1), (0, 0), (1, 1), &[])),
            ("/p/root/adir/a.ext", file((1, 1), (0, 0), (1, 1), &[])),
        ]));

        let root_dir = tree.node(tree.root()).children["root"];
        assert_eq!(names(&tree, &tree.sorted_children(root_dir)), vec!["adir", "Bdir", "Zdir", "Afile.ext"]);
    }

    #[test]
    fn test_duplicate_insert_last_write_wins() {
        let mut builder = TreeBuilder::new();
        builder.insert_file(&["src", "A.ext"], &file((4, 1), (0, 0), (4, 1), &[2, 3, 4]));
        builder.insert_file(&["src", "A.ext"], &file((4, 4), (0, 0), (4, 4), &[]));
        let root = builder.root();
        builder.aggregate_from_children(root);
        let tree = builder.finish();

        assert_eq!(tree.file_count(), 1);
        assert_eq!(tree.node(tree.root()).statements, Metrics::new(4, 4));
        assert!(child(&tree, tree.node(tree.root()).children["src"], "A.ext").uncovered_lines.is_empty());
    }

    #[test]
    fn test_fresh_builder_root_is_zero() {
        let tree = TreeBuilder::new().finish();
        let root = tree.node(tree.root());
        assert!(!root.is_file());
        assert_eq!(root.lines, Metrics::zero());
    }

    #[test]
    fn test_deep_tree_aggregates_without_recursion() {
        let segments: Vec<String> = (0..5000).map(|i| format!("d{}", i)).collect();
        let mut path: Vec<&str> = segments.iter().map(|s| s.as_str()).collect();
        path.push("leaf.ext");

        let mut builder = TreeBuilder::new();
        builder.insert_file(&path, &file((3, 2), (1, 1), (3, 2), &[9]));
        let root = builder.root();
        builder.aggregate_from_children(root);
        let tree = builder.finish();

        assert_eq!(tree.node(tree.root()).statements, Metrics::new(3, 2));
    }

    #[test]
    fn test_common_base_len() {
        let one = vec![vec!["home", "dev", "src", "Main.java"]];
        assert_eq!(common_base_len(&one), 2);

        let two = vec![vec!["p", "src", "a", "X"], vec!["p", "src", "b", "Y"]];
        assert_eq!(common_base_len(&two), 1);

        let bare = vec![vec!["Main.java"]];
        assert_eq!(common_base_len(&bare), 0);

        let disjoint = vec![vec!["a", "X"], vec!["b", "Y"]];
        assert_eq!(common_base_len(&disjoint), 0);

        assert_eq!(common_base_len(&[]), 0);
    }

    #[test]
    fn test_relative_paths() {
        let tree = build_tree(&files(&[
            ("lib/util/strings.ext", file((2, 2), (0, 0), (2, 2), &[])),
            ("lib/util/numbers.ext", file((2, 0), (0, 0), (2, 0), &[1, 2])),
        ]));
        assert_eq!(names(&tree, &tree.sorted_children(tree.root())), vec!["util"]);
        assert_eq!(tree.node(tree.root()).statements, Metrics::new(4, 2));
    }
}
