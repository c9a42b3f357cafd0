#[cfg(test)]
mod verify {
    use std::path::Path;

    use veralign::language::{NodeKind, TreeError};
    use veralign::parsing;

    #[test]
    fn loads_a_parser_generated_tree() {
        let root = parsing::load_tree(Path::new("tests/golden/counter.json")).unwrap();
        assert!(root.is(NodeKind::SourceFile));
        assert!(parsing::is_source_root(&root));

        let module = &root.children[0];
        assert!(module.is(NodeKind::ModuleDeclaration));
        assert_eq!(
            module
                .find_child(NodeKind::Identifier)
                .map(|node| node.token_text()),
            Some("counter")
        );
    }

    #[test]
    fn missing_tree_degrades_not_fails() {
        let result = parsing::load_tree(Path::new("tests/data/no_such_file.tree.json"));
        match result {
            Err(TreeError::Missing { .. }) => {}
            other => panic!("expected a missing-tree error, got {:?}", other),
        }
    }

    #[test]
    fn malformed_tree_degrades_not_fails() {
        let result = parsing::load_tree(Path::new("tests/data/broken.tree.json"));
        match result {
            Err(TreeError::Malformed { .. }) => {}
            other => panic!("expected a malformed-tree error, got {:?}", other),
        }
    }

    #[test]
    fn tree_path_sits_next_to_the_source() {
        assert_eq!(
            parsing::tree_path(Path::new("rtl/uart_tx.v")),
            Path::new("rtl/uart_tx.v.tree.json")
        );
    }

    #[test]
    fn source_loading_reports_missing_files() {
        let result = parsing::load(Path::new("tests/data/no_such_file.v"));
        let error = result.unwrap_err();
        assert_eq!(error.problem, "File not found");
    }
}
