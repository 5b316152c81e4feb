use super::*;

mod split_path_tests {
    use super::*;

    #[test]
    fn test_single_segment() {
        assert_eq!(split_path("user"), vec!["user"]);
    }

    #[test]
    fn test_nested_segments() {
        assert_eq!(split_path("user.address.city"), vec!["user", "address", "city"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(split_path("").is_empty());
    }

    #[test]
    fn test_only_dots() {
        assert!(split_path("...").is_empty());
    }

    #[test]
    fn test_drops_leading_trailing_and_doubled_dots() {
        assert_eq!(split_path(".a..b."), vec!["a", "b"]);
    }

    #[test]
    fn test_numeric_segment_kept_as_text() {
        assert_eq!(split_path("items.0.name"), vec!["items", "0", "name"]);
    }
}

mod parse_path_tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(parse_path(""), ParsedPath::empty());
    }

    #[test]
    fn test_single_partial() {
        let result = parse_path("us");
        assert!(result.parent.is_empty());
        assert_eq!(result.partial, "us");
    }

    #[test]
    fn test_trailing_dot() {
        let result = parse_path("user.");
        assert_eq!(result.parent, vec!["user"]);
        assert_eq!(result.partial, "");
    }

    #[test]
    fn test_parent_and_partial() {
        let result = parse_path("user.address.ci");
        assert_eq!(result.parent, vec!["user", "address"]);
        assert_eq!(result.partial, "ci");
    }

    #[test]
    fn test_leading_dot() {
        let result = parse_path(".name");
        assert!(result.parent.is_empty());
        assert_eq!(result.partial, "name");
    }

    #[test]
    fn test_doubled_dot_is_filtered() {
        let result = parse_path("a..b");
        assert_eq!(result.parent, vec!["a"]);
        assert_eq!(result.partial, "b");
    }

    #[test]
    fn test_doubled_trailing_dot() {
        let result = parse_path("a..");
        assert_eq!(result.parent, vec!["a"]);
        assert_eq!(result.partial, "");
    }
}

mod join_path_tests {
    use super::*;

    #[test]
    fn test_join_empty() {
        let empty: [&str; 0] = [];
        assert_eq!(join_path(&empty), "");
    }

    #[test]
    fn test_join_segments() {
        assert_eq!(join_path(&["user", "name"]), "user.name");
    }

    #[test]
    fn test_join_owned_segments() {
        let segments = vec!["a".to_string(), "0".to_string()];
        assert_eq!(join_path(&segments), "a.0");
    }
}

mod parse_index_tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(parse_index("0"), Some(0));
    }

    #[test]
    fn test_multi_digit() {
        assert_eq!(parse_index("12"), Some(12));
    }

    #[test]
    fn test_rejects_leading_zero() {
        assert_eq!(parse_index("01"), None);
    }

    #[test]
    fn test_rejects_sign() {
        assert_eq!(parse_index("-1"), None);
        assert_eq!(parse_index("+1"), None);
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert_eq!(parse_index("a1"), None);
        assert_eq!(parse_index(""), None);
        assert_eq!(parse_index(" 1"), None);
    }
}
