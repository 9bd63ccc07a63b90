#[cfg(test)]
mod tests {
    use std::{env, fs, path::PathBuf, process};

    use winplace::{MutationOrder, PartialSuccessPolicy, PlacementOptions};

    use crate::*;

    fn scratch(name: &str, text: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("window-manager-config-{}", process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn empty_config_is_defaults() {
        let profile = load_from_str("()", None).unwrap();
        assert_eq!(profile.base, PlacementOptions::default());
        assert!(profile.per_app.is_empty());
    }

    #[test]
    fn full_config_parses() {
        let ron = r#"(
            tolerance: 2.0,
            margin: 12.0,
            order: PositionFirst,
            policy: AllOf,
            apps: {
                "Terminal": (order: SizeFirst, margin: 0.0),
                "iTerm2": (policy: AnyOf),
            },
        )"#;
        let profile = load_from_str(ron, None).unwrap();
        assert_eq!(profile.base.tolerance, 2.0);
        assert_eq!(profile.base.margin, 12.0);
        assert_eq!(profile.base.order, MutationOrder::PositionFirst);
        assert_eq!(profile.base.policy, PartialSuccessPolicy::AllOf);

        let term = profile.resolve("Terminal");
        assert_eq!(term.order, MutationOrder::SizeFirst);
        assert_eq!(term.margin, 0.0);
        assert_eq!(term.policy, PartialSuccessPolicy::AllOf);

        let iterm = profile.resolve("iTerm2");
        assert_eq!(iterm.policy, PartialSuccessPolicy::AnyOf);
        assert_eq!(iterm.order, MutationOrder::PositionFirst);
    }

    #[test]
    fn explicit_some_is_accepted() {
        let profile = load_from_str("(order: Some(PositionFirst))", None).unwrap();
        assert_eq!(profile.base.order, MutationOrder::PositionFirst);
    }

    #[test]
    fn unknown_field_is_a_parse_error() {
        let err = load_from_str("(\n  margins: 3.0,\n)", None).unwrap_err();
        match err {
            Error::Parse { line, excerpt, .. } => {
                assert!(line >= 1);
                assert!(excerpt.contains("margins"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_positive_tolerance_is_rejected() {
        let err = load_from_str("(tolerance: 0.0)", None).unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "tolerance"));
    }

    #[test]
    fn negative_app_margin_is_rejected() {
        let err = load_from_str(r#"(apps: { "Finder": (margin: -1.0) })"#, None).unwrap_err();
        match err {
            Error::Validation { field, .. } => assert_eq!(field, "apps.\"Finder\".margin"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn load_from_path_attaches_path_to_errors() {
        let path = scratch("bad.ron", "(margin: -5.0)");
        let err = load_from_path(&path).unwrap_err();
        assert_eq!(err.path(), Some(path.as_path()));
        assert!(err.pretty().contains("margin"));
    }

    #[test]
    fn load_from_path_reads_file() {
        let path = scratch("good.ron", "(margin: 8.0)");
        let profile = load(Some(&path)).unwrap();
        assert_eq!(profile.base.margin, 8.0);
    }

    #[test]
    fn missing_explicit_path_is_read_error() {
        let path = env::temp_dir().join("window-manager-config-does-not-exist.ron");
        let err = resolve_config_path(Some(&path)).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }

    #[test]
    fn default_path_is_under_dot_config() {
        let p = default_config_path();
        assert!(p.ends_with(".config/window-manager/config.ron"));
    }
}
