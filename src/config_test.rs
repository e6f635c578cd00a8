/// Tests for config module
#[cfg(test)]
mod tests {
    use crate::cli::CliArgs;
    use crate::config::*;
    use std::path::PathBuf;

    #[test]
    fn test_report_argument_wins() {
        let arg = PathBuf::from("target/clover.xml");
        let path = resolve_report_path(Some(&arg), Some("from/env.xml")).unwrap();
        assert_eq!(path, arg);
    }

    #[test]
    fn test_report_from_environment() {
        let path = resolve_report_path(None, Some("from/env.xml")).unwrap();
        assert_eq!(path, PathBuf::from("from/env.xml"));
    }

    #[test]
    fn test_report_default_path() {
        let path = resolve_report_path(None, None).unwrap();
        assert_eq!(path, PathBuf::from(DEFAULT_REPORT_PATH));
    }

    #[test]
    fn test_empty_environment_value_is_an_error() {
        let err = resolve_report_path(None, Some("  ")).unwrap_err();
        assert!(err.contains(REPORT_ENV_VAR));
    }

    #[test]
    fn test_terminal_width_resolution() {
        assert_eq!(resolve_terminal_width(Some(100), Some(80)), 100);
        assert_eq!(resolve_terminal_width(Some(0), Some(80)), 0);
        assert_eq!(resolve_terminal_width(None, Some(80)), 80);
        assert_eq!(resolve_terminal_width(None, None), 0);
    }

    #[test]
    fn test_color_resolution() {
        assert!(resolve_use_colors(false, false, true));
        assert!(!resolve_use_colors(true, false, true));
        assert!(!resolve_use_colors(false, true, true));
        assert!(!resolve_use_colors(false, false, false));
    }

    #[test]
    fn test_build_config_from_args() {
        let args = CliArgs {
            report: Some(PathBuf::from("coverage/clover.xml")),
            console_width: Some(120),
            no_color: true,
            json: Some(PathBuf::from("summary.json")),
        };

        let config = build_report_config(&args).expect("Should build config");
        assert_eq!(config.report_path, PathBuf::from("coverage/clover.xml"));
        assert_eq!(config.terminal_width, 120);
        assert!(!config.use_colors, "--no-color should disable colors");
        assert_eq!(config.json_output, Some(PathBuf::from("summary.json")));
    }
}
