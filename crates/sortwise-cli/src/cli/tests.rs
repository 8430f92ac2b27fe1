#[cfg(test)]
mod tests {
    use crate::cli::{CategoryArg, Cli, Command, DirectionArg};
    use clap::Parser;
    use sortwise_core::{Category, Direction};
    use std::path::PathBuf;

    #[test]
    fn parses_classify_values() {
        let cli = Cli::try_parse_from(["sortwise", "classify", "10%", "20%", "5%"]).unwrap();
        match cli.command {
            Command::Classify(args) => {
                assert_eq!(args.values, vec!["10%", "20%", "5%"]);
                assert!(args.json.is_none());
            }
            other => panic!("expected classify, got {other:?}"),
        }
    }

    #[test]
    fn negative_numbers_are_values() {
        let cli = Cli::try_parse_from(["sortwise", "classify", "-1", "-2.5", "3"]).unwrap();
        match cli.command {
            Command::Classify(args) => assert_eq!(args.values, vec!["-1", "-2.5", "3"]),
            other => panic!("expected classify, got {other:?}"),
        }

        let cli = Cli::try_parse_from(["sortwise", "check", "-d", "desc", "-1", "-2"]).unwrap();
        match cli.command {
            Command::Check(args) => {
                assert_eq!(args.direction, DirectionArg::Desc);
                assert_eq!(args.values, vec!["-1", "-2"]);
            }
            other => panic!("expected check, got {other:?}"),
        }
    }

    #[test]
    fn classify_values_conflict_with_json() {
        let result = Cli::try_parse_from(["sortwise", "classify", "a", "--json", "cells.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_check_with_declared_category() {
        let cli = Cli::try_parse_from([
            "sortwise",
            "check",
            "--direction",
            "desc",
            "--as",
            "byte-size",
            "--strict-units",
            "2 MB",
            "1 KB",
        ])
        .unwrap();

        match cli.command {
            Command::Check(args) => {
                assert_eq!(args.direction, DirectionArg::Desc);
                assert_eq!(args.category, Some(CategoryArg::ByteSize));
                assert!(args.strict_units);
                assert_eq!(args.values, vec!["2 MB", "1 KB"]);
            }
            other => panic!("expected check, got {other:?}"),
        }
    }

    #[test]
    fn check_requires_direction() {
        assert!(Cli::try_parse_from(["sortwise", "check", "1", "2"]).is_err());
    }

    #[test]
    fn direction_aliases() {
        for (word, expected) in [
            ("asc", Direction::Ascending),
            ("sequenced", Direction::Ascending),
            ("descending", Direction::Descending),
            ("inverted", Direction::Descending),
        ] {
            let cli = Cli::try_parse_from(["sortwise", "check", "-d", word]).unwrap();
            let Command::Check(args) = cli.command else {
                panic!("expected check");
            };
            assert_eq!(Direction::from(args.direction), expected, "{word}");
        }
    }

    #[test]
    fn category_arg_maps_onto_core() {
        assert_eq!(Category::from(CategoryArg::Strings), Category::Strings);
        assert_eq!(Category::from(CategoryArg::Percentage), Category::Percentage);
    }

    #[test]
    fn parses_run_cases() {
        let cli = Cli::try_parse_from([
            "sortwise",
            "--quiet",
            "run",
            "--config",
            "suite.toml",
            "--case",
            "builds",
            "--case",
            "recipes",
        ])
        .unwrap();

        assert!(cli.quiet);
        match cli.command {
            Command::Run(args) => {
                assert_eq!(args.config, Some(PathBuf::from("suite.toml")));
                assert_eq!(args.cases, vec!["builds", "recipes"]);
                assert!(args.profile.is_none());
            }
            other => panic!("expected run, got {other:?}"),
        }
    }

    #[test]
    fn verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["sortwise", "-v", "-q", "classify"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["sortwise", "classify", "--no-color", "x"]).unwrap();
        assert!(cli.no_color);
    }
}
