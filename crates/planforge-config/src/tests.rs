//! Tests for planner configuration.

use std::io::Write;

use super::*;

#[test]
fn test_defaults() {
    let config = PlannerConfig::default();
    assert_eq!(config.heuristic, HeuristicName::FastForward);
    assert_eq!(config.heuristic_weight, 1.0);
    assert_eq!(config.random_seed, None);
    assert_eq!(config.time_limit(), Duration::from_secs(600));
    assert!(!config.astar.deduplicate_open);
    assert_eq!(config.monte_carlo.max_simulations, 100_000);
    assert_eq!(config.monte_carlo.max_depth, 100);
    assert_eq!(
        config.report.csv_output.as_deref(),
        Some(Path::new("comparison_results.csv"))
    );
    assert!(config.validate().is_ok());
}

#[test]
fn test_toml_parsing() {
    let toml = r#"
        heuristic = "SUM"
        heuristic_weight = 1.5
        random_seed = 42

        [termination]
        seconds_spent_limit = 2
        millis_spent_limit = 500

        [astar]
        deduplicate_open = true

        [monte_carlo]
        max_simulations = 10
        max_depth = 20

        [report]
        csv_output = "out.csv"
        markdown_output = "out.md"
    "#;

    let config = PlannerConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.heuristic, HeuristicName::Sum);
    assert_eq!(config.heuristic_weight, 1.5);
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.time_limit(), Duration::from_millis(2500));
    assert!(config.astar.deduplicate_open);
    assert_eq!(config.monte_carlo.max_simulations, 10);
    assert_eq!(config.monte_carlo.max_depth, 20);
    assert_eq!(config.report.csv_output, Some(PathBuf::from("out.csv")));
    assert_eq!(config.report.markdown_output, Some(PathBuf::from("out.md")));
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        heuristic: SET_LEVEL
        heuristic_weight: 3.0
        termination:
          seconds_spent_limit: 10
        monte_carlo:
          max_depth: 50
    "#;

    let config = PlannerConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.heuristic, HeuristicName::SetLevel);
    assert_eq!(config.heuristic_weight, 3.0);
    assert_eq!(config.time_limit(), Duration::from_secs(10));
    assert_eq!(config.monte_carlo.max_depth, 50);
    assert_eq!(config.monte_carlo.max_simulations, 100_000);
}

#[test]
fn test_unknown_heuristic_is_parse_error() {
    let err = PlannerConfig::from_toml_str(r#"heuristic = "BLIND""#).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
    let planner_err: PlanForgeError = err.into();
    assert!(matches!(
        planner_err,
        PlanForgeError::InvalidConfiguration(_)
    ));
}

#[test]
fn test_builder() {
    let config = PlannerConfig::new()
        .with_heuristic(HeuristicName::Max)
        .with_heuristic_weight(2.0)
        .with_random_seed(123)
        .with_termination_seconds(60)
        .with_max_simulations(10)
        .with_max_depth(5)
        .with_deduplicate_open(true)
        .without_csv_output()
        .with_markdown_output("report.md");

    assert_eq!(config.heuristic, HeuristicName::Max);
    assert_eq!(config.heuristic_weight, 2.0);
    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.time_limit(), Duration::from_secs(60));
    assert_eq!(config.monte_carlo.max_simulations, 10);
    assert_eq!(config.monte_carlo.max_depth, 5);
    assert!(config.astar.deduplicate_open);
    assert!(config.report.csv_output.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_rejects_non_positive_weight() {
    for weight in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let config = PlannerConfig::new().with_heuristic_weight(weight);
        assert!(
            matches!(config.validate(), Err(ConfigError::Invalid(_))),
            "weight {weight} should be rejected"
        );
    }
}

#[test]
fn test_rejects_zero_timeout() {
    let config = PlannerConfig::new().with_termination_seconds(0);
    let err = config.validate().unwrap_err();
    assert_eq!(err.to_string(), "Invalid configuration: timeout must be > 0");

    let config = PlannerConfig::new().with_termination_millis(0);
    assert!(config.validate().is_err());
}

#[test]
fn test_rejects_zero_budgets() {
    assert!(PlannerConfig::new().with_max_simulations(0).validate().is_err());
    assert!(PlannerConfig::new().with_max_depth(0).validate().is_err());
}

#[test]
fn test_invalid_converts_to_invalid_configuration() {
    let err: PlanForgeError = PlannerConfig::new()
        .with_heuristic_weight(0.0)
        .validate()
        .unwrap_err()
        .into();
    assert_eq!(
        err.to_string(),
        "Invalid configuration: heuristic weight must be > 0, got 0"
    );
}

#[test]
fn test_from_file_picks_format_by_extension() {
    let mut toml_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(toml_file, "heuristic = \"MAX\"").unwrap();
    let config = PlannerConfig::from_file(toml_file.path()).unwrap();
    assert_eq!(config.heuristic, HeuristicName::Max);

    let mut yaml_file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(yaml_file, "heuristic: SUM").unwrap();
    let config = PlannerConfig::from_file(yaml_file.path()).unwrap();
    assert_eq!(config.heuristic, HeuristicName::Sum);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = PlannerConfig::load("/definitely/not/here/planner.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
