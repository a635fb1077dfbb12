use std::fs;
use std::path::Path;

use clap::Parser;
use planforge::cli::{run, Cli};
use planforge::PlanForgeError;

const MOVE: &str = r#"
name = "move"
requirements = ["strips"]
init = ["at_A"]
goal = ["at_B"]

[[actions]]
name = "move_A_to_B"
pre = ["at_A"]
add = ["at_B"]
del = ["at_A"]
"#;

const STUCK: &str = r#"
name = "stuck"
init = ["at_A"]
goal = ["at_B"]

[[actions]]
name = "move_C_to_B"
pre = ["at_C"]
add = ["at_B"]
del = ["at_C"]
"#;

const DURATIVE: &str = r#"
name = "durative"
requirements = ["strips", "durative-actions"]
init = ["at_A"]
goal = ["at_B"]

[[actions]]
name = "move_A_to_B"
pre = ["at_A"]
add = ["at_B"]
"#;

fn cli(problem: &Path, extra: &[&str]) -> Cli {
    let mut args = vec!["planforge".to_string(), problem.display().to_string()];
    args.extend(extra.iter().map(|s| s.to_string()));
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn test_astar_finds_move() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("move.toml");
    fs::write(&path, MOVE).unwrap();

    let plan = run(&cli(&path, &["--algorithm", "astar"])).unwrap().unwrap();
    assert_eq!(plan.action_indices(), &[0]);
}

#[test]
fn test_compare_writes_reports() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("move.toml");
    let csv = dir.path().join("out.csv");
    let md = dir.path().join("out.md");
    fs::write(&path, MOVE).unwrap();

    let csv_arg = csv.display().to_string();
    let md_arg = md.display().to_string();
    let args = cli(
        &path,
        &["--seed", "5", "--max-simulations", "100", "--csv", &csv_arg, "--markdown", &md_arg],
    );
    let plan = run(&args).unwrap();

    assert_eq!(plan.map(|p| p.len()), Some(1));
    let contents = fs::read_to_string(&csv).unwrap();
    assert!(contents.starts_with("Algorithm,Plan_Length,Time_Seconds,Nodes_Simulations,Success\n"));
    assert!(contents.contains("\nMonte_Carlo,1,"));
    assert!(fs::read_to_string(&md).unwrap().contains("# Comparison: move"));
}

#[test]
fn test_no_plan_for_unreachable_goal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stuck.toml");
    fs::write(&path, STUCK).unwrap();

    for mode in ["astar", "monte-carlo"] {
        let plan = run(&cli(&path, &["--algorithm", mode, "--max-simulations", "50"])).unwrap();
        assert!(plan.is_none(), "{mode}");
    }
}

#[test]
fn test_unsupported_problem_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("durative.toml");
    fs::write(&path, DURATIVE).unwrap();

    let err = run(&cli(&path, &["--no-csv"])).unwrap_err();
    assert!(matches!(err, PlanForgeError::UnsupportedProblem(_)));
}

#[test]
fn test_invalid_weight_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("move.toml");
    fs::write(&path, MOVE).unwrap();

    let err = run(&cli(&path, &["-w", "0"])).unwrap_err();
    assert!(matches!(err, PlanForgeError::InvalidConfiguration(_)));
}

#[test]
fn test_missing_problem_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = run(&cli(&dir.path().join("nope.toml"), &["--no-csv"])).unwrap_err();
    assert!(matches!(err, PlanForgeError::Model(_)));
}

#[test]
fn test_config_file_then_flags() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("planner.yaml");
    fs::write(
        &config,
        "heuristic: MAX\nheuristic_weight: 3.0\nmonte_carlo:\n  max_simulations: 77\n",
    )
    .unwrap();

    let config_arg = config.display().to_string();
    let args = cli(Path::new("p.toml"), &["--config", &config_arg, "-w", "1.5"]);
    let config = args.planner_config().unwrap();

    assert_eq!(config.heuristic, planforge::HeuristicName::Max);
    assert_eq!(config.heuristic_weight, 1.5);
    assert_eq!(config.monte_carlo.max_simulations, 77);
}
