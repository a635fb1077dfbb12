//! Colorful console output for planner events.
//!
//! Provides a custom `tracing` layer that formats search and comparison
//! events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Search start/end, rollout improvements, comparison summary
//! - **DEBUG**: Progress updates (1/sec for A*, every 10k rollouts for Monte Carlo)
//! - **TRACE**: Individual expansions and rollouts
//! - **ERROR**: Rejected engines and report sinks that could not be written

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SEARCH_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "planforge=info";

/// Initializes the planner console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the PlanForge banner and sets up tracing.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(PlannerConsoleLayer)
            .try_init();
    });
}

fn mark_search_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SEARCH_START_NANOS.store(nanos, Ordering::Relaxed);
}

fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SEARCH_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
 ____  _             _____
|  _ \| | __ _ _ __ |  ___|__  _ __ __ _  ___
| |_) | |/ _` | '_ \| |_ / _ \| '__/ _` |/ _ \
|  __/| | (_| | | | |  _| (_) | | | (_| |  __/
|_|   |_|\__,_|_| |_|_|  \___/|_|  \__, |\___|
                                   |___/
"#;

    let version_line = format!(
        "              v{} - A* and Monte Carlo Planner\n",
        env!("CARGO_PKG_VERSION")
    );

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats planner events with colors.
pub struct PlannerConsoleLayer;

impl<S: Subscriber> Layer<S> for PlannerConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("planforge") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    algorithm: Option<String>,
    heuristic: Option<String>,
    outcome: Option<String>,
    name: Option<String>,
    path: Option<String>,
    format: Option<String>,
    error: Option<String>,
    weight: Option<f64>,
    actions: Option<u64>,
    plan_length: Option<u64>,
    explored: Option<u64>,
    generated: Option<u64>,
    open: Option<u64>,
    speed: Option<u64>,
    simulation: Option<u64>,
    simulations: Option<u64>,
    successes: Option<u64>,
    best: Option<u64>,
    max_simulations: Option<u64>,
    max_depth: Option<u64>,
    duration_ms: Option<u64>,
    timed_out: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value).trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "message" => self.message = Some(s),
            "algorithm" => self.algorithm = Some(s),
            "heuristic" => self.heuristic = Some(s),
            "outcome" => self.outcome = Some(s),
            "name" => self.name = Some(s),
            "path" => self.path = Some(s),
            "format" => self.format = Some(s),
            "error" => self.error = Some(s),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        let s = Some(value.to_string());
        match field.name() {
            "event" => self.event = s,
            "algorithm" => self.algorithm = s,
            "outcome" => self.outcome = s,
            "format" => self.format = s,
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "actions" => self.actions = Some(value),
            "plan_length" => self.plan_length = Some(value),
            "explored" => self.explored = Some(value),
            "generated" => self.generated = Some(value),
            "open" => self.open = Some(value),
            "speed" => self.speed = Some(value),
            "simulation" => self.simulation = Some(value),
            "simulations" => self.simulations = Some(value),
            "successes" => self.successes = Some(value),
            "best" => self.best = Some(value),
            "max_simulations" => self.max_simulations = Some(value),
            "max_depth" => self.max_depth = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if field.name() == "weight" {
            self.weight = Some(value);
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "timed_out" {
            self.timed_out = Some(value);
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "search_start" => format_search_start(v),
        "search_end" => format_search_end(v),
        "progress" => format_progress(v),
        "rollout_improved" => format_rollout_improved(v),
        "comparison_start" => format_comparison_start(v),
        "comparison_summary" => format_summary(v),
        "report_written" => format_report_written(v),
        "report_failed" | "engine_rejected" => format_error(v),
        _ if level == Level::ERROR => format_error(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn count(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}

fn format_search_start(v: &EventVisitor) -> String {
    mark_search_start();
    let algorithm = v.algorithm.as_deref().unwrap_or("search");
    let actions = v.actions.unwrap_or(0);

    let mut output = format!(
        "{} {} {} │ {} actions",
        format_elapsed(),
        "▶".bright_green().bold(),
        algorithm.white().bold(),
        count(actions).bright_yellow(),
    );

    if let Some(ref heuristic) = v.heuristic {
        output.push_str(&format!(" │ {}", heuristic.bright_magenta()));
    }
    if let Some(weight) = v.weight {
        output.push_str(&format!(" │ weight {}", weight.bright_yellow()));
    }
    if let Some(max) = v.max_simulations {
        output.push_str(&format!(" │ {} rollouts", count(max).bright_yellow()));
    }
    if let Some(depth) = v.max_depth {
        output.push_str(&format!(" │ depth {}", count(depth).bright_yellow()));
    }

    output
}

fn format_search_end(v: &EventVisitor) -> String {
    let algorithm = v.algorithm.as_deref().unwrap_or("search");
    let outcome = v.outcome.as_deref().unwrap_or("unknown");
    let status = match (v.plan_length, v.timed_out) {
        (Some(len), _) => format!("{} actions", count(len)).bright_green().bold().to_string(),
        (None, Some(true)) => "TIMED OUT".bright_red().bold().to_string(),
        (None, _) => outcome.to_uppercase().bright_red().bold().to_string(),
    };

    let mut output = format!(
        "{} {} {} ended │ {} │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        algorithm.white().bold(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        status,
    );

    if let Some(explored) = v.explored {
        output.push_str(&format!(" │ {} explored", count(explored).white()));
    }
    if let Some(generated) = v.generated {
        output.push_str(&format!(" │ {} generated", count(generated).white()));
    }
    if let Some(simulations) = v.simulations {
        output.push_str(&format!(" │ {} rollouts", count(simulations).white()));
    }

    output
}

fn format_progress(v: &EventVisitor) -> String {
    if let Some(simulations) = v.simulations {
        let best = v
            .best
            .map_or_else(|| "none".to_string(), |b| format!("best {}", count(b)));
        return format!(
            "{} {} {:>10} rollouts │ {:>10} successes │ {}",
            format_elapsed(),
            "⚡".bright_cyan(),
            count(simulations).white(),
            count(v.successes.unwrap_or(0)).white(),
            best.bright_green(),
        );
    }

    format!(
        "{} {} {:>10} explored │ {:>10} open │ {:>12}/s",
        format_elapsed(),
        "⚡".bright_cyan(),
        count(v.explored.unwrap_or(0)).white(),
        count(v.open.unwrap_or(0)).white(),
        count(v.speed.unwrap_or(0)).bright_magenta().bold(),
    )
}

fn format_rollout_improved(v: &EventVisitor) -> String {
    format!(
        "{} {} Rollout {:>10} │ plan length {}",
        format_elapsed(),
        "✓".bright_green(),
        count(v.simulation.unwrap_or(0)).bright_black(),
        count(v.plan_length.unwrap_or(0)).bright_green().bold(),
    )
}

fn format_comparison_start(v: &EventVisitor) -> String {
    format!(
        "{} {} Comparing A* and Monte Carlo on {} │ {} actions",
        format_elapsed(),
        "▶".bright_blue(),
        v.name.as_deref().unwrap_or("problem").white().bold(),
        count(v.actions.unwrap_or(0)).bright_yellow(),
    )
}

fn format_summary(v: &EventVisitor) -> String {
    let line = v.message.as_deref().unwrap_or("");
    if line.contains("SUCCESS") {
        line.bright_green().to_string()
    } else if line.contains("FAILED") || line.starts_with("Both algorithms failed") {
        line.bright_red().to_string()
    } else {
        line.white().to_string()
    }
}

fn format_report_written(v: &EventVisitor) -> String {
    format!(
        "{} {} {} report written to {}",
        format_elapsed(),
        "◀".bright_blue(),
        v.format.as_deref().unwrap_or("report"),
        v.path.as_deref().unwrap_or("?").white().bold(),
    )
}

fn format_error(v: &EventVisitor) -> String {
    let message = v
        .error
        .as_deref()
        .or(v.message.as_deref())
        .unwrap_or("unknown error");
    let mut output = format!("{} {} ", format_elapsed(), "✗".bright_red().bold());
    if let Some(ref algorithm) = v.algorithm {
        output.push_str(&format!("{}: ", algorithm.white().bold()));
    }
    output.push_str(&message.bright_red().to_string());
    output
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_unknown_event_is_silent() {
        let v = EventVisitor {
            event: Some("expand".to_string()),
            ..EventVisitor::default()
        };
        assert!(format_event(&v, Level::TRACE).is_empty());
    }

    #[test]
    fn test_search_end_mentions_plan_length() {
        let v = EventVisitor {
            event: Some("search_end".to_string()),
            algorithm: Some("A*".to_string()),
            plan_length: Some(12),
            explored: Some(1_500),
            ..EventVisitor::default()
        };
        let output = format_event(&v, Level::INFO);
        assert!(output.contains("12 actions"));
        assert!(output.contains("1,500"));
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
    }
}
