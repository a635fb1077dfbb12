//! Problem description files (TOML or YAML).
//!
//! ```toml
//! name = "move"
//! requirements = ["strips"]
//! init = ["at_A"]
//! goal = ["at_B"]
//!
//! [[actions]]
//! name = "move_A_to_B"
//! pre = ["at_A"]
//! add = ["at_B"]
//! del = ["at_A"]
//! ```
//!
//! When `facts` is omitted, every fact name mentioned in the file is
//! declared in order of first appearance. When it is present, mentioning an
//! undeclared fact is an error.

use std::collections::HashSet;
use std::path::Path;

use planforge_core::{PlanForgeError, RequireKey, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::problem::{ActionBuilder, GroundProblem, ProblemBuilder, WhenBuilder};

/// Serialized form of a ground problem.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ProblemFile {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub requirements: Vec<RequireKey>,

    /// Explicit fact table. Optional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facts: Option<Vec<String>>,

    #[serde(default)]
    pub init: Vec<String>,

    #[serde(default)]
    pub goal: Vec<String>,

    #[serde(default)]
    pub goal_neg: Vec<String>,

    #[serde(default)]
    pub actions: Vec<ActionSpec>,
}

/// Serialized form of a ground action.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ActionSpec {
    pub name: String,

    #[serde(default)]
    pub pre: Vec<String>,

    #[serde(default)]
    pub pre_neg: Vec<String>,

    #[serde(default)]
    pub add: Vec<String>,

    #[serde(default)]
    pub del: Vec<String>,

    #[serde(default)]
    pub when: Vec<WhenSpec>,
}

/// Serialized form of a conditional effect.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct WhenSpec {
    #[serde(default)]
    pub pre: Vec<String>,

    #[serde(default)]
    pub pre_neg: Vec<String>,

    #[serde(default)]
    pub add: Vec<String>,

    #[serde(default)]
    pub del: Vec<String>,
}

impl ProblemFile {
    /// Reads a problem file, choosing YAML for `.yaml`/`.yml` extensions and
    /// TOML otherwise.
    ///
    /// # Errors
    ///
    /// Returns `Model` if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            PlanForgeError::Model(format!("cannot read {}: {e}", path.display()))
        })?;
        let file = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&contents)?,
            _ => Self::from_toml_str(&contents)?,
        };
        debug!(
            event = "problem_file_loaded",
            path = %path.display(),
            actions = file.actions.len(),
        );
        Ok(file)
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| PlanForgeError::Model(format!("TOML parse error: {e}")))
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        serde_yaml::from_str(s)
            .map_err(|e| PlanForgeError::Model(format!("YAML parse error: {e}")))
    }

    /// Converts the description into a builder.
    pub fn into_builder(self) -> ProblemBuilder {
        let facts = match self.facts {
            Some(facts) => facts,
            None => mentioned_facts(&self.init, &self.goal, &self.goal_neg, &self.actions),
        };

        let actions = self.actions.into_iter().map(|spec| {
            let mut action = ActionBuilder::new(spec.name)
                .with_precondition(spec.pre)
                .with_negative_precondition(spec.pre_neg)
                .with_add(spec.add)
                .with_delete(spec.del);
            for when in spec.when {
                action = action.with_when(
                    WhenBuilder::new()
                        .with_condition(when.pre)
                        .with_negative_condition(when.pre_neg)
                        .with_add(when.add)
                        .with_delete(when.del),
                );
            }
            action
        });

        ProblemBuilder::new(self.name)
            .with_facts(facts)
            .with_requirements(self.requirements)
            .with_init(self.init)
            .with_goal(self.goal)
            .with_negative_goal(self.goal_neg)
            .with_actions(actions)
    }

    /// Builds the ground problem.
    pub fn build(self) -> Result<GroundProblem> {
        self.into_builder().build()
    }
}

fn mentioned_facts(
    init: &[String],
    goal: &[String],
    goal_neg: &[String],
    actions: &[ActionSpec],
) -> Vec<String> {
    let mut facts = Vec::new();
    let mut seen = HashSet::new();
    let mut push_all = |names: &[String]| {
        for name in names {
            if seen.insert(name.clone()) {
                facts.push(name.clone());
            }
        }
    };

    push_all(init);
    push_all(goal);
    push_all(goal_neg);
    for action in actions {
        push_all(&action.pre);
        push_all(&action.pre_neg);
        push_all(&action.add);
        push_all(&action.del);
        for when in &action.when {
            push_all(&when.pre);
            push_all(&when.pre_neg);
            push_all(&when.add);
            push_all(&when.del);
        }
    }
    facts
}

/// Loads and builds a problem file in one step.
pub fn load_problem(path: impl AsRef<Path>) -> Result<GroundProblem> {
    ProblemFile::load(path)?.build()
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
