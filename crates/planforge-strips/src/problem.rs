//! Ground actions, ground problems and their builders.

use std::collections::HashMap;

use planforge_core::{
    ConditionalEffect, HeuristicName, PlanForgeError, PlanningAction, PlanningProblem,
    PlanningState, RequireKey, Result,
};

use crate::heuristic::RelaxedHeuristic;
use crate::state::{Condition, Effect, FactId, FactState};

/// A ground action with a precondition and ordered conditional effects.
#[derive(Debug, Clone)]
pub struct GroundAction {
    name: String,
    precondition: Condition,
    effects: Vec<ConditionalEffect<Condition, Effect>>,
}

impl GroundAction {
    pub fn new(
        name: impl Into<String>,
        precondition: Condition,
        effects: Vec<ConditionalEffect<Condition, Effect>>,
    ) -> Self {
        Self {
            name: name.into(),
            precondition,
            effects,
        }
    }

    pub fn precondition(&self) -> &Condition {
        &self.precondition
    }
}

impl PlanningAction<FactState> for GroundAction {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_applicable(&self, state: &FactState) -> bool {
        state.satisfies(&self.precondition)
    }

    fn conditional_effects(&self) -> &[ConditionalEffect<Condition, Effect>] {
        &self.effects
    }
}

/// A fully ground propositional planning problem.
#[derive(Debug, Clone)]
pub struct GroundProblem {
    name: String,
    facts: Vec<String>,
    init: FactState,
    goal: Condition,
    actions: Vec<GroundAction>,
    requirements: Vec<RequireKey>,
}

impl GroundProblem {
    /// Problem name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of ground facts.
    pub fn num_facts(&self) -> usize {
        self.facts.len()
    }

    /// Fact names indexed by [`FactId`].
    pub fn fact_names(&self) -> &[String] {
        &self.facts
    }

    /// Name of `fact`, if it exists.
    pub fn fact_name(&self, fact: FactId) -> Option<&str> {
        self.facts.get(fact).map(String::as_str)
    }

    /// Looks up a fact by name.
    pub fn fact_id(&self, name: &str) -> Option<FactId> {
        self.facts.iter().position(|f| f == name)
    }

    /// Looks up an action index by name.
    pub fn action_index(&self, name: &str) -> Option<usize> {
        self.actions.iter().position(|a| a.name == name)
    }
}

impl PlanningProblem for GroundProblem {
    type State = FactState;
    type Action = GroundAction;
    type Heuristic = RelaxedHeuristic;

    fn initial_state(&self) -> &FactState {
        &self.init
    }

    fn goal(&self) -> &Condition {
        &self.goal
    }

    fn actions(&self) -> &[GroundAction] {
        &self.actions
    }

    fn requirements(&self) -> &[RequireKey] {
        &self.requirements
    }

    fn heuristic(&self, name: HeuristicName) -> Result<RelaxedHeuristic> {
        Ok(RelaxedHeuristic::new(name, self.num_facts(), &self.actions))
    }
}

/// Fluent builder for [`GroundProblem`], addressing facts by name.
///
/// Every fact must be declared with [`with_facts`](Self::with_facts) before
/// the problem is built; referencing an undeclared fact is a model error.
///
/// # Example
///
/// ```
/// use planforge_core::{PlanningProblem, PlanningState};
/// use planforge_strips::{ActionBuilder, ProblemBuilder};
///
/// let problem = ProblemBuilder::new("move")
///     .with_facts(["at_A", "at_B"])
///     .with_init(["at_A"])
///     .with_goal(["at_B"])
///     .with_action(
///         ActionBuilder::new("move_A_to_B")
///             .with_precondition(["at_A"])
///             .with_add(["at_B"])
///             .with_delete(["at_A"]),
///     )
///     .build()
///     .unwrap();
///
/// assert_eq!(problem.actions().len(), 1);
/// assert!(!problem.initial_state().satisfies(problem.goal()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProblemBuilder {
    name: String,
    facts: Vec<String>,
    init: Vec<String>,
    goal: Vec<String>,
    goal_negative: Vec<String>,
    actions: Vec<ActionBuilder>,
    requirements: Vec<RequireKey>,
}

impl ProblemBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Declares facts; duplicates are ignored.
    pub fn with_facts<I, S>(mut self, facts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.facts.extend(facts.into_iter().map(Into::into));
        self
    }

    /// Adds facts that hold initially.
    pub fn with_init<I, S>(mut self, facts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.init.extend(facts.into_iter().map(Into::into));
        self
    }

    /// Adds facts the goal requires to hold.
    pub fn with_goal<I, S>(mut self, facts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.goal.extend(facts.into_iter().map(Into::into));
        self
    }

    /// Adds facts the goal requires to be false.
    pub fn with_negative_goal<I, S>(mut self, facts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.goal_negative.extend(facts.into_iter().map(Into::into));
        self
    }

    pub fn with_requirement(mut self, requirement: RequireKey) -> Self {
        self.requirements.push(requirement);
        self
    }

    pub fn with_requirements(mut self, requirements: impl IntoIterator<Item = RequireKey>) -> Self {
        self.requirements.extend(requirements);
        self
    }

    /// Appends an action; actions keep their insertion order as indices.
    pub fn with_action(mut self, action: ActionBuilder) -> Self {
        self.actions.push(action);
        self
    }

    pub fn with_actions(mut self, actions: impl IntoIterator<Item = ActionBuilder>) -> Self {
        self.actions.extend(actions);
        self
    }

    /// Resolves every fact name and builds the problem.
    ///
    /// # Errors
    ///
    /// Returns `Model` if a name is undeclared or two actions share a name.
    pub fn build(self) -> Result<GroundProblem> {
        let mut table = FactTable::default();
        for fact in &self.facts {
            table.declare(fact);
        }

        let init = FactState::from_facts(table.len(), table.resolve_all(&self.init, "init")?);
        let goal = Condition::new(
            table.resolve_all(&self.goal, "goal")?,
            table.resolve_all(&self.goal_negative, "goal")?,
        );

        let mut seen = HashMap::with_capacity(self.actions.len());
        let mut actions = Vec::with_capacity(self.actions.len());
        for (index, builder) in self.actions.into_iter().enumerate() {
            if let Some(previous) = seen.insert(builder.name.clone(), index) {
                return Err(PlanForgeError::Model(format!(
                    "duplicate action `{}` (indices {previous} and {index})",
                    builder.name
                )));
            }
            actions.push(builder.resolve(&table)?);
        }

        let mut requirements = self.requirements;
        if requirements.is_empty() {
            requirements.push(RequireKey::Strips);
        }

        Ok(GroundProblem {
            name: self.name,
            facts: table.names,
            init,
            goal,
            actions,
            requirements,
        })
    }
}

/// Fluent builder for a single [`GroundAction`].
#[derive(Debug, Clone, Default)]
pub struct ActionBuilder {
    name: String,
    precondition: Vec<String>,
    precondition_negative: Vec<String>,
    add: Vec<String>,
    delete: Vec<String>,
    when: Vec<WhenBuilder>,
}

impl ActionBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_precondition<I, S>(mut self, facts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.precondition.extend(facts.into_iter().map(Into::into));
        self
    }

    pub fn with_negative_precondition<I, S>(mut self, facts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.precondition_negative
            .extend(facts.into_iter().map(Into::into));
        self
    }

    pub fn with_add<I, S>(mut self, facts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add.extend(facts.into_iter().map(Into::into));
        self
    }

    pub fn with_delete<I, S>(mut self, facts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.delete.extend(facts.into_iter().map(Into::into));
        self
    }

    /// Adds a conditional effect, applied after the unconditional one.
    pub fn with_when(mut self, when: WhenBuilder) -> Self {
        self.when.push(when);
        self
    }

    fn resolve(self, table: &FactTable) -> Result<GroundAction> {
        let context = format!("action `{}`", self.name);
        let precondition = Condition::new(
            table.resolve_all(&self.precondition, &context)?,
            table.resolve_all(&self.precondition_negative, &context)?,
        );

        let mut effects = Vec::with_capacity(1 + self.when.len());
        let unconditional = Effect::new(
            table.resolve_all(&self.add, &context)?,
            table.resolve_all(&self.delete, &context)?,
        );
        if !unconditional.is_empty() {
            effects.push(ConditionalEffect::new(Condition::default(), unconditional));
        }
        for when in self.when {
            effects.push(when.resolve(table, &context)?);
        }

        Ok(GroundAction::new(self.name, precondition, effects))
    }
}

/// A conditional effect: `when (condition) (effect)`.
#[derive(Debug, Clone, Default)]
pub struct WhenBuilder {
    condition: Vec<String>,
    condition_negative: Vec<String>,
    add: Vec<String>,
    delete: Vec<String>,
}

impl WhenBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_condition<I, S>(mut self, facts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.condition.extend(facts.into_iter().map(Into::into));
        self
    }

    pub fn with_negative_condition<I, S>(mut self, facts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.condition_negative
            .extend(facts.into_iter().map(Into::into));
        self
    }

    pub fn with_add<I, S>(mut self, facts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add.extend(facts.into_iter().map(Into::into));
        self
    }

    pub fn with_delete<I, S>(mut self, facts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.delete.extend(facts.into_iter().map(Into::into));
        self
    }

    fn resolve(
        self,
        table: &FactTable,
        context: &str,
    ) -> Result<ConditionalEffect<Condition, Effect>> {
        Ok(ConditionalEffect::new(
            Condition::new(
                table.resolve_all(&self.condition, context)?,
                table.resolve_all(&self.condition_negative, context)?,
            ),
            Effect::new(
                table.resolve_all(&self.add, context)?,
                table.resolve_all(&self.delete, context)?,
            ),
        ))
    }
}

/// Interns fact names in declaration order.
#[derive(Default)]
struct FactTable {
    names: Vec<String>,
    ids: HashMap<String, FactId>,
}

impl FactTable {
    fn declare(&mut self, name: &str) {
        if !self.ids.contains_key(name) {
            self.ids.insert(name.to_string(), self.names.len());
            self.names.push(name.to_string());
        }
    }

    fn len(&self) -> usize {
        self.names.len()
    }

    fn resolve_all(&self, names: &[String], context: &str) -> Result<Vec<FactId>> {
        names
            .iter()
            .map(|name| {
                self.ids.get(name).copied().ok_or_else(|| {
                    PlanForgeError::Model(format!("unknown fact `{name}` in {context}"))
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "problem_tests.rs"]
mod tests;
