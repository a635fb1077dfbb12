//! Propositional states, conditions and effects.

use std::fmt;

use planforge_core::PlanningState;
use smallvec::{smallvec, SmallVec};

/// Index of a ground fact in its problem's fact table.
pub type FactId = usize;

const WORD_BITS: usize = 64;

/// A set of true facts, stored as a fixed-width bit set.
///
/// Every state of one problem has the same width, so equality and hashing
/// are plain word comparisons.
///
/// # Example
///
/// ```
/// use planforge_strips::FactState;
///
/// let mut state = FactState::new(3);
/// state.insert(2);
/// assert!(state.contains(2));
/// assert!(!state.contains(0));
/// assert_eq!(state.iter().collect::<Vec<_>>(), vec![2]);
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct FactState {
    words: SmallVec<[u64; 2]>,
}

impl FactState {
    /// Creates an empty state able to hold `num_facts` facts.
    pub fn new(num_facts: usize) -> Self {
        Self {
            words: smallvec![0; num_facts.div_ceil(WORD_BITS)],
        }
    }

    /// Creates a state holding exactly `facts`.
    pub fn from_facts(num_facts: usize, facts: impl IntoIterator<Item = FactId>) -> Self {
        let mut state = Self::new(num_facts);
        for fact in facts {
            state.insert(fact);
        }
        state
    }

    /// Returns true if `fact` holds.
    #[inline]
    pub fn contains(&self, fact: FactId) -> bool {
        self.words
            .get(fact / WORD_BITS)
            .is_some_and(|w| w & (1 << (fact % WORD_BITS)) != 0)
    }

    /// Makes `fact` true.
    ///
    /// `fact` must be below the width the state was created with; the width
    /// never changes.
    #[inline]
    pub fn insert(&mut self, fact: FactId) {
        debug_assert!(
            fact / WORD_BITS < self.words.len(),
            "fact {fact} out of range for a state of {} words",
            self.words.len()
        );
        if let Some(w) = self.words.get_mut(fact / WORD_BITS) {
            *w |= 1 << (fact % WORD_BITS);
        }
    }

    /// Makes `fact` false.
    #[inline]
    pub fn remove(&mut self, fact: FactId) {
        if let Some(w) = self.words.get_mut(fact / WORD_BITS) {
            *w &= !(1 << (fact % WORD_BITS));
        }
    }

    /// Number of true facts.
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns true if no fact holds.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Iterates over true facts in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = FactId> + '_ {
        self.words.iter().enumerate().flat_map(|(i, &word)| {
            let mut bits = word;
            std::iter::from_fn(move || {
                if bits == 0 {
                    return None;
                }
                let bit = bits.trailing_zeros() as usize;
                bits &= bits - 1;
                Some(i * WORD_BITS + bit)
            })
        })
    }
}

impl fmt::Debug for FactState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// A conjunction of positive and negative fact literals.
///
/// The empty condition is satisfied by every state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Condition {
    pub positive: Vec<FactId>,
    pub negative: Vec<FactId>,
}

impl Condition {
    pub fn new(mut positive: Vec<FactId>, mut negative: Vec<FactId>) -> Self {
        positive.sort_unstable();
        positive.dedup();
        negative.sort_unstable();
        negative.dedup();
        Self { positive, negative }
    }

    /// A condition requiring every fact in `facts`.
    pub fn all_of(facts: Vec<FactId>) -> Self {
        Self::new(facts, Vec::new())
    }

    /// Returns true if the condition has no literal.
    pub fn is_trivial(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }
}

/// Add and delete lists. Deletes are applied before adds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Effect {
    pub add: Vec<FactId>,
    pub delete: Vec<FactId>,
}

impl Effect {
    pub fn new(add: Vec<FactId>, delete: Vec<FactId>) -> Self {
        Self { add, delete }
    }

    /// Returns true if applying the effect changes nothing.
    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.delete.is_empty()
    }
}

impl PlanningState for FactState {
    type Condition = Condition;
    type Effect = Effect;

    fn satisfies(&self, condition: &Condition) -> bool {
        condition.positive.iter().all(|&f| self.contains(f))
            && condition.negative.iter().all(|&f| !self.contains(f))
    }

    fn apply(&mut self, effect: &Effect) {
        for &fact in &effect.delete {
            self.remove(fact);
        }
        for &fact in &effect.add {
            self.insert(fact);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_span_several_words() {
        let mut state = FactState::new(130);
        state.insert(0);
        state.insert(64);
        state.insert(129);

        assert_eq!(state.len(), 3);
        assert_eq!(state.iter().collect::<Vec<_>>(), vec![0, 64, 129]);

        state.remove(64);
        assert!(!state.contains(64));
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn test_equal_states_hash_equal() {
        use std::collections::HashSet;

        let a = FactState::from_facts(10, [1, 3]);
        let mut b = FactState::from_facts(10, [3]);
        b.insert(1);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(!set.insert(b));
    }

    #[test]
    fn test_insert_keeps_width() {
        let mut a = FactState::new(64);
        a.insert(63);
        let b = FactState::from_facts(64, [63]);

        assert_eq!(a, b);
        assert_eq!(a.words.len(), 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of range")]
    fn test_insert_past_width_panics() {
        let mut state = FactState::new(64);
        state.insert(64);
    }

    #[test]
    fn test_satisfies_checks_both_polarities() {
        let state = FactState::from_facts(4, [0, 1]);
        assert!(state.satisfies(&Condition::new(vec![0], vec![2])));
        assert!(!state.satisfies(&Condition::new(vec![0], vec![1])));
        assert!(!state.satisfies(&Condition::all_of(vec![3])));
        assert!(state.satisfies(&Condition::default()));
    }

    #[test]
    fn test_apply_deletes_before_adds() {
        let mut state = FactState::from_facts(4, [0]);
        state.apply(&Effect::new(vec![0, 1], vec![0]));
        assert!(state.contains(0), "add wins over delete of the same fact");
        assert!(state.contains(1));
    }

    #[test]
    fn test_debug_lists_true_facts() {
        let state = FactState::from_facts(8, [5, 2]);
        assert_eq!(format!("{state:?}"), "{2, 5}");
    }
}
