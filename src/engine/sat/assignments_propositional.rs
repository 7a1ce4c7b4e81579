use crate::basic_types::ClauseReference;
use crate::basic_types::KeyedVec;
use crate::engine::variables::Literal;
use crate::engine::variables::PropositionalVariable;
use crate::learnsat_assert_simple;

/// Per-variable assignment data: the value, the decision level and trail position at which it was
/// assigned and the clause which forced it (if any).
///
/// The level of an unassigned variable is reported as 0, the same as a variable fixed at the root.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct VariableAssignment {
    value: Option<bool>,
    level: usize,
    trail_position: usize,
    reason: Option<ClauseReference>,
}

/// The assignment trail. Assignments are appended in chronological order, so trail positions are
/// strictly increasing and decision levels are non-decreasing along the trail.
#[derive(Debug, Default)]
pub(crate) struct AssignmentsPropositional {
    variables: KeyedVec<PropositionalVariable, VariableAssignment>,
    trail: Vec<Literal>,
    /// `trail_delimiter[i]` is the trail length at the moment decision level `i + 1` was opened.
    trail_delimiter: Vec<usize>,
}

impl AssignmentsPropositional {
    pub(crate) fn grow(&mut self) -> PropositionalVariable {
        self.variables.push(VariableAssignment::default())
    }

    pub(crate) fn num_propositional_variables(&self) -> u32 {
        self.variables.len() as u32
    }

    pub(crate) fn get_decision_level(&self) -> usize {
        self.trail_delimiter.len()
    }

    pub(crate) fn increase_decision_level(&mut self) {
        self.trail_delimiter.push(self.trail.len());
    }

    pub(crate) fn num_trail_entries(&self) -> usize {
        self.trail.len()
    }

    pub(crate) fn get_trail_entry(&self, index: usize) -> Literal {
        self.trail[index]
    }

    /// The number of variables fixed at the root level.
    pub(crate) fn num_root_assignments(&self) -> usize {
        self.trail_delimiter
            .first()
            .copied()
            .unwrap_or(self.trail.len())
    }

    pub(crate) fn enqueue_decision_literal(&mut self, decision_literal: Literal) {
        learnsat_assert_simple!(
            self.get_decision_level() > 0,
            "Decisions can only be made above the root level"
        );
        self.make_assignment(decision_literal, None);
    }

    pub(crate) fn enqueue_propagated_literal(
        &mut self,
        propagated_literal: Literal,
        reason: Option<ClauseReference>,
    ) {
        self.make_assignment(propagated_literal, reason);
    }

    fn make_assignment(&mut self, true_literal: Literal, reason: Option<ClauseReference>) {
        learnsat_assert_simple!(
            self.is_literal_unassigned(true_literal),
            "Cannot assign {true_literal}, its variable is already assigned"
        );

        let level = self.get_decision_level();
        self.variables[true_literal.get_propositional_variable()] = VariableAssignment {
            value: Some(true_literal.is_positive()),
            level,
            trail_position: self.trail.len(),
            reason,
        };
        self.trail.push(true_literal);
    }

    /// Undo every assignment made above `new_decision_level` and return the literals that were
    /// unassigned, most recent first.
    pub(crate) fn synchronise(
        &mut self,
        new_decision_level: usize,
    ) -> impl Iterator<Item = Literal> + '_ {
        learnsat_assert_simple!(new_decision_level <= self.get_decision_level());

        let start = if new_decision_level == self.get_decision_level() {
            self.trail.len()
        } else {
            self.trail_delimiter[new_decision_level]
        };
        self.trail_delimiter.truncate(new_decision_level);

        for literal in &self.trail[start..] {
            let assignment = &mut self.variables[literal.get_propositional_variable()];
            assignment.value = None;
            assignment.level = 0;
            assignment.reason = None;
        }

        self.trail.drain(start..).rev()
    }
}

// Queries.
impl AssignmentsPropositional {
    pub(crate) fn get_literal_value(&self, literal: Literal) -> Option<bool> {
        self.variables[literal.get_propositional_variable()]
            .value
            .map(|value| value == literal.is_positive())
    }

    pub(crate) fn is_literal_assigned_true(&self, literal: Literal) -> bool {
        self.get_literal_value(literal) == Some(true)
    }

    pub(crate) fn is_literal_assigned_false(&self, literal: Literal) -> bool {
        self.get_literal_value(literal) == Some(false)
    }

    pub(crate) fn is_literal_unassigned(&self, literal: Literal) -> bool {
        self.get_literal_value(literal).is_none()
    }

    pub(crate) fn is_variable_assigned(&self, variable: PropositionalVariable) -> bool {
        self.variables[variable].value.is_some()
    }

    pub(crate) fn get_variable_assignment_level(&self, variable: PropositionalVariable) -> usize {
        self.variables[variable].level
    }

    pub(crate) fn get_literal_assignment_level(&self, literal: Literal) -> usize {
        self.get_variable_assignment_level(literal.get_propositional_variable())
    }

    /// The trail position at which `variable` was most recently assigned. The position is kept
    /// after the variable is unassigned so heuristics can still order by it.
    pub(crate) fn get_variable_trail_position(&self, variable: PropositionalVariable) -> usize {
        self.variables[variable].trail_position
    }

    pub(crate) fn get_literal_trail_position(&self, literal: Literal) -> usize {
        self.get_variable_trail_position(literal.get_propositional_variable())
    }

    pub(crate) fn get_variable_reason(
        &self,
        variable: PropositionalVariable,
    ) -> Option<ClauseReference> {
        self.variables[variable].reason
    }
}
