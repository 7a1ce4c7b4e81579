use log::trace;

use super::MinimisationContext;
use crate::engine::variables::Literal;
use crate::engine::variables::PropositionalVariable;

/// Removes literals from a first UIP clause that are implied by the other literals of the clause.
///
/// A literal is removable if every literal of its reason is either in the clause, fixed at the
/// root, or recursively removable. Results are cached in the `poison` and `removable` flags so
/// each variable is explored at most once per clause. The per-level records of conflict analysis
/// allow failing early: a level with a single seen literal cannot contain an implied literal, and
/// a literal assigned before every seen literal of its level cannot be implied by them.
///
/// # Bibliography
/// \[1\] N. Sörensson and A. Biere, ‘Minimizing learned clauses’, in International Conference on
/// Theory and Applications of Satisfiability Testing, 2009
#[derive(Debug, Default)]
pub(crate) struct RecursiveMinimiser {
    /// The variables whose `poison` or `removable` flag is set.
    minimised: Vec<PropositionalVariable>,
}

impl RecursiveMinimiser {
    /// Removes the redundant literals from `learned_literals` and returns how many were removed.
    /// The order of the remaining literals is kept.
    pub(crate) fn minimise(
        &mut self,
        context: &mut MinimisationContext,
        learned_literals: &mut Vec<Literal>,
    ) -> usize {
        let num_literals_before = learned_literals.len();

        learned_literals.retain(|&literal| !self.is_removable(!literal, 0, context));

        for variable in self.minimised.drain(..) {
            context.flags[variable].poison = false;
            context.flags[variable].removable = false;
        }

        let num_removed = num_literals_before - learned_literals.len();
        trace!("minimisation removed {num_removed} literals");
        num_removed
    }

    /// Whether the true literal is implied by the (negated) literals of the learned clause.
    fn is_removable(
        &mut self,
        true_literal: Literal,
        depth: usize,
        context: &mut MinimisationContext,
    ) -> bool {
        let variable = true_literal.get_propositional_variable();
        let level = context.assignments.get_variable_assignment_level(variable);
        let flags = context.flags(variable);

        if level == 0 || flags.removable || (depth > 0 && flags.seen) {
            return true;
        }

        let Some(reason) = context.get_reason(true_literal) else {
            return false;
        };
        if flags.poison || level == context.get_decision_level() {
            return false;
        }

        let record = context.decision_levels.get(level);
        let trail_position = context.assignments.get_variable_trail_position(variable);
        if (depth == 0 && record.seen_count < 2)
            || trail_position <= record.min_trail_position
            || depth > context.max_depth
        {
            return false;
        }

        let is_removable = reason
            .iter()
            .filter(|&&literal| literal != true_literal)
            .all(|&literal| self.is_removable(!literal, depth + 1, context));

        if is_removable {
            context.flags[variable].removable = true;
        } else {
            context.flags[variable].poison = true;
        }
        self.minimised.push(variable);
        trace!("minimised {true_literal} at depth {depth}: removable = {is_removable}");

        is_removable
    }
}
