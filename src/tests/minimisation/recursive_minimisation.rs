#![cfg(test)]

use crate::engine::test_helper::TestSolver;
use crate::AnalysisOutcome;
use crate::ClauseReference;
use crate::SolverOptions;

fn learned_clause(outcome: AnalysisOutcome) -> ClauseReference {
    match outcome {
        AnalysisOutcome::Learned {
            learned_clause: Some(learned_clause),
            ..
        } => learned_clause,
        _ => panic!("expected a stored learned clause, got {outcome:?}"),
    }
}

#[test]
/// `c` is implied by `a` through `b`, which is not part of the clause itself.
fn literals_implied_through_a_chain_of_reasons_are_removed() {
    let mut solver = TestSolver::default();
    let [a, b, c, d] = [
        solver.new_literal(),
        solver.new_literal(),
        solver.new_literal(),
        solver.new_literal(),
    ];
    let reason_b = solver.add_clause(vec![b, !a]);
    let reason_c = solver.add_clause(vec![c, !b]);
    let conflict = solver.add_clause(vec![!a, !c, !d]);

    solver.set_decision(a);
    solver.set_propagation(b, Some(reason_b));
    solver.set_propagation(c, Some(reason_c));
    solver.set_decision(d);

    let clause = learned_clause(solver.analyse_conflict(conflict));

    assert_eq!(solver.solver.get_clause_literals(clause), &[!d, !a]);
    assert_eq!(solver.solver.counters().num_minimised_literals, 1);
    assert!(solver.solver.conflict_analyser().is_clear());
}

#[test]
fn the_depth_limit_stops_the_recursion() {
    let mut solver = TestSolver::with_options(SolverOptions {
        minimise_depth: 0,
        ..Default::default()
    });
    let [a, b, c, d] = [
        solver.new_literal(),
        solver.new_literal(),
        solver.new_literal(),
        solver.new_literal(),
    ];
    let reason_b = solver.add_clause(vec![b, !a]);
    let reason_c = solver.add_clause(vec![c, !b]);
    let conflict = solver.add_clause(vec![!a, !c, !d]);

    solver.set_decision(a);
    solver.set_propagation(b, Some(reason_b));
    solver.set_propagation(c, Some(reason_c));
    solver.set_decision(d);

    let clause = learned_clause(solver.analyse_conflict(conflict));

    assert_eq!(solver.solver.get_clause_literals(clause), &[!d, !c, !a]);
    assert!(solver.solver.conflict_analyser().is_clear());
}

#[test]
/// `p` is the earliest seen literal of its level, so no other seen literal can imply it.
fn the_earliest_seen_literal_of_a_level_is_kept() {
    let mut solver = TestSolver::default();
    let [a, p, q, d] = [
        solver.new_literal(),
        solver.new_literal(),
        solver.new_literal(),
        solver.new_literal(),
    ];
    let reason_p = solver.add_clause(vec![p, !a]);
    let reason_q = solver.add_clause(vec![q, !p]);
    let conflict = solver.add_clause(vec![!p, !q, !d]);

    solver.set_decision(a);
    solver.set_propagation(p, Some(reason_p));
    solver.set_propagation(q, Some(reason_q));
    solver.set_decision(d);

    let clause = learned_clause(solver.analyse_conflict(conflict));

    assert_eq!(solver.solver.get_clause_literals(clause), &[!d, !p]);
}

#[test]
/// Both `r` and `s` depend on the decision `a`, which is not in the clause.
fn literals_depending_on_outside_decisions_are_kept() {
    let mut solver = TestSolver::default();
    let [a, r, s, d] = [
        solver.new_literal(),
        solver.new_literal(),
        solver.new_literal(),
        solver.new_literal(),
    ];
    let reason_r = solver.add_clause(vec![r, !a]);
    let reason_s = solver.add_clause(vec![s, !a]);
    let conflict = solver.add_clause(vec![!r, !s, !d]);

    solver.set_decision(a);
    solver.set_propagation(r, Some(reason_r));
    solver.set_propagation(s, Some(reason_s));
    solver.set_decision(d);

    let clause = learned_clause(solver.analyse_conflict(conflict));

    assert_eq!(solver.solver.get_clause_literals(clause), &[!d, !s, !r]);
    assert_eq!(solver.solver.counters().num_minimised_literals, 0);
    assert!(solver.solver.conflict_analyser().is_clear());
}

#[test]
fn root_level_literals_in_reasons_do_not_block_removal() {
    let mut solver = TestSolver::default();
    let [f, a, b, d] = [
        solver.new_literal(),
        solver.new_literal(),
        solver.new_literal(),
        solver.new_literal(),
    ];
    let reason_b = solver.add_clause(vec![b, !a, f]);
    let conflict = solver.add_clause(vec![!a, !b, !d]);

    solver.set_propagation(!f, None);
    solver.set_decision(a);
    solver.set_propagation(b, Some(reason_b));
    solver.set_decision(d);

    let clause = learned_clause(solver.analyse_conflict(conflict));

    assert_eq!(solver.solver.get_clause_literals(clause), &[!d, !a]);
}
