#![cfg(test)]

use crate::engine::test_helper::SharedBuffer;
use crate::engine::test_helper::TestSolver;
use crate::AnalysisOutcome;
use crate::ClauseLearningSolver;
use crate::Proof;
use crate::SolverOptions;

#[test]
/// Conflict literals on levels {1, 1, 2}, where the second level-1 literal is implied by the first.
fn two_levels_give_glue_two_and_backjump_to_the_lower_one() {
    let mut solver = TestSolver::default();
    let a = solver.new_literal();
    let b = solver.new_literal();
    let c = solver.new_literal();

    let reason_b = solver.add_clause(vec![b, !a]);
    let conflict = solver.add_clause(vec![!a, !b, !c]);

    solver.set_decision(a);
    solver.set_propagation(b, Some(reason_b));
    solver.set_decision(c);

    let outcome = solver.analyse_conflict(conflict);

    let AnalysisOutcome::Learned {
        asserting_literal,
        backjump_level,
        glue,
        size,
        learned_clause: Some(learned_clause),
    } = outcome
    else {
        panic!("expected a stored learned clause, got {outcome:?}");
    };
    assert_eq!(asserting_literal, !c);
    assert_eq!(backjump_level, 1);
    assert_eq!(glue, 2);
    assert_eq!(size, 2);
    assert_eq!(solver.solver.get_clause_literals(learned_clause), &[!c, !a]);

    assert_eq!(solver.solver.get_decision_level(), 1);
    assert!(solver.is_true(!c));
    assert_eq!(solver.solver.get_assignment_level(c), 1);
    assert_eq!(solver.solver.get_reason(!c), Some(learned_clause));
    assert!(solver.solver.conflict_analyser().is_clear());
}

#[test]
fn without_minimisation_every_lower_level_literal_is_kept() {
    let mut solver = TestSolver::with_options(SolverOptions {
        minimise: false,
        ..Default::default()
    });
    let a = solver.new_literal();
    let b = solver.new_literal();
    let c = solver.new_literal();

    let reason_b = solver.add_clause(vec![b, !a]);
    let conflict = solver.add_clause(vec![!a, !b, !c]);

    solver.set_decision(a);
    solver.set_propagation(b, Some(reason_b));
    solver.set_decision(c);

    let outcome = solver.analyse_conflict(conflict);

    let AnalysisOutcome::Learned {
        backjump_level,
        glue,
        learned_clause: Some(learned_clause),
        ..
    } = outcome
    else {
        panic!("expected a stored learned clause, got {outcome:?}");
    };
    assert_eq!(backjump_level, 1);
    assert_eq!(glue, 2);
    assert_eq!(
        solver.solver.get_clause_literals(learned_clause),
        &[!c, !b, !a]
    );
}

#[test]
fn resolution_stops_at_the_first_unique_implication_point() {
    let mut solver = TestSolver::default();
    let [a, b, x, y, f] = [
        solver.new_literal(),
        solver.new_literal(),
        solver.new_literal(),
        solver.new_literal(),
        solver.new_literal(),
    ];

    let reason_y = solver.add_clause(vec![y, !x, !a]);
    let conflict = solver.add_clause(vec![f, !x, !y]);

    solver.set_propagation(!f, None);
    solver.set_decision(a);
    solver.set_decision(b);
    solver.set_decision(x);
    solver.set_propagation(y, Some(reason_y));

    let outcome = solver.analyse_conflict(conflict);

    let AnalysisOutcome::Learned {
        asserting_literal,
        backjump_level,
        glue,
        learned_clause: Some(learned_clause),
        ..
    } = outcome
    else {
        panic!("expected a stored learned clause, got {outcome:?}");
    };
    assert_eq!(asserting_literal, !x);
    assert_eq!(backjump_level, 1);
    assert_eq!(glue, 2);
    // `f` is false at the root and therefore never part of the learned clause.
    assert_eq!(solver.solver.get_clause_literals(learned_clause), &[!x, !a]);
    assert!(solver.assignments().is_literal_unassigned(b));
}

#[test]
fn the_second_literal_is_on_the_backjump_level() {
    let mut solver = TestSolver::default();
    let [a, b, c] = [
        solver.new_literal(),
        solver.new_literal(),
        solver.new_literal(),
    ];
    let conflict = solver.add_clause(vec![!a, !b, !c]);

    solver.set_decision(a);
    solver.set_decision(b);
    solver.set_decision(c);

    let outcome = solver.analyse_conflict(conflict);

    let AnalysisOutcome::Learned {
        backjump_level,
        glue,
        learned_clause: Some(learned_clause),
        ..
    } = outcome
    else {
        panic!("expected a stored learned clause, got {outcome:?}");
    };
    assert_eq!(glue, 3);
    assert_eq!(backjump_level, 2);

    let literals = solver.solver.get_clause_literals(learned_clause);
    assert_eq!(literals, &[!c, !b, !a]);
    assert!(literals[2..]
        .iter()
        .all(|&literal| solver.solver.get_assignment_level(literal)
            <= solver.solver.get_assignment_level(literals[1])));
}

#[test]
fn a_single_current_level_literal_is_learned_as_a_unit() {
    let mut solver = TestSolver::default();
    let a = solver.new_literal();
    let b = solver.new_literal();
    let conflict = solver.add_clause(vec![!a, !b]);
    let reason_b = solver.add_clause(vec![!a, b]);

    solver.set_decision(a);
    solver.set_propagation(b, Some(reason_b));

    let outcome = solver.analyse_conflict(conflict);

    assert_eq!(
        outcome,
        AnalysisOutcome::Learned {
            asserting_literal: !a,
            backjump_level: 0,
            glue: 1,
            size: 1,
            learned_clause: None,
        }
    );
    assert_eq!(solver.solver.get_decision_level(), 0);
    assert!(solver.is_true(!a));
    assert_eq!(solver.solver.num_learned_clauses(), 0);
    assert!(solver.solver.is_iterating());

    solver.solver.iterate();
    assert!(!solver.solver.is_iterating());
}

#[test]
fn a_root_level_conflict_learns_the_empty_clause() {
    let buffer = SharedBuffer::default();
    let mut solver = TestSolver {
        solver: ClauseLearningSolver::new(SolverOptions::default())
            .expect("default options are valid")
            .with_proof(Proof::new(buffer.clone())),
    };
    let x = solver.new_literal();
    let y = solver.new_literal();
    let conflict = solver.add_clause(vec![x, y]);

    solver.set_propagation(!x, None);
    solver.set_propagation(!y, None);
    let num_trail_entries = solver.solver.num_trail_entries();

    let outcome = solver.analyse_conflict(conflict);

    assert_eq!(outcome, AnalysisOutcome::Unsatisfiable);
    assert!(solver.solver.is_unsatisfiable());
    assert_eq!(solver.solver.num_trail_entries(), num_trail_entries);
    assert_eq!(solver.solver.num_learned_clauses(), 0);
    assert!(solver.solver.conflict_analyser().is_clear());
    assert_eq!(buffer.contents(), "-1 0\n-2 0\n0\n");

    // Unsatisfiability is final; analysing again does not trace a second empty clause.
    assert_eq!(
        solver.analyse_conflict(conflict),
        AnalysisOutcome::Unsatisfiable
    );
    assert_eq!(buffer.contents(), "-1 0\n-2 0\n0\n");
}

#[test]
fn learned_clauses_are_traced_to_the_proof() {
    let buffer = SharedBuffer::default();
    let mut solver = TestSolver {
        solver: ClauseLearningSolver::new(SolverOptions::default())
            .expect("default options are valid")
            .with_proof(Proof::new(buffer.clone())),
    };
    let [a, b, c] = [
        solver.new_literal(),
        solver.new_literal(),
        solver.new_literal(),
    ];
    let conflict = solver.add_clause(vec![!a, !b, !c]);

    solver.set_decision(a);
    solver.set_decision(b);
    solver.set_decision(c);
    let _ = solver.analyse_conflict(conflict);

    assert_eq!(buffer.contents(), "-3 -2 -1 0\n");
}

#[test]
fn glue_averages_follow_the_learned_clauses() {
    let mut solver = TestSolver::default();
    let [a, b, c] = [
        solver.new_literal(),
        solver.new_literal(),
        solver.new_literal(),
    ];
    let conflict = solver.add_clause(vec![!a, !b, !c]);

    solver.set_decision(a);
    solver.set_decision(b);
    solver.set_decision(c);
    let _ = solver.analyse_conflict(conflict);

    assert_eq!(solver.solver.num_conflicts(), 1);
    assert!(solver.solver.fast_glue_average() > 0.0);
    assert!(solver.solver.fast_glue_average() > solver.solver.slow_glue_average());
    assert_eq!(solver.solver.counters().num_learned_units, 0);
}
