#![cfg(test)]

use crate::engine::test_helper::TestSolver;
use crate::AnalysisOutcome;

#[test]
/// A long learned clause with a high glue is stamped when it is resolved in a later conflict.
fn resolved_learned_clauses_receive_a_stamp() {
    let mut solver = TestSolver::default();
    let [a, b, c, d] = [
        solver.new_literal(),
        solver.new_literal(),
        solver.new_literal(),
        solver.new_literal(),
    ];
    let first_conflict = solver.add_clause(vec![!a, !b, !c, !d]);
    let second_conflict = solver.add_clause(vec![d, !c]);

    solver.set_decision(a);
    solver.set_decision(b);
    solver.set_decision(c);
    solver.set_decision(d);

    let AnalysisOutcome::Learned {
        learned_clause: Some(learned_clause),
        glue: 4,
        size: 4,
        ..
    } = solver.analyse_conflict(first_conflict)
    else {
        panic!("expected a clause of size and glue 4");
    };
    assert!(solver.solver.clause_allocator()[learned_clause].is_extended());
    assert_eq!(solver.solver.clause_allocator()[learned_clause].resolved(), 0);

    // `!d` is now implied on level 3 by the learned clause, which falsifies `d \/ !c`.
    assert!(solver.is_true(!d));
    let outcome = solver.analyse_conflict(second_conflict);

    assert!(matches!(
        outcome,
        AnalysisOutcome::Learned {
            backjump_level: 2,
            glue: 3,
            size: 3,
            ..
        }
    ));
    assert_eq!(solver.solver.clause_allocator()[learned_clause].resolved(), 1);
    assert_eq!(solver.solver.conflict_analyser().num_resolved(), 1);
}

#[test]
fn short_learned_clauses_are_never_stamped() {
    let mut solver = TestSolver::default();
    let [a, b, c] = [
        solver.new_literal(),
        solver.new_literal(),
        solver.new_literal(),
    ];
    let first_conflict = solver.add_clause(vec![!a, !b, !c]);
    let second_conflict = solver.add_clause(vec![c, !b]);

    solver.set_decision(a);
    solver.set_decision(b);
    solver.set_decision(c);

    let AnalysisOutcome::Learned {
        learned_clause: Some(learned_clause),
        ..
    } = solver.analyse_conflict(first_conflict)
    else {
        panic!("expected a stored learned clause");
    };
    assert!(!solver.solver.clause_allocator()[learned_clause].is_extended());

    let _ = solver.analyse_conflict(second_conflict);

    assert_eq!(solver.solver.conflict_analyser().num_resolved(), 0);
}
