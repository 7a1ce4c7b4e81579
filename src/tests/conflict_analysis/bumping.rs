#![cfg(test)]

use crate::engine::test_helper::TestSolver;
use crate::engine::variables::Literal;
use crate::engine::variables::PropositionalVariable;
use crate::BumpSort;
use crate::SolverOptions;

/// Variables `x`, `y`, `z` (created in that order) are seen in the order `x`, `y`, `z`: `x` and
/// `y` on level 1, `z` as the first UIP on level 2. Returns the queue from the front afterwards.
fn bump_order_after_conflict(bump_sort: BumpSort) -> (Vec<PropositionalVariable>, [Literal; 3]) {
    let mut solver = TestSolver::with_options(SolverOptions {
        bump_sort,
        minimise: false,
        ..Default::default()
    });
    let [x, y, z] = [
        solver.new_literal(),
        solver.new_literal(),
        solver.new_literal(),
    ];
    let reason_y = solver.add_clause(vec![y, !x]);
    let conflict = solver.add_clause(vec![!x, !y, !z]);

    solver.set_decision(x);
    solver.set_propagation(y, Some(reason_y));
    solver.set_decision(z);
    let _ = solver.analyse_conflict(conflict);

    (
        solver.solver.vmtf().iter_from_front().collect(),
        [x, y, z],
    )
}

fn variables(literals: [Literal; 3]) -> Vec<PropositionalVariable> {
    literals
        .iter()
        .map(|literal| literal.get_propositional_variable())
        .collect()
}

#[test]
fn reverse_bumping_leaves_the_first_seen_variable_at_the_front() {
    let (queue, [x, y, z]) = bump_order_after_conflict(BumpSort::Reverse);

    assert_eq!(queue, variables([x, y, z]));
}

#[test]
fn unsorted_bumping_leaves_the_last_seen_variable_at_the_front() {
    let (queue, [x, y, z]) = bump_order_after_conflict(BumpSort::Unsorted);

    assert_eq!(queue, variables([z, y, x]));
}

#[test]
fn bumping_by_stamp_keeps_the_relative_queue_order() {
    let (queue, [x, y, z]) = bump_order_after_conflict(BumpSort::BumpedEarlier);

    // Created in the order x, y, z, so z was already frontmost.
    assert_eq!(queue, variables([z, y, x]));
}

#[test]
fn every_seen_variable_is_bumped_once_and_scores_decay() {
    let mut solver = TestSolver::default();
    let [a, b, c, d] = [
        solver.new_literal(),
        solver.new_literal(),
        solver.new_literal(),
        solver.new_literal(),
    ];
    let reason_b = solver.add_clause(vec![b, !a]);
    let conflict = solver.add_clause(vec![!a, !b, !c]);
    let num_bumps_before = solver.solver.vmtf().num_bumps();

    solver.set_decision(a);
    solver.set_propagation(b, Some(reason_b));
    solver.set_decision(c);
    let _ = solver.analyse_conflict(conflict);

    let scores = solver.solver.scores();
    for literal in [a, b, c] {
        assert_eq!(scores.score(literal.get_propositional_variable()), 1.0);
    }
    assert_eq!(scores.score(d.get_propositional_variable()), 0.0);
    assert!(scores.increment() > 1.0);
    assert_eq!(solver.solver.vmtf().num_bumps(), num_bumps_before + 3);
}

#[test]
fn the_asserting_variable_becomes_the_next_decision_candidate_after_backjumping() {
    let mut solver = TestSolver::default();
    let [a, b, c, d] = [
        solver.new_literal(),
        solver.new_literal(),
        solver.new_literal(),
        solver.new_literal(),
    ];
    let conflict = solver.add_clause(vec![!a, !b, !c]);

    solver.set_decision(a);
    solver.set_decision(b);
    solver.set_decision(d);
    solver.set_decision(c);
    let _ = solver.analyse_conflict(conflict);

    // Back on level 2: `d` was unassigned and is the only candidate.
    assert_eq!(solver.solver.get_decision_level(), 2);
    assert_eq!(solver.solver.next_decision(), Some(d));
}

#[test]
fn every_variable_in_front_of_the_cursor_is_assigned() {
    let mut solver = TestSolver::default();
    let literals = solver.new_literals(6);
    let conflict = solver.add_clause(vec![!literals[0], !literals[2], !literals[4]]);

    solver.set_decision(literals[0]);
    solver.set_decision(literals[1]);
    solver.set_decision(literals[2]);
    solver.set_decision(literals[3]);
    solver.set_decision(literals[4]);
    let _ = solver.analyse_conflict(conflict);

    let vmtf = solver.solver.vmtf();
    let assignments = solver.assignments();
    assert!(vmtf
        .iter_from_front()
        .take_while(|&variable| Some(variable) != vmtf.cursor())
        .all(|variable| assignments.is_variable_assigned(variable)));
}
