// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::error::AssertionFailure;
use crate::reporter::{Reporter, TallyReporter};

#[derive(Default)]
struct Trace {
    events: Vec<String>,
}

fn log(event: &'static str) -> impl Fn(&mut Trace) -> Outcome + 'static {
    move |trace| {
        trace.events.push(event.to_string());
        Ok(())
    }
}

fn fail(event: &'static str, message: &'static str) -> impl Fn(&mut Trace) -> Outcome + 'static {
    move |trace| {
        trace.events.push(event.to_string());
        Err(AssertionFailure::new(message).into())
    }
}

fn run(tree: &GroupTree<Trace>) -> (Trace, TallyReporter) {
    let mut trace = Trace::default();
    let mut reporter = TallyReporter::new();
    tree.run(&mut trace, &mut reporter);
    (trace, reporter)
}

#[test]
fn new_tree_has_only_a_root() {
    let tree: GroupTree<Trace> = GroupTree::new("Root");
    let root = tree.group(tree.root()).unwrap();
    assert_eq!(root.description(), "Root");
    assert_eq!(root.parent(), None);
    assert!(root.children().is_empty());
    assert_eq!(tree.example_count(), 0);
}

#[test]
fn child_group_links_to_parent() {
    let mut tree: GroupTree<Trace> = GroupTree::new("A");
    let b = tree.add_child_group(tree.root(), "B").unwrap();

    assert_eq!(tree.group(b).unwrap().parent(), Some(tree.root()));
    assert_eq!(tree.group(tree.root()).unwrap().children(), &[b]);
    assert_eq!(tree.ancestry(b), vec![tree.root(), b]);
}

#[test]
fn unknown_group_is_rejected() {
    let mut tree: GroupTree<Trace> = GroupTree::new("A");
    let stranger = GroupId(42);

    assert_eq!(
        tree.add_child_group(stranger, "B").unwrap_err(),
        BuildError::UnknownGroup(stranger)
    );
    assert!(tree.add_example(stranger, "x", log("x")).is_err());
    assert!(tree.add_setup_hook(stranger, log("x")).is_err());
    assert!(tree.add_teardown_hook(stranger, log("x")).is_err());
    assert!(tree.ancestry(stranger).is_empty());
}

#[test]
fn hooks_wrap_body_from_outermost_to_innermost() {
    let mut tree = GroupTree::new("A");
    let a = tree.root();
    tree.add_setup_hook(a, log("A.setup")).unwrap();
    tree.add_teardown_hook(a, log("A.teardown")).unwrap();
    let b = tree.add_child_group(a, "B").unwrap();
    tree.add_setup_hook(b, log("B.setup")).unwrap();
    tree.add_teardown_hook(b, log("B.teardown")).unwrap();
    tree.add_example(b, "x", log("body")).unwrap();

    let (trace, reporter) = run(&tree);

    assert_eq!(
        trace.events,
        ["A.setup", "B.setup", "body", "B.teardown", "A.teardown"]
    );
    assert_eq!(reporter.tally().passed(), 1);
}

#[test]
fn hooks_apply_to_deeply_nested_examples() {
    let mut tree = GroupTree::new("A");
    let a = tree.root();
    tree.add_setup_hook(a, log("A.setup")).unwrap();
    let b = tree.add_child_group(a, "B").unwrap();
    let c = tree.add_child_group(b, "C").unwrap();
    tree.add_example(c, "deep", log("body")).unwrap();

    let (trace, _) = run(&tree);

    assert_eq!(trace.events, ["A.setup", "body"]);
}

#[test]
fn hooks_run_in_declaration_order_within_a_group() {
    let mut tree = GroupTree::new("A");
    let a = tree.root();
    tree.add_setup_hook(a, log("first")).unwrap();
    tree.add_setup_hook(a, log("second")).unwrap();
    tree.add_teardown_hook(a, log("third")).unwrap();
    tree.add_teardown_hook(a, log("fourth")).unwrap();
    tree.add_example(a, "x", log("body")).unwrap();

    let (trace, _) = run(&tree);

    assert_eq!(trace.events, ["first", "second", "body", "third", "fourth"]);
}

#[test]
fn sibling_hooks_do_not_leak() {
    let mut tree = GroupTree::new("A");
    let a = tree.root();
    let b = tree.add_child_group(a, "B").unwrap();
    tree.add_setup_hook(b, log("B.setup")).unwrap();
    let c = tree.add_child_group(a, "C").unwrap();
    tree.add_example(c, "in C", log("C.body")).unwrap();

    let (trace, _) = run(&tree);

    assert_eq!(trace.events, ["C.body"]);
}

#[test]
fn each_example_gets_its_own_hook_cycle() {
    let mut tree = GroupTree::new("A");
    let a = tree.root();
    tree.add_setup_hook(a, log("setup")).unwrap();
    tree.add_teardown_hook(a, log("teardown")).unwrap();
    tree.add_example(a, "one", log("one")).unwrap();
    tree.add_example(a, "two", log("two")).unwrap();

    let (trace, _) = run(&tree);

    assert_eq!(
        trace.events,
        ["setup", "one", "teardown", "setup", "two", "teardown"]
    );
}

#[test]
fn own_examples_run_before_child_groups() {
    let mut tree = GroupTree::new("A");
    let a = tree.root();
    let b = tree.add_child_group(a, "B").unwrap();
    tree.add_example(b, "b1", log("b1")).unwrap();
    tree.add_example(a, "a1", log("a1")).unwrap();
    let c = tree.add_child_group(a, "C").unwrap();
    tree.add_example(c, "c1", log("c1")).unwrap();
    tree.add_example(a, "a2", log("a2")).unwrap();

    let (trace, _) = run(&tree);

    assert_eq!(trace.events, ["a1", "a2", "b1", "c1"]);
    assert_eq!(tree.descriptions(), ["a1", "a2", "b1", "c1"]);
}

#[test]
fn failure_is_isolated_to_its_example() {
    let mut tree = GroupTree::new("A");
    let a = tree.root();
    tree.add_example(a, "passes", log("one")).unwrap();
    tree.add_example(a, "fails", fail("two", "boom")).unwrap();
    tree.add_example(a, "passes too", log("three")).unwrap();

    let (trace, reporter) = run(&tree);

    assert_eq!(trace.events, ["one", "two", "three"]);
    let tally = reporter.tally();
    assert_eq!(tally.total(), 3);
    assert_eq!(tally.passed(), 2);
    assert_eq!(tally.failures()[0].description, "fails");
    assert_eq!(tally.failures()[0].message, "boom");
}

#[test]
fn failed_setup_skips_body_but_runs_teardown() {
    let mut tree = GroupTree::new("A");
    let a = tree.root();
    tree.add_setup_hook(a, fail("A.setup", "setup broke")).unwrap();
    tree.add_teardown_hook(a, log("A.teardown")).unwrap();
    let b = tree.add_child_group(a, "B").unwrap();
    tree.add_setup_hook(b, log("B.setup")).unwrap();
    tree.add_teardown_hook(b, log("B.teardown")).unwrap();
    tree.add_example(b, "x", log("body")).unwrap();

    let (trace, reporter) = run(&tree);

    assert_eq!(trace.events, ["A.setup", "B.teardown", "A.teardown"]);
    assert_eq!(reporter.tally().failures()[0].message, "setup broke");
}

#[test]
fn first_failure_wins_over_teardown_failure() {
    let mut tree = GroupTree::new("A");
    let a = tree.root();
    tree.add_teardown_hook(a, fail("teardown", "teardown broke"))
        .unwrap();
    tree.add_example(a, "x", fail("body", "body broke")).unwrap();

    let (_, reporter) = run(&tree);

    assert_eq!(reporter.tally().failed(), 1);
    assert_eq!(reporter.tally().failures()[0].message, "body broke");
}

#[test]
fn teardown_failure_fails_a_passing_example() {
    let mut tree = GroupTree::new("A");
    let a = tree.root();
    tree.add_teardown_hook(a, fail("teardown", "cleanup broke"))
        .unwrap();
    tree.add_example(a, "x", log("body")).unwrap();

    let (_, reporter) = run(&tree);

    assert_eq!(reporter.tally().failures()[0].message, "cleanup broke");
}

#[test]
fn panicking_body_is_reported_and_run_continues() {
    let mut tree = GroupTree::new("A");
    let a = tree.root();
    tree.add_example(a, "panics", |_: &mut Trace| panic!("kaboom"))
        .unwrap();
    tree.add_example(a, "after", log("after")).unwrap();

    let (trace, reporter) = run(&tree);

    assert_eq!(trace.events, ["after"]);
    assert_eq!(reporter.tally().failures()[0].message, "kaboom");
    assert_eq!(reporter.tally().passed(), 1);
}

#[test]
fn empty_group_reports_nothing() {
    let mut tree: GroupTree<Trace> = GroupTree::new("A");
    tree.add_child_group(tree.root(), "empty").unwrap();

    let (trace, reporter) = run(&tree);

    assert!(trace.events.is_empty());
    assert_eq!(reporter.tally().total(), 0);
}

#[test]
fn example_count_spans_all_groups() {
    let mut tree = GroupTree::new("A");
    let a = tree.root();
    let b = tree.add_child_group(a, "B").unwrap();
    let c = tree.add_child_group(b, "C").unwrap();
    tree.add_example(a, "1", log("1")).unwrap();
    tree.add_example(b, "2", log("2")).unwrap();
    tree.add_example(c, "3", log("3")).unwrap();

    assert_eq!(tree.example_count(), 3);
    let (_, reporter) = run(&tree);
    assert_eq!(reporter.tally().total(), tree.example_count());
}

#[test]
fn group_id_displays_index() {
    assert_eq!(GroupId(3).to_string(), "#3");
}
