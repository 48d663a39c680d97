// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! End-to-end dump scenarios: terminal roots, nested objects, cycles, and
//! the depth limit.

use std::cell::RefCell;
use std::rc::Rc;

use objtree::{dump_to_string, dump_to_string_with, DumpConfig, Inspect};

#[derive(Inspect)]
struct Single {
    pub number: i32,
}

#[derive(Inspect)]
struct Inner {
    pub x: i32,
}

#[derive(Inspect)]
struct Outer {
    pub inner: Inner,
}

#[derive(Inspect)]
struct Node {
    pub child: Option<Rc<RefCell<Node>>>,
}

fn lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

fn full<T>() -> &'static str {
    std::any::type_name::<T>()
}

#[test]
fn test_null_root() {
    assert_eq!(dump_to_string(&None::<i32>), "(null)");
}

#[test]
fn test_terminal_root_matches_formatted_value() {
    let config = DumpConfig::default();
    for value in [&1i32 as &dyn Inspect, &-7i32, &0i32] {
        assert_eq!(
            dump_to_string(value),
            objtree::format_value(value, &config)
        );
    }
    assert_eq!(dump_to_string(&1i32), "1 (i32)");
}

#[test]
fn test_single_member_object() {
    let text = dump_to_string(&Single { number: 1 });
    let name = full::<Single>();

    assert_eq!(
        lines(&text),
        vec![
            format!("{name} ({name})"),
            "{".to_string(),
            "    number = 1 (i32)".to_string(),
            "}".to_string(),
        ]
    );
}

#[test]
fn test_self_reference_is_cut_with_loop_marker() {
    let node = Rc::new(RefCell::new(Node { child: None }));
    node.borrow_mut().child = Some(Rc::clone(&node));

    let text = dump_to_string(&node);
    let name = full::<Node>();

    assert_eq!(
        lines(&text),
        vec![
            format!("{name} ({name})"),
            "{".to_string(),
            format!("    child = {name} ({name})<LoopReference>"),
            "}".to_string(),
        ]
    );

    node.borrow_mut().child = None;
}

#[test]
fn test_two_node_cycle() {
    #[derive(Inspect)]
    struct Linked {
        pub id: i32,
        pub next: Option<Rc<RefCell<Linked>>>,
    }

    let a = Rc::new(RefCell::new(Linked { id: 1, next: None }));
    let b = Rc::new(RefCell::new(Linked {
        id: 2,
        next: Some(Rc::clone(&a)),
    }));
    a.borrow_mut().next = Some(Rc::clone(&b));

    let text = dump_to_string(&a);

    // b expands inside a, but b's back-reference to a is cut.
    assert!(text.contains("id = 1 (i32)"));
    assert!(text.contains("id = 2 (i32)"));
    assert_eq!(text.matches("<LoopReference>").count(), 1);

    a.borrow_mut().next = None;
}

#[test]
fn test_distinct_equal_values_are_not_cycles() {
    // Two separate but value-equal nodes: no loop marker.
    let leaf_a = Rc::new(RefCell::new(Node { child: None }));
    let leaf_b = Rc::new(RefCell::new(Node { child: None }));
    let root: Vec<Rc<RefCell<Node>>> = vec![leaf_a, leaf_b];

    let text = dump_to_string(&root);
    assert!(!text.contains("<LoopReference>"));
}

#[test]
fn test_max_depth_zero_stops_after_root_members() {
    let config = DumpConfig {
        max_depth: 0,
        ..DumpConfig::default()
    };
    let value = Outer {
        inner: Inner { x: 1 },
    };

    let text = dump_to_string_with(&config, &value);
    let outer = full::<Outer>();
    let inner = full::<Inner>();

    assert_eq!(
        lines(&text),
        vec![
            format!("{outer} ({outer})"),
            "{".to_string(),
            format!("    inner = {inner} ({inner})"),
            "    {".to_string(),
            "        <TooDeep>".to_string(),
            "    }".to_string(),
            "}".to_string(),
        ]
    );
}

#[test]
fn test_depth_limit_emits_exactly_one_marker_per_cut() {
    #[derive(Inspect)]
    struct Chain {
        pub tail: Option<Box<Chain>>,
    }

    let chain = Chain {
        tail: Some(Box::new(Chain {
            tail: Some(Box::new(Chain { tail: None })),
        })),
    };

    let config = DumpConfig {
        max_depth: 1,
        ..DumpConfig::default()
    };
    let text = dump_to_string_with(&config, &chain);

    // Depth 0 and 1 expand; depth 2 is cut.
    assert_eq!(text.matches("<TooDeep>").count(), 1);
    assert!(!text.contains("<LoopReference>"));
}

#[test]
fn test_braces_are_balanced_at_matching_indents() {
    let value = Outer {
        inner: Inner { x: 9 },
    };
    let text = dump_to_string(&value);

    let mut stack = Vec::new();
    for line in text.lines() {
        let indent = line.len() - line.trim_start().len();
        match line.trim_start() {
            "{" => stack.push(indent),
            "}" => assert_eq!(stack.pop(), Some(indent)),
            _ => {}
        }
    }
    assert!(stack.is_empty());
}

#[test]
fn test_dump_is_idempotent() {
    let config = DumpConfig {
        short_type_names: true,
        ..DumpConfig::default()
    };
    let value = Outer {
        inner: Inner { x: 3 },
    };

    let first = dump_to_string_with(&config, &value);
    let second = dump_to_string_with(&config, &value);
    assert_eq!(first, second);
}

#[test]
fn test_composite_dump_ends_with_newline() {
    let text = dump_to_string(&vec![1]);
    assert!(text.ends_with('\n'));
    assert!(!dump_to_string(&1i32).ends_with('\n'));
}

#[test]
fn test_member_read_error_is_printed_in_place() {
    use objtree::{Kind, Member, ReadError, Visibility};

    struct Flaky {
        pub good: i32,
    }

    impl objtree::inspect::Inspect for Flaky {
        fn kind(&self) -> Kind {
            Kind::Structured
        }

        fn members(&self, visit: &mut dyn FnMut(Member<'_>)) {
            visit(Member {
                name: "good",
                visibility: Visibility::Public,
                value: Ok(&self.good),
            });
            visit(Member {
                name: "broken",
                visibility: Visibility::Public,
                value: Err(ReadError::new("backing store unavailable")),
            });
            visit(Member {
                name: "after",
                visibility: Visibility::Public,
                value: Ok(&self.good),
            });
        }
    }

    let text = dump_to_string(&Flaky { good: 5 });

    assert!(text.contains("    good = 5 (i32)"));
    assert!(text.contains("    broken = backing store unavailable"));
    // Traversal continues past the failure.
    assert!(text.contains("    after = 5 (i32)"));
}

#[test]
fn test_iterable_element_cycle() {
    #[derive(Inspect)]
    struct Holder {
        pub items: Rc<RefCell<Vec<Holder>>>,
    }

    let items: Rc<RefCell<Vec<Holder>>> = Rc::new(RefCell::new(Vec::new()));
    items.borrow_mut().push(Holder {
        items: Rc::clone(&items),
    });

    let text = dump_to_string(&items);

    // The element's back-reference to the enclosing vector is cut.
    assert_eq!(text.matches("<LoopReference>").count(), 1);
    assert!(text.contains("items ="));

    items.borrow_mut().clear();
}
