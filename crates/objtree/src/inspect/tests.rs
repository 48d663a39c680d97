// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Tests for the std `Inspect` implementations.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::rc::Rc;
use std::sync::{Arc, Mutex, RwLock};

use super::{Inspect, Kind, Member};

fn kind_of(value: &dyn Inspect) -> Kind {
    value.kind()
}

fn member_names(value: &dyn Inspect) -> Vec<String> {
    let mut names = Vec::new();
    value.members(&mut |member: Member<'_>| names.push(member.name.to_string()));
    names
}

fn element_texts(value: &dyn Inspect) -> Vec<String> {
    let mut texts = Vec::new();
    value.elements(&mut |item| texts.push(item.value_text()));
    texts
}

#[test]
fn test_scalar_kinds_and_text() {
    assert_eq!(kind_of(&42u64), Kind::Scalar);
    assert_eq!(42u64.value_text(), "42");
    assert_eq!((-3i8).value_text(), "-3");
    assert_eq!(kind_of(&false), Kind::Scalar);
    assert_eq!(false.value_text(), "false");
    assert_eq!(kind_of(&()), Kind::Scalar);
    assert_eq!(().value_text(), "()");
    assert_eq!(kind_of(&1.5f32), Kind::Scalar);
}

#[test]
fn test_text_and_char() {
    assert_eq!(kind_of(&'a'), Kind::Char);
    assert_eq!(kind_of(&"abc"), Kind::Text);
    assert_eq!("abc".value_text(), "abc");
    let owned = String::from("abc");
    assert_eq!(kind_of(&owned), Kind::Text);
    assert_eq!(owned.value_text(), "abc");
}

#[test]
fn test_option_none_is_null() {
    assert_eq!(kind_of(&None::<i32>), Kind::Null);
    assert_eq!(None::<i32>.value_text(), "(null)");
}

#[test]
fn test_option_some_is_transparent() {
    let value = Some(7i32);
    assert_eq!(kind_of(&value), Kind::Scalar);
    assert_eq!(value.value_text(), "7");
    assert_eq!(value.type_name(), "i32");
}

#[test]
fn test_wrappers_delegate() {
    let boxed: Box<i32> = Box::new(5);
    assert_eq!(kind_of(&boxed), Kind::Scalar);
    assert_eq!(boxed.value_text(), "5");
    assert_eq!(boxed.type_name(), "i32");

    let rc = Rc::new(String::from("x"));
    assert_eq!(kind_of(&rc), Kind::Text);

    let arc = Arc::new(vec![1, 2]);
    assert_eq!(kind_of(&arc), Kind::Iterable);
}

#[test]
fn test_rc_clones_share_identity() {
    let original = Rc::new(41i32);
    let clone = Rc::clone(&original);
    assert_eq!(original.identity(), clone.identity());

    let other = Rc::new(41i32);
    assert_ne!(original.identity(), other.identity());
}

#[test]
fn test_cell_delegates_to_contents() {
    let cell = Cell::new(9i32);
    assert_eq!(kind_of(&cell), Kind::Scalar);
    assert_eq!(cell.value_text(), "9");
    assert_eq!(cell.identity().addr, cell.as_ptr() as usize);
}

#[test]
fn test_refcell_delegates_and_degrades() {
    let cell = RefCell::new(vec![1, 2, 3]);
    assert_eq!(kind_of(&cell), Kind::Iterable);
    assert_eq!(element_texts(&cell), vec!["1", "2", "3"]);

    let guard = cell.borrow_mut();
    assert_eq!(kind_of(&cell), Kind::Scalar);
    assert!(!cell.value_text().is_empty());
    assert!(element_texts(&cell).is_empty());
    drop(guard);

    assert_eq!(kind_of(&cell), Kind::Iterable);
}

#[test]
fn test_mutex_delegates_and_degrades() {
    let lock = Mutex::new(3i32);
    assert_eq!(kind_of(&lock), Kind::Scalar);
    assert_eq!(lock.value_text(), "3");

    let guard = lock.lock().unwrap();
    assert_eq!(kind_of(&lock), Kind::Scalar);
    assert!(lock.value_text().contains("would block"));
    drop(guard);
}

#[test]
fn test_rwlock_delegates() {
    let lock = RwLock::new(String::from("s"));
    assert_eq!(kind_of(&lock), Kind::Text);
    assert_eq!(lock.value_text(), "s");
}

#[test]
fn test_collections_are_iterable() {
    assert_eq!(kind_of(&vec![1, 2]), Kind::Iterable);
    assert_eq!(kind_of(&VecDeque::from(vec![1, 2])), Kind::Iterable);
    assert_eq!(kind_of(&BTreeSet::from([1, 2])), Kind::Iterable);

    let deque = VecDeque::from(vec![4, 5, 6]);
    assert_eq!(element_texts(&deque), vec!["4", "5", "6"]);
}

#[test]
fn test_maps_yield_entries() {
    let mut map = BTreeMap::new();
    map.insert("b".to_string(), 2);
    map.insert("a".to_string(), 1);

    assert_eq!(kind_of(&map), Kind::Iterable);

    let mut entries = Vec::new();
    map.elements(&mut |entry| {
        assert_eq!(entry.kind(), Kind::Structured);
        assert_eq!(entry.type_name(), "MapEntry");
        assert_eq!(member_names(entry), vec!["key", "value"]);
        let mut texts = Vec::new();
        entry.members(&mut |member| {
            texts.push(member.value.as_ref().unwrap().value_text());
        });
        entries.push(texts);
    });

    // BTreeMap iterates in key order.
    assert_eq!(
        entries,
        vec![vec!["a".to_string(), "1".to_string()], vec!["b".to_string(), "2".to_string()]]
    );
}

#[test]
fn test_slices_and_arrays_are_rank_one() {
    let array = [1, 2, 3];
    assert_eq!(kind_of(&array), Kind::Array { rank: 1 });
    assert_eq!(element_texts(&array), vec!["1", "2", "3"]);

    let slice: &[i32] = &array;
    assert_eq!(slice.kind(), Kind::Array { rank: 1 });
    assert!(Inspect::dims(&array).is_empty());
}

#[test]
fn test_tuples_are_structured() {
    let pair = (1i32, "two");
    assert_eq!(kind_of(&pair), Kind::Structured);
    assert_eq!(member_names(&pair), vec!["0", "1"]);

    let triple = (1, 2, 3);
    assert_eq!(member_names(&triple), vec!["0", "1", "2"]);
}

#[test]
fn test_fn_pointers_are_callable() {
    fn double(x: i32) -> i32 {
        x * 2
    }
    let f: fn(i32) -> i32 = double;
    assert_eq!(kind_of(&f), Kind::Callable);
    assert_eq!(f.value_text(), f.type_name());

    fn noop() {}
    let g: fn() = noop;
    assert_eq!(kind_of(&g), Kind::Callable);
}

#[test]
fn test_identity_distinguishes_same_address_types() {
    // An array and its first element share an address; the type half of
    // the token keeps them apart.
    let array = [1i32];
    assert_eq!(array.identity().addr, array[0].identity().addr);
    assert_ne!(array.identity(), array[0].identity());
}
