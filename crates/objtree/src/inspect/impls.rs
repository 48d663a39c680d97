// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! `Inspect` implementations for std types.
//!
//! Covers the types a debugging dump meets in practice. Delegating wrappers
//! (`&T`, `Box`, `Rc`, `Arc`, cells, locks) forward everything including
//! identity to the wrapped value, so a graph reached through smart pointers
//! dumps and cycle-checks as if it were reached directly.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::{Arc, Mutex, RwLock, TryLockError};

use super::{Inspect, Kind, Member, ObjectId, Visibility};

// ============================================================================
// Scalars
// ============================================================================

macro_rules! impl_scalar {
    ($($ty:ty),+ $(,)?) => { $(
        impl Inspect for $ty {
            fn kind(&self) -> Kind {
                Kind::Scalar
            }

            fn value_text(&self) -> String {
                self.to_string()
            }
        }
    )+ };
}

impl_scalar!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool
);

impl Inspect for () {
    fn kind(&self) -> Kind {
        Kind::Scalar
    }

    fn value_text(&self) -> String {
        "()".to_string()
    }
}

impl Inspect for char {
    fn kind(&self) -> Kind {
        Kind::Char
    }

    fn value_text(&self) -> String {
        self.to_string()
    }
}

// ============================================================================
// Text
// ============================================================================

impl Inspect for str {
    fn kind(&self) -> Kind {
        Kind::Text
    }

    fn value_text(&self) -> String {
        self.to_string()
    }
}

impl Inspect for String {
    fn kind(&self) -> Kind {
        Kind::Text
    }

    fn value_text(&self) -> String {
        self.clone()
    }
}

// ============================================================================
// Option
// ============================================================================

/// `None` is the null reference; `Some` is transparent and delegates
/// everything, identity included, to the inner value.
impl<T: Inspect> Inspect for Option<T> {
    fn kind(&self) -> Kind {
        match self {
            None => Kind::Null,
            Some(inner) => inner.kind(),
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            None => std::any::type_name::<Self>(),
            Some(inner) => inner.type_name(),
        }
    }

    fn value_text(&self) -> String {
        match self {
            None => "(null)".to_string(),
            Some(inner) => inner.value_text(),
        }
    }

    fn display_override(&self) -> Option<String> {
        self.as_ref().and_then(Inspect::display_override)
    }

    fn identity(&self) -> ObjectId {
        match self {
            None => ObjectId {
                addr: (self as *const Self) as usize,
                type_name: self.type_name(),
            },
            Some(inner) => inner.identity(),
        }
    }

    fn members(&self, visit: &mut dyn FnMut(Member<'_>)) {
        if let Some(inner) = self {
            inner.members(visit);
        }
    }

    fn elements(&self, visit: &mut dyn FnMut(&dyn Inspect)) {
        if let Some(inner) = self {
            inner.elements(visit);
        }
    }

    fn dims(&self) -> Vec<usize> {
        self.as_ref().map_or_else(Vec::new, Inspect::dims)
    }

    fn element_at(&self, index: &[usize], visit: &mut dyn FnMut(&dyn Inspect)) {
        if let Some(inner) = self {
            inner.element_at(index, visit);
        }
    }
}

// ============================================================================
// Delegating wrappers
// ============================================================================

macro_rules! impl_delegate {
    ($($wrapper:ty),+ $(,)?) => { $(
        impl<T: Inspect + ?Sized> Inspect for $wrapper {
            fn kind(&self) -> Kind {
                (**self).kind()
            }

            fn type_name(&self) -> &'static str {
                (**self).type_name()
            }

            fn value_text(&self) -> String {
                (**self).value_text()
            }

            fn display_override(&self) -> Option<String> {
                (**self).display_override()
            }

            fn identity(&self) -> ObjectId {
                (**self).identity()
            }

            fn members(&self, visit: &mut dyn FnMut(Member<'_>)) {
                (**self).members(visit);
            }

            fn elements(&self, visit: &mut dyn FnMut(&dyn Inspect)) {
                (**self).elements(visit);
            }

            fn dims(&self) -> Vec<usize> {
                (**self).dims()
            }

            fn element_at(&self, index: &[usize], visit: &mut dyn FnMut(&dyn Inspect)) {
                (**self).element_at(index, visit);
            }
        }
    )+ };
}

impl_delegate!(&'_ T, &'_ mut T, Box<T>, Rc<T>, Arc<T>);

/// Delegates to a copy of the contents; identity is the cell's slot.
impl<T: Inspect + Copy> Inspect for Cell<T> {
    fn kind(&self) -> Kind {
        self.get().kind()
    }

    fn type_name(&self) -> &'static str {
        self.get().type_name()
    }

    fn value_text(&self) -> String {
        self.get().value_text()
    }

    fn display_override(&self) -> Option<String> {
        self.get().display_override()
    }

    fn identity(&self) -> ObjectId {
        ObjectId {
            addr: self.as_ptr() as usize,
            type_name: self.type_name(),
        }
    }

    fn members(&self, visit: &mut dyn FnMut(Member<'_>)) {
        self.get().members(visit);
    }

    fn elements(&self, visit: &mut dyn FnMut(&dyn Inspect)) {
        self.get().elements(visit);
    }

    fn dims(&self) -> Vec<usize> {
        self.get().dims()
    }

    fn element_at(&self, index: &[usize], visit: &mut dyn FnMut(&dyn Inspect)) {
        self.get().element_at(index, visit);
    }
}

/// Delegates through a shared borrow. A mutably borrowed cell degrades to a
/// scalar whose text is the borrow error message, so a dump started from
/// inside a `borrow_mut` still completes.
impl<T: Inspect> Inspect for RefCell<T> {
    fn kind(&self) -> Kind {
        match self.try_borrow() {
            Ok(inner) => inner.kind(),
            Err(_) => Kind::Scalar,
        }
    }

    fn type_name(&self) -> &'static str {
        match self.try_borrow() {
            Ok(inner) => inner.type_name(),
            Err(_) => std::any::type_name::<Self>(),
        }
    }

    fn value_text(&self) -> String {
        match self.try_borrow() {
            Ok(inner) => inner.value_text(),
            Err(err) => err.to_string(),
        }
    }

    fn display_override(&self) -> Option<String> {
        match self.try_borrow() {
            Ok(inner) => inner.display_override(),
            Err(_) => None,
        }
    }

    fn identity(&self) -> ObjectId {
        ObjectId {
            addr: self.as_ptr() as usize,
            type_name: self.type_name(),
        }
    }

    fn members(&self, visit: &mut dyn FnMut(Member<'_>)) {
        if let Ok(inner) = self.try_borrow() {
            inner.members(visit);
        }
    }

    fn elements(&self, visit: &mut dyn FnMut(&dyn Inspect)) {
        if let Ok(inner) = self.try_borrow() {
            inner.elements(visit);
        }
    }

    fn dims(&self) -> Vec<usize> {
        match self.try_borrow() {
            Ok(inner) => inner.dims(),
            Err(_) => Vec::new(),
        }
    }

    fn element_at(&self, index: &[usize], visit: &mut dyn FnMut(&dyn Inspect)) {
        if let Ok(inner) = self.try_borrow() {
            inner.element_at(index, visit);
        }
    }
}

/// Delegates through `try_lock`; a poisoned lock still dumps its contents,
/// a held lock degrades to a scalar carrying the would-block message.
impl<T: Inspect> Inspect for Mutex<T> {
    fn kind(&self) -> Kind {
        match self.try_lock() {
            Ok(inner) => inner.kind(),
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().kind(),
            Err(TryLockError::WouldBlock) => Kind::Scalar,
        }
    }

    fn type_name(&self) -> &'static str {
        match self.try_lock() {
            Ok(inner) => inner.type_name(),
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().type_name(),
            Err(TryLockError::WouldBlock) => std::any::type_name::<Self>(),
        }
    }

    fn value_text(&self) -> String {
        match self.try_lock() {
            Ok(inner) => inner.value_text(),
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().value_text(),
            Err(err @ TryLockError::WouldBlock) => err.to_string(),
        }
    }

    fn display_override(&self) -> Option<String> {
        match self.try_lock() {
            Ok(inner) => inner.display_override(),
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().display_override(),
            Err(TryLockError::WouldBlock) => None,
        }
    }

    fn identity(&self) -> ObjectId {
        ObjectId {
            addr: (self as *const Self) as usize,
            type_name: self.type_name(),
        }
    }

    fn members(&self, visit: &mut dyn FnMut(Member<'_>)) {
        match self.try_lock() {
            Ok(inner) => inner.members(visit),
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().members(visit),
            Err(TryLockError::WouldBlock) => {}
        }
    }

    fn elements(&self, visit: &mut dyn FnMut(&dyn Inspect)) {
        match self.try_lock() {
            Ok(inner) => inner.elements(visit),
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().elements(visit),
            Err(TryLockError::WouldBlock) => {}
        }
    }

    fn dims(&self) -> Vec<usize> {
        match self.try_lock() {
            Ok(inner) => inner.dims(),
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().dims(),
            Err(TryLockError::WouldBlock) => Vec::new(),
        }
    }

    fn element_at(&self, index: &[usize], visit: &mut dyn FnMut(&dyn Inspect)) {
        match self.try_lock() {
            Ok(inner) => inner.element_at(index, visit),
            Err(TryLockError::Poisoned(poisoned)) => {
                poisoned.into_inner().element_at(index, visit);
            }
            Err(TryLockError::WouldBlock) => {}
        }
    }
}

/// Same policy as `Mutex`, through `try_read`.
impl<T: Inspect> Inspect for RwLock<T> {
    fn kind(&self) -> Kind {
        match self.try_read() {
            Ok(inner) => inner.kind(),
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().kind(),
            Err(TryLockError::WouldBlock) => Kind::Scalar,
        }
    }

    fn type_name(&self) -> &'static str {
        match self.try_read() {
            Ok(inner) => inner.type_name(),
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().type_name(),
            Err(TryLockError::WouldBlock) => std::any::type_name::<Self>(),
        }
    }

    fn value_text(&self) -> String {
        match self.try_read() {
            Ok(inner) => inner.value_text(),
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().value_text(),
            Err(err @ TryLockError::WouldBlock) => err.to_string(),
        }
    }

    fn display_override(&self) -> Option<String> {
        match self.try_read() {
            Ok(inner) => inner.display_override(),
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().display_override(),
            Err(TryLockError::WouldBlock) => None,
        }
    }

    fn identity(&self) -> ObjectId {
        ObjectId {
            addr: (self as *const Self) as usize,
            type_name: self.type_name(),
        }
    }

    fn members(&self, visit: &mut dyn FnMut(Member<'_>)) {
        match self.try_read() {
            Ok(inner) => inner.members(visit),
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().members(visit),
            Err(TryLockError::WouldBlock) => {}
        }
    }

    fn elements(&self, visit: &mut dyn FnMut(&dyn Inspect)) {
        match self.try_read() {
            Ok(inner) => inner.elements(visit),
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().elements(visit),
            Err(TryLockError::WouldBlock) => {}
        }
    }

    fn dims(&self) -> Vec<usize> {
        match self.try_read() {
            Ok(inner) => inner.dims(),
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().dims(),
            Err(TryLockError::WouldBlock) => Vec::new(),
        }
    }

    fn element_at(&self, index: &[usize], visit: &mut dyn FnMut(&dyn Inspect)) {
        match self.try_read() {
            Ok(inner) => inner.element_at(index, visit),
            Err(TryLockError::Poisoned(poisoned)) => {
                poisoned.into_inner().element_at(index, visit);
            }
            Err(TryLockError::WouldBlock) => {}
        }
    }
}

// ============================================================================
// Collections
// ============================================================================

macro_rules! impl_iterable {
    ($($ty:ty),+ $(,)?) => { $(
        impl<T: Inspect> Inspect for $ty {
            fn kind(&self) -> Kind {
                Kind::Iterable
            }

            fn elements(&self, visit: &mut dyn FnMut(&dyn Inspect)) {
                for item in self {
                    visit(item);
                }
            }
        }
    )+ };
}

impl_iterable!(Vec<T>, VecDeque<T>, HashSet<T>, BTreeSet<T>);

/// One key/value pair of a map-like value, presented as a structured value
/// with members `key` and `value`. Public so custom map-like `Inspect`
/// impls can reuse it.
pub struct MapEntry<'a> {
    pub key: &'a dyn Inspect,
    pub value: &'a dyn Inspect,
}

impl Inspect for MapEntry<'_> {
    fn kind(&self) -> Kind {
        Kind::Structured
    }

    fn type_name(&self) -> &'static str {
        "MapEntry"
    }

    fn members(&self, visit: &mut dyn FnMut(Member<'_>)) {
        visit(Member {
            name: "key",
            visibility: Visibility::Public,
            value: Ok(self.key),
        });
        visit(Member {
            name: "value",
            visibility: Visibility::Public,
            value: Ok(self.value),
        });
    }
}

// Maps dump as iterables of MapEntry pairs, in iteration order. HashMap
// order is stable for an unmutated map within one process, which is enough
// for dump idempotence; use BTreeMap where cross-run determinism matters.
macro_rules! impl_map {
    ($($ty:ty),+ $(,)?) => { $(
        impl<K: Inspect, V: Inspect> Inspect for $ty {
            fn kind(&self) -> Kind {
                Kind::Iterable
            }

            fn elements(&self, visit: &mut dyn FnMut(&dyn Inspect)) {
                for (key, value) in self {
                    let entry = MapEntry { key, value };
                    visit(&entry);
                }
            }
        }
    )+ };
}

impl_map!(HashMap<K, V>, BTreeMap<K, V>);

// ============================================================================
// Arrays and slices
// ============================================================================

impl<T: Inspect> Inspect for [T] {
    fn kind(&self) -> Kind {
        Kind::Array { rank: 1 }
    }

    fn elements(&self, visit: &mut dyn FnMut(&dyn Inspect)) {
        for item in self {
            visit(item);
        }
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn kind(&self) -> Kind {
        Kind::Array { rank: 1 }
    }

    fn elements(&self, visit: &mut dyn FnMut(&dyn Inspect)) {
        for item in self {
            visit(item);
        }
    }
}

// ============================================================================
// Tuples
// ============================================================================

macro_rules! impl_tuple {
    ($( ( $( $idx:tt $name:literal $ty:ident ),+ ) )+) => { $(
        impl<$($ty: Inspect),+> Inspect for ($($ty,)+) {
            fn kind(&self) -> Kind {
                Kind::Structured
            }

            fn members(&self, visit: &mut dyn FnMut(Member<'_>)) {
                $(
                    visit(Member {
                        name: $name,
                        visibility: Visibility::Public,
                        value: Ok(&self.$idx),
                    });
                )+
            }
        }
    )+ };
}

impl_tuple! {
    (0 "0" A)
    (0 "0" A, 1 "1" B)
    (0 "0" A, 1 "1" B, 2 "2" C)
    (0 "0" A, 1 "1" B, 2 "2" C, 3 "3" D)
    (0 "0" A, 1 "1" B, 2 "2" C, 3 "3" D, 4 "4" E)
    (0 "0" A, 1 "1" B, 2 "2" C, 3 "3" D, 4 "4" E, 5 "5" F)
    (0 "0" A, 1 "1" B, 2 "2" C, 3 "3" D, 4 "4" E, 5 "5" F, 6 "6" G)
    (0 "0" A, 1 "1" B, 2 "2" C, 3 "3" D, 4 "4" E, 5 "5" F, 6 "6" G, 7 "7" H)
}

// ============================================================================
// Fn pointers
// ============================================================================

macro_rules! impl_fn_pointer {
    ($( ( $( $arg:ident ),* ) )+) => { $(
        impl<Ret, $($arg),*> Inspect for fn($($arg),*) -> Ret {
            fn kind(&self) -> Kind {
                Kind::Callable
            }
        }
    )+ };
}

impl_fn_pointer! {
    ()
    (A)
    (A, B)
    (A, B, C)
    (A, B, C, D)
    (A, B, C, D, E)
    (A, B, C, D, E, F)
}
