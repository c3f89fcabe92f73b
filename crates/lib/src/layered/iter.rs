//! Lazy iteration over the distinct keys of a layered map.

use std::{
    collections::{HashSet, btree_map},
    iter::Rev,
    slice,
};

use super::Layer;
use crate::Value;

/// Iterator over `(key, visible value)` pairs of a [`LayeredMap`](super::LayeredMap).
///
/// Walks layers from the top down. The first layer in that walk to define a key is
/// the one shadowing it, so the value found there is the visible one.
pub struct Iter<'a> {
    layers: Rev<slice::Iter<'a, Layer>>,
    current: Option<btree_map::Iter<'a, String, Value>>,
    seen: HashSet<&'a str>,
}

impl<'a> Iter<'a> {
    pub(super) fn new(layers: &'a [Layer]) -> Self {
        Self {
            layers: layers.iter().rev(),
            current: None,
            seen: HashSet::new(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entries) = self.current.as_mut() {
                for (key, value) in entries.by_ref() {
                    if self.seen.insert(key.as_str()) {
                        return Some((key.as_str(), value));
                    }
                }
            }
            self.current = Some(self.layers.next()?.iter());
        }
    }
}

/// Iterator over the distinct keys of a [`LayeredMap`](super::LayeredMap).
pub struct Keys<'a> {
    inner: Iter<'a>,
}

impl<'a> Keys<'a> {
    pub(super) fn new(inner: Iter<'a>) -> Self {
        Self { inner }
    }
}

impl<'a> Iterator for Keys<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }
}
