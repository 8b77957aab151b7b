//! Append-only generic list.
//!
//! `ElementList<T>` places no bound on `T`: any type that can be moved in
//! can be stored. Operations that hand out a copy (`last_element`) ask for
//! `T: Clone` at the method, not the type.

use std::fmt::{self, Display};
use std::slice;

use itertools::Itertools;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::config::ListConfig;
use crate::error::{Result, TemplateError};

/// An ordered, append-only sequence of `T`.
///
/// Elements are never removed, reordered or handed out mutably, so the
/// order observed by [`enumerate`](Self::enumerate) is always the order of
/// the calls to [`append`](Self::append).
///
/// The list is its elements and nothing else: equality and serialization
/// see only the sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementList<T> {
    elements: Vec<T>,
}

/// Displays an [`ElementList`] with a chosen separator.
///
/// Built by [`ElementList::display_with`] or [`ListConfig::display`].
pub struct ListDisplay<'a, T> {
    list: &'a ElementList<T>,
    separator: &'a str,
}

impl<T> ElementList<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ElementList {
            elements: Vec::with_capacity(capacity),
        }
    }

    pub fn from_config(config: &ListConfig) -> Self {
        Self::with_capacity(config.initial_capacity)
    }

    /// Adds `element` after every element already in the list.
    pub fn append(&mut self, element: T) {
        self.elements.push(element);
        trace!("appended element #{}", self.elements.len());
    }

    /// Borrows the most recently appended element.
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Iterates the elements in insertion order.
    ///
    /// Calling it again without appending in between yields the same
    /// sequence.
    pub fn enumerate(&self) -> slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Same as [`enumerate`](Self::enumerate), under the std name.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.enumerate()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn display_with<'a>(&'a self, separator: &'a str) -> ListDisplay<'a, T> {
        ListDisplay {
            list: self,
            separator,
        }
    }
}

impl<T: Clone> ElementList<T> {
    /// Returns a copy of the most recently appended element.
    ///
    /// Later appends do not affect a value already returned.
    pub fn last_element(&self) -> Result<T> {
        match self.elements.last() {
            Some(element) => Ok(element.clone()),
            None => {
                debug!("last_element called on an empty list");
                Err(TemplateError::EmptyContainer)
            }
        }
    }
}

impl<T> Default for ElementList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Display> Display for ListDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.list.elements.iter().format(self.separator))
    }
}

// Space-separated, the `ListConfig` default.
impl<T: Display> Display for ElementList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.elements.iter().format(" "))
    }
}

impl<T> FromIterator<T> for ElementList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = ElementList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for ElementList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.append(element);
        }
    }
}

impl<'a, T> IntoIterator for &'a ElementList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T> IntoIterator for ElementList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}
