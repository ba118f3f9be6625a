//! Named annotation layers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::span::CharSpan;

/// An annotation anchored to a single span of the document.
pub trait Spanned {
    fn span(&self) -> CharSpan;
}

/// An ordered list of annotations of one kind.
///
/// Annotations keep the order they were added in, which for every layer
/// built here is document order. An `ambiguous` layer may hold several
/// annotations at the same span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer<T> {
    pub name: String,
    pub ambiguous: bool,
    annotations: Vec<T>,
}

impl<T> Layer<T> {
    pub fn new(name: impl Into<String>, ambiguous: bool) -> Self {
        Self {
            name: name.into(),
            ambiguous,
            annotations: Vec::new(),
        }
    }

    /// Append an annotation, returning its index.
    pub fn push(&mut self, annotation: T) -> usize {
        self.annotations.push(annotation);
        self.annotations.len() - 1
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.annotations.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.annotations
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.annotations
    }
}

impl<T: Spanned> Layer<T> {
    /// First annotation at exactly `span`.
    pub fn get(&self, span: CharSpan) -> Option<&T> {
        self.annotations.iter().find(|a| a.span() == span)
    }

    /// Every annotation at exactly `span`, in layer order.
    pub fn all_at(&self, span: CharSpan) -> impl Iterator<Item = &T> + '_ {
        self.annotations.iter().filter(move |a| a.span() == span)
    }

    /// Index of the first annotation at each span.
    pub fn span_index(&self) -> HashMap<CharSpan, usize> {
        let mut index = HashMap::new();
        for (idx, annotation) in self.annotations.iter().enumerate() {
            index.entry(annotation.span()).or_insert(idx);
        }
        index
    }
}

impl<'a, T> IntoIterator for &'a Layer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.annotations.iter()
    }
}

impl<T> std::ops::Index<usize> for Layer<T> {
    type Output = T;

    fn index(&self, idx: usize) -> &T {
        &self.annotations[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Mark(CharSpan, &'static str);

    impl Spanned for Mark {
        fn span(&self) -> CharSpan {
            self.0
        }
    }

    #[test]
    fn test_lookup_by_span() {
        let mut layer = Layer::new("marks", true);
        layer.push(Mark(CharSpan::new(0, 2), "a"));
        layer.push(Mark(CharSpan::new(3, 5), "b"));
        let idx = layer.push(Mark(CharSpan::new(3, 5), "c"));

        assert_eq!(idx, 2);
        assert_eq!(layer.get(CharSpan::new(3, 5)).map(|m| m.1), Some("b"));
        assert_eq!(layer.all_at(CharSpan::new(3, 5)).count(), 2);
        assert!(layer.get(CharSpan::new(1, 2)).is_none());

        let index = layer.span_index();
        assert_eq!(index[&CharSpan::new(3, 5)], 1);
        assert_eq!(layer[2].1, "c");
    }
}
