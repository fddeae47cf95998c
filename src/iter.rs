// enumkit/src/iter.rs

//! Lazy inclusive traversal over a domain.

use std::iter::FusedIterator;

use crate::domain::Enumerated;

/// Iterator produced by [`Domain::iterator`](crate::Domain::iterator).
///
/// Yields both endpoints inclusively, stepping with the variant's own
/// `next()`/`previous()` so that overridden successor semantics (flag
/// sets double and halve rather than increment) are respected.
#[derive(Clone)]
pub struct DomainIter<V: Enumerated> {
    pending: Option<V>,
    end: i64,
    ascending: bool,
}

impl<V: Enumerated> DomainIter<V> {
    pub(crate) fn new(start: V, end: i64) -> Self {
        let ascending = start.to_int() < end;
        Self {
            pending: Some(start),
            end,
            ascending,
        }
    }
}

impl<V: Enumerated> Iterator for DomainIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        let current = self.pending.take()?;
        if current.to_int() != self.end {
            let step = if self.ascending {
                Enumerated::next(&current)
            } else {
                current.previous()
            };
            // Unreachable for in-domain endpoints; a failed step ends
            // the traversal after yielding the current value.
            self.pending = step.ok();
        }
        Some(current)
    }
}

impl<V: Enumerated> FusedIterator for DomainIter<V> {}
