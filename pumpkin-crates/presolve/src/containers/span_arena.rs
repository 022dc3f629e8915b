//! A pooled buffer from which many short lists are handed out as `(start, len)` handles.
//!
//! Storing thousands of small lists as individual [`Vec`]s costs one allocation each; the
//! [`SpanArena`] instead appends every list to a single buffer. A [`Span`] remembers the
//! generation of the arena it was created in, so that using a handle after the arena was cleared
//! is caught by an assertion instead of silently reading unrelated data.

use crate::pumpkin_assert_moderate;

/// Handle to a contiguous run of elements stored in a [`SpanArena`].
///
/// The default span is empty and valid in every generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Span {
    start: u32,
    len: u32,
    generation: u32,
}

impl Span {
    pub(crate) fn len(&self) -> usize {
        self.len as usize
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the same span restricted to its first `new_len` elements.
    pub(crate) fn truncated(self, new_len: usize) -> Span {
        pumpkin_assert_moderate!(new_len <= self.len());
        if new_len == 0 {
            return Span::default();
        }

        Span {
            len: new_len as u32,
            ..self
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct SpanArena<T> {
    buffer: Vec<T>,
    generation: u32,
}

impl<T> Default for SpanArena<T> {
    fn default() -> Self {
        Self {
            buffer: Vec::new(),
            // Generation zero is reserved for the default (empty) span.
            generation: 1,
        }
    }
}

impl<T: Copy> SpanArena<T> {
    /// Drops all elements; every span handed out before becomes stale.
    pub(crate) fn clear(&mut self) {
        self.buffer.clear();
        self.generation += 1;
    }

    pub(crate) fn len(&self) -> usize {
        self.buffer.len()
    }

    pub(crate) fn push(&mut self, value: T) {
        self.buffer.push(value);
    }

    /// Creates a span over the elements pushed since the buffer had length `start`.
    pub(crate) fn span_from(&self, start: usize) -> Span {
        self.span_at(start, self.buffer.len() - start)
    }

    /// Creates a span over `len` elements that are already stored from position `start`.
    pub(crate) fn span_at(&self, start: usize, len: usize) -> Span {
        pumpkin_assert_moderate!(start + len <= self.buffer.len());
        if len == 0 {
            return Span::default();
        }

        Span {
            start: start as u32,
            len: len as u32,
            generation: self.generation,
        }
    }

    /// Grows the buffer with `additional` copies of `value`, returning the position of the first
    /// new element.
    pub(crate) fn reserve_block(&mut self, additional: usize, value: T) -> usize {
        let start = self.buffer.len();
        self.buffer.resize(start + additional, value);
        start
    }

    pub(crate) fn set(&mut self, position: usize, value: T) {
        self.buffer[position] = value;
    }

    pub(crate) fn get(&self, span: Span) -> &[T] {
        if span.is_empty() {
            return &[];
        }
        pumpkin_assert_moderate!(
            span.generation == self.generation,
            "stale span of generation {} used in arena of generation {}",
            span.generation,
            self.generation
        );

        let start = span.start as usize;
        &self.buffer[start..start + span.len()]
    }

    pub(crate) fn get_mut(&mut self, span: Span) -> &mut [T] {
        if span.is_empty() {
            return &mut [];
        }
        pumpkin_assert_moderate!(
            span.generation == self.generation,
            "stale span of generation {} used in arena of generation {}",
            span.generation,
            self.generation
        );

        let start = span.start as usize;
        &mut self.buffer[start..start + span.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_share_a_single_buffer() {
        let mut arena = SpanArena::default();
        let start = arena.len();
        arena.push(1);
        arena.push(2);
        let first = arena.span_from(start);

        let start = arena.len();
        arena.push(3);
        let second = arena.span_from(start);

        assert_eq!(arena.get(first), &[1, 2]);
        assert_eq!(arena.get(second), &[3]);
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn truncated_span_only_exposes_prefix() {
        let mut arena = SpanArena::default();
        arena.push(4);
        arena.push(5);
        arena.push(6);
        let span = arena.span_from(0);

        assert_eq!(arena.get(span.truncated(2)), &[4, 5]);
        assert!(span.truncated(0).is_empty());
    }

    #[test]
    fn empty_span_is_valid_after_clear() {
        let mut arena: SpanArena<u32> = SpanArena::default();
        let span = Span::default();
        arena.clear();

        assert!(arena.get(span).is_empty());
    }

    #[test]
    #[should_panic]
    fn stale_span_is_detected() {
        let mut arena = SpanArena::default();
        arena.push(7);
        let span = arena.span_from(0);
        arena.clear();
        arena.push(8);

        let _ = arena.get(span);
    }
}
