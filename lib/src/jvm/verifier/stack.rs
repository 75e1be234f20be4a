use super::SlotKind;
use crate::jvm::VerifierErrorKind;
use crate::util::Width;

/// Operand stack, tracked only up to the kind of each entry
///
/// The top of the stack is the _end_ of the underlying vector. Entries are never `Void`: pushing
/// `Void` does nothing, and so does popping it (which is how `void` method returns and
/// parameterless effects fall out without special cases).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbstractStack {
    entries: Vec<SlotKind>,
}

/// Top of the stack as seen by `pop2` and the `dup2` family
///
/// These instructions work on two slots, which is either one `long`/`double` or two
/// single-slot values.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SlotGroup {
    /// One entry of width 2
    Wide(SlotKind),

    /// Two entries of width 1, the first being the one deeper in the stack
    Pair(SlotKind, SlotKind),
}

impl SlotGroup {
    /// Push the group back, preserving the original order
    pub fn push_onto(self, stack: &mut AbstractStack) {
        match self {
            SlotGroup::Wide(kind) => stack.push(kind),
            SlotGroup::Pair(below, top) => {
                stack.push(below);
                stack.push(top);
            }
        }
    }
}

impl AbstractStack {
    pub fn new() -> AbstractStack {
        AbstractStack::default()
    }

    pub fn push(&mut self, kind: impl Into<SlotKind>) {
        let kind = kind.into();
        if !kind.is_void() {
            self.entries.push(kind);
        }
    }

    /// Push kinds in order (so the last one ends up on top)
    pub fn push_all(&mut self, kinds: &[SlotKind]) {
        for kind in kinds {
            self.push(*kind);
        }
    }

    /// Pop the top entry, checking it has the expected kind
    pub fn pop(&mut self, expected: impl Into<SlotKind>) -> Result<(), VerifierErrorKind> {
        let expected = expected.into();
        if expected.is_void() {
            return Ok(());
        }
        let found = self.entries.pop().ok_or(VerifierErrorKind::EmptyStack)?;
        if found == expected {
            Ok(())
        } else {
            Err(VerifierErrorKind::StackTypeMismatch { found, expected })
        }
    }

    /// Pop `count` entries, all of which must have the expected kind
    pub fn pop_n(
        &mut self,
        expected: impl Into<SlotKind>,
        count: usize,
    ) -> Result<(), VerifierErrorKind> {
        let expected = expected.into();
        for _ in 0..count {
            self.pop(expected)?;
        }
        Ok(())
    }

    /// Pop the top entry, which must be a single slot wide
    pub fn pop_one_slot(&mut self) -> Result<SlotKind, VerifierErrorKind> {
        let found = self.entries.pop().ok_or(VerifierErrorKind::EmptyStack)?;
        if found.width() == 1 {
            Ok(found)
        } else {
            Err(VerifierErrorKind::InvalidStackShuffle(found))
        }
    }

    /// Pop two slots worth of entries
    pub fn pop_one_or_two_slots(&mut self) -> Result<SlotGroup, VerifierErrorKind> {
        let top = self.entries.pop().ok_or(VerifierErrorKind::EmptyStack)?;
        if top.width() == 2 {
            Ok(SlotGroup::Wide(top))
        } else {
            let below = self.pop_one_slot()?;
            Ok(SlotGroup::Pair(below, top))
        }
    }

    /// Copy of the current entries, bottom first
    pub fn snapshot(&self) -> Vec<SlotKind> {
        self.entries.clone()
    }

    pub fn as_slice(&self) -> &[SlotKind] {
        &self.entries
    }

    /// Forget the current entries and take on a previously recorded shape
    pub fn replace_with(&mut self, shape: &[SlotKind]) {
        self.entries.clear();
        self.push_all(shape);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries (not slots)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Width for AbstractStack {
    fn width(&self) -> usize {
        self.entries.iter().map(Width::width).sum()
    }
}

impl FromIterator<SlotKind> for AbstractStack {
    fn from_iter<I: IntoIterator<Item = SlotKind>>(iter: I) -> AbstractStack {
        let mut stack = AbstractStack::new();
        for kind in iter {
            stack.push(kind);
        }
        stack
    }
}

impl From<Vec<SlotKind>> for AbstractStack {
    fn from(entries: Vec<SlotKind>) -> AbstractStack {
        entries.into_iter().collect()
    }
}
