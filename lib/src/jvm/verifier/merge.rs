use super::SlotKind;
use crate::jvm::VerifierErrorKind;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Stack shapes at merge points
///
/// The first time control reaches a label (by a jump, by fallthrough, or as an exception handler)
/// the stack shape is recorded. That shape is never updated afterwards: every other way of
/// reaching the label must arrive with exactly the same shape.
#[derive(Debug, Clone)]
pub struct MergeRegistry<L> {
    shapes: HashMap<L, Vec<SlotKind>>,
}

impl<L: Clone + Eq + Hash + Debug> MergeRegistry<L> {
    pub fn new() -> MergeRegistry<L> {
        MergeRegistry {
            shapes: HashMap::new(),
        }
    }

    /// Record the shape at a label, or check it against what was previously recorded
    pub fn record_or_check(
        &mut self,
        label: &L,
        shape: &[SlotKind],
    ) -> Result<(), VerifierErrorKind> {
        match self.shapes.get(label) {
            None => {
                log::trace!("recording stack {:?} at {:?}", shape, label);
                self.shapes.insert(label.clone(), shape.to_vec());
                Ok(())
            }
            Some(recorded) if recorded.as_slice() == shape => Ok(()),
            Some(recorded) => Err(VerifierErrorKind::StackMergeConflict {
                label: format!("{:?}", label),
                recorded: recorded.clone(),
                found: shape.to_vec(),
            }),
        }
    }

    /// Record (or check) the entry to an exception handler
    ///
    /// Whatever was on the stack when the exception was thrown is gone: the handler starts with
    /// only the exception object.
    pub fn record_handler(&mut self, handler: &L) -> Result<(), VerifierErrorKind> {
        log::trace!("exception edge to {:?}", handler);
        self.record_or_check(handler, &[SlotKind::Reference])
    }

    /// Shape previously recorded for a label
    pub fn get(&self, label: &L) -> Option<&[SlotKind]> {
        self.shapes.get(label).map(Vec::as_slice)
    }

    pub fn contains(&self, label: &L) -> bool {
        self.shapes.contains_key(label)
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Number of labels with a recorded shape
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl<L: Clone + Eq + Hash + Debug> Default for MergeRegistry<L> {
    fn default() -> MergeRegistry<L> {
        MergeRegistry::new()
    }
}
