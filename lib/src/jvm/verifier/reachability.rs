use super::{AbstractStack, MergeRegistry, SlotKind};
use crate::jvm::code::{Instruction, Opcode};
use crate::jvm::VerifierErrorKind;
use std::fmt::Debug;
use std::hash::Hash;

/// Whether the previous instruction can fall through to the current position
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Reachability {
    Live,

    /// Just passed a `goto`, `athrow`, return, switch, or `ret`
    AfterUnconditional,
}

/// Tracks code following unconditional control transfers
///
/// After an unconditional transfer, nothing falls through into the next instruction, so the only
/// way it can be reached is through a label. Labels that show up in that position without a
/// recorded shape are _pending_: they are only reachable by jumps that haven't been seen yet, but
/// since they all name the same position they must share the same shape. The first time that
/// shape is known (because the next instruction is reached), all of them get it.
#[derive(Debug, Clone)]
pub struct DeadCodeTracker<L> {
    state: Reachability,
    pending: Vec<L>,
}

impl<L: Clone + Eq + Hash + Debug> DeadCodeTracker<L> {
    pub fn new() -> DeadCodeTracker<L> {
        DeadCodeTracker {
            state: Reachability::Live,
            pending: vec![],
        }
    }

    pub fn state(&self) -> Reachability {
        self.state
    }

    pub fn is_live(&self) -> bool {
        self.state == Reachability::Live
    }

    /// Transition into dead code
    pub fn enter_unreachable(&mut self) {
        self.state = Reachability::AfterUnconditional;
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Labels still waiting for a shape
    pub fn pending(&self) -> &[L] {
        &self.pending
    }

    /// Defer the shape of a label to whatever the stack is when code becomes reachable again
    pub fn defer(&mut self, label: L) {
        if !self.pending.contains(&label) {
            log::trace!("deferring shape of {:?}", label);
            self.pending.push(label);
        }
    }

    /// Give every pending label the current shape and go back to live code
    pub fn resolve(
        &mut self,
        stack: &AbstractStack,
        registry: &mut MergeRegistry<L>,
    ) -> Result<(), VerifierErrorKind> {
        for label in self.pending.drain(..) {
            registry.record_or_check(&label, stack.as_slice())?;
        }
        self.state = Reachability::Live;
        Ok(())
    }
}

impl<L: Clone + Eq + Hash + Debug> Default for DeadCodeTracker<L> {
    fn default() -> DeadCodeTracker<L> {
        DeadCodeTracker::new()
    }
}

/// Kind pushed by instructions that may be used as filler in dead code
///
/// Filler only exists to build up the stack shape a later label needs, so only the constant
/// pushes with no operands qualify: `aconst_null` and the zero of each numeric kind.
pub fn filler_kind<L>(instruction: &Instruction<L>) -> Option<SlotKind> {
    match instruction {
        Instruction::Constant(opcode, _) => match opcode {
            Opcode::IConst0 => Some(SlotKind::Int),
            Opcode::LConst0 => Some(SlotKind::Long),
            Opcode::FConst0 => Some(SlotKind::Float),
            Opcode::DConst0 => Some(SlotKind::Double),
            Opcode::AConstNull => Some(SlotKind::Reference),
            _ => None,
        },
        _ => None,
    }
}
