use super::{
    filler_kind, verify_instruction, AbstractStack, DeadCodeTracker, MergeRegistry, SlotKind,
};
use crate::jvm::code::{CodeElement, Instruction, PseudoInstruction};
use crate::jvm::{Error, VerifierErrorKind};
use bitflags::bitflags;
use std::fmt::Debug;
use std::hash::Hash;

bitflags! {
    /// Options for [`StackChecker`]
    pub struct CheckerFlags: u8 {
        /// Accept `aconst_null` and the zero constants in unreachable code, and drop them from
        /// the output. Without this, any instruction in unreachable code is an error.
        const ALLOW_FILLER = 0x01;

        /// Log every element, along with the stack before it, at `debug` level
        const TRACE = 0x02;
    }
}

impl Default for CheckerFlags {
    fn default() -> CheckerFlags {
        CheckerFlags::ALLOW_FILLER
    }
}

/// What to do with an element once it has been checked
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ElementAction {
    Keep,
    Drop,
}

/// Something that consumes a method body one element at a time
///
/// For every method, `at_start` is called first, then `accept` on each element in program order,
/// then `at_end`.
pub trait CodeTransform<L> {
    /// Start a fresh method body
    fn at_start(&mut self);

    /// Process the next element and decide whether it stays in the output
    fn accept(&mut self, element: &CodeElement<L>) -> Result<ElementAction, Error>;

    /// Finish the current method body
    fn at_end(&mut self) -> Result<(), Error>;

    /// Run a whole method body through the transform, returning the elements that are kept
    fn transform_method<I>(&mut self, elements: I) -> Result<Vec<CodeElement<L>>, Error>
    where
        I: IntoIterator<Item = CodeElement<L>>,
        Self: Sized,
    {
        self.at_start();
        let mut kept = vec![];
        for element in elements {
            match self.accept(&element)? {
                ElementAction::Keep => kept.push(element),
                ElementAction::Drop => (),
            }
        }
        self.at_end()?;
        Ok(kept)
    }
}

/// Verification state for a single method body
#[derive(Debug)]
struct CheckerState<L> {
    stack: AbstractStack,
    registry: MergeRegistry<L>,
    tracker: DeadCodeTracker<L>,
}

impl<L: Clone + Eq + Hash + Debug> CheckerState<L> {
    fn new() -> CheckerState<L> {
        CheckerState {
            stack: AbstractStack::new(),
            registry: MergeRegistry::new(),
            tracker: DeadCodeTracker::new(),
        }
    }

    fn accept_instruction(
        &mut self,
        insn: &Instruction<L>,
        flags: CheckerFlags,
    ) -> Result<ElementAction, VerifierErrorKind> {
        if !self.tracker.is_live() {
            if self.tracker.has_pending() {
                self.tracker.resolve(&self.stack, &mut self.registry)?;
            } else {
                match filler_kind(insn) {
                    Some(_) if flags.contains(CheckerFlags::ALLOW_FILLER) => {
                        log::debug!("Dropping filler {:?} from unreachable code", insn);
                        verify_instruction(&mut self.stack, &mut self.registry, insn)?;
                        return Ok(ElementAction::Drop);
                    }
                    _ => return Err(VerifierErrorKind::UnreachableCode),
                }
            }
        }

        verify_instruction(&mut self.stack, &mut self.registry, insn)?;

        // Nothing falls through, so the next instruction starts from whatever its label says
        if insn.opcode().is_unconditional_branch() {
            self.stack.clear();
            self.tracker.enter_unreachable();
        }

        Ok(ElementAction::Keep)
    }

    fn accept_label(&mut self, label: &L) -> Result<(), VerifierErrorKind> {
        if self.tracker.is_live() {
            return self.registry.record_or_check(label, self.stack.as_slice());
        }

        if let Some(shape) = self.registry.get(label) {
            // Filler may spell out only the bottom of the recorded stack, but not contradict it
            if !shape.starts_with(self.stack.as_slice()) {
                return Err(VerifierErrorKind::StackMergeConflict {
                    label: format!("{:?}", label),
                    recorded: shape.to_vec(),
                    found: self.stack.snapshot(),
                });
            }
            if !self.stack.is_empty() {
                log::debug!(
                    "Filler stack {:?} completed to {:?} recorded at {:?}",
                    self.stack.as_slice(),
                    shape,
                    label
                );
            }
            self.stack.replace_with(shape);
            self.tracker.resolve(&self.stack, &mut self.registry)
        } else {
            self.tracker.defer(label.clone());
            Ok(())
        }
    }
}

/// Operand stack checker
///
/// Checks that every instruction finds the kinds of values it needs on the stack, that every
/// label is reached with the same stack shape no matter where control comes from, and that
/// nothing follows an unconditional branch without a label in between. All elements are kept
/// except for filler instructions in unreachable code (see [`CheckerFlags::ALLOW_FILLER`]).
///
/// A checker is reusable across methods, but each method gets entirely fresh state.
#[derive(Debug)]
pub struct StackChecker<L> {
    flags: CheckerFlags,
    state: Option<CheckerState<L>>,
}

impl<L: Clone + Eq + Hash + Debug> StackChecker<L> {
    /// Checker tolerating filler in unreachable code
    pub fn new() -> StackChecker<L> {
        StackChecker::with_flags(CheckerFlags::default())
    }

    /// Checker rejecting every instruction in unreachable code
    pub fn strict() -> StackChecker<L> {
        StackChecker::with_flags(CheckerFlags::empty())
    }

    pub fn with_flags(flags: CheckerFlags) -> StackChecker<L> {
        StackChecker { flags, state: None }
    }

    pub fn flags(&self) -> CheckerFlags {
        self.flags
    }

    /// Stack at the current position (`None` outside a method body)
    pub fn current_stack(&self) -> Option<&[SlotKind]> {
        self.state.as_ref().map(|state| state.stack.as_slice())
    }

    /// Stack shape recorded so far for a label in the current method
    pub fn lookup_shape(&self, label: &L) -> Option<&[SlotKind]> {
        self.state.as_ref()?.registry.get(label)
    }

    /// Can control fall through to the current position?
    pub fn is_reachable(&self) -> bool {
        self.state
            .as_ref()
            .map_or(false, |state| state.tracker.is_live())
    }
}

impl<L: Clone + Eq + Hash + Debug> Default for StackChecker<L> {
    fn default() -> StackChecker<L> {
        StackChecker::new()
    }
}

impl<L: Clone + Eq + Hash + Debug> CodeTransform<L> for StackChecker<L> {
    fn at_start(&mut self) {
        log::debug!("Checking method body with {:?}", self.flags);
        self.state = Some(CheckerState::new());
    }

    fn accept(&mut self, element: &CodeElement<L>) -> Result<ElementAction, Error> {
        let flags = self.flags;
        let state = match self.state.as_mut() {
            Some(state) => state,
            None => {
                return Err(Error::NotInMethodBody {
                    element: element.to_string(),
                })
            }
        };

        if flags.contains(CheckerFlags::TRACE) {
            log::debug!("{:?} {}", state.stack.as_slice(), element);
        } else {
            log::trace!("{:?} {}", state.stack.as_slice(), element);
        }

        let result = match element {
            CodeElement::Instruction(insn) => state.accept_instruction(insn, flags),
            CodeElement::Pseudo(PseudoInstruction::Label(label)) => {
                state.accept_label(label).map(|()| ElementAction::Keep)
            }
            CodeElement::Pseudo(PseudoInstruction::ExceptionCatch { handler, .. }) => state
                .registry
                .record_handler(handler)
                .map(|()| ElementAction::Keep),
            CodeElement::Pseudo(_) | CodeElement::Attribute(_) => Ok(ElementAction::Keep),
        };

        result.map_err(|kind| Error::VerifierError {
            element: element.to_string(),
            kind,
        })
    }

    fn at_end(&mut self) -> Result<(), Error> {
        let state = self.state.take().ok_or_else(|| Error::NotInMethodBody {
            element: String::from("end of method"),
        })?;
        if state.tracker.has_pending() {
            log::warn!(
                "Method ended with labels never reached: {:?}",
                state.tracker.pending()
            );
        }
        log::debug!(
            "Finished method body ({} merge points)",
            state.registry.len()
        );
        Ok(())
    }
}
