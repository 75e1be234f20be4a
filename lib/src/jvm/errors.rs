use super::code::{Category, Opcode};
use super::verifier::SlotKind;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Checking the stack effect of a code element failed
    ///
    /// The element is rendered eagerly so the error does not borrow from the method body.
    VerifierError {
        element: String,
        kind: VerifierErrorKind,
    },

    /// A code element was fed to the checker outside of `at_start`/`at_end`
    NotInMethodBody { element: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifierErrorKind {
    /// Tried to pop from an empty operand stack
    EmptyStack,

    /// Top of the stack is not of the kind the instruction consumes
    StackTypeMismatch { found: SlotKind, expected: SlotKind },

    /// A stack shuffle needed a single-slot value but found a `long` or `double`
    InvalidStackShuffle(SlotKind),

    /// A label is reached with two different stacks
    StackMergeConflict {
        label: String,
        recorded: Vec<SlotKind>,
        found: Vec<SlotKind>,
    },

    /// Instruction follows an unconditional transfer and no label makes it reachable
    UnreachableCode,

    /// The instruction category and the opcode disagree (indicates a bug in the decoder)
    MisclassifiedOpcode { category: Category, opcode: Opcode },
}

impl Error {
    /// Why verification failed, if it did
    pub fn verifier_kind(&self) -> Option<&VerifierErrorKind> {
        match self {
            Error::VerifierError { kind, .. } => Some(kind),
            Error::NotInMethodBody { .. } => None,
        }
    }
}

struct Shape<'a>(&'a [SlotKind]);

impl fmt::Display for Shape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, kind) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", kind)?;
        }
        f.write_str("]")
    }
}

impl fmt::Display for VerifierErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifierErrorKind::EmptyStack => f.write_str("operand stack is empty"),
            VerifierErrorKind::StackTypeMismatch { found, expected } => {
                write!(f, "top of stack is {} but expected {}", found, expected)
            }
            VerifierErrorKind::InvalidStackShuffle(found) => write!(
                f,
                "attempting to remove single slot from stack but top of stack is {}",
                found
            ),
            VerifierErrorKind::StackMergeConflict {
                label,
                recorded,
                found,
            } => write!(
                f,
                "mismatched stack for label {}, recorded = {} current = {}",
                label,
                Shape(recorded),
                Shape(found)
            ),
            VerifierErrorKind::UnreachableCode => f.write_str("instruction is unreachable"),
            VerifierErrorKind::MisclassifiedOpcode { category, opcode } => write!(
                f,
                "opcode {:?} does not belong to {:?} instructions",
                opcode, category
            ),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::VerifierError { element, kind } => write!(f, "{} (at {})", kind, element),
            Error::NotInMethodBody { element } => {
                write!(f, "{} is not inside a method body", element)
            }
        }
    }
}

impl std::error::Error for Error {}
