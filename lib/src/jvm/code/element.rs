use super::Instruction;
use crate::jvm::BinaryName;
use std::fmt;

/// One item in the decoded body of a method
///
/// Method bodies arrive as a flat sequence of these, in program order: real instructions
/// interleaved with the pseudo-instructions that mark labels and exception ranges, plus the
/// occasional attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum CodeElement<L> {
    Instruction(Instruction<L>),
    Pseudo(PseudoInstruction<L>),
    Attribute(CodeAttribute),
}

/// Pseudo-instructions have no bytecode of their own
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PseudoInstruction<L> {
    /// Position of a label (binds the label to the next instruction)
    Label(L),

    /// Entry in the exception table: exceptions of `catch_type` thrown between `try_start` and
    /// `try_end` are caught at `handler` (`None` catches everything)
    ExceptionCatch {
        handler: L,
        try_start: L,
        try_end: L,
        catch_type: Option<BinaryName>,
    },

    LineNumber(u16),

    LocalVariable {
        slot: u16,
        name: String,
        descriptor: String,
        start: L,
        end: L,
    },

    LocalVariableType {
        slot: u16,
        name: String,
        signature: String,
        start: L,
        end: L,
    },

    CharacterRange {
        start: L,
        end: L,
    },
}

/// Attributes of the `Code` attribute
///
/// These are only ever passed through, so their contents are not modelled.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CodeAttribute {
    StackMapTable,
    RuntimeVisibleTypeAnnotations,
    RuntimeInvisibleTypeAnnotations,
    Custom(String),
}

impl<L> From<Instruction<L>> for CodeElement<L> {
    fn from(instruction: Instruction<L>) -> CodeElement<L> {
        CodeElement::Instruction(instruction)
    }
}

impl<L> From<PseudoInstruction<L>> for CodeElement<L> {
    fn from(pseudo: PseudoInstruction<L>) -> CodeElement<L> {
        CodeElement::Pseudo(pseudo)
    }
}

impl<L> From<CodeAttribute> for CodeElement<L> {
    fn from(attribute: CodeAttribute) -> CodeElement<L> {
        CodeElement::Attribute(attribute)
    }
}

impl<L: fmt::Debug> fmt::Display for CodeElement<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeElement::Instruction(instruction) => write!(f, "{:?}", instruction),
            CodeElement::Pseudo(PseudoInstruction::Label(label)) => write!(f, "{:?}:", label),
            CodeElement::Pseudo(pseudo) => write!(f, "{:?}", pseudo),
            CodeElement::Attribute(attribute) => write!(f, "{:?}", attribute),
        }
    }
}
