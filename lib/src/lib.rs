//! Check the operand stack discipline of JVM method bodies
//!
//! The checker is fed already-decoded code elements (instructions, labels, exception handler
//! edges, and metadata) one at a time, in program order. For every instruction it tracks the
//! _kinds_ of values on the operand stack (`int`, `long`, `float`, `double`, or reference) and
//! rejects the method as soon as an instruction pops something of the wrong kind, a stack shuffle
//! splits a `long`/`double`, two paths reach the same label with different stacks, or an
//! instruction is unreachable.
//!
//! ### Example
//!
//! ```
//! use stackcheck::jvm::code::{CodeElement, Instruction, Opcode, SynLabel};
//! use stackcheck::jvm::verifier::{CodeTransform, StackChecker};
//!
//! # fn check() -> Result<(), stackcheck::jvm::Error> {
//! let elements: Vec<CodeElement<SynLabel>> = vec![
//!     CodeElement::Instruction(Instruction::implicit_constant(Opcode::IConst1).unwrap()),
//!     CodeElement::Instruction(Instruction::implicit_constant(Opcode::IConst2).unwrap()),
//!     CodeElement::Instruction(Instruction::Operator(Opcode::IAdd)),
//!     CodeElement::Instruction(Instruction::Return(Opcode::IReturn)),
//! ];
//!
//! let mut checker = StackChecker::new();
//! let kept = checker.transform_method(elements)?;
//! assert_eq!(kept.len(), 4);
//! # Ok(())
//! # }
//! # check().unwrap();
//! ```

pub mod jvm;
pub mod util;
