//! JVM method bodies and their operand stacks
//!
//! ### Simple example
//!
//! Consider the following (deliberately convoluted) Java method:
//!
//! ```java,ignore,no_run
//! static Object pick(boolean flag) {
//!     return flag ? "yes" : null;
//! }
//! ```
//!
//! Checking the operand stack of its body, with the two branches of the conditional meeting at a
//! common label, can be done as follows:
//!
//! ```
//! use stackcheck::jvm::code::*;
//! use stackcheck::jvm::verifier::{CodeTransform, SlotKind, StackChecker};
//! use stackcheck::jvm::*;
//!
//! # fn check_pick() -> Result<(), Error> {
//! let mut labels = SynLabelGenerator::default();
//! let (otherwise, join) = (labels.fresh_label(), labels.fresh_label());
//!
//! let body: Vec<CodeElement<SynLabel>> = vec![
//!     Instruction::Load(Opcode::ILoad0, 0).into(),
//!     Instruction::Branch(Opcode::IfEq, otherwise).into(),
//!     Instruction::Constant(Opcode::Ldc, ConstantValue::String(String::from("yes"))).into(),
//!     Instruction::Branch(Opcode::Goto, join).into(),
//!     PseudoInstruction::Label(otherwise).into(),
//!     Instruction::Constant(Opcode::AConstNull, ConstantValue::Null).into(),
//!     PseudoInstruction::Label(join).into(),
//!     Instruction::Return(Opcode::AReturn).into(),
//! ];
//!
//! let mut checker = StackChecker::new();
//! checker.at_start();
//! for element in &body {
//!     checker.accept(element)?;
//! }
//! assert_eq!(checker.lookup_shape(&join), Some(&[SlotKind::Reference][..]));
//! checker.at_end()?;
//! # Ok(())
//! # }
//! # check_pick().unwrap();
//! ```

pub mod code;
mod descriptors;
mod errors;
mod names;
pub mod verifier;

pub use descriptors::*;
pub use errors::*;
pub use names::*;
