//! Decoded method bodies
//!
//! ### Structure
//!
//! A method body reaches us as an ordered sequence of [`CodeElement`]s. Most of these are
//! [`Instruction`]s, one per entry in the [list of bytecode instructions][0], except that they are
//! grouped by [`Category`] (eg. all of `iconst_0`, `bipush`, and `ldc` are
//! [`Instruction::Constant`]). The rest are [`PseudoInstruction`]s, which mark positions in the
//! code (labels, exception ranges, debug information) without executing anything, and
//! [`CodeAttribute`]s.
//!
//! ### Labels
//!
//! Jump targets are labels rather than offsets. Everything is generic over the label type; when
//! there isn't already a natural choice, [`SynLabel`] with a [`SynLabelGenerator`] does the job.
//!
//! [0]: https://docs.oracle.com/javase/specs/jvms/se17/html/jvms-6.html#jvms-6.5

mod element;
mod instructions;
mod label;
mod opcode;

pub use element::*;
pub use instructions::*;
pub use label::*;
pub use opcode::*;
