//! Operand stack verification
//!
//! For any specific instruction inside a method body, the operand stack should have the same
//! structure regardless of which control flow was used to reach that instruction. In other words:
//! although the values on the stack may obviously be different, the kinds and order of the
//! entries cannot. This module checks exactly that, and nothing else (no local variables, no
//! subtyping, no stack map frames).
//!
//! The stack is tracked in terms of [`SlotKind`]s: `int`, `long`, `float`, `double`, or
//! reference. Instructions are checked one at a time and in program order (see
//! [`verify_instruction`]), with three pieces of state:
//!
//!   - the [`AbstractStack`] at the current position
//!   - a [`MergeRegistry`] of the stack shape at every label reached so far, which must agree
//!     with every other way of reaching that label
//!   - a [`DeadCodeTracker`] for the code following unconditional branches, where the stack
//!     shape comes from the next label instead of the previous instruction
//!
//! Since labels can be jumped to before they are defined and code is never revisited, this is a
//! single pass and not a fix-point: every merge point is checked against the _first_ shape that
//! reached it. [`StackChecker`] ties all of this together as a [`CodeTransform`].

mod checker;
mod effects;
mod merge;
mod reachability;
mod stack;
mod types;

pub use checker::*;
pub use effects::*;
pub use merge::*;
pub use reachability::*;
pub use stack::*;
pub use types::*;
