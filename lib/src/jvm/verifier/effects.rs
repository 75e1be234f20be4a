use super::{AbstractStack, MergeRegistry, SlotKind, TypeKind};
use crate::jvm::code::{Category, Instruction, Opcode};
use crate::jvm::{MethodDescriptor, VerifierErrorKind};
use std::fmt::Debug;
use std::hash::Hash;

/// Apply the stack effect of one instruction
///
/// Operands are popped (and checked) before results are pushed. Every jump target the instruction
/// names is checked against the merge registry using the stack as it is _after_ the operands have
/// been popped. This does not handle what comes after an unconditional branch: that is up to the
/// caller.
pub fn verify_instruction<L: Clone + Eq + Hash + Debug>(
    stack: &mut AbstractStack,
    registry: &mut MergeRegistry<L>,
    insn: &Instruction<L>,
) -> Result<(), VerifierErrorKind> {
    use Instruction::*;

    if cfg!(debug_assertions) {
        let opcode = insn.opcode();
        if opcode.category() != insn.category() {
            return Err(misclassified(insn.category(), opcode));
        }
    }

    match insn {
        ArrayLoad(opcode) => {
            stack.pop(SlotKind::Int)?;
            stack.pop(SlotKind::Reference)?;
            stack.push(opcode.primary_type_kind());
        }

        ArrayStore(opcode) => {
            stack.pop(opcode.primary_type_kind())?;
            stack.pop(SlotKind::Int)?;
            stack.pop(SlotKind::Reference)?;
        }

        Branch(opcode, target) => {
            match opcode {
                Opcode::IfEq
                | Opcode::IfNe
                | Opcode::IfLt
                | Opcode::IfGe
                | Opcode::IfGt
                | Opcode::IfLe => stack.pop(SlotKind::Int)?,
                Opcode::IfICmpEq
                | Opcode::IfICmpNe
                | Opcode::IfICmpLt
                | Opcode::IfICmpGe
                | Opcode::IfICmpGt
                | Opcode::IfICmpLe => stack.pop_n(SlotKind::Int, 2)?,
                Opcode::IfACmpEq | Opcode::IfACmpNe => stack.pop_n(SlotKind::Reference, 2)?,

                // Not trusting `primary_type_kind` for these: a null check is always on a reference
                Opcode::IfNull | Opcode::IfNonNull => stack.pop(SlotKind::Reference)?,
                Opcode::Goto | Opcode::GotoW => (),
                other => return Err(misclassified(Category::Branch, *other)),
            }
            registry.record_or_check(target, stack.as_slice())?;
        }

        Constant(opcode, value) => {
            // `ldc` pushes whatever its pool entry is, every other constant says it in the opcode
            let is_ldc = matches!(opcode, Opcode::Ldc | Opcode::LdcW | Opcode::Ldc2W);
            if cfg!(debug_assertions)
                && !is_ldc
                && value.kind().as_loadable() != opcode.primary_type_kind().as_loadable()
            {
                return Err(misclassified(Category::Constant, *opcode));
            }
            stack.push(value.kind());
        }

        Convert(opcode) => {
            stack.pop(opcode.primary_type_kind())?;
            stack.push(opcode.secondary_type_kind());
        }

        // The return address is only on the stack while jumping into the subroutine
        Jsr(opcode, target) => {
            if !matches!(opcode, Opcode::Jsr | Opcode::JsrW) {
                return Err(misclassified(Category::DiscontinuedJsr, *opcode));
            }
            stack.push(SlotKind::Reference);
            registry.record_or_check(target, stack.as_slice())?;
            stack.pop(SlotKind::Reference)?;
        }

        Ret(_) => (),

        Field(opcode, field) => {
            let kind = field.descriptor.type_kind();
            match opcode {
                Opcode::GetStatic => stack.push(kind),
                Opcode::PutStatic => stack.pop(kind)?,
                Opcode::GetField => {
                    stack.pop(SlotKind::Reference)?;
                    stack.push(kind);
                }
                Opcode::PutField => {
                    stack.pop(kind)?;
                    stack.pop(SlotKind::Reference)?;
                }
                other => return Err(misclassified(Category::Field, *other)),
            }
        }

        Invoke(opcode, method) => {
            let has_receiver = match opcode {
                Opcode::InvokeStatic => false,
                Opcode::InvokeVirtual | Opcode::InvokeSpecial | Opcode::InvokeInterface => true,
                other => return Err(misclassified(Category::Invoke, *other)),
            };
            pop_arguments(stack, &method.descriptor)?;
            if has_receiver {
                stack.pop(SlotKind::Reference)?;
            }
            stack.push(method.descriptor.return_kind());
        }

        InvokeDynamic(call_site) => {
            pop_arguments(stack, &call_site.descriptor)?;
            stack.push(call_site.descriptor.return_kind());
        }

        Load(opcode, _) => stack.push(opcode.primary_type_kind()),
        Store(opcode, _) => stack.pop(opcode.primary_type_kind())?,
        Increment(_, _) => (),

        LookupSwitch { default, cases } => {
            stack.pop(SlotKind::Int)?;
            registry.record_or_check(default, stack.as_slice())?;
            for case in cases {
                registry.record_or_check(&case.target, stack.as_slice())?;
            }
        }

        TableSwitch { default, cases, .. } => {
            stack.pop(SlotKind::Int)?;
            registry.record_or_check(default, stack.as_slice())?;
            for target in cases {
                registry.record_or_check(target, stack.as_slice())?;
            }
        }

        Monitor(opcode) => match opcode {
            Opcode::MonitorEnter | Opcode::MonitorExit => stack.pop(SlotKind::Reference)?,
            other => return Err(misclassified(Category::Monitor, *other)),
        },

        NewMultiArray { dimensions, .. } => {
            stack.pop_n(SlotKind::Int, usize::from(*dimensions))?;
            stack.push(SlotKind::Reference);
        }

        NewObject(_) => stack.push(SlotKind::Reference),

        NewPrimitiveArray(_) | NewReferenceArray(_) => {
            stack.pop(SlotKind::Int)?;
            stack.push(SlotKind::Reference);
        }

        Nop => (),

        Operator(opcode) => verify_operator(stack, *opcode)?,

        Return(opcode) => match opcode {
            Opcode::IReturn
            | Opcode::LReturn
            | Opcode::FReturn
            | Opcode::DReturn
            | Opcode::AReturn
            | Opcode::Return => stack.pop(opcode.primary_type_kind())?,
            other => return Err(misclassified(Category::Return, *other)),
        },

        Stack(opcode) => verify_stack_shuffle(stack, *opcode)?,

        Throw => stack.pop(SlotKind::Reference)?,

        TypeCheck(opcode, _) => {
            stack.pop(SlotKind::Reference)?;
            match opcode {
                Opcode::CheckCast => stack.push(SlotKind::Reference),
                Opcode::InstanceOf => stack.push(SlotKind::Int),
                other => return Err(misclassified(Category::TypeCheck, *other)),
            }
        }
    }

    Ok(())
}

/// Pop the arguments of a call, last argument first
fn pop_arguments(
    stack: &mut AbstractStack,
    descriptor: &MethodDescriptor,
) -> Result<(), VerifierErrorKind> {
    for kind in descriptor.parameter_kinds().rev() {
        stack.pop(kind)?;
    }
    Ok(())
}

fn verify_operator(stack: &mut AbstractStack, opcode: Opcode) -> Result<(), VerifierErrorKind> {
    use Opcode::*;

    let kind: TypeKind = opcode.primary_type_kind();
    match opcode {
        ArrayLength => {
            stack.pop(SlotKind::Reference)?;
            stack.push(SlotKind::Int);
        }

        // Shift distance is always an `int`, even when shifting a `long`
        IShl | LShl | IShr | LShr | IUShr | LUShr => {
            stack.pop(SlotKind::Int)?;
            stack.pop(kind)?;
            stack.push(kind);
        }

        INeg | LNeg | FNeg | DNeg => {
            stack.pop(kind)?;
            stack.push(kind);
        }

        LCmp | FCmpL | FCmpG | DCmpL | DCmpG => {
            stack.pop_n(kind, 2)?;
            stack.push(SlotKind::Int);
        }

        IAdd | LAdd | FAdd | DAdd | ISub | LSub | FSub | DSub | IMul | LMul | FMul | DMul
        | IDiv | LDiv | FDiv | DDiv | IRem | LRem | FRem | DRem | IAnd | LAnd | IOr | LOr
        | IXor | LXor => {
            stack.pop_n(kind, 2)?;
            stack.push(kind);
        }

        other => return Err(misclassified(Category::Operator, other)),
    }
    Ok(())
}

/// Stack shuffles
///
/// These are the only instructions that care about how many slots a value takes up. See the
/// "Forms" in <https://docs.oracle.com/javase/specs/jvms/se17/html/jvms-6.html#jvms-6.5.dup2_x2>
/// for the cases covered by the `2` variants.
fn verify_stack_shuffle(
    stack: &mut AbstractStack,
    opcode: Opcode,
) -> Result<(), VerifierErrorKind> {
    match opcode {
        Opcode::Pop => {
            stack.pop_one_slot()?;
        }

        Opcode::Pop2 => {
            stack.pop_one_or_two_slots()?;
        }

        Opcode::Dup => {
            let top = stack.pop_one_slot()?;
            stack.push(top);
            stack.push(top);
        }

        Opcode::DupX1 => {
            let top = stack.pop_one_slot()?;
            let next = stack.pop_one_slot()?;
            stack.push(top);
            stack.push(next);
            stack.push(top);
        }

        Opcode::DupX2 => {
            let top = stack.pop_one_slot()?;
            let below = stack.pop_one_or_two_slots()?;
            stack.push(top);
            below.push_onto(stack);
            stack.push(top);
        }

        Opcode::Dup2 => {
            let top = stack.pop_one_or_two_slots()?;
            top.push_onto(stack);
            top.push_onto(stack);
        }

        Opcode::Dup2X1 => {
            let top = stack.pop_one_or_two_slots()?;
            let next = stack.pop_one_slot()?;
            top.push_onto(stack);
            stack.push(next);
            top.push_onto(stack);
        }

        Opcode::Dup2X2 => {
            let top = stack.pop_one_or_two_slots()?;
            let below = stack.pop_one_or_two_slots()?;
            top.push_onto(stack);
            below.push_onto(stack);
            top.push_onto(stack);
        }

        Opcode::Swap => {
            let top = stack.pop_one_slot()?;
            let next = stack.pop_one_slot()?;
            stack.push(top);
            stack.push(next);
        }

        other => return Err(misclassified(Category::Stack, other)),
    }
    Ok(())
}

fn misclassified(category: Category, opcode: Opcode) -> VerifierErrorKind {
    VerifierErrorKind::MisclassifiedOpcode { category, opcode }
}
