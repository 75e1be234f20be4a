//! Decoded JVM instructions
//!
//! Instructions are grouped by [`Category`] rather than by opcode: every variant here is one
//! category, and variants covering more than one opcode carry the [`Opcode`] alongside the
//! operands. This keeps pattern matches short (all the `if<cond>` instructions share one arm) at
//! the cost of allowing nonsense like `Instruction::Stack(Opcode::IAdd)` to be constructed. The
//! checker treats such an instruction as a decoder bug (see
//! [`crate::jvm::VerifierErrorKind::MisclassifiedOpcode`]).
//!
//! The `wide` prefix does not appear: local variable indices are always `u16` and `iinc` always
//! carries an `i16` increment.

use super::{Category, Opcode};
use crate::jvm::verifier::TypeKind;
use crate::jvm::{
    BaseType, BinaryName, FieldType, MethodDescriptor, Name, RefType, RenderDescriptor,
    UnqualifiedName,
};
use std::fmt;

/// JVM bytecode instruction, parametrized over the type of labels used for jump targets
#[derive(Clone, Debug, PartialEq)]
pub enum Instruction<L> {
    /// `iaload`, `laload`, `faload`, `daload`, `aaload`, `baload`, `caload`, `saload`
    ArrayLoad(Opcode),

    /// `iastore`, `lastore`, `fastore`, `dastore`, `aastore`, `bastore`, `castore`, `sastore`
    ArrayStore(Opcode),

    /// Conditional branches, `goto`, and `goto_w`
    Branch(Opcode, L),

    /// Everything pushing a constant: `aconst_null`, `iconst_<i>`, `bipush`, `ldc`, ...
    Constant(Opcode, ConstantValue),

    /// Primitive widening and narrowing (`i2l`, `d2f`, `i2b`, ...)
    Convert(Opcode),

    /// `jsr` or `jsr_w`
    Jsr(Opcode, L),

    /// `ret`, with the local variable holding the return address
    Ret(u16),

    /// `getstatic`, `putstatic`, `getfield`, `putfield`
    Field(Opcode, FieldRef),

    /// `invokevirtual`, `invokespecial`, `invokestatic`, `invokeinterface`
    Invoke(Opcode, MethodRef),

    InvokeDynamic(InvokeDynamicRef),

    /// Load from a local variable (`iload`, `aload_0`, ...)
    Load(Opcode, u16),

    /// Store to a local variable (`istore`, `astore_0`, ...)
    Store(Opcode, u16),

    /// `iinc`
    Increment(u16, i16),

    LookupSwitch {
        default: L,
        cases: Vec<SwitchCase<L>>,
    },

    TableSwitch {
        low: i32,
        high: i32,
        default: L,
        cases: Vec<L>,
    },

    /// `monitorenter` or `monitorexit`
    Monitor(Opcode),

    /// `multianewarray`
    NewMultiArray {
        array_type: RefType,
        dimensions: u8,
    },

    /// `new`
    NewObject(BinaryName),

    /// `newarray`
    NewPrimitiveArray(BaseType),

    /// `anewarray`, with the component type
    NewReferenceArray(RefType),

    Nop,

    /// Arithmetic, bitwise operations, shifts, comparisons, and `arraylength`
    Operator(Opcode),

    /// `ireturn`, `lreturn`, `freturn`, `dreturn`, `areturn`, `return`
    Return(Opcode),

    /// `pop`, `pop2`, `dup`, `dup_x1`, `dup_x2`, `dup2`, `dup2_x1`, `dup2_x2`, `swap`
    Stack(Opcode),

    /// `athrow`
    Throw,

    /// `checkcast` or `instanceof`
    TypeCheck(Opcode, RefType),
}

impl<L> Instruction<L> {
    /// Opcode of the instruction
    ///
    /// For instructions that have a short and a long form (`ldc`/`ldc_w`, `iload`/`iload_0`), this
    /// is whatever opcode the decoder put there.
    pub fn opcode(&self) -> Opcode {
        match self {
            Instruction::ArrayLoad(opcode)
            | Instruction::ArrayStore(opcode)
            | Instruction::Branch(opcode, _)
            | Instruction::Constant(opcode, _)
            | Instruction::Convert(opcode)
            | Instruction::Jsr(opcode, _)
            | Instruction::Field(opcode, _)
            | Instruction::Invoke(opcode, _)
            | Instruction::Load(opcode, _)
            | Instruction::Store(opcode, _)
            | Instruction::Monitor(opcode)
            | Instruction::Operator(opcode)
            | Instruction::Return(opcode)
            | Instruction::Stack(opcode)
            | Instruction::TypeCheck(opcode, _) => *opcode,
            Instruction::Ret(_) => Opcode::Ret,
            Instruction::InvokeDynamic(_) => Opcode::InvokeDynamic,
            Instruction::Increment(_, _) => Opcode::IInc,
            Instruction::LookupSwitch { .. } => Opcode::LookupSwitch,
            Instruction::TableSwitch { .. } => Opcode::TableSwitch,
            Instruction::NewMultiArray { .. } => Opcode::MultiANewArray,
            Instruction::NewObject(_) => Opcode::New,
            Instruction::NewPrimitiveArray(_) => Opcode::NewArray,
            Instruction::NewReferenceArray(_) => Opcode::ANewArray,
            Instruction::Nop => Opcode::Nop,
            Instruction::Throw => Opcode::AThrow,
        }
    }

    /// Category the instruction was decoded as
    ///
    /// This is determined by the variant alone, so it may disagree with `self.opcode().category()`
    /// if the instruction was built with the wrong opcode.
    pub fn category(&self) -> Category {
        match self {
            Instruction::ArrayLoad(_) => Category::ArrayLoad,
            Instruction::ArrayStore(_) => Category::ArrayStore,
            Instruction::Branch(_, _) => Category::Branch,
            Instruction::Constant(_, _) => Category::Constant,
            Instruction::Convert(_) => Category::Convert,
            Instruction::Jsr(_, _) => Category::DiscontinuedJsr,
            Instruction::Ret(_) => Category::DiscontinuedRet,
            Instruction::Field(_, _) => Category::Field,
            Instruction::Invoke(_, _) => Category::Invoke,
            Instruction::InvokeDynamic(_) => Category::InvokeDynamic,
            Instruction::Load(_, _) => Category::Load,
            Instruction::Store(_, _) => Category::Store,
            Instruction::Increment(_, _) => Category::Increment,
            Instruction::LookupSwitch { .. } => Category::LookupSwitch,
            Instruction::TableSwitch { .. } => Category::TableSwitch,
            Instruction::Monitor(_) => Category::Monitor,
            Instruction::NewMultiArray { .. } => Category::NewMultiArray,
            Instruction::NewObject(_) => Category::NewObject,
            Instruction::NewPrimitiveArray(_) => Category::NewPrimitiveArray,
            Instruction::NewReferenceArray(_) => Category::NewReferenceArray,
            Instruction::Nop => Category::Nop,
            Instruction::Operator(_) => Category::Operator,
            Instruction::Return(_) => Category::Return,
            Instruction::Stack(_) => Category::Stack,
            Instruction::Throw => Category::Throw,
            Instruction::TypeCheck(_, _) => Category::TypeCheck,
        }
    }

    /// Build one of the constant instructions that need no operand
    ///
    /// Returns `None` for `bipush`, `sipush`, the `ldc` family, and any non-constant opcode.
    pub fn implicit_constant(opcode: Opcode) -> Option<Instruction<L>> {
        let value = match opcode {
            Opcode::AConstNull => ConstantValue::Null,
            Opcode::IConstM1 => ConstantValue::Int(-1),
            Opcode::IConst0 => ConstantValue::Int(0),
            Opcode::IConst1 => ConstantValue::Int(1),
            Opcode::IConst2 => ConstantValue::Int(2),
            Opcode::IConst3 => ConstantValue::Int(3),
            Opcode::IConst4 => ConstantValue::Int(4),
            Opcode::IConst5 => ConstantValue::Int(5),
            Opcode::LConst0 => ConstantValue::Long(0),
            Opcode::LConst1 => ConstantValue::Long(1),
            Opcode::FConst0 => ConstantValue::Float(0.0),
            Opcode::FConst1 => ConstantValue::Float(1.0),
            Opcode::FConst2 => ConstantValue::Float(2.0),
            Opcode::DConst0 => ConstantValue::Double(0.0),
            Opcode::DConst1 => ConstantValue::Double(1.0),
            _ => return None,
        };
        Some(Instruction::Constant(opcode, value))
    }

    /// Labels this instruction might jump to (not including fallthrough)
    pub fn jump_targets(&self) -> Vec<&L> {
        match self {
            Instruction::Branch(_, target) | Instruction::Jsr(_, target) => vec![target],
            Instruction::LookupSwitch { default, cases } => std::iter::once(default)
                .chain(cases.iter().map(|case| &case.target))
                .collect(),
            Instruction::TableSwitch { default, cases, .. } => {
                std::iter::once(default).chain(cases.iter()).collect()
            }
            _ => vec![],
        }
    }
}

/// Value pushed by a constant instruction
///
/// For `ldc` this is the loadable constant pool entry, for the other constant instructions it is
/// the implicit or immediate value.
#[derive(Clone, Debug, PartialEq)]
pub enum ConstantValue {
    Null,
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    Class(RefType),
    MethodType(MethodDescriptor),
    MethodHandle(String),

    /// Dynamically computed constant, with the type it resolves to
    Dynamic(FieldType),
}

impl ConstantValue {
    /// Kind of the value once it is on the stack
    pub fn kind(&self) -> TypeKind {
        match self {
            ConstantValue::Int(_) => TypeKind::Int,
            ConstantValue::Long(_) => TypeKind::Long,
            ConstantValue::Float(_) => TypeKind::Float,
            ConstantValue::Double(_) => TypeKind::Double,
            ConstantValue::Null
            | ConstantValue::String(_)
            | ConstantValue::Class(_)
            | ConstantValue::MethodType(_)
            | ConstantValue::MethodHandle(_) => TypeKind::Reference,
            ConstantValue::Dynamic(typ) => typ.type_kind(),
        }
    }
}

/// Symbolic reference to a field
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldRef {
    pub owner: BinaryName,
    pub name: UnqualifiedName,
    pub descriptor: FieldType,
}

/// Symbolic reference to a method
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MethodRef {
    pub owner: BinaryName,
    pub name: UnqualifiedName,
    pub descriptor: MethodDescriptor,

    /// Is the owner an interface?
    pub is_interface: bool,
}

/// Symbolic reference to a dynamically computed call site
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct InvokeDynamicRef {
    pub name: UnqualifiedName,
    pub descriptor: MethodDescriptor,

    /// Index into the `BootstrapMethods` attribute
    pub bootstrap_index: u16,
}

/// One (non-default) case in a `lookupswitch`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SwitchCase<L> {
    pub value: i32,
    pub target: L,
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}:{}",
            self.owner.as_str(),
            self.name.as_str(),
            self.descriptor.render()
        )
    }
}

impl fmt::Display for MethodRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}{}",
            self.owner.as_str(),
            self.name.as_str(),
            self.descriptor.render()
        )
    }
}
