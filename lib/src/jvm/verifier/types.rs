use crate::util::Width;
use std::fmt;

/// Kinds of values as named by descriptors and typed opcodes
///
/// This is finer than what the operand stack can actually distinguish: `byte`, `short`, `char`,
/// and `boolean` values all live on the stack as `int`s. Use [`TypeKind::as_loadable`] to get the
/// kind the stack sees.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum TypeKind {
    Byte,
    Short,
    Char,
    Boolean,
    Int,
    Long,
    Float,
    Double,
    Reference,
    Void,
}

impl TypeKind {
    /// Collapse the kind to the category it has once loaded onto the operand stack
    pub const fn as_loadable(self) -> SlotKind {
        match self {
            TypeKind::Byte
            | TypeKind::Short
            | TypeKind::Char
            | TypeKind::Boolean
            | TypeKind::Int => SlotKind::Int,
            TypeKind::Long => SlotKind::Long,
            TypeKind::Float => SlotKind::Float,
            TypeKind::Double => SlotKind::Double,
            TypeKind::Reference => SlotKind::Reference,
            TypeKind::Void => SlotKind::Void,
        }
    }

    /// Kind named by the first character of a field or return descriptor
    ///
    /// Anything starting with `L` or `[` is a reference. Returns `None` for empty or malformed
    /// descriptors.
    pub fn from_descriptor(descriptor: &str) -> Option<TypeKind> {
        let kind = match descriptor.chars().next()? {
            'B' => TypeKind::Byte,
            'S' => TypeKind::Short,
            'C' => TypeKind::Char,
            'Z' => TypeKind::Boolean,
            'I' => TypeKind::Int,
            'J' => TypeKind::Long,
            'F' => TypeKind::Float,
            'D' => TypeKind::Double,
            'L' | '[' => TypeKind::Reference,
            'V' => TypeKind::Void,
            _ => return None,
        };
        Some(kind)
    }
}

/// Coarse category of a value on the operand stack
///
/// Equality is by category only: all objects, arrays, `null`, and return addresses are just
/// `Reference`. `Void` is never actually on the stack - pushing or popping it is a no-op - but
/// having it here means method return kinds don't need special casing.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum SlotKind {
    Int,
    Long,
    Float,
    Double,
    Reference,
    Void,
}

impl SlotKind {
    pub const fn is_void(self) -> bool {
        matches!(self, SlotKind::Void)
    }
}

impl From<TypeKind> for SlotKind {
    fn from(kind: TypeKind) -> SlotKind {
        kind.as_loadable()
    }
}

impl Width for SlotKind {
    fn width(&self) -> usize {
        match self {
            SlotKind::Long | SlotKind::Double => 2,
            SlotKind::Void => 0,
            SlotKind::Int | SlotKind::Float | SlotKind::Reference => 1,
        }
    }
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SlotKind::Int => "int",
            SlotKind::Long => "long",
            SlotKind::Float => "float",
            SlotKind::Double => "double",
            SlotKind::Reference => "reference",
            SlotKind::Void => "void",
        };
        f.write_str(name)
    }
}
