use crate::jvm::verifier::TypeKind;

/// Raw JVM opcodes
///
/// This covers everything in the [instruction set][0] except the `wide` prefix, which only ever
/// modifies the instruction after it and so never reaches the checker on its own. The variant
/// discriminants are the opcode bytes.
///
/// [0]: https://docs.oracle.com/javase/specs/jvms/se17/html/jvms-6.html#jvms-6.5
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
#[repr(u8)]
pub enum Opcode {
    Nop = 0x00,
    AConstNull = 0x01,
    IConstM1 = 0x02,
    IConst0 = 0x03,
    IConst1 = 0x04,
    IConst2 = 0x05,
    IConst3 = 0x06,
    IConst4 = 0x07,
    IConst5 = 0x08,
    LConst0 = 0x09,
    LConst1 = 0x0a,
    FConst0 = 0x0b,
    FConst1 = 0x0c,
    FConst2 = 0x0d,
    DConst0 = 0x0e,
    DConst1 = 0x0f,
    BiPush = 0x10,
    SiPush = 0x11,
    Ldc = 0x12,
    LdcW = 0x13,
    Ldc2W = 0x14,
    ILoad = 0x15,
    LLoad = 0x16,
    FLoad = 0x17,
    DLoad = 0x18,
    ALoad = 0x19,
    ILoad0 = 0x1a,
    ILoad1 = 0x1b,
    ILoad2 = 0x1c,
    ILoad3 = 0x1d,
    LLoad0 = 0x1e,
    LLoad1 = 0x1f,
    LLoad2 = 0x20,
    LLoad3 = 0x21,
    FLoad0 = 0x22,
    FLoad1 = 0x23,
    FLoad2 = 0x24,
    FLoad3 = 0x25,
    DLoad0 = 0x26,
    DLoad1 = 0x27,
    DLoad2 = 0x28,
    DLoad3 = 0x29,
    ALoad0 = 0x2a,
    ALoad1 = 0x2b,
    ALoad2 = 0x2c,
    ALoad3 = 0x2d,
    IALoad = 0x2e,
    LALoad = 0x2f,
    FALoad = 0x30,
    DALoad = 0x31,
    AALoad = 0x32,
    BALoad = 0x33,
    CALoad = 0x34,
    SALoad = 0x35,
    IStore = 0x36,
    LStore = 0x37,
    FStore = 0x38,
    DStore = 0x39,
    AStore = 0x3a,
    IStore0 = 0x3b,
    IStore1 = 0x3c,
    IStore2 = 0x3d,
    IStore3 = 0x3e,
    LStore0 = 0x3f,
    LStore1 = 0x40,
    LStore2 = 0x41,
    LStore3 = 0x42,
    FStore0 = 0x43,
    FStore1 = 0x44,
    FStore2 = 0x45,
    FStore3 = 0x46,
    DStore0 = 0x47,
    DStore1 = 0x48,
    DStore2 = 0x49,
    DStore3 = 0x4a,
    AStore0 = 0x4b,
    AStore1 = 0x4c,
    AStore2 = 0x4d,
    AStore3 = 0x4e,
    IAStore = 0x4f,
    LAStore = 0x50,
    FAStore = 0x51,
    DAStore = 0x52,
    AAStore = 0x53,
    BAStore = 0x54,
    CAStore = 0x55,
    SAStore = 0x56,
    Pop = 0x57,
    Pop2 = 0x58,
    Dup = 0x59,
    DupX1 = 0x5a,
    DupX2 = 0x5b,
    Dup2 = 0x5c,
    Dup2X1 = 0x5d,
    Dup2X2 = 0x5e,
    Swap = 0x5f,
    IAdd = 0x60,
    LAdd = 0x61,
    FAdd = 0x62,
    DAdd = 0x63,
    ISub = 0x64,
    LSub = 0x65,
    FSub = 0x66,
    DSub = 0x67,
    IMul = 0x68,
    LMul = 0x69,
    FMul = 0x6a,
    DMul = 0x6b,
    IDiv = 0x6c,
    LDiv = 0x6d,
    FDiv = 0x6e,
    DDiv = 0x6f,
    IRem = 0x70,
    LRem = 0x71,
    FRem = 0x72,
    DRem = 0x73,
    INeg = 0x74,
    LNeg = 0x75,
    FNeg = 0x76,
    DNeg = 0x77,
    IShl = 0x78,
    LShl = 0x79,
    IShr = 0x7a,
    LShr = 0x7b,
    IUShr = 0x7c,
    LUShr = 0x7d,
    IAnd = 0x7e,
    LAnd = 0x7f,
    IOr = 0x80,
    LOr = 0x81,
    IXor = 0x82,
    LXor = 0x83,
    IInc = 0x84,
    I2L = 0x85,
    I2F = 0x86,
    I2D = 0x87,
    L2I = 0x88,
    L2F = 0x89,
    L2D = 0x8a,
    F2I = 0x8b,
    F2L = 0x8c,
    F2D = 0x8d,
    D2I = 0x8e,
    D2L = 0x8f,
    D2F = 0x90,
    I2B = 0x91,
    I2C = 0x92,
    I2S = 0x93,
    LCmp = 0x94,
    FCmpL = 0x95,
    FCmpG = 0x96,
    DCmpL = 0x97,
    DCmpG = 0x98,
    IfEq = 0x99,
    IfNe = 0x9a,
    IfLt = 0x9b,
    IfGe = 0x9c,
    IfGt = 0x9d,
    IfLe = 0x9e,
    IfICmpEq = 0x9f,
    IfICmpNe = 0xa0,
    IfICmpLt = 0xa1,
    IfICmpGe = 0xa2,
    IfICmpGt = 0xa3,
    IfICmpLe = 0xa4,
    IfACmpEq = 0xa5,
    IfACmpNe = 0xa6,
    Goto = 0xa7,
    Jsr = 0xa8,
    Ret = 0xa9,
    TableSwitch = 0xaa,
    LookupSwitch = 0xab,
    IReturn = 0xac,
    LReturn = 0xad,
    FReturn = 0xae,
    DReturn = 0xaf,
    AReturn = 0xb0,
    Return = 0xb1,
    GetStatic = 0xb2,
    PutStatic = 0xb3,
    GetField = 0xb4,
    PutField = 0xb5,
    InvokeVirtual = 0xb6,
    InvokeSpecial = 0xb7,
    InvokeStatic = 0xb8,
    InvokeInterface = 0xb9,
    InvokeDynamic = 0xba,
    New = 0xbb,
    NewArray = 0xbc,
    ANewArray = 0xbd,
    ArrayLength = 0xbe,
    AThrow = 0xbf,
    CheckCast = 0xc0,
    InstanceOf = 0xc1,
    MonitorEnter = 0xc2,
    MonitorExit = 0xc3,
    MultiANewArray = 0xc5,
    IfNull = 0xc6,
    IfNonNull = 0xc7,
    GotoW = 0xc8,
    JsrW = 0xc9,
}

/// Coarse grouping of opcodes by the shape of their operands
///
/// Every [`Instruction`](super::Instruction) variant corresponds to exactly one category, and every
/// opcode belongs to exactly one category.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum Category {
    ArrayLoad,
    ArrayStore,
    Branch,
    Constant,
    Convert,
    DiscontinuedJsr,
    DiscontinuedRet,
    Field,
    InvokeDynamic,
    Invoke,
    Load,
    Store,
    Increment,
    LookupSwitch,
    TableSwitch,
    Monitor,
    NewMultiArray,
    NewObject,
    NewPrimitiveArray,
    NewReferenceArray,
    Nop,
    Operator,
    Return,
    Stack,
    Throw,
    TypeCheck,
}

impl Opcode {
    /// Byte used to encode the opcode
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Decode an opcode byte
    ///
    /// Returns `None` for `wide` (`0xc4`) and for the reserved/unassigned bytes.
    pub const fn from_byte(byte: u8) -> Option<Opcode> {
        let opcode = match byte {
            0x00 => Opcode::Nop,
            0x01 => Opcode::AConstNull,
            0x02 => Opcode::IConstM1,
            0x03 => Opcode::IConst0,
            0x04 => Opcode::IConst1,
            0x05 => Opcode::IConst2,
            0x06 => Opcode::IConst3,
            0x07 => Opcode::IConst4,
            0x08 => Opcode::IConst5,
            0x09 => Opcode::LConst0,
            0x0a => Opcode::LConst1,
            0x0b => Opcode::FConst0,
            0x0c => Opcode::FConst1,
            0x0d => Opcode::FConst2,
            0x0e => Opcode::DConst0,
            0x0f => Opcode::DConst1,
            0x10 => Opcode::BiPush,
            0x11 => Opcode::SiPush,
            0x12 => Opcode::Ldc,
            0x13 => Opcode::LdcW,
            0x14 => Opcode::Ldc2W,
            0x15 => Opcode::ILoad,
            0x16 => Opcode::LLoad,
            0x17 => Opcode::FLoad,
            0x18 => Opcode::DLoad,
            0x19 => Opcode::ALoad,
            0x1a => Opcode::ILoad0,
            0x1b => Opcode::ILoad1,
            0x1c => Opcode::ILoad2,
            0x1d => Opcode::ILoad3,
            0x1e => Opcode::LLoad0,
            0x1f => Opcode::LLoad1,
            0x20 => Opcode::LLoad2,
            0x21 => Opcode::LLoad3,
            0x22 => Opcode::FLoad0,
            0x23 => Opcode::FLoad1,
            0x24 => Opcode::FLoad2,
            0x25 => Opcode::FLoad3,
            0x26 => Opcode::DLoad0,
            0x27 => Opcode::DLoad1,
            0x28 => Opcode::DLoad2,
            0x29 => Opcode::DLoad3,
            0x2a => Opcode::ALoad0,
            0x2b => Opcode::ALoad1,
            0x2c => Opcode::ALoad2,
            0x2d => Opcode::ALoad3,
            0x2e => Opcode::IALoad,
            0x2f => Opcode::LALoad,
            0x30 => Opcode::FALoad,
            0x31 => Opcode::DALoad,
            0x32 => Opcode::AALoad,
            0x33 => Opcode::BALoad,
            0x34 => Opcode::CALoad,
            0x35 => Opcode::SALoad,
            0x36 => Opcode::IStore,
            0x37 => Opcode::LStore,
            0x38 => Opcode::FStore,
            0x39 => Opcode::DStore,
            0x3a => Opcode::AStore,
            0x3b => Opcode::IStore0,
            0x3c => Opcode::IStore1,
            0x3d => Opcode::IStore2,
            0x3e => Opcode::IStore3,
            0x3f => Opcode::LStore0,
            0x40 => Opcode::LStore1,
            0x41 => Opcode::LStore2,
            0x42 => Opcode::LStore3,
            0x43 => Opcode::FStore0,
            0x44 => Opcode::FStore1,
            0x45 => Opcode::FStore2,
            0x46 => Opcode::FStore3,
            0x47 => Opcode::DStore0,
            0x48 => Opcode::DStore1,
            0x49 => Opcode::DStore2,
            0x4a => Opcode::DStore3,
            0x4b => Opcode::AStore0,
            0x4c => Opcode::AStore1,
            0x4d => Opcode::AStore2,
            0x4e => Opcode::AStore3,
            0x4f => Opcode::IAStore,
            0x50 => Opcode::LAStore,
            0x51 => Opcode::FAStore,
            0x52 => Opcode::DAStore,
            0x53 => Opcode::AAStore,
            0x54 => Opcode::BAStore,
            0x55 => Opcode::CAStore,
            0x56 => Opcode::SAStore,
            0x57 => Opcode::Pop,
            0x58 => Opcode::Pop2,
            0x59 => Opcode::Dup,
            0x5a => Opcode::DupX1,
            0x5b => Opcode::DupX2,
            0x5c => Opcode::Dup2,
            0x5d => Opcode::Dup2X1,
            0x5e => Opcode::Dup2X2,
            0x5f => Opcode::Swap,
            0x60 => Opcode::IAdd,
            0x61 => Opcode::LAdd,
            0x62 => Opcode::FAdd,
            0x63 => Opcode::DAdd,
            0x64 => Opcode::ISub,
            0x65 => Opcode::LSub,
            0x66 => Opcode::FSub,
            0x67 => Opcode::DSub,
            0x68 => Opcode::IMul,
            0x69 => Opcode::LMul,
            0x6a => Opcode::FMul,
            0x6b => Opcode::DMul,
            0x6c => Opcode::IDiv,
            0x6d => Opcode::LDiv,
            0x6e => Opcode::FDiv,
            0x6f => Opcode::DDiv,
            0x70 => Opcode::IRem,
            0x71 => Opcode::LRem,
            0x72 => Opcode::FRem,
            0x73 => Opcode::DRem,
            0x74 => Opcode::INeg,
            0x75 => Opcode::LNeg,
            0x76 => Opcode::FNeg,
            0x77 => Opcode::DNeg,
            0x78 => Opcode::IShl,
            0x79 => Opcode::LShl,
            0x7a => Opcode::IShr,
            0x7b => Opcode::LShr,
            0x7c => Opcode::IUShr,
            0x7d => Opcode::LUShr,
            0x7e => Opcode::IAnd,
            0x7f => Opcode::LAnd,
            0x80 => Opcode::IOr,
            0x81 => Opcode::LOr,
            0x82 => Opcode::IXor,
            0x83 => Opcode::LXor,
            0x84 => Opcode::IInc,
            0x85 => Opcode::I2L,
            0x86 => Opcode::I2F,
            0x87 => Opcode::I2D,
            0x88 => Opcode::L2I,
            0x89 => Opcode::L2F,
            0x8a => Opcode::L2D,
            0x8b => Opcode::F2I,
            0x8c => Opcode::F2L,
            0x8d => Opcode::F2D,
            0x8e => Opcode::D2I,
            0x8f => Opcode::D2L,
            0x90 => Opcode::D2F,
            0x91 => Opcode::I2B,
            0x92 => Opcode::I2C,
            0x93 => Opcode::I2S,
            0x94 => Opcode::LCmp,
            0x95 => Opcode::FCmpL,
            0x96 => Opcode::FCmpG,
            0x97 => Opcode::DCmpL,
            0x98 => Opcode::DCmpG,
            0x99 => Opcode::IfEq,
            0x9a => Opcode::IfNe,
            0x9b => Opcode::IfLt,
            0x9c => Opcode::IfGe,
            0x9d => Opcode::IfGt,
            0x9e => Opcode::IfLe,
            0x9f => Opcode::IfICmpEq,
            0xa0 => Opcode::IfICmpNe,
            0xa1 => Opcode::IfICmpLt,
            0xa2 => Opcode::IfICmpGe,
            0xa3 => Opcode::IfICmpGt,
            0xa4 => Opcode::IfICmpLe,
            0xa5 => Opcode::IfACmpEq,
            0xa6 => Opcode::IfACmpNe,
            0xa7 => Opcode::Goto,
            0xa8 => Opcode::Jsr,
            0xa9 => Opcode::Ret,
            0xaa => Opcode::TableSwitch,
            0xab => Opcode::LookupSwitch,
            0xac => Opcode::IReturn,
            0xad => Opcode::LReturn,
            0xae => Opcode::FReturn,
            0xaf => Opcode::DReturn,
            0xb0 => Opcode::AReturn,
            0xb1 => Opcode::Return,
            0xb2 => Opcode::GetStatic,
            0xb3 => Opcode::PutStatic,
            0xb4 => Opcode::GetField,
            0xb5 => Opcode::PutField,
            0xb6 => Opcode::InvokeVirtual,
            0xb7 => Opcode::InvokeSpecial,
            0xb8 => Opcode::InvokeStatic,
            0xb9 => Opcode::InvokeInterface,
            0xba => Opcode::InvokeDynamic,
            0xbb => Opcode::New,
            0xbc => Opcode::NewArray,
            0xbd => Opcode::ANewArray,
            0xbe => Opcode::ArrayLength,
            0xbf => Opcode::AThrow,
            0xc0 => Opcode::CheckCast,
            0xc1 => Opcode::InstanceOf,
            0xc2 => Opcode::MonitorEnter,
            0xc3 => Opcode::MonitorExit,
            0xc5 => Opcode::MultiANewArray,
            0xc6 => Opcode::IfNull,
            0xc7 => Opcode::IfNonNull,
            0xc8 => Opcode::GotoW,
            0xc9 => Opcode::JsrW,
            _ => return None,
        };
        Some(opcode)
    }

    pub const fn category(self) -> Category {
        match self {
            Opcode::Nop => Category::Nop,
            Opcode::AConstNull
            | Opcode::IConstM1
            | Opcode::IConst0
            | Opcode::IConst1
            | Opcode::IConst2
            | Opcode::IConst3
            | Opcode::IConst4
            | Opcode::IConst5
            | Opcode::LConst0
            | Opcode::LConst1
            | Opcode::FConst0
            | Opcode::FConst1
            | Opcode::FConst2
            | Opcode::DConst0
            | Opcode::DConst1
            | Opcode::BiPush
            | Opcode::SiPush
            | Opcode::Ldc
            | Opcode::LdcW
            | Opcode::Ldc2W => Category::Constant,
            Opcode::ILoad
            | Opcode::LLoad
            | Opcode::FLoad
            | Opcode::DLoad
            | Opcode::ALoad
            | Opcode::ILoad0
            | Opcode::ILoad1
            | Opcode::ILoad2
            | Opcode::ILoad3
            | Opcode::LLoad0
            | Opcode::LLoad1
            | Opcode::LLoad2
            | Opcode::LLoad3
            | Opcode::FLoad0
            | Opcode::FLoad1
            | Opcode::FLoad2
            | Opcode::FLoad3
            | Opcode::DLoad0
            | Opcode::DLoad1
            | Opcode::DLoad2
            | Opcode::DLoad3
            | Opcode::ALoad0
            | Opcode::ALoad1
            | Opcode::ALoad2
            | Opcode::ALoad3 => Category::Load,
            Opcode::IALoad
            | Opcode::LALoad
            | Opcode::FALoad
            | Opcode::DALoad
            | Opcode::AALoad
            | Opcode::BALoad
            | Opcode::CALoad
            | Opcode::SALoad => Category::ArrayLoad,
            Opcode::IStore
            | Opcode::LStore
            | Opcode::FStore
            | Opcode::DStore
            | Opcode::AStore
            | Opcode::IStore0
            | Opcode::IStore1
            | Opcode::IStore2
            | Opcode::IStore3
            | Opcode::LStore0
            | Opcode::LStore1
            | Opcode::LStore2
            | Opcode::LStore3
            | Opcode::FStore0
            | Opcode::FStore1
            | Opcode::FStore2
            | Opcode::FStore3
            | Opcode::DStore0
            | Opcode::DStore1
            | Opcode::DStore2
            | Opcode::DStore3
            | Opcode::AStore0
            | Opcode::AStore1
            | Opcode::AStore2
            | Opcode::AStore3 => Category::Store,
            Opcode::IAStore
            | Opcode::LAStore
            | Opcode::FAStore
            | Opcode::DAStore
            | Opcode::AAStore
            | Opcode::BAStore
            | Opcode::CAStore
            | Opcode::SAStore => Category::ArrayStore,
            Opcode::Pop
            | Opcode::Pop2
            | Opcode::Dup
            | Opcode::DupX1
            | Opcode::DupX2
            | Opcode::Dup2
            | Opcode::Dup2X1
            | Opcode::Dup2X2
            | Opcode::Swap => Category::Stack,
            Opcode::IAdd
            | Opcode::LAdd
            | Opcode::FAdd
            | Opcode::DAdd
            | Opcode::ISub
            | Opcode::LSub
            | Opcode::FSub
            | Opcode::DSub
            | Opcode::IMul
            | Opcode::LMul
            | Opcode::FMul
            | Opcode::DMul
            | Opcode::IDiv
            | Opcode::LDiv
            | Opcode::FDiv
            | Opcode::DDiv
            | Opcode::IRem
            | Opcode::LRem
            | Opcode::FRem
            | Opcode::DRem
            | Opcode::INeg
            | Opcode::LNeg
            | Opcode::FNeg
            | Opcode::DNeg
            | Opcode::IShl
            | Opcode::LShl
            | Opcode::IShr
            | Opcode::LShr
            | Opcode::IUShr
            | Opcode::LUShr
            | Opcode::IAnd
            | Opcode::LAnd
            | Opcode::IOr
            | Opcode::LOr
            | Opcode::IXor
            | Opcode::LXor
            | Opcode::LCmp
            | Opcode::FCmpL
            | Opcode::FCmpG
            | Opcode::DCmpL
            | Opcode::DCmpG
            | Opcode::ArrayLength => Category::Operator,
            Opcode::IInc => Category::Increment,
            Opcode::I2L
            | Opcode::I2F
            | Opcode::I2D
            | Opcode::L2I
            | Opcode::L2F
            | Opcode::L2D
            | Opcode::F2I
            | Opcode::F2L
            | Opcode::F2D
            | Opcode::D2I
            | Opcode::D2L
            | Opcode::D2F
            | Opcode::I2B
            | Opcode::I2C
            | Opcode::I2S => Category::Convert,
            Opcode::IfEq
            | Opcode::IfNe
            | Opcode::IfLt
            | Opcode::IfGe
            | Opcode::IfGt
            | Opcode::IfLe
            | Opcode::IfICmpEq
            | Opcode::IfICmpNe
            | Opcode::IfICmpLt
            | Opcode::IfICmpGe
            | Opcode::IfICmpGt
            | Opcode::IfICmpLe
            | Opcode::IfACmpEq
            | Opcode::IfACmpNe
            | Opcode::Goto
            | Opcode::IfNull
            | Opcode::IfNonNull
            | Opcode::GotoW => Category::Branch,
            Opcode::Jsr | Opcode::JsrW => Category::DiscontinuedJsr,
            Opcode::Ret => Category::DiscontinuedRet,
            Opcode::TableSwitch => Category::TableSwitch,
            Opcode::LookupSwitch => Category::LookupSwitch,
            Opcode::IReturn
            | Opcode::LReturn
            | Opcode::FReturn
            | Opcode::DReturn
            | Opcode::AReturn
            | Opcode::Return => Category::Return,
            Opcode::GetStatic
            | Opcode::PutStatic
            | Opcode::GetField
            | Opcode::PutField => Category::Field,
            Opcode::InvokeVirtual
            | Opcode::InvokeSpecial
            | Opcode::InvokeStatic
            | Opcode::InvokeInterface => Category::Invoke,
            Opcode::InvokeDynamic => Category::InvokeDynamic,
            Opcode::New => Category::NewObject,
            Opcode::NewArray => Category::NewPrimitiveArray,
            Opcode::ANewArray => Category::NewReferenceArray,
            Opcode::AThrow => Category::Throw,
            Opcode::CheckCast | Opcode::InstanceOf => Category::TypeCheck,
            Opcode::MonitorEnter | Opcode::MonitorExit => Category::Monitor,
            Opcode::MultiANewArray => Category::NewMultiArray,
        }
    }

    /// Kind of the operand that typed opcodes work on
    ///
    /// For loads, stores, arithmetic, and returns this is the kind in the mnemonic prefix. For
    /// array accesses it is the element kind, for conversions the source kind, and for
    /// comparisons the kind being compared. Opcodes without a fixed operand kind (`ldc`, stack
    /// shuffles, field accesses, invocations, ...) have kind `Void`.
    pub const fn primary_type_kind(self) -> TypeKind {
        match self {
            Opcode::AConstNull
            | Opcode::ALoad
            | Opcode::ALoad0
            | Opcode::ALoad1
            | Opcode::ALoad2
            | Opcode::ALoad3
            | Opcode::AALoad
            | Opcode::AStore
            | Opcode::AStore0
            | Opcode::AStore1
            | Opcode::AStore2
            | Opcode::AStore3
            | Opcode::AAStore
            | Opcode::IfACmpEq
            | Opcode::IfACmpNe
            | Opcode::AReturn
            | Opcode::IfNull
            | Opcode::IfNonNull => TypeKind::Reference,
            Opcode::IConstM1
            | Opcode::IConst0
            | Opcode::IConst1
            | Opcode::IConst2
            | Opcode::IConst3
            | Opcode::IConst4
            | Opcode::IConst5
            | Opcode::BiPush
            | Opcode::SiPush
            | Opcode::ILoad
            | Opcode::ILoad0
            | Opcode::ILoad1
            | Opcode::ILoad2
            | Opcode::ILoad3
            | Opcode::IALoad
            | Opcode::IStore
            | Opcode::IStore0
            | Opcode::IStore1
            | Opcode::IStore2
            | Opcode::IStore3
            | Opcode::IAStore
            | Opcode::IAdd
            | Opcode::ISub
            | Opcode::IMul
            | Opcode::IDiv
            | Opcode::IRem
            | Opcode::INeg
            | Opcode::IShl
            | Opcode::IShr
            | Opcode::IUShr
            | Opcode::IAnd
            | Opcode::IOr
            | Opcode::IXor
            | Opcode::IInc
            | Opcode::I2L
            | Opcode::I2F
            | Opcode::I2D
            | Opcode::I2B
            | Opcode::I2C
            | Opcode::I2S
            | Opcode::IfEq
            | Opcode::IfNe
            | Opcode::IfLt
            | Opcode::IfGe
            | Opcode::IfGt
            | Opcode::IfLe
            | Opcode::IfICmpEq
            | Opcode::IfICmpNe
            | Opcode::IfICmpLt
            | Opcode::IfICmpGe
            | Opcode::IfICmpGt
            | Opcode::IfICmpLe
            | Opcode::TableSwitch
            | Opcode::LookupSwitch
            | Opcode::IReturn
            | Opcode::ArrayLength => TypeKind::Int,
            Opcode::LConst0
            | Opcode::LConst1
            | Opcode::LLoad
            | Opcode::LLoad0
            | Opcode::LLoad1
            | Opcode::LLoad2
            | Opcode::LLoad3
            | Opcode::LALoad
            | Opcode::LStore
            | Opcode::LStore0
            | Opcode::LStore1
            | Opcode::LStore2
            | Opcode::LStore3
            | Opcode::LAStore
            | Opcode::LAdd
            | Opcode::LSub
            | Opcode::LMul
            | Opcode::LDiv
            | Opcode::LRem
            | Opcode::LNeg
            | Opcode::LShl
            | Opcode::LShr
            | Opcode::LUShr
            | Opcode::LAnd
            | Opcode::LOr
            | Opcode::LXor
            | Opcode::L2I
            | Opcode::L2F
            | Opcode::L2D
            | Opcode::LCmp
            | Opcode::LReturn => TypeKind::Long,
            Opcode::FConst0
            | Opcode::FConst1
            | Opcode::FConst2
            | Opcode::FLoad
            | Opcode::FLoad0
            | Opcode::FLoad1
            | Opcode::FLoad2
            | Opcode::FLoad3
            | Opcode::FALoad
            | Opcode::FStore
            | Opcode::FStore0
            | Opcode::FStore1
            | Opcode::FStore2
            | Opcode::FStore3
            | Opcode::FAStore
            | Opcode::FAdd
            | Opcode::FSub
            | Opcode::FMul
            | Opcode::FDiv
            | Opcode::FRem
            | Opcode::FNeg
            | Opcode::F2I
            | Opcode::F2L
            | Opcode::F2D
            | Opcode::FCmpL
            | Opcode::FCmpG
            | Opcode::FReturn => TypeKind::Float,
            Opcode::DConst0
            | Opcode::DConst1
            | Opcode::DLoad
            | Opcode::DLoad0
            | Opcode::DLoad1
            | Opcode::DLoad2
            | Opcode::DLoad3
            | Opcode::DALoad
            | Opcode::DStore
            | Opcode::DStore0
            | Opcode::DStore1
            | Opcode::DStore2
            | Opcode::DStore3
            | Opcode::DAStore
            | Opcode::DAdd
            | Opcode::DSub
            | Opcode::DMul
            | Opcode::DDiv
            | Opcode::DRem
            | Opcode::DNeg
            | Opcode::D2I
            | Opcode::D2L
            | Opcode::D2F
            | Opcode::DCmpL
            | Opcode::DCmpG
            | Opcode::DReturn => TypeKind::Double,
            Opcode::BALoad | Opcode::BAStore => TypeKind::Byte,
            Opcode::CALoad | Opcode::CAStore => TypeKind::Char,
            Opcode::SALoad | Opcode::SAStore => TypeKind::Short,
            _ => TypeKind::Void,
        }
    }

    /// Result kind of conversions (`Void` for everything else)
    pub const fn secondary_type_kind(self) -> TypeKind {
        match self {
            Opcode::I2L | Opcode::F2L | Opcode::D2L => TypeKind::Long,
            Opcode::I2F | Opcode::L2F | Opcode::D2F => TypeKind::Float,
            Opcode::I2D | Opcode::L2D | Opcode::F2D => TypeKind::Double,
            Opcode::L2I | Opcode::F2I | Opcode::D2I => TypeKind::Int,
            Opcode::I2B => TypeKind::Byte,
            Opcode::I2C => TypeKind::Char,
            Opcode::I2S => TypeKind::Short,
            _ => TypeKind::Void,
        }
    }

    /// Does control never fall through to the next instruction?
    pub const fn is_unconditional_branch(self) -> bool {
        matches!(
            self,
            Opcode::Goto
                | Opcode::GotoW
                | Opcode::AThrow
                | Opcode::TableSwitch
                | Opcode::LookupSwitch
                | Opcode::IReturn
                | Opcode::LReturn
                | Opcode::FReturn
                | Opcode::DReturn
                | Opcode::AReturn
                | Opcode::Return
                | Opcode::Ret
        )
    }
}
