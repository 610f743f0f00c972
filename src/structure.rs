use super::*;

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum ValType {
    I32,
    I64,
    F32,
    F64,
    V128,
    FuncRef,
    ExternRef,
}

impl ValType {
    pub fn byte(self) -> u8 {
        match self {
            ValType::I32 => 0x7f,
            ValType::I64 => 0x7e,
            ValType::F32 => 0x7d,
            ValType::F64 => 0x7c,
            ValType::V128 => 0x7b,
            ValType::FuncRef => 0x70,
            ValType::ExternRef => 0x6f,
        }
    }
}

impl From<RefType> for ValType {
    fn from(ref_type: RefType) -> ValType {
        match ref_type {
            RefType::FuncRef => ValType::FuncRef,
            RefType::ExternRef => ValType::ExternRef,
        }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum RefType {
    FuncRef,
    ExternRef,
}

impl RefType {
    pub fn byte(self) -> u8 {
        match self {
            RefType::FuncRef => 0x70,
            RefType::ExternRef => 0x6f,
        }
    }
}

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct FuncType {
    pub params: Vec<ValType>,
    pub results: Vec<ValType>,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Limits {
    pub min: u32,
    pub max: Option<u32>,
}

impl Limits {
    pub fn unbounded(min: u32) -> Limits {
        Limits { min, max: None }
    }

    pub fn bounded(min: u32, max: u32) -> Limits {
        Limits { min, max: Some(max) }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct TableType {
    pub elem: RefType,
    pub limits: Limits,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct MemType {
    pub limits: Limits,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct GlobalType {
    pub val_type: ValType,
    pub mutable: bool,
}

/// Alignment (as a power of two) and offset of a memory access.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct MemArg {
    pub align: u32,
    pub offset: u32,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum BlockType {
    Empty,
    Value(ValType),
    Type(TypeIdx),
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExportKind {
    Func,
    Table,
    Mem,
    Global,
}

impl ExportKind {
    pub fn byte(self) -> u8 {
        match self {
            ExportKind::Func => 0x00,
            ExportKind::Table => 0x01,
            ExportKind::Mem => 0x02,
            ExportKind::Global => 0x03,
        }
    }
}

/// A run of `count` locals sharing one type.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Local {
    pub count: u32,
    pub val_type: ValType,
}

/// The index spaces shared between imports and local definitions.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum IndexSpace {
    Func,
    Table,
    Mem,
    Global,
}

impl fmt::Display for IndexSpace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            IndexSpace::Func => "function",
            IndexSpace::Table => "table",
            IndexSpace::Mem => "memory",
            IndexSpace::Global => "global",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeIdx(pub u32);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FuncIdx(pub u32);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableIdx(pub u32);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MemIdx(pub u32);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GlobalIdx(pub u32);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocalIdx(pub u32);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LabelIdx(pub u32);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LaneIdx(pub u32);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElemIdx(pub u32);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DataIdx(pub u32);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExportIdx(pub u32);

// Position of a body in the code section. Not an index space of the format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CodeIdx(pub u32);
