//! The instruction table.
//!
//! Every instruction is one line of the `instructions!` invocation below:
//! variant, convenience method, text format name, opcode and the ordered
//! immediates it takes. From that line the macro derives the `Op` metadata
//! and the matching method on `Code`.

use super::*;

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Opcode {
    Byte(u8),
    /// A prefix byte followed by a LEB128 sub-opcode.
    Prefixed(u8, u32),
}

pub const MISC_PREFIX: u8 = 0xfc;
pub const SIMD_PREFIX: u8 = 0xfd;

const fn op(b: u8) -> Opcode {
    Opcode::Byte(b)
}

const fn misc(x: u32) -> Opcode {
    Opcode::Prefixed(MISC_PREFIX, x)
}

const fn simd(x: u32) -> Opcode {
    Opcode::Prefixed(SIMD_PREFIX, x)
}

impl Encode for Opcode {
    fn encode(&self, w: &mut dyn Sink) {
        match *self {
            Opcode::Byte(b) => w.write_byte(b),
            Opcode::Prefixed(prefix, x) => {
                w.write_byte(prefix);
                w.write_u32(x);
            },
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let bytes = self.to_bytes();
        for (i, b) in bytes.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImmediateKind {
    BlockType,
    Label,
    Labels,
    Func,
    Type,
    Table,
    Mem,
    Global,
    Local,
    Elem,
    Data,
    Lane,
    Lanes,
    MemArg,
    I32,
    I64,
    F32,
    F64,
    V128,
    RefType,
    ValTypes,
}

impl ImmediateKind {
    pub fn name(self) -> &'static str {
        match self {
            ImmediateKind::BlockType => "blocktype",
            ImmediateKind::Label => "labelidx",
            ImmediateKind::Labels => "vec(labelidx)",
            ImmediateKind::Func => "funcidx",
            ImmediateKind::Type => "typeidx",
            ImmediateKind::Table => "tableidx",
            ImmediateKind::Mem => "memidx",
            ImmediateKind::Global => "globalidx",
            ImmediateKind::Local => "localidx",
            ImmediateKind::Elem => "elemidx",
            ImmediateKind::Data => "dataidx",
            ImmediateKind::Lane => "laneidx",
            ImmediateKind::Lanes => "laneidx^16",
            ImmediateKind::MemArg => "memarg",
            ImmediateKind::I32 => "i32",
            ImmediateKind::I64 => "i64",
            ImmediateKind::F32 => "f32",
            ImmediateKind::F64 => "f64",
            ImmediateKind::V128 => "v128",
            ImmediateKind::RefType => "reftype",
            ImmediateKind::ValTypes => "vec(valtype)",
        }
    }
}

impl fmt::Display for ImmediateKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An immediate operand, written directly after the opcode.
#[derive(PartialEq, Clone, Debug)]
pub enum Immediate {
    BlockType(BlockType),
    Label(LabelIdx),
    Labels(Vec<LabelIdx>),
    Func(FuncIdx),
    Type(TypeIdx),
    Table(TableIdx),
    Mem(MemIdx),
    Global(GlobalIdx),
    Local(LocalIdx),
    Elem(ElemIdx),
    Data(DataIdx),
    Lane(LaneIdx),
    Lanes([LaneIdx; 16]),
    MemArg(MemArg),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    V128([u8; 16]),
    RefType(RefType),
    ValTypes(Vec<ValType>),
}

impl Immediate {
    pub fn kind(&self) -> ImmediateKind {
        match self {
            Immediate::BlockType(..) => ImmediateKind::BlockType,
            Immediate::Label(..) => ImmediateKind::Label,
            Immediate::Labels(..) => ImmediateKind::Labels,
            Immediate::Func(..) => ImmediateKind::Func,
            Immediate::Type(..) => ImmediateKind::Type,
            Immediate::Table(..) => ImmediateKind::Table,
            Immediate::Mem(..) => ImmediateKind::Mem,
            Immediate::Global(..) => ImmediateKind::Global,
            Immediate::Local(..) => ImmediateKind::Local,
            Immediate::Elem(..) => ImmediateKind::Elem,
            Immediate::Data(..) => ImmediateKind::Data,
            Immediate::Lane(..) => ImmediateKind::Lane,
            Immediate::Lanes(..) => ImmediateKind::Lanes,
            Immediate::MemArg(..) => ImmediateKind::MemArg,
            Immediate::I32(..) => ImmediateKind::I32,
            Immediate::I64(..) => ImmediateKind::I64,
            Immediate::F32(..) => ImmediateKind::F32,
            Immediate::F64(..) => ImmediateKind::F64,
            Immediate::V128(..) => ImmediateKind::V128,
            Immediate::RefType(..) => ImmediateKind::RefType,
            Immediate::ValTypes(..) => ImmediateKind::ValTypes,
        }
    }
}

impl Encode for Immediate {
    fn encode(&self, w: &mut dyn Sink) {
        match self {
            Immediate::BlockType(bt) => bt.encode(w),
            Immediate::Label(label) => label.encode(w),
            Immediate::Labels(labels) => labels.encode(w),
            Immediate::Func(func) => func.encode(w),
            Immediate::Type(ty) => ty.encode(w),
            Immediate::Table(table) => table.encode(w),
            Immediate::Mem(mem) => mem.encode(w),
            Immediate::Global(global) => global.encode(w),
            Immediate::Local(local) => local.encode(w),
            Immediate::Elem(elem) => elem.encode(w),
            Immediate::Data(data) => data.encode(w),
            Immediate::Lane(lane) => lane.encode(w),
            // fixed length, no count
            Immediate::Lanes(lanes) => {
                for lane in lanes.iter() {
                    lane.encode(w);
                }
            },
            Immediate::MemArg(mem_arg) => mem_arg.encode(w),
            Immediate::I32(x) => w.write_i32(*x),
            Immediate::I64(x) => w.write_i64(*x),
            Immediate::F32(x) => w.write_f32(*x),
            Immediate::F64(x) => w.write_f64(*x),
            Immediate::V128(x) => w.write_v128(*x),
            Immediate::RefType(ref_type) => ref_type.encode(w),
            Immediate::ValTypes(types) => types.encode(w),
        }
    }
}

macro_rules! instructions {
    ($(
        $variant:ident => $method:ident, $name:expr, $opcode:expr,
            ($($arg:ident: $ty:ty = $kind:ident),*);
    )*) => {
        #[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
        pub enum Op {
            $($variant,)*
        }

        impl Op {
            pub const ALL: &'static [Op] = &[$(Op::$variant,)*];

            /// Name of the instruction in the text format.
            pub fn name(self) -> &'static str {
                match self {
                    $(Op::$variant => $name,)*
                }
            }

            pub fn opcode(self) -> Opcode {
                match self {
                    $(Op::$variant => $opcode,)*
                }
            }

            /// Kinds of the immediates the instruction takes, in encoding order.
            pub fn immediates(self) -> &'static [ImmediateKind] {
                match self {
                    $(Op::$variant => {
                        const KINDS: &[ImmediateKind] = &[$(ImmediateKind::$kind),*];
                        KINDS
                    },)*
                }
            }
        }

        impl Code {
            $(
                pub fn $method(&mut self, $($arg: $ty),*) -> &mut Code {
                    self.emit(Op::$variant, &[$(Immediate::$kind(From::from($arg))),*])
                }
            )*
        }
    };
}

instructions! {
    Unreachable => unreachable, "unreachable", op(0x00), ();
    Nop => nop, "nop", op(0x01), ();
    Block => block, "block", op(0x02), (bt: BlockType = BlockType);
    Loop => loop_, "loop", op(0x03), (bt: BlockType = BlockType);
    If => if_, "if", op(0x04), (bt: BlockType = BlockType);
    Else => else_, "else", op(0x05), ();
    End => end, "end", op(0x0b), ();
    Br => br, "br", op(0x0c), (label: LabelIdx = Label);
    BrIf => br_if, "br_if", op(0x0d), (label: LabelIdx = Label);
    BrTable => br_table, "br_table", op(0x0e), (targets: &[LabelIdx] = Labels, otherwise: LabelIdx = Label);
    Return => return_, "return", op(0x0f), ();
    Call => call, "call", op(0x10), (func: FuncIdx = Func);
    CallIndirect => call_indirect, "call_indirect", op(0x11), (ty: TypeIdx = Type, table: TableIdx = Table);
    Drop => drop, "drop", op(0x1a), ();
    Select => select, "select", op(0x1b), ();
    SelectTyped => select_typed, "select", op(0x1c), (types: &[ValType] = ValTypes);
    LocalGet => local_get, "local.get", op(0x20), (local: LocalIdx = Local);
    LocalSet => local_set, "local.set", op(0x21), (local: LocalIdx = Local);
    LocalTee => local_tee, "local.tee", op(0x22), (local: LocalIdx = Local);
    GlobalGet => global_get, "global.get", op(0x23), (global: GlobalIdx = Global);
    GlobalSet => global_set, "global.set", op(0x24), (global: GlobalIdx = Global);
    TableGet => table_get, "table.get", op(0x25), (table: TableIdx = Table);
    TableSet => table_set, "table.set", op(0x26), (table: TableIdx = Table);
    I32Load => i32_load, "i32.load", op(0x28), (mem_arg: MemArg = MemArg);
    I64Load => i64_load, "i64.load", op(0x29), (mem_arg: MemArg = MemArg);
    F32Load => f32_load, "f32.load", op(0x2a), (mem_arg: MemArg = MemArg);
    F64Load => f64_load, "f64.load", op(0x2b), (mem_arg: MemArg = MemArg);
    I32Load8S => i32_load8_s, "i32.load8_s", op(0x2c), (mem_arg: MemArg = MemArg);
    I32Load8U => i32_load8_u, "i32.load8_u", op(0x2d), (mem_arg: MemArg = MemArg);
    I32Load16S => i32_load16_s, "i32.load16_s", op(0x2e), (mem_arg: MemArg = MemArg);
    I32Load16U => i32_load16_u, "i32.load16_u", op(0x2f), (mem_arg: MemArg = MemArg);
    I64Load8S => i64_load8_s, "i64.load8_s", op(0x30), (mem_arg: MemArg = MemArg);
    I64Load8U => i64_load8_u, "i64.load8_u", op(0x31), (mem_arg: MemArg = MemArg);
    I64Load16S => i64_load16_s, "i64.load16_s", op(0x32), (mem_arg: MemArg = MemArg);
    I64Load16U => i64_load16_u, "i64.load16_u", op(0x33), (mem_arg: MemArg = MemArg);
    I64Load32S => i64_load32_s, "i64.load32_s", op(0x34), (mem_arg: MemArg = MemArg);
    I64Load32U => i64_load32_u, "i64.load32_u", op(0x35), (mem_arg: MemArg = MemArg);
    I32Store => i32_store, "i32.store", op(0x36), (mem_arg: MemArg = MemArg);
    I64Store => i64_store, "i64.store", op(0x37), (mem_arg: MemArg = MemArg);
    F32Store => f32_store, "f32.store", op(0x38), (mem_arg: MemArg = MemArg);
    F64Store => f64_store, "f64.store", op(0x39), (mem_arg: MemArg = MemArg);
    I32Store8 => i32_store8, "i32.store8", op(0x3a), (mem_arg: MemArg = MemArg);
    I32Store16 => i32_store16, "i32.store16", op(0x3b), (mem_arg: MemArg = MemArg);
    I64Store8 => i64_store8, "i64.store8", op(0x3c), (mem_arg: MemArg = MemArg);
    I64Store16 => i64_store16, "i64.store16", op(0x3d), (mem_arg: MemArg = MemArg);
    I64Store32 => i64_store32, "i64.store32", op(0x3e), (mem_arg: MemArg = MemArg);
    MemorySize => memory_size, "memory.size", op(0x3f), (mem: MemIdx = Mem);
    MemoryGrow => memory_grow, "memory.grow", op(0x40), (mem: MemIdx = Mem);
    I32Const => i32_const, "i32.const", op(0x41), (value: i32 = I32);
    I64Const => i64_const, "i64.const", op(0x42), (value: i64 = I64);
    F32Const => f32_const, "f32.const", op(0x43), (value: f32 = F32);
    F64Const => f64_const, "f64.const", op(0x44), (value: f64 = F64);
    I32Eqz => i32_eqz, "i32.eqz", op(0x45), ();
    I32Eq => i32_eq, "i32.eq", op(0x46), ();
    I32Ne => i32_ne, "i32.ne", op(0x47), ();
    I32LtS => i32_lt_s, "i32.lt_s", op(0x48), ();
    I32LtU => i32_lt_u, "i32.lt_u", op(0x49), ();
    I32GtS => i32_gt_s, "i32.gt_s", op(0x4a), ();
    I32GtU => i32_gt_u, "i32.gt_u", op(0x4b), ();
    I32LeS => i32_le_s, "i32.le_s", op(0x4c), ();
    I32LeU => i32_le_u, "i32.le_u", op(0x4d), ();
    I32GeS => i32_ge_s, "i32.ge_s", op(0x4e), ();
    I32GeU => i32_ge_u, "i32.ge_u", op(0x4f), ();
    I64Eqz => i64_eqz, "i64.eqz", op(0x50), ();
    I64Eq => i64_eq, "i64.eq", op(0x51), ();
    I64Ne => i64_ne, "i64.ne", op(0x52), ();
    I64LtS => i64_lt_s, "i64.lt_s", op(0x53), ();
    I64LtU => i64_lt_u, "i64.lt_u", op(0x54), ();
    I64GtS => i64_gt_s, "i64.gt_s", op(0x55), ();
    I64GtU => i64_gt_u, "i64.gt_u", op(0x56), ();
    I64LeS => i64_le_s, "i64.le_s", op(0x57), ();
    I64LeU => i64_le_u, "i64.le_u", op(0x58), ();
    I64GeS => i64_ge_s, "i64.ge_s", op(0x59), ();
    I64GeU => i64_ge_u, "i64.ge_u", op(0x5a), ();
    F32Eq => f32_eq, "f32.eq", op(0x5b), ();
    F32Ne => f32_ne, "f32.ne", op(0x5c), ();
    F32Lt => f32_lt, "f32.lt", op(0x5d), ();
    F32Gt => f32_gt, "f32.gt", op(0x5e), ();
    F32Le => f32_le, "f32.le", op(0x5f), ();
    F32Ge => f32_ge, "f32.ge", op(0x60), ();
    F64Eq => f64_eq, "f64.eq", op(0x61), ();
    F64Ne => f64_ne, "f64.ne", op(0x62), ();
    F64Lt => f64_lt, "f64.lt", op(0x63), ();
    F64Gt => f64_gt, "f64.gt", op(0x64), ();
    F64Le => f64_le, "f64.le", op(0x65), ();
    F64Ge => f64_ge, "f64.ge", op(0x66), ();
    I32Clz => i32_clz, "i32.clz", op(0x67), ();
    I32Ctz => i32_ctz, "i32.ctz", op(0x68), ();
    I32Popcnt => i32_popcnt, "i32.popcnt", op(0x69), ();
    I32Add => i32_add, "i32.add", op(0x6a), ();
    I32Sub => i32_sub, "i32.sub", op(0x6b), ();
    I32Mul => i32_mul, "i32.mul", op(0x6c), ();
    I32DivS => i32_div_s, "i32.div_s", op(0x6d), ();
    I32DivU => i32_div_u, "i32.div_u", op(0x6e), ();
    I32RemS => i32_rem_s, "i32.rem_s", op(0x6f), ();
    I32RemU => i32_rem_u, "i32.rem_u", op(0x70), ();
    I32And => i32_and, "i32.and", op(0x71), ();
    I32Or => i32_or, "i32.or", op(0x72), ();
    I32Xor => i32_xor, "i32.xor", op(0x73), ();
    I32Shl => i32_shl, "i32.shl", op(0x74), ();
    I32ShrS => i32_shr_s, "i32.shr_s", op(0x75), ();
    I32ShrU => i32_shr_u, "i32.shr_u", op(0x76), ();
    I32Rotl => i32_rotl, "i32.rotl", op(0x77), ();
    I32Rotr => i32_rotr, "i32.rotr", op(0x78), ();
    I64Clz => i64_clz, "i64.clz", op(0x79), ();
    I64Ctz => i64_ctz, "i64.ctz", op(0x7a), ();
    I64Popcnt => i64_popcnt, "i64.popcnt", op(0x7b), ();
    I64Add => i64_add, "i64.add", op(0x7c), ();
    I64Sub => i64_sub, "i64.sub", op(0x7d), ();
    I64Mul => i64_mul, "i64.mul", op(0x7e), ();
    I64DivS => i64_div_s, "i64.div_s", op(0x7f), ();
    I64DivU => i64_div_u, "i64.div_u", op(0x80), ();
    I64RemS => i64_rem_s, "i64.rem_s", op(0x81), ();
    I64RemU => i64_rem_u, "i64.rem_u", op(0x82), ();
    I64And => i64_and, "i64.and", op(0x83), ();
    I64Or => i64_or, "i64.or", op(0x84), ();
    I64Xor => i64_xor, "i64.xor", op(0x85), ();
    I64Shl => i64_shl, "i64.shl", op(0x86), ();
    I64ShrS => i64_shr_s, "i64.shr_s", op(0x87), ();
    I64ShrU => i64_shr_u, "i64.shr_u", op(0x88), ();
    I64Rotl => i64_rotl, "i64.rotl", op(0x89), ();
    I64Rotr => i64_rotr, "i64.rotr", op(0x8a), ();
    F32Abs => f32_abs, "f32.abs", op(0x8b), ();
    F32Neg => f32_neg, "f32.neg", op(0x8c), ();
    F32Ceil => f32_ceil, "f32.ceil", op(0x8d), ();
    F32Floor => f32_floor, "f32.floor", op(0x8e), ();
    F32Trunc => f32_trunc, "f32.trunc", op(0x8f), ();
    F32Nearest => f32_nearest, "f32.nearest", op(0x90), ();
    F32Sqrt => f32_sqrt, "f32.sqrt", op(0x91), ();
    F32Add => f32_add, "f32.add", op(0x92), ();
    F32Sub => f32_sub, "f32.sub", op(0x93), ();
    F32Mul => f32_mul, "f32.mul", op(0x94), ();
    F32Div => f32_div, "f32.div", op(0x95), ();
    F32Min => f32_min, "f32.min", op(0x96), ();
    F32Max => f32_max, "f32.max", op(0x97), ();
    F32Copysign => f32_copysign, "f32.copysign", op(0x98), ();
    F64Abs => f64_abs, "f64.abs", op(0x99), ();
    F64Neg => f64_neg, "f64.neg", op(0x9a), ();
    F64Ceil => f64_ceil, "f64.ceil", op(0x9b), ();
    F64Floor => f64_floor, "f64.floor", op(0x9c), ();
    F64Trunc => f64_trunc, "f64.trunc", op(0x9d), ();
    F64Nearest => f64_nearest, "f64.nearest", op(0x9e), ();
    F64Sqrt => f64_sqrt, "f64.sqrt", op(0x9f), ();
    F64Add => f64_add, "f64.add", op(0xa0), ();
    F64Sub => f64_sub, "f64.sub", op(0xa1), ();
    F64Mul => f64_mul, "f64.mul", op(0xa2), ();
    F64Div => f64_div, "f64.div", op(0xa3), ();
    F64Min => f64_min, "f64.min", op(0xa4), ();
    F64Max => f64_max, "f64.max", op(0xa5), ();
    F64Copysign => f64_copysign, "f64.copysign", op(0xa6), ();
    I32WrapI64 => i32_wrap_i64, "i32.wrap_i64", op(0xa7), ();
    I32TruncF32S => i32_trunc_f32_s, "i32.trunc_f32_s", op(0xa8), ();
    I32TruncF32U => i32_trunc_f32_u, "i32.trunc_f32_u", op(0xa9), ();
    I32TruncF64S => i32_trunc_f64_s, "i32.trunc_f64_s", op(0xaa), ();
    I32TruncF64U => i32_trunc_f64_u, "i32.trunc_f64_u", op(0xab), ();
    I64ExtendI32S => i64_extend_i32_s, "i64.extend_i32_s", op(0xac), ();
    I64ExtendI32U => i64_extend_i32_u, "i64.extend_i32_u", op(0xad), ();
    I64TruncF32S => i64_trunc_f32_s, "i64.trunc_f32_s", op(0xae), ();
    I64TruncF32U => i64_trunc_f32_u, "i64.trunc_f32_u", op(0xaf), ();
    I64TruncF64S => i64_trunc_f64_s, "i64.trunc_f64_s", op(0xb0), ();
    I64TruncF64U => i64_trunc_f64_u, "i64.trunc_f64_u", op(0xb1), ();
    F32ConvertI32S => f32_convert_i32_s, "f32.convert_i32_s", op(0xb2), ();
    F32ConvertI32U => f32_convert_i32_u, "f32.convert_i32_u", op(0xb3), ();
    F32ConvertI64S => f32_convert_i64_s, "f32.convert_i64_s", op(0xb4), ();
    F32ConvertI64U => f32_convert_i64_u, "f32.convert_i64_u", op(0xb5), ();
    F32DemoteF64 => f32_demote_f64, "f32.demote_f64", op(0xb6), ();
    F64ConvertI32S => f64_convert_i32_s, "f64.convert_i32_s", op(0xb7), ();
    F64ConvertI32U => f64_convert_i32_u, "f64.convert_i32_u", op(0xb8), ();
    F64ConvertI64S => f64_convert_i64_s, "f64.convert_i64_s", op(0xb9), ();
    F64ConvertI64U => f64_convert_i64_u, "f64.convert_i64_u", op(0xba), ();
    F64PromoteF32 => f64_promote_f32, "f64.promote_f32", op(0xbb), ();
    I32ReinterpretF32 => i32_reinterpret_f32, "i32.reinterpret_f32", op(0xbc), ();
    I64ReinterpretF64 => i64_reinterpret_f64, "i64.reinterpret_f64", op(0xbd), ();
    F32ReinterpretI32 => f32_reinterpret_i32, "f32.reinterpret_i32", op(0xbe), ();
    F64ReinterpretI64 => f64_reinterpret_i64, "f64.reinterpret_i64", op(0xbf), ();
    I32Extend8S => i32_extend8_s, "i32.extend8_s", op(0xc0), ();
    I32Extend16S => i32_extend16_s, "i32.extend16_s", op(0xc1), ();
    I64Extend8S => i64_extend8_s, "i64.extend8_s", op(0xc2), ();
    I64Extend16S => i64_extend16_s, "i64.extend16_s", op(0xc3), ();
    I64Extend32S => i64_extend32_s, "i64.extend32_s", op(0xc4), ();
    RefNull => ref_null, "ref.null", op(0xd0), (ty: RefType = RefType);
    RefIsNull => ref_is_null, "ref.is_null", op(0xd1), ();
    RefFunc => ref_func, "ref.func", op(0xd2), (func: FuncIdx = Func);

    I32TruncSatF32S => i32_trunc_sat_f32_s, "i32.trunc_sat_f32_s", misc(0x00), ();
    I32TruncSatF32U => i32_trunc_sat_f32_u, "i32.trunc_sat_f32_u", misc(0x01), ();
    I32TruncSatF64S => i32_trunc_sat_f64_s, "i32.trunc_sat_f64_s", misc(0x02), ();
    I32TruncSatF64U => i32_trunc_sat_f64_u, "i32.trunc_sat_f64_u", misc(0x03), ();
    I64TruncSatF32S => i64_trunc_sat_f32_s, "i64.trunc_sat_f32_s", misc(0x04), ();
    I64TruncSatF32U => i64_trunc_sat_f32_u, "i64.trunc_sat_f32_u", misc(0x05), ();
    I64TruncSatF64S => i64_trunc_sat_f64_s, "i64.trunc_sat_f64_s", misc(0x06), ();
    I64TruncSatF64U => i64_trunc_sat_f64_u, "i64.trunc_sat_f64_u", misc(0x07), ();
    MemoryInit => memory_init, "memory.init", misc(0x08), (data: DataIdx = Data, mem: MemIdx = Mem);
    DataDrop => data_drop, "data.drop", misc(0x09), (data: DataIdx = Data);
    MemoryCopy => memory_copy, "memory.copy", misc(0x0a), (dst: MemIdx = Mem, src: MemIdx = Mem);
    MemoryFill => memory_fill, "memory.fill", misc(0x0b), (mem: MemIdx = Mem);
    TableInit => table_init, "table.init", misc(0x0c), (elem: ElemIdx = Elem, table: TableIdx = Table);
    ElemDrop => elem_drop, "elem.drop", misc(0x0d), (elem: ElemIdx = Elem);
    TableCopy => table_copy, "table.copy", misc(0x0e), (dst: TableIdx = Table, src: TableIdx = Table);
    TableGrow => table_grow, "table.grow", misc(0x0f), (table: TableIdx = Table);
    TableSize => table_size, "table.size", misc(0x10), (table: TableIdx = Table);
    TableFill => table_fill, "table.fill", misc(0x11), (table: TableIdx = Table);

    V128Load => v128_load, "v128.load", simd(0x00), (mem_arg: MemArg = MemArg);
    V128Load8x8S => v128_load8x8_s, "v128.load8x8_s", simd(0x01), (mem_arg: MemArg = MemArg);
    V128Load8x8U => v128_load8x8_u, "v128.load8x8_u", simd(0x02), (mem_arg: MemArg = MemArg);
    V128Load16x4S => v128_load16x4_s, "v128.load16x4_s", simd(0x03), (mem_arg: MemArg = MemArg);
    V128Load16x4U => v128_load16x4_u, "v128.load16x4_u", simd(0x04), (mem_arg: MemArg = MemArg);
    V128Load32x2S => v128_load32x2_s, "v128.load32x2_s", simd(0x05), (mem_arg: MemArg = MemArg);
    V128Load32x2U => v128_load32x2_u, "v128.load32x2_u", simd(0x06), (mem_arg: MemArg = MemArg);
    V128Load8Splat => v128_load8_splat, "v128.load8_splat", simd(0x07), (mem_arg: MemArg = MemArg);
    V128Load16Splat => v128_load16_splat, "v128.load16_splat", simd(0x08), (mem_arg: MemArg = MemArg);
    V128Load32Splat => v128_load32_splat, "v128.load32_splat", simd(0x09), (mem_arg: MemArg = MemArg);
    V128Load64Splat => v128_load64_splat, "v128.load64_splat", simd(0x0a), (mem_arg: MemArg = MemArg);
    V128Store => v128_store, "v128.store", simd(0x0b), (mem_arg: MemArg = MemArg);
    V128Const => v128_const, "v128.const", simd(0x0c), (value: [u8; 16] = V128);
    I8x16Shuffle => i8x16_shuffle, "i8x16.shuffle", simd(0x0d), (lanes: [LaneIdx; 16] = Lanes);
    I8x16Swizzle => i8x16_swizzle, "i8x16.swizzle", simd(0x0e), ();
    I8x16Splat => i8x16_splat, "i8x16.splat", simd(0x0f), ();
    I16x8Splat => i16x8_splat, "i16x8.splat", simd(0x10), ();
    I32x4Splat => i32x4_splat, "i32x4.splat", simd(0x11), ();
    I64x2Splat => i64x2_splat, "i64x2.splat", simd(0x12), ();
    F32x4Splat => f32x4_splat, "f32x4.splat", simd(0x13), ();
    F64x2Splat => f64x2_splat, "f64x2.splat", simd(0x14), ();
    I8x16ExtractLaneS => i8x16_extract_lane_s, "i8x16.extract_lane_s", simd(0x15), (lane: LaneIdx = Lane);
    I8x16ExtractLaneU => i8x16_extract_lane_u, "i8x16.extract_lane_u", simd(0x16), (lane: LaneIdx = Lane);
    I8x16ReplaceLane => i8x16_replace_lane, "i8x16.replace_lane", simd(0x17), (lane: LaneIdx = Lane);
    I16x8ExtractLaneS => i16x8_extract_lane_s, "i16x8.extract_lane_s", simd(0x18), (lane: LaneIdx = Lane);
    I16x8ExtractLaneU => i16x8_extract_lane_u, "i16x8.extract_lane_u", simd(0x19), (lane: LaneIdx = Lane);
    I16x8ReplaceLane => i16x8_replace_lane, "i16x8.replace_lane", simd(0x1a), (lane: LaneIdx = Lane);
    I32x4ExtractLane => i32x4_extract_lane, "i32x4.extract_lane", simd(0x1b), (lane: LaneIdx = Lane);
    I32x4ReplaceLane => i32x4_replace_lane, "i32x4.replace_lane", simd(0x1c), (lane: LaneIdx = Lane);
    I64x2ExtractLane => i64x2_extract_lane, "i64x2.extract_lane", simd(0x1d), (lane: LaneIdx = Lane);
    I64x2ReplaceLane => i64x2_replace_lane, "i64x2.replace_lane", simd(0x1e), (lane: LaneIdx = Lane);
    F32x4ExtractLane => f32x4_extract_lane, "f32x4.extract_lane", simd(0x1f), (lane: LaneIdx = Lane);
    F32x4ReplaceLane => f32x4_replace_lane, "f32x4.replace_lane", simd(0x20), (lane: LaneIdx = Lane);
    F64x2ExtractLane => f64x2_extract_lane, "f64x2.extract_lane", simd(0x21), (lane: LaneIdx = Lane);
    F64x2ReplaceLane => f64x2_replace_lane, "f64x2.replace_lane", simd(0x22), (lane: LaneIdx = Lane);
    I8x16Eq => i8x16_eq, "i8x16.eq", simd(0x23), ();
    I8x16Ne => i8x16_ne, "i8x16.ne", simd(0x24), ();
    I8x16LtS => i8x16_lt_s, "i8x16.lt_s", simd(0x25), ();
    I8x16LtU => i8x16_lt_u, "i8x16.lt_u", simd(0x26), ();
    I8x16GtS => i8x16_gt_s, "i8x16.gt_s", simd(0x27), ();
    I8x16GtU => i8x16_gt_u, "i8x16.gt_u", simd(0x28), ();
    I8x16LeS => i8x16_le_s, "i8x16.le_s", simd(0x29), ();
    I8x16LeU => i8x16_le_u, "i8x16.le_u", simd(0x2a), ();
    I8x16GeS => i8x16_ge_s, "i8x16.ge_s", simd(0x2b), ();
    I8x16GeU => i8x16_ge_u, "i8x16.ge_u", simd(0x2c), ();
    I16x8Eq => i16x8_eq, "i16x8.eq", simd(0x2d), ();
    I16x8Ne => i16x8_ne, "i16x8.ne", simd(0x2e), ();
    I16x8LtS => i16x8_lt_s, "i16x8.lt_s", simd(0x2f), ();
    I16x8LtU => i16x8_lt_u, "i16x8.lt_u", simd(0x30), ();
    I16x8GtS => i16x8_gt_s, "i16x8.gt_s", simd(0x31), ();
    I16x8GtU => i16x8_gt_u, "i16x8.gt_u", simd(0x32), ();
    I16x8LeS => i16x8_le_s, "i16x8.le_s", simd(0x33), ();
    I16x8LeU => i16x8_le_u, "i16x8.le_u", simd(0x34), ();
    I16x8GeS => i16x8_ge_s, "i16x8.ge_s", simd(0x35), ();
    I16x8GeU => i16x8_ge_u, "i16x8.ge_u", simd(0x36), ();
    I32x4Eq => i32x4_eq, "i32x4.eq", simd(0x37), ();
    I32x4Ne => i32x4_ne, "i32x4.ne", simd(0x38), ();
    I32x4LtS => i32x4_lt_s, "i32x4.lt_s", simd(0x39), ();
    I32x4LtU => i32x4_lt_u, "i32x4.lt_u", simd(0x3a), ();
    I32x4GtS => i32x4_gt_s, "i32x4.gt_s", simd(0x3b), ();
    I32x4GtU => i32x4_gt_u, "i32x4.gt_u", simd(0x3c), ();
    I32x4LeS => i32x4_le_s, "i32x4.le_s", simd(0x3d), ();
    I32x4LeU => i32x4_le_u, "i32x4.le_u", simd(0x3e), ();
    I32x4GeS => i32x4_ge_s, "i32x4.ge_s", simd(0x3f), ();
    I32x4GeU => i32x4_ge_u, "i32x4.ge_u", simd(0x40), ();
    F32x4Eq => f32x4_eq, "f32x4.eq", simd(0x41), ();
    F32x4Ne => f32x4_ne, "f32x4.ne", simd(0x42), ();
    F32x4Lt => f32x4_lt, "f32x4.lt", simd(0x43), ();
    F32x4Gt => f32x4_gt, "f32x4.gt", simd(0x44), ();
    F32x4Le => f32x4_le, "f32x4.le", simd(0x45), ();
    F32x4Ge => f32x4_ge, "f32x4.ge", simd(0x46), ();
    F64x2Eq => f64x2_eq, "f64x2.eq", simd(0x47), ();
    F64x2Ne => f64x2_ne, "f64x2.ne", simd(0x48), ();
    F64x2Lt => f64x2_lt, "f64x2.lt", simd(0x49), ();
    F64x2Gt => f64x2_gt, "f64x2.gt", simd(0x4a), ();
    F64x2Le => f64x2_le, "f64x2.le", simd(0x4b), ();
    F64x2Ge => f64x2_ge, "f64x2.ge", simd(0x4c), ();
    V128Not => v128_not, "v128.not", simd(0x4d), ();
    V128And => v128_and, "v128.and", simd(0x4e), ();
    V128Andnot => v128_andnot, "v128.andnot", simd(0x4f), ();
    V128Or => v128_or, "v128.or", simd(0x50), ();
    V128Xor => v128_xor, "v128.xor", simd(0x51), ();
    V128Bitselect => v128_bitselect, "v128.bitselect", simd(0x52), ();
    V128AnyTrue => v128_any_true, "v128.any_true", simd(0x53), ();
    V128Load8Lane => v128_load8_lane, "v128.load8_lane", simd(0x54), (mem_arg: MemArg = MemArg, lane: LaneIdx = Lane);
    V128Load16Lane => v128_load16_lane, "v128.load16_lane", simd(0x55), (mem_arg: MemArg = MemArg, lane: LaneIdx = Lane);
    V128Load32Lane => v128_load32_lane, "v128.load32_lane", simd(0x56), (mem_arg: MemArg = MemArg, lane: LaneIdx = Lane);
    V128Load64Lane => v128_load64_lane, "v128.load64_lane", simd(0x57), (mem_arg: MemArg = MemArg, lane: LaneIdx = Lane);
    V128Store8Lane => v128_store8_lane, "v128.store8_lane", simd(0x58), (mem_arg: MemArg = MemArg, lane: LaneIdx = Lane);
    V128Store16Lane => v128_store16_lane, "v128.store16_lane", simd(0x59), (mem_arg: MemArg = MemArg, lane: LaneIdx = Lane);
    V128Store32Lane => v128_store32_lane, "v128.store32_lane", simd(0x5a), (mem_arg: MemArg = MemArg, lane: LaneIdx = Lane);
    V128Store64Lane => v128_store64_lane, "v128.store64_lane", simd(0x5b), (mem_arg: MemArg = MemArg, lane: LaneIdx = Lane);
    V128Load32Zero => v128_load32_zero, "v128.load32_zero", simd(0x5c), (mem_arg: MemArg = MemArg);
    V128Load64Zero => v128_load64_zero, "v128.load64_zero", simd(0x5d), (mem_arg: MemArg = MemArg);
    F32x4DemoteF64x2Zero => f32x4_demote_f64x2_zero, "f32x4.demote_f64x2_zero", simd(0x5e), ();
    F64x2PromoteLowF32x4 => f64x2_promote_low_f32x4, "f64x2.promote_low_f32x4", simd(0x5f), ();
    I8x16Abs => i8x16_abs, "i8x16.abs", simd(0x60), ();
    I8x16Neg => i8x16_neg, "i8x16.neg", simd(0x61), ();
    I8x16Popcnt => i8x16_popcnt, "i8x16.popcnt", simd(0x62), ();
    I8x16AllTrue => i8x16_all_true, "i8x16.all_true", simd(0x63), ();
    I8x16Bitmask => i8x16_bitmask, "i8x16.bitmask", simd(0x64), ();
    I8x16NarrowI16x8S => i8x16_narrow_i16x8_s, "i8x16.narrow_i16x8_s", simd(0x65), ();
    I8x16NarrowI16x8U => i8x16_narrow_i16x8_u, "i8x16.narrow_i16x8_u", simd(0x66), ();
    F32x4Ceil => f32x4_ceil, "f32x4.ceil", simd(0x67), ();
    F32x4Floor => f32x4_floor, "f32x4.floor", simd(0x68), ();
    F32x4Trunc => f32x4_trunc, "f32x4.trunc", simd(0x69), ();
    F32x4Nearest => f32x4_nearest, "f32x4.nearest", simd(0x6a), ();
    I8x16Shl => i8x16_shl, "i8x16.shl", simd(0x6b), ();
    I8x16ShrS => i8x16_shr_s, "i8x16.shr_s", simd(0x6c), ();
    I8x16ShrU => i8x16_shr_u, "i8x16.shr_u", simd(0x6d), ();
    I8x16Add => i8x16_add, "i8x16.add", simd(0x6e), ();
    I8x16AddSatS => i8x16_add_sat_s, "i8x16.add_sat_s", simd(0x6f), ();
    I8x16AddSatU => i8x16_add_sat_u, "i8x16.add_sat_u", simd(0x70), ();
    I8x16Sub => i8x16_sub, "i8x16.sub", simd(0x71), ();
    I8x16SubSatS => i8x16_sub_sat_s, "i8x16.sub_sat_s", simd(0x72), ();
    I8x16SubSatU => i8x16_sub_sat_u, "i8x16.sub_sat_u", simd(0x73), ();
    F64x2Ceil => f64x2_ceil, "f64x2.ceil", simd(0x74), ();
    F64x2Floor => f64x2_floor, "f64x2.floor", simd(0x75), ();
    I8x16MinS => i8x16_min_s, "i8x16.min_s", simd(0x76), ();
    I8x16MinU => i8x16_min_u, "i8x16.min_u", simd(0x77), ();
    I8x16MaxS => i8x16_max_s, "i8x16.max_s", simd(0x78), ();
    I8x16MaxU => i8x16_max_u, "i8x16.max_u", simd(0x79), ();
    F64x2Trunc => f64x2_trunc, "f64x2.trunc", simd(0x7a), ();
    I8x16AvgrU => i8x16_avgr_u, "i8x16.avgr_u", simd(0x7b), ();
    I16x8ExtaddPairwiseI8x16S => i16x8_extadd_pairwise_i8x16_s, "i16x8.extadd_pairwise_i8x16_s", simd(0x7c), ();
    I16x8ExtaddPairwiseI8x16U => i16x8_extadd_pairwise_i8x16_u, "i16x8.extadd_pairwise_i8x16_u", simd(0x7d), ();
    I32x4ExtaddPairwiseI16x8S => i32x4_extadd_pairwise_i16x8_s, "i32x4.extadd_pairwise_i16x8_s", simd(0x7e), ();
    I32x4ExtaddPairwiseI16x8U => i32x4_extadd_pairwise_i16x8_u, "i32x4.extadd_pairwise_i16x8_u", simd(0x7f), ();
    I16x8Abs => i16x8_abs, "i16x8.abs", simd(0x80), ();
    I16x8Neg => i16x8_neg, "i16x8.neg", simd(0x81), ();
    I16x8Q15mulrSatS => i16x8_q15mulr_sat_s, "i16x8.q15mulr_sat_s", simd(0x82), ();
    I16x8AllTrue => i16x8_all_true, "i16x8.all_true", simd(0x83), ();
    I16x8Bitmask => i16x8_bitmask, "i16x8.bitmask", simd(0x84), ();
    I16x8NarrowI32x4S => i16x8_narrow_i32x4_s, "i16x8.narrow_i32x4_s", simd(0x85), ();
    I16x8NarrowI32x4U => i16x8_narrow_i32x4_u, "i16x8.narrow_i32x4_u", simd(0x86), ();
    I16x8ExtendLowI8x16S => i16x8_extend_low_i8x16_s, "i16x8.extend_low_i8x16_s", simd(0x87), ();
    I16x8ExtendHighI8x16S => i16x8_extend_high_i8x16_s, "i16x8.extend_high_i8x16_s", simd(0x88), ();
    I16x8ExtendLowI8x16U => i16x8_extend_low_i8x16_u, "i16x8.extend_low_i8x16_u", simd(0x89), ();
    I16x8ExtendHighI8x16U => i16x8_extend_high_i8x16_u, "i16x8.extend_high_i8x16_u", simd(0x8a), ();
    I16x8Shl => i16x8_shl, "i16x8.shl", simd(0x8b), ();
    I16x8ShrS => i16x8_shr_s, "i16x8.shr_s", simd(0x8c), ();
    I16x8ShrU => i16x8_shr_u, "i16x8.shr_u", simd(0x8d), ();
    I16x8Add => i16x8_add, "i16x8.add", simd(0x8e), ();
    I16x8AddSatS => i16x8_add_sat_s, "i16x8.add_sat_s", simd(0x8f), ();
    I16x8AddSatU => i16x8_add_sat_u, "i16x8.add_sat_u", simd(0x90), ();
    I16x8Sub => i16x8_sub, "i16x8.sub", simd(0x91), ();
    I16x8SubSatS => i16x8_sub_sat_s, "i16x8.sub_sat_s", simd(0x92), ();
    I16x8SubSatU => i16x8_sub_sat_u, "i16x8.sub_sat_u", simd(0x93), ();
    F64x2Nearest => f64x2_nearest, "f64x2.nearest", simd(0x94), ();
    I16x8Mul => i16x8_mul, "i16x8.mul", simd(0x95), ();
    I16x8MinS => i16x8_min_s, "i16x8.min_s", simd(0x96), ();
    I16x8MinU => i16x8_min_u, "i16x8.min_u", simd(0x97), ();
    I16x8MaxS => i16x8_max_s, "i16x8.max_s", simd(0x98), ();
    I16x8MaxU => i16x8_max_u, "i16x8.max_u", simd(0x99), ();
    I16x8AvgrU => i16x8_avgr_u, "i16x8.avgr_u", simd(0x9b), ();
    I16x8ExtmulLowI8x16S => i16x8_extmul_low_i8x16_s, "i16x8.extmul_low_i8x16_s", simd(0x9c), ();
    I16x8ExtmulHighI8x16S => i16x8_extmul_high_i8x16_s, "i16x8.extmul_high_i8x16_s", simd(0x9d), ();
    I16x8ExtmulLowI8x16U => i16x8_extmul_low_i8x16_u, "i16x8.extmul_low_i8x16_u", simd(0x9e), ();
    I16x8ExtmulHighI8x16U => i16x8_extmul_high_i8x16_u, "i16x8.extmul_high_i8x16_u", simd(0x9f), ();
    I32x4Abs => i32x4_abs, "i32x4.abs", simd(0xa0), ();
    I32x4Neg => i32x4_neg, "i32x4.neg", simd(0xa1), ();
    I32x4AllTrue => i32x4_all_true, "i32x4.all_true", simd(0xa3), ();
    I32x4Bitmask => i32x4_bitmask, "i32x4.bitmask", simd(0xa4), ();
    I32x4ExtendLowI16x8S => i32x4_extend_low_i16x8_s, "i32x4.extend_low_i16x8_s", simd(0xa7), ();
    I32x4ExtendHighI16x8S => i32x4_extend_high_i16x8_s, "i32x4.extend_high_i16x8_s", simd(0xa8), ();
    I32x4ExtendLowI16x8U => i32x4_extend_low_i16x8_u, "i32x4.extend_low_i16x8_u", simd(0xa9), ();
    I32x4ExtendHighI16x8U => i32x4_extend_high_i16x8_u, "i32x4.extend_high_i16x8_u", simd(0xaa), ();
    I32x4Shl => i32x4_shl, "i32x4.shl", simd(0xab), ();
    I32x4ShrS => i32x4_shr_s, "i32x4.shr_s", simd(0xac), ();
    I32x4ShrU => i32x4_shr_u, "i32x4.shr_u", simd(0xad), ();
    I32x4Add => i32x4_add, "i32x4.add", simd(0xae), ();
    I32x4Sub => i32x4_sub, "i32x4.sub", simd(0xb1), ();
    I32x4Mul => i32x4_mul, "i32x4.mul", simd(0xb5), ();
    I32x4MinS => i32x4_min_s, "i32x4.min_s", simd(0xb6), ();
    I32x4MinU => i32x4_min_u, "i32x4.min_u", simd(0xb7), ();
    I32x4MaxS => i32x4_max_s, "i32x4.max_s", simd(0xb8), ();
    I32x4MaxU => i32x4_max_u, "i32x4.max_u", simd(0xb9), ();
    I32x4DotI16x8S => i32x4_dot_i16x8_s, "i32x4.dot_i16x8_s", simd(0xba), ();
    I32x4ExtmulLowI16x8S => i32x4_extmul_low_i16x8_s, "i32x4.extmul_low_i16x8_s", simd(0xbc), ();
    I32x4ExtmulHighI16x8S => i32x4_extmul_high_i16x8_s, "i32x4.extmul_high_i16x8_s", simd(0xbd), ();
    I32x4ExtmulLowI16x8U => i32x4_extmul_low_i16x8_u, "i32x4.extmul_low_i16x8_u", simd(0xbe), ();
    I32x4ExtmulHighI16x8U => i32x4_extmul_high_i16x8_u, "i32x4.extmul_high_i16x8_u", simd(0xbf), ();
    I64x2Abs => i64x2_abs, "i64x2.abs", simd(0xc0), ();
    I64x2Neg => i64x2_neg, "i64x2.neg", simd(0xc1), ();
    I64x2AllTrue => i64x2_all_true, "i64x2.all_true", simd(0xc3), ();
    I64x2Bitmask => i64x2_bitmask, "i64x2.bitmask", simd(0xc4), ();
    I64x2ExtendLowI32x4S => i64x2_extend_low_i32x4_s, "i64x2.extend_low_i32x4_s", simd(0xc7), ();
    I64x2ExtendHighI32x4S => i64x2_extend_high_i32x4_s, "i64x2.extend_high_i32x4_s", simd(0xc8), ();
    I64x2ExtendLowI32x4U => i64x2_extend_low_i32x4_u, "i64x2.extend_low_i32x4_u", simd(0xc9), ();
    I64x2ExtendHighI32x4U => i64x2_extend_high_i32x4_u, "i64x2.extend_high_i32x4_u", simd(0xca), ();
    I64x2Shl => i64x2_shl, "i64x2.shl", simd(0xcb), ();
    I64x2ShrS => i64x2_shr_s, "i64x2.shr_s", simd(0xcc), ();
    I64x2ShrU => i64x2_shr_u, "i64x2.shr_u", simd(0xcd), ();
    I64x2Add => i64x2_add, "i64x2.add", simd(0xce), ();
    I64x2Sub => i64x2_sub, "i64x2.sub", simd(0xd1), ();
    I64x2Mul => i64x2_mul, "i64x2.mul", simd(0xd5), ();
    I64x2Eq => i64x2_eq, "i64x2.eq", simd(0xd6), ();
    I64x2Ne => i64x2_ne, "i64x2.ne", simd(0xd7), ();
    I64x2LtS => i64x2_lt_s, "i64x2.lt_s", simd(0xd8), ();
    I64x2GtS => i64x2_gt_s, "i64x2.gt_s", simd(0xd9), ();
    I64x2LeS => i64x2_le_s, "i64x2.le_s", simd(0xda), ();
    I64x2GeS => i64x2_ge_s, "i64x2.ge_s", simd(0xdb), ();
    I64x2ExtmulLowI32x4S => i64x2_extmul_low_i32x4_s, "i64x2.extmul_low_i32x4_s", simd(0xdc), ();
    I64x2ExtmulHighI32x4S => i64x2_extmul_high_i32x4_s, "i64x2.extmul_high_i32x4_s", simd(0xdd), ();
    I64x2ExtmulLowI32x4U => i64x2_extmul_low_i32x4_u, "i64x2.extmul_low_i32x4_u", simd(0xde), ();
    I64x2ExtmulHighI32x4U => i64x2_extmul_high_i32x4_u, "i64x2.extmul_high_i32x4_u", simd(0xdf), ();
    F32x4Abs => f32x4_abs, "f32x4.abs", simd(0xe0), ();
    F32x4Neg => f32x4_neg, "f32x4.neg", simd(0xe1), ();
    F32x4Sqrt => f32x4_sqrt, "f32x4.sqrt", simd(0xe3), ();
    F32x4Add => f32x4_add, "f32x4.add", simd(0xe4), ();
    F32x4Sub => f32x4_sub, "f32x4.sub", simd(0xe5), ();
    F32x4Mul => f32x4_mul, "f32x4.mul", simd(0xe6), ();
    F32x4Div => f32x4_div, "f32x4.div", simd(0xe7), ();
    F32x4Min => f32x4_min, "f32x4.min", simd(0xe8), ();
    F32x4Max => f32x4_max, "f32x4.max", simd(0xe9), ();
    F32x4Pmin => f32x4_pmin, "f32x4.pmin", simd(0xea), ();
    F32x4Pmax => f32x4_pmax, "f32x4.pmax", simd(0xeb), ();
    F64x2Abs => f64x2_abs, "f64x2.abs", simd(0xec), ();
    F64x2Neg => f64x2_neg, "f64x2.neg", simd(0xed), ();
    F64x2Sqrt => f64x2_sqrt, "f64x2.sqrt", simd(0xef), ();
    F64x2Add => f64x2_add, "f64x2.add", simd(0xf0), ();
    F64x2Sub => f64x2_sub, "f64x2.sub", simd(0xf1), ();
    F64x2Mul => f64x2_mul, "f64x2.mul", simd(0xf2), ();
    F64x2Div => f64x2_div, "f64x2.div", simd(0xf3), ();
    F64x2Min => f64x2_min, "f64x2.min", simd(0xf4), ();
    F64x2Max => f64x2_max, "f64x2.max", simd(0xf5), ();
    F64x2Pmin => f64x2_pmin, "f64x2.pmin", simd(0xf6), ();
    F64x2Pmax => f64x2_pmax, "f64x2.pmax", simd(0xf7), ();
    I32x4TruncSatF32x4S => i32x4_trunc_sat_f32x4_s, "i32x4.trunc_sat_f32x4_s", simd(0xf8), ();
    I32x4TruncSatF32x4U => i32x4_trunc_sat_f32x4_u, "i32x4.trunc_sat_f32x4_u", simd(0xf9), ();
    F32x4ConvertI32x4S => f32x4_convert_i32x4_s, "f32x4.convert_i32x4_s", simd(0xfa), ();
    F32x4ConvertI32x4U => f32x4_convert_i32x4_u, "f32x4.convert_i32x4_u", simd(0xfb), ();
    I32x4TruncSatF64x2SZero => i32x4_trunc_sat_f64x2_s_zero, "i32x4.trunc_sat_f64x2_s_zero", simd(0xfc), ();
    I32x4TruncSatF64x2UZero => i32x4_trunc_sat_f64x2_u_zero, "i32x4.trunc_sat_f64x2_u_zero", simd(0xfd), ();
    F64x2ConvertLowI32x4S => f64x2_convert_low_i32x4_s, "f64x2.convert_low_i32x4_s", simd(0xfe), ();
    F64x2ConvertLowI32x4U => f64x2_convert_low_i32x4_u, "f64x2.convert_low_i32x4_u", simd(0xff), ();
}

lazy_static! {
    static ref BY_NAME: HashMap<&'static str, Op> = {
        let mut by_name = HashMap::with_capacity(Op::ALL.len());
        for &op in Op::ALL {
            // the untyped select comes first and keeps the name
            by_name.entry(op.name()).or_insert(op);
        }
        by_name
    };
}

impl Op {
    /// Looks an instruction up by its text format name.
    pub fn from_name(name: &str) -> Option<Op> {
        BY_NAME.get(name).cloned()
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn opcodes_are_unique() {
        let mut seen = HashSet::new();
        for &op in Op::ALL {
            assert!(seen.insert(op.opcode()), "{} reuses {}", op, op.opcode());
        }
        assert_eq!(Op::ALL.len(), 437);
    }

    #[test]
    fn names_resolve() {
        assert_eq!(Op::from_name("i32.add"), Some(Op::I32Add));
        assert_eq!(Op::from_name("select"), Some(Op::Select));
        assert_eq!(Op::from_name("i8x16.shuffle"), Some(Op::I8x16Shuffle));
        assert_eq!(Op::from_name("i32.frobnicate"), None);
        for &op in Op::ALL {
            if op != Op::SelectTyped {
                assert_eq!(Op::from_name(op.name()), Some(op));
            }
        }
    }

    #[test]
    fn table_entries() {
        assert_eq!(Op::I32Add.opcode(), Opcode::Byte(0x6a));
        assert_eq!(Op::End.opcode(), Opcode::Byte(0x0b));
        assert_eq!(Op::I32Load.immediates(), &[ImmediateKind::MemArg]);
        assert_eq!(
            Op::BrTable.immediates(),
            &[ImmediateKind::Labels, ImmediateKind::Label],
        );
        assert_eq!(
            Op::V128Load8Lane.immediates(),
            &[ImmediateKind::MemArg, ImmediateKind::Lane],
        );
        assert!(Op::Nop.immediates().is_empty());
    }

    #[test]
    fn prefixed_opcodes() {
        assert_eq!(Op::I32TruncSatF32S.opcode().to_bytes(), vec![0xfc, 0x00]);
        assert_eq!(Op::TableFill.opcode().to_bytes(), vec![0xfc, 0x11]);
        assert_eq!(Op::V128Load.opcode().to_bytes(), vec![0xfd, 0x00]);
        // sub-opcodes past 0x7f take two bytes
        assert_eq!(Op::I16x8Abs.opcode().to_bytes(), vec![0xfd, 0x80, 0x01]);
        assert_eq!(Op::F64x2ConvertLowI32x4U.opcode().to_bytes(), vec![0xfd, 0xff, 0x01]);
        assert_eq!(Op::I16x8Abs.opcode().to_string(), "fd 80 01");
    }

    #[test]
    fn immediate_encodings() {
        assert_eq!(Immediate::I32(-1).to_bytes(), vec![0x7f]);
        assert_eq!(Immediate::Labels(vec![LabelIdx(0), LabelIdx(1)]).to_bytes(), vec![0x02, 0x00, 0x01]);
        assert_eq!(Immediate::ValTypes(vec![ValType::F32]).to_bytes(), vec![0x01, 0x7d]);
        assert_eq!(Immediate::Lanes([LaneIdx(3); 16]).to_bytes(), vec![0x03; 16]);
        assert_eq!(Immediate::MemArg(MemArg { align: 2, offset: 4 }).to_bytes(), vec![0x02, 0x04]);
        assert_eq!(Immediate::RefType(RefType::ExternRef).kind(), ImmediateKind::RefType);
    }
}
