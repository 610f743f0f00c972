use super::*;

pub trait Encode {
    fn encode(&self, w: &mut dyn Sink);

    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes: Vec<u8> = Vec::new();
        self.encode(&mut bytes);
        bytes
    }
}

impl<T: Encode> Encode for [T] {
    fn encode(&self, w: &mut dyn Sink) {
        w.write_len(self.len());
        for val in self {
            val.encode(w);
        }
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, w: &mut dyn Sink) {
        self[..].encode(w);
    }
}

impl Encode for str {
    fn encode(&self, w: &mut dyn Sink) {
        w.write_name(self);
    }
}

impl Encode for String {
    fn encode(&self, w: &mut dyn Sink) {
        w.write_name(self);
    }
}

impl Encode for u8 {
    fn encode(&self, w: &mut dyn Sink) {
        w.write_byte(*self);
    }
}

impl Encode for u32 {
    fn encode(&self, w: &mut dyn Sink) {
        w.write_u32(*self);
    }
}

impl Encode for u64 {
    fn encode(&self, w: &mut dyn Sink) {
        w.write_u64(*self);
    }
}

impl Encode for i32 {
    fn encode(&self, w: &mut dyn Sink) {
        w.write_i32(*self);
    }
}

impl Encode for i64 {
    fn encode(&self, w: &mut dyn Sink) {
        w.write_i64(*self);
    }
}

impl Encode for f32 {
    fn encode(&self, w: &mut dyn Sink) {
        w.write_f32(*self);
    }
}

impl Encode for f64 {
    fn encode(&self, w: &mut dyn Sink) {
        w.write_f64(*self);
    }
}

impl Encode for bool {
    fn encode(&self, w: &mut dyn Sink) {
        w.write_bool(*self);
    }
}

impl Encode for ValType {
    fn encode(&self, w: &mut dyn Sink) {
        w.write_byte(self.byte());
    }
}

impl Encode for RefType {
    fn encode(&self, w: &mut dyn Sink) {
        w.write_byte(self.byte());
    }
}

impl Encode for FuncType {
    fn encode(&self, w: &mut dyn Sink) {
        w.write_byte(0x60);
        self.params.encode(w);
        self.results.encode(w);
    }
}

impl Encode for Limits {
    fn encode(&self, w: &mut dyn Sink) {
        match self.max {
            None => {
                w.write_byte(0x00);
                self.min.encode(w);
            },
            Some(max) => {
                w.write_byte(0x01);
                self.min.encode(w);
                max.encode(w);
            },
        }
    }
}

impl Encode for TableType {
    fn encode(&self, w: &mut dyn Sink) {
        self.elem.encode(w);
        self.limits.encode(w);
    }
}

impl Encode for MemType {
    fn encode(&self, w: &mut dyn Sink) {
        self.limits.encode(w);
    }
}

impl Encode for GlobalType {
    fn encode(&self, w: &mut dyn Sink) {
        self.val_type.encode(w);
        w.write_bool(self.mutable);
    }
}

impl Encode for MemArg {
    fn encode(&self, w: &mut dyn Sink) {
        w.write_mem_arg(self.align, self.offset);
    }
}

impl Encode for BlockType {
    fn encode(&self, w: &mut dyn Sink) {
        match self {
            BlockType::Empty => w.write_byte(0x40),
            BlockType::Value(val_type) => val_type.encode(w),
            // type indices are encoded as positive 33-bit signed integers
            BlockType::Type(TypeIdx(x)) => w.write_i64(i64::from(*x)),
        }
    }
}

impl Encode for ExportKind {
    fn encode(&self, w: &mut dyn Sink) {
        w.write_byte(self.byte());
    }
}

impl Encode for Local {
    fn encode(&self, w: &mut dyn Sink) {
        self.count.encode(w);
        self.val_type.encode(w);
    }
}

impl Encode for TypeIdx {
    fn encode(&self, w: &mut dyn Sink) {
        let TypeIdx(x) = self;
        w.write_index(*x);
    }
}

impl Encode for FuncIdx {
    fn encode(&self, w: &mut dyn Sink) {
        let FuncIdx(x) = self;
        w.write_index(*x);
    }
}

impl Encode for TableIdx {
    fn encode(&self, w: &mut dyn Sink) {
        let TableIdx(x) = self;
        w.write_index(*x);
    }
}

impl Encode for MemIdx {
    fn encode(&self, w: &mut dyn Sink) {
        let MemIdx(x) = self;
        w.write_index(*x);
    }
}

impl Encode for GlobalIdx {
    fn encode(&self, w: &mut dyn Sink) {
        let GlobalIdx(x) = self;
        w.write_index(*x);
    }
}

impl Encode for LocalIdx {
    fn encode(&self, w: &mut dyn Sink) {
        let LocalIdx(x) = self;
        w.write_index(*x);
    }
}

impl Encode for LabelIdx {
    fn encode(&self, w: &mut dyn Sink) {
        let LabelIdx(x) = self;
        w.write_index(*x);
    }
}

impl Encode for LaneIdx {
    fn encode(&self, w: &mut dyn Sink) {
        let LaneIdx(x) = self;
        w.write_index(*x);
    }
}

impl Encode for ElemIdx {
    fn encode(&self, w: &mut dyn Sink) {
        let ElemIdx(x) = self;
        w.write_index(*x);
    }
}

impl Encode for DataIdx {
    fn encode(&self, w: &mut dyn Sink) {
        let DataIdx(x) = self;
        w.write_index(*x);
    }
}

impl Encode for ExportIdx {
    fn encode(&self, w: &mut dyn Sink) {
        let ExportIdx(x) = self;
        w.write_index(*x);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn floats_are_little_endian_bit_patterns() {
        assert_eq!(1.0f32.to_bytes(), vec![0x00, 0x00, 0x80, 0x3f]);
        assert_eq!(
            (-2.5f64).to_bytes(),
            vec![0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0xc0],
        );

        let nan = f32::from_bits(0x7fc0_0001);
        assert_eq!(nan.to_bytes(), vec![0x01, 0x00, 0xc0, 0x7f]);
    }

    #[test]
    fn names_are_length_prefixed_without_terminator() {
        assert_eq!("_start".to_bytes(), b"\x06_start".to_vec());
        assert_eq!("".to_bytes(), vec![0x00]);

        // length counts bytes, not chars
        assert_eq!("é".to_bytes(), vec![0x02, 0xc3, 0xa9]);
    }

    #[test]
    fn vectors_prefix_their_count() {
        let xs: Vec<u32> = vec![1, 200, 3];
        assert_eq!(xs.to_bytes(), vec![0x03, 0x01, 0xc8, 0x01, 0x03]);

        let empty: Vec<i32> = Vec::new();
        assert_eq!(empty.to_bytes(), vec![0x00]);
    }

    #[test]
    fn value_type_bytes() {
        let types = [
            ValType::I32,
            ValType::I64,
            ValType::F32,
            ValType::F64,
            ValType::V128,
            ValType::FuncRef,
            ValType::ExternRef,
        ];
        assert_eq!(types.to_vec().to_bytes(), vec![0x07, 0x7f, 0x7e, 0x7d, 0x7c, 0x7b, 0x70, 0x6f]);
        assert_eq!(ValType::from(RefType::ExternRef).byte(), RefType::ExternRef.byte());
    }

    #[test]
    fn func_type() {
        let ty = FuncType {
            params: vec![ValType::I32, ValType::I64],
            results: vec![ValType::F64],
        };
        assert_eq!(ty.to_bytes(), vec![0x60, 0x02, 0x7f, 0x7e, 0x01, 0x7c]);
    }

    #[test]
    fn limits() {
        assert_eq!(Limits::unbounded(1).to_bytes(), vec![0x00, 0x01]);
        assert_eq!(Limits::bounded(1, 65536).to_bytes(), vec![0x01, 0x01, 0x80, 0x80, 0x04]);
        let table = TableType {
            elem: RefType::FuncRef,
            limits: Limits::bounded(2, 2),
        };
        assert_eq!(table.to_bytes(), vec![0x70, 0x01, 0x02, 0x02]);
    }

    #[test]
    fn global_type() {
        let global = GlobalType {
            val_type: ValType::I64,
            mutable: true,
        };
        assert_eq!(global.to_bytes(), vec![0x7e, 0x01]);
    }

    #[test]
    fn block_types() {
        assert_eq!(BlockType::Empty.to_bytes(), vec![0x40]);
        assert_eq!(BlockType::Value(ValType::I32).to_bytes(), vec![0x7f]);
        assert_eq!(BlockType::Type(TypeIdx(3)).to_bytes(), vec![0x03]);
        // 64 needs a second byte so it is not read back as a negative number
        assert_eq!(BlockType::Type(TypeIdx(64)).to_bytes(), vec![0xc0, 0x00]);
    }

    #[test]
    fn indices_are_unsigned_leb128() {
        assert_eq!(FuncIdx(0).to_bytes(), vec![0x00]);
        assert_eq!(GlobalIdx(127).to_bytes(), vec![0x7f]);
        assert_eq!(LocalIdx(128).to_bytes(), vec![0x80, 0x01]);
        assert_eq!(TypeIdx(u32::max_value()).to_bytes(), vec![0xff, 0xff, 0xff, 0xff, 0x0f]);
    }
}
