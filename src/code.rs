use super::*;

/// An instruction stream: a function body's instructions or an initializer
/// expression.
///
/// Instructions are appended through the per-instruction methods generated
/// from the instruction table, through `instruction`, or as raw bytes through
/// the `Sink` impl. Nothing checks that the stream is well typed or that it
/// ends with `end`.
#[derive(PartialEq, Eq, Clone, Default, Debug)]
pub struct Code {
    bytes: Vec<u8>,
    data_refs: bool,
}

impl Code {
    pub fn new() -> Code {
        Code::default()
    }

    /// Emits `op` with the given immediates after checking them against the
    /// instruction table.
    pub fn instruction(&mut self, op: Op, immediates: &[Immediate]) -> Result<&mut Code, Error> {
        let expected = op.immediates();
        for position in 0..expected.len().max(immediates.len()) {
            let expected = expected.get(position).cloned();
            let found = immediates.get(position).map(Immediate::kind);
            if expected != found {
                return Err(Error::UnsupportedImmediate {
                    instruction: op.name(),
                    position,
                    expected: ImmediateSlot(expected),
                    found: ImmediateSlot(found),
                });
            }
        }
        Ok(self.emit(op, immediates))
    }

    pub(crate) fn emit(&mut self, op: Op, immediates: &[Immediate]) -> &mut Code {
        if op == Op::MemoryInit || op == Op::DataDrop {
            self.data_refs = true;
        }
        op.opcode().encode(self);
        for immediate in immediates {
            immediate.encode(self);
        }
        self
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether `memory.init` or `data.drop` was emitted through the
    /// instruction methods. Raw bytes written through `Sink` are not seen.
    pub fn references_data(&self) -> bool {
        self.data_refs
    }
}

impl Sink for Code {
    fn write_byte(&mut self, b: u8) {
        self.bytes.push(b);
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }
}

impl Encode for Code {
    fn encode(&self, w: &mut dyn Sink) {
        w.write_bytes(&self.bytes);
    }
}

/// A function body: its locals, grouped into runs of equal type, and its
/// instructions.
#[derive(PartialEq, Eq, Clone, Default, Debug)]
pub struct FuncBody {
    pub locals: Vec<Local>,
    pub code: Code,
}

impl FuncBody {
    /// Creates an empty body declaring `locals`, one entry per local.
    pub fn new(locals: &[ValType]) -> FuncBody {
        let mut grouped: Vec<Local> = Vec::new();
        for &val_type in locals {
            match grouped.last_mut() {
                Some(local) if local.val_type == val_type => local.count += 1,
                _ => grouped.push(Local { count: 1, val_type }),
            }
        }
        FuncBody {
            locals: grouped,
            code: Code::new(),
        }
    }

    pub fn with_code(locals: &[ValType], code: Code) -> FuncBody {
        FuncBody {
            code,
            ..FuncBody::new(locals)
        }
    }

    /// Total number of declared locals, not counting parameters.
    pub fn num_locals(&self) -> u32 {
        self.locals.iter().map(|local| local.count).sum()
    }
}

impl Encode for FuncBody {
    fn encode(&self, w: &mut dyn Sink) {
        self.locals.encode(w);
        self.code.encode(w);
    }
}
