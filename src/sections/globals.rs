use super::*;

#[derive(Debug, Clone)]
pub struct Global {
    pub global_type: GlobalType,
    /// Initializer expression, already terminated by `end`.
    pub init: Code,
}

impl Encode for Global {
    fn encode(&self, w: &mut dyn Sink) {
        self.global_type.encode(w);
        self.init.encode(w);
    }
}

#[derive(Default, Debug, Clone)]
pub struct GlobalSection {
    entries: Vec<Global>,
}

impl GlobalSection {
    pub fn new() -> GlobalSection {
        GlobalSection::default()
    }

    pub fn add(&mut self, global: Global) -> u32 {
        let ordinal = self.entries.len() as u32;
        self.entries.push(global);
        ordinal
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Section for GlobalSection {
    fn id(&self) -> SectionId {
        SectionId::Global
    }

    fn content_size(&self) -> usize {
        vector_size(&self.entries)
    }

    fn emit_content(&self, w: &mut dyn Sink) {
        self.entries.encode(w);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn global_entry() {
        let mut init = Code::new();
        init.i64_const(-1).end();

        let mut section = GlobalSection::new();
        section.add(Global {
            global_type: GlobalType { val_type: ValType::I64, mutable: true },
            init,
        });

        let mut w: Vec<u8> = Vec::new();
        section.emit_content(&mut w);
        assert_eq!(w, vec![0x01, 0x7e, 0x01, 0x42, 0x7f, 0x0b]);
        assert_eq!(section.content_size(), w.len());
    }
}
