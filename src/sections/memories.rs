use super::*;

#[derive(Default, Debug, Clone)]
pub struct MemorySection {
    entries: Vec<MemType>,
}

impl MemorySection {
    pub fn new() -> MemorySection {
        MemorySection::default()
    }

    pub fn add(&mut self, mem_type: MemType) -> u32 {
        let ordinal = self.entries.len() as u32;
        self.entries.push(mem_type);
        ordinal
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Section for MemorySection {
    fn id(&self) -> SectionId {
        SectionId::Memory
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
    fn memory_entries() {
        let mut section = MemorySection::new();
        assert_eq!(section.content_size(), 0);
        assert_eq!(section.add(MemType { limits: Limits::unbounded(1) }), 0);
        assert_eq!(section.add(MemType { limits: Limits::bounded(2, 300) }), 1);

        let mut w: Vec<u8> = Vec::new();
        section.emit_content(&mut w);
        assert_eq!(w, vec![0x02, 0x00, 0x01, 0x01, 0x02, 0xac, 0x02]);
        assert_eq!(section.content_size(), w.len());
    }
}
