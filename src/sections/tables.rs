use super::*;

#[derive(Default, Debug, Clone)]
pub struct TableSection {
    entries: Vec<TableType>,
}

impl TableSection {
    pub fn new() -> TableSection {
        TableSection::default()
    }

    pub fn add(&mut self, table_type: TableType) -> u32 {
        let ordinal = self.entries.len() as u32;
        self.entries.push(table_type);
        ordinal
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Section for TableSection {
    fn id(&self) -> SectionId {
        SectionId::Table
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
    fn table_entries() {
        let mut section = TableSection::new();
        section.add(TableType { elem: RefType::FuncRef, limits: Limits::unbounded(4) });
        section.add(TableType { elem: RefType::ExternRef, limits: Limits::bounded(0, 1) });

        let mut w: Vec<u8> = Vec::new();
        section.emit_content(&mut w);
        assert_eq!(w, vec![0x02, 0x70, 0x00, 0x04, 0x6f, 0x01, 0x00, 0x01]);
    }
}
