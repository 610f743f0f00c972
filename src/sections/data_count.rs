use super::*;

/// Announces the number of data segments ahead of the code section. Only
/// written when a segment is passive or a body uses `memory.init` or
/// `data.drop`, so plain modules keep the original section layout.
#[derive(Default, Debug, Clone)]
pub struct DataCountSection {
    count: Option<u32>,
}

impl DataCountSection {
    pub fn new() -> DataCountSection {
        DataCountSection::default()
    }

    pub fn set(&mut self, count: u32) {
        self.count = Some(count);
    }

    pub fn get(&self) -> Option<u32> {
        self.count
    }
}

impl Section for DataCountSection {
    fn id(&self) -> SectionId {
        SectionId::DataCount
    }

    fn content_size(&self) -> usize {
        match self.count {
            Some(count) => leb128::unsigned_size(u64::from(count)),
            None => 0,
        }
    }

    fn emit_content(&self, w: &mut dyn Sink) {
        if let Some(count) = self.count {
            w.write_u32(count);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unset_count_is_omitted() {
        let section = DataCountSection::new();
        assert_eq!(section.content_size(), 0);

        let mut w: Vec<u8> = Vec::new();
        write_section(&mut w, &section);
        assert!(w.is_empty());
    }

    #[test]
    fn zero_segments_are_still_announced() {
        let mut section = DataCountSection::new();
        section.set(0);

        let mut w: Vec<u8> = Vec::new();
        write_section(&mut w, &section);
        assert_eq!(w, vec![0x0c, 0x01, 0x00]);
    }

    #[test]
    fn count_layout() {
        let mut section = DataCountSection::new();
        section.set(200);
        assert_eq!(section.get(), Some(200));

        let mut w: Vec<u8> = Vec::new();
        section.emit_content(&mut w);
        assert_eq!(w, vec![0xc8, 0x01]);
        assert_eq!(section.content_size(), w.len());
    }
}
