use super::*;

pub const MAGIC: [u8; 4] = [0x00, 0x61, 0x73, 0x6d];
pub const VERSION: [u8; 4] = [0x01, 0x00, 0x00, 0x00];

#[derive(PartialEq, Eq, Clone, Copy, Debug, PartialOrd, Ord)]
pub enum SectionId {
    Custom,
    Type,
    Import,
    Function,
    Table,
    Memory,
    Global,
    Export,
    Start,
    Element,
    Code,
    Data,
    DataCount,
}

impl SectionId {
    pub fn byte(self) -> u8 {
        match self {
            SectionId::Custom => 0,
            SectionId::Type => 1,
            SectionId::Import => 2,
            SectionId::Function => 3,
            SectionId::Table => 4,
            SectionId::Memory => 5,
            SectionId::Global => 6,
            SectionId::Export => 7,
            SectionId::Start => 8,
            SectionId::Element => 9,
            SectionId::Code => 10,
            SectionId::Data => 11,
            SectionId::DataCount => 12,
        }
    }
}

/// One section of a module.
///
/// `content_size` must equal the number of bytes `emit_content` writes. A
/// section reporting zero bytes is left out of the module entirely.
pub trait Section {
    fn id(&self) -> SectionId;

    fn content_size(&self) -> usize;

    fn emit_content(&self, w: &mut dyn Sink);
}

/// Content size of a section made of a vector of entries, or 0 when there
/// are no entries.
pub fn vector_size<T: Encode>(entries: &[T]) -> usize {
    if entries.is_empty() {
        return 0;
    }
    ByteCounter::measure(entries)
}

pub fn write_section(w: &mut dyn Sink, section: &dyn Section) {
    let size = section.content_size();
    if size == 0 {
        trace!("skipping empty {:?} section", section.id());
        return;
    }
    trace!("writing {:?} section, {} bytes", section.id(), size);
    w.write_byte(section.id().byte());
    w.write_len(size);
    section.emit_content(w);
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Raw(Vec<u8>);

    impl Section for Raw {
        fn id(&self) -> SectionId {
            SectionId::Custom
        }

        fn content_size(&self) -> usize {
            self.0.len()
        }

        fn emit_content(&self, w: &mut dyn Sink) {
            w.write_bytes(&self.0);
        }
    }

    #[test]
    fn ids_are_ordered() {
        assert_eq!(SectionId::Type.byte(), 1);
        assert_eq!(SectionId::Data.byte(), 11);
        assert_eq!(SectionId::DataCount.byte(), 12);
        assert!(SectionId::Global < SectionId::Export);
    }

    #[test]
    fn empty_section_is_omitted() {
        let mut w: Vec<u8> = Vec::new();
        write_section(&mut w, &Raw(Vec::new()));
        assert!(w.is_empty());
    }

    #[test]
    fn section_framing() {
        let mut w: Vec<u8> = Vec::new();
        write_section(&mut w, &Raw(vec![0xaa; 130]));
        assert_eq!(&w[..3], &[0x00, 0x82, 0x01]);
        assert_eq!(w.len(), 3 + 130);
    }
}
