use super::*;

#[derive(Debug, Clone)]
pub enum DataMode {
    Passive,
    Active {
        mem: MemIdx,
        /// Offset expression, already terminated by `end`.
        offset: Code,
    },
}

#[derive(Debug, Clone)]
pub struct DataSegment {
    pub mode: DataMode,
    pub bytes: Vec<u8>,
}

impl Encode for DataSegment {
    fn encode(&self, w: &mut dyn Sink) {
        match self.mode {
            DataMode::Active { mem: MemIdx(0), ref offset } => {
                w.write_u32(0x00);
                offset.encode(w);
            },
            DataMode::Passive => {
                w.write_u32(0x01);
            },
            DataMode::Active { mem, ref offset } => {
                w.write_u32(0x02);
                mem.encode(w);
                offset.encode(w);
            },
        }
        self.bytes.encode(w);
    }
}

#[derive(Default, Debug, Clone)]
pub struct DataSection {
    entries: Vec<DataSegment>,
}

impl DataSection {
    pub fn new() -> DataSection {
        DataSection::default()
    }

    pub fn add(&mut self, segment: DataSegment) -> DataIdx {
        let idx = DataIdx(self.entries.len() as u32);
        self.entries.push(segment);
        idx
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_passive(&self) -> bool {
        self.entries.iter().any(|segment| match segment.mode {
            DataMode::Passive => true,
            DataMode::Active { .. } => false,
        })
    }
}

impl Section for DataSection {
    fn id(&self) -> SectionId {
        SectionId::Data
    }

    fn content_size(&self) -> usize {
        vector_size(&self.entries)
    }

    fn emit_content(&self, w: &mut dyn Sink) {
        self.entries.encode(w);
    }
}
