use super::*;

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Export {
    pub name: String,
    pub kind: ExportKind,
    pub index: u32,
}

impl Encode for Export {
    fn encode(&self, w: &mut dyn Sink) {
        self.name.encode(w);
        self.kind.encode(w);
        w.write_index(self.index);
    }
}

/// Exports are recorded as given. Names are not checked for uniqueness and
/// indices are not checked against their space.
#[derive(Default, Debug, Clone)]
pub struct ExportSection {
    entries: Vec<Export>,
}

impl ExportSection {
    pub fn new() -> ExportSection {
        ExportSection::default()
    }

    pub fn add(&mut self, name: &str, kind: ExportKind, index: u32) -> ExportIdx {
        let idx = ExportIdx(self.entries.len() as u32);
        self.entries.push(Export {
            name: name.to_owned(),
            kind,
            index,
        });
        idx
    }

    pub fn get(&self, idx: ExportIdx) -> Option<&Export> {
        let ExportIdx(x) = idx;
        self.entries.get(x as usize)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Section for ExportSection {
    fn id(&self) -> SectionId {
        SectionId::Export
    }

    fn content_size(&self) -> usize {
        vector_size(&self.entries)
    }

    fn emit_content(&self, w: &mut dyn Sink) {
        self.entries.encode(w);
    }
}
