use super::*;

/// Type indices of the locally defined functions, in definition order.
#[derive(Default, Debug, Clone)]
pub struct FunctionSection {
    entries: Vec<TypeIdx>,
}

impl FunctionSection {
    pub fn new() -> FunctionSection {
        FunctionSection::default()
    }

    /// Appends an entry and returns its ordinal among local functions.
    pub fn add(&mut self, type_idx: TypeIdx) -> u32 {
        let ordinal = self.entries.len() as u32;
        self.entries.push(type_idx);
        ordinal
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Section for FunctionSection {
    fn id(&self) -> SectionId {
        SectionId::Function
    }

    fn content_size(&self) -> usize {
        vector_size(&self.entries)
    }

    fn emit_content(&self, w: &mut dyn Sink) {
        self.entries.encode(w);
    }
}
