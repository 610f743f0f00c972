use super::*;

#[derive(Default, Debug, Clone)]
pub struct TypeSection {
    entries: Vec<FuncType>,
}

impl TypeSection {
    pub fn new() -> TypeSection {
        TypeSection::default()
    }

    pub fn add(&mut self, func_type: FuncType) -> TypeIdx {
        let idx = TypeIdx(self.entries.len() as u32);
        self.entries.push(func_type);
        idx
    }

    pub fn get(&self, idx: TypeIdx) -> Option<&FuncType> {
        let TypeIdx(x) = idx;
        self.entries.get(x as usize)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Section for TypeSection {
    fn id(&self) -> SectionId {
        SectionId::Type
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
    fn indices_follow_declaration_order() {
        let mut section = TypeSection::new();
        assert_eq!(section.content_size(), 0);

        let a = section.add(FuncType { params: vec![], results: vec![ValType::I32] });
        let b = section.add(FuncType { params: vec![ValType::I32, ValType::I32], results: vec![] });
        assert_eq!((a, b), (TypeIdx(0), TypeIdx(1)));
        assert_eq!(section.get(b).map(|ty| ty.params.len()), Some(2));

        let mut w: Vec<u8> = Vec::new();
        section.emit_content(&mut w);
        assert_eq!(w, vec![0x02, 0x60, 0x00, 0x01, 0x7f, 0x60, 0x02, 0x7f, 0x7f, 0x00]);
        assert_eq!(section.content_size(), w.len());
    }
}
