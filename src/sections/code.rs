use super::*;

/// Function bodies, one per entry of the function section.
#[derive(Default, Debug, Clone)]
pub struct CodeSection {
    entries: Vec<FuncBody>,
}

struct Framed<'a>(&'a FuncBody);

impl<'a> Encode for Framed<'a> {
    fn encode(&self, w: &mut dyn Sink) {
        let Framed(body) = self;
        w.write_len(ByteCounter::measure(*body));
        body.encode(w);
    }
}

impl CodeSection {
    pub fn new() -> CodeSection {
        CodeSection::default()
    }

    pub fn add(&mut self, body: FuncBody) -> CodeIdx {
        let idx = CodeIdx(self.entries.len() as u32);
        self.entries.push(body);
        idx
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn framed(&self) -> Vec<Framed> {
        self.entries.iter().map(Framed).collect()
    }
}

impl Section for CodeSection {
    fn id(&self) -> SectionId {
        SectionId::Code
    }

    fn content_size(&self) -> usize {
        vector_size(&self.framed())
    }

    fn emit_content(&self, w: &mut dyn Sink) {
        self.framed().encode(w);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bodies_are_length_prefixed() {
        let mut body = FuncBody::new(&[ValType::I32, ValType::I32, ValType::F64]);
        body.code.local_get(LocalIdx(0)).drop().end();

        let mut section = CodeSection::new();
        assert_eq!(section.add(body), CodeIdx(0));

        let mut w: Vec<u8> = Vec::new();
        section.emit_content(&mut w);
        assert_eq!(
            w,
            vec![0x01, 0x09, 0x02, 0x02, 0x7f, 0x01, 0x7c, 0x20, 0x00, 0x1a, 0x0b],
        );
        assert_eq!(section.content_size(), w.len());
    }
}
