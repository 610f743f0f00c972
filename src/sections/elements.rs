use super::*;

/// An active element segment initializing `table` with function references.
#[derive(Debug, Clone)]
pub struct ElementSegment {
    pub table: TableIdx,
    /// Offset expression, already terminated by `end`.
    pub offset: Code,
    pub funcs: Vec<FuncIdx>,
}

impl Encode for ElementSegment {
    fn encode(&self, w: &mut dyn Sink) {
        match self.table {
            TableIdx(0) => {
                w.write_u32(0x00);
                self.offset.encode(w);
                self.funcs.encode(w);
            },
            table => {
                w.write_u32(0x02);
                table.encode(w);
                self.offset.encode(w);
                // elemkind funcref
                w.write_byte(0x00);
                self.funcs.encode(w);
            },
        }
    }
}

#[derive(Default, Debug, Clone)]
pub struct ElementSection {
    entries: Vec<ElementSegment>,
}

impl ElementSection {
    pub fn new() -> ElementSection {
        ElementSection::default()
    }

    pub fn add(&mut self, segment: ElementSegment) -> ElemIdx {
        let idx = ElemIdx(self.entries.len() as u32);
        self.entries.push(segment);
        idx
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Section for ElementSection {
    fn id(&self) -> SectionId {
        SectionId::Element
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

    fn offset(x: i32) -> Code {
        let mut code = Code::new();
        code.i32_const(x).end();
        code
    }

    #[test]
    fn segment_layouts() {
        let mut section = ElementSection::new();
        section.add(ElementSegment {
            table: TableIdx(0),
            offset: offset(1),
            funcs: vec![FuncIdx(0), FuncIdx(2)],
        });
        section.add(ElementSegment {
            table: TableIdx(1),
            offset: offset(0),
            funcs: vec![FuncIdx(3)],
        });

        let mut w: Vec<u8> = Vec::new();
        section.emit_content(&mut w);
        assert_eq!(
            w,
            vec![
                0x02,
                0x00, 0x41, 0x01, 0x0b, 0x02, 0x00, 0x02,
                0x02, 0x01, 0x41, 0x00, 0x0b, 0x00, 0x01, 0x03,
            ],
        );
        assert_eq!(section.content_size(), w.len());
    }
}
