use super::*;

/// Holds at most one function. Unlike the other sections its content is a
/// single index, not a vector.
#[derive(Default, Debug, Clone)]
pub struct StartSection {
    func: Option<FuncIdx>,
}

impl StartSection {
    pub fn new() -> StartSection {
        StartSection::default()
    }

    /// Sets the start function, returning the one it replaces.
    pub fn set(&mut self, func: FuncIdx) -> Option<FuncIdx> {
        self.func.replace(func)
    }

    pub fn get(&self) -> Option<FuncIdx> {
        self.func
    }
}

impl Section for StartSection {
    fn id(&self) -> SectionId {
        SectionId::Start
    }

    fn content_size(&self) -> usize {
        match self.func {
            Some(ref func) => ByteCounter::measure(func),
            None => 0,
        }
    }

    fn emit_content(&self, w: &mut dyn Sink) {
        if let Some(ref func) = self.func {
            func.encode(w);
        }
    }
}
