use super::*;

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum ImportDesc {
    Func(TypeIdx),
    Table(TableType),
    Mem(MemType),
    Global(GlobalType),
}

impl ImportDesc {
    pub fn space(&self) -> IndexSpace {
        match self {
            ImportDesc::Func(..) => IndexSpace::Func,
            ImportDesc::Table(..) => IndexSpace::Table,
            ImportDesc::Mem(..) => IndexSpace::Mem,
            ImportDesc::Global(..) => IndexSpace::Global,
        }
    }
}

impl Encode for ImportDesc {
    fn encode(&self, w: &mut dyn Sink) {
        match self {
            ImportDesc::Func(type_idx) => {
                w.write_byte(0x00);
                type_idx.encode(w);
            },
            ImportDesc::Table(table_type) => {
                w.write_byte(0x01);
                table_type.encode(w);
            },
            ImportDesc::Mem(mem_type) => {
                w.write_byte(0x02);
                mem_type.encode(w);
            },
            ImportDesc::Global(global_type) => {
                w.write_byte(0x03);
                global_type.encode(w);
            },
        }
    }
}

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Import {
    pub module: String,
    pub field: String,
    pub desc: ImportDesc,
}

impl Encode for Import {
    fn encode(&self, w: &mut dyn Sink) {
        self.module.encode(w);
        self.field.encode(w);
        self.desc.encode(w);
    }
}

/// The import section, which also owns the numbering of the four shared
/// index spaces.
///
/// Imports take the low indices of their space. Once the section is frozen
/// no import can be added, so indices handed out for local definitions can
/// never be shifted by a later import.
#[derive(Default, Debug, Clone)]
pub struct ImportSection {
    entries: Vec<Import>,
    num_funcs: u32,
    num_tables: u32,
    num_mems: u32,
    num_globals: u32,
    frozen: bool,
}

impl ImportSection {
    pub fn new() -> ImportSection {
        ImportSection::default()
    }

    pub fn add_function(&mut self, module: &str, field: &str, type_idx: TypeIdx) -> Result<FuncIdx, Error> {
        let x = self.push(module, field, ImportDesc::Func(type_idx))?;
        Ok(FuncIdx(x))
    }

    pub fn add_table(&mut self, module: &str, field: &str, table_type: TableType) -> Result<TableIdx, Error> {
        let x = self.push(module, field, ImportDesc::Table(table_type))?;
        Ok(TableIdx(x))
    }

    pub fn add_memory(&mut self, module: &str, field: &str, mem_type: MemType) -> Result<MemIdx, Error> {
        let x = self.push(module, field, ImportDesc::Mem(mem_type))?;
        Ok(MemIdx(x))
    }

    pub fn add_global(&mut self, module: &str, field: &str, global_type: GlobalType) -> Result<GlobalIdx, Error> {
        let x = self.push(module, field, ImportDesc::Global(global_type))?;
        Ok(GlobalIdx(x))
    }

    fn push(&mut self, module: &str, field: &str, desc: ImportDesc) -> Result<u32, Error> {
        let space = desc.space();
        if self.frozen {
            return Err(Error::FrozenIndexSpace {
                space,
                module: module.to_owned(),
                field: field.to_owned(),
            });
        }

        let counter = match space {
            IndexSpace::Func => &mut self.num_funcs,
            IndexSpace::Table => &mut self.num_tables,
            IndexSpace::Mem => &mut self.num_mems,
            IndexSpace::Global => &mut self.num_globals,
        };
        let x = *counter;
        *counter += 1;

        trace!("import {}.{} is {} {}", module, field, space, x);
        self.entries.push(Import {
            module: module.to_owned(),
            field: field.to_owned(),
            desc,
        });
        Ok(x)
    }

    pub fn freeze(&mut self) {
        if !self.frozen {
            debug!("freezing imports with {} entries", self.entries.len());
            self.frozen = true;
        }
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Number of imports in `space`, which is also the first index a local
    /// definition in that space receives.
    pub fn count(&self, space: IndexSpace) -> u32 {
        match space {
            IndexSpace::Func => self.num_funcs,
            IndexSpace::Table => self.num_tables,
            IndexSpace::Mem => self.num_mems,
            IndexSpace::Global => self.num_globals,
        }
    }

    pub fn entries(&self) -> &[Import] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Section for ImportSection {
    fn id(&self) -> SectionId {
        SectionId::Import
    }

    fn content_size(&self) -> usize {
        vector_size(&self.entries)
    }

    fn emit_content(&self, w: &mut dyn Sink) {
        self.entries.encode(w);
    }
}
