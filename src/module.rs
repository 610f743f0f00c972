use super::*;
use crate::sections::*;

/// A module under construction.
///
/// Entities are added through the `declare_*`, `import_*`, `export_*` and
/// `add_*` methods, each returning the index the entity received. Imports
/// must all be added before the first local function, table, memory or
/// global. `serialize` can be called at any point and any number of times.
#[derive(Default, Debug, Clone)]
pub struct Module {
    types: TypeSection,
    imports: ImportSection,
    functions: FunctionSection,
    tables: TableSection,
    memories: MemorySection,
    globals: GlobalSection,
    exports: ExportSection,
    start: StartSection,
    elements: ElementSection,
    code: CodeSection,
    data: DataSection,
    data_refs: bool,
}

impl Module {
    pub fn new() -> Module {
        Module::default()
    }

    pub fn declare_type(&mut self, params: &[ValType], results: &[ValType]) -> TypeIdx {
        let idx = self.types.add(FuncType {
            params: params.to_vec(),
            results: results.to_vec(),
        });
        trace!("declared {:?}: {:?} -> {:?}", idx, params, results);
        idx
    }

    pub fn func_type(&self, idx: TypeIdx) -> Option<&FuncType> {
        self.types.get(idx)
    }

    pub fn import_function(&mut self, module: &str, field: &str, type_idx: TypeIdx) -> Result<FuncIdx, Error> {
        self.imports.add_function(module, field, type_idx)
    }

    pub fn import_table(&mut self, module: &str, field: &str, table_type: TableType) -> Result<TableIdx, Error> {
        self.imports.add_table(module, field, table_type)
    }

    pub fn import_memory(&mut self, module: &str, field: &str, mem_type: MemType) -> Result<MemIdx, Error> {
        self.imports.add_memory(module, field, mem_type)
    }

    pub fn import_global(&mut self, module: &str, field: &str, global_type: GlobalType) -> Result<GlobalIdx, Error> {
        self.imports.add_global(module, field, global_type)
    }

    /// Closes the import section. Called implicitly by the first local
    /// definition.
    pub fn freeze_imports(&mut self) {
        self.imports.freeze();
    }

    pub fn declare_function(&mut self, type_idx: TypeIdx) -> FuncIdx {
        self.imports.freeze();
        let ordinal = self.functions.add(type_idx);
        let idx = FuncIdx(self.imports.count(IndexSpace::Func) + ordinal);
        trace!("declared {:?} with {:?}", idx, type_idx);
        idx
    }

    pub fn declare_table(&mut self, table_type: TableType) -> TableIdx {
        self.imports.freeze();
        let ordinal = self.tables.add(table_type);
        let idx = TableIdx(self.imports.count(IndexSpace::Table) + ordinal);
        trace!("declared {:?}: {:?}", idx, table_type);
        idx
    }

    pub fn declare_memory(&mut self, mem_type: MemType) -> MemIdx {
        self.imports.freeze();
        let ordinal = self.memories.add(mem_type);
        let idx = MemIdx(self.imports.count(IndexSpace::Mem) + ordinal);
        trace!("declared {:?}: {:?}", idx, mem_type);
        idx
    }

    /// `init` is the initializer expression, including its final `end`.
    pub fn declare_global(&mut self, global_type: GlobalType, init: &Code) -> GlobalIdx {
        self.imports.freeze();
        let ordinal = self.globals.add(Global {
            global_type,
            init: init.clone(),
        });
        let idx = GlobalIdx(self.imports.count(IndexSpace::Global) + ordinal);
        trace!("declared {:?}: {:?}", idx, global_type);
        idx
    }

    /// Appends a body to the code section without touching the function
    /// section. Prefer `finalize_function`, which keeps the two aligned.
    pub fn add_code(&mut self, body: &FuncBody) -> CodeIdx {
        self.data_refs |= body.code.references_data();
        let idx = self.code.add(body.clone());
        trace!("added {:?}, {} bytes of instructions", idx, body.code.len());
        idx
    }

    /// Declares a function together with its body.
    ///
    /// Fails without modifying the module if the function and code sections
    /// were already out of step.
    pub fn finalize_function(&mut self, type_idx: TypeIdx, body: &FuncBody) -> Result<FuncIdx, Error> {
        self.check()?;
        let FuncIdx(func) = self.declare_function(type_idx);
        let CodeIdx(code) = self.add_code(body);
        debug_assert_eq!(func - self.imports.count(IndexSpace::Func), code);
        Ok(FuncIdx(func))
    }

    pub fn export_function(&mut self, name: &str, idx: FuncIdx) -> ExportIdx {
        let FuncIdx(x) = idx;
        self.exports.add(name, ExportKind::Func, x)
    }

    pub fn export_table(&mut self, name: &str, idx: TableIdx) -> ExportIdx {
        let TableIdx(x) = idx;
        self.exports.add(name, ExportKind::Table, x)
    }

    pub fn export_memory(&mut self, name: &str, idx: MemIdx) -> ExportIdx {
        let MemIdx(x) = idx;
        self.exports.add(name, ExportKind::Mem, x)
    }

    pub fn export_global(&mut self, name: &str, idx: GlobalIdx) -> ExportIdx {
        let GlobalIdx(x) = idx;
        self.exports.add(name, ExportKind::Global, x)
    }

    pub fn export(&self, idx: ExportIdx) -> Option<&Export> {
        self.exports.get(idx)
    }

    pub fn set_start(&mut self, func: FuncIdx) {
        if let Some(prev) = self.start.set(func) {
            debug!("start function {:?} replaced by {:?}", prev, func);
        }
    }

    pub fn start(&self) -> Option<FuncIdx> {
        self.start.get()
    }

    /// Adds an active element segment writing `funcs` into `table` at the
    /// offset computed by `offset`.
    pub fn add_element(&mut self, table: TableIdx, offset: &Code, funcs: &[FuncIdx]) -> ElemIdx {
        self.elements.add(ElementSegment {
            table,
            offset: offset.clone(),
            funcs: funcs.to_vec(),
        })
    }

    /// Adds an active data segment writing `bytes` into `mem` at the offset
    /// computed by `offset`.
    pub fn add_data(&mut self, mem: MemIdx, offset: &Code, bytes: &[u8]) -> DataIdx {
        self.data.add(DataSegment {
            mode: DataMode::Active {
                mem,
                offset: offset.clone(),
            },
            bytes: bytes.to_vec(),
        })
    }

    pub fn add_passive_data(&mut self, bytes: &[u8]) -> DataIdx {
        self.data.add(DataSegment {
            mode: DataMode::Passive,
            bytes: bytes.to_vec(),
        })
    }

    /// Checks that every local function has exactly one body.
    pub fn check(&self) -> Result<(), Error> {
        if self.functions.len() != self.code.len() {
            return Err(Error::MisalignedFunctionBody {
                functions: self.functions.len(),
                bodies: self.code.len(),
            });
        }
        Ok(())
    }

    /// The data count section this module needs, if any. Passive segments
    /// and bodies using `memory.init` or `data.drop` cannot be validated
    /// without it.
    pub fn data_count(&self) -> DataCountSection {
        let mut section = DataCountSection::new();
        if self.data_refs || self.data.has_passive() {
            section.set(self.data.len() as u32);
        }
        section
    }

    // Data count (12) sits between the element and code sections.
    fn sections<'a>(&'a self, data_count: &'a DataCountSection) -> [&'a dyn Section; 12] {
        [
            &self.types,
            &self.imports,
            &self.functions,
            &self.tables,
            &self.memories,
            &self.globals,
            &self.exports,
            &self.start,
            &self.elements,
            data_count,
            &self.code,
            &self.data,
        ]
    }

    pub fn write_to(&self, w: &mut dyn Sink) {
        w.write_bytes(&MAGIC);
        w.write_bytes(&VERSION);
        let data_count = self.data_count();
        for section in self.sections(&data_count).iter() {
            write_section(w, *section);
        }
    }

    pub fn serialize(&self) -> Vec<u8> {
        if let Err(e) = self.check() {
            warn!("serializing an inconsistent module: {}", e);
        }
        let mut bytes: Vec<u8> = Vec::new();
        self.write_to(&mut bytes);
        debug!("serialized module, {} bytes", bytes.len());
        bytes
    }

    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        fs::write(path, self.serialize())?;
        Ok(())
    }

    pub fn num_types(&self) -> usize {
        self.types.len()
    }

    pub fn num_imports(&self) -> usize {
        self.imports.len()
    }

    pub fn num_imported_functions(&self) -> u32 {
        self.imports.count(IndexSpace::Func)
    }

    pub fn num_imported_tables(&self) -> u32 {
        self.imports.count(IndexSpace::Table)
    }

    pub fn num_imported_memories(&self) -> u32 {
        self.imports.count(IndexSpace::Mem)
    }

    pub fn num_imported_globals(&self) -> u32 {
        self.imports.count(IndexSpace::Global)
    }

    /// Number of locally defined functions.
    pub fn num_functions(&self) -> usize {
        self.functions.len()
    }

    pub fn num_code_entries(&self) -> usize {
        self.code.len()
    }

    pub fn num_exports(&self) -> usize {
        self.exports.len()
    }

    pub fn imports_frozen(&self) -> bool {
        self.imports.is_frozen()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    const HEADER: [u8; 8] = [0x00, 0x61, 0x73, 0x6d, 0x01, 0x00, 0x00, 0x00];

    // Walks the section headers, returning the ids in order.
    fn section_ids(bytes: &[u8]) -> Vec<u8> {
        assert_eq!(&bytes[..8], &HEADER[..]);
        let mut ids = Vec::new();
        let mut pos = 8;
        while pos < bytes.len() {
            ids.push(bytes[pos]);
            pos += 1;
            let mut size = 0usize;
            let mut shift = 0;
            loop {
                let b = bytes[pos];
                pos += 1;
                size |= usize::from(b & 0x7f) << shift;
                shift += 7;
                if b & 0x80 == 0 {
                    break;
                }
            }
            pos += size;
        }
        assert_eq!(pos, bytes.len());
        ids
    }

    fn body(locals: &[ValType]) -> FuncBody {
        let mut body = FuncBody::new(locals);
        body.code.end();
        body
    }

    fn i32_offset(x: i32) -> Code {
        let mut code = Code::new();
        code.i32_const(x).end();
        code
    }

    #[test]
    fn empty_module_is_just_the_header() {
        assert_eq!(Module::new().serialize(), HEADER.to_vec());
    }

    #[test]
    fn add_five_and_ten() {
        let mut module = Module::new();
        let ty = module.declare_type(&[], &[ValType::I32]);
        let mut body = FuncBody::new(&[]);
        body.code.i32_const(5).i32_const(10).i32_add().end();
        let func = module.finalize_function(ty, &body).unwrap();
        module.export_function("_start", func);

        let mut expected = HEADER.to_vec();
        expected.extend_from_slice(&[0x01, 0x05, 0x01, 0x60, 0x00, 0x01, 0x7f]);
        expected.extend_from_slice(&[0x03, 0x02, 0x01, 0x00]);
        expected.extend_from_slice(&[0x07, 0x0a, 0x01, 0x06]);
        expected.extend_from_slice(b"_start");
        expected.extend_from_slice(&[0x00, 0x00]);
        expected.extend_from_slice(&[0x0a, 0x09, 0x01, 0x07, 0x00, 0x41, 0x05, 0x41, 0x0a, 0x6a, 0x0b]);
        assert_eq!(module.serialize(), expected);
    }

    #[test]
    fn empty_sections_are_omitted() {
        let mut module = Module::new();
        module.declare_type(&[ValType::I32], &[]);
        assert_eq!(section_ids(&module.serialize()), vec![1]);

        let mem = module.declare_memory(MemType { limits: Limits::unbounded(1) });
        module.export_memory("memory", mem);
        assert_eq!(section_ids(&module.serialize()), vec![1, 5, 7]);
    }

    #[test]
    fn imports_come_first_in_the_function_space() {
        let mut module = Module::new();
        let ty = module.declare_type(&[], &[]);
        let a = module.import_function("env", "a", ty).unwrap();
        let b = module.import_function("env", "b", ty).unwrap();
        assert_eq!((a, b), (FuncIdx(0), FuncIdx(1)));

        let locals: Vec<FuncIdx> = (0..3)
            .map(|_| module.finalize_function(ty, &body(&[])).unwrap())
            .collect();
        assert_eq!(locals, vec![FuncIdx(2), FuncIdx(3), FuncIdx(4)]);

        let export = module.export_function("first", FuncIdx(2));
        let entry = module.export(export).unwrap();
        assert_eq!((entry.kind, entry.index), (ExportKind::Func, 2));
        // index 2 minus two imports is the first local function
        assert_eq!(entry.index - module.num_imported_functions(), 0);
        assert_eq!(module.num_functions(), 3);
        assert_eq!(module.num_code_entries(), 3);
    }

    #[test]
    fn other_spaces_continue_after_imports() {
        let mut module = Module::new();
        let global_type = GlobalType { val_type: ValType::I32, mutable: false };
        let table_type = TableType { elem: RefType::FuncRef, limits: Limits::unbounded(1) };
        let mem_type = MemType { limits: Limits::unbounded(1) };

        assert_eq!(module.import_global("env", "g", global_type).unwrap(), GlobalIdx(0));
        assert_eq!(module.import_table("env", "t", table_type).unwrap(), TableIdx(0));
        assert_eq!(module.import_memory("env", "m", mem_type).unwrap(), MemIdx(0));

        assert_eq!(module.declare_global(global_type, &i32_offset(7)), GlobalIdx(1));
        assert_eq!(module.declare_global(global_type, &i32_offset(8)), GlobalIdx(2));
        assert_eq!(module.declare_table(table_type), TableIdx(1));
        assert_eq!(module.declare_memory(mem_type), MemIdx(1));
        assert_eq!(module.num_imported_globals(), 1);
        assert_eq!(module.num_imported_tables(), 1);
        assert_eq!(module.num_imported_memories(), 1);
    }

    #[test]
    fn import_after_local_definition_is_rejected() {
        let mut module = Module::new();
        let ty = module.declare_type(&[], &[]);
        module.import_function("env", "a", ty).unwrap();
        module.finalize_function(ty, &body(&[])).unwrap();
        assert!(module.imports_frozen());

        let before = module.serialize();
        match module.import_function("env", "late", ty) {
            Err(Error::FrozenIndexSpace { space: IndexSpace::Func, .. }) => (),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(module.import_memory("env", "mem", MemType { limits: Limits::unbounded(1) }).is_err());
        assert_eq!(module.serialize(), before);
        assert_eq!(module.num_imports(), 1);
    }

    #[test]
    fn any_local_definition_freezes_imports() {
        let mut module = Module::new();
        module.declare_global(
            GlobalType { val_type: ValType::I64, mutable: true },
            &{
                let mut init = Code::new();
                init.i64_const(0).end();
                init
            },
        );
        assert!(module.import_global("env", "g", GlobalType { val_type: ValType::I64, mutable: true }).is_err());

        let mut module = Module::new();
        module.freeze_imports();
        module.freeze_imports();
        let ty = module.declare_type(&[], &[]);
        assert!(module.import_function("env", "f", ty).is_err());
    }

    #[test]
    fn misaligned_bodies_are_rejected() {
        let mut module = Module::new();
        let a = module.declare_type(&[], &[]);
        let b = module.declare_type(&[ValType::I32], &[]);
        module.declare_function(a);
        module.declare_function(b);
        module.add_code(&body(&[]));

        let before = module.serialize();
        match module.finalize_function(a, &body(&[])) {
            Err(Error::MisalignedFunctionBody { functions, bodies }) => {
                assert_eq!((functions, bodies), (2, 1));
            },
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(module.serialize(), before);
        assert!(module.check().is_err());

        module.add_code(&body(&[]));
        assert!(module.check().is_ok());
    }

    #[test]
    fn serialize_is_repeatable() {
        let mut module = Module::new();
        let ty = module.declare_type(&[ValType::I32], &[ValType::I32]);
        let mut body = FuncBody::new(&[ValType::I64]);
        body.code.local_get(LocalIdx(0)).end();
        let func = module.finalize_function(ty, &body).unwrap();
        module.export_function("id", func);

        let first = module.serialize();
        let second = module.serialize();
        assert_eq!(first, second);

        let mut streamed = ByteCounter::new();
        module.write_to(&mut streamed);
        assert_eq!(streamed.count(), first.len());
    }

    #[test]
    fn section_order_ignores_population_order() {
        let mem_type = MemType { limits: Limits::unbounded(1) };

        let mut first = Module::new();
        let ty = first.declare_type(&[], &[]);
        first.finalize_function(ty, &body(&[])).unwrap();
        let mem = first.declare_memory(mem_type);
        first.export_function("f", FuncIdx(0));
        first.add_data(mem, &i32_offset(0), b"abc");
        first.set_start(FuncIdx(0));

        let mut second = Module::new();
        second.set_start(FuncIdx(0));
        second.add_data(MemIdx(0), &i32_offset(0), b"abc");
        second.export_function("f", FuncIdx(0));
        second.declare_memory(mem_type);
        let ty = second.declare_type(&[], &[]);
        second.finalize_function(ty, &body(&[])).unwrap();

        let bytes = first.serialize();
        assert_eq!(bytes, second.serialize());
        assert_eq!(section_ids(&bytes), vec![1, 3, 5, 7, 8, 10, 11]);
    }

    #[test]
    fn start_and_elements() {
        let mut module = Module::new();
        let ty = module.declare_type(&[], &[]);
        let f = module.finalize_function(ty, &body(&[])).unwrap();
        let table = module.declare_table(TableType { elem: RefType::FuncRef, limits: Limits::unbounded(1) });
        assert_eq!(module.add_element(table, &i32_offset(0), &[f]), ElemIdx(0));
        module.set_start(FuncIdx(5));
        module.set_start(f);
        assert_eq!(module.start(), Some(f));

        let bytes = module.serialize();
        assert_eq!(section_ids(&bytes), vec![1, 3, 4, 8, 9, 10]);

        let start = [0x08, 0x01, 0x00];
        assert!(bytes.windows(3).any(|w| w == start));
        let element = [0x09, 0x07, 0x01, 0x00, 0x41, 0x00, 0x0b, 0x01, 0x00];
        assert!(bytes.windows(element.len()).any(|w| w == element));
    }

    #[test]
    fn passive_data_announces_its_count() {
        let mut module = Module::new();
        let mem = module.declare_memory(MemType { limits: Limits::unbounded(1) });
        module.add_data(mem, &i32_offset(0), b"a");
        assert_eq!(module.data_count().get(), None);
        assert_eq!(section_ids(&module.serialize()), vec![5, 11]);

        module.add_passive_data(b"bc");
        assert_eq!(module.data_count().get(), Some(2));
        let bytes = module.serialize();
        assert_eq!(section_ids(&bytes), vec![5, 12, 11]);
        let count = [0x0c, 0x01, 0x02];
        assert!(bytes.windows(3).any(|w| w == count));
    }

    #[test]
    fn data_instructions_require_the_count() {
        let mut module = Module::new();
        let ty = module.declare_type(&[], &[]);
        let mut body = FuncBody::new(&[]);
        body.code.data_drop(DataIdx(0)).end();
        module.finalize_function(ty, &body).unwrap();
        module.declare_memory(MemType { limits: Limits::unbounded(1) });
        module.add_data(MemIdx(0), &i32_offset(0), b"x");

        assert_eq!(module.data_count().get(), Some(1));
        assert_eq!(section_ids(&module.serialize()), vec![1, 3, 5, 12, 10, 11]);
    }

    #[test]
    fn inconsistent_module_still_serializes() {
        let mut module = Module::new();
        let ty = module.declare_type(&[], &[]);
        module.declare_function(ty);
        assert!(module.check().is_err());
        assert_eq!(section_ids(&module.serialize()), vec![1, 3]);
    }

    #[test]
    fn write_to_file_round_trips() {
        let mut module = Module::new();
        module.declare_type(&[], &[]);
        let path = std::env::temp_dir().join(format!("wasm-assembler-test-{}.wasm", std::process::id()));
        module.write_to_file(&path).unwrap();
        let read = fs::read(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(read, module.serialize());
    }

    #[test]
    fn modules_are_send() {
        fn assert_send<T: Send>() {}
        assert_send::<Module>();
    }
}
