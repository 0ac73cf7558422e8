//! The in-memory container.
//!
//! [`Ain`] owns every table read from a container, the section map, the name indices and
//! the opcode table configured for its version. It is built in one shot by
//! [`Ain::from_mem`] / [`Ain::from_file`], or created empty for a target version by
//! [`Ain::new`], and is mutated afterwards only through the `add_*` operations.
//!
//! # Examples
//!
//! ```rust,no_run
//! use ainscope::Ain;
//!
//! let ain = Ain::from_file("System40.ain")?;
//! println!("version {}", ain.version());
//! if let Some(index) = ain.get_function("main") {
//!     println!("main at {:#x}", ain.functions[index].address);
//! }
//! # Ok::<(), ainscope::Error>(())
//! ```

use std::path::Path;

use crate::{
    disassembler::InstructionSet,
    file::File,
    metadata::{
        config::LoadOptions,
        index::SymbolIndex,
        loader,
        sections::{SectionMap, SectionTag},
        symbols::{
            render_variable, Enum, Function, FunctionType, GlobalInitval, InitValue, Library,
            ScenarioLabel, Structure, Switch, Variable, VariableKind,
        },
        types::{render_type, DataKind, TypeDescriptor, TypeNames},
        version::{version_marker_name, Version},
    },
    Result,
};

/// A loaded or freshly created AIN container.
#[derive(Debug, Clone)]
pub struct Ain {
    pub(crate) version: Version,
    pub(crate) sections: SectionMap,
    pub(crate) index: SymbolIndex,
    pub(crate) instructions: InstructionSet,

    /// Encryption keycode (`KEYC`)
    pub keycode: i32,
    /// Bytecode (`CODE`)
    pub code: Vec<u8>,
    /// Functions (`FUNC`)
    pub functions: Vec<Function>,
    /// Globals (`GLOB`), with `GSET` values merged in
    pub globals: Vec<Variable>,
    /// Raw global initial values (`GSET`)
    pub initvals: Vec<GlobalInitval>,
    /// Structures (`STRT`)
    pub structures: Vec<Structure>,
    /// Messages (`MSG0` / `MSG1`)
    pub messages: Vec<String>,
    /// Unknown word of the `MSG1` section
    pub msg1_uk: i32,
    /// Main function index (`MAIN`)
    pub main: i32,
    /// Message function index (`MSGF`)
    pub msgf: i32,
    /// Host libraries (`HLL0`)
    pub libraries: Vec<Library>,
    /// Switch tables (`SWI0`)
    pub switches: Vec<Switch>,
    /// Game version (`GVER`)
    pub game_version: i32,
    /// Scenario labels (`SLBL`)
    pub scenario_labels: Vec<ScenarioLabel>,
    /// String literals (`STR0`)
    pub strings: Vec<String>,
    /// Source file names (`FNAM`)
    pub filenames: Vec<String>,
    /// Onjump function index (`OJMP`)
    pub ojmp: i32,
    /// Function types (`FNCT`)
    pub function_types: Vec<FunctionType>,
    /// Delegates (`DELG`)
    pub delegates: Vec<FunctionType>,
    /// Global group names (`OBJG`)
    pub global_groups: Vec<String>,
    /// Enums (`ENUM`) and their recovered members
    pub enums: Vec<Enum>,
    /// Index of the allocation function, named `0`
    pub alloc: Option<usize>,
}

impl Ain {
    /// Empty container for `version` with no section present and no tables.
    pub(crate) fn empty(version: Version) -> Self {
        Ain {
            version,
            sections: SectionMap::new(),
            index: SymbolIndex::new(),
            instructions: InstructionSet::for_version(version),
            keycode: 0,
            code: Vec::new(),
            functions: Vec::new(),
            globals: Vec::new(),
            initvals: Vec::new(),
            structures: Vec::new(),
            messages: Vec::new(),
            msg1_uk: 0,
            main: -1,
            msgf: -1,
            libraries: Vec::new(),
            switches: Vec::new(),
            game_version: 0,
            scenario_labels: Vec::new(),
            strings: Vec::new(),
            filenames: Vec::new(),
            ojmp: -1,
            function_types: Vec::new(),
            delegates: Vec::new(),
            global_groups: Vec::new(),
            enums: Vec::new(),
            alloc: None,
        }
    }

    /// Create an empty container targeting `major.minor`.
    ///
    /// The sections a compiler for that version always emits are marked present. The
    /// function table starts with `NULL`, followed by a version marker function when
    /// `minor` is non-zero; the message and string tables each start with one empty entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ainscope::{Ain, metadata::sections::SectionTag};
    ///
    /// let ain = Ain::new(12, 0);
    /// assert!(ain.sections().is_present(SectionTag::Enum));
    /// assert!(!ain.sections().is_present(SectionTag::Keyc));
    /// assert_eq!(ain.get_function("NULL"), Some(0));
    /// ```
    #[must_use]
    pub fn new(major: i32, minor: i32) -> Self {
        let version = Version::new(major, minor);
        let mut ain = Ain::empty(version);

        for tag in [
            SectionTag::Vers,
            SectionTag::Code,
            SectionTag::Func,
            SectionTag::Glob,
            SectionTag::Strt,
            SectionTag::Main,
            SectionTag::Hll0,
            SectionTag::Swi0,
            SectionTag::Gver,
            SectionTag::Str0,
        ] {
            ain.sections.set_present(tag, true);
        }
        for tag in [
            SectionTag::Keyc,
            SectionTag::Gset,
            SectionTag::Msgf,
            SectionTag::Fnam,
        ] {
            ain.sections.set_present(tag, major < 12);
        }
        let msg1 = major > 6 || (major == 6 && minor > 0);
        ain.sections.set_present(SectionTag::Msg1, msg1);
        ain.sections.set_present(SectionTag::Msg0, !msg1);
        ain.sections.set_present(SectionTag::Slbl, major == 1);
        ain.sections.set_present(SectionTag::Ojmp, major < 7);
        ain.sections.set_present(SectionTag::Fnct, major < 7);
        ain.sections.set_present(SectionTag::Delg, major >= 7);
        ain.sections.set_present(SectionTag::Objg, major >= 5);
        ain.sections.set_present(SectionTag::Enum, major >= 12);

        ain.game_version = 100;
        ain.functions.push(Function::new("NULL"));
        if minor != 0 {
            ain.functions.push(Function::new(version_marker_name(version)));
        }
        ain.messages.push(String::new());
        ain.strings.push(String::new());

        ain.rebuild_indices();
        ain
    }

    /// Load a container from a file on disk using [`LoadOptions::default`].
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file cannot be opened or mapped,
    /// [`crate::Error::UnrecognizedFormat`] for unknown envelopes and
    /// [`crate::Error::Invalid`] for malformed content.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Ain> {
        Ain::from_file_with(path, LoadOptions::default())
    }

    /// Load a container from a file on disk.
    ///
    /// # Errors
    /// See [`Ain::from_file`].
    pub fn from_file_with(path: impl AsRef<Path>, options: LoadOptions) -> Result<Ain> {
        let file = File::from_file(path)?;
        let (_, image) = file.image()?;
        loader::load(&image, &options)
    }

    /// Load a container from bytes using [`LoadOptions::default`].
    ///
    /// # Errors
    /// Returns [`crate::Error::UnrecognizedFormat`] for unknown envelopes and
    /// [`crate::Error::Invalid`] for malformed content.
    pub fn from_mem(data: Vec<u8>) -> Result<Ain> {
        Ain::from_mem_with(data, LoadOptions::default())
    }

    /// Load a container from bytes.
    ///
    /// # Errors
    /// See [`Ain::from_mem`].
    pub fn from_mem_with(data: Vec<u8>, options: LoadOptions) -> Result<Ain> {
        let file = File::from_mem(data);
        let (_, image) = file.image()?;
        loader::load(&image, &options)
    }

    /// Container version.
    #[must_use]
    pub fn version(&self) -> Version {
        self.version
    }

    /// Section map.
    #[must_use]
    pub fn sections(&self) -> &SectionMap {
        &self.sections
    }

    /// Opcode table configured for this container's version.
    #[must_use]
    pub fn instructions(&self) -> &InstructionSet {
        &self.instructions
    }

    /// Rebuild the function, structure and string indices from the current tables.
    pub fn rebuild_indices(&mut self) {
        self.index
            .rebuild(&self.functions, &self.structures, &self.strings);
    }

    /// Owning `(structure, enum)` of a function called `name`, from the part of the name
    /// before its first `@`. Structures are checked first, in declaration order, so the
    /// first of several same-named structures owns the function.
    pub(crate) fn membership(&self, name: &str) -> Option<(Option<usize>, Option<usize>)> {
        let (owner, _) = name.split_once('@')?;
        if let Some(structure) = self.structures.iter().position(|s| s.name == owner) {
            return Some((Some(structure), None));
        }
        Some((None, self.get_enum(owner)))
    }

    /// Recompute `struct_type` / `enum_type` of every function. Functions whose owner
    /// cannot be resolved are logged.
    pub fn infer_membership(&mut self) {
        let memberships: Vec<_> = self
            .functions
            .iter()
            .map(|function| self.membership(&function.name))
            .collect();

        for (function, membership) in self.functions.iter_mut().zip(memberships) {
            let (struct_type, enum_type) = membership.unwrap_or((None, None));
            if membership.is_some() && struct_type.is_none() && enum_type.is_none() {
                log::warn!("no owner found for function '{}'", function.name);
            }
            function.struct_type = struct_type;
            function.enum_type = enum_type;
        }
    }

    /// Resolve a function name. `name#N` selects the Nth overload.
    #[must_use]
    pub fn get_function(&self, name: &str) -> Option<usize> {
        self.index.function(name)
    }

    /// Indices of every function called `name`.
    #[must_use]
    pub fn get_overloads(&self, name: &str) -> &[usize] {
        self.index.overloads(name)
    }

    /// Overload position of function `function` among the functions sharing its name,
    /// suitable for a `name#N` lookup.
    #[must_use]
    pub fn get_function_index(&self, function: usize) -> Option<usize> {
        let name = &self.functions.get(function)?.name;
        let position = self
            .index
            .overloads(name)
            .iter()
            .position(|&index| index == function);
        if position.is_none() {
            log::warn!("function {} ('{}') is not indexed", function, name);
        }
        position
    }

    /// Index of the global called `name`.
    #[must_use]
    pub fn get_global(&self, name: &str) -> Option<usize> {
        self.globals.iter().position(|g| g.name == name)
    }

    /// Index of the structure called `name`.
    #[must_use]
    pub fn get_struct(&self, name: &str) -> Option<usize> {
        self.index.structure(name)
    }

    /// Index of the enum called `name`.
    #[must_use]
    pub fn get_enum(&self, name: &str) -> Option<usize> {
        self.enums.iter().position(|e| e.name == name)
    }

    /// Index of the library called `name`.
    #[must_use]
    pub fn get_library(&self, name: &str) -> Option<usize> {
        self.libraries.iter().position(|l| l.name == name)
    }

    /// Index of function `name` inside library `library`.
    #[must_use]
    pub fn get_library_function(&self, library: usize, name: &str) -> Option<usize> {
        self.libraries.get(library)?.function_index(name)
    }

    /// Index of the function type called `name`.
    #[must_use]
    pub fn get_functype(&self, name: &str) -> Option<usize> {
        self.function_types.iter().position(|f| f.name == name)
    }

    /// Index of the delegate called `name`.
    #[must_use]
    pub fn get_delegate(&self, name: &str) -> Option<usize> {
        self.delegates.iter().position(|d| d.name == name)
    }

    /// Index of the string table entry `s`.
    #[must_use]
    pub fn get_string_no(&self, s: &str) -> Option<usize> {
        self.index.string(s)
    }

    /// The function at `index`.
    #[must_use]
    pub fn function(&self, index: usize) -> Option<&Function> {
        self.functions.get(index)
    }

    /// The global at `index`.
    #[must_use]
    pub fn global(&self, index: usize) -> Option<&Variable> {
        self.globals.get(index)
    }

    /// The structure at `index`.
    #[must_use]
    pub fn structure(&self, index: usize) -> Option<&Structure> {
        self.structures.get(index)
    }

    /// The string at `index`.
    #[must_use]
    pub fn string(&self, index: usize) -> Option<&str> {
        self.strings.get(index).map(String::as_str)
    }

    /// The message at `index`.
    #[must_use]
    pub fn message(&self, index: usize) -> Option<&str> {
        self.messages.get(index).map(String::as_str)
    }

    /// The library at `index`.
    #[must_use]
    pub fn library(&self, index: usize) -> Option<&Library> {
        self.libraries.get(index)
    }

    /// The switch table at `index`.
    #[must_use]
    pub fn switch(&self, index: usize) -> Option<&Switch> {
        self.switches.get(index)
    }

    /// The file name at `index`.
    #[must_use]
    pub fn filename(&self, index: usize) -> Option<&str> {
        self.filenames.get(index).map(String::as_str)
    }

    /// The function type at `index`.
    #[must_use]
    pub fn function_type(&self, index: usize) -> Option<&FunctionType> {
        self.function_types.get(index)
    }

    /// The delegate at `index`.
    #[must_use]
    pub fn delegate(&self, index: usize) -> Option<&FunctionType> {
        self.delegates.get(index)
    }

    /// The enum at `index`.
    #[must_use]
    pub fn enumeration(&self, index: usize) -> Option<&Enum> {
        self.enums.get(index)
    }

    /// Append a function returning void, with membership inferred from its name against
    /// the current structure index and enum table.
    pub fn add_function(&mut self, name: &str) -> usize {
        let mut function = Function::new(name);
        if let Some((struct_type, enum_type)) = self.membership(name) {
            function.struct_type = struct_type;
            function.enum_type = enum_type;
        }
        self.functions.push(function);
        self.functions.len() - 1
    }

    /// Append a deep copy of function `index`.
    pub fn dup_function(&mut self, index: usize) -> Option<usize> {
        let copy = self.functions.get(index)?.clone();
        self.functions.push(copy);
        Some(self.functions.len() - 1)
    }

    /// Append a global of type void. Version 12+ globals get an empty secondary name.
    pub fn add_global(&mut self, name: &str) -> usize {
        let mut global = Variable::new(name, TypeDescriptor::new(DataKind::Void), VariableKind::Global);
        if self.version.gte(12, 0) {
            global.name2 = Some(String::new());
        }
        self.globals.push(global);
        self.globals.len() - 1
    }

    /// Append a zero integer initial value for global `global_index`.
    pub fn add_initval(&mut self, global_index: i32) -> usize {
        self.initvals.push(GlobalInitval {
            global_index,
            data_type: DataKind::Int,
            value: InitValue::Int(0),
        });
        self.initvals.len() - 1
    }

    /// Append a structure without constructor or destructor.
    pub fn add_struct(&mut self, name: &str) -> usize {
        self.structures.push(Structure::new(name));
        self.structures.len() - 1
    }

    /// Append an empty library.
    pub fn add_library(&mut self, name: &str) -> usize {
        self.libraries.push(Library::new(name));
        self.libraries.len() - 1
    }

    /// Append a function type and mark `FNCT` present.
    pub fn add_functype(&mut self, name: &str) -> usize {
        self.function_types.push(FunctionType::new(name));
        self.sections.set_present(SectionTag::Fnct, true);
        self.function_types.len() - 1
    }

    /// Append a delegate and mark `DELG` present.
    pub fn add_delegate(&mut self, name: &str) -> usize {
        self.delegates.push(FunctionType::new(name));
        self.sections.set_present(SectionTag::Delg, true);
        self.delegates.len() - 1
    }

    /// Append `s` to the string table unless the string index already holds it, and return
    /// its index.
    pub fn add_string(&mut self, s: &str) -> usize {
        if let Some(index) = self.index.string(s) {
            return index;
        }
        self.strings.push(s.to_string());
        self.strings.len() - 1
    }

    /// Append a message.
    pub fn add_message(&mut self, s: &str) -> usize {
        self.messages.push(s.to_string());
        self.messages.len() - 1
    }

    /// Append an empty integer switch without default.
    pub fn add_switch(&mut self) -> usize {
        self.switches.push(Switch::new());
        self.switches.len() - 1
    }

    /// Append a source file name.
    pub fn add_file(&mut self, name: &str) -> usize {
        self.filenames.push(name.to_string());
        self.filenames.len() - 1
    }

    /// Render a type with names resolved against this container.
    #[must_use]
    pub fn render_type(&self, ty: &TypeDescriptor) -> String {
        render_type(Some(self), Some(ty))
    }

    /// Render a variable declaration with names resolved against this container.
    #[must_use]
    pub fn render_variable(&self, var: &Variable) -> String {
        render_variable(Some(self), var)
    }
}

impl TypeNames for Ain {
    fn struct_name(&self, index: usize) -> Option<&str> {
        self.structures.get(index).map(|s| s.name.as_str())
    }

    fn enum_name(&self, index: usize) -> Option<&str> {
        self.enums.get(index).map(|e| e.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_presence_flags() {
        let v4 = Ain::new(4, 0);
        assert!(v4.sections().is_present(SectionTag::Keyc));
        assert!(v4.sections().is_present(SectionTag::Msg0));
        assert!(!v4.sections().is_present(SectionTag::Msg1));
        assert!(v4.sections().is_present(SectionTag::Ojmp));
        assert!(v4.sections().is_present(SectionTag::Fnct));
        assert!(!v4.sections().is_present(SectionTag::Delg));
        assert!(!v4.sections().is_present(SectionTag::Objg));
        assert!(!v4.sections().is_present(SectionTag::Slbl));

        let v6 = Ain::new(6, 1);
        assert!(v6.sections().is_present(SectionTag::Msg1));

        let v14 = Ain::new(14, 1);
        assert!(!v14.sections().is_present(SectionTag::Gset));
        assert!(v14.sections().is_present(SectionTag::Delg));
        assert!(v14.sections().is_present(SectionTag::Enum));
        assert_eq!(v14.main, -1);
        assert_eq!(v14.game_version, 100);
        assert_eq!(v14.functions[1].name, "_ALICETOOLS_AINV14_01");
        assert_eq!(v14.messages, vec![String::new()]);
        assert_eq!(v14.get_string_no(""), Some(0));

        assert!(Ain::new(1, 0).sections().is_present(SectionTag::Slbl));
        assert_eq!(Ain::new(7, 0).functions.len(), 1);
    }

    #[test]
    fn add_and_rebuild() {
        let mut ain = Ain::new(7, 0);
        let bar = ain.add_function("bar");
        assert_eq!(ain.get_function("bar"), None);
        ain.rebuild_indices();
        assert_eq!(ain.get_function("bar"), Some(bar));

        let copy = ain.dup_function(bar).unwrap();
        ain.rebuild_indices();
        assert_eq!(ain.get_function("bar#1"), Some(copy));
        assert_eq!(ain.get_function_index(copy), Some(1));
        assert!(ain.dup_function(99).is_none());
    }

    #[test]
    fn add_string_dedups_through_index() {
        let mut ain = Ain::new(7, 0);
        let a = ain.add_string("a");
        assert_eq!(ain.add_string(""), 0);
        // stale index: "a" is not known yet
        assert_ne!(ain.add_string("a"), a);
        ain.rebuild_indices();
        assert_eq!(ain.add_string("a"), ain.get_string_no("a").unwrap());
    }

    #[test]
    fn membership_inference() {
        let mut ain = Ain::new(12, 0);
        let s = ain.add_struct("S");
        ain.enums.push(Enum::new("E"));
        ain.rebuild_indices();

        let method = ain.add_function("S@run");
        let stringify = ain.add_function("E@String");
        let free = ain.add_function("free");
        let prefix = ain.add_function("SS@run");
        assert_eq!(ain.functions[method].struct_type, Some(s));
        assert_eq!(ain.functions[stringify].enum_type, Some(0));
        assert_eq!(ain.functions[free].struct_type, None);
        assert_eq!(ain.functions[prefix].struct_type, None);
        assert_eq!(ain.functions[prefix].enum_type, None);
    }

    #[test]
    fn membership_prefers_first_duplicate_struct() {
        let mut ain = Ain::new(12, 0);
        let first = ain.add_struct("S");
        ain.add_struct("S");
        ain.rebuild_indices();

        let method = ain.add_function("S@run");
        assert_eq!(ain.functions[method].struct_type, Some(first));

        ain.infer_membership();
        assert_eq!(ain.functions[method].struct_type, Some(first));
    }

    #[test]
    fn globals_and_lookups() {
        let mut ain = Ain::new(12, 0);
        let g = ain.add_global("g");
        assert_eq!(ain.globals[g].name2.as_deref(), Some(""));
        assert_eq!(ain.get_global("g"), Some(g));
        assert_eq!(Ain::new(4, 0).add_global("x"), 0);

        let lib = ain.add_library("Math");
        assert_eq!(ain.get_library("Math"), Some(lib));
        assert_eq!(ain.get_library_function(lib, "Sin"), None);
        assert_eq!(ain.get_library_function(7, "Sin"), None);

        ain.add_delegate("D");
        assert_eq!(ain.get_delegate("D"), Some(0));
        ain.add_functype("F");
        assert!(ain.sections().is_present(SectionTag::Fnct));
        assert_eq!(ain.get_functype("F"), Some(0));

        assert_eq!(ain.add_switch(), 0);
        assert_eq!(ain.switches[0].default_address, -1);
        assert_eq!(ain.add_file("a.jaf"), 0);
        assert_eq!(ain.add_message("hi"), 1);
        assert_eq!(ain.add_initval(g as i32), 0);
    }

    #[test]
    fn renders_with_names() {
        let mut ain = Ain::new(11, 0);
        let s = ain.add_struct("Point");
        let ty = TypeDescriptor::with_struct(DataKind::Struct, s);
        assert_eq!(ain.render_type(&ty), "Point");
        let var = Variable::new("p", ty, VariableKind::Local);
        assert_eq!(ain.render_variable(&var), "Point p");
    }
}
