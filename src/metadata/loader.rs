//! Tag-dispatched container parser.
//!
//! [`load`] walks the top-level sections of a plain container image in file order, hands
//! each one to its section reader and records where it was found. Once the last section is
//! read, the post-parse steps run in a fixed order:
//!
//! 1. a version 6 container with an `MSG1` section is at least 6.1,
//! 2. `GSET` values are distributed into their globals,
//! 3. the name indices are rebuilt and function membership is inferred,
//! 4. the opcode table is configured from the final version,
//! 5. enum members are recovered.
//!
//! Interface flags are set by the `STRT` reader itself.

use crate::{
    analysis,
    disassembler::InstructionSet,
    file::parser::Parser,
    metadata::{
        ain::Ain,
        config::LoadOptions,
        sections::SectionTag,
        symbols::{
            read_function, read_function_types, read_globals, read_initvals, read_libraries,
            read_msg1_strings, read_scenario_labels, read_strings, read_structures,
            read_switches, Enum, FunctionType, ReadContext,
        },
        version::{minor_version_quirk, Version},
    },
    Error, Result,
};

/// State of one parse.
struct Loader<'a> {
    parser: Parser<'a>,
    options: &'a LoadOptions,
    ctx: ReadContext,
    ain: Ain,
}

/// Parse a plain (already unwrapped) container image.
///
/// # Errors
/// Returns [`crate::Error::Invalid`] if the image does not start with a complete `VERS`
/// section, contains an unknown section tag, is truncated inside a section, or violates a table invariant.
pub(crate) fn load(data: &[u8], options: &LoadOptions) -> Result<Ain> {
    let parser = Parser::new(data);
    if parser.peek_tag().as_ref() != Some(SectionTag::Vers.as_bytes()) {
        return Err(invalid_error!("Container does not start with a VERS section"));
    }

    let version = Version::default();
    let mut loader = Loader {
        parser,
        options,
        ctx: ReadContext {
            version,
            decoder: options.decoder,
            max_type_depth: options.max_type_depth,
        },
        ain: Ain::empty(version),
    };

    loader.read_sections()?;
    loader.finish()
}

impl Loader<'_> {
    fn read_sections(&mut self) -> Result<()> {
        while self.parser.pos() + 4 < self.parser.len() {
            let offset = self.parser.pos();
            let raw = self.parser.peek_tag().ok_or_else(|| out_of_bounds_error!())?;
            let Some(tag) = SectionTag::from_bytes(&raw) else {
                return Err(invalid_error!(
                    "Unknown section tag {:?} at {:#x}",
                    String::from_utf8_lossy(&raw),
                    offset
                ));
            };
            self.parser.advance_by(4)?;

            if self.ain.sections.is_present(tag) {
                log::warn!("duplicate {} section at {:#x}", tag.name(), offset);
            }

            self.read_section(tag).map_err(|error| match error {
                Error::OutOfBounds => {
                    invalid_error!("Truncated {} section at {:#x}", tag.name(), offset)
                }
                Error::RecursionLimit(depth) => invalid_error!(
                    "Type nesting deeper than {} in {} section at {:#x}",
                    depth,
                    tag.name(),
                    offset
                ),
                other => other,
            })?;

            let size = self.parser.pos() - offset;
            log::debug!("{} section at {:#x}, {} bytes", tag.name(), offset, size);
            self.ain.sections.record(tag, offset, size);
        }
        Ok(())
    }

    fn set_version(&mut self, version: Version) {
        self.ctx.version = version;
        self.ain.version = version;
    }

    fn read_section(&mut self, tag: SectionTag) -> Result<()> {
        let parser = &mut self.parser;
        let ctx = self.ctx;
        let ain = &mut self.ain;

        match tag {
            SectionTag::Vers => {
                let major = parser.read_i32()?;
                self.set_version(Version::from_major(major));
            }
            SectionTag::Keyc => ain.keycode = parser.read_i32()?,
            SectionTag::Code => {
                let size = parser.read_count()?;
                ain.code = parser.read_bytes(size)?.to_vec();
            }
            SectionTag::Func => self.read_functions()?,
            SectionTag::Glob => {
                let count = parser.read_count()?;
                ain.globals = read_globals(parser, &ctx, count)?;
            }
            SectionTag::Gset => ain.initvals = read_initvals(parser, &ctx)?,
            SectionTag::Strt => ain.structures = read_structures(parser, &ctx)?,
            SectionTag::Msg0 => ain.messages = read_strings(parser, &ctx)?,
            SectionTag::Msg1 => {
                let (messages, unknown) = read_msg1_strings(parser, &ctx)?;
                ain.messages = messages;
                ain.msg1_uk = unknown;
            }
            SectionTag::Main => ain.main = parser.read_i32()?,
            SectionTag::Msgf => ain.msgf = parser.read_i32()?,
            SectionTag::Hll0 => ain.libraries = read_libraries(parser, &ctx)?,
            SectionTag::Swi0 => ain.switches = read_switches(parser)?,
            SectionTag::Gver => ain.game_version = parser.read_i32()?,
            SectionTag::Slbl => ain.scenario_labels = read_scenario_labels(parser, &ctx)?,
            SectionTag::Str0 => ain.strings = read_strings(parser, &ctx)?,
            SectionTag::Fnam => ain.filenames = read_strings(parser, &ctx)?,
            SectionTag::Ojmp => ain.ojmp = parser.read_i32()?,
            SectionTag::Fnct => self.ain.function_types = self.read_sized_function_types(tag)?,
            SectionTag::Delg => self.ain.delegates = self.read_sized_function_types(tag)?,
            SectionTag::Objg => ain.global_groups = read_strings(parser, &ctx)?,
            SectionTag::Enum => {
                ain.enums = read_strings(parser, &ctx)?
                    .into_iter()
                    .map(Enum::new)
                    .collect();
            }
        }
        Ok(())
    }

    /// `FUNC` body. Besides the functions themselves this notes the allocation function
    /// and applies the minor version exceptions, which take effect for the rest of the
    /// image.
    fn read_functions(&mut self) -> Result<()> {
        let count = self.parser.read_count()?;
        let mut functions = Vec::with_capacity(count);
        for index in 0..count {
            let function = read_function(&mut self.parser, &self.ctx)?;
            if function.name == "0" {
                self.ain.alloc = Some(index);
            }
            if let Some(quirk) = minor_version_quirk(self.ctx.version, &function.name) {
                log::warn!(
                    "{} detected via '{}': using version {}.{}",
                    quirk.origin,
                    quirk.function,
                    self.ctx.version.major,
                    quirk.minor
                );
                self.set_version(Version::new(self.ctx.version.major, quirk.minor));
            }
            functions.push(function);
        }
        self.ain.functions = functions;
        Ok(())
    }

    /// `FNCT` / `DELG` body: a recorded size followed by function types.
    fn read_sized_function_types(&mut self, tag: SectionTag) -> Result<Vec<FunctionType>> {
        let tag_offset = self.parser.pos() - 4;
        let recorded = self.parser.read_i32()?;
        let available = self.parser.len() - tag_offset;
        let fits = usize::try_from(recorded).is_ok_and(|size| size <= available);
        if !fits {
            return Err(invalid_error!(
                "{} section size {} exceeds the {} bytes left",
                tag.name(),
                recorded,
                available
            ));
        }

        let start = self.parser.pos();
        let types = read_function_types(&mut self.parser, &self.ctx)?;
        let consumed = self.parser.pos() - start;
        if usize::try_from(recorded).ok() != Some(consumed) {
            if self.options.strict_sizes {
                return Err(invalid_error!(
                    "{} section records {} bytes but holds {}",
                    tag.name(),
                    recorded,
                    consumed
                ));
            }
            log::warn!(
                "{} section records {} bytes but holds {}",
                tag.name(),
                recorded,
                consumed
            );
        }
        Ok(types)
    }

    fn finish(mut self) -> Result<Ain> {
        if !self.ain.sections.is_present(SectionTag::Vers) {
            return Err(invalid_error!("Container has no readable VERS section"));
        }

        if self.ain.sections.is_present(SectionTag::Msg1) && self.ain.version.major == 6 {
            let version = self.ain.version;
            self.set_version(Version::new(6, version.minor.max(1)));
        }

        let mut ain = self.ain;
        distribute_initvals(&mut ain)?;

        ain.rebuild_indices();
        if self.options.infer_membership {
            ain.infer_membership();
        }

        ain.instructions = InstructionSet::for_version(ain.version);

        if self.options.recover_enums {
            analysis::recover_enums(&mut ain);
        }
        Ok(ain)
    }
}

/// Copy every `GSET` value into the global it names.
fn distribute_initvals(ain: &mut Ain) -> Result<()> {
    let count = ain.globals.len();
    for initval in &ain.initvals {
        let global = usize::try_from(initval.global_index)
            .ok()
            .and_then(|index| ain.globals.get_mut(index))
            .ok_or_else(|| {
                invalid_error!(
                    "Initial value for global {} out of range ({} globals)",
                    initval.global_index,
                    count
                )
            })?;
        global.initval = Some(initval.value.clone());
    }
    Ok(())
}
