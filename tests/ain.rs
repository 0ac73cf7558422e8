//! Integration tests for loading containers and walking their bytecode through the public
//! API.

mod common;

use ainscope::{
    disassembler::opcodes,
    file::crypt,
    metadata::{
        sections::SectionTag,
        symbols::Enum,
        types::{render_type, DataKind, TypeDescriptor},
        version::Version,
    },
    prelude::*,
};
use common::{compress, ImageWriter};

fn small_v4_image() -> Vec<u8> {
    let mut code = ImageWriter::new();
    code.op(opcodes::FUNC, &[1])
        .op(opcodes::PUSH, &[3])
        .op(opcodes::RETURN, &[])
        .op(opcodes::ENDFUNC, &[1]);
    let code = code.build();

    let mut w = ImageWriter::new();
    w.tag(b"VERS").i32(4);
    w.tag(b"KEYC").i32(0);
    w.tag(b"CODE").i32(code.len() as i32).bytes(&code);
    w.tag(b"FUNC").i32(2);
    w.v4_function("NULL", 0).v4_function("foo", 6);
    w.tag(b"MAIN").i32(1);
    w.tag(b"STR0").i32(1).cstring("");
    w.build()
}

#[test]
fn test_missing_vers_is_invalid() {
    let mut w = ImageWriter::new();
    w.tag(b"MAIN").i32(1).tag(b"GVER").i32(100);
    let image = w.build();

    let err = Ain::from_mem(compress(&image)).unwrap_err();
    assert!(err.is_invalid(), "unexpected error: {err}");

    // No envelope matches a raw image without VERS, so it is rejected before parsing
    let err = Ain::from_mem(image).unwrap_err();
    assert!(matches!(err, Error::UnrecognizedFormat));

    let err = Ain::from_mem(b"VERS".to_vec()).unwrap_err();
    assert!(err.is_invalid(), "unexpected error: {err}");
}

#[test]
fn test_envelopes_load_the_same_container() -> Result<()> {
    let image = small_v4_image();
    let raw = Ain::from_mem(image.clone())?;

    let compressed = Ain::from_mem(compress(&image))?;
    assert_eq!(compressed.functions, raw.functions);

    let mut encrypted = image.clone();
    crypt::xor_crypt(&mut encrypted);
    let encrypted = Ain::from_mem(encrypted)?;
    assert_eq!(encrypted.code, raw.code);
    assert_eq!(encrypted.version(), Version::new(4, 0));
    Ok(())
}

#[test]
fn test_truncated_container_is_invalid() {
    let mut image = small_v4_image();
    image.truncate(image.len() - 3);
    assert!(Ain::from_mem(image).unwrap_err().is_invalid());
}

#[test]
fn test_function_lookup_and_overloads() -> Result<()> {
    let ain = Ain::from_mem(small_v4_image())?;
    assert_eq!(ain.get_function("foo"), Some(1));
    assert_eq!(ain.get_function("foo#0"), Some(1));
    assert_eq!(ain.get_function("foo#1"), None);
    assert_eq!(ain.get_function("bar"), None);
    Ok(())
}

#[test]
fn test_add_function_then_rebuild() -> Result<()> {
    let mut ain = Ain::from_mem(small_v4_image())?;
    let bar = ain.add_function("bar");
    assert_eq!(bar, 2);

    ain.rebuild_indices();
    assert_eq!(ain.get_function("bar"), Some(bar));

    let copy = ain.add_function("foo");
    ain.rebuild_indices();
    assert_eq!(ain.get_overloads("foo"), &[1, copy]);
    assert_eq!(ain.get_function("foo#1"), Some(copy));
    Ok(())
}

#[test]
fn test_disassembly_reaches_eof_and_masks_opcodes() -> Result<()> {
    let mut ain = Ain::from_mem(small_v4_image())?;
    // operand type bits on the PUSH word
    ain.code[6..8].copy_from_slice(&(opcodes::PUSH | 0x8000).to_le_bytes());

    let mut dasm = Disassembler::new(&ain);
    let mut lines = Vec::new();
    while !dasm.eof() {
        let address = dasm.address();
        let word = u16::from_le_bytes([ain.code[address], ain.code[address + 1]]);
        assert_eq!(dasm.opcode(), Some(word & 0x3FFF));
        lines.push(dasm.format());
        dasm.next();
    }

    assert!(dasm.address() >= ain.code.len());
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], "PUSH 3");
    Ok(())
}

#[test]
fn test_function_nesting() {
    let mut ain = Ain::new(4, 0);
    let mut code = ImageWriter::new();
    code.op(opcodes::PUSH, &[0])
        .op(opcodes::FUNC, &[7])
        .op(opcodes::PUSH, &[1])
        .op(opcodes::POP, &[])
        .op(opcodes::ENDFUNC, &[7])
        .op(opcodes::PUSH, &[2]);
    ain.code = code.build();

    let mut dasm = Disassembler::new(&ain);
    let mut seen = Vec::new();
    while !dasm.eof() {
        seen.push((dasm.opcode(), dasm.current_function()));
        dasm.next();
    }

    assert_eq!(
        seen,
        vec![
            (Some(opcodes::PUSH), None),
            (Some(opcodes::FUNC), Some(7)),
            (Some(opcodes::PUSH), Some(7)),
            (Some(opcodes::POP), Some(7)),
            (Some(opcodes::ENDFUNC), None),
            (Some(opcodes::PUSH), None),
        ]
    );
}

#[test]
fn test_nesting_beyond_ring_depth_loses_oldest() {
    let depth = ainscope::disassembler::FUNCTION_STACK_DEPTH + 2;
    let mut ain = Ain::new(4, 0);
    let mut code = ImageWriter::new();
    for function in 1..=depth {
        code.op(opcodes::FUNC, &[function as i32]);
    }
    for function in (1..=depth).rev() {
        code.op(opcodes::ENDFUNC, &[function as i32]);
    }
    ain.code = code.build();

    let mut dasm = Disassembler::new(&ain);
    let mut after_endfunc = Vec::new();
    while !dasm.eof() {
        if dasm.opcode() == Some(opcodes::ENDFUNC) {
            after_endfunc.push(dasm.current_function());
        }
        dasm.next();
    }

    // two more entries than the ring holds: function 1 and the empty outer slot are lost
    let expected: Vec<_> = (2..depth).rev().map(Some).chain([None, None]).collect();
    assert_eq!(after_endfunc, expected);
}

#[test]
fn test_enum_recovery_end_to_end() -> Result<()> {
    let mut code = ImageWriter::new();
    code.op(opcodes::FUNC, &[1])
        .op(opcodes::S_PUSH, &[1])
        .op(opcodes::S_PUSH, &[0])
        .op(opcodes::S_PUSH, &[2])
        .op(opcodes::ENDFUNC, &[1]);
    let code = code.build();

    let mut w = ImageWriter::new();
    w.tag(b"VERS").i32(14);
    w.tag(b"CODE").i32(code.len() as i32).bytes(&code);
    w.tag(b"FUNC").i32(2);
    w.v14_function("NULL", 0).v14_function("Color::ToString", 6);
    w.tag(b"STR0").i32(3).cstring("").cstring("Red").cstring("Green");
    w.tag(b"ENUM").i32(1).cstring("Color");
    let ain = Ain::from_mem(w.build())?;

    assert_eq!(ain.version(), Version::new(14, 1));
    assert_eq!(ain.enums, vec![Enum {
        name: "Color".to_string(),
        symbols: vec!["Red".to_string(), "Green".to_string()],
    }]);

    let ain = Ain::from_mem_with(w.build(), LoadOptions::minimal())?;
    assert!(ain.enums[0].symbols.is_empty());
    Ok(())
}

#[test]
fn test_version_14_exception() -> Result<()> {
    let mut w = ImageWriter::new();
    w.tag(b"VERS").i32(14);
    w.tag(b"FUNC").i32(2);
    w.v14_function("NULL", 0).v14_function("C_MedicaMenu@0", 0);
    w.tag(b"MAIN").i32(-1);
    let ain = Ain::from_mem(w.build())?;

    assert_eq!(ain.version(), Version::new(14, 0));
    assert_eq!(ain.instructions().version(), ain.version());
    assert!(ain.sections().is_present(SectionTag::Main));
    Ok(())
}

#[test]
fn test_nested_containers_render_without_double_bracket() {
    let int = TypeDescriptor::new(DataKind::Int);
    let array = TypeDescriptor::container(DataKind::Array, int);
    assert_eq!(render_type(None, Some(&array)), "array<int>");

    let nested = TypeDescriptor::container(DataKind::Array, array);
    let rendered = render_type(None, Some(&nested));
    assert!(!rendered.contains(">>"), "{rendered}");
    assert_eq!(rendered, "array<array<int> >");
}
