#![no_main]

use ainscope::{Ain, Disassembler};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(ain) = Ain::from_mem(data.to_vec()) {
        let mut dasm = Disassembler::new(&ain);
        while !dasm.eof() && !dasm.instruction().is_sentinel() {
            let _ = dasm.format();
            dasm.next();
        }
    }
});
