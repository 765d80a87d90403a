#![no_main]
use libfuzzer_sys::fuzz_target;

use esc::EscapeContext;

fuzz_target!(|data: &[u8]| {
    for ctxt in [
        EscapeContext::Unquoted,
        EscapeContext::SingleQuoted,
        EscapeContext::DoubleQuoted,
    ] {
        let out = esc::escape(ctxt, data);

        // Output never shrinks, and each input byte maps to either itself or
        // a backslash-prefixed pair — verify by walking both buffers.
        assert!(out.len() >= data.len());

        let mut i = 0usize;
        for &b in data {
            if ctxt.must_escape(b) {
                assert_eq!(out[i], b'\\', "missing backslash before {:#04x}", b);
                i += 1;
            }
            assert_eq!(out[i], b, "byte {:#04x} not preserved", b);
            i += 1;
        }
        assert_eq!(i, out.len(), "trailing bytes in escaped output");
    }
});
