#![no_main]
use libfuzzer_sys::fuzz_target;
use raw_pack::{encode, BufferView, EncodingMode, PayloadFamily};

fuzz_target!(|data: &[u8]| {
    let view = BufferView::from_bytes(data);
    for (family, mode) in [
        (PayloadFamily::Str, EncodingMode::LegacyRaw),
        (PayloadFamily::Bin, EncodingMode::LegacyRaw),
        (PayloadFamily::Str, EncodingMode::BinaryAware),
        (PayloadFamily::Bin, EncodingMode::BinaryAware),
    ] {
        let out = encode(&view, family, mode).unwrap();
        // Tag + prefix + payload, nothing else, payload verbatim.
        assert!(out.len() >= 1 + data.len());
        assert!(out.len() <= 5 + data.len());
        assert_eq!(&out[out.len() - data.len()..], data);
    }
});
