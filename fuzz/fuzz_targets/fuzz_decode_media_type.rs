#![no_main]

use libfuzzer_sys::fuzz_target;
use pgrst_media::{decode_media_type, to_content_type, to_mime};

fuzz_target!(|data: &[u8]| {
    // Decoding never fails and is deterministic
    let mt = decode_media_type(data);
    assert_eq!(mt, decode_media_type(data));

    // Every decoded value has a wire form
    let mime = to_mime(&mt);
    let (_, value) = to_content_type(&mt);
    assert!(value.starts_with(&mime));
});
