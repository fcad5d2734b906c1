#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = match std::str::from_utf8(data) {
        Ok(s) => s,
        Err(_) => return,
    };
    if let Ok(digest) = ffuzzy::read_digest(s) {
        let mut buf = [0u8; 256];
        if digest.pretty(&mut buf) {
            let nul = buf.iter().position(|&b| b == 0).unwrap();
            let pretty = std::str::from_utf8(&buf[..nul]).expect("pretty output is not UTF-8");
            let reparsed =
                ffuzzy::read_digest(pretty).expect("pretty-printed digest failed to reparse");
            assert_eq!(digest, reparsed, "pretty-print/reparse round trip changed the digest");
        }
    }
});
