#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = match std::str::from_utf8(data) {
        Ok(s) => s,
        Err(_) => return,
    };
    let mid = s.len() / 2;
    let (a, b) = s.split_at(mid);
    if let Ok(score) = ffuzzy::compare(a, b) {
        assert!((0..=100).contains(&score), "score {} out of range", score);
    }
});
