#![no_main]

use binstream::ByteStream;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((selectors, payload)) = data.split_first_chunk::<4>() else {
        return;
    };

    let mut stream = ByteStream::from_bytes(payload);
    for selector in selectors.iter().cycle().take(64) {
        let before = stream.offset();
        let ok = match selector % 12 {
            0 => stream.get_bool().is_ok(),
            1 => stream.get_short().is_ok(),
            2 => stream.get_ltriad().is_ok(),
            3 => stream.get_int().is_ok(),
            4 => stream.get_lfloat().is_ok(),
            5 => stream.get_double().is_ok(),
            6 => stream.get_llong().is_ok(),
            7 => stream.get_unsigned_var_int().is_ok(),
            8 => stream.get_var_int().is_ok(),
            9 => stream.get_unsigned_var_long().is_ok(),
            10 => stream.get_var_long().is_ok(),
            _ => stream.get_string(usize::from(*selector >> 4)).is_ok(),
        };

        assert!(stream.offset() <= stream.len());
        if !ok {
            assert_eq!(stream.offset(), before);
        }
    }
});
