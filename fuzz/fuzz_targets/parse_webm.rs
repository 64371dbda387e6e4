#![no_main]

use libfuzzer_sys::fuzz_target;
use vpcc::VpCodec;
use vpcc::VpCodecConfigurationRecord;

fuzz_target!(|data: &[u8]| {
    let mut record = VpCodecConfigurationRecord::default();
    if record.parse_webm(data).is_err() {
        assert_eq!(record, VpCodecConfigurationRecord::default());
        return;
    }

    let mut out = Vec::new();
    record.write_webm(&mut out);
    let mut reparsed = VpCodecConfigurationRecord::default();
    reparsed.parse_webm(&out).unwrap();
    assert_eq!(reparsed, record);
    let _ = record.codec_string(VpCodec::Vp9);
});
