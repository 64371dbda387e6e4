#![no_main]

use libfuzzer_sys::fuzz_target;
use vpcc::VpCodec;
use vpcc::VpCodecConfigurationRecord;

fuzz_target!(|data: &[u8]| {
    let mut record = VpCodecConfigurationRecord::default();
    if record.parse_mp4(data).is_err() {
        assert_eq!(record, VpCodecConfigurationRecord::default());
        return;
    }

    let mut out = Vec::new();
    record.write_mp4(&mut out);
    assert!(data.starts_with(&out));
    let _ = record.codec_string(VpCodec::Vp9);
});
