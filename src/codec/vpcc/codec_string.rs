// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::codec::vpcc::ChromaSubsampling;
use crate::codec::vpcc::ColorPrimaries;
use crate::codec::vpcc::MatrixCoefficients;
use crate::codec::vpcc::TransferCharacteristics;
use crate::codec::vpcc::VpCodecConfigurationRecord;
use crate::VpCodec;

/// Number of leading fields that are always part of the codec string:
/// profile, level and bit depth.
const MANDATORY_FIELDS: usize = 3;

impl VpCodecConfigurationRecord {
    /// Returns the codec string for this record, e.g. `vp09.00.10.08`, using
    /// the FourCC of `codec` as prefix.
    pub fn codec_string(&self, codec: VpCodec) -> String {
        self.codec_string_with_prefix(codec.fourcc())
    }

    /// Returns the codec string for this record with an arbitrary prefix.
    ///
    /// The five optional fields (chroma subsampling, colour primaries,
    /// transfer characteristics, matrix coefficients and full range flag) are
    /// emitted either all together or not at all. They are omitted only when
    /// every one of them holds its default value.
    pub fn codec_string_with_prefix(&self, prefix: &str) -> String {
        let fields = [
            self.profile(),
            self.level(),
            self.bit_depth(),
            self.chroma_subsampling().0,
            self.color_primaries().0,
            self.transfer_characteristics().0,
            self.matrix_coefficients().0,
            u8::from(self.video_full_range_flag()),
        ];
        let optional_defaults = [
            ChromaSubsampling::default().0,
            ColorPrimaries::default().0,
            TransferCharacteristics::default().0,
            MatrixCoefficients::default().0,
            0,
        ];

        // A single non-default optional field pins all of them.
        let has_optional_fields = fields[MANDATORY_FIELDS..]
            .iter()
            .zip(optional_defaults.iter())
            .any(|(value, default)| value != default);
        let num_fields = if has_optional_fields { fields.len() } else { MANDATORY_FIELDS };

        std::iter::once(prefix.to_string())
            .chain(fields[..num_fields].iter().map(|field| format!("{:02}", field)))
            .collect::<Vec<_>>()
            .join(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_defaults_are_truncated() {
        let record = VpCodecConfigurationRecord::default();
        assert_eq!(record.codec_string(VpCodec::Vp9), "vp09.00.10.08");
        assert_eq!(record.codec_string(VpCodec::Vp8), "vp08.00.10.08");
        assert_eq!(record.codec_string(VpCodec::Vp10), "vp10.00.10.08");
    }

    #[test]
    fn fields_set_to_defaults_are_truncated() {
        let record = VpCodecConfigurationRecord::new(
            0,
            10,
            8,
            ChromaSubsampling::CHROMA_420_COLLOCATED_WITH_LUMA,
            false,
            ColorPrimaries::UNSPECIFIED,
            TransferCharacteristics::UNSPECIFIED,
            MatrixCoefficients::UNSPECIFIED,
            &[],
        );
        assert_eq!(record.codec_string(VpCodec::Vp9), "vp09.00.10.08");
    }

    #[test]
    fn non_default_matrix_keeps_all_fields() {
        let mut record = VpCodecConfigurationRecord::default();
        record.set_matrix_coefficients(MatrixCoefficients::BT709);
        assert_eq!(record.codec_string(VpCodec::Vp9), "vp09.00.10.08.01.02.02.01.00");
    }

    #[test]
    fn non_default_full_range_keeps_all_fields() {
        let mut record = VpCodecConfigurationRecord::default();
        record.set_video_full_range_flag(true);
        assert_eq!(record.codec_string(VpCodec::Vp9), "vp09.00.10.08.01.02.02.02.01");
    }

    #[test]
    fn non_default_chroma_keeps_all_fields() {
        let mut record = VpCodecConfigurationRecord::default();
        record.set_profile(1);
        record.set_chroma_subsampling(ChromaSubsampling::CHROMA_444);
        assert_eq!(record.codec_string(VpCodec::Vp9), "vp09.01.10.08.03.02.02.02.00");
    }

    #[test]
    fn hdr_codec_string() {
        let record = VpCodecConfigurationRecord::new(
            2,
            51,
            10,
            ChromaSubsampling::CHROMA_420_VERTICAL,
            false,
            ColorPrimaries::BT2020,
            TransferCharacteristics::SMPTE2084,
            MatrixCoefficients::BT2020_NCL,
            &[],
        );
        assert_eq!(record.codec_string(VpCodec::Vp9), "vp09.02.51.10.00.09.16.09.00");
    }

    #[test]
    fn mandatory_fields_are_never_truncated() {
        let mut record = VpCodecConfigurationRecord::default();
        record.set_level(0);
        record.set_bit_depth(0);
        assert_eq!(record.codec_string_with_prefix("vp09"), "vp09.00.00.00");
        assert_eq!(record.codec_string_with_prefix("av01"), "av01.00.00.00");
    }
}
