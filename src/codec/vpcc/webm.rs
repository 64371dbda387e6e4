// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! WebM `CodecPrivate` representation of the record: a flat list of
//! `ID (1 byte) | length (1 byte) | value (length bytes)` features.

use enumn::N;
use log::debug;
use log::warn;
use thiserror::Error;

use crate::codec::vpcc::ChromaSubsampling;
use crate::codec::vpcc::ColorPrimaries;
use crate::codec::vpcc::MatrixCoefficients;
use crate::codec::vpcc::TransferCharacteristics;
use crate::codec::vpcc::VpCodecConfigurationRecord;

/// Feature IDs of the WebM codec private data.
///
/// 1 to 4 are the VP9 codec features registered for Matroska. 5 to 7 carry
/// the colour description and are skipped as unknown by readers that
/// predate them.
#[derive(N, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum WebmFeature {
    Profile = 1,
    Level = 2,
    BitDepth = 3,
    ChromaSubsampling = 4,
    ColorPrimaries = 5,
    TransferCharacteristics = 6,
    MatrixCoefficients = 7,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WebmParseError {
    #[error("feature {id} has no length byte")]
    MissingLength { id: u8 },
    #[error("feature {id} declares {length} bytes but only {available} remain")]
    ValueTooLong { id: u8, length: usize, available: usize },
    #[error("feature {id:?} must be 1 byte long, got {length}")]
    InvalidFeatureLength { id: WebmFeature, length: usize },
}

impl VpCodecConfigurationRecord {
    /// Parses `data` as WebM codec private data. Unknown features are
    /// skipped. On failure `self` is left untouched.
    pub fn parse_webm(&mut self, data: &[u8]) -> Result<(), WebmParseError> {
        let mut record = self.clone();
        let mut data = data;

        while let Some((&id, rest)) = data.split_first() {
            let Some((&length, rest)) = rest.split_first() else {
                return Err(WebmParseError::MissingLength { id });
            };
            let length = length as usize;
            if length > rest.len() {
                return Err(WebmParseError::ValueTooLong { id, length, available: rest.len() });
            }
            let (value, rest) = rest.split_at(length);
            data = rest;

            let Some(feature) = WebmFeature::n(id) else {
                warn!("Skipping unknown VP codec feature {} ({} bytes)", id, length);
                continue;
            };
            let &[value] = value else {
                return Err(WebmParseError::InvalidFeatureLength { id: feature, length });
            };

            match feature {
                WebmFeature::Profile => record.set_profile(value),
                WebmFeature::Level => record.set_level(value),
                WebmFeature::BitDepth => record.set_bit_depth(value),
                WebmFeature::ChromaSubsampling => {
                    record.set_chroma_subsampling(ChromaSubsampling(value))
                }
                WebmFeature::ColorPrimaries => record.set_color_primaries(ColorPrimaries(value)),
                WebmFeature::TransferCharacteristics => {
                    record.set_transfer_characteristics(TransferCharacteristics(value))
                }
                WebmFeature::MatrixCoefficients => {
                    record.set_matrix_coefficients(MatrixCoefficients(value))
                }
            }
        }

        debug!("Parsed WebM codec private: {:?}", record);

        *self = record;
        Ok(())
    }

    /// Appends the WebM codec private data for this record to `data`. Only set
    /// fields are written, in ascending feature ID order.
    pub fn write_webm(&self, data: &mut Vec<u8>) {
        let features = [
            (WebmFeature::Profile, self.is_profile_set(), self.profile()),
            (WebmFeature::Level, self.is_level_set(), self.level()),
            (WebmFeature::BitDepth, self.is_bit_depth_set(), self.bit_depth()),
            (
                WebmFeature::ChromaSubsampling,
                self.is_chroma_subsampling_set(),
                self.chroma_subsampling().0,
            ),
            (WebmFeature::ColorPrimaries, self.is_color_primaries_set(), self.color_primaries().0),
            (
                WebmFeature::TransferCharacteristics,
                self.is_transfer_characteristics_set(),
                self.transfer_characteristics().0,
            ),
            (
                WebmFeature::MatrixCoefficients,
                self.is_matrix_coefficients_set(),
                self.matrix_coefficients().0,
            ),
        ];

        for (feature, _, value) in features.into_iter().filter(|(_, set, _)| *set) {
            data.extend_from_slice(&[feature as u8, 1, value]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_partial_record() {
        let mut record = VpCodecConfigurationRecord::default();
        record.parse_webm(&[0x01, 0x01, 0x02, 0x03, 0x01, 0x0a]).unwrap();

        assert_eq!(record.profile(), 2);
        assert_eq!(record.bit_depth(), 10);
        assert_eq!(record.level(), 10);
        assert_eq!(record.chroma_subsampling(), ChromaSubsampling::CHROMA_420_COLLOCATED_WITH_LUMA);
        assert!(!record.is_level_set());
        assert!(!record.is_chroma_subsampling_set());
    }

    #[test]
    fn parse_skips_unknown_features() {
        let _ = env_logger::try_init();

        let mut record = VpCodecConfigurationRecord::default();
        let data = [0x40, 0x03, 0xaa, 0xbb, 0xcc, 0x02, 0x01, 0x29, 0x00, 0x00];
        record.parse_webm(&data).unwrap();

        assert_eq!(record.level(), 41);
        assert!(!record.is_profile_set());
    }

    #[test]
    fn parse_empty() {
        let mut record = VpCodecConfigurationRecord::default();
        record.parse_webm(&[]).unwrap();
        assert_eq!(record, VpCodecConfigurationRecord::default());
    }

    #[test]
    fn malformed_input_leaves_record_untouched() {
        let mut record = VpCodecConfigurationRecord::default();
        record.set_bit_depth(12);
        let before = record.clone();

        assert_eq!(
            record.parse_webm(&[0x01, 0x01, 0x01, 0x02]),
            Err(WebmParseError::MissingLength { id: 2 })
        );
        assert_eq!(record, before);

        assert_eq!(
            record.parse_webm(&[0x01, 0x01, 0x01, 0x09, 0x04, 0x00]),
            Err(WebmParseError::ValueTooLong { id: 9, length: 4, available: 1 })
        );
        assert_eq!(record, before);

        assert_eq!(
            record.parse_webm(&[0x03, 0x02, 0x0a, 0x00]),
            Err(WebmParseError::InvalidFeatureLength { id: WebmFeature::BitDepth, length: 2 })
        );
        assert_eq!(record, before);
    }

    #[test]
    fn write_unset_record_is_empty() {
        let mut out = Vec::new();
        VpCodecConfigurationRecord::default().write_webm(&mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn write_uses_canonical_order() {
        let mut record = VpCodecConfigurationRecord::default();
        record.set_matrix_coefficients(MatrixCoefficients::BT709);
        record.set_bit_depth(8);
        record.set_profile(1);
        // Not carried by the WebM representation.
        record.set_video_full_range_flag(true);
        record.set_codec_initialization_data(&[1, 2, 3]);

        let mut out = Vec::new();
        record.write_webm(&mut out);
        assert_eq!(out, [0x01, 0x01, 0x01, 0x03, 0x01, 0x08, 0x07, 0x01, 0x01]);

        let mut parsed = VpCodecConfigurationRecord::default();
        parsed.parse_webm(&out).unwrap();
        assert_eq!(parsed.profile(), 1);
        assert_eq!(parsed.bit_depth(), 8);
        assert!(parsed.is_bit_depth_set());
        assert_eq!(parsed.matrix_coefficients(), MatrixCoefficients::BT709);
        assert!(!parsed.is_video_full_range_flag_set());
        assert!(parsed.codec_initialization_data().is_empty());
    }
}
