// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! VP8/VP9/VP10 codec configuration record, in its MP4 (`vpcC` box) and WebM
//! (`CodecPrivate`) forms, and the codec string derived from it.

mod codec_string;
pub mod color;
pub mod level;
pub mod mp4;
mod record;
pub mod webm;

use thiserror::Error;

pub use color::ChromaSubsampling;
pub use color::ColorPrimaries;
pub use color::MatrixCoefficients;
pub use color::TransferCharacteristics;
pub use mp4::Mp4ParseError;
pub use record::merge;
pub use record::ChromaSiting;
pub use record::VpCodecConfigurationRecord;
pub use record::DEFAULT_BIT_DEPTH;
pub use record::DEFAULT_LEVEL;
pub use record::DEFAULT_PROFILE;
pub use webm::WebmFeature;
pub use webm::WebmParseError;

/// Error returned by either of the record parsers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error(transparent)]
    Mp4(#[from] Mp4ParseError),
    #[error(transparent)]
    Webm(#[from] WebmParseError),
}

/// Container representation of the record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordFormat {
    Mp4,
    WebM,
}

impl VpCodecConfigurationRecord {
    /// Parses `data` in the given container representation.
    pub fn parse(&mut self, format: RecordFormat, data: &[u8]) -> Result<(), ParseError> {
        match format {
            RecordFormat::Mp4 => self.parse_mp4(data)?,
            RecordFormat::WebM => self.parse_webm(data)?,
        }

        Ok(())
    }

    /// Appends the given container representation of the record to `data`.
    pub fn write(&self, format: RecordFormat, data: &mut Vec<u8>) {
        match format {
            RecordFormat::Mp4 => self.write_mp4(data),
            RecordFormat::WebM => self.write_webm(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_are_wrapped() {
        let mut record = VpCodecConfigurationRecord::default();

        assert!(matches!(
            record.parse(RecordFormat::Mp4, &[0; 4]),
            Err(ParseError::Mp4(Mp4ParseError::TooShort { .. }))
        ));
        assert!(matches!(
            record.parse(RecordFormat::WebM, &[0x01]),
            Err(ParseError::Webm(WebmParseError::MissingLength { id: 1 }))
        ));
    }

    const VPCC_BT709: &[u8] = &[0x00, 0x1f, 0x82, 0x01, 0x01, 0x01, 0x00, 0x00];

    #[test]
    fn mp4_to_webm() {
        let mut record = VpCodecConfigurationRecord::default();
        record.parse(RecordFormat::Mp4, VPCC_BT709).unwrap();

        let mut webm = Vec::new();
        record.write(RecordFormat::WebM, &mut webm);
        assert_eq!(webm, [1, 1, 0x00, 2, 1, 0x1f, 3, 1, 8, 4, 1, 1, 5, 1, 1, 6, 1, 1, 7, 1, 1]);

        let mut from_webm = VpCodecConfigurationRecord::default();
        from_webm.parse(RecordFormat::WebM, &webm).unwrap();
        assert_eq!(from_webm.codec_string(crate::VpCodec::Vp9), "vp09.00.31.08.01.01.01.01.00");
    }
}
