// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! `VPCodecConfigurationBox` payload, as laid out by the VP codec ISO media
//! file format binding (version 1):
//!
//! ```text
//! profile                   u(8)
//! level                     u(8)
//! bitDepth                  u(4)
//! chromaSubsampling         u(3)
//! videoFullRangeFlag        u(1)
//! colourPrimaries           u(8)
//! transferCharacteristics   u(8)
//! matrixCoefficients        u(8)
//! codecIntializationDataSize u(16)
//! codecIntializationData    u(8)[codecIntializationDataSize]
//! ```

use bitreader::BitReader;
use bitreader::BitReaderError;
use byteorder::BigEndian;
use byteorder::ByteOrder;
use log::debug;
use thiserror::Error;

use crate::codec::vpcc::ChromaSubsampling;
use crate::codec::vpcc::ColorPrimaries;
use crate::codec::vpcc::MatrixCoefficients;
use crate::codec::vpcc::TransferCharacteristics;
use crate::codec::vpcc::VpCodecConfigurationRecord;

/// Size of the fixed part of the record, up to and including the codec
/// initialization data size.
pub const MP4_HEADER_SIZE: usize = 8;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Mp4ParseError {
    #[error("record is too short: need {needed} bytes, got {available}")]
    TooShort { needed: usize, available: usize },
    #[error("codec initialization data size {declared} exceeds the {available} remaining bytes")]
    CodecInitDataTooLong { declared: usize, available: usize },
    #[error(transparent)]
    BitReader(#[from] BitReaderError),
}

impl VpCodecConfigurationRecord {
    /// Parses `data` as the payload of an MP4 `vpcC` box.
    ///
    /// On success every scalar field is set, even those holding their default
    /// value. On failure `self` is left untouched.
    pub fn parse_mp4(&mut self, data: &[u8]) -> Result<(), Mp4ParseError> {
        if data.len() < MP4_HEADER_SIZE {
            return Err(Mp4ParseError::TooShort { needed: MP4_HEADER_SIZE, available: data.len() });
        }

        let mut reader = BitReader::new(data);
        let mut record = self.clone();

        record.set_profile(reader.read_u8(8)?);
        record.set_level(reader.read_u8(8)?);
        record.set_bit_depth(reader.read_u8(4)?);
        record.set_chroma_subsampling(ChromaSubsampling(reader.read_u8(3)?));
        record.set_video_full_range_flag(reader.read_bool()?);
        record.set_color_primaries(ColorPrimaries(reader.read_u8(8)?));
        record.set_transfer_characteristics(TransferCharacteristics(reader.read_u8(8)?));
        record.set_matrix_coefficients(MatrixCoefficients(reader.read_u8(8)?));

        let codec_init_data_size = reader.read_u16(16)? as usize;
        let remaining = &data[MP4_HEADER_SIZE..];
        if codec_init_data_size > remaining.len() {
            return Err(Mp4ParseError::CodecInitDataTooLong {
                declared: codec_init_data_size,
                available: remaining.len(),
            });
        }
        record.set_codec_initialization_data(&remaining[..codec_init_data_size]);

        debug!(
            "Parsed vpcC: profile {} level {} bit depth {}",
            record.profile(),
            record.level(),
            record.bit_depth()
        );

        *self = record;
        Ok(())
    }

    /// Appends the MP4 `vpcC` payload for this record to `data`. Unset fields
    /// are written with their default value.
    ///
    /// Bit depth and chroma subsampling are truncated to the width of their
    /// bit fields. Codec initialization data longer than 65535 bytes is
    /// truncated to that size.
    pub fn write_mp4(&self, data: &mut Vec<u8>) {
        let codec_init_data = self.codec_initialization_data();
        let codec_init_data = &codec_init_data[..codec_init_data.len().min(u16::MAX as usize)];

        let mut header = [0u8; MP4_HEADER_SIZE];
        header[0] = self.profile();
        header[1] = self.level();
        header[2] = ((self.bit_depth() & 0x0f) << 4)
            | ((self.chroma_subsampling().0 & 0x07) << 1)
            | u8::from(self.video_full_range_flag());
        header[3] = self.color_primaries().0;
        header[4] = self.transfer_characteristics().0;
        header[5] = self.matrix_coefficients().0;
        BigEndian::write_u16(&mut header[6..], codec_init_data.len() as u16);

        data.extend_from_slice(&header);
        data.extend_from_slice(codec_init_data);
    }
}
