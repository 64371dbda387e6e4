// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use enumn::N;

use crate::codec::vpcc::color::ChromaSubsampling;
use crate::codec::vpcc::color::ColorPrimaries;
use crate::codec::vpcc::color::MatrixCoefficients;
use crate::codec::vpcc::color::TransferCharacteristics;

pub const DEFAULT_PROFILE: u8 = 0;
/// Level 1.0.
pub const DEFAULT_LEVEL: u8 = 10;
pub const DEFAULT_BIT_DEPTH: u8 = 8;

/// Chroma siting along one axis, as signalled by the Matroska
/// `ChromaSitingHorz` and `ChromaSitingVert` elements.
#[derive(N, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum ChromaSiting {
    #[default]
    Unspecified = 0,
    /// Left collocated horizontally, top collocated vertically.
    Collocated = 1,
    Half = 2,
}

/// Location of 4:2:0 chroma samples relative to luma.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ChromaLocation {
    TopLeft,
    Left,
}

/// VP8/VP9/VP10 codec configuration record.
///
/// Every field is tracked as either unset or set. Accessors substitute the
/// documented default for an unset field, so an unset field and one set to
/// its default read identically. The distinction only shows through
/// [`VpCodecConfigurationRecord::merge_from`], the WebM writer, and the
/// `is_*_set` queries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VpCodecConfigurationRecord {
    profile: Option<u8>,
    level: Option<u8>,
    bit_depth: Option<u8>,
    chroma_subsampling: Option<ChromaSubsampling>,
    video_full_range_flag: Option<bool>,
    color_primaries: Option<ColorPrimaries>,
    transfer_characteristics: Option<TransferCharacteristics>,
    matrix_coefficients: Option<MatrixCoefficients>,
    codec_initialization_data: Option<Vec<u8>>,

    // Bitstream subsampling factors and siting, used to pick between the two
    // 4:2:0 variants.
    subsampling: Option<(u8, u8)>,
    chroma_location: Option<ChromaLocation>,
}

impl VpCodecConfigurationRecord {
    /// Creates a record with every field set.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        profile: u8,
        level: u8,
        bit_depth: u8,
        chroma_subsampling: ChromaSubsampling,
        video_full_range_flag: bool,
        color_primaries: ColorPrimaries,
        transfer_characteristics: TransferCharacteristics,
        matrix_coefficients: MatrixCoefficients,
        codec_initialization_data: &[u8],
    ) -> Self {
        Self {
            profile: Some(profile),
            level: Some(level),
            bit_depth: Some(bit_depth),
            chroma_subsampling: Some(chroma_subsampling),
            video_full_range_flag: Some(video_full_range_flag),
            color_primaries: Some(color_primaries),
            transfer_characteristics: Some(transfer_characteristics),
            matrix_coefficients: Some(matrix_coefficients),
            codec_initialization_data: Some(codec_initialization_data.to_vec()),
            subsampling: None,
            chroma_location: None,
        }
    }

    pub fn set_profile(&mut self, profile: u8) {
        self.profile = Some(profile);
    }

    pub fn set_level(&mut self, level: u8) {
        self.level = Some(level);
    }

    pub fn set_bit_depth(&mut self, bit_depth: u8) {
        self.bit_depth = Some(bit_depth);
    }

    pub fn set_chroma_subsampling(&mut self, chroma_subsampling: ChromaSubsampling) {
        self.chroma_subsampling = Some(chroma_subsampling);
    }

    pub fn set_video_full_range_flag(&mut self, video_full_range_flag: bool) {
        self.video_full_range_flag = Some(video_full_range_flag);
    }

    pub fn set_color_primaries(&mut self, color_primaries: ColorPrimaries) {
        self.color_primaries = Some(color_primaries);
    }

    pub fn set_transfer_characteristics(
        &mut self,
        transfer_characteristics: TransferCharacteristics,
    ) {
        self.transfer_characteristics = Some(transfer_characteristics);
    }

    pub fn set_matrix_coefficients(&mut self, matrix_coefficients: MatrixCoefficients) {
        self.matrix_coefficients = Some(matrix_coefficients);
    }

    pub fn set_codec_initialization_data(&mut self, data: &[u8]) {
        self.codec_initialization_data = Some(data.to_vec());
    }

    pub fn profile(&self) -> u8 {
        self.profile.unwrap_or(DEFAULT_PROFILE)
    }

    pub fn level(&self) -> u8 {
        self.level.unwrap_or(DEFAULT_LEVEL)
    }

    pub fn bit_depth(&self) -> u8 {
        self.bit_depth.unwrap_or(DEFAULT_BIT_DEPTH)
    }

    pub fn chroma_subsampling(&self) -> ChromaSubsampling {
        self.chroma_subsampling.unwrap_or_default()
    }

    pub fn video_full_range_flag(&self) -> bool {
        self.video_full_range_flag.unwrap_or(false)
    }

    pub fn color_primaries(&self) -> ColorPrimaries {
        self.color_primaries.unwrap_or_default()
    }

    pub fn transfer_characteristics(&self) -> TransferCharacteristics {
        self.transfer_characteristics.unwrap_or_default()
    }

    pub fn matrix_coefficients(&self) -> MatrixCoefficients {
        self.matrix_coefficients.unwrap_or_default()
    }

    /// Opaque codec initialization data. Empty when never set.
    pub fn codec_initialization_data(&self) -> &[u8] {
        self.codec_initialization_data.as_deref().unwrap_or_default()
    }

    pub fn is_profile_set(&self) -> bool {
        self.profile.is_some()
    }

    pub fn is_level_set(&self) -> bool {
        self.level.is_some()
    }

    pub fn is_bit_depth_set(&self) -> bool {
        self.bit_depth.is_some()
    }

    pub fn is_chroma_subsampling_set(&self) -> bool {
        self.chroma_subsampling.is_some()
    }

    pub fn is_video_full_range_flag_set(&self) -> bool {
        self.video_full_range_flag.is_some()
    }

    pub fn is_color_primaries_set(&self) -> bool {
        self.color_primaries.is_some()
    }

    pub fn is_transfer_characteristics_set(&self) -> bool {
        self.transfer_characteristics.is_some()
    }

    pub fn is_matrix_coefficients_set(&self) -> bool {
        self.matrix_coefficients.is_some()
    }

    pub fn is_codec_initialization_data_set(&self) -> bool {
        self.codec_initialization_data.is_some()
    }

    /// Merges the values from `other` into `self`. Fields set in `other` take
    /// precedence; fields unset in `other` keep their current state.
    pub fn merge_from(&mut self, other: &Self) {
        fn override_with<T: Clone>(dst: &mut Option<T>, src: &Option<T>) {
            if src.is_some() {
                dst.clone_from(src);
            }
        }

        override_with(&mut self.profile, &other.profile);
        override_with(&mut self.level, &other.level);
        override_with(&mut self.bit_depth, &other.bit_depth);
        override_with(&mut self.chroma_subsampling, &other.chroma_subsampling);
        override_with(&mut self.video_full_range_flag, &other.video_full_range_flag);
        override_with(&mut self.color_primaries, &other.color_primaries);
        override_with(&mut self.transfer_characteristics, &other.transfer_characteristics);
        override_with(&mut self.matrix_coefficients, &other.matrix_coefficients);
        override_with(&mut self.codec_initialization_data, &other.codec_initialization_data);
        override_with(&mut self.subsampling, &other.subsampling);
        override_with(&mut self.chroma_location, &other.chroma_location);

        if other.subsampling.is_some() || other.chroma_location.is_some() {
            self.update_chroma_subsampling();
        }
    }

    /// Sets the chroma subsampling from the `subsampling_x` and `subsampling_y`
    /// flags of a VP9 uncompressed header.
    pub fn set_chroma_subsampling_from_factors(&mut self, subsampling_x: u8, subsampling_y: u8) {
        self.subsampling = Some((subsampling_x, subsampling_y));
        self.update_chroma_subsampling();
    }

    /// Records the chroma siting, as signalled by a Matroska `Colour` element.
    /// Only the two sitings with a 4:2:0 counterpart in the record are
    /// retained.
    pub fn set_chroma_location(&mut self, horizontal: ChromaSiting, vertical: ChromaSiting) {
        self.chroma_location = match (horizontal, vertical) {
            (ChromaSiting::Collocated, ChromaSiting::Collocated) => Some(ChromaLocation::TopLeft),
            (ChromaSiting::Collocated, ChromaSiting::Half) => Some(ChromaLocation::Left),
            _ => {
                log::warn!("Ignoring unsupported chroma siting ({:?}, {:?})", horizontal, vertical);
                return;
            }
        };
        self.update_chroma_subsampling();
    }

    fn update_chroma_subsampling(&mut self) {
        let Some(subsampling) = self.subsampling else {
            return;
        };

        let chroma_subsampling = match subsampling {
            (0, 0) => ChromaSubsampling::CHROMA_444,
            (1, 0) => ChromaSubsampling::CHROMA_422,
            (0, 1) => ChromaSubsampling::CHROMA_440,
            (1, 1) => match self.chroma_location {
                Some(ChromaLocation::Left) => ChromaSubsampling::CHROMA_420_VERTICAL,
                Some(ChromaLocation::TopLeft) | None => {
                    ChromaSubsampling::CHROMA_420_COLLOCATED_WITH_LUMA
                }
            },
            (x, y) => {
                log::warn!("Invalid chroma subsampling factors ({}, {})", x, y);
                return;
            }
        };

        self.chroma_subsampling = Some(chroma_subsampling);
    }
}

/// Returns `base` with every field set in `override_` replaced by the
/// overriding value.
pub fn merge(
    base: &VpCodecConfigurationRecord,
    override_: &VpCodecConfigurationRecord,
) -> VpCodecConfigurationRecord {
    let mut merged = base.clone();
    merged.merge_from(override_);
    merged
}
