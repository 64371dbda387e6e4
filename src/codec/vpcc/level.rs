// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use log::warn;

use crate::codec::vpcc::VpCodecConfigurationRecord;

struct LevelLimits {
    level: u8,
    max_sample_rate: u64,
    max_picture_size: u32,
}

/// VP9 level limits, see https://www.webmproject.org/vp9/levels/.
const VP9_LEVELS: [LevelLimits; 14] = [
    LevelLimits { level: 10, max_sample_rate: 829_440, max_picture_size: 36_864 },
    LevelLimits { level: 11, max_sample_rate: 2_764_800, max_picture_size: 73_728 },
    LevelLimits { level: 20, max_sample_rate: 4_608_000, max_picture_size: 122_880 },
    LevelLimits { level: 21, max_sample_rate: 9_216_000, max_picture_size: 245_760 },
    LevelLimits { level: 30, max_sample_rate: 20_736_000, max_picture_size: 552_960 },
    LevelLimits { level: 31, max_sample_rate: 36_864_000, max_picture_size: 983_040 },
    LevelLimits { level: 40, max_sample_rate: 83_558_400, max_picture_size: 2_228_224 },
    LevelLimits { level: 41, max_sample_rate: 160_432_128, max_picture_size: 2_228_224 },
    LevelLimits { level: 50, max_sample_rate: 311_951_360, max_picture_size: 8_912_896 },
    LevelLimits { level: 51, max_sample_rate: 588_251_136, max_picture_size: 8_912_896 },
    LevelLimits { level: 52, max_sample_rate: 1_176_502_272, max_picture_size: 8_912_896 },
    LevelLimits { level: 60, max_sample_rate: 1_176_502_272, max_picture_size: 35_651_584 },
    LevelLimits { level: 61, max_sample_rate: 2_353_004_544, max_picture_size: 35_651_584 },
    LevelLimits { level: 62, max_sample_rate: 4_706_009_088, max_picture_size: 35_651_584 },
];

const VP9_MAX_LEVEL: u8 = 62;

/// Returns the lowest VP9 level admitting a `width`x`height` stream whose
/// frames last `sample_duration_seconds`, or `None` if no level does.
pub fn vp9_level_for(width: u16, height: u16, sample_duration_seconds: f64) -> Option<u8> {
    let picture_size = u32::from(width) * u32::from(height);
    let sample_rate = f64::from(picture_size) / sample_duration_seconds;

    VP9_LEVELS
        .iter()
        .find(|limits| {
            picture_size <= limits.max_picture_size && sample_rate <= limits.max_sample_rate as f64
        })
        .map(|limits| limits.level)
}

impl VpCodecConfigurationRecord {
    /// Sets the level from the stream resolution and frame duration. Streams
    /// beyond every level limit are tagged with the highest level.
    pub fn set_vp9_level(&mut self, width: u16, height: u16, sample_duration_seconds: f64) {
        let level = vp9_level_for(width, height, sample_duration_seconds).unwrap_or_else(|| {
            warn!(
                "No VP9 level fits {}x{} at {} s per frame, using level {}",
                width, height, sample_duration_seconds, VP9_MAX_LEVEL
            );
            VP9_MAX_LEVEL
        });

        self.set_level(level);
    }
}
