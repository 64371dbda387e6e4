// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Colour description code points carried by the VP codec configuration
//! record.
//!
//! The record is a transparent carrier: every type here wraps a raw `u8` and
//! accepts any value, including code points that are reserved today. The
//! associated constants name the values assigned by ISO/IEC 23001-8 (ITU-T
//! H.273).

use std::fmt;

macro_rules! code_point {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name(pub u8);

        impl From<u8> for $name {
            fn from(value: u8) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

code_point!(
    /// Position of the chroma samples relative to the luma samples.
    ChromaSubsampling
);

impl ChromaSubsampling {
    /// 4:2:0, chroma samples sited between vertical luma samples.
    pub const CHROMA_420_VERTICAL: Self = Self(0);
    /// 4:2:0, chroma samples collocated with the top-left luma sample.
    pub const CHROMA_420_COLLOCATED_WITH_LUMA: Self = Self(1);
    pub const CHROMA_422: Self = Self(2);
    pub const CHROMA_444: Self = Self(3);
    pub const CHROMA_440: Self = Self(4);
}

impl Default for ChromaSubsampling {
    fn default() -> Self {
        Self::CHROMA_420_COLLOCATED_WITH_LUMA
    }
}

code_point!(
    /// Chromaticity coordinates of the source primaries.
    ColorPrimaries
);

impl ColorPrimaries {
    pub const RESERVED0: Self = Self(0);
    /// ITU-R BT.709, also BT.1361 and SMPTE RP177 Annex B.
    pub const BT709: Self = Self(1);
    pub const UNSPECIFIED: Self = Self(2);
    pub const RESERVED: Self = Self(3);
    /// FCC Title 47 Code of Federal Regulations 73.682 (a)(20).
    pub const BT470M: Self = Self(4);
    /// ITU-R BT.601-6 625, BT.1358 625, BT.1700 625 PAL and SECAM.
    pub const BT470BG: Self = Self(5);
    /// ITU-R BT.601-6 525, BT.1358 525, BT.1700 NTSC.
    pub const SMPTE170M: Self = Self(6);
    pub const SMPTE240M: Self = Self(7);
    /// Colour filters using Illuminant C.
    pub const FILM: Self = Self(8);
    pub const BT2020: Self = Self(9);
    /// SMPTE ST 428-1 (CIE 1931 XYZ).
    pub const SMPTE428: Self = Self(10);
    /// SMPTE ST 431-2 (2011).
    pub const SMPTE431: Self = Self(11);
    /// SMPTE ST 432-1 D65 (2010).
    pub const SMPTE432: Self = Self(12);
    /// EBU Tech. 3213-E.
    pub const EBU3213: Self = Self(22);
}

impl Default for ColorPrimaries {
    fn default() -> Self {
        Self::UNSPECIFIED
    }
}

code_point!(
    /// Opto-electronic transfer characteristic of the source.
    TransferCharacteristics
);

impl TransferCharacteristics {
    pub const RESERVED0: Self = Self(0);
    /// ITU-R BT.709, also BT.1361.
    pub const BT709: Self = Self(1);
    pub const UNSPECIFIED: Self = Self(2);
    pub const RESERVED: Self = Self(3);
    /// Gamma 2.2, ITU-R BT.470M and BT.1700 625 PAL and SECAM.
    pub const GAMMA22: Self = Self(4);
    /// Gamma 2.8, ITU-R BT.470BG.
    pub const GAMMA28: Self = Self(5);
    pub const SMPTE170M: Self = Self(6);
    pub const SMPTE240M: Self = Self(7);
    pub const LINEAR: Self = Self(8);
    /// Logarithmic, 100:1 range.
    pub const LOG: Self = Self(9);
    /// Logarithmic, 100 * sqrt(10) : 1 range.
    pub const LOG_SQRT: Self = Self(10);
    pub const IEC61966_2_4: Self = Self(11);
    /// ITU-R BT.1361 extended colour gamut.
    pub const BT1361_ECG: Self = Self(12);
    /// sRGB or sYCC.
    pub const IEC61966_2_1: Self = Self(13);
    pub const BT2020_10: Self = Self(14);
    pub const BT2020_12: Self = Self(15);
    /// SMPTE ST 2084 (PQ).
    pub const SMPTE2084: Self = Self(16);
    pub const SMPTE428: Self = Self(17);
    /// ARIB STD-B67, known as hybrid log-gamma.
    pub const ARIB_STD_B67: Self = Self(18);
}

impl Default for TransferCharacteristics {
    fn default() -> Self {
        Self::UNSPECIFIED
    }
}

code_point!(
    /// Matrix coefficients used to derive luma and chroma from RGB.
    MatrixCoefficients
);

impl MatrixCoefficients {
    /// GBR ordering, also IEC 61966-2-1 (sRGB).
    pub const RGB: Self = Self(0);
    pub const BT709: Self = Self(1);
    pub const UNSPECIFIED: Self = Self(2);
    pub const RESERVED: Self = Self(3);
    pub const FCC: Self = Self(4);
    pub const BT470BG: Self = Self(5);
    pub const SMPTE170M: Self = Self(6);
    pub const SMPTE240M: Self = Self(7);
    pub const YCOCG: Self = Self(8);
    /// ITU-R BT.2020 non-constant luminance.
    pub const BT2020_NCL: Self = Self(9);
    /// ITU-R BT.2020 constant luminance.
    pub const BT2020_CL: Self = Self(10);
    /// SMPTE ST 2085, Y'D'zD'x.
    pub const SMPTE2085: Self = Self(11);
}

impl Default for MatrixCoefficients {
    fn default() -> Self {
        Self::UNSPECIFIED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_code_points_are_preserved() {
        let primaries = ColorPrimaries::from(200);
        assert_eq!(u8::from(primaries), 200);
        assert_eq!(primaries.to_string(), "200");

        assert_eq!(u8::from(MatrixCoefficients::from(255)), 255);
    }

    #[test]
    fn defaults() {
        assert_eq!(
            ChromaSubsampling::default(),
            ChromaSubsampling::CHROMA_420_COLLOCATED_WITH_LUMA
        );
        assert_eq!(ColorPrimaries::default().0, 2);
        assert_eq!(TransferCharacteristics::default().0, 2);
        assert_eq!(MatrixCoefficients::default().0, 2);
    }
}
