// Copyright 2022 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Parsing and writing of the VP codec configuration record used to describe
//! VP8, VP9 and VP10 streams in MP4 and WebM containers.

pub mod codec;

use std::fmt;
use std::str::FromStr;

pub use codec::vpcc::merge;
pub use codec::vpcc::ParseError;
pub use codec::vpcc::RecordFormat;
pub use codec::vpcc::VpCodecConfigurationRecord;

/// Codec family described by a configuration record.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VpCodec {
    Vp8,
    Vp9,
    Vp10,
}

impl VpCodec {
    /// ISOBMFF sample entry FourCC, also used as codec string prefix.
    pub fn fourcc(&self) -> &'static str {
        match self {
            VpCodec::Vp8 => "vp08",
            VpCodec::Vp9 => "vp09",
            VpCodec::Vp10 => "vp10",
        }
    }
}

impl fmt::Display for VpCodec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.fourcc())
    }
}

impl FromStr for VpCodec {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vp8" | "VP8" | "vp08" => Ok(VpCodec::Vp8),
            "vp9" | "VP9" | "vp09" => Ok(VpCodec::Vp9),
            "vp10" | "VP10" => Ok(VpCodec::Vp10),
            _ => Err("unrecognized codec. Valid values: vp8, vp9, vp10"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codec_from_str() {
        assert_eq!("vp9".parse::<VpCodec>(), Ok(VpCodec::Vp9));
        assert_eq!("vp08".parse::<VpCodec>(), Ok(VpCodec::Vp8));
        assert_eq!("VP10".parse::<VpCodec>(), Ok(VpCodec::Vp10));
        assert!("av1".parse::<VpCodec>().is_err());
        assert_eq!(VpCodec::Vp10.to_string(), "vp10");
    }
}
