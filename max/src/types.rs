use std::{ffi::OsStr, path::Path};

use crate::{
    error::MaxError,
    palette::DEFAULT_PALETTE,
    parser::{detect, parse_file},
};

/// Dimensions and hotspot of one image, in on-disk field order for Simple
/// and Multi headers. Big stores the same four fields hotspot-first.
///
/// The hotspot is the sprite's anchor point; the frames of a multi-frame
/// file align their hotspots on a shared canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxHeader {
    pub width: i16,
    pub height: i16,
    pub hotx: i16,
    pub hoty: i16,
}

pub type MaxPalette = Vec<[u8; 3]>;

/// Uncompressed single image; resolves through the built-in palette.
#[derive(Debug, Clone)]
pub struct MaxImage {
    pub header: MaxHeader,
    // [u8; width * height], row-major palette indices
    pub pixels: Vec<u8>,
}

/// Run-length encoded single image with an embedded 256-color palette.
#[derive(Debug, Clone)]
pub struct MaxBigImage {
    pub header: MaxHeader,
    // Vec<[u8; 3]>
    pub palette: MaxPalette,
    pub pixels: Vec<u8>,
}

/// How the rows of a multi-frame file are encoded. A file uses one mode for
/// all of its frames; there is no flag on disk, the mode is discovered by
/// trial-decoding the first frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMode {
    /// Skip/fill pairs painting the fixed shadow marker index.
    Shadow,
    /// Skip/copy pairs carrying literal palette indices.
    Opaque,
}

#[derive(Debug, Clone)]
pub struct MaxMultiFrame {
    pub file_offset: u32,
    pub header: MaxHeader,
    // [u32; height], absolute file offset of each row's command list
    pub rows: Vec<u32>,
    pub pixels: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct MaxMulti {
    pub frames: Vec<MaxMultiFrame>,
    pub mode: RowMode,
}

/// The three on-disk variants. None of them carries a magic number; see
/// [`crate::detect`] for the structural probes that tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxFormat {
    Simple,
    Big,
    Multi,
}

#[derive(Debug, Clone)]
pub enum MaxFile {
    Simple(MaxImage),
    Big(MaxBigImage),
    Multi(MaxMulti),
}

impl MaxFile {
    pub fn open_from_bytes(i: &[u8]) -> Result<MaxFile, MaxError> {
        let format = detect(i)?;

        parse_file(i, format)
    }

    pub fn open_from_file(path: impl AsRef<OsStr> + AsRef<Path>) -> Result<MaxFile, MaxError> {
        let bytes = std::fs::read(path)?;

        Self::open_from_bytes(&bytes)
    }

    pub fn format(&self) -> MaxFormat {
        match self {
            Self::Simple(_) => MaxFormat::Simple,
            Self::Big(_) => MaxFormat::Big,
            Self::Multi(_) => MaxFormat::Multi,
        }
    }

    /// Pixel dimensions of the decoded result; for a multi-frame file this
    /// is the size of the shared canvas its frames align on.
    pub fn dimensions(&self) -> (i32, i32) {
        match self {
            Self::Simple(image) => (image.header.width as i32, image.header.height as i32),
            Self::Big(image) => (image.header.width as i32, image.header.height as i32),
            Self::Multi(multi) => {
                let bounds = multi.canvas_bounds();

                (bounds.width(), bounds.height())
            }
        }
    }

    /// The embedded palette when the file carries one, the built-in default
    /// otherwise.
    pub fn palette(&self) -> &[[u8; 3]] {
        match self {
            Self::Big(image) => &image.palette,
            _ => &DEFAULT_PALETTE,
        }
    }
}
