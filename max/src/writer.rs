use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use byte_writer::ByteWriter;

use crate::{
    constants::PALETTE_COLORS,
    error::MaxError,
    rle,
    types::{MaxBigImage, MaxFile, MaxImage},
};

impl MaxFile {
    /// Serializes Simple and Big images back to their on-disk layout.
    ///
    /// Multi-frame files cannot be written; the format's row encoding was
    /// never produced by this codec's lineage and inventing a layout would
    /// not round-trip against the game.
    pub fn write_to_bytes(&self) -> Result<Vec<u8>, MaxError> {
        match self {
            Self::Simple(image) => Ok(image.write_to_bytes()),
            Self::Big(image) => Ok(image.write_to_bytes()),
            Self::Multi(_) => Err(MaxError::EncodeUnsupported {
                format: self.format(),
            }),
        }
    }

    pub fn write_to_file(&self, path: impl AsRef<Path> + Into<PathBuf>) -> Result<(), MaxError> {
        let bytes = self.write_to_bytes()?;

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        file.write_all(&bytes)?;

        file.flush()?;

        Ok(())
    }
}

impl MaxImage {
    pub fn write_to_bytes(&self) -> Vec<u8> {
        let mut writer = ByteWriter::new();

        let Self { header, pixels } = self;

        writer.append_i16(header.width);
        writer.append_i16(header.height);
        writer.append_i16(header.hotx);
        writer.append_i16(header.hoty);

        writer.append_u8_slice(pixels);

        writer.data
    }
}

impl MaxBigImage {
    pub fn write_to_bytes(&self) -> Vec<u8> {
        let mut writer = ByteWriter::new();

        let Self {
            header,
            palette,
            pixels,
        } = self;

        // hotspot first, then dimensions
        writer.append_i16(header.hotx);
        writer.append_i16(header.hoty);
        writer.append_i16(header.width);
        writer.append_i16(header.height);

        for color in palette.iter().take(PALETTE_COLORS) {
            writer.append_u8_slice(color);
        }

        // pad short palettes out to the full 256 entries
        writer.append_u8_slice(&vec![0u8; (PALETTE_COLORS - palette.len().min(PALETTE_COLORS)) * 3]);

        rle::encode(
            &mut writer,
            pixels,
            header.height as usize,
            header.width as usize,
        );

        writer.data
    }
}
