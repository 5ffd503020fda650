//! Codec for the graphics containers of a mid-90s strategy game: raw
//! indexed images, palette-carrying run-length images, and multi-frame
//! sprites with per-row offset tables. The variants share no magic number;
//! [`detect`] tells them apart by structure alone.

pub mod constants;
pub mod error;

mod palette;
mod parser;
mod rle;
mod types;
mod utils;
mod writer;

pub use palette::DEFAULT_PALETTE;
pub use parser::detect;
pub use types::*;
pub use utils::CanvasBounds;

#[cfg(test)]
mod test {
    use byte_writer::ByteWriter;

    use crate::{
        constants::SHADOW_INDEX, detect, error::MaxError, MaxBigImage, MaxFile, MaxFormat,
        MaxHeader, RowMode, DEFAULT_PALETTE,
    };

    /// Assembles a multi-frame file, filling in the frame and row offset
    /// tables from the positions the data actually lands at.
    fn build_multi(frames: &[(MaxHeader, Vec<Vec<u8>>)]) -> Vec<u8> {
        let mut writer = ByteWriter::new();

        writer.append_i16(frames.len() as i16);

        let offset_table_at = writer.get_offset();
        for _ in frames {
            writer.append_u32(0);
        }

        for (index, (header, rows)) in frames.iter().enumerate() {
            let frame_at = writer.get_offset() as u32;
            writer.replace_with_u32(offset_table_at + index * 4, frame_at);

            writer.append_i16(header.width);
            writer.append_i16(header.height);
            writer.append_i16(header.hotx);
            writer.append_i16(header.hoty);

            let row_table_at = writer.get_offset();
            for _ in rows {
                writer.append_u32(0);
            }

            for (row_index, row) in rows.iter().enumerate() {
                let row_at = writer.get_offset() as u32;
                writer.replace_with_u32(row_table_at + row_index * 4, row_at);
                writer.append_u8_slice(row);
            }
        }

        writer.data
    }

    fn header(width: i16, height: i16, hotx: i16, hoty: i16) -> MaxHeader {
        MaxHeader {
            width,
            height,
            hotx,
            hoty,
        }
    }

    fn opaque_multi_file() -> Vec<u8> {
        build_multi(&[
            (
                header(4, 2, 0, 0),
                vec![vec![1, 2, 7, 8, 0xFF], vec![0, 4, 9, 9, 9, 9, 0xFF]],
            ),
            (header(2, 1, 1, 0), vec![vec![1, 1, 5, 0xFF]]),
        ])
    }

    #[test]
    fn open_simple() {
        let i = [2, 0, 2, 0, 0, 0, 0, 0, 1, 2, 3, 4];

        assert_eq!(detect(&i).unwrap(), MaxFormat::Simple);

        let file = MaxFile::open_from_bytes(&i).unwrap();

        assert_eq!(file.format(), MaxFormat::Simple);
        assert_eq!(file.dimensions(), (2, 2));
        assert_eq!(file.palette(), &DEFAULT_PALETTE);

        let MaxFile::Simple(image) = &file else {
            unreachable!()
        };

        assert_eq!(&image.pixels[..2], &[1, 2]);
        assert_eq!(&image.pixels[2..], &[3, 4]);
    }

    #[test]
    fn simple_round_trip() {
        let i = [2, 0, 2, 0, 0, 0, 0, 0, 1, 2, 3, 4];
        let file = MaxFile::open_from_bytes(&i).unwrap();

        assert_eq!(file.write_to_bytes().unwrap(), i);
    }

    #[test]
    fn big_round_trip() {
        let palette: Vec<[u8; 3]> = (0..=255u8).map(|n| [n, n.wrapping_mul(3), 255 - n]).collect();
        let original = MaxBigImage {
            header: header(6, 2, 0, 0),
            palette,
            pixels: vec![1, 1, 1, 1, 1, 1, 1, 2, 3, 4, 5, 6],
        };

        let bytes = original.write_to_bytes();

        assert_eq!(detect(&bytes).unwrap(), MaxFormat::Big);

        let file = MaxFile::open_from_bytes(&bytes).unwrap();

        let MaxFile::Big(decoded) = &file else {
            unreachable!()
        };

        assert_eq!(decoded.header, original.header);
        assert_eq!(decoded.palette, original.palette);
        assert_eq!(decoded.pixels, original.pixels);
    }

    #[test]
    fn big_rejects_short_palette() {
        let mut i = vec![0u8, 0, 0, 0, 2, 0, 2, 0];
        i.extend([0u8; 100]);

        assert_eq!(detect(&i).unwrap(), MaxFormat::Big);
        assert!(matches!(
            MaxFile::open_from_bytes(&i),
            Err(MaxError::NomError { .. })
        ));
    }

    #[test]
    fn open_multi_opaque() {
        let i = opaque_multi_file();

        assert_eq!(detect(&i).unwrap(), MaxFormat::Multi);

        let file = MaxFile::open_from_bytes(&i).unwrap();

        let MaxFile::Multi(multi) = &file else {
            unreachable!()
        };

        // the first frame's rows misparse as shadow runs, so the whole
        // session settles on opaque
        assert_eq!(multi.mode, RowMode::Opaque);
        assert_eq!(multi.frames.len(), 2);
        assert_eq!(multi.frames[0].pixels, vec![0, 7, 8, 0, 9, 9, 9, 9]);
        assert_eq!(multi.frames[1].pixels, vec![0, 5]);
        assert_eq!(multi.frames[0].file_offset, 10);

        // hotspots at (0,0) and (1,0): canvas left 1, right 4, bottom 2
        assert_eq!(file.dimensions(), (5, 2));
    }

    #[test]
    fn open_multi_shadow() {
        let i = build_multi(&[
            (header(10, 1, 0, 0), vec![vec![0x02, 0x03, 0xFF]]),
            (header(4, 1, 0, 0), vec![vec![0, 2, 0xFF]]),
        ]);

        let file = MaxFile::open_from_bytes(&i).unwrap();

        let MaxFile::Multi(multi) = &file else {
            unreachable!()
        };

        // one mode for every frame of the session
        assert_eq!(multi.mode, RowMode::Shadow);

        // skip 2, shadow 3, sentinel: pixels 2..5 marked, the rest untouched
        let mut expected = vec![0u8; 10];
        expected[2..5].fill(SHADOW_INDEX);
        assert_eq!(multi.frames[0].pixels, expected);

        assert_eq!(
            multi.frames[1].pixels,
            vec![SHADOW_INDEX, SHADOW_INDEX, 0, 0]
        );
    }

    #[test]
    fn multi_rejects_mismatched_frame_offset() {
        let mut i = opaque_multi_file();

        // nudge the second frame offset off its true position
        i[6] += 1;

        assert!(matches!(
            MaxFile::open_from_bytes(&i),
            Err(MaxError::MismatchedFrameOffset { frame_index: 1, .. })
        ));
    }

    #[test]
    fn multi_rejects_mismatched_row_offset() {
        let mut i = opaque_multi_file();

        // second frame's row table sits right after its 8-byte header
        let frame1_at = u32::from_le_bytes([i[6], i[7], i[8], i[9]]) as usize;
        i[frame1_at + 8] += 1;

        // the mode is already latched to opaque by frame 0, so this is a
        // hard failure rather than a mode retry
        assert!(matches!(
            MaxFile::open_from_bytes(&i),
            Err(MaxError::MismatchedRowOffset { row: 0, .. })
        ));
    }

    #[test]
    fn multi_rejects_runs_past_the_frame_buffer() {
        let i = build_multi(&[(header(2, 1, 0, 0), vec![vec![0, 200, 0xFF]])]);

        assert!(matches!(
            MaxFile::open_from_bytes(&i),
            Err(MaxError::RowOutOfBounds { row: 0, .. })
        ));
    }

    #[test]
    fn multi_rejects_offsets_outside_the_file() {
        // the probe only sees the in-range first offset; the second one
        // points far past the end and must be caught before any decoding
        let mut writer = ByteWriter::new();
        writer.append_i16(2);
        writer.append_u32(10);
        writer.append_u32(65_535);
        writer.append_u8_slice(&[0; 8]);

        assert!(matches!(
            MaxFile::open_from_bytes(&writer.data),
            Err(MaxError::BadOffsetTable { offset: 65_535, .. })
        ));
    }

    #[test]
    fn multi_encode_is_unsupported() {
        let file = MaxFile::open_from_bytes(&opaque_multi_file()).unwrap();

        assert!(matches!(
            file.write_to_bytes(),
            Err(MaxError::EncodeUnsupported {
                format: MaxFormat::Multi
            })
        ));
    }
}
