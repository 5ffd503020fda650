use crate::types::MaxFormat;

#[derive(Debug, thiserror::Error)]
pub enum MaxError {
    #[error("Image format not recognized")]
    NotRecognized,
    #[error("Error parsing image: {source}")]
    NomError {
        #[source]
        source: nom::Err<nom::error::Error<Vec<u8>>>,
    },
    #[error("Invalid image dimensions ({width}x{height})")]
    InvalidDimensions { width: i16, height: i16 },
    #[error("Unexpected end of data. Expect ({expect}) more bytes. Have ({have})")]
    TruncatedFile { expect: usize, have: usize },
    #[error("Corrupt run-length stream. Expect ({expected}) pixels. Decoded ({decoded})")]
    CorruptRleStream { expected: usize, decoded: usize },
    #[error("Mismatched offset for frame {frame_index}. Expect ({expect}). Have ({have})")]
    MismatchedFrameOffset {
        frame_index: usize,
        expect: u32,
        have: u32,
    },
    #[error("Mismatched offset for row {row}. Expect ({expect}). Have ({have})")]
    MismatchedRowOffset { row: usize, expect: u32, have: u32 },
    #[error("Row {row} writes past the frame buffer (offset {offset}, buffer {len})")]
    RowOutOfBounds { row: usize, offset: usize, len: usize },
    #[error("Offset table entry {offset} points outside the file ({file_size} bytes)")]
    BadOffsetTable { offset: u32, file_size: usize },
    #[error("Encoding {format:?} images is not supported")]
    EncodeUnsupported { format: MaxFormat },
    #[error("IOError: {source}")]
    IOError {
        #[from]
        source: std::io::Error,
    },
}
