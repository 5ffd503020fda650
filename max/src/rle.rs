use byte_writer::ByteWriter;
use nom::{
    bytes::complete::take,
    number::complete::{le_i16, le_u8},
    IResult as _IResult, Parser,
};

use crate::{
    constants::{RLE_BREAK_EVEN, RLE_MAX_RUN},
    error::MaxError,
};

type IResult<'a, T> = _IResult<&'a [u8], T>;

fn parse_option_word(i: &'_ [u8]) -> IResult<'_, i16> {
    le_i16(i)
}

fn parse_literals(i: &'_ [u8], run: usize) -> IResult<'_, &'_ [u8]> {
    take(run).parse(i)
}

fn parse_fill_byte(i: &'_ [u8]) -> IResult<'_, u8> {
    le_u8(i)
}

/// Expands an option-word stream into exactly `pixel_count` bytes.
///
/// A positive option word copies that many literal bytes; a negative one
/// repeats the single following byte. The stream must land exactly on
/// `pixel_count`: running out of chunks, overshooting the total, or a zero
/// option word is corrupt data. Bytes left over after the last chunk are
/// ignored.
pub fn decode(i: &[u8], pixel_count: usize) -> Result<Vec<u8>, MaxError> {
    let corrupt = |decoded: usize| MaxError::CorruptRleStream {
        expected: pixel_count,
        decoded,
    };

    let mut i = i;
    let mut pixels: Vec<u8> = Vec::with_capacity(pixel_count);

    while pixels.len() < pixel_count {
        let (rest, option_word) = parse_option_word(i).map_err(|_| corrupt(pixels.len()))?;
        i = rest;

        if option_word > 0 {
            let run = option_word as usize;
            let (rest, literals) = parse_literals(i, run).map_err(|_| corrupt(pixels.len()))?;
            i = rest;

            pixels.extend_from_slice(literals);
        } else if option_word < 0 {
            let run = -(option_word as i32) as usize;
            let (rest, value) = parse_fill_byte(i).map_err(|_| corrupt(pixels.len()))?;
            i = rest;

            pixels.resize(pixels.len() + run, value);
        } else {
            return Err(corrupt(pixels.len()));
        }
    }

    if pixels.len() != pixel_count {
        return Err(corrupt(pixels.len()));
    }

    Ok(pixels)
}

/// Encodes `rows` rows of `rowstride` pixels each. Runs never cross a row
/// boundary; the pending run is flushed at every row end.
pub fn encode(writer: &mut ByteWriter, pixels: &[u8], rows: usize, rowstride: usize) {
    for row in pixels.chunks_exact(rowstride).take(rows) {
        encode_row(writer, row);
    }
}

/// Scans one row left to right, switching between literal and repeat mode.
///
/// Repeat mode is only entered when [`RLE_BREAK_EVEN`] equal bytes line up
/// at the current position, and only probed at all on rows longer than that
/// threshold; shorter repeats cost more than the literal bytes they replace.
pub fn encode_row(writer: &mut ByteWriter, row: &[u8]) {
    let mut repeat_mode = false;
    let mut start = 0;

    for j in 0..row.len() {
        if repeat_mode {
            if row[j - 1] != row[j] {
                emit(writer, &row[start..j], repeat_mode);

                repeat_mode = false;
                start = j;
            }
        } else if row.len() > RLE_BREAK_EVEN && j > 0 && find_pattern(&row[j - 1..]) {
            emit(writer, &row[start..j - 1], repeat_mode);

            repeat_mode = true;
            start = j - 1;
        }

        if j == row.len() - 1 {
            emit(writer, &row[start..], repeat_mode);
        }
    }
}

fn find_pattern(window: &[u8]) -> bool {
    window.len() >= RLE_BREAK_EVEN && window[..RLE_BREAK_EVEN].iter().all(|&b| b == window[0])
}

/// Flushes one pending run, splitting it into as many option words as its
/// length needs. A zero-length run emits nothing.
fn emit(writer: &mut ByteWriter, run: &[u8], repeat_mode: bool) {
    if repeat_mode {
        let mut size = run.len();

        while size > 0 {
            let chunk = size.min(RLE_MAX_RUN);

            writer.append_i16(-(chunk as i16));
            writer.append_u8(run[0]);

            size -= chunk;
        }
    } else {
        let mut offset = 0;

        while offset < run.len() {
            let chunk = (run.len() - offset).min(RLE_MAX_RUN);

            writer.append_i16(chunk as i16);
            writer.append_u8_slice(&run[offset..offset + chunk]);

            offset += chunk;
        }
    }
}
