use nom::{
    bytes::complete::take,
    combinator::map,
    multi::count,
    number::complete::{le_i16, le_u32, le_u8},
    IResult as _IResult, Parser,
};

use crate::{
    constants::{BACKGROUND_INDEX, HEADER_SIZE, PALETTE_COLORS, ROW_SENTINEL, SHADOW_INDEX},
    error::MaxError,
    rle,
    types::{
        MaxBigImage, MaxFile, MaxFormat, MaxHeader, MaxImage, MaxMulti, MaxMultiFrame, MaxPalette,
        RowMode,
    },
};

pub type IResult<'a, T> = _IResult<&'a [u8], T>;

fn nom_err(op: nom::Err<nom::error::Error<&[u8]>>) -> MaxError {
    MaxError::NomError {
        source: op.to_owned(),
    }
}

/// Absolute position of `rest` within `file`. The offset tables of the
/// multi-frame layout record positions relative to the file start, so every
/// consistency check passes both slices through here.
fn stream_position(file: &[u8], rest: &[u8]) -> usize {
    file.len() - rest.len()
}

pub fn parse_header(i: &'_ [u8]) -> IResult<'_, MaxHeader> {
    map(
        (le_i16, le_i16, le_i16, le_i16),
        |(width, height, hotx, hoty)| MaxHeader {
            width,
            height,
            hotx,
            hoty,
        },
    )
    .parse(i)
}

/// Big stores the same four fields with the hotspot first.
pub fn parse_big_header(i: &'_ [u8]) -> IResult<'_, MaxHeader> {
    map(
        (le_i16, le_i16, le_i16, le_i16),
        |(hotx, hoty, width, height)| MaxHeader {
            width,
            height,
            hotx,
            hoty,
        },
    )
    .parse(i)
}

pub fn parse_palette(i: &'_ [u8]) -> IResult<'_, MaxPalette> {
    count(
        map(take(3usize), |arr: &[u8]| [arr[0], arr[1], arr[2]]),
        PALETTE_COLORS,
    )
    .parse(i)
}

fn parse_frame_count(i: &'_ [u8]) -> IResult<'_, i16> {
    le_i16(i)
}

fn parse_offsets(i: &'_ [u8], n: usize) -> IResult<'_, Vec<u32>> {
    count(le_u32, n).parse(i)
}

fn parse_command_byte(i: &'_ [u8]) -> IResult<'_, u8> {
    le_u8(i)
}

fn parse_row_literals(i: &'_ [u8], n: usize) -> IResult<'_, &'_ [u8]> {
    take(n).parse(i)
}

fn checked_pixel_count(header: &MaxHeader) -> Result<usize, MaxError> {
    if header.width <= 0 || header.height <= 0 {
        return Err(MaxError::InvalidDimensions {
            width: header.width,
            height: header.height,
        });
    }

    Ok(header.width as usize * header.height as usize)
}

/// Classifies a byte stream by structure alone; none of the three variants
/// carries a magic number. Each probe re-reads the leading fields from the
/// start of the slice and has no effect on the later probes when it rejects.
/// The probe order is part of the format contract.
pub fn detect(i: &[u8]) -> Result<MaxFormat, MaxError> {
    if probe_simple(i) {
        return Ok(MaxFormat::Simple);
    }

    if probe_big(i) {
        return Ok(MaxFormat::Big);
    }

    if probe_multi(i) {
        return Ok(MaxFormat::Multi);
    }

    Err(MaxError::NotRecognized)
}

/// An uncompressed file is exactly one header plus `width * height` bytes.
fn probe_simple(i: &[u8]) -> bool {
    let Ok((_, header)) = parse_header(i) else {
        return false;
    };

    HEADER_SIZE as i64 + header.width as i64 * header.height as i64 == i.len() as i64
}

/// Big files in the wild all anchor at the origin, which is what makes the
/// swapped header order recognizable at all.
fn probe_big(i: &[u8]) -> bool {
    let Ok((_, header)) = parse_big_header(i) else {
        return false;
    };

    header.hotx == 0 && header.hoty == 0 && header.width > 0 && header.height > 0
}

fn probe_multi(i: &[u8]) -> bool {
    let Ok((rest, frame_count)) = parse_frame_count(i) else {
        return false;
    };

    let Ok((_, first_offset)) = le_u32::<_, nom::error::Error<&[u8]>>(rest) else {
        return false;
    };

    frame_count > 0 && (first_offset as usize) < i.len()
}

pub fn parse_file(i: &[u8], format: MaxFormat) -> Result<MaxFile, MaxError> {
    match format {
        MaxFormat::Simple => parse_simple(i).map(MaxFile::Simple),
        MaxFormat::Big => parse_big(i).map(MaxFile::Big),
        MaxFormat::Multi => parse_multi(i).map(MaxFile::Multi),
    }
}

pub fn parse_simple(i: &[u8]) -> Result<MaxImage, MaxError> {
    let (rest, header) = parse_header(i).map_err(nom_err)?;
    let pixel_count = checked_pixel_count(&header)?;

    if rest.len() < pixel_count {
        return Err(MaxError::TruncatedFile {
            expect: pixel_count,
            have: rest.len(),
        });
    }

    Ok(MaxImage {
        header,
        pixels: rest[..pixel_count].to_vec(),
    })
}

pub fn parse_big(i: &[u8]) -> Result<MaxBigImage, MaxError> {
    let (rest, header) = parse_big_header(i).map_err(nom_err)?;
    let (rest, palette) = parse_palette(rest).map_err(nom_err)?;
    let pixel_count = checked_pixel_count(&header)?;

    // everything after header and palette is one run-length stream
    let pixels = rle::decode(rest, pixel_count)?;

    Ok(MaxBigImage {
        header,
        palette,
        pixels,
    })
}

/// The multi-frame layout is assumed sequential: each frame must begin at
/// the position its offset table entry records, and within a frame each row
/// must begin at its row table entry. Any mismatch aborts the decode.
pub fn parse_multi(file: &[u8]) -> Result<MaxMulti, MaxError> {
    let (rest, frame_count) = parse_frame_count(file).map_err(nom_err)?;

    if frame_count <= 0 {
        return Err(MaxError::NotRecognized);
    }

    let (mut rest, offsets) = parse_offsets(rest, frame_count as usize).map_err(nom_err)?;

    for &offset in &offsets {
        if offset as usize >= file.len() {
            return Err(MaxError::BadOffsetTable {
                offset,
                file_size: file.len(),
            });
        }
    }

    let mut frames = Vec::with_capacity(offsets.len());

    // One file uses one row encoding for all of its frames. The first frame
    // is trial-decoded as shadow rows; a structural failure rewinds to the
    // start of its row data and retries as opaque rows. The winner is held
    // for the rest of this decode session.
    let mut mode: Option<RowMode> = None;

    for (frame_index, &offset) in offsets.iter().enumerate() {
        let have = stream_position(file, rest);

        if have != offset as usize {
            return Err(MaxError::MismatchedFrameOffset {
                frame_index,
                expect: offset,
                have: have as u32,
            });
        }

        let (after, frame) = parse_multi_frame(file, rest, offset, &mut mode)?;

        rest = after;
        frames.push(frame);
    }

    Ok(MaxMulti {
        frames,
        mode: mode.unwrap_or(RowMode::Shadow),
    })
}

fn parse_multi_frame<'a>(
    file: &'a [u8],
    i: &'a [u8],
    file_offset: u32,
    mode: &mut Option<RowMode>,
) -> Result<(&'a [u8], MaxMultiFrame), MaxError> {
    let (i, header) = parse_header(i).map_err(nom_err)?;
    let pixel_count = checked_pixel_count(&header)?;

    let (i, rows) = parse_offsets(i, header.height as usize).map_err(nom_err)?;

    for &row_offset in &rows {
        if row_offset as usize >= file.len() {
            return Err(MaxError::BadOffsetTable {
                offset: row_offset,
                file_size: file.len(),
            });
        }
    }

    let mut pixels = vec![BACKGROUND_INDEX; pixel_count];

    let (i, chosen) = match *mode {
        Some(chosen) => {
            let i = decode_rows(file, i, &header, &rows, &mut pixels, chosen)?;

            (i, chosen)
        }
        None => match decode_rows(file, i, &header, &rows, &mut pixels, RowMode::Shadow) {
            Ok(after) => (after, RowMode::Shadow),
            Err(_) => {
                // rewind to the start of this frame's row data
                pixels.fill(BACKGROUND_INDEX);

                let after = decode_rows(file, i, &header, &rows, &mut pixels, RowMode::Opaque)?;

                (after, RowMode::Opaque)
            }
        },
    };

    *mode = Some(chosen);

    Ok((
        i,
        MaxMultiFrame {
            file_offset,
            header,
            rows,
            pixels,
        },
    ))
}

/// Walks every row's skip/run command list. `Shadow` runs paint the fixed
/// shadow marker; `Opaque` runs copy literal bytes from the stream. Either
/// way a run may not write past the frame's pixel buffer.
fn decode_rows<'a>(
    file: &'a [u8],
    mut i: &'a [u8],
    header: &MaxHeader,
    rows: &[u32],
    pixels: &mut [u8],
    mode: RowMode,
) -> Result<&'a [u8], MaxError> {
    let width = header.width as usize;

    for (row, &row_offset) in rows.iter().enumerate() {
        let have = stream_position(file, i);

        if have != row_offset as usize {
            return Err(MaxError::MismatchedRowOffset {
                row,
                expect: row_offset,
                have: have as u32,
            });
        }

        let mut offset = row * width;

        loop {
            let (rest, skip) = parse_command_byte(i).map_err(nom_err)?;
            i = rest;

            if skip == ROW_SENTINEL {
                break;
            }

            let (rest, run) = parse_command_byte(i).map_err(nom_err)?;
            i = rest;

            offset += skip as usize;

            if offset + run as usize > pixels.len() {
                return Err(MaxError::RowOutOfBounds {
                    row,
                    offset,
                    len: pixels.len(),
                });
            }

            match mode {
                RowMode::Shadow => {
                    pixels[offset..offset + run as usize].fill(SHADOW_INDEX);
                }
                RowMode::Opaque => {
                    let (rest, literals) = parse_row_literals(i, run as usize).map_err(nom_err)?;
                    i = rest;

                    pixels[offset..offset + run as usize].copy_from_slice(literals);
                }
            }

            offset += run as usize;
        }
    }

    Ok(i)
}
