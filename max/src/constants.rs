/// Every palette, embedded or built in, carries this many colors.
pub const PALETTE_COLORS: usize = 256;

/// On-disk size of an embedded palette: 256 RGB triplets.
pub const PALETTE_SIZE: usize = PALETTE_COLORS * 3;

/// Four little-endian i16 fields: dimensions and hotspot.
pub const HEADER_SIZE: usize = 8;

/// A repeat run must beat an option word plus its fill byte on both sides of
/// a mode switch before it is worth emitting.
pub const RLE_BREAK_EVEN: usize = 2 * 2 + 1;

/// Longest run a single signed 16-bit option word can carry.
pub const RLE_MAX_RUN: usize = i16::MAX as usize;

/// Terminates the skip/run command list of a multi-frame row.
pub const ROW_SENTINEL: u8 = 0xFF;

/// Palette index written by shadow runs.
pub const SHADOW_INDEX: u8 = 20;

/// Palette index multi-frame buffers are cleared to; also the transparency
/// key when frames are composited.
pub const BACKGROUND_INDEX: u8 = 0;
