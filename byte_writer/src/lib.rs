//! Append-only little-endian byte emitter backing the format encoders.

pub struct ByteWriter {
    pub data: Vec<u8>,
    offset: usize,
}

impl Default for ByteWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteWriter {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            offset: 0,
        }
    }

    fn offset(&mut self, offset: usize) {
        self.offset += offset;
    }

    /// Position the next append lands at.
    pub fn get_offset(&self) -> usize {
        self.offset
    }

    pub fn append_u8(&mut self, i: u8) {
        self.data.push(i);
        self.offset(1);
    }

    pub fn append_i16(&mut self, i: i16) {
        self.data.extend(i.to_le_bytes());
        self.offset(2);
    }

    pub fn append_u32(&mut self, i: u32) {
        self.data.extend(i.to_le_bytes());
        self.offset(4);
    }

    pub fn append_u8_slice(&mut self, i: &[u8]) {
        self.data.extend_from_slice(i);
        self.offset(i.len());
    }

    /// Overwrites already-appended bytes, for offset tables whose values are
    /// only known after the data they point at has been written.
    pub fn replace(&mut self, start: usize, length: usize, slice: &[u8]) {
        self.data[start..(length + start)].copy_from_slice(&slice[..length]);
    }

    pub fn replace_with_u32(&mut self, start: usize, val: u32) {
        let bytes = val.to_le_bytes();
        self.replace(start, 4, &bytes);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn little_endian_appends() {
        let mut writer = ByteWriter::new();

        writer.append_i16(-2);
        writer.append_u32(0x0A0B0C0D);
        writer.append_u8_slice(&[1, 2]);

        assert_eq!(writer.get_offset(), 8);
        assert_eq!(writer.data, vec![0xFE, 0xFF, 0x0D, 0x0C, 0x0B, 0x0A, 1, 2]);
    }

    #[test]
    fn patch_offset_after_the_fact() {
        let mut writer = ByteWriter::new();

        let patch_at = writer.get_offset();
        writer.append_u32(0);
        writer.append_u8(0xAA);
        writer.replace_with_u32(patch_at, 5);

        assert_eq!(writer.data, vec![5, 0, 0, 0, 0xAA]);
    }
}
