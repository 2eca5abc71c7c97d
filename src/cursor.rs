//! Underflow-checked sequential reader over a fixed byte buffer.

use thiserror::Error;

/// Errors raised by [`ByteCursor`] reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CursorError {
    /// Fewer bytes remain than the read requested
    #[error("unexpected end of data: needed {needed} bytes, {remaining} remaining")]
    Underflow { needed: usize, remaining: usize },
}

/// Sequential reader over a borrowed byte buffer.
///
/// Tracks a read offset, initially 0, and never mutates the underlying
/// bytes. Every read is underflow-checked; a failed read leaves the offset
/// where it was.
#[derive(Debug)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Return the next `n` bytes and advance the offset.
    pub fn next(&mut self, n: usize) -> Result<&'a [u8], CursorError> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(CursorError::Underflow {
                needed: n,
                remaining,
            });
        }
        let slice = &self.data[self.offset..self.offset + n];
        self.offset += n;
        Ok(slice)
    }

    /// Fixed-width read into an owned array.
    pub fn take_array<const N: usize>(&mut self) -> Result<[u8; N], CursorError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.next(N)?);
        Ok(out)
    }

    /// Single-byte read.
    pub fn take_u8(&mut self) -> Result<u8, CursorError> {
        Ok(self.next(1)?[0])
    }

    /// Byte count not yet consumed.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_advance_offset() {
        let data = [1u8, 2, 3, 4, 5];
        let mut cursor = ByteCursor::new(&data);
        assert_eq!(cursor.next(2).unwrap(), &[1, 2]);
        assert_eq!(cursor.remaining(), 3);
        assert_eq!(cursor.next(3).unwrap(), &[3, 4, 5]);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn underflow_reports_counts_and_keeps_offset() {
        let data = [1u8, 2, 3];
        let mut cursor = ByteCursor::new(&data);
        cursor.next(2).unwrap();
        assert_eq!(
            cursor.next(5),
            Err(CursorError::Underflow {
                needed: 5,
                remaining: 1
            })
        );
        // offset untouched by the failed read
        assert_eq!(cursor.next(1).unwrap(), &[3]);
    }

    #[test]
    fn take_array_and_u8() {
        let data = [0xaau8, 0xbb, 0xcc];
        let mut cursor = ByteCursor::new(&data);
        assert_eq!(cursor.take_array::<2>().unwrap(), [0xaa, 0xbb]);
        assert_eq!(cursor.take_u8().unwrap(), 0xcc);
        assert!(cursor.take_u8().is_err());
    }

    #[test]
    fn zero_length_read_on_empty_buffer() {
        let mut cursor = ByteCursor::new(&[]);
        assert_eq!(cursor.next(0).unwrap(), &[] as &[u8]);
        assert_eq!(cursor.remaining(), 0);
    }
}
