use bytes::{Buf, BufMut};
use four_cc::FourCC;
pub use safer_bytes::{error::Truncated as TruncatedError, SafeBuf};

pub trait BufExt {
    fn get_four_cc(&mut self) -> FourCC;
    fn try_skip(&mut self, num_bytes: usize) -> Result<(), TruncatedError>;
    fn try_copy_to_buf<T: BufMut>(
        &mut self,
        dest: &mut T,
        num_bytes: usize,
    ) -> Result<(), TruncatedError>;
}

impl<B> BufExt for B
where
    B: Buf,
{
    fn get_four_cc(&mut self) -> FourCC {
        let mut dest = [0; 4];
        self.copy_to_slice(&mut dest);
        FourCC(dest)
    }

    fn try_skip(&mut self, num_bytes: usize) -> Result<(), TruncatedError> {
        if self.remaining() < num_bytes {
            return Err(TruncatedError);
        }
        self.advance(num_bytes);
        Ok(())
    }

    fn try_copy_to_buf<T: BufMut>(
        &mut self,
        dest: &mut T,
        mut num_bytes: usize,
    ) -> Result<(), TruncatedError> {
        if self.remaining() < num_bytes {
            return Err(TruncatedError);
        }
        loop {
            let chunk = self.chunk();
            if chunk.len() >= num_bytes {
                dest.put_slice(&chunk[..num_bytes]);
                self.advance(num_bytes);
                return Ok(());
            }
            let len = chunk.len();
            dest.put_slice(chunk);
            self.advance(len);
            num_bytes -= len;
        }
    }
}

/// Overwrites the four bytes at `offset` with `value` in little-endian order.
///
/// # Panics
/// Panics if `buffer` is shorter than `offset + 4`.
pub fn put_u32_le_at(buffer: &mut [u8], offset: usize, value: u32) {
    let mut field = &mut buffer[offset..offset + 4];
    field.put_u32_le(value);
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use four_cc::FourCC;

    use super::{put_u32_le_at, BufExt};

    #[test]
    fn reads_four_cc() {
        use bytes::Buf;
        let mut buf = Cursor::new(&b"OTTO\0"[..]);
        assert_eq!(FourCC(*b"OTTO"), buf.get_four_cc());
        assert_eq!(buf.remaining(), 1);
    }

    #[test]
    fn try_skip_stops_at_end() {
        use bytes::Buf;
        let mut buf: Cursor<&[u8]> = Cursor::new(&[0; 6]);
        buf.try_skip(4).unwrap();
        assert_eq!(buf.remaining(), 2);
        assert!(buf.try_skip(3).is_err());
        // a failed skip leaves the cursor alone
        assert_eq!(buf.remaining(), 2);
        buf.try_skip(2).unwrap();
        assert_eq!(buf.remaining(), 0);
    }

    #[test]
    fn try_copy_to_buf() {
        use bytes::{Buf, BufMut};
        let mut src: Cursor<&[u8]> = Cursor::new(&[42; 11]);
        let mut dest = Vec::new();

        src.try_copy_to_buf(&mut dest, 5).unwrap();
        assert_eq!(src.remaining(), 6);
        dest.put_u8(0);
        src.try_copy_to_buf(&mut dest, 5).unwrap();
        assert_eq!(src.remaining(), 1);

        assert!(src.try_copy_to_buf(&mut dest, 2).is_err());

        assert_eq!(dest, &[42, 42, 42, 42, 42, 0, 42, 42, 42, 42, 42]);
    }

    #[test]
    fn patches_little_endian_in_place() {
        let mut data = [0xFFu8; 10];
        put_u32_le_at(&mut data, 4, 0x0102_0304);
        assert_eq!(data, [0xFF, 0xFF, 0xFF, 0xFF, 4, 3, 2, 1, 0xFF, 0xFF]);
    }
}
