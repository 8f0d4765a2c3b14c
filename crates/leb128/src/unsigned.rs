//! Unsigned LEB128 over `u128`.

use super::*;

/// The encoded bytes of an unsigned value, in emission order.
#[derive(Debug, Clone)]
pub struct Bytes {
  n: u128,
  done: bool,
}

impl Iterator for Bytes {
  type Item = u8;

  fn next(&mut self) -> Option<u8> {
    if self.done {
      return None;
    }

    let chunk = self.n.to_le_bytes()[0] & PAYLOAD;

    self.n >>= 7;

    if self.n == 0 {
      self.done = true;
      Some(chunk)
    } else {
      Some(chunk | CONTINUATION)
    }
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let remaining = if self.done { 0 } else { encoded_len(self.n) };
    (remaining, Some(remaining))
  }
}

impl ExactSizeIterator for Bytes {}

pub fn bytes(n: u128) -> Bytes {
  Bytes { n, done: false }
}

pub fn encoded_len(mut n: u128) -> usize {
  let mut len = 1;

  while n > u128::from(PAYLOAD) {
    n >>= 7;
    len += 1;
  }

  len
}

/// Writes the encoding of `n` to the front of `destination`, returning the
/// number of bytes written, or `None` if it does not fit. Nothing is written
/// on failure.
pub fn try_encode(n: u128, destination: &mut [u8]) -> Option<usize> {
  fill(bytes(n), destination).ok()
}

pub fn encode(n: u128, destination: &mut [u8]) -> Result<&[u8]> {
  let len = fill(bytes(n), destination)?;
  Ok(&destination[..len])
}

pub fn encode_to_vec(n: u128, v: &mut Vec<u8>) {
  v.extend(bytes(n));
}

pub fn encode_vec(n: u128) -> Vec<u8> {
  bytes(n).collect()
}

pub fn write(n: u128, writer: impl Write) -> io::Result<usize> {
  sink(bytes(n), writer)
}

/// Decodes one value from the front of `buffer`, returning it with the
/// number of bytes consumed, or `None` if the buffer ends mid-value or the
/// value overflows 128 bits. Trailing bytes are left alone.
pub fn try_decode(buffer: &[u8]) -> Option<(UnsignedInfo, usize)> {
  decode(buffer).ok()
}

pub fn decode(buffer: &[u8]) -> Result<(UnsignedInfo, usize)> {
  finish(Scan::slice(buffer)?)
}

/// Decodes one value from `reader`, consuming exactly its encoded bytes.
pub fn read(reader: impl Read) -> Result<(UnsignedInfo, usize)> {
  finish(Scan::read(reader)?)
}

fn finish(scan: Scan) -> Result<(UnsignedInfo, usize)> {
  // a nineteenth byte only has room for bits 126 and 127
  if scan.len == MAX_LEN && scan.last & PAYLOAD > 0b11 {
    return Err(Error::Overflow);
  }

  Ok((UnsignedInfo::new(scan.value), scan.len))
}
