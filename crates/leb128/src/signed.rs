//! Signed LEB128 over `i128`.

use super::*;

/// The encoded bytes of a signed value, in emission order.
#[derive(Debug, Clone)]
pub struct Bytes {
  n: i128,
  done: bool,
}

impl Bytes {
  /// Splits off the next chunk, reporting whether it is the last one: the
  /// remaining value must be pure sign extension of the chunk's bit 6.
  fn step(n: &mut i128) -> (u8, bool) {
    let chunk = n.to_le_bytes()[0] & PAYLOAD;

    *n >>= 7;

    let last = (*n == 0 && chunk & SIGN == 0) || (*n == -1 && chunk & SIGN != 0);

    (chunk, last)
  }
}

impl Iterator for Bytes {
  type Item = u8;

  fn next(&mut self) -> Option<u8> {
    if self.done {
      return None;
    }

    let (chunk, last) = Self::step(&mut self.n);

    if last {
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

pub fn bytes(n: i128) -> Bytes {
  Bytes { n, done: false }
}

pub fn encoded_len(mut n: i128) -> usize {
  let mut len = 1;

  while !Bytes::step(&mut n).1 {
    len += 1;
  }

  len
}

/// Writes the encoding of `n` to the front of `destination`, returning the
/// number of bytes written, or `None` if it does not fit. Nothing is written
/// on failure.
pub fn try_encode(n: i128, destination: &mut [u8]) -> Option<usize> {
  fill(bytes(n), destination).ok()
}

pub fn encode(n: i128, destination: &mut [u8]) -> Result<&[u8]> {
  let len = fill(bytes(n), destination)?;
  Ok(&destination[..len])
}

pub fn encode_to_vec(n: i128, v: &mut Vec<u8>) {
  v.extend(bytes(n));
}

pub fn encode_vec(n: i128) -> Vec<u8> {
  bytes(n).collect()
}

pub fn write(n: i128, writer: impl Write) -> io::Result<usize> {
  sink(bytes(n), writer)
}

/// Decodes one value from the front of `buffer`, sign-extending from bit 6
/// of the final byte. Returns `None` if the buffer ends mid-value or the
/// value overflows 128 bits.
pub fn try_decode(buffer: &[u8]) -> Option<(SignedInfo, usize)> {
  decode(buffer).ok()
}

pub fn decode(buffer: &[u8]) -> Result<(SignedInfo, usize)> {
  finish(Scan::slice(buffer)?)
}

/// Decodes one value from `reader`, consuming exactly its encoded bytes.
pub fn read(reader: impl Read) -> Result<(SignedInfo, usize)> {
  finish(Scan::read(reader)?)
}

fn finish(scan: Scan) -> Result<(SignedInfo, usize)> {
  let Scan {
    mut value,
    len,
    shift,
    last,
  } = scan;

  if len == MAX_LEN {
    // bit 1 lands on bit 127, so bits 2 through 6 must repeat it
    let extension = last & 0b0111_1110;
    if extension != 0 && extension != 0b0111_1110 {
      return Err(Error::Overflow);
    }
  }

  if shift < 128 && last & SIGN != 0 {
    value |= u128::MAX << shift;
  }

  Ok((
    SignedInfo::new(i128::from_le_bytes(value.to_le_bytes())),
    len,
  ))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn case(n: i128, expected: &[u8]) {
    assert_eq!(encode_vec(n), expected, "encoding {n}");
    assert_eq!(encoded_len(n), expected.len(), "length of {n}");

    let (info, len) = decode(expected).unwrap();
    assert_eq!(info.value(), n);
    assert_eq!(len, expected.len());
  }

  #[test]
  fn small() {
    case(0, &[0x00]);
    case(1, &[0x01]);
    case(-1, &[0x7F]);
    case(63, &[0x3F]);
    case(-64, &[0x40]);
  }

  #[test]
  fn sign_bit_forces_extra_byte() {
    case(64, &[0xC0, 0x00]);
    case(-65, &[0xBF, 0x7F]);
    case(127, &[0xFF, 0x00]);
    case(-128, &[0x80, 0x7F]);
    case(8191, &[0xFF, 0x3F]);
    case(8192, &[0x80, 0xC0, 0x00]);
    case(-8192, &[0x80, 0x40]);
    case(-8193, &[0xFF, 0xBF, 0x7F]);
  }

  #[test]
  fn literal() {
    case(-624485, &[0x9B, 0xF1, 0x59]);
    case(624485, &[0xE5, 0x8E, 0x26]);
  }

  #[test]
  fn extremes() {
    let mut max = vec![0xFF; 18];
    max.push(0x01);
    case(i128::MAX, &max);

    let mut min = vec![0x80; 18];
    min.push(0x7E);
    case(i128::MIN, &min);
  }

  #[test]
  fn widths() {
    case(
      i64::MIN.into(),
      &[0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x7F],
    );
    case(
      i64::MAX.into(),
      &[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00],
    );
    case(i32::MIN.into(), &[0x80, 0x80, 0x80, 0x80, 0x78]);
  }

  #[test]
  fn length_matches_encoding_around_powers_of_two() {
    for bits in 0..127 {
      let power = 1i128 << bits;
      for n in [power - 1, power, -power, -power - 1] {
        let encoding = encode_vec(n);
        assert_eq!(encoded_len(n), encoding.len(), "length of {n}");
        assert_eq!(encoding.last().unwrap() & CONTINUATION, 0);
        assert_eq!(
          decode(&encoding).unwrap(),
          (SignedInfo::new(n), encoding.len())
        );
      }
    }
  }

  #[test]
  fn bytes_is_exact_size() {
    let mut iter = bytes(-65);
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.next(), Some(0xBF));
    assert_eq!(iter.len(), 1);
    assert_eq!(iter.next(), Some(0x7F));
    assert_eq!(iter.len(), 0);
    assert_eq!(iter.next(), None);
  }

  #[test]
  fn try_encode_too_small() {
    let mut buffer = [0xAA];
    assert_eq!(try_encode(64, &mut buffer), None);
    assert_eq!(buffer, [0xAA]);
    assert_eq!(try_encode(-64, &mut buffer), Some(1));
    assert_eq!(buffer, [0x40]);
  }

  #[test]
  fn encode_too_small() {
    let mut buffer = [0; 18];
    assert!(matches!(
      encode(i128::MIN, &mut buffer),
      Err(Error::BufferTooSmall {
        needed: 19,
        capacity: 18
      })
    ));
  }

  #[test]
  fn encode_returns_written_prefix() {
    let mut buffer = [0; MAX_LEN];
    assert_eq!(encode(-65, &mut buffer).unwrap(), [0xBF, 0x7F]);
  }

  #[test]
  fn encode_to_vec_appends() {
    let mut v = vec![0xAA];
    encode_to_vec(-65, &mut v);
    encode_to_vec(64, &mut v);
    assert_eq!(v, [0xAA, 0xBF, 0x7F, 0xC0, 0x00]);
  }

  #[test]
  fn write_to_sink() {
    let mut sink = Vec::new();
    assert_eq!(write(-1, &mut sink).unwrap(), 1);
    assert_eq!(write(64, &mut sink).unwrap(), 2);
    assert_eq!(sink, [0x7F, 0xC0, 0x00]);
  }

  #[test]
  fn decode_without_extension() {
    assert_eq!(decode(&[0x3F]).unwrap().0.value(), 63);
    assert_eq!(decode(&[0xC0, 0x00]).unwrap().0.value(), 64);
  }

  #[test]
  fn decode_leaves_trailing_bytes() {
    let buffer = [0xBF, 0x7F, 0x7F];
    assert_eq!(decode(&buffer).unwrap(), (SignedInfo::new(-65), 2));
    assert_eq!(decode(&buffer[2..]).unwrap(), (SignedInfo::new(-1), 1));
  }

  #[test]
  fn decode_incomplete() {
    assert!(matches!(decode(&[]), Err(Error::Incomplete { consumed: 0 })));
    assert!(matches!(
      decode(&[0xBF]),
      Err(Error::Incomplete { consumed: 1 })
    ));
    assert_eq!(try_decode(&[0x80; 18]), None);
  }

  #[test]
  fn decode_overflow() {
    assert!(matches!(decode(&[0x80; 19]), Err(Error::Overflow)));
    assert!(matches!(decode(&[0xFF; 20]), Err(Error::Overflow)));
    assert_eq!(try_decode(&[0x80; 19]), None);
  }

  #[test]
  fn decode_overflow_in_final_byte() {
    let mut buffer = vec![0x80; 18];

    for last in [0x00, 0x01, 0x7E, 0x7F] {
      buffer.push(last);
      assert!(decode(&buffer).is_ok(), "final byte {last:#04x}");
      buffer.pop();
    }

    for last in [0x02, 0x40, 0x3F, 0x7D] {
      buffer.push(last);
      assert!(
        matches!(decode(&buffer), Err(Error::Overflow)),
        "final byte {last:#04x}"
      );
      buffer.pop();
    }
  }

  #[test]
  fn read_sequential() {
    let mut cursor = io::Cursor::new(vec![0x9B, 0xF1, 0x59, 0x7F]);

    assert_eq!(read(&mut cursor).unwrap(), (SignedInfo::new(-624485), 3));
    assert_eq!(read(&mut cursor).unwrap(), (SignedInfo::new(-1), 1));
    assert!(matches!(
      read(&mut cursor),
      Err(Error::Incomplete { consumed: 0 })
    ));
  }
}
