use super::*;

/// Raw result of accumulating one encoded value, before any sign handling.
#[derive(Debug, PartialEq)]
pub(crate) struct Scan {
  pub(crate) value: u128,
  pub(crate) len: usize,
  pub(crate) shift: u32,
  pub(crate) last: u8,
}

impl Scan {
  pub(crate) fn slice(buffer: &[u8]) -> Result<Self> {
    let mut bytes = buffer.iter().copied();
    Self::run(|| Ok(bytes.next()))
  }

  /// Pulls one byte per call so nothing past the terminating byte is read.
  pub(crate) fn read(mut reader: impl Read) -> Result<Self> {
    Self::run(|| {
      let mut byte = [0];
      loop {
        match reader.read(&mut byte) {
          Ok(0) => return Ok(None),
          Ok(_) => return Ok(Some(byte[0])),
          Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
          Err(err) => return Err(err.into()),
        }
      }
    })
  }

  fn run<F>(mut next: F) -> Result<Self>
  where
    F: FnMut() -> Result<Option<u8>>,
  {
    let mut value = 0;
    let mut shift = 0;

    for len in 1..=MAX_LEN {
      let Some(byte) = next()? else {
        return Err(Error::Incomplete { consumed: len - 1 });
      };

      // bits past 127 fall off here and are checked by the caller
      value |= u128::from(byte & PAYLOAD) << shift;
      shift += 7;

      if byte & CONTINUATION == 0 {
        return Ok(Self {
          value,
          len,
          shift,
          last: byte,
        });
      }
    }

    Err(Error::Overflow)
  }
}
