use super::*;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("encoding needs {needed} bytes but destination holds {capacity}")]
  BufferTooSmall { needed: usize, capacity: usize },
  #[error("input ended after {consumed} bytes without a terminating byte")]
  Incomplete { consumed: usize },
  #[error("encoded value does not fit in 128 bits")]
  Overflow,
  #[error("value {value} does not fit in {target} bits")]
  Narrowing { value: String, target: SizeClass },
  #[error("I/O error reading encoded value")]
  Io {
    #[from]
    source: io::Error,
  },
}

impl Error {
  pub(crate) fn narrowing(value: impl fmt::Display, target: SizeClass) -> Self {
    Self::Narrowing {
      value: value.to_string(),
      target,
    }
  }
}
