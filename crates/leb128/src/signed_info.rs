use super::*;

/// A decoded signed value and its classification.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Display, Serialize)]
#[display(fmt = "{}", value)]
pub struct SignedInfo {
  value: i128,
  size_class: SizeClass,
}

impl SignedInfo {
  pub fn new(value: i128) -> Self {
    Self {
      value,
      size_class: SizeClass::of_signed(value),
    }
  }

  pub fn value(self) -> i128 {
    self.value
  }

  pub fn size_class(self) -> SizeClass {
    self.size_class
  }

  pub fn fits_8(self) -> bool {
    self.size_class <= SizeClass::Bits8
  }

  pub fn fits_32(self) -> bool {
    self.size_class <= SizeClass::Bits32
  }

  pub fn fits_64(self) -> bool {
    self.size_class <= SizeClass::Bits64
  }

  pub fn as_i8(self) -> Result<i8> {
    i8::try_from(self.value).map_err(|_| Error::narrowing(self.value, SizeClass::Bits8))
  }

  pub fn as_i32(self) -> Result<i32> {
    i32::try_from(self.value).map_err(|_| Error::narrowing(self.value, SizeClass::Bits32))
  }

  pub fn as_i64(self) -> Result<i64> {
    i64::try_from(self.value).map_err(|_| Error::narrowing(self.value, SizeClass::Bits64))
  }

  pub fn as_i128(self) -> i128 {
    self.value
  }
}

impl From<i128> for SignedInfo {
  fn from(value: i128) -> Self {
    Self::new(value)
  }
}

impl From<SignedInfo> for i128 {
  fn from(info: SignedInfo) -> Self {
    info.value
  }
}
