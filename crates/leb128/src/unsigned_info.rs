use super::*;

/// A decoded unsigned value and its classification.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Display, Serialize)]
#[display(fmt = "{}", value)]
pub struct UnsignedInfo {
  value: u128,
  size_class: SizeClass,
}

impl UnsignedInfo {
  pub fn new(value: u128) -> Self {
    Self {
      value,
      size_class: SizeClass::of_unsigned(value),
    }
  }

  pub fn value(self) -> u128 {
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

  pub fn as_u8(self) -> Result<u8> {
    u8::try_from(self.value).map_err(|_| Error::narrowing(self.value, SizeClass::Bits8))
  }

  pub fn as_u32(self) -> Result<u32> {
    u32::try_from(self.value).map_err(|_| Error::narrowing(self.value, SizeClass::Bits32))
  }

  pub fn as_u64(self) -> Result<u64> {
    u64::try_from(self.value).map_err(|_| Error::narrowing(self.value, SizeClass::Bits64))
  }

  pub fn as_u128(self) -> u128 {
    self.value
  }
}

impl From<u128> for UnsignedInfo {
  fn from(value: u128) -> Self {
    Self::new(value)
  }
}

impl From<UnsignedInfo> for u128 {
  fn from(info: UnsignedInfo) -> Self {
    info.value
  }
}
