use super::*;

/// Narrowest fixed-width integer tier able to hold a decoded value.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub enum SizeClass {
  Bits8,
  Bits32,
  Bits64,
  Bits128,
}

impl SizeClass {
  pub fn bits(self) -> u32 {
    match self {
      Self::Bits8 => 8,
      Self::Bits32 => 32,
      Self::Bits64 => 64,
      Self::Bits128 => 128,
    }
  }

  pub(crate) fn of_unsigned(n: u128) -> Self {
    if u8::try_from(n).is_ok() {
      Self::Bits8
    } else if u32::try_from(n).is_ok() {
      Self::Bits32
    } else if u64::try_from(n).is_ok() {
      Self::Bits64
    } else {
      Self::Bits128
    }
  }

  pub(crate) fn of_signed(n: i128) -> Self {
    if i8::try_from(n).is_ok() {
      Self::Bits8
    } else if i32::try_from(n).is_ok() {
      Self::Bits32
    } else if i64::try_from(n).is_ok() {
      Self::Bits64
    } else {
      Self::Bits128
    }
  }
}

impl From<SizeClass> for u32 {
  fn from(size_class: SizeClass) -> Self {
    size_class.bits()
  }
}

impl TryFrom<u32> for SizeClass {
  type Error = u32;

  fn try_from(bits: u32) -> Result<Self, u32> {
    match bits {
      8 => Ok(Self::Bits8),
      32 => Ok(Self::Bits32),
      64 => Ok(Self::Bits64),
      128 => Ok(Self::Bits128),
      n => Err(n),
    }
  }
}

impl fmt::Display for SizeClass {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.bits())
  }
}

impl FromStr for SizeClass {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    s.parse::<u32>()
      .ok()
      .and_then(|bits| Self::try_from(bits).ok())
      .ok_or_else(|| format!("invalid size class `{s}`"))
  }
}

impl Serialize for SizeClass {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for SizeClass {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    DeserializeFromStr::with(deserializer)
  }
}
