use super::*;

/// An integer given on the command line, in decimal or `0x` hexadecimal,
/// before it is committed to a signed or unsigned encoding.
#[derive(Debug, PartialEq, Copy, Clone)]
pub(crate) enum Integer {
  Negative(i128),
  NonNegative(u128),
}

impl Integer {
  pub(crate) fn signed(self) -> Result<i128> {
    match self {
      Self::Negative(n) => Ok(n),
      Self::NonNegative(n) => {
        i128::try_from(n).map_err(|_| anyhow!("{n} is out of range for a signed 128-bit integer"))
      }
    }
  }

  pub(crate) fn unsigned(self) -> Result<u128> {
    match self {
      Self::Negative(n) => Err(anyhow!("{n} is negative and cannot be encoded unsigned")),
      Self::NonNegative(n) => Ok(n),
    }
  }
}

impl FromStr for Integer {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let (negative, digits) = match s.strip_prefix('-') {
      Some(digits) => (true, digits),
      None => (false, s),
    };

    // from_str_radix takes its own leading `+`
    ensure!(!digits.contains('+'), "invalid integer `{s}`");

    let magnitude = match digits
      .strip_prefix("0x")
      .or_else(|| digits.strip_prefix("0X"))
    {
      Some(hex) => u128::from_str_radix(hex, 16),
      None => digits.parse::<u128>(),
    }
    .with_context(|| format!("invalid integer `{s}`"))?;

    if !negative || magnitude == 0 {
      return Ok(Self::NonNegative(magnitude));
    }

    0i128
      .checked_sub_unsigned(magnitude)
      .map(Self::Negative)
      .ok_or_else(|| anyhow!("{s} is out of range for a signed 128-bit integer"))
  }
}

impl Display for Integer {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Self::Negative(n) => write!(f, "{n}"),
      Self::NonNegative(n) => write!(f, "{n}"),
    }
  }
}
