use super::*;

/// Deserializes any `FromStr` type from its string form.
pub(crate) struct DeserializeFromStr<T: FromStr>(pub(crate) T);

impl<T: FromStr> DeserializeFromStr<T> {
  pub(crate) fn with<'de, D>(deserializer: D) -> Result<T, D::Error>
  where
    D: Deserializer<'de>,
    T::Err: fmt::Display,
  {
    Ok(DeserializeFromStr::<T>::deserialize(deserializer)?.0)
  }
}

impl<'de, T: FromStr> Deserialize<'de> for DeserializeFromStr<T>
where
  T::Err: fmt::Display,
{
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    Ok(Self(
      FromStr::from_str(&String::deserialize(deserializer)?)
        .map_err(serde::de::Error::custom)?,
    ))
  }
}
