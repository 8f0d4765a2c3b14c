use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Len {
  #[arg(long, help = "Use signed LEB128.")]
  signed: bool,
  #[arg(
    allow_negative_numbers = true,
    help = "Measure <INTEGER>, in decimal or 0x-prefixed hex."
  )]
  integer: Integer,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Output {
  pub len: usize,
}

impl Len {
  pub(crate) fn run(self) -> SubcommandResult {
    let len = if self.signed {
      leb128::signed::encoded_len(self.integer.signed()?)
    } else {
      leb128::unsigned::encoded_len(self.integer.unsigned()?)
    };

    Ok(Some(Box::new(Output { len })))
  }
}
