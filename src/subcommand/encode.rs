use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Encode {
  #[arg(long, help = "Use signed LEB128.")]
  signed: bool,
  #[arg(
    required = true,
    allow_negative_numbers = true,
    help = "Encode <INTEGER>, in decimal or 0x-prefixed hex."
  )]
  integers: Vec<Integer>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Output {
  pub integer: String,
  pub hex: String,
  pub len: usize,
}

impl Encode {
  pub(crate) fn run(self) -> SubcommandResult {
    let mut outputs = Vec::new();

    for integer in self.integers {
      let bytes = if self.signed {
        leb128::signed::encode_vec(integer.signed()?)
      } else {
        leb128::unsigned::encode_vec(integer.unsigned()?)
      };

      log::debug!("encoded {integer} as {} bytes", bytes.len());

      outputs.push(Output {
        integer: integer.to_string(),
        hex: hex::encode(&bytes),
        len: bytes.len(),
      });
    }

    Ok(Some(Box::new(outputs)))
  }
}
