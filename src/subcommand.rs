use super::*;

pub mod decode;
pub mod encode;
pub mod len;

#[derive(Debug, Parser)]
pub(crate) enum Subcommand {
  #[command(about = "Decode LEB128 values")]
  Decode(decode::Decode),
  #[command(about = "Encode integers as LEB128")]
  Encode(encode::Encode),
  #[command(about = "Print the encoded length of an integer")]
  Len(len::Len),
}

impl Subcommand {
  pub(crate) fn run(self) -> SubcommandResult {
    match self {
      Self::Decode(decode) => decode.run(),
      Self::Encode(encode) => encode.run(),
      Self::Len(len) => len.run(),
    }
  }
}

pub(crate) trait Output: Send {
  fn print_json(&self, minify: bool);
}

impl<T> Output for T
where
  T: Serialize + Send,
{
  fn print_json(&self, minify: bool) {
    if minify {
      serde_json::to_writer(io::stdout(), self).ok();
    } else {
      serde_json::to_writer_pretty(io::stdout(), self).ok();
    }
    println!();
  }
}

pub(crate) type SubcommandResult = Result<Option<Box<dyn Output>>>;
