use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Decode {
  #[arg(long, help = "Use signed LEB128.")]
  signed: bool,
  #[arg(
    long,
    conflicts_with = "hex",
    help = "Decode values read from <FILE>."
  )]
  file: Option<PathBuf>,
  #[arg(
    required_unless_present = "file",
    help = "Decode values from <HEX>, optionally 0x-prefixed."
  )]
  hex: Option<String>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Output {
  pub value: String,
  pub size_class: SizeClass,
  pub offset: usize,
  pub len: usize,
}

impl Decode {
  pub(crate) fn run(self) -> SubcommandResult {
    let outputs = match &self.file {
      Some(path) => self.decode(BufReader::new(
        File::open(path).with_context(|| format!("failed to open `{}`", path.display()))?,
      ))?,
      None => {
        let hex = self.hex.as_deref().unwrap_or_default();
        self.decode(io::Cursor::new(
          hex::decode(hex.strip_prefix("0x").unwrap_or(hex))
            .with_context(|| format!("invalid hex `{hex}`"))?,
        ))?
      }
    };

    log::info!("decoded {} values", outputs.len());

    Ok(Some(Box::new(outputs)))
  }

  fn decode(&self, mut reader: impl BufRead) -> Result<Vec<Output>> {
    let mut outputs = Vec::new();
    let mut offset = 0;

    // an empty buffer means the input ended cleanly between values
    while !reader.fill_buf().context("failed to read input")?.is_empty() {
      let (value, size_class, len) = if self.signed {
        leb128::signed::read(&mut reader)
          .map(|(info, len)| (info.to_string(), info.size_class(), len))
      } else {
        leb128::unsigned::read(&mut reader)
          .map(|(info, len)| (info.to_string(), info.size_class(), len))
      }
      .with_context(|| format!("failed to decode value at byte offset {offset}"))?;

      log::debug!("decoded {value} from {len} bytes at offset {offset}");

      outputs.push(Output {
        value,
        size_class,
        offset,
        len,
      });

      offset += len;
    }

    Ok(outputs)
  }
}
