#![deny(
  clippy::cast_lossless,
  clippy::cast_possible_truncation,
  clippy::cast_possible_wrap,
  clippy::cast_sign_loss
)]

use {
  self::{
    arguments::Arguments,
    integer::Integer,
    subcommand::{Subcommand, SubcommandResult},
  },
  anyhow::{anyhow, ensure, Context, Error},
  clap::Parser,
  leb128::SizeClass,
  serde::{Deserialize, Serialize},
  std::{
    env,
    fmt::{self, Display, Formatter},
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
    process,
    str::FromStr,
  },
};

pub use self::options::Options;

pub mod arguments;
mod integer;
pub mod options;
pub mod subcommand;

type Result<T = (), E = Error> = std::result::Result<T, E>;

pub fn main() {
  env_logger::init();

  let args = Arguments::parse();

  let minify = args.options.minify;

  match args.run() {
    Err(err) => {
      eprintln!("error: {err}");
      err
        .chain()
        .skip(1)
        .for_each(|cause| eprintln!("because: {cause}"));
      if env::var_os("RUST_BACKTRACE")
        .map(|val| val == "1")
        .unwrap_or_default()
      {
        eprintln!("{}", err.backtrace());
      }

      process::exit(1);
    }
    Ok(output) => {
      if let Some(output) = output {
        output.print_json(minify);
      }
    }
  }
}
