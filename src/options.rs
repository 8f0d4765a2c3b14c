use super::*;

#[derive(Clone, Default, Debug, Parser)]
pub struct Options {
  #[arg(long, global = true, help = "Print compact JSON.")]
  pub minify: bool,
}
