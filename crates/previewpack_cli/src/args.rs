use std::path::PathBuf;

use clap::Args;

#[derive(Args)]
pub struct InputArgs {
  /// Directory loaded into the virtual project snapshot.
  #[clap(long, default_value = ".")]
  pub root: PathBuf,

  /// Alias prefix resolved against the project root.
  #[clap(long, default_value = "@/")]
  pub alias: String,
}

#[derive(Args)]
pub struct OutputArgs {
  /// Where the assembled preview document is written.
  #[clap(long, short = 'o', default_value = "preview.html")]
  pub out: PathBuf,
}
