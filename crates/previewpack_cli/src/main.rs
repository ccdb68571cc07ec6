mod args;

use std::fs;
use std::path::Path;
use std::time::Instant;

use ansi_term::Colour;
use anyhow::Context;
use args::{InputArgs, OutputArgs};
use clap::Parser;

use previewpack::{
  BuildStatus, DataUrlStore, PreviewBuilder, PreviewOptions, Snapshot, VirtualFile,
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Commands {
  #[clap(flatten)]
  input: InputArgs,

  #[clap(flatten)]
  output: OutputArgs,
}

fn main() -> anyhow::Result<()> {
  let commands = Commands::parse();
  let start = Instant::now();

  let snapshot = load_snapshot(&commands.input.root)?;

  let options =
    PreviewOptions { alias_prefix: commands.input.alias.into(), ..PreviewOptions::default() };
  let mut builder = PreviewBuilder::with_store(options, DataUrlStore::new());

  let output = builder.build(&snapshot);
  let generation = output.generation;

  let dim = Colour::White.dimmed();
  let red = Colour::Red;
  let cyan = Colour::Cyan;

  for error in &output.errors {
    let location = error.path.as_deref().unwrap_or("(project)");
    eprintln!("{} {} {}", red.paint(format!("[{}]", error.stage)), cyan.paint(location), error.message);
  }

  match output.status {
    BuildStatus::EmptyProject => eprintln!("{}", dim.paint("empty project, wrote diagnostic page")),
    BuildStatus::EntryMissing => eprintln!("{}", dim.paint("no entry point, wrote diagnostic page")),
    BuildStatus::Clean | BuildStatus::WithErrors => {
      if let Some(entry) = &output.entry_path {
        eprintln!("{} {}", dim.paint("entry"), cyan.paint(entry.as_str()));
      }
    }
  }

  fs::write(&commands.output.out, &output.document.markup)
    .with_context(|| format!("Failed to write {}", commands.output.out.display()))?;
  builder.confirm_delivered(generation);

  eprintln!(
    "{} {} {} {:.2} kB {}",
    dim.paint("wrote"),
    cyan.paint(commands.output.out.display().to_string()),
    dim.paint("│ size:"),
    output.document.markup.len() as f64 / 1024.0,
    dim.paint(format!("│ {:?}", start.elapsed())),
  );

  Ok(())
}

/// Loads every file under `root` into the snapshot with a '/'-rooted
/// virtual path. Hidden files and node_modules are skipped.
fn load_snapshot(root: &Path) -> anyhow::Result<Snapshot> {
  let mut snapshot = Snapshot::new();
  collect_files(root, root, &mut snapshot)?;
  Ok(snapshot)
}

fn collect_files(root: &Path, dir: &Path, snapshot: &mut Snapshot) -> anyhow::Result<()> {
  let entries =
    fs::read_dir(dir).with_context(|| format!("Failed to read directory {}", dir.display()))?;

  for entry in entries {
    let entry = entry?;
    let path = entry.path();
    let name = entry.file_name().to_string_lossy().into_owned();
    if name.starts_with('.') || name == "node_modules" {
      continue;
    }

    if path.is_dir() {
      collect_files(root, &path, snapshot)?;
    } else if let Ok(content) = fs::read_to_string(&path) {
      let relative = path
        .strip_prefix(root)
        .unwrap_or(&path)
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
      snapshot.insert(VirtualFile::new(format!("/{relative}"), content));
    }
  }
  Ok(())
}
