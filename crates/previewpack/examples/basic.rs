use previewpack::{PreviewBuilder, PreviewOptions, Snapshot, VirtualFile};

fn main() {
  let snapshot: Snapshot = [
    VirtualFile::new(
      "/App.jsx",
      "import Card from '@/components/Card';\nimport './app.css';\n\nexport default function App() {\n  return <Card title=\"Hello\" />;\n}\n",
    ),
    VirtualFile::new(
      "/components/Card.jsx",
      "export default function Card({ title }) {\n  return <div className=\"card\">{title}</div>;\n}\n",
    ),
    VirtualFile::new("/app.css", ".card { padding: 12px; }\n"),
  ]
  .into_iter()
  .collect();

  let mut builder = PreviewBuilder::new(PreviewOptions::default());
  let output = builder.build(&snapshot);

  for error in &output.errors {
    eprintln!("{error}");
  }
  eprintln!("entry: {:?}", output.entry_path);
  eprintln!("import map:\n{}", output.import_map.to_json());
}
