use std::path::Path;

use oxc::{
  allocator::Allocator,
  ast::ast::{ImportDeclarationSpecifier, Program, Statement},
  codegen::Codegen,
  parser::Parser,
  semantic::SemanticBuilder,
  span::SourceType,
  transformer::{JsxRuntime, TransformOptions, Transformer},
};
use previewpack_common::{FileKind, VirtualFile};
use previewpack_error::{BuildResult, TransformError};

/// A transformed module body plus its import specifiers in source order.
/// Specifiers are enumerated here and substituted later, once the builder
/// has resolved every one of them.
#[derive(Debug)]
pub struct TransformReturn {
  pub code: String,
  pub imports: Vec<String>,
}

/// Converts one snapshot file into a directly executable module body.
///
/// Malformed input yields a parse-stage error carrying the file's path; it
/// never panics and never aborts the surrounding build.
pub fn transform(file: &VirtualFile) -> BuildResult<TransformReturn> {
  match file.kind {
    FileKind::ComponentSource => transform_component(file),
    // An imported stylesheet becomes an inert module. Its text reaches the
    // page through the aggregated style bundle instead.
    FileKind::Stylesheet => {
      Ok(TransformReturn { code: String::from("export default {};\n"), imports: Vec::new() })
    }
    // Opaque text module: served verbatim, no markup transform, no imports.
    FileKind::Other => {
      Ok(TransformReturn { code: file.content.to_string(), imports: Vec::new() })
    }
  }
}

fn transform_component(file: &VirtualFile) -> BuildResult<TransformReturn> {
  let allocator = Allocator::default();
  // Angle brackets in plain .ts are type assertions, not markup.
  let jsx = !file.path.ends_with(".ts");
  let source_type = SourceType::default()
    .with_module(true)
    .with_jsx(jsx)
    .with_typescript(file.is_typescript());

  let ret = Parser::new(&allocator, &file.content, source_type).parse();
  if let Some(error) = ret.errors.first() {
    return Err(TransformError::parse(file.path.clone(), error.to_string()));
  }
  let mut program = ret.program;

  let semantic_ret = SemanticBuilder::new().build(&program);
  if let Some(error) = semantic_ret.errors.first() {
    return Err(TransformError::parse(file.path.clone(), error.to_string()));
  }
  let scoping = semantic_ret.semantic.into_scoping();

  // Classic-runtime lowering keeps the import list closed: automatic JSX
  // would inject `react/jsx-runtime` imports behind the enumeration's back.
  let mut options = TransformOptions::default();
  options.jsx.runtime = JsxRuntime::Classic;

  let transformer_ret = Transformer::new(&allocator, Path::new(file.path.as_str()), &options)
    .build_with_scoping(scoping, &mut program);
  if let Some(error) = transformer_ret.errors.first() {
    return Err(TransformError::parse(file.path.clone(), error.to_string()));
  }

  let mut imports = collect_import_specifiers(&program);
  let mut code = Codegen::new().build(&program).code;

  // The classic pragma expects a `React` binding in scope. Named-only
  // imports from react (`import { useState } from 'react'`) leave the
  // pragma unbound, so the repair keys off the declared bindings, not the
  // specifier list.
  if code.contains("React.createElement") && !declares_react_binding(&program) {
    code.insert_str(0, "import React from \"react\";\n");
    if !imports.iter().any(|s| s == "react") {
      imports.insert(0, String::from("react"));
    }
  }

  Ok(TransformReturn { code, imports })
}

/// Whether any import declaration binds the name `React`, whatever the
/// source module.
fn declares_react_binding(program: &Program<'_>) -> bool {
  for stmt in &program.body {
    let Statement::ImportDeclaration(decl) = stmt else {
      continue;
    };
    let Some(specifiers) = &decl.specifiers else {
      continue;
    };
    for specifier in specifiers {
      let local = match specifier {
        ImportDeclarationSpecifier::ImportSpecifier(s) => &s.local,
        ImportDeclarationSpecifier::ImportDefaultSpecifier(s) => &s.local,
        ImportDeclarationSpecifier::ImportNamespaceSpecifier(s) => &s.local,
      };
      if local.name == "React" {
        return true;
      }
    }
  }
  false
}

/// Every top-level static import and re-export specifier, in source order.
fn collect_import_specifiers(program: &Program<'_>) -> Vec<String> {
  let mut specifiers = Vec::new();
  for stmt in &program.body {
    match stmt {
      Statement::ImportDeclaration(decl) => {
        specifiers.push(decl.source.value.to_string());
      }
      Statement::ExportNamedDeclaration(decl) => {
        if let Some(source) = &decl.source {
          specifiers.push(source.value.to_string());
        }
      }
      Statement::ExportAllDeclaration(decl) => {
        specifiers.push(decl.source.value.to_string());
      }
      _ => {}
    }
  }
  specifiers
}
