bitflags::bitflags! {
  /// Execution capabilities the preview host must grant the injected
  /// document. Module loading requires same-origin-equivalent access
  /// because load locations are origin-scoped.
  #[derive(Debug, Clone, Copy, PartialEq, Eq)]
  pub struct SandboxCapabilities: u8 {
    const SCRIPTS = 1;
    const SAME_ORIGIN = 1 << 1;
    const FORMS = 1 << 2;
  }
}

impl SandboxCapabilities {
  /// The full set the assembled preview needs.
  pub fn preview_default() -> Self {
    Self::SCRIPTS | Self::SAME_ORIGIN | Self::FORMS
  }

  /// Renders the capability set in the host's sandbox-attribute syntax.
  pub fn as_attribute(self) -> String {
    let mut parts = Vec::with_capacity(3);
    if self.contains(Self::SCRIPTS) {
      parts.push("allow-scripts");
    }
    if self.contains(Self::SAME_ORIGIN) {
      parts.push("allow-same-origin");
    }
    if self.contains(Self::FORMS) {
      parts.push("allow-forms");
    }
    parts.join(" ")
  }
}

/// The final self-contained artifact of one build. Constructed fresh every
/// build and handed to the preview host, which owns it after injection.
#[derive(Debug)]
pub struct PreviewDocument {
  pub markup: String,
  pub sandbox_policy: SandboxCapabilities,
}

#[test]
fn attribute_rendering() {
  let caps = SandboxCapabilities::preview_default();
  assert_eq!(caps.as_attribute(), "allow-scripts allow-same-origin allow-forms");
  assert_eq!(SandboxCapabilities::SCRIPTS.as_attribute(), "allow-scripts");
}
