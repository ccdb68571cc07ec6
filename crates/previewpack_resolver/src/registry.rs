//! The fixed registry of supported external packages.
//!
//! Externals are never bundled; each supported package name is bound to one
//! canonical hosted module address. Read-only after initialization, so no
//! synchronization is needed. A specifier whose package name is not listed
//! here is a resolution error at the call site, never a network lookup.

/// Package name → canonical hosted address.
pub static EXTERNAL_PACKAGES: phf::Map<&'static str, &'static str> = phf::phf_map! {
  "react" => "https://esm.sh/react@18.3.1",
  "react-dom" => "https://esm.sh/react-dom@18.3.1",
  "prop-types" => "https://esm.sh/prop-types@15.8.1",
  "lucide-react" => "https://esm.sh/lucide-react@0.469.0",
  "clsx" => "https://esm.sh/clsx@2.1.1",
  "class-variance-authority" => "https://esm.sh/class-variance-authority@0.7.1",
  "tailwind-merge" => "https://esm.sh/tailwind-merge@2.6.0",
  "framer-motion" => "https://esm.sh/framer-motion@11.15.0",
  "date-fns" => "https://esm.sh/date-fns@4.1.0",
  "@heroicons/react" => "https://esm.sh/@heroicons/react@2.2.0",
};

/// Maps an external specifier (name or name-plus-subpath) to its hosted
/// address, or `None` when the package is not in the registry.
pub fn resolve_external(specifier: &str) -> Option<String> {
  let name_len = package_name_len(specifier);
  let (name, subpath) = specifier.split_at(name_len);
  let base = EXTERNAL_PACKAGES.get(name)?;
  if subpath.is_empty() {
    Some((*base).to_string())
  } else {
    Some(format!("{base}{subpath}"))
  }
}

/// Length of the package-name portion of a specifier. Scoped names keep
/// their first two segments.
fn package_name_len(specifier: &str) -> usize {
  let mut slashes = specifier.match_indices('/');
  if specifier.starts_with('@') {
    slashes.nth(1).map_or(specifier.len(), |(idx, _)| idx)
  } else {
    slashes.next().map_or(specifier.len(), |(idx, _)| idx)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bare_name() {
    assert_eq!(resolve_external("react").as_deref(), Some("https://esm.sh/react@18.3.1"));
  }

  #[test]
  fn subpath_appended_to_canonical_address() {
    assert_eq!(
      resolve_external("react-dom/client").as_deref(),
      Some("https://esm.sh/react-dom@18.3.1/client")
    );
    assert_eq!(
      resolve_external("react/jsx-runtime").as_deref(),
      Some("https://esm.sh/react@18.3.1/jsx-runtime")
    );
  }

  #[test]
  fn scoped_name_with_subpath() {
    assert_eq!(
      resolve_external("@heroicons/react/24/solid").as_deref(),
      Some("https://esm.sh/@heroicons/react@2.2.0/24/solid")
    );
  }

  #[test]
  fn unregistered_is_none() {
    assert_eq!(resolve_external("left-pad"), None);
    assert_eq!(resolve_external("@unknown/scope"), None);
  }
}
