use std::fmt;

/// An installed application, named either by its bundle (`IINA.app`) or by its
/// reverse-DNS bundle identifier (`com.colliderli.iina`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ApplicationIdentifier(String);

impl ApplicationIdentifier {
    /// Wrap an identifier, trimming surrounding whitespace. Empty input yields `None`.
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApplicationIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// True for names like `Visual Studio Code.app`.
pub fn is_bundle_name(name: &str) -> bool {
    name.ends_with(".app")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_and_rejects_blank() {
        let id = ApplicationIdentifier::new("  com.apple.TextEdit\n").unwrap();
        assert_eq!(id.as_str(), "com.apple.TextEdit");
        assert!(ApplicationIdentifier::new(" \n\t").is_none());
    }

    #[test]
    fn test_bundle_name_detection() {
        assert!(is_bundle_name("IINA.app"));
        assert!(is_bundle_name("Visual Studio Code.app"));
        assert!(!is_bundle_name("com.colliderli.iina"));
        assert!(!is_bundle_name("QuickTime Player"));
    }
}
