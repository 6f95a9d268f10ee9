use std::fmt;

/// Every extension the tool is willing to reassign, in display order.
pub const CATALOG: [Extension; 15] = [
    Extension("ts"),
    Extension("tsx"),
    Extension("md"),
    Extension("mdx"),
    Extension("json"),
    Extension("js"),
    Extension("jsx"),
    Extension("html"),
    Extension("css"),
    Extension("yml"),
    Extension("yaml"),
    Extension("toml"),
    Extension("ini"),
    Extension("conf"),
    Extension("cfg"),
];

/// A lowercase file extension without its leading dot.
///
/// Values only come from [`CATALOG`], so an `Extension` always names
/// something the tool knows how to reassign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Extension(&'static str);

impl Extension {
    /// Look up a catalog entry, accepting an optional leading dot and any case.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn from_catalog(input: &str) -> Option<Self> {
        let normalized = input.trim().trim_start_matches('.').to_ascii_lowercase();
        CATALOG.iter().copied().find(|ext| ext.0 == normalized)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// The form `duti -s` expects, e.g. `.json`.
    pub fn dotted(&self) -> String {
        format!(".{}", self.0)
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub fn all() -> Vec<Extension> {
    CATALOG.to_vec()
}
