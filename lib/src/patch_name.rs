// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use camino::Utf8Path;

/// Name and version derived from a patch file location.
///
/// The derivation is deterministic and never fails, so the pair can be
/// recomputed from the location string at any time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatchName {
    pub name: String,
    pub version: String,
}

impl PatchName {
    /// Derives a `PatchName` from a patch file location of the form
    /// `<prefix>-<name-tokens>-<version>.xml`.
    ///
    /// The base name (with the `.xml` suffix stripped) is split on `-`:
    /// the last token is the version, the first token is discarded, and
    /// the remaining tokens joined with `-` form the name. With fewer
    /// than three tokens the name comes out empty; that is passed through
    /// as-is rather than treated as an error.
    ///
    /// The first-token discard is the historical behavior of the tool
    /// this replaces and consumers depend on it, so it is kept exactly.
    pub fn from_location(href: &str) -> Self {
        let base = Utf8Path::new(href).file_name().unwrap_or(href);
        let base = base.strip_suffix(".xml").unwrap_or(base);

        let mut tokens: Vec<&str> = base.split('-').collect();
        let version = tokens.pop().unwrap_or_default().to_owned();
        let name = if tokens.len() > 1 {
            tokens[1..].join("-")
        } else {
            String::new()
        };

        Self { name, version }
    }
}
