// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use anyhow::{Context, Result, bail};
use camino::Utf8Path;

use crate::Diagnostic;

/// The parsed patch index: one file location per patch, in document order.
#[derive(Clone, Debug, Default)]
pub struct PatchList {
    hrefs: Vec<String>,
}

impl PatchList {
    /// Loads and parses the patch index at `href`, relative to the
    /// repository root (the location comes from the repository index).
    ///
    /// An unreadable file or unparseable document is a fatal error;
    /// entries without a location are reported through the returned
    /// diagnostics and skipped.
    pub fn load(
        log: &slog::Logger,
        repo_path: &Utf8Path,
        href: &str,
    ) -> Result<(Self, Vec<Diagnostic>)> {
        let path = repo_path.join(href);
        let input = fs_err::read_to_string(&path)?;
        let (list, diagnostics) = Self::from_xml(&input)
            .with_context(|| format!("error parsing `{path}`"))?;
        slog::debug!(
            log, "loaded patch index";
            "path" => %path,
            "patches" => list.hrefs.len(),
        );
        Ok((list, diagnostics))
    }

    /// Parses a patch index document.
    ///
    /// The root element must be `patches` (namespaces are ignored). Each
    /// element child contributes its `location`/`href` string; a child
    /// without one is skipped with a [`Diagnostic::PatchLocationMissing`]
    /// identifying it by its `id` attribute, so the resulting list may be
    /// shorter than the child count. No placeholder is inserted.
    pub fn from_xml(input: &str) -> Result<(Self, Vec<Diagnostic>)> {
        let doc = roxmltree::Document::parse(input)?;
        let root = doc.root_element();
        if root.tag_name().name() != "patches" {
            bail!(
                "expected root element `patches`, found `{}`",
                root.tag_name().name()
            );
        }

        let mut hrefs = Vec::new();
        let mut diagnostics = Vec::new();
        for child in root.children().filter(|node| node.is_element()) {
            let href = child
                .children()
                .find(|node| {
                    node.is_element() && node.tag_name().name() == "location"
                })
                .and_then(|location| location.attribute("href"));
            match href {
                Some(href) => hrefs.push(href.to_owned()),
                None => diagnostics.push(Diagnostic::PatchLocationMissing {
                    id: child.attribute("id").unwrap_or_default().to_owned(),
                }),
            }
        }

        Ok((Self { hrefs }, diagnostics))
    }

    /// Returns the patch file locations in document order.
    pub fn hrefs(&self) -> &[String] {
        &self.hrefs
    }
}
