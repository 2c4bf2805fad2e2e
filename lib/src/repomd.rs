// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::BTreeMap;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use camino::Utf8Path;
use strum::{Display, EnumString};

use crate::Diagnostic;

/// A resource type declared in the repository index.
///
/// These are the `type` attributes the tool recognizes; anything else in
/// the index produces a [`Diagnostic::UnknownResourceType`] and is ignored.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum ResourceType {
    Patches,
    Primary,
    Filelists,
    Other,
}

/// The parsed top-level repository index (`repodata/repomd.xml`).
///
/// Maps each recognized [`ResourceType`] to the relative file location of
/// that resource. A recognized entry without a usable location leaves its
/// key absent; consumers that cannot proceed without a particular resource
/// (the patch index, for this tool) treat the absence as fatal.
#[derive(Clone, Debug, Default)]
pub struct RepomdIndex {
    locations: BTreeMap<ResourceType, String>,
}

impl RepomdIndex {
    /// Location of the repository index, relative to the repository root.
    /// Fixed by the RPM-MD repository format.
    pub const RELATIVE_PATH: &'static str = "repodata/repomd.xml";

    /// Loads and parses the repository index under `repo_path`.
    ///
    /// An unreadable file or unparseable document is a fatal error.
    /// Malformed entries inside an otherwise well-formed document are
    /// reported through the returned diagnostics instead.
    pub fn load(
        log: &slog::Logger,
        repo_path: &Utf8Path,
    ) -> Result<(Self, Vec<Diagnostic>)> {
        let path = repo_path.join(Self::RELATIVE_PATH);
        let input = fs_err::read_to_string(&path)?;
        let (index, diagnostics) = Self::from_xml(&input)
            .with_context(|| format!("error parsing `{path}`"))?;
        slog::debug!(
            log, "loaded repository index";
            "path" => %path,
            "resources" => index.locations.len(),
        );
        Ok((index, diagnostics))
    }

    /// Parses a repository index document.
    ///
    /// The root element must be `repomd` (namespaces are ignored). Child
    /// elements without a `type` attribute are not resource declarations
    /// and are skipped silently. If a type repeats, the last entry wins.
    pub fn from_xml(input: &str) -> Result<(Self, Vec<Diagnostic>)> {
        let doc = roxmltree::Document::parse(input)?;
        let root = doc.root_element();
        if root.tag_name().name() != "repomd" {
            bail!(
                "expected root element `repomd`, found `{}`",
                root.tag_name().name()
            );
        }

        let mut locations = BTreeMap::new();
        let mut diagnostics = Vec::new();
        for child in root.children().filter(|node| node.is_element()) {
            let Some(type_attr) = child.attribute("type") else {
                continue;
            };
            let Ok(resource_type) = ResourceType::from_str(type_attr) else {
                diagnostics.push(Diagnostic::UnknownResourceType {
                    resource_type: type_attr.to_owned(),
                });
                continue;
            };
            let href = child
                .children()
                .find(|node| {
                    node.is_element() && node.tag_name().name() == "location"
                })
                .and_then(|location| location.attribute("href"));
            match href {
                Some(href) => {
                    locations.insert(resource_type, href.to_owned());
                }
                None => {
                    diagnostics.push(Diagnostic::RepomdLocationMissing {
                        resource_type: type_attr.to_owned(),
                    });
                }
            }
        }

        Ok((Self { locations }, diagnostics))
    }

    /// Returns the relative location recorded for `resource_type`, if the
    /// index declared one.
    pub fn location(&self, resource_type: ResourceType) -> Option<&str> {
        self.locations.get(&resource_type).map(String::as_str)
    }
}
