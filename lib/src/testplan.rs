// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt::Write;

use camino::Utf8PathBuf;

use crate::PatchName;

/// The assembled test plan: a setup block naming the install sources,
/// followed by one install trial per patch in patch-index order.
///
/// The consumer test runner depends on the exact element and attribute
/// shape produced by [`TestPlan::to_xml`], so values are inserted verbatim
/// and the layout never changes based on input. Emission is deterministic:
/// the same plan always serializes to the same bytes.
#[derive(Clone, Debug)]
pub struct TestPlan {
    /// Architecture the setup block declares.
    pub arch: String,
    /// Base install sources, in invocation order. Source `i` is named
    /// `install{i}`.
    pub base_sources: Vec<Utf8PathBuf>,
    /// The update repository path, declared as the `update` source.
    pub repo_path: Utf8PathBuf,
    /// One entry per install trial, in patch-index order.
    pub patches: Vec<PatchName>,
}

impl TestPlan {
    /// Serializes the plan as an XML document, including the declaration
    /// line and a trailing newline.
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        writeln!(out, r#"<?xml version="1.0"?>"#).unwrap();
        writeln!(out, "<test>").unwrap();
        writeln!(out, r#"<setup arch="{}">"#, self.arch).unwrap();
        for (i, base) in self.base_sources.iter().enumerate() {
            writeln!(out, r#"<source name="install{i}" url="file:{base}"/>"#)
                .unwrap();
        }
        writeln!(out, r#"<source name="update" url="file:{}"/>"#, self.repo_path)
            .unwrap();
        writeln!(out, "</setup>").unwrap();
        for PatchName { name, version } in &self.patches {
            writeln!(
                out,
                r#"  <trial><install channel="update" kind="patch" name="{name}" version="{version}"/></trial>"#
            )
            .unwrap();
        }
        writeln!(out, "</test>").unwrap();
        out
    }
}
