// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::io::Write;

use anyhow::{Context, Result, anyhow, bail};
use camino::Utf8PathBuf;
use clap::Parser;
use patchplan_lib::{
    Diagnostic, PatchList, PatchName, RepomdIndex, ResourceType, TestPlan,
};

/// Generates a solver test plan from an update repository's patch index.
#[derive(Debug, Parser)]
#[command(name = "patchplan")]
pub struct Args {
    /// Architecture the generated test plan targets.
    #[clap(short = 'a', long)]
    arch: Option<String>,

    /// Base install source; may be repeated.
    #[clap(short = 'b', long = "base")]
    base: Vec<Utf8PathBuf>,

    /// Enable debug logging.
    #[clap(short = 'd', long)]
    debug: bool,

    /// Write the test plan here instead of standard output.
    #[clap(short = 'o', long)]
    output: Option<Utf8PathBuf>,

    /// Path to the update repository.
    repo_path: Option<Utf8PathBuf>,
}

impl Args {
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Executes these arguments.
    pub fn exec(self, log: &slog::Logger) -> Result<()> {
        // Missing --arch and --base are warned about but do not abort;
        // the plan is emitted with an empty arch / no install sources.
        if self.arch.is_none() {
            slog::warn!(log, "{}", Diagnostic::ArchMissing);
        }
        if self.base.is_empty() {
            slog::warn!(log, "{}", Diagnostic::NoBaseSources);
        }

        // The only argument whose absence aborts the run.
        let Some(repo_path) = self.repo_path else {
            bail!("required argument <path-to-repo> missing");
        };

        let (repomd, diagnostics) =
            RepomdIndex::load(log, &repo_path).with_context(|| {
                format!("error reading repository index under `{repo_path}`")
            })?;
        log_diagnostics(log, &diagnostics);

        let patches_href =
            repomd.location(ResourceType::Patches).ok_or_else(|| {
                anyhow!(
                    "repository index under `{repo_path}` has no patches entry"
                )
            })?;

        let (patch_list, diagnostics) =
            PatchList::load(log, &repo_path, patches_href).with_context(
                || format!("error reading patch index `{patches_href}`"),
            )?;
        log_diagnostics(log, &diagnostics);

        let patches = patch_list
            .hrefs()
            .iter()
            .map(|href| {
                let patch = PatchName::from_location(href);
                slog::debug!(
                    log, "derived patch name";
                    "href" => %href,
                    "name" => %patch.name,
                    "version" => %patch.version,
                );
                patch
            })
            .collect();

        let plan = TestPlan {
            arch: self.arch.unwrap_or_default(),
            base_sources: self.base,
            repo_path,
            patches,
        };
        let document = plan.to_xml();

        match &self.output {
            Some(path) => fs_err::write(path, &document)?,
            None => std::io::stdout().write_all(document.as_bytes())?,
        }

        Ok(())
    }
}

fn log_diagnostics(log: &slog::Logger, diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        slog::warn!(log, "{diagnostic}");
    }
}
