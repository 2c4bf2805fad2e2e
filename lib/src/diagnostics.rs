// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// A non-fatal condition encountered while reading repository metadata or
/// validating the invocation.
///
/// Parsers return these alongside their best-effort result instead of
/// aborting; the caller decides how to report them (the CLI logs each one
/// at WARN). Only unreadable files, unparseable documents, and a missing
/// repository path are fatal, and those travel through `anyhow::Error`
/// instead.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// A recognized repomd entry carries no `location`/`href`, so its key
    /// stays absent from the index.
    #[error("no location for repomd type {resource_type}")]
    RepomdLocationMissing { resource_type: String },

    /// A repomd entry's `type` attribute is not one of the recognized
    /// resource types.
    #[error("unknown repomd type: {resource_type}")]
    UnknownResourceType { resource_type: String },

    /// A patch-index entry carries no `location`/`href` and is skipped.
    /// `id` is the entry's `id` attribute, empty if it has none.
    #[error("no location for patch id {id}")]
    PatchLocationMissing { id: String },

    /// `--arch` was not given; the test plan is emitted with an empty arch.
    #[error("required argument --arch missing")]
    ArchMissing,

    /// No `--base` was given; the setup block lists no install sources.
    #[error("must give at least one --base")]
    NoBaseSources,
}
