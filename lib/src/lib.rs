// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod diagnostics;
mod patch_name;
mod patches;
mod repomd;
mod testplan;

pub use diagnostics::*;
pub use patch_name::*;
pub use patches::*;
pub use repomd::*;
pub use testplan::*;
