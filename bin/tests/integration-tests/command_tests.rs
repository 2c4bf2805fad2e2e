// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use anyhow::Result;
use assert_cmd::Command;
use camino::{Utf8Path, Utf8PathBuf};
use predicates::prelude::*;

#[test]
fn test_generate_plan() -> Result<()> {
    let tempdir = tempfile::tempdir().unwrap();
    let repo_path = write_fixture_repo(tempdir.path())?;

    let mut cmd = make_cmd();
    cmd.args(["--arch", "x86_64", "--base", "/repo/base1"]);
    cmd.arg(&repo_path);
    cmd.assert().success().stdout(expected_plan(&repo_path));

    Ok(())
}

#[test]
fn test_missing_arch_warns_and_continues() -> Result<()> {
    let tempdir = tempfile::tempdir().unwrap();
    let repo_path = write_fixture_repo(tempdir.path())?;

    let mut cmd = make_cmd();
    cmd.args(["--base", "/repo/base1"]);
    cmd.arg(&repo_path);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("required argument --arch missing"))
        .stdout(predicate::str::contains(r#"<setup arch="">"#));

    Ok(())
}

#[test]
fn test_missing_base_warns_and_continues() -> Result<()> {
    let tempdir = tempfile::tempdir().unwrap();
    let repo_path = write_fixture_repo(tempdir.path())?;

    let mut cmd = make_cmd();
    cmd.args(["--arch", "x86_64"]);
    cmd.arg(&repo_path);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("must give at least one --base"))
        .stdout(predicate::str::contains(r#"<source name="update""#))
        .stdout(predicate::str::contains("install0").not());

    Ok(())
}

#[test]
fn test_missing_repo_path_is_fatal() {
    let mut cmd = make_cmd();
    cmd.args(["--arch", "x86_64", "--base", "/repo/base1"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(
            "required argument <path-to-repo> missing",
        ))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_output_file() -> Result<()> {
    let tempdir = tempfile::tempdir().unwrap();
    let repo_path = write_fixture_repo(tempdir.path())?;
    let output_path = repo_path.join("plan.xml");

    let mut cmd = make_cmd();
    cmd.args(["--arch", "x86_64", "--base", "/repo/base1"]);
    cmd.arg("--output");
    cmd.arg(&output_path);
    cmd.arg(&repo_path);
    cmd.assert().success().stdout(predicate::str::is_empty());

    assert_eq!(fs_err::read_to_string(&output_path)?, expected_plan(&repo_path));

    Ok(())
}

#[test]
fn test_patch_without_location_is_skipped() -> Result<()> {
    let tempdir = tempfile::tempdir().unwrap();
    let repo_path = write_fixture_repo(tempdir.path())?;
    fs_err::write(
        repo_path.join("repodata/patches.xml"),
        r#"<?xml version="1.0" encoding="UTF-8"?>
<patches xmlns="http://novell.com/package/metadata/suse/patches">
  <patch id="foo-1.0">
    <location href="patch-foo-1.0.xml"/>
  </patch>
  <patch id="broken-3.1"/>
  <patch id="bar-2.5">
    <location href="patch-bar-2.5.xml"/>
  </patch>
</patches>
"#,
    )?;

    let mut cmd = make_cmd();
    cmd.args(["--arch", "x86_64", "--base", "/repo/base1"]);
    cmd.arg(&repo_path);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("no location for patch id broken-3.1"))
        .stdout(expected_plan(&repo_path));

    Ok(())
}

#[test]
fn test_repomd_without_patches_entry_is_fatal() -> Result<()> {
    let tempdir = tempfile::tempdir().unwrap();
    let repo_path = write_fixture_repo(tempdir.path())?;
    fs_err::write(
        repo_path.join("repodata/repomd.xml"),
        r#"<?xml version="1.0" encoding="UTF-8"?>
<repomd xmlns="http://linux.duke.edu/metadata/repo">
  <data type="primary">
    <location href="repodata/primary.xml.gz"/>
  </data>
</repomd>
"#,
    )?;

    let mut cmd = make_cmd();
    cmd.args(["--arch", "x86_64", "--base", "/repo/base1"]);
    cmd.arg(&repo_path);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("has no patches entry"));

    Ok(())
}

#[test]
fn test_missing_repomd_file_is_fatal() -> Result<()> {
    let tempdir = tempfile::tempdir().unwrap();
    let repo_path = utf8_path(tempdir.path())?;

    let mut cmd = make_cmd();
    cmd.args(["--arch", "x86_64", "--base", "/repo/base1"]);
    cmd.arg(&repo_path);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("repodata/repomd.xml"));

    Ok(())
}

#[test]
fn test_reruns_are_byte_identical() -> Result<()> {
    let tempdir = tempfile::tempdir().unwrap();
    let repo_path = write_fixture_repo(tempdir.path())?;

    let run = || -> Result<Vec<u8>> {
        let mut cmd = make_cmd();
        cmd.args(["--arch", "x86_64", "--base", "/repo/base1"]);
        cmd.arg(&repo_path);
        Ok(cmd.assert().success().get_output().stdout.clone())
    };

    assert_eq!(run()?, run()?);

    Ok(())
}

fn make_cmd() -> Command {
    Command::cargo_bin("patchplan").unwrap()
}

fn utf8_path(path: &std::path::Path) -> Result<Utf8PathBuf> {
    Ok(Utf8PathBuf::try_from(path.to_path_buf())?)
}

/// Writes a small update repository with two patches under `dir`, returning
/// the repository root.
fn write_fixture_repo(dir: &std::path::Path) -> Result<Utf8PathBuf> {
    let repo_path = utf8_path(dir)?;
    fs_err::create_dir_all(repo_path.join("repodata"))?;
    fs_err::write(
        repo_path.join("repodata/repomd.xml"),
        r#"<?xml version="1.0" encoding="UTF-8"?>
<repomd xmlns="http://linux.duke.edu/metadata/repo">
  <data type="primary">
    <location href="repodata/primary.xml.gz"/>
  </data>
  <data type="patches">
    <location href="repodata/patches.xml"/>
  </data>
</repomd>
"#,
    )?;
    fs_err::write(
        repo_path.join("repodata/patches.xml"),
        r#"<?xml version="1.0" encoding="UTF-8"?>
<patches xmlns="http://novell.com/package/metadata/suse/patches">
  <patch id="foo-1.0">
    <location href="patch-foo-1.0.xml"/>
  </patch>
  <patch id="bar-2.5">
    <location href="patch-bar-2.5.xml"/>
  </patch>
</patches>
"#,
    )?;
    Ok(repo_path)
}

/// The document the fixture repository should produce with `--arch x86_64
/// --base /repo/base1`.
fn expected_plan(repo_path: &Utf8Path) -> String {
    format!(
        "<?xml version=\"1.0\"?>\n\
         <test>\n\
         <setup arch=\"x86_64\">\n\
         <source name=\"install0\" url=\"file:/repo/base1\"/>\n\
         <source name=\"update\" url=\"file:{repo_path}\"/>\n\
         </setup>\n  \
         <trial><install channel=\"update\" kind=\"patch\" name=\"foo\" version=\"1.0\"/></trial>\n  \
         <trial><install channel=\"update\" kind=\"patch\" name=\"bar\" version=\"2.5\"/></trial>\n\
         </test>\n"
    )
}
