use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::tempdir;

fn pkg() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("pkg"));
    cmd.env_remove("PKG_LIBEXEC_DIR");
    cmd
}

#[cfg(unix)]
fn write_program(dir: &std::path::Path, name: &str, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

#[test]
fn test_no_command_prints_usage() {
    pkg()
        .assert()
        .code(64)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("usage: pkg <command> [<args>]"))
        .stderr(predicate::str::contains(
            "\tadd\n\tcreate\n\tdelete\n\thelp\n\tinfo\n\tregister\n\trepo\n\tupdate\n\tupgrade\n\tversion\n\twhich\n",
        ));
}

#[test]
fn test_unknown_command_prints_usage() {
    pkg()
        .arg("xyz")
        .assert()
        .code(64)
        .stderr(predicate::str::contains("Where <command> can be:"));
}

#[test]
fn test_ambiguous_command_lists_candidates() {
    pkg()
        .arg("up")
        .assert()
        .code(64)
        .stderr(predicate::str::contains(
            "Ambiguous command: 'up'. See 'pkg help' for more information.",
        ))
        .stderr(predicate::str::contains("pkg: \tupdate\npkg: \tupgrade\n"));
}

#[test]
fn test_help_for_command() {
    pkg()
        .args(["help", "delete"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr("usage: pkg delete [-f] <pkg-name> ...\n");
}

#[test]
fn test_help_requires_exact_name() {
    pkg()
        .args(["help", "del"])
        .assert()
        .code(1)
        .stderr("pkg: del is not a valid command\n");
}

#[test]
fn test_help_without_target() {
    pkg()
        .arg("help")
        .assert()
        .code(64)
        .stderr(predicate::str::starts_with("usage: pkg help <command>\n"));
}

#[test]
fn test_version_command_by_abbreviation() {
    pkg()
        .arg("v")
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_version_flag() {
    pkg()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("pkg "));
}

#[test]
fn test_missing_libexec_dir() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing");

    pkg()
        .arg("--libexec-dir")
        .arg(&missing)
        .arg("info")
        .assert()
        .code(78)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_missing_command_program() {
    let dir = tempdir().unwrap();

    pkg()
        .env("PKG_LIBEXEC_DIR", dir.path())
        .arg("info")
        .assert()
        .code(69)
        .stderr(predicate::str::contains("command program pkg-info"));
}

#[test]
fn test_reserved_command_is_never_dispatched() {
    pkg()
        .arg("upd")
        .assert()
        .failure()
        .stderr(predicate::str::contains("reserved and has no handler"));
}

#[cfg(unix)]
#[test]
fn test_dispatch_shifts_arguments_and_propagates_status() {
    let dir = tempdir().unwrap();
    write_program(dir.path(), "pkg-add", r#"echo "$#:$*"; exit 7"#);

    pkg()
        .env("PKG_LIBEXEC_DIR", dir.path())
        .args(["a", "foo.pkg", "-f"])
        .assert()
        .code(7)
        .stdout("2:foo.pkg -f\n");
}

#[cfg(unix)]
#[test]
fn test_exact_name_dispatches_over_prefix() {
    let dir = tempdir().unwrap();
    write_program(dir.path(), "pkg-repo", "echo repo");
    write_program(dir.path(), "pkg-register", "echo register");

    pkg()
        .arg("--libexec-dir")
        .arg(dir.path())
        .arg("repo")
        .assert()
        .success()
        .stdout("repo\n");

    pkg()
        .arg("--libexec-dir")
        .arg(dir.path())
        .arg("reg")
        .assert()
        .success()
        .stdout("register\n");
}

#[cfg(unix)]
#[test]
fn test_dispatch_finds_program_on_path() {
    let dir = tempdir().unwrap();
    write_program(dir.path(), "pkg-which", r#"echo "which $1""#);

    pkg()
        .env("PATH", dir.path())
        .args(["w", "/bin/ls"])
        .assert()
        .success()
        .stdout("which /bin/ls\n");
}

#[test]
fn test_empty_libexec_dir_is_ignored() {
    pkg()
        .env("PKG_LIBEXEC_DIR", "")
        .args(["help", "add"])
        .assert()
        .success()
        .stderr("usage: pkg add <pkg-file> ...\n");
}

#[test]
fn test_leading_double_dash_ends_options() {
    pkg()
        .args(["--", "-V"])
        .assert()
        .code(64)
        .stderr(predicate::str::starts_with("usage: pkg <command> [<args>]"));
}

#[cfg(unix)]
#[test]
fn test_dispatch_passes_non_utf8_arguments() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = tempdir().unwrap();
    write_program(dir.path(), "pkg-add", r#"printf '%s' "$1" > "$(dirname "$0")/seen"; exit 5"#);

    pkg()
        .env("PKG_LIBEXEC_DIR", dir.path())
        .arg("add")
        .arg(OsStr::from_bytes(b"caf\xe9.pkg"))
        .assert()
        .code(5);

    assert_eq!(std::fs::read(dir.path().join("seen")).unwrap(), b"caf\xe9.pkg");
}

#[cfg(unix)]
#[test]
fn test_non_utf8_command_is_unknown() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    pkg()
        .arg(OsStr::from_bytes(b"a\xff"))
        .assert()
        .code(64)
        .stderr(predicate::str::contains("Where <command> can be:"));
}
