use snapbox::cmd::Command;
use std::io::Write;
use tempfile::NamedTempFile;

/// Config file with the given YAML, so tests never read the user's config.
fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file
}

fn bin() -> Command {
    Command::new(snapbox::cargo_bin!("filenamify"))
}

fn filenamify(config: &NamedTempFile) -> Command {
    bin()
        .arg("--quiet")
        .arg("--config")
        .arg(config.path())
}

#[test]
fn test_sanitizes_arguments() {
    let config = config_file("");
    filenamify(&config)
        .args(["foo/bar", "//foo//bar//", "con", "."])
        .assert()
        .success()
        .stdout_eq("foo!bar\nfoo!bar\ncon!\n!\n");
}

#[test]
fn test_reads_stdin_when_no_arguments() {
    let config = config_file("");
    filenamify(&config)
        .stdin("a<b\nnul\n")
        .assert()
        .success()
        .stdout_eq("a!b\nnul!\n");
}

#[test]
fn test_cli_flags_override_config() {
    let config = config_file("replacement: \"_\"\nmax_length: 3\n");
    filenamify(&config)
        .arg("a:bcdef")
        .assert()
        .success()
        .stdout_eq("a_b\n");

    filenamify(&config)
        .args(["--replacement", "-", "--max-length", "10", "a:bcdef"])
        .assert()
        .success()
        .stdout_eq("a-bcdef\n");
}

#[test]
fn test_empty_replacement_flag() {
    let config = config_file("");
    filenamify(&config)
        .args(["-r", "", "foo<bar"])
        .assert()
        .success()
        .stdout_eq("foobar\n");
}

#[cfg(unix)]
#[test]
fn test_path_mode() {
    let config = config_file("");
    filenamify(&config)
        .args(["--path", "/tmp/x/foo:bar"])
        .assert()
        .success()
        .stdout_eq("/tmp/x/foo!bar\n");
}

#[test]
fn test_invalid_replacement_fails() {
    let config = config_file("");
    filenamify(&config)
        .args(["--replacement", "/\u{1}", "foo"])
        .assert()
        .failure();
}

#[test]
fn test_broken_explicit_config_fails() {
    let config = config_file("max_length: [oops");
    filenamify(&config).arg("foo").assert().failure();
}

#[test]
fn test_non_utf8_stdin_is_sanitized_lossily() {
    let config = config_file("");
    filenamify(&config)
        .stdin(b"a\xff/b\nc:d\r\n".to_vec())
        .assert()
        .success()
        .stdout_eq("a\u{FFFD}!b\nc!d\n");
}

#[cfg(unix)]
#[test]
fn test_non_utf8_path_argument() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let config = config_file("");
    let input = OsString::from_vec(b"/tmp/x/a\xffb:c".to_vec());
    filenamify(&config)
        .arg("--path")
        .arg(input)
        .assert()
        .success()
        .stdout_eq("/tmp/x/a\u{FFFD}b!c\n");
}

/// `$XDG_CONFIG_HOME` holding `filenamify/config.yaml` with `content`, if any.
#[cfg(target_os = "linux")]
fn xdg_config_home(content: Option<&str>) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    if let Some(content) = content {
        let app_dir = dir.path().join("filenamify");
        std::fs::create_dir_all(&app_dir).unwrap();
        std::fs::write(app_dir.join("config.yaml"), content).unwrap();
    }
    dir
}

#[cfg(target_os = "linux")]
#[test]
fn test_default_config_location_is_applied() {
    let home = xdg_config_home(Some("replacement: \"_\"\nmax_length: 4\n"));
    bin()
        .env("XDG_CONFIG_HOME", home.path())
        .args(["--quiet", "a:bcdef"])
        .assert()
        .success()
        .stdout_eq("a_bc\n");
}

#[cfg(target_os = "linux")]
#[test]
fn test_missing_default_config_uses_defaults() {
    let home = xdg_config_home(None);
    bin()
        .env("XDG_CONFIG_HOME", home.path())
        .args(["--quiet", "a:bcdef"])
        .assert()
        .success()
        .stdout_eq("a!bcdef\n");
}

#[cfg(target_os = "linux")]
#[test]
fn test_broken_default_config_is_ignored() {
    let home = xdg_config_home(Some("max_length: [oops"));
    bin()
        .env("XDG_CONFIG_HOME", home.path())
        .arg("a:bcdef")
        .assert()
        .success()
        .stdout_eq("a!bcdef\n");
}

#[test]
fn test_verbose_logging_to_file() {
    let config = config_file("");
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("filenamify.log");

    bin()
        .args(["-vv", "--config"])
        .arg(config.path())
        .arg("--log-file")
        .arg(&log_path)
        .arg("a/b")
        .assert()
        .success()
        .stdout_eq("a!b\n");

    let log = std::fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("DEBUG"), "log was: {log}");
    assert!(log.contains("Effective options"), "log was: {log}");
}
