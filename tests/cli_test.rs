use anyhow::Result;
use std::ffi::OsStr;
use std::fs;
use std::process::{Command, Output};
use tempfile::tempdir;

fn run_dirtree(args: &[&OsStr]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_dirtree"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()?)
}

#[test]
fn test_empty_directory_prints_banner_only() -> Result<()> {
    let temp = tempdir()?;

    let output = run_dirtree(&[temp.path().as_os_str()])?;
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "📁 Project directory structure (max depth 3)\n\n"
    );
    Ok(())
}

#[test]
fn test_level_flag_limits_output() -> Result<()> {
    let temp = tempdir()?;
    fs::write(temp.path().join("a.txt"), "")?;
    fs::create_dir(temp.path().join("sub"))?;
    fs::write(temp.path().join("sub").join("c.txt"), "")?;

    let output = run_dirtree(&[
        temp.path().as_os_str(),
        OsStr::new("-L"),
        OsStr::new("1"),
    ])?;
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "📁 Project directory structure (max depth 1)\n\n├── a.txt\n└── sub/\n"
    );
    Ok(())
}

#[test]
fn test_missing_root_exits_non_zero() -> Result<()> {
    let temp = tempdir()?;
    let missing = temp.path().join("does-not-exist");

    let output = run_dirtree(&[missing.as_os_str()])?;
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("does-not-exist"));
    // The os error appears once, as the cause.
    assert_eq!(stderr.matches("os error").count(), 1);

    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout, "📁 Project directory structure (max depth 3)\n\n");
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_unreadable_subdirectory_keeps_earlier_lines() -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempdir()?;
    fs::write(temp.path().join("a.txt"), "")?;
    let locked = temp.path().join("locked");
    fs::create_dir(&locked)?;
    fs::write(locked.join("secret.txt"), "")?;
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;

    // Privileged users can read the directory anyway; nothing to check then.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;
        return Ok(());
    }

    let output = run_dirtree(&[temp.path().as_os_str()]);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;
    let output = output?;

    assert!(!output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "📁 Project directory structure (max depth 3)\n\n├── a.txt\n└── locked/\n"
    );
    assert!(String::from_utf8(output.stderr)?.contains("locked"));
    Ok(())
}
