//! Tests driving the built `bspsrc-launcher` binary.

use std::{fs, path::Path, process::Command};

use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_bspsrc-launcher");

fn launcher(args: &[&str], output: &Path) -> std::process::Output {
    Command::new(BIN)
        .args(args)
        .arg(output)
        .output()
        .expect("failed to run bspsrc-launcher")
}

#[test]
fn writes_script_and_exits_zero() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("run.sh");

    let res = launcher(&["linux", "info", "local"], &out);
    assert!(res.status.success(), "{res:?}");
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "#!/bin/sh\n\
         VM_OPTIONS=\n\
         BASEDIR=$(dirname \"$0\")\n\
         \"java\" $VM_OPTIONS -cp \"$BASEDIR/bspsrc.jar\" info.ata4.bspsrc.app.info.BspInfo $*\n"
    );
}

#[test]
fn unknown_value_fails_before_any_io() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("run.sh");

    for args in [
        ["linux", "gui", "local"],
        ["macos", "src", "local"],
        ["windows", "src", "jar"],
    ] {
        let res = launcher(&args, &out);
        assert!(!res.status.success(), "{args:?}");
        assert!(!out.exists(), "{args:?}");
    }
}

#[test]
fn missing_output_fails() {
    let res = Command::new(BIN)
        .args(["windows", "src", "img"])
        .output()
        .unwrap();
    assert!(!res.status.success());
}

#[test]
fn existing_output_fails_and_is_kept() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("run.bat");

    let first = launcher(&["windows", "src", "img"], &out);
    assert!(first.status.success(), "{first:?}");
    let written = fs::read(&out).unwrap();

    let second = launcher(&["windows", "info", "local"], &out);
    assert!(!second.status.success());
    assert_eq!(fs::read(&out).unwrap(), written);

    // the io cause is reported, not only the path context
    let report = format!(
        "{}{}",
        String::from_utf8_lossy(&second.stdout),
        String::from_utf8_lossy(&second.stderr)
    );
    assert!(report.contains("failed to create"), "{report}");
    #[cfg(unix)]
    assert!(report.contains("File exists"), "{report}");
}
