//! Launcher script templates.
//!
//! Templates are written with `\n` separators and no trailing newline. The
//! platform line terminator is applied to every line when rendering.

use crate::{launch::LaunchDescriptor, target::Platform};

const JAVA_PREFIX: &str = "{java_prefix}";
const LAUNCH_CMD: &str = "{launch_cmd}";

pub const WINDOWS_TEMPLATE: &str = r#"@echo off
set VM_OPTIONS=
start "" "{java_prefix}javaw" %VM_OPTIONS% {launch_cmd} %*"#;

pub const LINUX_TEMPLATE: &str = r#"#!/bin/sh
VM_OPTIONS=
BASEDIR=$(dirname "$0")
"{java_prefix}java" $VM_OPTIONS {launch_cmd} $*"#;

pub fn template(platform: Platform) -> &'static str {
    match platform {
        Platform::Windows => WINDOWS_TEMPLATE,
        Platform::Linux => LINUX_TEMPLATE,
    }
}

/// Fill the platform template and terminate each line with `desc.newline`.
pub fn render(platform: Platform, desc: &LaunchDescriptor) -> String {
    let filled = template(platform)
        .replace(JAVA_PREFIX, desc.java_prefix)
        .replace(LAUNCH_CMD, &desc.launch_cmd);
    let mut script = String::with_capacity(filled.len() + 8);
    for line in filled.lines() {
        script.push_str(line);
        script.push_str(desc.newline);
    }
    script
}
