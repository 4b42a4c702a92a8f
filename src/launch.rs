use crate::target::{App, Platform, RuntimeType};

/// Name of the java module inside the packaged runtime image.
pub const APP_MODULE: &str = "info.ata4.bspsrc.app";

/// Jar expected next to the script for local launches.
pub const APP_JAR: &str = "bspsrc.jar";

/// The fragments needed to fill a platform template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchDescriptor {
    /// Prepended to the java binary name, empty when java comes from `PATH`.
    pub java_prefix: &'static str,
    pub main_class: &'static str,
    /// Everything between the VM options and the forwarded arguments.
    pub launch_cmd: String,
    pub newline: &'static str,
}

impl LaunchDescriptor {
    pub fn resolve(platform: Platform, app: App, runtime: RuntimeType) -> Self {
        let main_class = app.main_class();
        Self {
            java_prefix: java_prefix(runtime, platform),
            main_class,
            launch_cmd: launch_cmd(runtime, platform, main_class),
            newline: platform.newline(),
        }
    }
}

/// Location of the java binary relative to the script.
///
/// The linux variant refers to `$BASEDIR`, which the script computes from `$0` when run.
pub fn java_prefix(runtime: RuntimeType, platform: Platform) -> &'static str {
    match (runtime, platform) {
        (RuntimeType::Local, Platform::Windows) => "",
        (RuntimeType::Local, Platform::Linux) => "",
        (RuntimeType::Img, Platform::Windows) => "%~dp0\\bin\\",
        (RuntimeType::Img, Platform::Linux) => "$BASEDIR/bin/",
    }
}

pub fn launch_cmd(runtime: RuntimeType, platform: Platform, main_class: &str) -> String {
    match (runtime, platform) {
        (RuntimeType::Local, Platform::Windows) => {
            format!("-cp \"%~dp0\\{APP_JAR}\" {main_class}")
        }
        (RuntimeType::Local, Platform::Linux) => {
            format!("-cp \"$BASEDIR/{APP_JAR}\" {main_class}")
        }
        (RuntimeType::Img, Platform::Windows) | (RuntimeType::Img, Platform::Linux) => {
            format!("-m {APP_MODULE}/{main_class}")
        }
    }
}
