use std::fmt::Display;

use clap::ValueEnum;

/// Operating system family the launcher script is generated for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Platform {
    /// Batch script started through `javaw`.
    Windows,
    /// POSIX shell script started through `java`.
    Linux,
}

impl Platform {
    /// Line terminator used for every line of the generated script.
    pub fn newline(self) -> &'static str {
        match self {
            Platform::Windows => "\r\n",
            Platform::Linux => "\n",
        }
    }

    /// Whether the generated script needs its owner-execute bit set.
    pub fn executable(self) -> bool {
        match self {
            Platform::Windows => false,
            Platform::Linux => true,
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let display = match self {
            Platform::Windows => "windows",
            Platform::Linux => "linux",
        };
        write!(f, "{display}")
    }
}

/// Application entry point the script launches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum App {
    /// The BSP decompiler.
    Src,
    /// The BSP info inspector.
    Info,
}

impl App {
    pub fn main_class(self) -> &'static str {
        match self {
            App::Src => "info.ata4.bspsrc.app.src.BspSourceLauncher",
            App::Info => "info.ata4.bspsrc.app.info.BspInfo",
        }
    }
}

impl Display for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let display = match self {
            App::Src => "src",
            App::Info => "info",
        };
        write!(f, "{display}")
    }
}

/// How the java application is laid out next to the script.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum RuntimeType {
    /// Loose `bspsrc.jar` on the classpath, java taken from `PATH`.
    Local,
    /// Packaged modular runtime image with its own `bin` directory.
    Img,
}

impl Display for RuntimeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let display = match self {
            RuntimeType::Local => "local",
            RuntimeType::Img => "img",
        };
        write!(f, "{display}")
    }
}
