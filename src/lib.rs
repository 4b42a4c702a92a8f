pub mod cmd;
pub mod launch;
pub mod script;
pub mod target;
pub mod util;

use std::path::PathBuf;

use clap::Args;
use tracing::{debug, info, instrument, trace};

pub use launch::LaunchDescriptor;
pub use target::{App, Platform, RuntimeType};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Everything that determines one generated launcher script.
#[derive(Clone, Debug, Args)]
pub struct Invocation {
    /// Operating system the script is for.
    #[arg(value_enum)]
    pub platform: Platform,
    /// Application entry point to launch.
    #[arg(value_enum)]
    pub app: App,
    /// Whether java runs from a local classpath or a packaged runtime image.
    #[arg(value_enum, value_name = "RUNTIME_TYPE")]
    pub runtime_type: RuntimeType,
    /// Path of the generated script, which must not exist yet.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,
}

impl Invocation {
    pub fn new(
        platform: Platform,
        app: App,
        runtime_type: RuntimeType,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            platform,
            app,
            runtime_type,
            output: output.into(),
        }
    }

    pub fn descriptor(&self) -> LaunchDescriptor {
        LaunchDescriptor::resolve(self.platform, self.app, self.runtime_type)
    }

    /// Script text for this invocation. Does not depend on `output`.
    pub fn render(&self) -> String {
        script::render(self.platform, &self.descriptor())
    }
}

/// Render the launcher script and write it to `inv.output`.
///
/// Fails without touching anything if the output already exists.
#[instrument(skip(inv), fields(output = inv.output.display().to_string()))]
pub async fn generate(inv: &Invocation) -> anyhow::Result<()> {
    let desc = inv.descriptor();
    debug!(
        "{} {} {}: java prefix {:?}, launch `{}`",
        inv.platform, inv.app, inv.runtime_type, desc.java_prefix, desc.launch_cmd
    );
    let text = script::render(inv.platform, &desc);
    trace!("rendered script:\n{text}");

    util::write_new(&inv.output, text.as_bytes()).await?;
    if inv.platform.executable() {
        util::set_owner_exec(&inv.output).await?;
    }

    info!("generated {} launcher for {}", inv.platform, desc.main_class);
    Ok(())
}
