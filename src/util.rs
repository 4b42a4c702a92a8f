use std::path::Path;

use anyhow::Context;
use tokio::{fs::OpenOptions, io::AsyncWriteExt};

/// Write `contents` to a file that must not exist yet.
pub async fn write_new(path: impl AsRef<Path>, contents: &[u8]) -> anyhow::Result<()> {
    let path = path.as_ref();
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await
        .with_context(|| format!("failed to create {}", path.display()))?;
    file.write_all(contents)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;
    file.flush().await?;
    Ok(())
}

/// Add the owner-execute bit, leaving the rest of the mode as it is.
#[cfg(unix)]
pub async fn set_owner_exec(path: impl AsRef<Path>) -> anyhow::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let path = path.as_ref();
    let mut perms = tokio::fs::metadata(path)
        .await
        .with_context(|| format!("failed to stat {}", path.display()))?
        .permissions();
    perms.set_mode(perms.mode() | 0o100);
    tokio::fs::set_permissions(path, perms)
        .await
        .with_context(|| format!("failed to set permissions on {}", path.display()))?;
    Ok(())
}

#[cfg(not(unix))]
pub async fn set_owner_exec(path: impl AsRef<Path>) -> anyhow::Result<()> {
    tracing::debug!(
        "no execute bit on this host, leaving {} as is",
        path.as_ref().display()
    );
    Ok(())
}
