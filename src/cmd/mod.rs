use crate::{Invocation, generate};

pub trait Execute {
    fn execute(self) -> impl std::future::Future<Output = anyhow::Result<()>> + Send;
}

impl Execute for Invocation {
    async fn execute(self) -> anyhow::Result<()> {
        generate(&self).await
    }
}
