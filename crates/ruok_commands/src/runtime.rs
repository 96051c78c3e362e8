use anyhow::Result;
use std::future::Future;
use tokio::runtime::Builder;

/// Runs a command body on a single threaded runtime. List views are not
/// `Send` so everything stays on the calling thread.
pub fn block_on<F: Future<Output = Result<()>>>(future: F) -> Result<()> {
    Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(future)
}
