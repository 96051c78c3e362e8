use anyhow::{Result, anyhow};
use web_sys::window;

/// Origin of the page, which is also the address of the ruok api.
pub fn origin() -> Result<String> {
    let window = window().ok_or_else(|| anyhow!("window not found"))?;
    window
        .location()
        .origin()
        .map_err(|_| anyhow!("unable to find window origin"))
}
