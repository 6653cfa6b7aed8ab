use std::ffi::OsStr;
use std::time::Duration;

use anyhow::Context;
use headless_chrome::{Browser, LaunchOptions};

/// Launches a Chrome session with the flags the search site tolerates:
/// incognito, certificate errors ignored, sandbox off, fixed viewport.
/// GPU stays disabled, which is the crate default.
pub fn create_browser(headless: bool) -> anyhow::Result<Browser> {
    let options = LaunchOptions {
        headless,
        sandbox: false,
        window_size: Some((1920, 1080)),
        idle_browser_timeout: Duration::from_secs(90),
        args: vec![
            OsStr::new("--ignore-certificate-errors"),
            OsStr::new("--incognito"),
            OsStr::new("--disable-dev-shm-usage"),
        ],
        ..Default::default()
    };

    Browser::new(options).context("failed to launch Chrome")
}
