use commhub_provider::ProviderError;
use tracing::info;

/// Seam for opening the composed WhatsApp Web URL when the timer fires.
///
/// The system implementation hands the URL to the default browser; tests
/// substitute a recording launcher so nothing is opened.
pub trait UrlLauncher: Send + Sync {
    /// Open the given URL.
    fn launch(&self, url: &str) -> Result<(), ProviderError>;
}

/// Launcher that opens the URL in the system default browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl UrlLauncher for SystemLauncher {
    fn launch(&self, url: &str) -> Result<(), ProviderError> {
        info!("opening WhatsApp Web in the system browser");
        opener::open_browser(url)
            .map_err(|e| ProviderError::DispatchFailed(format!("failed to open browser: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Test double that records launched URLs instead of opening a browser.
    #[derive(Default)]
    pub struct RecordingLauncher {
        pub launched: Mutex<Vec<String>>,
    }

    impl UrlLauncher for RecordingLauncher {
        fn launch(&self, url: &str) -> Result<(), ProviderError> {
            self.launched.lock().unwrap().push(url.to_owned());
            Ok(())
        }
    }

    #[test]
    fn recording_launcher_captures_urls() {
        let launcher = RecordingLauncher::default();
        launcher.launch("https://web.whatsapp.com/send?phone=%2B15551234567").unwrap();
        assert_eq!(launcher.launched.lock().unwrap().len(), 1);
    }
}
