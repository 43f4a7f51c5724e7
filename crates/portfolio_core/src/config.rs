use std::time::Duration;

use url::Url;

/// API base used when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Page-wide settings, built once at startup and passed to whoever needs them.
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    /// Base URL of the contact backend. The form posts to `{api_base}/contact`.
    pub api_base: Url,
    /// Maximum number of live log lines kept on screen.
    pub log_capacity: usize,
    pub log_period: Duration,
    pub clock_period: Duration,
    /// Delay between animation frames of the counters.
    pub frame_interval: Duration,
    /// Number of increments a counter takes to reach its target.
    pub counter_steps: u32,
    pub reveal_threshold: f64,
    pub counter_threshold: f64,
    pub skill_bar_delay: Duration,
    pub sent_revert_delay: Duration,
    pub failed_revert_delay: Duration,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            api_base: Url::parse(DEFAULT_API_BASE).expect("default api base is a valid url"),
            log_capacity: 3,
            log_period: Duration::from_secs(3),
            clock_period: Duration::from_secs(1),
            frame_interval: Duration::from_millis(16),
            counter_steps: 100,
            reveal_threshold: 0.1,
            counter_threshold: 0.5,
            skill_bar_delay: Duration::from_millis(200),
            sent_revert_delay: Duration::from_millis(1600),
            failed_revert_delay: Duration::from_millis(2200),
        }
    }
}

impl PageConfig {
    /// Replaces the API base. Rejects URLs that cannot carry a path (e.g. `mailto:`).
    pub fn with_api_base(mut self, raw: &str) -> Result<Self, url::ParseError> {
        let parsed = Url::parse(raw.trim())?;
        if parsed.cannot_be_a_base() {
            return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase);
        }
        self.api_base = parsed;
        Ok(self)
    }

    /// Endpoint of the contact submission, appended to any path on the base.
    pub fn contact_endpoint(&self) -> Url {
        let mut url = self.api_base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("contact");
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_endpoint_defaults_to_local_backend() {
        let config = PageConfig::default();
        assert_eq!(
            config.contact_endpoint().as_str(),
            "http://127.0.0.1:8000/contact"
        );
    }

    #[test]
    fn contact_endpoint_keeps_base_path() {
        let config = PageConfig::default()
            .with_api_base("https://api.example.com/portfolio/")
            .unwrap();
        assert_eq!(
            config.contact_endpoint().as_str(),
            "https://api.example.com/portfolio/contact"
        );

        let config = PageConfig::default()
            .with_api_base("https://api.example.com/portfolio")
            .unwrap();
        assert_eq!(
            config.contact_endpoint().as_str(),
            "https://api.example.com/portfolio/contact"
        );
    }

    #[test]
    fn rejects_non_hierarchical_base() {
        assert!(PageConfig::default()
            .with_api_base("mailto:me@example.com")
            .is_err());
        assert!(PageConfig::default().with_api_base("not a url").is_err());
    }
}
