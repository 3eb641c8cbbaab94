use anyhow::{Context, Result, ensure};
use reqwest::Url;
use tracing::info;

/// Where an outbound link opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    /// A new browsing context; the terminal UI stays where it is.
    NewContext,
}

/// What the opened page may learn about, or reach back into, this process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpenerPolicy {
    /// No opener handle, no referrer, no inherited pipes.
    Isolated,
}

/// A link to a study's canonical external record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundLink {
    pub url: String,
    pub target: LinkTarget,
    pub opener: OpenerPolicy,
}

impl OutboundLink {
    pub fn isolated(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            target: LinkTarget::NewContext,
            opener: OpenerPolicy::Isolated,
        }
    }

    /// An isolated link to `raw`, or `None` unless it is an absolute
    /// http(s) URL with a host.
    pub fn web(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        is_web_url(raw).then(|| Self::isolated(raw))
    }
}

/// The system opener also follows `file://`, local paths and custom
/// schemes, so only plain web pages are let through.
pub fn is_web_url(raw: &str) -> bool {
    Url::parse(raw)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.host_str().is_some())
        .unwrap_or(false)
}

/// Hand the URL to the system browser as a detached process.
///
/// The child is not waited on and shares no stdio with us, so the page it
/// loads has no way back into the terminal session.
pub fn open_detached(link: &OutboundLink) -> Result<()> {
    ensure!(is_web_url(&link.url), "Refusing to open non-web link {}", link.url);
    info!(url = %link.url, "opening study link");
    open::that_detached(&link.url)
        .with_context(|| format!("Failed to open {} in the browser", link.url))
}
