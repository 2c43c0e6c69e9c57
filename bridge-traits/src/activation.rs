//! Host Activation Events
//!
//! Types for the launch data a host shell receives when the process is
//! started or brought back to the foreground.

use std::fmt;

/// A launch URI split into its scheme, authority, and path components.
///
/// The original string form is retained: that is the value delivered to the
/// application layer, the components only exist for matching. Scheme
/// comparison is case-sensitive, so no normalization is applied during
/// parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchUri {
    raw: String,
    scheme: String,
    authority: String,
    path: String,
}

impl LaunchUri {
    /// Parse a URI string into its components.
    ///
    /// Returns `None` when the input has no valid scheme separator. A value
    /// that fails to parse is the normal "no deep link" case, never an
    /// error.
    pub fn parse(input: &str) -> Option<Self> {
        let (scheme, rest) = input.split_once(':')?;
        let mut chars = scheme.chars();
        let valid = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        if !valid {
            return None;
        }

        let (authority, path) = match rest.strip_prefix("//") {
            Some(after) => match after.find('/') {
                Some(idx) => (after[..idx].to_string(), after[idx..].to_string()),
                None => (after.to_string(), String::new()),
            },
            None => (String::new(), rest.to_string()),
        };

        Some(Self {
            raw: input.to_string(),
            scheme: scheme.to_string(),
            authority,
            path,
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn authority(&self) -> &str {
        &self.authority
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The full original string form of the URI.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for LaunchUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Host notification that the application process is being started or
/// brought forward, optionally carrying a launch URI.
#[derive(Debug, Clone, Default)]
pub struct ActivationEvent {
    pub uri: Option<LaunchUri>,
}

impl ActivationEvent {
    /// An activation carrying no launch data.
    pub fn empty() -> Self {
        Self { uri: None }
    }

    /// An activation carrying the given URI string.
    ///
    /// An unparsable string becomes an empty event.
    pub fn with_uri(uri: &str) -> Self {
        Self {
            uri: LaunchUri::parse(uri),
        }
    }
}

/// Receiver for host activation events.
///
/// A host shell forwards exactly two lifecycle hooks here:
///
/// - **iOS/Android**: activity/scene creation and new-intent delivery
/// - **Desktop**: process launch and single-instance argument forwarding
///
/// Both hooks are synchronous; the host invokes them on its main sequencing
/// context and nothing here suspends.
pub trait ActivationHandler: Send + Sync {
    /// The process was started (or the shell was configured) with this event.
    fn on_activate(&self, event: &ActivationEvent);

    /// The already-running process received a new activation event.
    ///
    /// Must apply the same extraction rule as [`on_activate`].
    ///
    /// [`on_activate`]: ActivationHandler::on_activate
    fn on_reactivate(&self, event: &ActivationEvent);
}
