//! Deep-Link Bridge Implementation

use std::sync::Mutex;

use async_trait::async_trait;
use bridge_traits::{
    activation::{ActivationEvent, ActivationHandler},
    channel::{ChannelHandler, MethodCall, MethodResponse},
    error::Result,
};
use tracing::{debug, warn};

/// Channel the application layer uses to fetch the initial route.
pub const DEEPLINK_CHANNEL: &str = "com.akidesoft.calc/deeplink";

/// The only method recognized on [`DEEPLINK_CHANNEL`].
pub const METHOD_GET_INITIAL_ROUTE: &str = "getInitialRoute";

/// URI scheme captured as a deep link. Comparison is case-sensitive.
pub const RECOGNIZED_SCHEME: &str = "calc";

/// Captures deep-link URIs from host activation events and serves the most
/// recent one, exactly once, over [`DEEPLINK_CHANNEL`].
///
/// At most one pending route is retained: a new matching activation
/// overwrites any unconsumed value (last-write-wins, no queue). The first
/// `getInitialRoute` request after capture returns the route and clears the
/// slot; subsequent requests return absent until a new matching activation
/// arrives.
///
/// The slot mutex is held only across non-awaiting reads and writes, so the
/// handler never blocks the host's sequencing context.
pub struct DeepLinkBridge {
    pending_route: Mutex<Option<String>>,
}

impl DeepLinkBridge {
    pub fn new() -> Self {
        Self {
            pending_route: Mutex::new(None),
        }
    }

    /// Take the pending route, leaving the slot absent.
    ///
    /// This is the sole consumption path; calling twice returns the value
    /// once, then `None`.
    pub fn take_initial_route(&self) -> Option<String> {
        let route = self
            .pending_route
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();
        if let Some(ref route) = route {
            debug!(route = route.as_str(), "Delivered initial route");
        }
        route
    }

    fn capture(&self, event: &ActivationEvent) {
        let Some(uri) = event.uri.as_ref() else {
            return;
        };
        if uri.scheme() != RECOGNIZED_SCHEME {
            debug!(uri = uri.as_str(), "Ignored activation with unrecognized scheme");
            return;
        }

        let mut pending = self
            .pending_route
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if pending.is_some() {
            debug!(uri = uri.as_str(), "Replacing unconsumed pending route");
        } else {
            debug!(uri = uri.as_str(), "Captured pending route");
        }
        *pending = Some(uri.as_str().to_string());
    }
}

impl Default for DeepLinkBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivationHandler for DeepLinkBridge {
    fn on_activate(&self, event: &ActivationEvent) {
        self.capture(event);
    }

    fn on_reactivate(&self, event: &ActivationEvent) {
        self.capture(event);
    }
}

#[async_trait]
impl ChannelHandler for DeepLinkBridge {
    fn channel_name(&self) -> &str {
        DEEPLINK_CHANNEL
    }

    async fn handle(&self, call: MethodCall) -> Result<MethodResponse> {
        if call.method != METHOD_GET_INITIAL_ROUTE {
            warn!(method = call.method.as_str(), "Unrecognized method on deeplink channel");
            return Ok(MethodResponse::NotImplemented);
        }

        Ok(match self.take_initial_route() {
            Some(route) => MethodResponse::string(route),
            None => MethodResponse::absent(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn request(bridge: &DeepLinkBridge, method: &str) -> MethodResponse {
        bridge.handle(MethodCall::new(method)).await.unwrap()
    }

    #[tokio::test]
    async fn test_matching_scheme_is_captured() {
        let bridge = DeepLinkBridge::new();
        bridge.on_activate(&ActivationEvent::with_uri("calc://open/settings"));

        let response = request(&bridge, METHOD_GET_INITIAL_ROUTE).await;
        assert_eq!(response.as_str(), Some("calc://open/settings"));
    }

    #[tokio::test]
    async fn test_route_is_cleared_after_first_request() {
        let bridge = DeepLinkBridge::new();
        bridge.on_activate(&ActivationEvent::with_uri("calc://open/settings"));

        let first = request(&bridge, METHOD_GET_INITIAL_ROUTE).await;
        assert_eq!(first.as_str(), Some("calc://open/settings"));

        let second = request(&bridge, METHOD_GET_INITIAL_ROUTE).await;
        assert_eq!(second, MethodResponse::absent());
    }

    #[tokio::test]
    async fn test_foreign_scheme_is_ignored() {
        let bridge = DeepLinkBridge::new();
        bridge.on_activate(&ActivationEvent::with_uri("https://example.com"));

        let response = request(&bridge, METHOD_GET_INITIAL_ROUTE).await;
        assert_eq!(response, MethodResponse::absent());
    }

    #[tokio::test]
    async fn test_scheme_match_is_case_sensitive() {
        let bridge = DeepLinkBridge::new();
        bridge.on_activate(&ActivationEvent::with_uri("CALC://open"));

        let response = request(&bridge, METHOD_GET_INITIAL_ROUTE).await;
        assert_eq!(response, MethodResponse::absent());
    }

    #[tokio::test]
    async fn test_empty_activation_leaves_route_unchanged() {
        let bridge = DeepLinkBridge::new();
        bridge.on_activate(&ActivationEvent::with_uri("calc://a"));
        bridge.on_reactivate(&ActivationEvent::empty());

        let response = request(&bridge, METHOD_GET_INITIAL_ROUTE).await;
        assert_eq!(response.as_str(), Some("calc://a"));
    }

    #[tokio::test]
    async fn test_last_activation_wins() {
        let bridge = DeepLinkBridge::new();
        bridge.on_activate(&ActivationEvent::with_uri("calc://a"));
        bridge.on_reactivate(&ActivationEvent::with_uri("calc://b"));

        let first = request(&bridge, METHOD_GET_INITIAL_ROUTE).await;
        assert_eq!(first.as_str(), Some("calc://b"));

        let second = request(&bridge, METHOD_GET_INITIAL_ROUTE).await;
        assert_eq!(second, MethodResponse::absent());
    }

    #[tokio::test]
    async fn test_reactivation_captures_like_activation() {
        let bridge = DeepLinkBridge::new();
        bridge.on_reactivate(&ActivationEvent::with_uri("calc://resumed"));

        let response = request(&bridge, METHOD_GET_INITIAL_ROUTE).await;
        assert_eq!(response.as_str(), Some("calc://resumed"));
    }

    #[tokio::test]
    async fn test_unrecognized_method_is_not_implemented() {
        let bridge = DeepLinkBridge::new();
        bridge.on_activate(&ActivationEvent::with_uri("calc://kept"));

        let response = request(&bridge, "foo").await;
        assert_eq!(response, MethodResponse::NotImplemented);

        // The pending route survives an unrecognized request.
        let next = request(&bridge, METHOD_GET_INITIAL_ROUTE).await;
        assert_eq!(next.as_str(), Some("calc://kept"));
    }

    #[tokio::test]
    async fn test_request_before_any_activation_is_absent() {
        let bridge = DeepLinkBridge::new();

        let response = request(&bridge, METHOD_GET_INITIAL_ROUTE).await;
        assert_eq!(response, MethodResponse::absent());
    }

    #[test]
    fn test_take_initial_route_clears_slot() {
        let bridge = DeepLinkBridge::new();
        bridge.on_activate(&ActivationEvent::with_uri("calc://x"));

        assert_eq!(bridge.take_initial_route(), Some("calc://x".to_string()));
        assert_eq!(bridge.take_initial_route(), None);
    }
}
