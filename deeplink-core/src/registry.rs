//! Channel Dispatch Table

use std::collections::HashMap;
use std::sync::Arc;

use bridge_traits::{
    channel::{ChannelHandler, MethodCall, MethodResponse},
    error::{BridgeError, Result},
};
use tokio::sync::RwLock;
use tracing::debug;

/// Routes channel traffic from the application layer to registered handlers.
///
/// A host shell constructs one registry, registers each [`ChannelHandler`]
/// under its channel name, and forwards every incoming request through
/// [`dispatch`](ChannelRegistry::dispatch). An unknown channel name is a
/// host wiring error ([`BridgeError::ChannelNotFound`]); an unknown method
/// on a known channel is answered in-band by the handler as
/// [`MethodResponse::NotImplemented`].
pub struct ChannelRegistry {
    channels: RwLock<HashMap<String, Arc<dyn ChannelHandler>>>,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self {
            channels: RwLock::new(HashMap::new()),
        }
    }

    /// Register a handler under its channel name.
    ///
    /// Re-registering a name replaces the previous handler.
    pub async fn register(&self, handler: Arc<dyn ChannelHandler>) {
        let name = handler.channel_name().to_string();
        debug!(channel = name.as_str(), "Registered channel handler");
        self.channels.write().await.insert(name, handler);
    }

    /// Dispatch one request to the handler registered for `channel`.
    pub async fn dispatch(&self, channel: &str, call: MethodCall) -> Result<MethodResponse> {
        let handler = {
            let channels = self.channels.read().await;
            channels
                .get(channel)
                .cloned()
                .ok_or_else(|| BridgeError::ChannelNotFound(channel.to_string()))?
        };
        handler.handle(call).await
    }
}

impl Default for ChannelRegistry {
    fn default() -> Self {
        Self::new()
    }
}
