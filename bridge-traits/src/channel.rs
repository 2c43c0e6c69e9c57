//! Named Channel Request/Response Types
//!
//! A channel is a named bidirectional message path between host platform
//! code and the embedded application layer. The application layer sends a
//! [`MethodCall`] and blocks on the host's synchronous handler; the host
//! answers with a [`MethodResponse`].

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A request arriving on a channel: a method name plus optional arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<serde_json::Value>,
}

impl MethodCall {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments: None,
        }
    }

    pub fn with_arguments(method: impl Into<String>, arguments: serde_json::Value) -> Self {
        Self {
            method: method.into(),
            arguments: Some(arguments),
        }
    }
}

/// The host's answer to a [`MethodCall`].
///
/// An unrecognized method name is reported in-band as `NotImplemented`
/// rather than surfaced as an error, so the caller can distinguish "the
/// host does not speak this method" from a transport failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MethodResponse {
    /// The method was handled; payload may be absent.
    Success(Option<serde_json::Value>),
    /// The method name is not recognized on this channel.
    NotImplemented,
}

impl MethodResponse {
    /// A successful response carrying a string payload.
    pub fn string(value: impl Into<String>) -> Self {
        Self::Success(Some(serde_json::Value::String(value.into())))
    }

    /// A successful response with no payload.
    pub fn absent() -> Self {
        Self::Success(None)
    }

    /// The string payload, if this is a successful string response.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Success(Some(serde_json::Value::String(s))) => Some(s),
            _ => None,
        }
    }
}

/// Handler for one named channel.
///
/// Implementations serve every method call addressed to their channel name
/// and must answer unknown method names with
/// [`MethodResponse::NotImplemented`].
#[async_trait::async_trait]
pub trait ChannelHandler: Send + Sync {
    /// The channel name this handler is registered under.
    fn channel_name(&self) -> &str;

    /// Handle one request on this channel.
    async fn handle(&self, call: MethodCall) -> Result<MethodResponse>;
}
