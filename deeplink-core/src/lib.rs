//! # Deep-Link Core
//!
//! The deep-link shim a host shell embeds: capture an incoming deep-link
//! URI from the host's activation events and serve it exactly once to the
//! application layer over a named channel.
//!
//! ## Overview
//!
//! - [`DeepLinkBridge`] owns the single pending-route slot. It implements
//!   [`ActivationHandler`](bridge_traits::ActivationHandler) to capture URIs
//!   whose scheme matches [`RECOGNIZED_SCHEME`], and
//!   [`ChannelHandler`](bridge_traits::ChannelHandler) to answer
//!   [`METHOD_GET_INITIAL_ROUTE`] requests on [`DEEPLINK_CHANNEL`] with
//!   get-and-clear semantics.
//! - [`ChannelRegistry`] is the dispatch table a host embeds to route
//!   channel traffic from the application layer to registered handlers.
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//!
//! use bridge_traits::{ActivationEvent, ActivationHandler, MethodCall};
//! use deeplink_core::{ChannelRegistry, DeepLinkBridge, DEEPLINK_CHANNEL, METHOD_GET_INITIAL_ROUTE};
//!
//! # async fn example() -> bridge_traits::error::Result<()> {
//! let bridge = Arc::new(DeepLinkBridge::new());
//!
//! let registry = ChannelRegistry::new();
//! registry.register(bridge.clone()).await;
//!
//! // Host shell forwards its launch intent.
//! bridge.on_activate(&ActivationEvent::with_uri("calc://open/settings"));
//!
//! // Application layer asks for the initial route, exactly once.
//! let response = registry
//!     .dispatch(DEEPLINK_CHANNEL, MethodCall::new(METHOD_GET_INITIAL_ROUTE))
//!     .await?;
//! assert_eq!(response.as_str(), Some("calc://open/settings"));
//! # Ok(())
//! # }
//! ```

mod bridge;
mod registry;

pub use bridge::{DeepLinkBridge, DEEPLINK_CHANNEL, METHOD_GET_INITIAL_ROUTE, RECOGNIZED_SCHEME};
pub use registry::ChannelRegistry;
