//! # Host Bridge Traits
//!
//! Contracts between the host platform shell and the embedded application
//! layer.
//!
//! ## Overview
//!
//! This crate defines the two seams a host shell must provide to deliver
//! deep links into the embedded application layer:
//!
//! - [`ActivationHandler`](activation::ActivationHandler) - receives the
//!   host's activation events ("activity created/configured" and
//!   "reactivated with new intent"), each optionally carrying a launch URI.
//! - [`ChannelHandler`](channel::ChannelHandler) - serves request/response
//!   calls arriving on one named bidirectional channel.
//!
//! The host-activity subclassing pattern mandated by mobile vendors is
//! modeled here as trait implementation: a shell forwards its lifecycle
//! callbacks to an `ActivationHandler` and routes channel traffic to a
//! `ChannelHandler`, rather than the bridge inheriting from a platform base
//! class.
//!
//! ## Error Handling
//!
//! All fallible operations use [`BridgeError`](error::BridgeError). An
//! unrecognized method name on a known channel is *not* an error: it is
//! reported in-band as [`MethodResponse::NotImplemented`](channel::MethodResponse)
//! so nothing propagates across the host boundary as a failure.
//!
//! ## Thread Safety
//!
//! Handler traits require `Send + Sync` so a shell can share them across
//! async tasks. Activation and channel handling are logically sequential on
//! the host's main sequencing context; implementations must not rely on
//! exclusive access.

pub mod activation;
pub mod channel;
pub mod error;

pub use error::BridgeError;

// Re-export commonly used types
pub use activation::{ActivationEvent, ActivationHandler, LaunchUri};
pub use channel::{ChannelHandler, MethodCall, MethodResponse};
