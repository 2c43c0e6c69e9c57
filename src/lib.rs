//! Facade crate for host shells embedding the deep-link bridge.
//!
//! Re-exports the capability contracts from [`bridge_traits`] and the
//! concrete shim from [`deeplink_core`] so an embedder depends on a single
//! crate.

pub use bridge_traits::{
    ActivationEvent, ActivationHandler, BridgeError, ChannelHandler, LaunchUri, MethodCall,
    MethodResponse,
};
pub use deeplink_core::{
    ChannelRegistry, DeepLinkBridge, DEEPLINK_CHANNEL, METHOD_GET_INITIAL_ROUTE,
    RECOGNIZED_SCHEME,
};
