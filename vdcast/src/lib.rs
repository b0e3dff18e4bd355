//! DLNA cast session for VidDeck.
//!
//! This crate bridges a UPnP/DLNA MediaRenderer service and the local
//! playback engine: remote control points drive the player through the
//! renderer's transport actions, and the player's lifecycle is reported back
//! as UPnP state-variable updates.
//!
//! # Architecture
//!
//! The protocol machinery (SSDP, SOAP, GENA) lives behind the
//! [`MediaRendererService`] seam; the decode pipeline lives behind
//! [`PlaybackEngine`]; the screen lives behind [`VideoView`]. The only piece
//! with real state here is [`DlnaSession`], which wires the two event streams
//! together and owns their teardown:
//!
//! - inbound: [`TransportEvent`]s relayed to the engine/view, UI-touching
//!   work marshaled through the [`UiHandle`] queue;
//! - outbound: [`PlayerStatusEvent`]s re-encoded as [`StateVarUpdate`]s and
//!   fired straight back into the renderer service.
//!
//! Both relays are owned [`Subscription`]s: dropping the session stops the
//! relays before either service is told to stop.

pub mod engine;
pub mod errors;
pub mod events;
pub mod identity;
pub mod protocol_info;
pub mod service;
pub mod session;
pub mod state_variables;
pub mod subscription;
pub mod ui;
pub mod view;

pub use engine::PlaybackEngine;
pub use errors::CastError;
pub use events::{PlayerStatusBus, PlayerStatusEvent, TransportEvent, TransportEventBus};
pub use identity::SessionIdentity;
pub use protocol_info::SINK_PROTOCOL_INFO;
pub use service::MediaRendererService;
pub use session::DlnaSession;
pub use state_variables::{StateVar, StateVarUpdate};
pub use subscription::Subscription;
pub use ui::{UiHandle, UiQueue};
pub use view::VideoView;
