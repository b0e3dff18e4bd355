//! UPnP state-variable vocabulary pushed back to control points.

use std::fmt;

/// State variables the session reports through the renderer service.
///
/// The set matches what AVTransport/RenderingControl/ConnectionManager
/// subscribers expect; values are carried as strings, time positions in the
/// `H:MM:SS` form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StateVar {
    TransportState,
    TransportPlaySpeed,
    TransportStatus,
    AbsoluteTimePosition,
    RelativeTimePosition,
    CurrentTrackDuration,
    AbsoluteCounterPosition,
    RelativeCounterPosition,
    Volume,
    SinkProtocolInfo,
}

impl StateVar {
    /// UPnP name of the variable, as written in service descriptions.
    pub fn name(&self) -> &'static str {
        match self {
            StateVar::TransportState => "TransportState",
            StateVar::TransportPlaySpeed => "TransportPlaySpeed",
            StateVar::TransportStatus => "TransportStatus",
            StateVar::AbsoluteTimePosition => "AbsoluteTimePosition",
            StateVar::RelativeTimePosition => "RelativeTimePosition",
            StateVar::CurrentTrackDuration => "CurrentTrackDuration",
            StateVar::AbsoluteCounterPosition => "AbsoluteCounterPosition",
            StateVar::RelativeCounterPosition => "RelativeCounterPosition",
            StateVar::Volume => "Volume",
            StateVar::SinkProtocolInfo => "SinkProtocolInfo",
        }
    }
}

impl fmt::Display for StateVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One state-variable update fired through the renderer service's outbound
/// event path.
#[derive(Clone, Debug, PartialEq)]
pub struct StateVarUpdate {
    pub var: StateVar,
    pub value: String,
}

impl StateVarUpdate {
    pub fn new(var: StateVar, value: impl Into<String>) -> Self {
        Self {
            var,
            value: value.into(),
        }
    }
}
