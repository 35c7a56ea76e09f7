//! Which side of the link a session plays.

/// Role a session takes on its transport.
///
/// Stream sockets pair an [`Initiator`](Role::Initiator) with a
/// [`Responder`](Role::Responder); notification links pair a
/// [`Central`](Role::Central) with a [`Peripheral`](Role::Peripheral);
/// group-formed socket links pair a [`GroupClient`](Role::GroupClient) with
/// the [`GroupOwner`](Role::GroupOwner) that accepts it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// Stream side that dialed the connection.
    Initiator,
    /// Stream side that accepted the connection.
    Responder,
    /// Notification side that scanned and connected.
    Central,
    /// Notification side that advertised and was connected to.
    Peripheral,
    /// Group-formed side that owns the listening socket.
    GroupOwner,
    /// Group-formed side that dials the owner.
    GroupClient,
}

impl Role {
    /// Whether this role opens the connection rather than accepting it.
    #[must_use]
    pub const fn initiates(self) -> bool {
        matches!(self, Self::Initiator | Self::Central | Self::GroupClient)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Initiator => "initiator",
            Self::Responder => "responder",
            Self::Central => "central",
            Self::Peripheral => "peripheral",
            Self::GroupOwner => "group owner",
            Self::GroupClient => "group client",
        };
        f.write_str(name)
    }
}
