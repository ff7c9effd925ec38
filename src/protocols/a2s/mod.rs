//! Source engine server query protocol (A2S_INFO and A2S_PLAYER).
//!
//! Every datagram starts with [`PACKET_PREFIX`] followed by a one byte
//! [`Header`]. Servers may answer a query with a challenge instead of data, in
//! which case the query is resent with the challenge token attached.

use crate::{errors::Result, util::FieldCursor};

use {derive_more::From, enum_primitive_derive::Primitive};

pub mod info;
pub mod players;
pub mod request;
pub mod session;

pub use self::{
    info::{decode_extra_data, decode_server_info, decode_ship_extension},
    players::decode_player_list,
    request::{build_challenge_reply, build_info_request, build_players_request, build_request},
    session::QuerySession,
};

/// Marks a single-packet datagram.
pub const PACKET_PREFIX: [u8; 4] = [0xFF; 4];
/// Challenge slot contents of a players probe sent before any challenge is known.
pub const CHALLENGE_PLACEHOLDER: [u8; 4] = [0xFF; 4];
pub const INFO_QUERY_STRING: &str = "Source Engine Query";
/// Offset of the first byte after prefix and header.
pub const PAYLOAD_OFFSET: usize = PACKET_PREFIX.len() + 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Primitive)]
pub enum Header {
    InfoRequest = 0x54,
    PlayersRequest = 0x55,
    Challenge = 0x41,
    InfoReply = 0x49,
    PlayersReply = 0x44,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryKind {
    Info,
    Players,
}

impl QueryKind {
    pub fn request_header(self) -> Header {
        match self {
            QueryKind::Info => Header::InfoRequest,
            QueryKind::Players => Header::PlayersRequest,
        }
    }

    pub fn reply_header(self) -> Header {
        match self {
            QueryKind::Info => Header::InfoReply,
            QueryKind::Players => Header::PlayersReply,
        }
    }
}

/// Opaque token a server hands out and expects echoed back verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, From)]
pub struct ChallengeToken(pub [u8; 4]);

impl AsRef<[u8]> for ChallengeToken {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// A reply payload that can be decoded from the bytes following its header.
pub trait A2SResponse: Sized {
    const KIND: QueryKind;

    fn decode(cur: &mut FieldCursor<'_>) -> Result<Self>;
}
