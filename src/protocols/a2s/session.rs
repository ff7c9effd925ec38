use super::{
    build_challenge_reply, build_request, A2SResponse, ChallengeToken, Header, QueryKind,
    PACKET_PREFIX, PAYLOAD_OFFSET,
};
use crate::{
    errors::{ProtocolError, Result},
    models::DEFAULT_MAX_PACKET_SIZE,
    transport::Transport,
    util::FieldCursor,
};

use {
    num_traits::FromPrimitive,
    tracing::{debug, trace},
};

#[derive(Debug)]
enum State {
    Start,
    AwaitingReply,
    Challenged(ChallengeToken),
    Decoding(Vec<u8>),
}

enum Reply {
    Challenge(ChallengeToken),
    Payload,
}

fn classify_reply(reply: &[u8], kind: QueryKind) -> Result<Reply> {
    if !reply.starts_with(&PACKET_PREFIX) {
        return Err(ProtocolError::BadMagic {
            found: reply[..reply.len().min(PACKET_PREFIX.len())].to_vec(),
        });
    }

    let mut cur = FieldCursor::at(reply, PACKET_PREFIX.len());
    let header = cur.read_u8()?;
    let expected = kind.reply_header();
    match Header::from_u8(header) {
        Some(Header::Challenge) => Ok(Reply::Challenge(ChallengeToken(cur.read_array()?))),
        Some(h) if h == expected => Ok(Reply::Payload),
        _ => Err(ProtocolError::UnexpectedHeader {
            header,
            expected: expected as u8,
        }),
    }
}

/// Runs one query against a server: sends the request, answers challenges
/// and decodes the final reply.
///
/// At most `challenge_loop_limit` challenges are answered per session.
pub struct QuerySession<'t, T: ?Sized> {
    transport: &'t mut T,
    challenge_loop_limit: usize,
    max_packet_size: usize,
}

impl<'t, T> QuerySession<'t, T>
where
    T: Transport + ?Sized,
{
    pub fn new(transport: &'t mut T, challenge_loop_limit: usize) -> Self {
        Self {
            transport,
            challenge_loop_limit,
            max_packet_size: DEFAULT_MAX_PACKET_SIZE,
        }
    }

    pub fn with_max_packet_size(mut self, max_packet_size: usize) -> Self {
        self.max_packet_size = max_packet_size;
        self
    }

    pub async fn run<R: A2SResponse>(self) -> Result<R> {
        let kind = R::KIND;
        let mut challenges = 0;
        let mut state = State::Start;

        loop {
            trace!("{:?} session: {:?}", kind, state);
            state = match state {
                State::Start => {
                    let request = build_request(kind);
                    self.transport.send(&request).await?;
                    State::AwaitingReply
                }
                State::AwaitingReply => {
                    let reply = self.transport.receive(self.max_packet_size).await?;
                    match classify_reply(&reply, kind)? {
                        Reply::Challenge(token) => State::Challenged(token),
                        Reply::Payload => State::Decoding(reply),
                    }
                }
                State::Challenged(token) => {
                    challenges += 1;
                    if challenges > self.challenge_loop_limit {
                        return Err(ProtocolError::ChallengeLoopExceeded {
                            limit: self.challenge_loop_limit,
                        });
                    }

                    debug!("Answering challenge {:02x?} ({})", token.0, challenges);
                    let request = build_challenge_reply(kind, token);
                    self.transport.send(&request).await?;
                    State::AwaitingReply
                }
                State::Decoding(reply) => {
                    let mut cur = FieldCursor::at(&reply, PAYLOAD_OFFSET);
                    return R::decode(&mut cur);
                }
            };
        }
    }
}
