use super::{ChallengeToken, QueryKind, CHALLENGE_PLACEHOLDER, INFO_QUERY_STRING, PACKET_PREFIX};

use bytes::{BufMut, Bytes, BytesMut};

fn write_prelude(out: &mut BytesMut, kind: QueryKind) {
    out.put_slice(&PACKET_PREFIX);
    out.put_u8(kind.request_header() as u8);
    if kind == QueryKind::Info {
        out.put_slice(INFO_QUERY_STRING.as_bytes());
        out.put_u8(0);
    }
}

pub fn build_info_request() -> Bytes {
    let mut out = BytesMut::with_capacity(25);
    write_prelude(&mut out, QueryKind::Info);
    out.freeze()
}

pub fn build_players_request(challenge: Option<ChallengeToken>) -> Bytes {
    let mut out = BytesMut::with_capacity(9);
    write_prelude(&mut out, QueryKind::Players);
    match challenge {
        Some(token) => out.put_slice(token.as_ref()),
        None => out.put_slice(&CHALLENGE_PLACEHOLDER),
    }
    out.freeze()
}

/// First datagram of a query, before any challenge is known.
pub fn build_request(kind: QueryKind) -> Bytes {
    match kind {
        QueryKind::Info => build_info_request(),
        QueryKind::Players => build_players_request(None),
    }
}

/// Resends the query of `kind` with the server's challenge attached.
pub fn build_challenge_reply(kind: QueryKind, challenge: ChallengeToken) -> Bytes {
    match kind {
        QueryKind::Info => {
            let mut out = BytesMut::with_capacity(29);
            write_prelude(&mut out, QueryKind::Info);
            out.put_slice(challenge.as_ref());
            out.freeze()
        }
        QueryKind::Players => build_players_request(Some(challenge)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::FieldCursor;

    const INFO_REQUEST: &[u8] = b"\xFF\xFF\xFF\xFFTSource Engine Query\x00";

    #[test]
    fn test_info_request() {
        assert_eq!(&build_info_request()[..], INFO_REQUEST);
        assert_eq!(build_request(QueryKind::Info), build_info_request());
    }

    #[test]
    fn test_info_request_prefix_parses_back() {
        let data = build_info_request();
        let mut cur = FieldCursor::new(&data);

        assert_eq!(cur.read_array::<4>().unwrap(), PACKET_PREFIX);
        assert_eq!(cur.read_u8().unwrap(), 0x54);
        assert_eq!(cur.read_cstring().unwrap(), "Source Engine Query");
        assert_eq!(cur.remaining(), 0);
    }

    #[test]
    fn test_players_request() {
        assert_eq!(
            &build_players_request(None)[..],
            &[0xFF, 0xFF, 0xFF, 0xFF, 0x55, 0xFF, 0xFF, 0xFF, 0xFF]
        );
        assert_eq!(
            &build_players_request(Some(ChallengeToken([0x4B, 0xA1, 0x0C, 0x77])))[..],
            &[0xFF, 0xFF, 0xFF, 0xFF, 0x55, 0x4B, 0xA1, 0x0C, 0x77]
        );
        assert_eq!(build_request(QueryKind::Players), build_players_request(None));
    }

    #[test]
    fn test_challenge_reply() {
        let token = ChallengeToken::from([0x01, 0x02, 0x03, 0x04]);

        let mut expectation = INFO_REQUEST.to_vec();
        expectation.extend_from_slice(&[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(&build_challenge_reply(QueryKind::Info, token)[..], &expectation[..]);

        assert_eq!(
            build_challenge_reply(QueryKind::Players, token),
            build_players_request(Some(token))
        );
    }
}
