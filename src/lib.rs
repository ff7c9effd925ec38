//!
//! Client for the Source engine server query protocol.
//!
//! The `srcq` crate builds A2S_INFO and A2S_PLAYER queries, performs the
//! challenge handshake some servers require and decodes server information and
//! player lists. Datagram I/O goes through the [`Transport`] trait so the
//! protocol engine can be driven by any socket implementation.

pub mod catalog;
pub mod dns;
pub mod errors;
pub mod models;
pub use models::*;
pub mod protocols;
pub mod transport;
pub mod util;

pub use crate::{
    errors::{ProtocolError, Result},
    protocols::a2s::{ChallengeToken, QueryKind, QuerySession},
    transport::{Transport, UdpTransport},
    util::FieldCursor,
};

use {serde::Serialize, std::net::SocketAddr, tracing::debug};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Info(ServerInfo),
    Players(PlayerList),
}

pub async fn query_info<T>(transport: &mut T, challenge_loop_limit: usize) -> Result<ServerInfo>
where
    T: Transport + ?Sized,
{
    QuerySession::new(transport, challenge_loop_limit)
        .run()
        .await
}

pub async fn query_players<T>(
    transport: &mut T,
    challenge_loop_limit: usize,
) -> Result<PlayerList>
where
    T: Transport + ?Sized,
{
    QuerySession::new(transport, challenge_loop_limit)
        .run()
        .await
}

/// Runs a query of `kind` with the limits from `config`.
pub async fn query<T>(transport: &mut T, kind: QueryKind, config: &QueryConfig) -> Result<Response>
where
    T: Transport + ?Sized,
{
    let session = QuerySession::new(transport, config.challenge_loop_limit)
        .with_max_packet_size(config.max_packet_size);

    Ok(match kind {
        QueryKind::Info => Response::Info(session.run().await?),
        QueryKind::Players => Response::Players(session.run().await?),
    })
}

/// Queries `addr` over a fresh UDP socket.
pub async fn simple_query(
    addr: SocketAddr,
    kind: QueryKind,
    config: &QueryConfig,
) -> Result<Response> {
    let mut transport = UdpTransport::connect(addr, config.timeout()).await?;
    debug!("Querying {} for {:?}", addr, kind);

    query(&mut transport, kind, config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        protocols::a2s::{decode_player_list, decode_server_info, PAYLOAD_OFFSET},
        transport::mock::ScriptedTransport,
    };
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use tokio::net::UdpSocket;

    const TF2_INFO: &[u8] = include_bytes!("protocols/a2s/test_payload/tf2_info.raw");

    #[tokio::test]
    async fn test_query_info_non_ship_title() {
        let mut transport = ScriptedTransport::new(vec![TF2_INFO.to_vec()]);

        let info = query_info(&mut transport, 5).await.unwrap();

        assert_eq!(info.game_id(), 440);
        assert_eq!(info.ship_extension, None);
    }

    #[tokio::test]
    async fn test_query_players_empty() {
        let mut transport =
            ScriptedTransport::new(vec![vec![0xFF, 0xFF, 0xFF, 0xFF, 0x44, 0x00, 0x00]]);

        let players = query_players(&mut transport, 5).await.unwrap();

        assert!(players.is_empty());
    }

    #[tokio::test]
    async fn test_query_uses_config_limit() {
        let challenge = vec![0xFF, 0xFF, 0xFF, 0xFF, 0x41, 0x01, 0x02, 0x03, 0x04];
        let mut transport = ScriptedTransport::new(vec![challenge.clone(), challenge]);
        let config = QueryConfig {
            challenge_loop_limit: 1,
            ..QueryConfig::default()
        };

        let result = query(&mut transport, QueryKind::Players, &config).await;

        assert!(matches!(
            result,
            Err(ProtocolError::ChallengeLoopExceeded { limit: 1 })
        ));
    }

    #[tokio::test]
    async fn test_simple_query_over_udp() {
        let server = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = server.local_addr().unwrap();

        let responder = tokio::spawn(async move {
            let mut buf = [0; 1400];

            let (len, client) = server.recv_from(&mut buf).await.unwrap();
            assert_eq!(&buf[..len], &protocols::a2s::build_info_request()[..]);
            server
                .send_to(&[0xFF, 0xFF, 0xFF, 0xFF, 0x41, 0xAA, 0xBB, 0xCC, 0xDD], client)
                .await
                .unwrap();

            let (len, client) = server.recv_from(&mut buf).await.unwrap();
            assert_eq!(&buf[len - 4..len], &[0xAA, 0xBB, 0xCC, 0xDD]);
            server.send_to(TF2_INFO, client).await.unwrap();
        });

        let response = simple_query(addr, QueryKind::Info, &QueryConfig::default())
            .await
            .unwrap();
        responder.await.unwrap();

        match response {
            Response::Info(info) => {
                assert_eq!(info.folder_name, "tf");
                assert_eq!(info.extra.port, Some(27015));
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn test_decoders_survive_garbage() {
        let mut rng = StdRng::seed_from_u64(0x5EED);

        for _ in 0..2000 {
            let len = rng.gen_range(0..96);
            let data: Vec<u8> = (0..len).map(|_| rng.gen()).collect();

            let _ = decode_server_info(&mut FieldCursor::new(&data));
            let _ = decode_player_list(&mut FieldCursor::new(&data));
        }
    }

    #[test]
    fn test_truncated_info_is_never_partially_decoded() {
        let marker = b"8622567\0";
        let version_end = TF2_INFO
            .windows(marker.len())
            .position(|w| w == marker)
            .unwrap()
            + marker.len();

        // Only the cut right after the version string is a complete reply
        // (one without the optional trailer).
        for cut in PAYLOAD_OFFSET..TF2_INFO.len() {
            let mut cur = FieldCursor::at(&TF2_INFO[..cut], PAYLOAD_OFFSET);
            let result = decode_server_info(&mut cur);
            assert_eq!(result.is_ok(), cut == version_end, "cut at {}", cut);
        }
    }
}
