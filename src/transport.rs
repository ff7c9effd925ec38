use {
    bytes::Bytes,
    futures::{
        future::{BoxFuture, FutureExt},
        SinkExt, StreamExt,
    },
    std::{
        io,
        net::{Ipv4Addr, Ipv6Addr, SocketAddr},
        time::Duration,
    },
    tokio::{net::UdpSocket, time::timeout},
    tokio_util::{codec::BytesCodec, udp::UdpFramed},
    tracing::{debug, trace},
};

/// Datagram exchange with a single server.
///
/// Each call is a suspension point for the query session; there is never more
/// than one outstanding call per transport.
pub trait Transport: Send {
    fn send<'a>(&'a mut self, data: &'a [u8]) -> BoxFuture<'a, io::Result<()>>;
    /// Receives one datagram, truncated to `max_len` bytes.
    fn receive(&mut self, max_len: usize) -> BoxFuture<'_, io::Result<Vec<u8>>>;
}

fn to_v4(addr: SocketAddr) -> SocketAddr {
    use SocketAddr::*;

    if let V6(v) = addr {
        if let Some(v4_addr) = v.ip().to_ipv4_mapped() {
            return SocketAddr::from((v4_addr, v.port()));
        }
    }

    addr
}

/// UDP transport bound to an ephemeral local port. Datagrams from anyone but
/// the peer are dropped.
pub struct UdpTransport {
    framed: UdpFramed<BytesCodec>,
    peer: SocketAddr,
    timeout: Duration,
}

impl UdpTransport {
    pub async fn connect(peer: SocketAddr, timeout: Duration) -> io::Result<Self> {
        let local = if peer.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };
        let socket = UdpSocket::bind(local).await?;
        debug!("Bound {} for queries to {}", socket.local_addr()?, peer);

        Ok(Self {
            framed: UdpFramed::new(socket, BytesCodec::new()),
            peer,
            timeout,
        })
    }

    async fn recv_from_peer(&mut self, max_len: usize) -> io::Result<Vec<u8>> {
        let peer = to_v4(self.peer);
        loop {
            let (buf, addr) = self.framed.next().await.ok_or_else(|| {
                io::Error::new(io::ErrorKind::UnexpectedEof, "Socket stream closed")
            })??;
            let addr = to_v4(addr);
            trace!("Received data from {}: {}", addr, hex::encode(&buf));

            if addr != peer {
                trace!("Dropping datagram from unexpected peer {}", addr);
                continue;
            }

            let mut data = buf.to_vec();
            data.truncate(max_len);
            return Ok(data);
        }
    }
}

impl Transport for UdpTransport {
    fn send<'a>(&'a mut self, data: &'a [u8]) -> BoxFuture<'a, io::Result<()>> {
        async move {
            trace!("Sending data to {}: {}", self.peer, hex::encode(data));
            self.framed
                .send((Bytes::copy_from_slice(data), self.peer))
                .await
        }
        .boxed()
    }

    fn receive(&mut self, max_len: usize) -> BoxFuture<'_, io::Result<Vec<u8>>> {
        async move {
            let (peer, wait) = (self.peer, self.timeout);
            match timeout(wait, self.recv_from_peer(max_len)).await {
                Ok(result) => result,
                Err(_) => Err(io::Error::new(
                    io::ErrorKind::TimedOut,
                    format!("No reply from {} within {:?}", peer, wait),
                )),
            }
        }
        .boxed()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_v4() {
        let mapped: SocketAddr = "[::ffff:10.0.0.1]:27015".parse().unwrap();
        let plain: SocketAddr = "[2001:db8::1]:27015".parse().unwrap();

        assert_eq!(to_v4(mapped), "10.0.0.1:27015".parse::<SocketAddr>().unwrap());
        assert_eq!(to_v4(plain), plain);
    }

    #[tokio::test]
    async fn test_udp_round_trip() {
        let server = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let server_addr = server.local_addr().unwrap();
        let mut transport = UdpTransport::connect(server_addr, Duration::from_secs(5))
            .await
            .unwrap();

        transport.send(b"ping").await.unwrap();
        let mut buf = [0; 16];
        let (len, client_addr) = server.recv_from(&mut buf).await.unwrap();
        assert_eq!(&buf[..len], b"ping");

        server.send_to(b"pong-pong", client_addr).await.unwrap();
        assert_eq!(transport.receive(4).await.unwrap(), b"pong");
    }

    #[tokio::test]
    async fn test_udp_drops_foreign_datagrams() {
        let server = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let stranger = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let mut transport = UdpTransport::connect(server.local_addr().unwrap(), Duration::from_secs(5))
            .await
            .unwrap();

        transport.send(b"ping").await.unwrap();
        let mut buf = [0; 16];
        let (_, client_addr) = server.recv_from(&mut buf).await.unwrap();

        stranger.send_to(b"spoofed", client_addr).await.unwrap();
        server.send_to(b"genuine", client_addr).await.unwrap();

        assert_eq!(transport.receive(64).await.unwrap(), b"genuine");
    }

    #[tokio::test]
    async fn test_udp_timeout() {
        let server = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let mut transport =
            UdpTransport::connect(server.local_addr().unwrap(), Duration::from_millis(50))
                .await
                .unwrap();

        let err = transport.receive(64).await.unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::TimedOut);
    }
}
