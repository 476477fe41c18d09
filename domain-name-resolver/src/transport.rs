use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use async_trait::async_trait;
use bytes::BytesMut;
use tokio::net::{lookup_host, UdpSocket};

// 默认 1024 字节的接收缓冲区，更长的响应会被截断
pub const DEFAULT_RECEIVE_BUFFER_SIZE: usize = 1024;

/// Sends one query datagram and waits for one response datagram.
///
/// `server` is a `host:port` string. Implementations make a single attempt
/// and release whatever they opened before returning.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send_and_receive(&self, server: &str, payload: &[u8]) -> std::io::Result<Vec<u8>>;
}

pub struct UdpTransport {
    receive_buffer_size: usize,
    timeout: Option<Duration>,
}

impl UdpTransport {
    pub fn new(receive_buffer_size: usize, timeout: Option<Duration>) -> Self {
        Self {
            receive_buffer_size,
            timeout,
        }
    }

    async fn exchange(&self, server: &str, payload: &[u8]) -> std::io::Result<Vec<u8>> {
        let server_addr = pick_server_addr(server).await?;

        // 本地 socket 必须和目标地址同一协议族
        let local_addr = match server_addr {
            SocketAddr::V4(_) => SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0)),
            SocketAddr::V6(_) => SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0)),
        };
        let sock = UdpSocket::bind(local_addr).await?;

        let _send_size = sock.send_to(payload, server_addr).await?;

        let mut resp_buf = BytesMut::with_capacity(self.receive_buffer_size);
        let response_size = sock.recv_buf(&mut resp_buf).await?;
        let response_bytes = &resp_buf[0..response_size];
        tracing::debug!("received udp response from {}, length: {}", server, response_size);

        Ok(response_bytes.to_vec())
    }
}

/// Resolves `host:port` with the system resolver, preferring the first
/// IPv4 address and falling back to the first address of any family.
async fn pick_server_addr(server: &str) -> std::io::Result<SocketAddr> {
    let addrs: Vec<SocketAddr> = lookup_host(server).await?.collect();

    addrs
        .iter()
        .find(|addr| addr.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no address found for {}", server),
            )
        })
}

impl Default for UdpTransport {
    fn default() -> Self {
        Self::new(DEFAULT_RECEIVE_BUFFER_SIZE, None)
    }
}

#[async_trait]
impl Transport for UdpTransport {
    async fn send_and_receive(&self, server: &str, payload: &[u8]) -> std::io::Result<Vec<u8>> {
        match self.timeout {
            None => self.exchange(server, payload).await,
            Some(limit) => match tokio::time::timeout(limit, self.exchange(server, payload)).await {
                Ok(ret) => ret,
                Err(_) => Err(std::io::Error::new(
                    std::io::ErrorKind::TimedOut,
                    format!("no response from {} within {:?}", server, limit),
                )),
            },
        }
    }
}
