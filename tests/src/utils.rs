use std::net::SocketAddr;

use tokio::net::UdpSocket;
use tokio::task::JoinHandle;

/// How the fake nameserver answers the next query.
#[derive(Clone, Copy)]
pub enum Answer {
    Ptr(&'static str),
    NxDomain,
    /// Reply without answers carrying the given failure rcode.
    Failure(u8),
    /// Sends these bytes verbatim, whatever the query was.
    Raw(&'static [u8]),
    /// Sends a reply with a wrong transaction id, then the real one.
    ForeignIdFirst(&'static str),
}

/// One-shot nameserver on a loopback port.
pub struct FakeNameserver {
    pub addr: SocketAddr,
    pub handle: JoinHandle<()>,
}

impl FakeNameserver {
    pub async fn start(answer: Answer) -> Self {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = socket.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let mut buf = [0u8; 512];
            let (len, peer) = socket.recv_from(&mut buf).await.unwrap();
            let query = &buf[..len];
            match answer {
                Answer::Ptr(name) => {
                    socket.send_to(&reply(query, Some(name)), peer).await.unwrap();
                }
                Answer::NxDomain => {
                    socket.send_to(&reply(query, None), peer).await.unwrap();
                }
                Answer::Failure(rcode) => {
                    let mut packet = reply(query, None);
                    packet[3] = 0x80 | rcode;
                    socket.send_to(&packet, peer).await.unwrap();
                }
                Answer::Raw(bytes) => {
                    socket.send_to(bytes, peer).await.unwrap();
                }
                Answer::ForeignIdFirst(name) => {
                    let mut stray = reply(query, Some("stray.invalid"));
                    stray[0] ^= 0xFF;
                    socket.send_to(&stray, peer).await.unwrap();
                    socket.send_to(&reply(query, Some(name)), peer).await.unwrap();
                }
            }
        });
        Self { addr, handle }
    }
}

/// Turns a query into a reply carrying at most one PTR answer.
pub fn reply(query: &[u8], name: Option<&str>) -> Vec<u8> {
    let mut packet: Vec<u8> = query.to_vec();
    packet[2] = 0x81;
    match name {
        Some(name) => {
            packet[3] = 0x80;
            packet[7] = 1;
            let rdata = encode_name(name);
            packet.extend_from_slice(&[0xC0, 0x0C, 0x00, 0x0C, 0x00, 0x01, 0x00, 0x00, 0x01, 0x2C]);
            packet.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
            packet.extend_from_slice(&rdata);
        }
        None => packet[3] = 0x83,
    }
    packet
}

fn encode_name(name: &str) -> Vec<u8> {
    let mut encoded = Vec::new();
    for label in name.split('.').filter(|label| !label.is_empty()) {
        encoded.push(label.len() as u8);
        encoded.extend_from_slice(label.as_bytes());
    }
    encoded.push(0);
    encoded
}
