use std::net::IpAddr;

use anyhow::Context;
use pnet::packet::dns::{DnsClass, DnsQuery, DnsTypes, MutableDnsPacket, Opcode, Retcode};

use ipscope_common::utils::ip;

pub const DNS_HDR_LEN: usize = 12;

pub const RCODE_NO_ERROR: u8 = 0;
pub const RCODE_NAME_ERROR: u8 = 3;

const TYPE_PTR: u16 = 12;
const RR_FIXED_LEN: usize = 10;
const QUESTION_FIXED_LEN: usize = 4;
const POINTER_MASK: u8 = 0xC0;
const MAX_LABEL_LEN: usize = 63;
const MAX_POINTER_JUMPS: usize = 16;

/// What a nameserver said about a PTR question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PtrReply {
    pub id: u16,
    pub rcode: u8,
    /// First PTR name of the answer section, if any.
    pub hostname: Option<String>,
}

impl PtrReply {
    /// NOERROR and NXDOMAIN are answers; every other rcode means the server failed us.
    pub fn is_answer(&self) -> bool {
        matches!(self.rcode, RCODE_NO_ERROR | RCODE_NAME_ERROR)
    }
}

/// Reads a DNS reply without trusting any of its counts or lengths.
///
/// Every answer record is visited, so a PTR following a CNAME is still found.
pub fn get_hostname(payload: &[u8]) -> anyhow::Result<PtrReply> {
    anyhow::ensure!(payload.len() >= DNS_HDR_LEN, "DNS packet shorter than its header");
    anyhow::ensure!(payload[2] & 0x80 != 0, "DNS packet is not a response");

    let id: u16 = read_u16(payload, 0).context("reading transaction id")?;
    let rcode: u8 = payload[3] & 0x0F;
    let query_count: u16 = read_u16(payload, 4).context("reading question count")?;
    let response_count: u16 = read_u16(payload, 6).context("reading answer count")?;

    let mut cursor: usize = DNS_HDR_LEN;
    for _ in 0..query_count {
        cursor = skip_dns_name(payload, cursor).context("truncated question name")?;
        cursor = cursor
            .checked_add(QUESTION_FIXED_LEN)
            .filter(|end| *end <= payload.len())
            .context("truncated question")?;
    }

    let mut hostname: Option<String> = None;
    for _ in 0..response_count {
        cursor = skip_dns_name(payload, cursor).context("truncated answer name")?;
        let rtype: u16 = read_u16(payload, cursor).context("truncated answer type")?;
        let data_len: usize = read_u16(payload, cursor + 8).context("truncated answer length")? as usize;
        let data_start: usize = cursor + RR_FIXED_LEN;
        let data: &[u8] = payload
            .get(data_start..data_start + data_len)
            .context("answer data runs past the packet")?;
        cursor = data_start + data_len;

        if rtype == TYPE_PTR && hostname.is_none() {
            hostname = response_from_ptr(payload, data);
        }
    }

    Ok(PtrReply { id, rcode, hostname })
}

pub fn create_ptr_packet(ip_addr: &IpAddr, id: u16) -> anyhow::Result<Vec<u8>> {
    let query: DnsQuery = create_ptr_query(ip_addr)?;
    let q_fixed_len: usize = 4;
    let qlen: usize = query.qname.len() + q_fixed_len;
    let total: usize = DNS_HDR_LEN + qlen;
    let mut buffer: Vec<u8> = vec![0u8; total];

    {
        let mut dns: MutableDnsPacket =
            MutableDnsPacket::new(&mut buffer).context("creating dns header")?;
        dns.set_id(id);
        dns.set_is_response(0);
        dns.set_opcode(Opcode::StandardQuery);
        dns.set_is_authoriative(0);
        dns.set_is_truncated(0);
        dns.set_is_recursion_desirable(1);
        dns.set_is_recursion_available(0);
        dns.set_zero_reserved(0);
        dns.set_is_non_authenticated_data(0);
        dns.set_rcode(Retcode::NoError);
        dns.set_query_count(1);
        dns.set_response_count(0);
        dns.set_authority_rr_count(0);
        dns.set_additional_rr_count(0);
    }

    // Question section follows the fixed header
    let mut cursor: usize = DNS_HDR_LEN;

    buffer[cursor..cursor + query.qname.len()].copy_from_slice(&query.qname);
    cursor += query.qname.len();

    let type_bytes: [u8; 2] = query.qtype.0.to_be_bytes();
    buffer[cursor..cursor + 2].copy_from_slice(&type_bytes);
    cursor += 2;

    let class_bytes: [u8; 2] = query.qclass.0.to_be_bytes();
    buffer[cursor..cursor + 2].copy_from_slice(&class_bytes);

    Ok(buffer)
}

fn response_from_ptr(message: &[u8], data: &[u8]) -> Option<String> {
    decode_dns_name(message, data)
        .map(|name| name.trim_end_matches('.').to_string())
        .filter(|name| !name.is_empty())
}

fn create_ptr_query(ip_addr: &IpAddr) -> anyhow::Result<DnsQuery> {
    let ptr_string: String = ip::reverse_address_to_ptr(ip_addr);
    let qname: Vec<u8> = encode_dns_name(&ptr_string)?;
    let query: DnsQuery = DnsQuery {
        qname,
        qtype: DnsTypes::PTR,
        qclass: DnsClass(1),
        payload: Vec::new(),
    };
    Ok(query)
}

fn encode_dns_name(name: &str) -> anyhow::Result<Vec<u8>> {
    let mut encoded: Vec<u8> = Vec::new();
    for label in name.split('.') {
        if label.is_empty() {
            continue;
        }
        anyhow::ensure!(label.len() <= MAX_LABEL_LEN, "label too long: {label}");
        encoded.push(label.len() as u8);
        encoded.extend_from_slice(label.as_bytes());
    }
    encoded.push(0);
    Ok(encoded)
}

fn read_u16(buf: &[u8], at: usize) -> Option<u16> {
    let bytes: &[u8] = buf.get(at..at.checked_add(2)?)?;
    Some(u16::from_be_bytes([bytes[0], bytes[1]]))
}

/// Returns the offset right after the name starting at `cursor`.
fn skip_dns_name(message: &[u8], mut cursor: usize) -> Option<usize> {
    loop {
        let len_byte: u8 = *message.get(cursor)?;
        match len_byte {
            0 => return Some(cursor + 1),
            b if b & POINTER_MASK == POINTER_MASK => {
                message.get(cursor + 1)?;
                return Some(cursor + 2);
            }
            b if b as usize > MAX_LABEL_LEN => return None,
            b => {
                cursor += 1 + b as usize;
                if cursor > message.len() {
                    return None;
                }
            }
        }
    }
}

/// Decodes a name from record data, following compression pointers into `message`.
fn decode_dns_name(message: &[u8], data: &[u8]) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();
    let mut buf: &[u8] = data;
    let mut cursor: usize = 0;
    let mut jumps: usize = 0;

    while cursor < buf.len() {
        let len_byte: u8 = buf[cursor];
        if len_byte == 0 {
            break;
        }
        if len_byte & POINTER_MASK == POINTER_MASK {
            let low: u8 = *buf.get(cursor + 1)?;
            let offset: usize = (((len_byte & !POINTER_MASK) as usize) << 8) | low as usize;
            jumps += 1;
            if jumps > MAX_POINTER_JUMPS || offset >= message.len() {
                return None;
            }
            buf = message;
            cursor = offset;
            continue;
        }
        let len: usize = len_byte as usize;
        cursor += 1;
        if cursor + len > buf.len() {
            return None;
        }
        let label: &str = std::str::from_utf8(&buf[cursor..cursor + len]).ok()?;
        parts.push(label.to_string());
        cursor += len;
    }
    Some(parts.join("."))
}
