use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, UdpSocket};
use std::time::Duration;

use log::*;

use dns::Message;
use super::{Transport, Error, DEFAULT_TIMEOUT, DNS_PORT};


/// The size of the buffer replies get received into, which is large enough
/// for responses that go over the traditional UDP limit.
const RECEIVE_BUFFER_SIZE: usize = 8192;


/// The **UDP transport**, which uses the stdlib.
///
/// # Examples
///
/// ```no_run
/// use dns_transport::{Transport, UdpTransport};
/// use dns::{Message, Flags, Question, record::RecordType};
///
/// let request = Message {
///     transaction_id: 0xABCD,
///     flags: Flags::query(),
///     question: Some(Question::new("dns.lookup.dog", RecordType::NS)),
///     answers: vec![],
///     authorities: vec![],
///     additionals: vec![],
/// };
///
/// let transport = UdpTransport::new("8.8.8.8").unwrap();
/// transport.send(&request);
/// ```
#[derive(Debug)]
pub struct UdpTransport {
    addr: SocketAddr,
    timeout: Duration,
}

impl UdpTransport {

    /// Creates a new UDP transport that connects to the given nameserver.
    /// This can be an IP address on its own, which uses port 53, or an
    /// address with a port, such as `127.0.0.1:5353` or `[::1]:5353`.
    /// Hostnames are not resolved.
    pub fn new(addr: &str) -> Result<Self, Error> {
        let addr = parse_address(addr)?;
        Ok(Self { addr, timeout: DEFAULT_TIMEOUT })
    }

    /// Changes how long to wait for a reply. The duration must not be zero.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self { timeout, .. self }
    }

    /// The address of the nameserver.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// How long to wait for a reply.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Sends the bytes in a single datagram, then waits for one datagram to
    /// come back and returns its contents. The request is never resent.
    pub fn query(&self, bytes: &[u8]) -> Result<Vec<u8>, Error> {
        let local: IpAddr = match self.addr {
            SocketAddr::V4(_) => Ipv4Addr::UNSPECIFIED.into(),
            SocketAddr::V6(_) => Ipv6Addr::UNSPECIFIED.into(),
        };

        info!("Opening UDP socket");
        let socket = UdpSocket::bind((local, 0))?;
        socket.connect(self.addr)?;
        socket.set_read_timeout(Some(self.timeout))?;

        info!("Sending {} bytes of data to {} over UDP", bytes.len(), self.addr);
        let len = socket.send(bytes)?;
        debug!("Sent {} bytes", len);

        info!("Waiting to receive...");
        let mut buf = vec![0; RECEIVE_BUFFER_SIZE];
        let len = socket.recv(&mut buf)?;

        info!("Received {} bytes of data", len);
        buf.truncate(len);
        Ok(buf)
    }
}


impl Transport for UdpTransport {
    fn send(&self, request: &Message) -> Result<Message, Error> {
        let bytes = request.to_bytes()?;
        let reply = self.query(&bytes)?;
        let response = Message::from_bytes(&reply)?;

        if response.transaction_id != request.transaction_id {
            warn!("Reply has transaction ID {:#06x}, but the request had {:#06x}",
                  response.transaction_id, request.transaction_id);
        }

        Ok(response)
    }
}


/// Interprets a nameserver address, which must be a literal IP address,
/// optionally with a port.
fn parse_address(addr: &str) -> Result<SocketAddr, Error> {
    if let Ok(ip) = addr.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, DNS_PORT));
    }

    addr.parse::<SocketAddr>().map_err(|_| {
        warn!("Nameserver address {:?} is not an IP address", addr);
        Error::InvalidAddress(addr.into())
    })
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::query;
    use std::thread;

    use dns::{Answer, Flags, QClass, Question};
    use dns::record::{Record, RecordType, A};
    use pretty_assertions::assert_eq;

    /// Starts a nameserver on the loopback interface that answers one
    /// datagram by running it through the given function.
    fn responder(respond: impl FnOnce(Vec<u8>) -> Vec<u8> + Send + 'static) -> SocketAddr {
        let socket = UdpSocket::bind("127.0.0.1:0").unwrap();
        let addr = socket.local_addr().unwrap();

        thread::spawn(move || {
            let mut buf = vec![0; 1024];
            let (len, from) = socket.recv_from(&mut buf).unwrap();
            buf.truncate(len);
            socket.send_to(&respond(buf), from).unwrap();
        });

        addr
    }

    #[test]
    fn address_without_port() {
        let transport = UdpTransport::new("8.8.8.8").unwrap();
        assert_eq!(transport.addr(), "8.8.8.8:53".parse().unwrap());
    }

    #[test]
    fn default_timeout() {
        let transport = UdpTransport::new("192.0.2.53").unwrap();
        assert_eq!(transport.timeout(), DEFAULT_TIMEOUT);
        assert_eq!(transport.timeout(), Duration::from_secs(15));

        let transport = transport.with_timeout(Duration::from_millis(250));
        assert_eq!(transport.timeout(), Duration::from_millis(250));
    }

    #[test]
    fn ipv6_address_without_port() {
        let transport = UdpTransport::new("2001:4860:4860::8888").unwrap();
        assert_eq!(transport.addr(), "[2001:4860:4860::8888]:53".parse().unwrap());
    }

    #[test]
    fn address_with_port() {
        let transport = UdpTransport::new("[::1]:5353").unwrap();
        assert_eq!(transport.addr(), "[::1]:5353".parse().unwrap());
    }

    #[test]
    fn hostname_is_invalid() {
        assert!(matches!(UdpTransport::new("dns.google"),
                         Err(Error::InvalidAddress(addr)) if addr == "dns.google"));
    }

    #[test]
    fn echoes() {
        let addr = responder(|bytes| bytes.into_iter().rev().collect());

        let reply = query(&addr.to_string(), &[ 1, 2, 3 ]).unwrap();
        assert_eq!(reply, vec![ 3, 2, 1 ]);
    }

    #[test]
    fn sends_and_receives_messages() {
        let addr = responder(|bytes| {
            let mut message = Message::from_bytes(&bytes).unwrap();
            message.flags = Flags::standard_response();
            message.answers.push(Answer {
                qname: String::from("dns.lookup.dog"),
                qclass: QClass::IN,
                ttl: 60,
                record: Record::A(A { address: Ipv4Addr::new(192, 0, 2, 1) }),
            });
            message.to_bytes().unwrap()
        });

        let request = Message {
            transaction_id: 0x4242,
            flags: Flags::query(),
            question: Some(Question::new("dns.lookup.dog", RecordType::A)),
            answers: vec![],
            authorities: vec![],
            additionals: vec![],
        };

        let transport = UdpTransport::new(&addr.to_string()).unwrap();
        let response = transport.send(&request).unwrap();

        assert_eq!(response.transaction_id, 0x4242);
        assert!(response.flags.response);
        assert_eq!(response.question, request.question);
        assert_eq!(response.answers.len(), 1);
    }

    #[test]
    fn mismatched_transaction_id_is_still_returned() {
        let addr = responder(|mut bytes| {
            bytes[0] ^= 0xFF;
            bytes
        });

        let request = Message {
            transaction_id: 0x0102,
            flags: Flags::query(),
            question: Some(Question::new("dns.lookup.dog", RecordType::A)),
            answers: vec![],
            authorities: vec![],
            additionals: vec![],
        };

        let transport = UdpTransport::new(&addr.to_string()).unwrap();
        let response = transport.send(&request).unwrap();
        assert_eq!(response.transaction_id, 0xFE02);
    }

    #[test]
    fn malformed_reply() {
        let addr = responder(|_| vec![ 0x12, 0x34, 0x81 ]);

        let request = Message {
            transaction_id: 0x1234,
            flags: Flags::query(),
            question: Some(Question::new("dns.lookup.dog", RecordType::A)),
            answers: vec![],
            authorities: vec![],
            additionals: vec![],
        };

        let transport = UdpTransport::new(&addr.to_string()).unwrap();
        assert!(matches!(transport.send(&request),
                         Err(Error::WireError(dns::WireError::BufferOverrun))));
    }

    #[test]
    fn times_out() {
        // bound, but never replies
        let silent = UdpSocket::bind("127.0.0.1:0").unwrap();
        let addr = silent.local_addr().unwrap();

        let transport = UdpTransport::new(&addr.to_string()).unwrap()
            .with_timeout(Duration::from_millis(100));

        assert!(matches!(transport.query(&[ 0 ]), Err(Error::Timeout)));
    }

    #[test]
    fn nothing_listening() {
        let closed = UdpSocket::bind("127.0.0.1:0").unwrap();
        let addr = closed.local_addr().unwrap();
        drop(closed);

        let transport = UdpTransport::new(&addr.to_string()).unwrap()
            .with_timeout(Duration::from_secs(2));

        assert!(matches!(transport.query(&[ 0 ]), Err(Error::Unreachable(_))));
    }
}
