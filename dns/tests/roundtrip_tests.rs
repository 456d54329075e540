use std::net::{Ipv4Addr, Ipv6Addr};

use dns::{Message, Question, Answer, Flags, QClass, WireError, RCODE_BAD_NAME, encode_name, decode_name};
use dns::record::*;

use pretty_assertions::assert_eq;


fn answer(qname: &str, record: Record) -> Answer {
    Answer { qname: qname.into(), qclass: QClass::IN, ttl: 3600, record }
}

fn round_trip(message: &Message) -> Message {
    let bytes = message.to_bytes_with_capacity(4096).unwrap();
    Message::from_bytes(&bytes).unwrap()
}


#[test]
fn query_for_example_com() {
    let message = Message {
        transaction_id: 1234,
        flags: Flags::query(),
        question: Some(Question::new("example.com", RecordType::A)),
        answers: vec![],
        authorities: vec![],
        additionals: vec![],
    };

    let bytes = message.to_bytes().unwrap();
    assert_eq!(&bytes[.. 2], &[ 0x04, 0xd2 ]);

    let decoded = Message::from_bytes(&bytes).unwrap();
    assert_eq!(decoded.transaction_id, 1234);
    assert!(! decoded.flags.response);
    assert_eq!(decoded.question, Some(Question {
        qname: String::from("example.com"),
        qtype: RecordType::A,
        qclass: QClass::IN,
    }));
    assert_eq!(decoded, message);
}


#[test]
fn every_record_type() {
    let message = Message {
        transaction_id: 0xabcd,
        flags: Flags::standard_response(),
        question: Some(Question::new("everything.example", RecordType::Other(UnknownQtype::from(255)))),
        answers: vec![
            answer("everything.example", Record::A(A { address: Ipv4Addr::new(192, 0, 2, 1) })),
            answer("everything.example", Record::AAAA(AAAA { address: Ipv6Addr::LOCALHOST })),
            answer("alias.example", Record::CNAME(CNAME { domain: String::from("everything.example") })),
            answer("everything.example", Record::HINFO(HINFO { cpu: Box::new(*b"RISC-V"), os: Box::new(*b"Plan 9") })),
            answer("everything.example", Record::MX(MX { preference: 5, exchange: String::from("mail.example") })),
            answer("everything.example", Record::NAPTR(NAPTR {
                order: 100,
                preference: 10,
                flags: Box::new(*b"S"),
                service: Box::new(*b"SIP+D2U"),
                regex: Box::default(),
                replacement: String::from("_sip._udp.example"),
            })),
            answer("1.2.0.192.in-addr.arpa", Record::PTR(PTR { cname: String::from("everything.example") })),
            answer("everything.example", Record::SPF(SPF { message: Box::new(*b"v=spf1 -all") })),
            answer("_sip._udp.example", Record::SRV(SRV { priority: 0, weight: 5, port: 5060, target: String::from("sip.example") })),
            answer("everything.example", Record::TXT(TXT { message: vec![ b'!'; 256 ].into_boxed_slice() })),
            answer("everything.example", Record::WKS(WKS::from_ports(Ipv4Addr::new(192, 0, 2, 1), 6, &[ 22, 80, 443 ]))),
            answer("everything.example", Record::LOC(LOC {
                size: Size { base: 1, power_of_ten: 2 },
                horizontal_precision: Size { base: 1, power_of_ten: 6 },
                vertical_precision: Size { base: 1, power_of_ten: 3 },
                latitude: Angle { degrees: 42, minutes: 21, seconds: 54, fraction: 0, hemisphere: Hemisphere::North },
                longitude: Angle { degrees: 71, minutes: 6, seconds: 18, fraction: 0, hemisphere: Hemisphere::West },
                altitude: -2400,
            })),
            answer("everything.example", Record::GPOS(GPOS {
                longitude: Angle { degrees: 71, minutes: 6, seconds: 18, fraction: 123, hemisphere: Hemisphere::West },
                latitude: Angle { degrees: 42, minutes: 21, seconds: 54, fraction: 999, hemisphere: Hemisphere::North },
                altitude: -24.0,
            })),
        ],
        authorities: vec![
            answer("example", Record::NS(NS { nameserver: String::from("ns.example") })),
            answer("example", Record::SOA(SOA {
                mname: String::from("ns.example"),
                rname: String::from("hostmaster.example"),
                serial: 2024010101,
                refresh_interval: 7200,
                retry_interval: 3600,
                expire_limit: 1209600,
                minimum_ttl: 300,
            })),
        ],
        additionals: vec![
            answer("ns.example", Record::A(A { address: Ipv4Addr::new(192, 0, 2, 53) })),
        ],
    };

    assert_eq!(round_trip(&message), message);
}


#[test]
fn unknown_type_between_two_addresses() {
    let first = answer("a.example", Record::A(A { address: Ipv4Addr::new(10, 0, 0, 1) }));
    let second = answer("a.example", Record::A(A { address: Ipv4Addr::new(10, 0, 0, 2) }));

    let mut bytes = Message {
        transaction_id: 7,
        flags: Flags::standard_response(),
        question: None,
        answers: vec![ first.clone() ],
        authorities: vec![],
        additionals: vec![],
    }.to_bytes().unwrap();

    // splice in a record of type 4444 before the second address
    bytes[7] = 3;
    bytes.extend(&[ 0x00, 0x11, 0x5c, 0x00, 0x01, 0x00, 0x00, 0x00, 0x10, 0x00, 0x03, 0x01, 0x02, 0x03 ]);
    bytes.extend(encode_name("a.example").unwrap());
    bytes.extend(&[ 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x0e, 0x10, 0x00, 0x04, 10, 0, 0, 2 ]);

    let decoded = Message::from_bytes(&bytes).unwrap();
    assert_eq!(decoded.answers.len(), 3);
    assert_eq!(decoded.answers[0], first);
    assert_eq!(decoded.answers[1].qname, ".");
    assert_eq!(decoded.answers[1].record, Record::Other { type_number: UnknownQtype::UnheardOf(4444) });
    assert_eq!(decoded.answers[2], second);
}


#[test]
fn record_data_cut_short() {
    let message = Message {
        transaction_id: 7,
        flags: Flags::standard_response(),
        question: None,
        answers: vec![ answer("a.example", Record::A(A { address: Ipv4Addr::new(10, 0, 0, 1) })) ],
        authorities: vec![],
        additionals: vec![],
    };

    let mut bytes = message.to_bytes().unwrap();
    bytes.truncate(bytes.len() - 1);

    assert_eq!(Message::from_bytes(&bytes), Err(WireError::BufferOverrun));
}


#[test]
fn wks_ports_survive() {
    let wks = WKS::from_ports(Ipv4Addr::new(192, 0, 2, 25), 6, &[ 21, 25, 80 ]);
    let message = Message {
        transaction_id: 7,
        flags: Flags::standard_response(),
        question: None,
        answers: vec![ answer("mail.example", Record::WKS(wks)) ],
        authorities: vec![],
        additionals: vec![],
    };

    match &round_trip(&message).answers[0].record {
        Record::WKS(wks) => assert_eq!(wks.ports(), vec![ 21, 25, 80 ]),
        other            => panic!("Expected a WKS record, got {:?}", other),
    }
}


#[test]
fn compressed_and_uncompressed_names_agree() {
    let mut buf = encode_name("example.com").unwrap();
    let suffix_at = buf.len();
    buf.extend(&[ 0x03, b'w', b'w', b'w', 0xc0, 0x00 ]);

    let plain = encode_name("www.example.com").unwrap();

    assert_eq!(decode_name(&buf, suffix_at).map(|(name, _)| name),
               decode_name(&plain, 0).map(|(name, _)| name));
}


#[test]
fn oversized_name() {
    let name = vec![ "abcdefghijklmnopqrstuvwxyzabcdefghijklmnopqrstuvwxyzabcdefghijk"; 5 ].join(".");

    let error = encode_name(&name).unwrap_err();
    assert_eq!(error, WireError::NameTooLong(321));
    assert_eq!(error.rcode(), RCODE_BAD_NAME);
}


#[test]
fn odd_label_bytes_survive_reencoding() {
    let mut bytes = vec![
        0x00, 0x2a, 0x81, 0x80,  // transaction ID and flags
        0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00,  // counts
        0x03, b'a', b'.', b'b',  // one label with a dot in it
        0x3f,  // then 63 bytes that are not text
    ];
    bytes.extend(vec![ 0xFF; 63 ]);
    bytes.extend(&[
        0x00,  // end of name
        0x00, 0x01, 0x00, 0x01,  // A, IN
        0x00, 0x00, 0x00, 0x3c,  // TTL
        0x00, 0x04, 0xc0, 0x00, 0x02, 0x01,  // 192.0.2.1
    ]);

    let message = Message::from_bytes(&bytes).unwrap();
    assert!(message.answers[0].qname.starts_with("a\\.b.\\255\\255"));
    assert_eq!(message.to_bytes().unwrap(), bytes);
}
