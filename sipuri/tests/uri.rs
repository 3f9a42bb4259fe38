use assert_matches::assert_matches;
use sipuri::{decompose, Error, SipUri};

macro_rules! uri_test_ok {
    (name: $name:ident, input: $input:literal, expected: ($scheme:literal, $host:literal, $params:literal, $headers:literal)) => {
        #[test]
        fn $name() -> sipuri::Result<()> {
            let uri = SipUri::parse($input)?;

            assert_eq!(uri.scheme, $scheme);
            assert_eq!(uri.host, $host);
            assert_eq!(uri.parameters, $params);
            assert_eq!(uri.headers, $headers);

            let mut buf = [0u8; 1024];
            let n = uri.serialize_into(&mut buf)?;
            assert_eq!(&buf[..n], $input.as_bytes());

            Ok(())
        }
    };
}

uri_test_ok! {
    name: uri_test_1,
    input: "sip:user:password@host:port;uri-parameters?headers",
    expected: ("sip", "user:password@host:port", "uri-parameters", "headers")
}

uri_test_ok! {
    name: uri_test_2,
    input: "sip:alice@atlanta.com",
    expected: ("sip", "alice@atlanta.com", "", "")
}

uri_test_ok! {
    name: uri_test_3,
    input: "sips:alice@atlanta.com?subject=project%20x&priority=urgent",
    expected: ("sips", "alice@atlanta.com", "", "subject=project%20x&priority=urgent")
}

uri_test_ok! {
    name: uri_test_4,
    input: "sip:alice:secretword@atlanta.com;transport=tcp",
    expected: ("sip", "alice:secretword@atlanta.com", "transport=tcp", "")
}

uri_test_ok! {
    name: uri_test_5,
    input: "sip:+1-212-555-1212:1234@gateway.com;user=phone",
    expected: ("sip", "+1-212-555-1212:1234@gateway.com", "user=phone", "")
}

uri_test_ok! {
    name: uri_test_6,
    input: "sip:alice;day=tuesday@atlanta.com",
    expected: ("sip", "alice", "day=tuesday@atlanta.com", "")
}

uri_test_ok! {
    name: uri_test_7,
    input: "sip:p2.domain.com;lr",
    expected: ("sip", "p2.domain.com", "lr", "")
}

uri_test_ok! {
    name: uri_test_8,
    input: "sips:1212@gateway.com",
    expected: ("sips", "1212@gateway.com", "", "")
}

uri_test_ok! {
    name: uri_test_9,
    input: "sip:alice@192.0.2.4",
    expected: ("sip", "alice@192.0.2.4", "", "")
}

uri_test_ok! {
    name: uri_test_10,
    input: "sip:atlanta.com;method=REGISTER?to=alice%40atlanta.com",
    expected: ("sip", "atlanta.com", "method=REGISTER", "to=alice%40atlanta.com")
}

uri_test_ok! {
    name: uri_test_11,
    input: "sip:bob@[::1]:5060;transport=udp;lr",
    expected: ("sip", "bob@[::1]:5060", "transport=udp;lr", "")
}

uri_test_ok! {
    name: uri_test_12,
    input: "tel:+358-555-1234567",
    expected: ("tel", "+358-555-1234567", "", "")
}

#[test]
fn test_uri_inside_header_line() {
    let line = b"Contact: <sip:alice@pc33.atlanta.com;transport=tcp>;expires=3600\r\n";
    let start = line.iter().position(|&b| b == b'<').unwrap() + 1;
    let end = line.iter().position(|&b| b == b'>').unwrap();

    let uri = decompose(line, start, end).unwrap();

    assert_eq!(uri.scheme, "sip");
    assert_eq!(uri.host, "alice@pc33.atlanta.com");
    assert_eq!(uri.parameters, "transport=tcp");
    assert!(uri.headers.is_empty());
    assert_eq!(uri.to_string(), "sip:alice@pc33.atlanta.com;transport=tcp");
}

#[test]
fn test_request_line_uri() {
    let line = b"INVITE sip:bob@biloxi.com SIP/2.0\r\n";
    let uri = decompose(line, 7, 25).unwrap();

    assert_eq!(uri.scheme, "sip");
    assert_eq!(uri.host, "bob@biloxi.com");
    assert_eq!(uri.host.range(), 11..25);
}

#[test]
fn test_missing_scheme() {
    assert_matches!(SipUri::parse("alice@atlanta.com;lr"), Err(Error::MalformedUri));
    assert_matches!(decompose(b"Bob <sip:bob@biloxi.com>", 0, 4), Err(Error::MalformedUri));
}

#[test]
fn test_invalid_uri_error_message() {
    let uri = SipUri::parse("sips:").unwrap();
    let err = uri.serialize_into(&mut [0u8; 32]).unwrap_err();

    assert_eq!(err.to_string(), "Invalid SIP URI: scheme and host are required");
}

#[test]
fn test_encoded_len_sizes_buffer() {
    let uri = SipUri::parse("sip:alice@atlanta.com?subject=project%20x").unwrap();
    let mut buf = vec![0u8; uri.encoded_len()];

    assert_eq!(uri.serialize_into(&mut buf).unwrap(), buf.len());
    assert_eq!(buf, b"sip:alice@atlanta.com?subject=project%20x");
}
