use crate::SignatureHeader;
use std::fmt::Write;

/// Serialise signature metadata back into its header-value form
///
/// The counterpart of [`SignatureHeader::parse`], for clients that sign
/// outbound requests. The signature bytes are Base64-encoded.
#[must_use]
pub fn serialise(header: &SignatureHeader<'_>) -> String {
    let mut buffer = String::new();

    let _ = write!(buffer, "keyId=\"{}\"", header.key_id);

    if let Some(algorithm) = header.algorithm {
        let _ = write!(buffer, ",algorithm=\"{algorithm}\"");
    }

    buffer.push_str(",headers=\"");
    for item in itertools::intersperse(header.headers.iter().copied(), " ") {
        buffer.push_str(item);
    }
    buffer.push('"');

    let _ = write!(
        buffer,
        ",signature=\"{}\"",
        base64_simd::STANDARD.encode_to_string(&header.signature)
    );

    buffer
}

#[cfg(test)]
mod test {
    use crate::SignatureHeader;

    #[test]
    fn roundtrips_with_parse() {
        let header = SignatureHeader {
            key_id: "read",
            headers: vec!["(request-target)", "date", "digest"],
            algorithm: Some("hmac-sha512"),
            signature: b"not a real signature".to_vec(),
        };

        let serialised = super::serialise(&header);
        let reparsed = SignatureHeader::parse(&serialised).unwrap();

        assert_eq!(reparsed.key_id, header.key_id);
        assert_eq!(reparsed.headers, header.headers);
        assert_eq!(reparsed.algorithm, header.algorithm);
        assert_eq!(reparsed.signature, header.signature);
    }

    #[test]
    fn algorithm_is_omitted_when_unspecified() {
        let header = SignatureHeader {
            key_id: "read",
            headers: vec!["date"],
            algorithm: None,
            signature: Vec::new(),
        };

        assert_eq!(
            super::serialise(&header),
            r#"keyId="read",headers="date",signature="""#
        );
    }
}
