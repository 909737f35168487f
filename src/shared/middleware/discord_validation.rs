use axum::body::Bytes;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};

pub const SIGNATURE_HEADER: &str = "X-Signature-Ed25519";
pub const TIMESTAMP_HEADER: &str = "X-Signature-Timestamp";

const REJECTION_BODY: &str = "Bad request signature.";

/// Request bytes that passed signature verification.
///
/// The field is private and this module exposes no other constructor, so
/// the only way to obtain one is through [`validate_interaction`].
/// [`Interaction::parse`](crate::shared::structs::discord::interaction::Interaction::parse)
/// consumes a `VerifiedBody`, which keeps unverified bytes away from the
/// dispatcher.
#[derive(Debug, Clone)]
pub struct VerifiedBody {
    bytes: Bytes,
}

impl VerifiedBody {
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Uniform rejection for every authentication failure. Missing headers,
/// malformed hex, a wrong key and a tampered body all produce the same
/// response so the endpoint does not reveal which check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureRejection;

impl IntoResponse for SignatureRejection {
    fn into_response(self) -> Response {
        (StatusCode::UNAUTHORIZED, REJECTION_BODY).into_response()
    }
}

/// Checks the signed-request envelope: the Ed25519 signature in
/// [`SIGNATURE_HEADER`] must cover the timestamp header value followed by
/// the raw body bytes. Absent headers fail immediately, before any
/// decoding or signature arithmetic.
pub fn validate_interaction(
    headers: &HeaderMap,
    body: Bytes,
    public_key: &str,
) -> Result<VerifiedBody, SignatureRejection> {
    let signature = header_value(headers, SIGNATURE_HEADER).ok_or(SignatureRejection)?;
    let timestamp = header_value(headers, TIMESTAMP_HEADER).ok_or(SignatureRejection)?;

    validate(&body, &signature, &timestamp, public_key)?;

    Ok(VerifiedBody { bytes: body })
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().map(ToString::to_string).ok())
}

fn validate(
    body: &[u8],
    signature: &str,
    timestamp: &str,
    public_key: &str,
) -> Result<(), SignatureRejection> {
    let signature_bytes = hex::decode(signature).map_err(|_| SignatureRejection)?;
    let public_key_bytes = hex::decode(public_key).map_err(|_| SignatureRejection)?;

    let mut message = Vec::with_capacity(timestamp.len() + body.len());
    message.extend_from_slice(timestamp.as_bytes());
    message.extend_from_slice(body);

    match nacl::sign::verify(&signature_bytes, &message, &public_key_bytes) {
        Ok(true) => Ok(()),
        Ok(false) | Err(_) => Err(SignatureRejection),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use ed25519_dalek::{Signer, SigningKey};

    const TEST_SEED: [u8; 32] = [7; 32];

    fn signing_key() -> SigningKey {
        SigningKey::from_bytes(&TEST_SEED)
    }

    fn public_key_hex() -> String {
        hex::encode(signing_key().verifying_key().to_bytes())
    }

    fn signed_headers(body: &[u8], timestamp: &str) -> HeaderMap {
        let mut message = timestamp.as_bytes().to_vec();
        message.extend_from_slice(body);
        let signature = signing_key().sign(&message);

        let mut headers = HeaderMap::new();
        headers.insert(
            SIGNATURE_HEADER,
            HeaderValue::from_str(&hex::encode(signature.to_bytes())).unwrap(),
        );
        headers.insert(TIMESTAMP_HEADER, HeaderValue::from_str(timestamp).unwrap());
        headers
    }

    #[test]
    fn accepts_correctly_signed_body() {
        let body = Bytes::from_static(br#"{"type":1}"#);
        let headers = signed_headers(&body, "1700000000");

        let verified = validate_interaction(&headers, body.clone(), &public_key_hex())
            .expect("Correctly signed body should verify.");
        assert_eq!(verified.bytes(), body.as_ref());
    }

    #[test]
    fn rejects_missing_signature_header() {
        let body = Bytes::from_static(br#"{"type":1}"#);
        let mut headers = signed_headers(&body, "1700000000");
        headers.remove(SIGNATURE_HEADER);

        assert!(validate_interaction(&headers, body, &public_key_hex()).is_err());
    }

    #[test]
    fn rejects_missing_timestamp_header() {
        let body = Bytes::from_static(br#"{"type":1}"#);
        let mut headers = signed_headers(&body, "1700000000");
        headers.remove(TIMESTAMP_HEADER);

        assert!(validate_interaction(&headers, body, &public_key_hex()).is_err());
    }

    #[test]
    fn rejects_tampered_body() {
        let body = Bytes::from_static(br#"{"type":1}"#);
        let headers = signed_headers(&body, "1700000000");
        let tampered = Bytes::from_static(br#"{"type":2}"#);

        assert!(validate_interaction(&headers, tampered, &public_key_hex()).is_err());
    }

    #[test]
    fn rejects_tampered_timestamp() {
        let body = Bytes::from_static(br#"{"type":1}"#);
        let mut headers = signed_headers(&body, "1700000000");
        headers.insert(TIMESTAMP_HEADER, HeaderValue::from_static("1700000001"));

        assert!(validate_interaction(&headers, body, &public_key_hex()).is_err());
    }

    #[test]
    fn rejects_non_hex_signature() {
        let body = Bytes::from_static(br#"{"type":1}"#);
        let mut headers = signed_headers(&body, "1700000000");
        headers.insert(SIGNATURE_HEADER, HeaderValue::from_static("not-hex"));

        assert!(validate_interaction(&headers, body, &public_key_hex()).is_err());
    }

    #[test]
    fn rejects_wrong_public_key() {
        let body = Bytes::from_static(br#"{"type":1}"#);
        let headers = signed_headers(&body, "1700000000");
        let other_key = hex::encode(SigningKey::from_bytes(&[9; 32]).verifying_key().to_bytes());

        assert!(validate_interaction(&headers, body, &other_key).is_err());
    }
}
