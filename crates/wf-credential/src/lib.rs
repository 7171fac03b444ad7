use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;
use wf_api_types::IdentityRecord;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("malformed token: expected 3 dot-separated segments, found {0}")]
    MalformedToken(usize),
    #[error("payload segment is not valid base64: {0}")]
    DecodeError(#[from] base64::DecodeError),
    #[error("payload is not well-formed JSON: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("identity payload is missing claim `{0}`")]
    IncompleteIdentity(&'static str),
}

/// Decode a compact sign-in credential into an [`IdentityRecord`].
///
/// The credential is three dot-separated segments; the second segment is
/// base64url-encoded JSON carrying the identity claims. The issuer's
/// signature (third segment) is **not** verified — the token is trusted as
/// already validated by the identity provider before it reaches this code.
pub fn decode(token: &str) -> Result<IdentityRecord, CredentialError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(CredentialError::MalformedToken(segments.len()));
    }

    let bytes = decode_segment(segments[1])?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes)?;

    Ok(IdentityRecord {
        email: string_claim(&claims, "email")?,
        display_name: string_claim(&claims, "name")?,
        avatar_url: string_claim(&claims, "picture")?,
        subject_id: string_claim(&claims, "sub")?,
    })
}

fn string_claim(
    claims: &serde_json::Value,
    claim: &'static str,
) -> Result<String, CredentialError> {
    claims
        .get(claim)
        .and_then(|v| v.as_str())
        .map(str::to_owned)
        .ok_or(CredentialError::IncompleteIdentity(claim))
}

/// Normalize the URL-safe alphabet to the standard one, restore padding,
/// and decode.
fn decode_segment(segment: &str) -> Result<Vec<u8>, CredentialError> {
    let mut normalized = segment.replace('-', "+").replace('_', "/");
    while normalized.len() % 4 != 0 {
        normalized.push('=');
    }
    Ok(STANDARD.decode(normalized)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    fn token_with_payload(payload: &str) -> String {
        format!("hdr.{}.sig", URL_SAFE_NO_PAD.encode(payload))
    }

    #[test]
    fn decodes_well_formed_token() {
        let token =
            token_with_payload(r#"{"email":"a@b.com","name":"A","picture":"u","sub":"1"}"#);
        let identity = decode(&token).unwrap();
        assert_eq!(identity.email, "a@b.com");
        assert_eq!(identity.display_name, "A");
        assert_eq!(identity.avatar_url, "u");
        assert_eq!(identity.subject_id, "1");
    }

    #[test]
    fn extra_claims_are_ignored() {
        let token = token_with_payload(
            r#"{"email":"a@b.com","name":"A","picture":"u","sub":"1","iss":"issuer","exp":1}"#,
        );
        assert!(decode(&token).is_ok());
    }

    #[test]
    fn rejects_wrong_segment_count() {
        assert!(matches!(
            decode("only-one-segment"),
            Err(CredentialError::MalformedToken(1))
        ));
        assert!(matches!(
            decode("a.b"),
            Err(CredentialError::MalformedToken(2))
        ));
        assert!(matches!(
            decode("a.b.c.d"),
            Err(CredentialError::MalformedToken(4))
        ));
    }

    #[test]
    fn rejects_invalid_base64_payload() {
        assert!(matches!(
            decode("hdr.!!not-base64!!.sig"),
            Err(CredentialError::DecodeError(_))
        ));
    }

    #[test]
    fn rejects_non_json_payload() {
        let token = token_with_payload("not json at all");
        assert!(matches!(decode(&token), Err(CredentialError::ParseError(_))));
    }

    #[test]
    fn rejects_missing_claim() {
        let token = token_with_payload(r#"{"email":"a@b.com","name":"A","picture":"u"}"#);
        assert!(matches!(
            decode(&token),
            Err(CredentialError::IncompleteIdentity("sub"))
        ));
    }

    #[test]
    fn rejects_non_string_claim() {
        let token =
            token_with_payload(r#"{"email":"a@b.com","name":"A","picture":"u","sub":42}"#);
        assert!(matches!(
            decode(&token),
            Err(CredentialError::IncompleteIdentity("sub"))
        ));
    }

    #[test]
    fn accepts_url_safe_alphabet_in_payload() {
        // '?' and '~' encode to '/' and '+' in the standard alphabet; the
        // url-safe form uses '_' and '-' instead.
        let payload = r#"{"email":"a@b.com","name":"??~~","picture":"u","sub":"1"}"#;
        let encoded = URL_SAFE_NO_PAD.encode(payload);
        assert!(encoded.contains('_') || encoded.contains('-'));
        let identity = decode(&format!("hdr.{encoded}.sig")).unwrap();
        assert_eq!(identity.display_name, "??~~");
    }
}
