//! Recoverable-ECDSA signature handling.
//!
//! An attestation carries one or more concatenated 65-byte secp256k1
//! signatures (64-byte r||s followed by one recovery byte; 27/28 is accepted
//! and normalized). Signer identity is the recovery address: the last 20
//! bytes of keccak256 over the uncompressed public key body.

use cosmwasm_std::{Api, Binary};

use crate::error::ContractError;
use crate::hash::keccak256;

/// Byte length of a single recoverable signature
pub const SIGNATURE_LENGTH: usize = 65;

/// Split a signature blob into 65-byte slices.
///
/// Fails unless the blob length is a positive multiple of
/// [`SIGNATURE_LENGTH`].
pub fn split_signatures(blob: &Binary) -> Result<Vec<&[u8]>, ContractError> {
    if blob.is_empty() || blob.len() % SIGNATURE_LENGTH != 0 {
        return Err(ContractError::InvalidSignatureLength { got: blob.len() });
    }
    Ok(blob.chunks(SIGNATURE_LENGTH).collect())
}

/// Recover the signing address from a message hash and a 65-byte signature.
///
/// This is the single trust primitive of the execute path; the control flow
/// never inlines recovery logic.
pub fn recover_signer(
    api: &dyn Api,
    msg_hash: &[u8; 32],
    signature: &[u8],
) -> Result<[u8; 20], ContractError> {
    if signature.len() != SIGNATURE_LENGTH {
        return Err(ContractError::InvalidSignatureLength {
            got: signature.len(),
        });
    }

    let (rs, v) = signature.split_at(SIGNATURE_LENGTH - 1);
    let recovery_id = match v[0] {
        0 | 1 => v[0],
        27 | 28 => v[0] - 27,
        _ => return Err(ContractError::InvalidSignature),
    };

    let pubkey = api
        .secp256k1_recover_pubkey(msg_hash, rs, recovery_id)
        .map_err(|_| ContractError::InvalidSignature)?;

    Ok(recovery_address(&pubkey))
}

/// Derive the 20-byte recovery address from an uncompressed SEC1 public key
/// (65 bytes, 0x04 prefix).
pub fn recovery_address(pubkey: &[u8]) -> [u8; 20] {
    let hash = keccak256(&pubkey[1..]);
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

/// Parse a signer identity string ("0x" + 40 hex chars) into address bytes.
pub fn parse_signer_address(s: &str) -> Result<[u8; 20], ContractError> {
    let hex_part = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    if hex_part.len() != 40 {
        return Err(ContractError::InvalidAddress {
            reason: format!("signer address must be 20 bytes of hex, got {}", s),
        });
    }
    let bytes = hex::decode(hex_part).map_err(|_| ContractError::InvalidAddress {
        reason: format!("signer address is not valid hex: {}", s),
    })?;
    let mut address = [0u8; 20];
    address.copy_from_slice(&bytes);
    Ok(address)
}

/// Render signer address bytes as the canonical lowercase 0x-hex identity.
pub fn format_signer_address(address: &[u8; 20]) -> String {
    format!("0x{}", hex::encode(address))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::mock_dependencies;
    use k256::ecdsa::SigningKey;

    fn test_key(seed: u8) -> SigningKey {
        SigningKey::from_slice(&[seed; 32]).unwrap()
    }

    fn address_of(key: &SigningKey) -> [u8; 20] {
        let encoded = key.verifying_key().to_encoded_point(false);
        recovery_address(encoded.as_bytes())
    }

    fn sign(key: &SigningKey, msg_hash: &[u8; 32]) -> [u8; 65] {
        let (sig, recovery_id) = key.sign_prehash_recoverable(msg_hash).unwrap();
        let mut out = [0u8; 65];
        out[..64].copy_from_slice(&sig.to_bytes());
        out[64] = recovery_id.to_byte();
        out
    }

    #[test]
    fn test_recover_round_trip() {
        let deps = mock_dependencies();
        let key = test_key(1);
        let msg_hash = keccak256(b"attestation");

        let signature = sign(&key, &msg_hash);
        let recovered = recover_signer(&deps.api, &msg_hash, &signature).unwrap();

        assert_eq!(recovered, address_of(&key));
    }

    #[test]
    fn test_recover_accepts_ethereum_style_v() {
        let deps = mock_dependencies();
        let key = test_key(2);
        let msg_hash = keccak256(b"attestation");

        let mut signature = sign(&key, &msg_hash);
        signature[64] += 27;

        let recovered = recover_signer(&deps.api, &msg_hash, &signature).unwrap();
        assert_eq!(recovered, address_of(&key));
    }

    #[test]
    fn test_recover_rejects_bad_recovery_byte() {
        let deps = mock_dependencies();
        let key = test_key(3);
        let msg_hash = keccak256(b"attestation");

        let mut signature = sign(&key, &msg_hash);
        signature[64] = 9;

        let err = recover_signer(&deps.api, &msg_hash, &signature).unwrap_err();
        assert_eq!(err, ContractError::InvalidSignature);
    }

    #[test]
    fn test_recover_other_message_yields_other_address() {
        let deps = mock_dependencies();
        let key = test_key(4);
        let msg_hash = keccak256(b"attestation");
        let other_hash = keccak256(b"tampered");

        let signature = sign(&key, &msg_hash);
        let recovered = recover_signer(&deps.api, &other_hash, &signature).unwrap();

        // Recovery succeeds but yields an address that is not the signer's
        assert_ne!(recovered, address_of(&key));
    }

    #[test]
    fn test_split_signatures() {
        let blob = Binary::from(vec![0u8; 130]);
        let slices = split_signatures(&blob).unwrap();
        assert_eq!(slices.len(), 2);
        assert!(slices.iter().all(|s| s.len() == 65));
    }

    #[test]
    fn test_split_rejects_empty_and_partial() {
        let err = split_signatures(&Binary::from(vec![])).unwrap_err();
        assert_eq!(err, ContractError::InvalidSignatureLength { got: 0 });

        let err = split_signatures(&Binary::from(vec![0u8; 20])).unwrap_err();
        assert_eq!(err, ContractError::InvalidSignatureLength { got: 20 });

        let err = split_signatures(&Binary::from(vec![0u8; 66])).unwrap_err();
        assert_eq!(err, ContractError::InvalidSignatureLength { got: 66 });
    }

    #[test]
    fn test_parse_signer_address() {
        let key = test_key(5);
        let address = address_of(&key);
        let formatted = format_signer_address(&address);

        assert_eq!(parse_signer_address(&formatted).unwrap(), address);
        // Mixed-prefix and upper-case hex normalize to the same bytes
        let upper = format!("0X{}", hex::encode(address).to_uppercase());
        assert_eq!(parse_signer_address(&upper).unwrap(), address);

        assert!(parse_signer_address("0x1234").is_err());
        assert!(parse_signer_address("0xzz34567890123456789012345678901234567890").is_err());
    }
}
