//! Attestation hash computation.
//!
//! Signers authorize a mint by signing the keccak256 hash of a fixed 192-byte
//! buffer of six 32-byte fields:
//!
//! ```text
//! receiver32 || bridge32 || amount32 || chain_key32 || tx_id32 || deadline32
//! ```
//!
//! Address fields are keccak256 of the address string bytes so the encoding
//! is reproducible off-chain without any chain-specific canonicalization. The
//! chain key is keccak256 of this chain's id string, which binds a signature
//! to one bridge contract on one chain.

use tiny_keccak::{Hasher, Keccak};

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Encode an account identity (address string) as a 32-byte field.
pub fn encode_account(account: &str) -> [u8; 32] {
    keccak256(account.as_bytes())
}

/// Encode a chain id string as a 32-byte field.
pub fn chain_key(chain_id: &str) -> [u8; 32] {
    keccak256(chain_id.as_bytes())
}

/// Compute the attestation message hash signers sign.
///
/// # Byte layout (192 bytes total)
/// - Bytes 0-31:    receiver account field
/// - Bytes 32-63:   bridge contract account field
/// - Bytes 64-95:   amount (uint256, big-endian, left-padded)
/// - Bytes 96-127:  chain key of this bridge's chain
/// - Bytes 128-159: source transaction id
/// - Bytes 160-191: deadline (uint256, big-endian, left-padded)
pub fn attestation_hash(
    receiver: &str,
    bridge: &str,
    amount: u128,
    chain_id: &str,
    tx_id: &[u8; 32],
    deadline: u64,
) -> [u8; 32] {
    let mut data = [0u8; 192];

    data[0..32].copy_from_slice(&encode_account(receiver));
    data[32..64].copy_from_slice(&encode_account(bridge));

    // uint256 amount - left-padded to 32 bytes, big-endian
    // u128 (16 bytes) goes into bytes 16-31 of the slot
    data[64 + 16..96].copy_from_slice(&amount.to_be_bytes());

    data[96..128].copy_from_slice(&chain_key(chain_id));
    data[128..160].copy_from_slice(tx_id);

    // uint256 deadline - left-padded to 32 bytes, big-endian
    // u64 (8 bytes) goes into bytes 24-31 of the slot
    data[160 + 24..192].copy_from_slice(&deadline.to_be_bytes());

    keccak256(&data)
}

/// Convert 32-byte hash to hex string (for attributes/logging)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}
