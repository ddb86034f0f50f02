//! Multi-Signature Bridge Contract - Threshold-Attested Cross-Chain Transfers
//!
//! This contract is the trust boundary of a burn/mint bridge. A user burns
//! value here for a destination chain, and a registered set of off-chain
//! signers attests to source-chain events so an executor can mint exactly
//! once per attested transaction.
//!
//! # Deposit Flow (Burn)
//! 1. User grants the bridge an allowance on the bridged cw20 token
//! 2. User calls `Deposit`; the bridge burns the full amount from the user
//! 3. Off-chain signers observe the deposit event and sign an attestation
//!    for the destination chain
//!
//! # Execute Flow (Mint)
//! 1. A relayer collects at least `min_confirmations` signer signatures over
//!    the attestation hash
//! 2. An executor submits `Execute` with the concatenated signatures
//! 3. The bridge verifies expiry, threshold, signer membership and
//!    uniqueness, and replay state, then mints to the receiver
//!
//! # Security
//! - Threshold multi-signature verification with recoverable secp256k1
//! - Attestation hash bound to this contract address and chain id
//! - Replay protection via a permanent per-tx-id execution record,
//!   written before the external mint call
//! - Role-gated administration (Admin, Manager, Signer, Executor)
//! - Deposit-side pause and min/max amount limits

pub mod contract;
pub mod error;
mod execute;
pub mod hash;
pub mod msg;
mod query;
pub mod signature;
pub mod state;

pub use crate::error::ContractError;
pub use crate::hash::{attestation_hash, keccak256};
pub use crate::signature::{recovery_address, SIGNATURE_LENGTH};
pub use crate::state::Role;
