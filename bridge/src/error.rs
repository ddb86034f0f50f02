//! Error types for the multi-signature bridge contract.

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization
    // ========================================================================

    #[error("Forbidden: caller does not hold the required role")]
    Forbidden,

    // ========================================================================
    // Configuration
    // ========================================================================

    #[error("Zero value not allowed")]
    ZeroValue,

    #[error("Invalid fee value: {fee_bps} bps exceeds the {max_bps} bps cap")]
    InvalidFee { fee_bps: u32, max_bps: u32 },

    #[error("Minimum amount {min_amount} exceeds maximum amount {max_amount}")]
    MinExceedsMax {
        min_amount: Uint128,
        max_amount: Uint128,
    },

    #[error("Bridge is already paused")]
    AlreadyPaused,

    #[error("Bridge is not paused")]
    NotPaused,

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    // ========================================================================
    // Deposit validation
    // ========================================================================

    #[error("Bridge is paused")]
    Paused,

    #[error("Zero amount")]
    ZeroAmount,

    #[error("Invalid destination chain: {chain_id}")]
    InvalidDestination { chain_id: u64 },

    #[error("Amount below minimum of {min_amount}")]
    MinAmountUnderflow { min_amount: Uint128 },

    #[error("Amount above maximum of {max_amount}")]
    MaxAmountOverflow { max_amount: Uint128 },

    // ========================================================================
    // Attestation integrity
    // ========================================================================

    #[error("Attestation expired: deadline {deadline} has passed")]
    Expired { deadline: u64 },

    #[error("Invalid signatures length: {got} bytes is not a positive multiple of 65")]
    InvalidSignatureLength { got: usize },

    #[error("Not enough confirmations: got {got}, need {required}")]
    NotEnoughConfirmations { got: u32, required: u32 },

    #[error("Recovered address {signer} is not a signer")]
    NotASigner { signer: String },

    #[error("Duplicate signature from signer {signer}")]
    SameSigner { signer: String },

    #[error("Transaction already executed: {tx_id}")]
    AlreadyExecuted { tx_id: String },

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Invalid hash length: expected 32 bytes, got {got}")]
    InvalidHashLength { got: usize },
}
