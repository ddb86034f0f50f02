//! Message types for the multi-signature bridge contract.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

use crate::state::Role;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Bootstrap admin address
    pub admin: String,
    /// Address of the cw20 token burned on deposit and minted on execute.
    /// The bridge must be configured as the token's minter.
    pub token: String,
    /// Initial signer set (20-byte recovery addresses as 0x-hex); must be
    /// non-empty
    pub signers: Vec<String>,
    /// Initial executor addresses; must be non-empty
    pub executors: Vec<String>,
    /// Initially allowed destination chain ids
    pub destination_chain_ids: Vec<u64>,
    /// Input fee in basis points (0-200)
    pub fee_bps: u32,
    /// Minimum deposit amount (zero = no bound)
    pub min_amount: Uint128,
    /// Maximum deposit amount (zero = no bound)
    pub max_amount: Uint128,
    /// Required count of distinct signer signatures per execute (>= 1)
    pub min_confirmations: u32,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Deposit Path
    // ========================================================================
    /// Burn `amount` of the bridged token from the caller for release on the
    /// destination chain. Requires an allowance granted to the bridge.
    ///
    /// Authorization: any token holder
    Deposit {
        /// Amount to bridge (burned in full; the fee split is informational
        /// to off-chain signers via the FeeAmount query)
        amount: Uint128,
        /// Destination chain id; must be in the allowed set
        dest_chain_id: u64,
    },

    // ========================================================================
    // Execute Path
    // ========================================================================
    /// Mint `amount` to `receiver`, authorized by a threshold multi-signature
    /// attestation over `(receiver, bridge, amount, chain, tx_id, deadline)`.
    /// Succeeds at most once per `tx_id`.
    ///
    /// Authorization: Executor role
    Execute {
        /// Receiver of the minted tokens on this chain
        receiver: String,
        /// Amount to mint
        amount: Uint128,
        /// 32-byte source-chain transaction identifier (replay key)
        tx_id: Binary,
        /// Unix-time bound after which the attestation is unusable
        deadline: u64,
        /// Concatenated 65-byte recoverable signatures, no delimiter
        signatures: Binary,
    },

    // ========================================================================
    // Role Management
    // ========================================================================
    /// Grant a role to a member. Signer members are 0x-hex recovery
    /// addresses; all other roles take a bech32 address.
    ///
    /// Authorization: Admin only
    GrantRole { role: Role, member: String },

    /// Revoke a role from a member.
    ///
    /// Authorization: Admin only
    RevokeRole { role: Role, member: String },

    // ========================================================================
    // Configuration
    // ========================================================================
    /// Set the required signature count.
    ///
    /// Authorization: Admin only
    SetMinConfirmations { min_confirmations: u32 },

    /// Set the input fee in basis points (0-200).
    ///
    /// Authorization: Admin only
    SetFees { fee_bps: u32 },

    /// Set the deposit amount bounds as an atomic pair; zero disables a
    /// bound.
    ///
    /// Authorization: Admin only
    SetLimitAmounts {
        min_amount: Uint128,
        max_amount: Uint128,
    },

    /// Toggle a destination chain id in the allowed set. Calling twice with
    /// the same id restores the original membership.
    ///
    /// Authorization: Admin only
    SetDestinationChainId { chain_id: u64 },

    /// Pause deposits. The execute path is deliberately not gated by pause.
    ///
    /// Authorization: Admin only
    Pause {},

    /// Resume deposits.
    ///
    /// Authorization: Admin only
    Unpause {},
}

// ============================================================================
// Query Messages
// ============================================================================

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Contract configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Role membership check
    #[returns(HasRoleResponse)]
    HasRole { role: Role, member: String },

    /// Whether a destination chain id is currently allowed
    #[returns(DestinationChainIdResponse)]
    DestinationChainId { chain_id: u64 },

    /// Fee split for a given amount under the current fee configuration
    #[returns(FeeAmountResponse)]
    FeeAmount { amount: Uint128 },

    /// Whether a source tx id has already been executed
    #[returns(ExecutedResponse)]
    Executed { tx_id: Binary },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub token: Addr,
    pub fee_bps: u32,
    pub min_amount: Uint128,
    pub max_amount: Uint128,
    pub min_confirmations: u32,
    pub paused: bool,
}

#[cw_serde]
pub struct HasRoleResponse {
    pub has_role: bool,
}

#[cw_serde]
pub struct DestinationChainIdResponse {
    pub allowed: bool,
}

#[cw_serde]
pub struct FeeAmountResponse {
    /// floor(amount * fee_bps / 10000)
    pub fee_amount: Uint128,
    /// amount - fee_amount
    pub after_fee_amount: Uint128,
}

#[cw_serde]
pub struct ExecutedResponse {
    pub executed: bool,
}
