//! State definitions for the multi-signature bridge contract.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdResult, Storage, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Configuration
// ============================================================================

/// Contract configuration, mutated only through admin-gated setters.
#[cw_serde]
pub struct Config {
    /// The cw20 token this bridge burns on deposit and mints on execute
    pub token: Addr,
    /// Input fee in basis points, capped at [`MAX_FEE_BPS`]
    pub fee_bps: u32,
    /// Minimum deposit amount (zero = no bound)
    pub min_amount: Uint128,
    /// Maximum deposit amount (zero = no bound)
    pub max_amount: Uint128,
    /// Required count of distinct valid signer signatures per execute
    pub min_confirmations: u32,
    /// Whether deposits are currently paused (execute is unaffected)
    pub paused: bool,
}

// ============================================================================
// Roles
// ============================================================================

/// The closed set of roles known to the bridge.
///
/// Admin manages all other role memberships. Manager exists as a tag but is
/// peer to the other non-admin roles for the operations in scope. Signer
/// members are secp256k1 recovery addresses (lowercase 0x-hex), not bech32
/// addresses, because signers act purely off-chain.
#[cw_serde]
#[derive(Copy)]
pub enum Role {
    Admin,
    Manager,
    Signer,
    Executor,
}

impl Role {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Signer => "signer",
            Role::Executor => "executor",
        }
    }
}

/// Check role membership for a normalized member identity.
pub fn has_role(storage: &dyn Storage, role: Role, member: &str) -> StdResult<bool> {
    Ok(ROLES
        .may_load(storage, (role.as_str(), member))?
        .unwrap_or(false))
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:msig-bridge";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hard cap on the input fee (2%)
pub const MAX_FEE_BPS: u32 = 200;

/// Basis point denominator for fee math
pub const FEE_DENOMINATOR: u128 = 10_000;

// ============================================================================
// Storage
// ============================================================================

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Role membership
/// Key: (role tag, member identity), Value: whether active
pub const ROLES: Map<(&str, &str), bool> = Map::new("roles");

/// Allowed destination chain ids (toggled by admin)
/// Key: chain id, Value: whether allowed
pub const DEST_CHAINS: Map<u64, bool> = Map::new("dest_chains");

/// Execution record for replay protection; never cleared
/// Key: 32-byte source tx id, Value: executed flag
pub const EXECUTED: Map<&[u8], bool> = Map::new("executed");
