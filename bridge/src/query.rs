//! Query handlers for the multi-signature bridge contract.

use cosmwasm_std::{Binary, Deps, StdResult, Uint128};

use crate::msg::{
    ConfigResponse, DestinationChainIdResponse, ExecutedResponse, FeeAmountResponse,
    HasRoleResponse,
};
use crate::state::{has_role, Role, CONFIG, DEST_CHAINS, EXECUTED, FEE_DENOMINATOR};

/// Compute `(fee, after_fee)` for an amount at a given fee rate.
///
/// `fee = floor(amount * fee_bps / 10000)`; the remainder stays with the
/// after-fee amount, so the two always sum to `amount`.
pub fn fee_split(fee_bps: u32, amount: Uint128) -> (Uint128, Uint128) {
    let fee_amount = amount.multiply_ratio(fee_bps as u128, FEE_DENOMINATOR);
    (fee_amount, amount - fee_amount)
}

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        token: config.token,
        fee_bps: config.fee_bps,
        min_amount: config.min_amount,
        max_amount: config.max_amount,
        min_confirmations: config.min_confirmations,
        paused: config.paused,
    })
}

/// Query role membership.
pub fn query_has_role(deps: Deps, role: Role, member: String) -> StdResult<HasRoleResponse> {
    Ok(HasRoleResponse {
        has_role: has_role(deps.storage, role, &member)?,
    })
}

/// Query whether a destination chain id is allowed.
pub fn query_destination_chain_id(
    deps: Deps,
    chain_id: u64,
) -> StdResult<DestinationChainIdResponse> {
    Ok(DestinationChainIdResponse {
        allowed: DEST_CHAINS
            .may_load(deps.storage, chain_id)?
            .unwrap_or(false),
    })
}

/// Query the fee split for an amount.
pub fn query_fee_amount(deps: Deps, amount: Uint128) -> StdResult<FeeAmountResponse> {
    let config = CONFIG.load(deps.storage)?;
    let (fee_amount, after_fee_amount) = fee_split(config.fee_bps, amount);
    Ok(FeeAmountResponse {
        fee_amount,
        after_fee_amount,
    })
}

/// Query whether a source tx id has been executed.
pub fn query_executed(deps: Deps, tx_id: Binary) -> StdResult<ExecutedResponse> {
    Ok(ExecutedResponse {
        executed: EXECUTED
            .may_load(deps.storage, tx_id.as_slice())?
            .unwrap_or(false),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_split_zero_rate() {
        let (fee, after) = fee_split(0, Uint128::new(10_000));
        assert_eq!(fee, Uint128::zero());
        assert_eq!(after, Uint128::new(10_000));
    }

    #[test]
    fn test_fee_split_one_percent() {
        let (fee, after) = fee_split(100, Uint128::new(10_000));
        assert_eq!(fee, Uint128::new(100));
        assert_eq!(after, Uint128::new(9_900));
    }

    #[test]
    fn test_fee_split_two_percent() {
        let (fee, after) = fee_split(200, Uint128::new(10_000));
        assert_eq!(fee, Uint128::new(200));
        assert_eq!(after, Uint128::new(9_800));
    }

    #[test]
    fn test_fee_split_floors() {
        // 199 bps of 101: 101 * 199 / 10000 = 2.0099 -> 2
        let (fee, after) = fee_split(199, Uint128::new(101));
        assert_eq!(fee, Uint128::new(2));
        assert_eq!(after, Uint128::new(99));
    }

    #[test]
    fn test_fee_split_sums_to_amount() {
        for bps in [0u32, 1, 37, 100, 199, 200] {
            for amount in [1u128, 99, 10_000, 123_456_789] {
                let amount = Uint128::new(amount);
                let (fee, after) = fee_split(bps, amount);
                assert_eq!(fee + after, amount);
            }
        }
    }
}
