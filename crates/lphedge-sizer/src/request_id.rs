//! Deterministic per-request identifiers.
//!
//! The identifier lets downstream order handling recognise a resubmitted
//! hedge order. It is `keccak256` over the ABI encoding (five 32-byte words)
//! of `(uint256 sequence, address entity, int256 target, uint256 size,
//! address caller)`. A collision can only make an order look like a retry;
//! size and price are validated independently downstream.

use alloy::primitives::{keccak256, Address, B256, I256, U256};
use alloy::sol_types::SolValue;
use std::fmt;

/// Identifier derived from one hedge computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(B256);

impl RequestId {
    /// Derive the identifier from its inputs.
    ///
    /// Pure: the same tuple always yields the same id.
    pub fn derive(
        sequence: u64,
        entity: Address,
        target: I256,
        size: U256,
        caller: Address,
    ) -> Self {
        let encoded = (U256::from(sequence), entity, target, size, caller).abi_encode();
        Self(keccak256(encoded))
    }

    /// Full 32-byte hash.
    pub fn as_b256(&self) -> B256 {
        self.0
    }

    /// 128-bit client order id: the low 16 bytes of the hash.
    pub fn cloid(&self) -> u128 {
        let mut low = [0u8; 16];
        low.copy_from_slice(&self.0[16..]);
        u128::from_be_bytes(low)
    }

    /// Client order id as a `0x`-prefixed 32-digit hex string.
    pub fn cloid_hex(&self) -> String {
        format!("{:#034x}", self.cloid())
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<RequestId> for B256 {
    fn from(id: RequestId) -> Self {
        id.0
    }
}
