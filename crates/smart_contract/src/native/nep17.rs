//! NEP-17 token invocation scripts.

use crate::contract_parameter::ContractParameter;
use crate::error::ContractResult;
use crate::native::{GAS_TOKEN_HASH, NEO_TOKEN_HASH};
use crate::script_builder_ext::assemble_contract_call;
use neo_sdk_core::UInt160;
use neo_sdk_vm::{CallFlags, Script};
use num_bigint::BigInt;

/// Builds invocation scripts for a NEP-17 token contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nep17Token {
    script_hash: UInt160,
}

impl Nep17Token {
    pub const fn new(script_hash: UInt160) -> Self {
        Self { script_hash }
    }

    /// The native NEO token.
    pub const fn neo() -> Self {
        Self::new(NEO_TOKEN_HASH)
    }

    /// The native GAS token.
    pub const fn gas() -> Self {
        Self::new(GAS_TOKEN_HASH)
    }

    pub fn script_hash(&self) -> UInt160 {
        self.script_hash
    }

    fn read_only(&self, method: &str, args: &[ContractParameter]) -> ContractResult<Script> {
        assemble_contract_call(&self.script_hash, method, args, CallFlags::READ_ONLY)
    }

    pub fn symbol_script(&self) -> ContractResult<Script> {
        self.read_only("symbol", &[])
    }

    pub fn decimals_script(&self) -> ContractResult<Script> {
        self.read_only("decimals", &[])
    }

    pub fn total_supply_script(&self) -> ContractResult<Script> {
        self.read_only("totalSupply", &[])
    }

    pub fn balance_of_script(&self, account: &UInt160) -> ContractResult<Script> {
        self.read_only("balanceOf", &[ContractParameter::hash160(*account)])
    }

    /// `transfer(from, to, amount, data)`; `data` defaults to an empty
    /// byte string when absent.
    pub fn transfer_script(
        &self,
        from: &UInt160,
        to: &UInt160,
        amount: impl Into<BigInt>,
        data: Option<ContractParameter>,
    ) -> ContractResult<Script> {
        let args = [
            ContractParameter::hash160(*from),
            ContractParameter::hash160(*to),
            ContractParameter::integer(amount),
            data.unwrap_or_else(|| ContractParameter::byte_array(Vec::new())),
        ];
        assemble_contract_call(&self.script_hash, "transfer", &args, CallFlags::ALL)
    }
}
