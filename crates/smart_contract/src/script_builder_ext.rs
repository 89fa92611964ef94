//! Typed-parameter pushes and contract invocation on top of [`ScriptBuilder`].

use crate::contract_parameter::{ContractParameter, ContractParameterValue};
use crate::error::{ContractError, ContractResult};
use neo_sdk_core::UInt160;
use neo_sdk_vm::interop_service::SYSTEM_CONTRACT_CALL;
use neo_sdk_vm::{CallFlags, Script, ScriptBuilder};
use tracing::debug;

/// Extension methods that push [`ContractParameter`]s.
///
/// Every method is atomic: when it fails, the builder holds exactly the
/// bytes it held before the call.
pub trait ScriptBuilderExt {
    /// Pushes one parameter. Arrays and maps push their elements in reverse
    /// and then pack them, so unpacking restores declaration order.
    fn emit_push_parameter(&mut self, parameter: &ContractParameter) -> ContractResult<&mut Self>;

    /// Pushes `items` and packs them into an array.
    fn create_array(&mut self, items: &[ContractParameter]) -> ContractResult<&mut Self>;

    /// Pushes `entries` and packs them into a map.
    fn create_map(
        &mut self,
        entries: &[(ContractParameter, ContractParameter)],
    ) -> ContractResult<&mut Self>;

    /// Emits a `System.Contract.Call` of `method` on `script_hash`.
    ///
    /// Layout: packed arguments, call flags, method name, script hash, syscall.
    fn emit_dynamic_call(
        &mut self,
        script_hash: &UInt160,
        method: &str,
        flags: CallFlags,
        args: &[ContractParameter],
    ) -> ContractResult<&mut Self>;
}

fn push_parameter(sb: &mut ScriptBuilder, parameter: &ContractParameter) -> ContractResult<()> {
    match &parameter.value {
        ContractParameterValue::Boolean(b) => {
            sb.emit_push_bool(*b)?;
        }
        ContractParameterValue::Integer(i) => {
            sb.emit_push_bigint(i)?;
        }
        ContractParameterValue::ByteArray(bytes) | ContractParameterValue::Signature(bytes) => {
            sb.emit_push(bytes)?;
        }
        ContractParameterValue::String(s) => {
            sb.emit_push_string(s)?;
        }
        ContractParameterValue::Hash160(h) => {
            sb.emit_push(&h.to_array())?;
        }
        ContractParameterValue::Hash256(h) => {
            sb.emit_push(&h.to_array())?;
        }
        ContractParameterValue::PublicKey(key) => {
            sb.emit_push(key)?;
        }
        ContractParameterValue::Array(items) => push_array(sb, items)?,
        ContractParameterValue::Map(entries) => push_map(sb, entries)?,
        ContractParameterValue::Any | ContractParameterValue::InteropInterface => {
            return Err(ContractError::UnsupportedVariant(parameter.param_type()));
        }
    }
    Ok(())
}

fn push_array(sb: &mut ScriptBuilder, items: &[ContractParameter]) -> ContractResult<()> {
    for item in items.iter().rev() {
        push_parameter(sb, item)?;
    }
    sb.emit_push_int(len_as_i64(items.len())?)?.emit_pack()?;
    Ok(())
}

fn push_map(
    sb: &mut ScriptBuilder,
    entries: &[(ContractParameter, ContractParameter)],
) -> ContractResult<()> {
    for (key, value) in entries.iter().rev() {
        push_parameter(sb, value)?;
        push_parameter(sb, key)?;
    }
    sb.emit_push_int(len_as_i64(entries.len())?)?.emit_pack_map()?;
    Ok(())
}

fn len_as_i64(len: usize) -> ContractResult<i64> {
    i64::try_from(len).map_err(|_| ContractError::invalid_argument("too many elements"))
}

impl ScriptBuilderExt for ScriptBuilder {
    fn emit_push_parameter(&mut self, parameter: &ContractParameter) -> ContractResult<&mut Self> {
        self.atomic(|sb| push_parameter(sb, parameter))?;
        Ok(self)
    }

    fn create_array(&mut self, items: &[ContractParameter]) -> ContractResult<&mut Self> {
        self.atomic(|sb| push_array(sb, items))?;
        Ok(self)
    }

    fn create_map(
        &mut self,
        entries: &[(ContractParameter, ContractParameter)],
    ) -> ContractResult<&mut Self> {
        self.atomic(|sb| push_map(sb, entries))?;
        Ok(self)
    }

    fn emit_dynamic_call(
        &mut self,
        script_hash: &UInt160,
        method: &str,
        flags: CallFlags,
        args: &[ContractParameter],
    ) -> ContractResult<&mut Self> {
        if method.is_empty() {
            return Err(ContractError::invalid_argument("method name is empty"));
        }
        self.atomic(|sb| {
            push_array(sb, args)?;
            sb.emit_push_int(i64::from(flags.bits()))?
                .emit_push_string(method)?
                .emit_push(&script_hash.to_array())?
                .emit_syscall(SYSTEM_CONTRACT_CALL)?;
            Ok::<_, ContractError>(())
        })?;
        debug!(%script_hash, method, args = args.len(), "contract call assembled");
        Ok(self)
    }
}

/// Builds a complete contract invocation script.
pub fn assemble_contract_call(
    script_hash: &UInt160,
    method: &str,
    args: &[ContractParameter],
    flags: CallFlags,
) -> ContractResult<Script> {
    let mut sb = ScriptBuilder::new();
    sb.emit_dynamic_call(script_hash, method, flags, args)?;
    Ok(sb.to_script())
}
