//! Interop service catalog.
//!
//! Every host capability a script can invoke through `SYSCALL` is identified
//! by a 32-bit id derived from its ASCII name. The catalog below is built once
//! on first use and is read-only afterwards.

use crate::call_flags::CallFlags;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use tracing::{trace, warn};
use xxhash_rust::xxh32::xxh32;

pub const SYSTEM_CONTRACT_CALL: &str = "System.Contract.Call";
pub const SYSTEM_CONTRACT_CALL_NATIVE: &str = "System.Contract.CallNative";
pub const SYSTEM_CONTRACT_GET_CALL_FLAGS: &str = "System.Contract.GetCallFlags";
pub const SYSTEM_CONTRACT_CREATE_STANDARD_ACCOUNT: &str = "System.Contract.CreateStandardAccount";
pub const SYSTEM_CONTRACT_CREATE_MULTISIG_ACCOUNT: &str = "System.Contract.CreateMultisigAccount";
pub const SYSTEM_CRYPTO_CHECK_SIG: &str = "System.Crypto.CheckSig";
pub const SYSTEM_CRYPTO_CHECK_MULTISIG: &str = "System.Crypto.CheckMultisig";
pub const SYSTEM_ITERATOR_NEXT: &str = "System.Iterator.Next";
pub const SYSTEM_ITERATOR_VALUE: &str = "System.Iterator.Value";
pub const SYSTEM_RUNTIME_CHECK_WITNESS: &str = "System.Runtime.CheckWitness";
pub const SYSTEM_RUNTIME_NOTIFY: &str = "System.Runtime.Notify";
pub const SYSTEM_RUNTIME_LOG: &str = "System.Runtime.Log";
pub const SYSTEM_STORAGE_GET_CONTEXT: &str = "System.Storage.GetContext";
pub const SYSTEM_STORAGE_GET: &str = "System.Storage.Get";
pub const SYSTEM_STORAGE_PUT: &str = "System.Storage.Put";
pub const SYSTEM_STORAGE_DELETE: &str = "System.Storage.Delete";

/// Name, fixed price and required flags for every catalogued service.
const SERVICES: &[(&str, i64, CallFlags)] = &[
    (SYSTEM_CONTRACT_CALL, 1 << 15, CallFlags::READ_ONLY),
    (SYSTEM_CONTRACT_CALL_NATIVE, 0, CallFlags::NONE),
    (SYSTEM_CONTRACT_GET_CALL_FLAGS, 1 << 10, CallFlags::NONE),
    (SYSTEM_CONTRACT_CREATE_STANDARD_ACCOUNT, 0, CallFlags::NONE),
    (SYSTEM_CONTRACT_CREATE_MULTISIG_ACCOUNT, 0, CallFlags::NONE),
    ("System.Contract.NativeOnPersist", 0, CallFlags::STATES),
    ("System.Contract.NativePostPersist", 0, CallFlags::STATES),
    (SYSTEM_CRYPTO_CHECK_SIG, 1 << 15, CallFlags::NONE),
    (SYSTEM_CRYPTO_CHECK_MULTISIG, 0, CallFlags::NONE),
    (SYSTEM_ITERATOR_NEXT, 1 << 15, CallFlags::NONE),
    (SYSTEM_ITERATOR_VALUE, 1 << 4, CallFlags::NONE),
    ("System.Runtime.Platform", 1 << 3, CallFlags::NONE),
    ("System.Runtime.GetNetwork", 1 << 3, CallFlags::NONE),
    ("System.Runtime.GetAddressVersion", 1 << 3, CallFlags::NONE),
    ("System.Runtime.GetTrigger", 1 << 3, CallFlags::NONE),
    ("System.Runtime.GetTime", 1 << 3, CallFlags::NONE),
    ("System.Runtime.GetScriptContainer", 1 << 3, CallFlags::NONE),
    ("System.Runtime.GetExecutingScriptHash", 1 << 4, CallFlags::NONE),
    ("System.Runtime.GetCallingScriptHash", 1 << 4, CallFlags::NONE),
    ("System.Runtime.GetEntryScriptHash", 1 << 4, CallFlags::NONE),
    (SYSTEM_RUNTIME_CHECK_WITNESS, 1 << 10, CallFlags::NONE),
    ("System.Runtime.GetInvocationCounter", 1 << 4, CallFlags::NONE),
    ("System.Runtime.GetRandom", 0, CallFlags::NONE),
    (SYSTEM_RUNTIME_LOG, 1 << 15, CallFlags::ALLOW_NOTIFY),
    (SYSTEM_RUNTIME_NOTIFY, 1 << 15, CallFlags::ALLOW_NOTIFY),
    ("System.Runtime.GetNotifications", 1 << 12, CallFlags::NONE),
    ("System.Runtime.GasLeft", 1 << 4, CallFlags::NONE),
    ("System.Runtime.BurnGas", 1 << 4, CallFlags::NONE),
    ("System.Runtime.CurrentSigners", 1 << 4, CallFlags::NONE),
    (SYSTEM_STORAGE_GET_CONTEXT, 1 << 4, CallFlags::READ_STATES),
    ("System.Storage.GetReadOnlyContext", 1 << 4, CallFlags::READ_STATES),
    ("System.Storage.AsReadOnly", 1 << 4, CallFlags::READ_STATES),
    (SYSTEM_STORAGE_GET, 1 << 15, CallFlags::READ_STATES),
    ("System.Storage.Find", 1 << 15, CallFlags::READ_STATES),
    (SYSTEM_STORAGE_PUT, 1 << 15, CallFlags::WRITE_STATES),
    (SYSTEM_STORAGE_DELETE, 1 << 15, CallFlags::WRITE_STATES),
];

/// Represents an interop descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InteropDescriptor {
    /// The name of the interop method
    pub name: &'static str,

    /// The 32-bit id emitted after `SYSCALL`
    pub hash: u32,

    /// The fee to be charged for using this interop service
    pub price: i64,

    /// The required call flags
    pub required_call_flags: CallFlags,
}

impl fmt::Display for InteropDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:08x})", self.name, self.hash)
    }
}

struct Catalog {
    descriptors: Vec<InteropDescriptor>,
    by_name: HashMap<&'static str, usize>,
    by_hash: HashMap<u32, usize>,
}

impl Catalog {
    fn build() -> Self {
        let mut descriptors = Vec::with_capacity(SERVICES.len());
        let mut by_name = HashMap::with_capacity(SERVICES.len());
        let mut by_hash = HashMap::with_capacity(SERVICES.len());

        for &(name, price, required_call_flags) in SERVICES {
            let descriptor = InteropDescriptor {
                name,
                hash: InteropService::hash_of(name),
                price,
                required_call_flags,
            };
            let index = descriptors.len();
            if let Some(&existing) = by_hash.get(&descriptor.hash) {
                let other: &InteropDescriptor = &descriptors[existing];
                warn!(
                    hash = descriptor.hash,
                    first = other.name,
                    second = name,
                    "interop id collision, keeping first entry"
                );
            } else {
                by_hash.insert(descriptor.hash, index);
            }
            by_name.insert(name, index);
            descriptors.push(descriptor);
        }

        trace!(services = descriptors.len(), "interop catalog initialised");
        Self {
            descriptors,
            by_name,
            by_hash,
        }
    }
}

static CATALOG: Lazy<Catalog> = Lazy::new(Catalog::build);

/// Lookup surface over the process-wide interop catalog.
pub struct InteropService;

impl InteropService {
    /// Computes the id of a service name: XXH32 with seed 0 over its bytes.
    ///
    /// Works for any name, catalogued or not.
    pub fn hash_of(name: &str) -> u32 {
        xxh32(name.as_bytes(), 0)
    }

    /// Returns the cached id of a catalogued service.
    pub fn find_by_name(name: &str) -> Option<u32> {
        Self::descriptor(name).map(|d| d.hash)
    }

    /// Returns the descriptor whose id is `hash`.
    pub fn find_by_id(hash: u32) -> Option<&'static InteropDescriptor> {
        let catalog = Lazy::force(&CATALOG);
        catalog
            .by_hash
            .get(&hash)
            .map(|&index| &catalog.descriptors[index])
    }

    /// Returns the descriptor registered under `name`.
    pub fn descriptor(name: &str) -> Option<&'static InteropDescriptor> {
        let catalog = Lazy::force(&CATALOG);
        catalog
            .by_name
            .get(name)
            .map(|&index| &catalog.descriptors[index])
    }

    /// Gets the price of a service, or `None` if it is not catalogued.
    pub fn price(name: &str) -> Option<i64> {
        Self::descriptor(name).map(|d| d.price)
    }

    /// All catalogued services in registration order.
    pub fn all() -> &'static [InteropDescriptor] {
        &Lazy::force(&CATALOG).descriptors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_of_reference_vectors() {
        assert_eq!(InteropService::hash_of(""), 0x02CC_5D05);
        assert_eq!(InteropService::hash_of("abc"), 0x32D1_53FF);
    }

    #[test]
    fn test_catalog_ids_match_hash_function() {
        for descriptor in InteropService::all() {
            assert_eq!(descriptor.hash, InteropService::hash_of(descriptor.name));
        }
    }

    #[test]
    fn test_lookup_both_ways() {
        let id = InteropService::find_by_name(SYSTEM_CRYPTO_CHECK_SIG).unwrap();
        let descriptor = InteropService::find_by_id(id).unwrap();
        assert_eq!(descriptor.name, SYSTEM_CRYPTO_CHECK_SIG);
        assert_eq!(descriptor.price, 1 << 15);
    }

    #[test]
    fn test_unknown_service() {
        assert!(InteropService::find_by_name("System.Nope").is_none());
        assert!(InteropService::price("System.Nope").is_none());
    }

    #[test]
    fn test_required_flags() {
        let put = InteropService::descriptor(SYSTEM_STORAGE_PUT).unwrap();
        assert_eq!(put.required_call_flags, CallFlags::WRITE_STATES);
        let call = InteropService::descriptor(SYSTEM_CONTRACT_CALL).unwrap();
        assert_eq!(call.required_call_flags, CallFlags::READ_ONLY);
    }
}
