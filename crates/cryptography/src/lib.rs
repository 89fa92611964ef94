//! Cryptographic collaborators for the Neo script SDK.
//!
//! Two services are provided to the script layer:
//! - [`hash`]: the Hash160 digest that turns a finalized script into
//!   an account identifier
//! - [`ecc`]: SEC1 encoding of secp256r1 public keys

pub mod ecc;
pub mod error;
pub mod hash;

pub use ecc::{ECPoint, EncodePoint};
pub use error::{CryptoError, CryptoResult};
pub use hash::{hash160, ripemd160, script_hash, sha256};
