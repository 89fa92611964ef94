//! # Neo SDK Core
//!
//! Fixed-width hash types shared by every SDK crate:
//! - `UInt160`: script hashes and account identifiers
//! - `UInt256`: transaction and block hashes
//!
//! ```rust
//! use neo_sdk_core::UInt160;
//!
//! let hash = UInt160::parse("0xd2a4cff31913016155e38e474a2c06d08be276cf").unwrap();
//! assert_eq!(hash.to_array()[0], 0xcf);
//! ```

pub mod error;
pub mod uint160;
pub mod uint256;

pub use error::{PrimitiveError, PrimitiveResult};
pub use uint160::{UInt160, UINT160_SIZE};
pub use uint256::{UInt256, UINT256_SIZE};
