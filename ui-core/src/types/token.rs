//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{CoreError, INVALID_ADDRESS};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// A 32-byte on-chain account or mint identifier.
///
/// The UI core never talks to the chain, so this thin local id stands in for
/// the client crate's `Pubkey` and keeps the crate free of solana deps.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address(pub [u8; 32]);

impl Address {
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&bs58::encode(self.0).into_string())
    }
}

impl FromStr for Address {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; 32];
        let len = bs58::decode(s).onto(&mut bytes).map_err(|_| INVALID_ADDRESS)?;
        if len != 32 {
            return Err(INVALID_ADDRESS);
        }
        Ok(Self(bytes))
    }
}
