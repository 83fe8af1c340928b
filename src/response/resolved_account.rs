use steamid_ng::SteamID;

/// An identifier resolved to the account's SteamID.
#[derive(Debug, Clone)]
pub struct ResolvedAccount {
    /// The identifier as entered by the operator.
    pub source_identifier: String,
    /// The account's SteamID.
    pub steamid: SteamID,
}

impl ResolvedAccount {
    /// The 64-bit form of the SteamID e.g. `76561198000000123`.
    pub fn steamid64(&self) -> u64 {
        u64::from(self.steamid)
    }
}
