/// Number of events shown on a single page of the killfeed or the chat log
pub const PAGE_SIZE: usize = 50;

/// Number of decimals a kill/death ratio is displayed with
pub const KD_DECIMALS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    pub page_size: usize,
}

impl Config {
    /// The page size actually used, a page always holds at least one entry
    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
        }
    }
}
