// crates/wayfarer-core/src/common.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// An independent search context with its own request/token lifecycle.
///
/// Lookups issued on one surface never supersede lookups on the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Surface {
    /// The search box on the landing page.
    Home,
    /// The region-browse page (region listing plus its own search box).
    RegionBrowse,
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Surface::Home => f.write_str("home"),
            Surface::RegionBrowse => f.write_str("region-browse"),
        }
    }
}

/// Simple aggregate counts for what a surface currently displays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewStats {
    pub records: usize,
    pub markers: usize,
}
