//! Entity kind enumeration
//!
//! Every entity the tool can read or create on the ad platform is one of
//! these kinds. The kind selects a static descriptor (service binding,
//! field lists, identity rule) in the engine's catalog.
//!
//! ## The Kinds
//!
//! | Kind | Query | Create |
//! |------|-------|--------|
//! | AdUnit | statement | - |
//! | Advertiser | statement | yes |
//! | Creative | statement | yes |
//! | CreativeVideo | statement | yes |
//! | CreativeBanner | statement | yes |
//! | CurrentNetwork | singleton | - |
//! | CurrentUser | singleton | - |
//! | Lica | - | yes |
//! | LineItem | statement | yes |
//! | Order | statement | yes |
//! | Placement | statement | - |
//! | TargetingKey | statement | yes |
//! | TargetingValues | statement | yes |

use serde::{Deserialize, Serialize};

/// The entity kinds exposed by the ad platform
///
/// ## Invariant
///
/// `name()` is stable: it is mixed into every synthetic identifier, so
/// renaming a kind changes the dry-run ids it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    /// Inventory ad unit (read-only)
    AdUnit,
    /// Company of type advertiser
    Advertiser,
    /// Creative of unspecified subtype
    Creative,
    /// VAST redirect video creative
    CreativeVideo,
    /// Third-party banner creative
    CreativeBanner,
    /// The network the client is authenticated against
    CurrentNetwork,
    /// The user the client is authenticated as
    CurrentUser,
    /// Line item to creative association
    #[serde(rename = "LICA")]
    Lica,
    /// Line item
    LineItem,
    /// Order
    Order,
    /// Inventory placement (read-only)
    Placement,
    /// Custom targeting key
    TargetingKey,
    /// Custom targeting values under one key
    TargetingValues,
}

impl EntityKind {
    /// All entity kinds (for iteration)
    pub const ALL: [EntityKind; 13] = [
        EntityKind::AdUnit,
        EntityKind::Advertiser,
        EntityKind::Creative,
        EntityKind::CreativeVideo,
        EntityKind::CreativeBanner,
        EntityKind::CurrentNetwork,
        EntityKind::CurrentUser,
        EntityKind::Lica,
        EntityKind::LineItem,
        EntityKind::Order,
        EntityKind::Placement,
        EntityKind::TargetingKey,
        EntityKind::TargetingValues,
    ];

    /// Variant name, as callers spell it and as mixed into synthetic ids
    pub const fn name(&self) -> &'static str {
        match self {
            EntityKind::AdUnit => "AdUnit",
            EntityKind::Advertiser => "Advertiser",
            EntityKind::Creative => "Creative",
            EntityKind::CreativeVideo => "CreativeVideo",
            EntityKind::CreativeBanner => "CreativeBanner",
            EntityKind::CurrentNetwork => "CurrentNetwork",
            EntityKind::CurrentUser => "CurrentUser",
            EntityKind::Lica => "LICA",
            EntityKind::LineItem => "LineItem",
            EntityKind::Order => "Order",
            EntityKind::Placement => "Placement",
            EntityKind::TargetingKey => "TargetingKey",
            EntityKind::TargetingValues => "TargetingValues",
        }
    }

    /// Short identifier (for config files and command lines)
    pub const fn id(&self) -> &'static str {
        match self {
            EntityKind::AdUnit => "ad_unit",
            EntityKind::Advertiser => "advertiser",
            EntityKind::Creative => "creative",
            EntityKind::CreativeVideo => "creative_video",
            EntityKind::CreativeBanner => "creative_banner",
            EntityKind::CurrentNetwork => "current_network",
            EntityKind::CurrentUser => "current_user",
            EntityKind::Lica => "lica",
            EntityKind::LineItem => "line_item",
            EntityKind::Order => "order",
            EntityKind::Placement => "placement",
            EntityKind::TargetingKey => "targeting_key",
            EntityKind::TargetingValues => "targeting_values",
        }
    }

    /// Parse from a variant name or short identifier
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.name() == name || k.id() == name)
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for EntityKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| crate::Error::UnknownKind {
            name: s.to_string(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
