//! Entity variant catalog
//!
//! One static [`EntityDescriptor`] per [`EntityKind`]: the remote service
//! binding, the field lists, the identity-key rule and the parameter
//! normalization applied when an instance is constructed.
//!
//! | Kind | Service | Read | Create |
//! |------|---------|------|--------|
//! | AdUnit | InventoryService | getAdUnitsByStatement | - |
//! | Advertiser | CompanyService | getCompaniesByStatement | createCompanies |
//! | Creative* | CreativeService | getCreativesByStatement | createCreatives |
//! | CurrentNetwork | NetworkService | getCurrentNetwork | - |
//! | CurrentUser | UserService | getCurrentUser | - |
//! | LICA | LineItemCreativeAssociationService | - | createLineItemCreativeAssociations |
//! | LineItem | LineItemService | getLineItemsByStatement | createLineItems |
//! | Order | OrderService | getOrdersByStatement | createOrders |
//! | Placement | PlacementService | getPlacementsByStatement | - |
//! | TargetingKey | CustomTargetingService | getCustomTargetingKeysByStatement | createCustomTargetingKeys |
//! | TargetingValues | CustomTargetingService | getCustomTargetingValuesByStatement | createCustomTargetingValues |

mod descriptor;
pub mod normalize;

pub use descriptor::{descriptor, EntityDescriptor, ReadMethod, DEFAULT_QUERY_FIELDS};
