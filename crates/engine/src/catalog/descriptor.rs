use adops_core::{EntityKind, Error, IdentityKey, Params, Record, Result, NAME_FIELD};

use super::normalize;

/// Fields a read filter may use when a kind does not list its own.
pub const DEFAULT_QUERY_FIELDS: &[&str] = &["id", "name"];

const CREATIVE_QUERY_FIELDS: &[&str] = &["id", "name", "advertiserId", "width", "height"];

const CREATIVE_VIDEO_CREATE_FIELDS: &[&str] = &[
    "xsi_type",
    "name",
    "advertiserId",
    "size",
    "vastXmlUrl",
    "vastRedirectType",
    "duration",
];

const CREATIVE_BANNER_CREATE_FIELDS: &[&str] = &[
    "xsi_type",
    "name",
    "advertiserId",
    "size",
    "isSafeFrameCompatible",
    "snippet",
];

/// How a kind is read from the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadMethod {
    /// The kind cannot be read
    None,
    /// `get*ByStatement`: filtered list read
    Statement(&'static str),
    /// Single record, no filter (current network, current user)
    Singleton(&'static str),
}

impl ReadMethod {
    /// Remote method name, if the kind can be read
    pub const fn method(&self) -> Option<&'static str> {
        match self {
            ReadMethod::None => None,
            ReadMethod::Statement(m) | ReadMethod::Singleton(m) => Some(*m),
        }
    }
}

/// Static description of one entity kind.
#[derive(Clone, Copy)]
pub struct EntityDescriptor {
    /// The kind described
    pub kind: EntityKind,
    /// Remote service owning the kind
    pub service: &'static str,
    /// Read method
    pub read: ReadMethod,
    /// Create method, if the kind can be created
    pub create_method: Option<&'static str>,
    /// Bulk action method, if the kind supports actions
    pub action_method: Option<&'static str>,
    /// Fields a read filter is built from, in order
    pub query_fields: &'static [&'static str],
    /// Fields sent on create; `None` sends every parameter
    pub create_fields: Option<&'static [&'static str]>,
    /// Extracts the identity key used by validation
    pub identity_key: fn(EntityKind, &Record) -> Result<IdentityKey>,
    /// Builds normalized parameters from caller parameters
    pub normalize: fn(EntityKind, &Params) -> Result<Params>,
}

impl EntityDescriptor {
    const fn base(kind: EntityKind, service: &'static str) -> Self {
        Self {
            kind,
            service,
            read: ReadMethod::None,
            create_method: None,
            action_method: None,
            query_fields: DEFAULT_QUERY_FIELDS,
            create_fields: None,
            identity_key: name_key,
            normalize: normalize::unchanged,
        }
    }

    const fn read_by_statement(mut self, method: &'static str) -> Self {
        self.read = ReadMethod::Statement(method);
        self
    }

    const fn read_singleton(mut self, method: &'static str) -> Self {
        self.read = ReadMethod::Singleton(method);
        self
    }

    const fn create(mut self, method: &'static str) -> Self {
        self.create_method = Some(method);
        self
    }

    /// Whether the kind can be read
    pub const fn supports_query(&self) -> bool {
        !matches!(self.read, ReadMethod::None)
    }

    /// Whether the kind can be created
    pub const fn supports_create(&self) -> bool {
        self.create_method.is_some()
    }
}

impl std::fmt::Debug for EntityDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityDescriptor")
            .field("kind", &self.kind)
            .field("service", &self.service)
            .field("read", &self.read)
            .field("create_method", &self.create_method)
            .field("action_method", &self.action_method)
            .field("query_fields", &self.query_fields)
            .field("create_fields", &self.create_fields)
            .finish_non_exhaustive()
    }
}

const AD_UNIT: EntityDescriptor =
    EntityDescriptor::base(EntityKind::AdUnit, "InventoryService")
        .read_by_statement("getAdUnitsByStatement");

const ADVERTISER: EntityDescriptor = EntityDescriptor {
    normalize: normalize::advertiser,
    ..EntityDescriptor::base(EntityKind::Advertiser, "CompanyService")
        .read_by_statement("getCompaniesByStatement")
        .create("createCompanies")
};

const CREATIVE: EntityDescriptor = EntityDescriptor {
    query_fields: CREATIVE_QUERY_FIELDS,
    normalize: normalize::creative,
    ..EntityDescriptor::base(EntityKind::Creative, "CreativeService")
        .read_by_statement("getCreativesByStatement")
        .create("createCreatives")
};

const CREATIVE_VIDEO: EntityDescriptor = EntityDescriptor {
    kind: EntityKind::CreativeVideo,
    create_fields: Some(CREATIVE_VIDEO_CREATE_FIELDS),
    normalize: normalize::creative_video,
    ..CREATIVE
};

const CREATIVE_BANNER: EntityDescriptor = EntityDescriptor {
    kind: EntityKind::CreativeBanner,
    create_fields: Some(CREATIVE_BANNER_CREATE_FIELDS),
    normalize: normalize::creative_banner,
    ..CREATIVE
};

const CURRENT_NETWORK: EntityDescriptor =
    EntityDescriptor::base(EntityKind::CurrentNetwork, "NetworkService")
        .read_singleton("getCurrentNetwork");

const CURRENT_USER: EntityDescriptor =
    EntityDescriptor::base(EntityKind::CurrentUser, "UserService")
        .read_singleton("getCurrentUser");

const LICA: EntityDescriptor = EntityDescriptor {
    identity_key: line_item_creative_key,
    ..EntityDescriptor::base(EntityKind::Lica, "LineItemCreativeAssociationService")
        .create("createLineItemCreativeAssociations")
};

const LINE_ITEM: EntityDescriptor =
    EntityDescriptor::base(EntityKind::LineItem, "LineItemService")
        .read_by_statement("getLineItemsByStatement")
        .create("createLineItems");

const ORDER: EntityDescriptor = EntityDescriptor {
    action_method: Some("performOrderAction"),
    ..EntityDescriptor::base(EntityKind::Order, "OrderService")
        .read_by_statement("getOrdersByStatement")
        .create("createOrders")
};

const PLACEMENT: EntityDescriptor =
    EntityDescriptor::base(EntityKind::Placement, "PlacementService")
        .read_by_statement("getPlacementsByStatement");

const TARGETING_KEY: EntityDescriptor = EntityDescriptor {
    query_fields: &["name"],
    normalize: normalize::targeting_key,
    ..EntityDescriptor::base(EntityKind::TargetingKey, "CustomTargetingService")
        .read_by_statement("getCustomTargetingKeysByStatement")
        .create("createCustomTargetingKeys")
};

const TARGETING_VALUES: EntityDescriptor = EntityDescriptor {
    query_fields: &["customTargetingKeyId", "id", "name"],
    normalize: normalize::targeting_values,
    ..EntityDescriptor::base(EntityKind::TargetingValues, "CustomTargetingService")
        .read_by_statement("getCustomTargetingValuesByStatement")
        .create("createCustomTargetingValues")
};

/// The descriptor for a kind
pub fn descriptor(kind: EntityKind) -> &'static EntityDescriptor {
    match kind {
        EntityKind::AdUnit => &AD_UNIT,
        EntityKind::Advertiser => &ADVERTISER,
        EntityKind::Creative => &CREATIVE,
        EntityKind::CreativeVideo => &CREATIVE_VIDEO,
        EntityKind::CreativeBanner => &CREATIVE_BANNER,
        EntityKind::CurrentNetwork => &CURRENT_NETWORK,
        EntityKind::CurrentUser => &CURRENT_USER,
        EntityKind::Lica => &LICA,
        EntityKind::LineItem => &LINE_ITEM,
        EntityKind::Order => &ORDER,
        EntityKind::Placement => &PLACEMENT,
        EntityKind::TargetingKey => &TARGETING_KEY,
        EntityKind::TargetingValues => &TARGETING_VALUES,
    }
}

fn name_key(kind: EntityKind, record: &Record) -> Result<IdentityKey> {
    record
        .name()
        .map(IdentityKey::name)
        .ok_or_else(|| Error::MissingField {
            kind,
            field: NAME_FIELD.to_string(),
        })
}

fn line_item_creative_key(kind: EntityKind, record: &Record) -> Result<IdentityKey> {
    let field = |name: &str| match record.get(name) {
        None | Some(serde_json::Value::Null) => Err(Error::MissingField {
            kind,
            field: name.to_string(),
        }),
        Some(value) => record.get_i64(name).ok_or_else(|| {
            Error::invalid_params(kind, format!("{name} must be an integer id, got {value}"))
        }),
    };
    Ok(IdentityKey::pair(field("lineItemId")?, field("creativeId")?))
}
