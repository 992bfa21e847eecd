//! Per-kind parameter normalization
//!
//! Each function takes the caller's parameters and returns a new, normalized
//! mapping; the input is never modified. Defaults only fill fields the
//! caller left out, so an explicit caller value always wins, and applying a
//! normalization twice gives the same result as applying it once.

use serde_json::Value;

use adops_core::{EntityKind, Error, Params, Result};

/// Nested `{width, height}` object accepted on creatives
pub const SIZE_FIELD: &str = "size";

const TYPE_FIELD: &str = "type";
const XSI_TYPE_FIELD: &str = "xsi_type";

/// No transformation
pub fn unchanged(_kind: EntityKind, params: &Params) -> Result<Params> {
    Ok(params.clone())
}

/// Companies created through this tool are advertisers unless told otherwise
pub fn advertiser(_kind: EntityKind, params: &Params) -> Result<Params> {
    let mut out = params.clone();
    out.insert_default(TYPE_FIELD, "ADVERTISER");
    Ok(out)
}

/// Flatten a `size` object into top-level `width` and `height`
pub fn creative(kind: EntityKind, params: &Params) -> Result<Params> {
    let mut out = params.clone();
    match out.remove(SIZE_FIELD) {
        None | Some(Value::Null) => {}
        Some(Value::Object(size)) => {
            for dim in ["width", "height"] {
                let value = size
                    .get(dim)
                    .and_then(Value::as_i64)
                    .ok_or_else(|| {
                        Error::invalid_params(kind, format!("size.{dim} must be an integer"))
                    })?;
                out.insert_default(dim, value);
            }
        }
        Some(other) => {
            return Err(Error::invalid_params(
                kind,
                format!("size must be an object with width and height, got {other}"),
            ));
        }
    }
    Ok(out)
}

/// VAST redirect video creative
pub fn creative_video(kind: EntityKind, params: &Params) -> Result<Params> {
    let mut out = creative(kind, params)?;
    out.insert_default(XSI_TYPE_FIELD, "VastRedirectCreative");
    out.insert_default("vastRedirectType", "LINEAR");
    out.insert_default("duration", 60);
    Ok(out)
}

/// Third-party banner creative
pub fn creative_banner(kind: EntityKind, params: &Params) -> Result<Params> {
    let mut out = creative(kind, params)?;
    out.insert_default(XSI_TYPE_FIELD, "ThirdPartyCreative");
    out.insert_default("isSafeFrameCompatible", true);
    Ok(out)
}

/// Predefined key whose display name defaults to its name
pub fn targeting_key(_kind: EntityKind, params: &Params) -> Result<Params> {
    let mut out = params.clone();
    if let Some(name) = out.get("name").cloned() {
        out.insert_default("displayName", name);
    }
    out.insert_default(TYPE_FIELD, "PREDEFINED");
    Ok(out)
}

/// Bind values to their parent key; `keyId` is accepted as shorthand
pub fn targeting_values(_kind: EntityKind, params: &Params) -> Result<Params> {
    let mut out = params.clone();
    if let Some(key_id) = out.remove("keyId") {
        out.insert_default("customTargetingKeyId", key_id);
    }
    Ok(out)
}
