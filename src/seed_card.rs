//! Seed cards: a versioned JSON snapshot of a render request.
//!
//! Current shape:
//!
//! ```json
//! {"schemaVersion":1,"config":{"phenotype":{...},"seed":"...","animate":false,"bgMode":"transparent"}}
//! ```
//!
//! Cards written before versioning were a bare configuration object; they
//! are recognized by a top-level `phenotype` key and migrated on read.

use log::{debug, warn};
use serde::Serialize;
use serde_json::Value;

use crate::config::{parse_configuration, AppConfiguration};
use crate::error::SeedCardError;

/// Schema version written by [`serialize_seed_card`].
pub const SEED_CARD_SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SeedCardV1<'a> {
    schema_version: u32,
    config: &'a AppConfiguration,
}

/// Encode `config` as a current-version seed card.
///
/// The configuration is normalized first, so the card never carries a value
/// the parser would reject.
pub fn serialize_seed_card(config: &AppConfiguration) -> Result<String, SeedCardError> {
    let value = serde_json::to_value(config).map_err(SeedCardError::Serialize)?;
    let normalized = parse_configuration(&value);
    let card = SeedCardV1 {
        schema_version: SEED_CARD_SCHEMA_VERSION,
        config: &normalized,
    };
    serde_json::to_string(&card).map_err(SeedCardError::Serialize)
}

/// Decode a seed card of any supported version.
pub fn deserialize_seed_card(serialized: &str) -> Result<AppConfiguration, SeedCardError> {
    let payload: Value = serde_json::from_str(serialized).map_err(SeedCardError::InvalidJson)?;
    let record = payload.as_object().ok_or(SeedCardError::NotAnObject)?;

    let version = record.get("schemaVersion");
    if version.and_then(Value::as_f64) == Some(SEED_CARD_SCHEMA_VERSION as f64) {
        debug!("seed card v{}", SEED_CARD_SCHEMA_VERSION);
        return Ok(parse_configuration(record.get("config").unwrap_or(&Value::Null)));
    }
    if record.contains_key("phenotype") {
        warn!("seed card has no schema version, reading legacy layout");
        return Ok(parse_configuration(&payload));
    }
    Err(SeedCardError::UnsupportedSchema)
}
