//! Machine-readable discovery reports.
//!
//! A report flattens a [`Discovery`] into the JSON shape described by
//! `schema/discovery_report.schema.json`. The schema is embedded at build
//! time so the binary can validate its own output without a repo checkout.

use crate::extension::{CapabilitySet, ExtensionId, GroupId};
use crate::registry::Discovery;
use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde::Serialize;
use serde_json::Value;

pub const REPORT_SCHEMA_VERSION: &str = "override_discovery_v1";

const REPORT_SCHEMA: &str = include_str!("../schema/discovery_report.schema.json");

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Available,
    Degraded,
}

#[derive(Clone, Debug, Serialize)]
pub struct DiscoveryReport {
    pub schema_version: &'static str,
    pub status: Status,
    pub extensions: CapabilitySet,
    pub missing: Vec<MissingEntry>,
}

/// One unresolved group as it appears in a report.
#[derive(Clone, Debug, Serialize)]
pub struct MissingEntry {
    pub group: GroupId,
    pub artifacts: Vec<String>,
    /// Rendered lossily so non-UTF-8 entries never fail serialization.
    pub searched: Vec<String>,
    pub excluded: Vec<ExtensionId>,
    pub message: String,
}

impl DiscoveryReport {
    pub fn from_discovery(discovery: &Discovery) -> Self {
        let status = if discovery.is_degraded() {
            Status::Degraded
        } else {
            Status::Available
        };
        let missing = discovery
            .notices()
            .iter()
            .map(|notice| MissingEntry {
                group: notice.group(),
                artifacts: notice.missing.artifacts.clone(),
                searched: notice
                    .missing
                    .searched
                    .iter()
                    .map(|path| path.to_string_lossy().into_owned())
                    .collect(),
                excluded: notice.excluded.clone(),
                message: notice.message.clone(),
            })
            .collect();
        Self {
            schema_version: REPORT_SCHEMA_VERSION,
            status,
            extensions: discovery.capabilities().clone(),
            missing,
        }
    }

    /// Serialize and check against the report schema.
    pub fn to_validated_value(&self) -> Result<Value> {
        let value = serde_json::to_value(self).context("serializing discovery report")?;
        validate_report(&value)?;
        Ok(value)
    }
}

/// The embedded report schema.
pub fn report_schema() -> Result<Value> {
    serde_json::from_str(REPORT_SCHEMA).context("parsing embedded discovery report schema")
}

/// Validate a JSON document against the report schema.
pub fn validate_report(value: &Value) -> Result<()> {
    let schema = report_schema()?;
    let compiled = JSONSchema::compile(&schema)
        .map_err(|err| anyhow!("compiling discovery report schema: {err}"))?;

    if let Err(errors) = compiled.validate(value) {
        let details = errors
            .map(|err| err.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        bail!("discovery report failed schema validation:\n{details}");
    }
    Ok(())
}
