//! Static data tables
//!
//! Every figure on screen comes from a literal in this module. Nothing here is
//! loaded or synchronized at runtime; `validate` checks the shapes once at
//! startup so rendering never has to guard individual reads.

pub mod integrations;
pub mod inventory;
pub mod reports;
pub mod tiles;

use std::collections::BTreeSet;

use thiserror::Error;

pub use integrations::{Icon, Integration, Kpi, Status, Trend, INTEGRATIONS};
pub use inventory::{DemandPoint, InventoryItem, StoreMetrics, DEMAND_FORECAST, INVENTORY, STORES};
pub use reports::{PeriodSummary, ReportPeriod};
pub use tiles::{KpiTile, WorkQueueItem, Workflow, DASHBOARD_KPIS, INTEGRATION_KPIS, WORKFLOWS, WORK_QUEUES};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataError {
    #[error("{table}: entry {index} has an empty {field}")]
    EmptyField {
        table: &'static str,
        index: usize,
        field: &'static str,
    },
    #[error("{table}: duplicate id {id}")]
    DuplicateId { table: &'static str, id: u32 },
    #[error("integrations: duplicate name {0:?}")]
    DuplicateIntegration(&'static str),
    #[error("{period} summary defines {count} comparison fields, expected exactly one")]
    AmbiguousComparison { period: &'static str, count: usize },
    #[error("integration {0:?} has a blank recommendation")]
    BlankRecommendation(&'static str),
}

fn require(
    value: &str,
    table: &'static str,
    index: usize,
    field: &'static str,
) -> Result<(), DataError> {
    if value.trim().is_empty() {
        return Err(DataError::EmptyField { table, index, field });
    }
    Ok(())
}

/// Every table drawn on screen, borrowed so tests can swap any of them.
#[derive(Debug, Clone, Copy)]
pub struct Tables<'a> {
    pub inventory: &'a [InventoryItem],
    pub demand: &'a [DemandPoint],
    pub stores: &'a [StoreMetrics],
    pub integrations: &'a [Integration],
    pub dashboard_kpis: &'a [KpiTile],
    pub integration_kpis: &'a [KpiTile],
    pub workflows: &'a [Workflow],
    pub work_queues: &'a [WorkQueueItem],
}

impl Tables<'static> {
    pub fn builtin() -> Self {
        Self {
            inventory: &INVENTORY,
            demand: &DEMAND_FORECAST,
            stores: &STORES,
            integrations: &INTEGRATIONS,
            dashboard_kpis: &DASHBOARD_KPIS,
            integration_kpis: &INTEGRATION_KPIS,
            workflows: &WORKFLOWS,
            work_queues: &WORK_QUEUES,
        }
    }
}

/// Check the built-in tables.
pub fn validate() -> Result<(), DataError> {
    validate_tables(&Tables::builtin())?;
    for period in ReportPeriod::ALL {
        validate_summary(period.key(), period.summary())?;
    }
    Ok(())
}

fn validate_kpis(table: &'static str, tiles: &[KpiTile]) -> Result<(), DataError> {
    for (index, tile) in tiles.iter().enumerate() {
        require(tile.title, table, index, "title")?;
        require(tile.value, table, index, "value")?;
    }
    Ok(())
}

fn unique_id(table: &'static str, seen: &mut BTreeSet<u32>, id: u32) -> Result<(), DataError> {
    if !seen.insert(id) {
        return Err(DataError::DuplicateId { table, id });
    }
    Ok(())
}

pub fn validate_tables(tables: &Tables) -> Result<(), DataError> {
    for (index, item) in tables.inventory.iter().enumerate() {
        require(item.product, "inventory", index, "product")?;
    }
    for (index, point) in tables.demand.iter().enumerate() {
        require(point.day, "demand", index, "day")?;
        require(point.weather, "demand", index, "weather")?;
    }
    for (index, store) in tables.stores.iter().enumerate() {
        require(store.name, "stores", index, "name")?;
    }

    let mut names = BTreeSet::new();
    for (index, integration) in tables.integrations.iter().enumerate() {
        require(integration.name, "integrations", index, "name")?;
        require(integration.ai_insight, "integrations", index, "ai_insight")?;
        require(integration.kpi.label, "integrations", index, "kpi.label")?;
        require(integration.kpi.value, "integrations", index, "kpi.value")?;
        if !names.insert(integration.name) {
            return Err(DataError::DuplicateIntegration(integration.name));
        }
        if let Some(rec) = integration.ai_recommendation {
            if rec.trim().is_empty() {
                return Err(DataError::BlankRecommendation(integration.name));
            }
        }
    }

    validate_kpis("dashboard_kpis", tables.dashboard_kpis)?;
    validate_kpis("integration_kpis", tables.integration_kpis)?;

    let mut ids = BTreeSet::new();
    for (index, workflow) in tables.workflows.iter().enumerate() {
        require(workflow.text, "workflows", index, "text")?;
        unique_id("workflows", &mut ids, workflow.id)?;
    }
    let mut ids = BTreeSet::new();
    for (index, item) in tables.work_queues.iter().enumerate() {
        require(item.text, "work_queues", index, "text")?;
        require(item.action, "work_queues", index, "action")?;
        unique_id("work_queues", &mut ids, item.id)?;
    }
    Ok(())
}

pub fn validate_summary(period: &'static str, summary: &PeriodSummary) -> Result<(), DataError> {
    let count = summary.defined_comparisons();
    if count != 1 {
        return Err(DataError::AmbiguousComparison { period, count });
    }
    Ok(())
}
