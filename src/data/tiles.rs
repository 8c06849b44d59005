//! KPI tiles, workflows and work queues

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KpiTile {
    pub title: &'static str,
    pub value: &'static str,
    pub change: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Workflow {
    pub id: u32,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkQueueItem {
    pub id: u32,
    pub text: &'static str,
    pub action: &'static str,
}

// Fixed figures, not derived from STORES or INVENTORY.
pub const DASHBOARD_KPIS: [KpiTile; 4] = [
    KpiTile { title: "Waste", value: "20%", change: -2.5 },
    KpiTile { title: "Stockouts", value: "15%", change: -1.8 },
    KpiTile { title: "Excess Inventory", value: "25%", change: -3.2 },
    KpiTile { title: "Donations", value: "10%", change: 0.7 },
];

pub const INTEGRATION_KPIS: [KpiTile; 4] = [
    KpiTile { title: "Total Inventory Value", value: "$1.2M", change: 5.0 },
    KpiTile { title: "Inventory Turnover", value: "4.2", change: -5.0 },
    KpiTile { title: "Stock-out Rate", value: "2.3%", change: -3.2 },
    KpiTile { title: "Forecast Accuracy", value: "94%", change: 2.0 },
];

pub const WORKFLOWS: [Workflow; 4] = [
    Workflow {
        id: 1,
        text: "AI detected potential stockout for Fresh Kale. Automated reorder initiated.",
    },
    Workflow {
        id: 2,
        text: "Excess inventory alert for Organic Apples. Markdown process started to reduce waste.",
    },
    Workflow {
        id: 3,
        text: "Supply delay detected for Grass-Fed Beef. Alternate supplier engaged.",
    },
    Workflow {
        id: 4,
        text: "Weather alert: Potential disruption to transportation. Rerouting shipments.",
    },
];

pub const WORK_QUEUES: [WorkQueueItem; 3] = [
    WorkQueueItem {
        id: 1,
        text: "Resolve potential stockout for Fresh Kale",
        action: "Resolve",
    },
    WorkQueueItem {
        id: 2,
        text: "Review markdown strategy for Organic Apples",
        action: "Review",
    },
    WorkQueueItem {
        id: 3,
        text: "Assess alternative suppliers for Grass-Fed Beef",
        action: "Assess",
    },
];
