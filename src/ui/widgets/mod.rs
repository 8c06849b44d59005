//! Leaf widgets

pub mod charts;
pub mod integration_card;
pub mod integration_item;
pub mod kpi_card;
pub mod sidebar_item;

pub use charts::{InventoryChart, StoreComparisonChart, WeatherDemandChart};
pub use integration_card::IntegrationCardView;
pub use integration_item::{IntegrationItem, IntegrationTooltip};
pub use kpi_card::KpiCard;
pub use sidebar_item::SidebarItem;
