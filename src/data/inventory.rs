//! Stock, demand and per-store literals

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryItem {
    pub product: &'static str,
    pub current: u32,
    pub optimal: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemandPoint {
    pub day: &'static str,
    pub demand: u32,
    pub weather: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreMetrics {
    pub name: &'static str,
    pub waste: u32,
    pub stockouts: u32,
    pub excess: u32,
    pub donations: u32,
}

pub const INVENTORY: [InventoryItem; 4] = [
    InventoryItem { product: "Organic Apples", current: 80, optimal: 50 },
    InventoryItem { product: "Fresh Kale", current: 30, optimal: 60 },
    InventoryItem { product: "Grass-Fed Beef", current: 45, optimal: 40 },
    InventoryItem { product: "Free-Range Eggs", current: 90, optimal: 70 },
];

pub const DEMAND_FORECAST: [DemandPoint; 7] = [
    DemandPoint { day: "Mon", demand: 100, weather: "Sunny" },
    DemandPoint { day: "Tue", demand: 120, weather: "Cloudy" },
    DemandPoint { day: "Wed", demand: 110, weather: "Rainy" },
    DemandPoint { day: "Thu", demand: 140, weather: "Sunny" },
    DemandPoint { day: "Fri", demand: 160, weather: "Sunny" },
    DemandPoint { day: "Sat", demand: 180, weather: "Partly Cloudy" },
    DemandPoint { day: "Sun", demand: 130, weather: "Rainy" },
];

pub const STORES: [StoreMetrics; 3] = [
    StoreMetrics { name: "Chicago Store", waste: 20, stockouts: 15, excess: 25, donations: 10 },
    StoreMetrics { name: "New York Store", waste: 18, stockouts: 12, excess: 22, donations: 15 },
    StoreMetrics { name: "Los Angeles Store", waste: 22, stockouts: 18, excess: 20, donations: 12 },
];

/// Distinct weather labels in order of first appearance.
pub fn weather_categories(points: &[DemandPoint]) -> Vec<&'static str> {
    let mut seen: Vec<&'static str> = Vec::new();
    for point in points {
        if !seen.contains(&point.weather) {
            seen.push(point.weather);
        }
    }
    seen
}
