//! Backing-system integrations shown on the Smarter Integration tab

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Normal,
    Warning,
    Issue,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Normal => "Normal",
            Status::Warning => "Warning",
            Status::Issue => "Issue",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Database,
    Warehouse,
    Truck,
    ShoppingCart,
    Users,
    Cloud,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kpi {
    pub label: &'static str,
    pub value: &'static str,
    pub trend: Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Integration {
    pub name: &'static str,
    pub icon: Icon,
    pub description: &'static str,
    pub status: Status,
    pub ai_insight: &'static str,
    pub kpi: Kpi,
    pub ai_recommendation: Option<&'static str>,
}

impl Integration {
    pub fn has_recommendation(&self) -> bool {
        self.ai_recommendation.is_some()
    }
}

pub static INTEGRATIONS: [Integration; 6] = [
    Integration {
        name: "ERP System",
        icon: Icon::Database,
        description: "Enterprise Resource Planning system data integration",
        status: Status::Normal,
        ai_insight: "All ERP data is synchronizing correctly. No action required.",
        kpi: Kpi { label: "Data Sync Rate", value: "99.9%", trend: Trend::Up },
        ai_recommendation: None,
    },
    Integration {
        name: "Warehouse Management",
        icon: Icon::Warehouse,
        description: "Warehouse operations and logistics management",
        status: Status::Warning,
        ai_insight: "Inventory turnover rate has decreased by 5% in the last week. Recommend optimizing storage layout for faster picking.",
        kpi: Kpi { label: "Inventory Turnover", value: "4.2", trend: Trend::Down },
        ai_recommendation: Some(
            "Implement new slotting strategy to improve picking efficiency by an estimated 12%. This could increase turnover rate to 4.5.",
        ),
    },
    Integration {
        name: "Transportation Management",
        icon: Icon::Truck,
        description: "Logistics and transportation optimization",
        status: Status::Issue,
        ai_insight: "Detected potential stockouts due to delayed shipments. High impact on customer satisfaction expected.",
        kpi: Kpi { label: "On-Time Delivery", value: "92%", trend: Trend::Down },
        ai_recommendation: Some(
            "Activate contingency carriers and expedite shipping for high-priority items. Estimated to improve on-time delivery to 97% within 48 hours.",
        ),
    },
    Integration {
        name: "Point of Sale",
        icon: Icon::ShoppingCart,
        description: "Sales and inventory tracking at the point of sale",
        status: Status::Normal,
        ai_insight: "Sales data is current and accurate. Demand forecasting models updated.",
        kpi: Kpi { label: "Forecast Accuracy", value: "94%", trend: Trend::Up },
        ai_recommendation: None,
    },
    Integration {
        name: "Supplier Portals",
        icon: Icon::Users,
        description: "Supplier communication and inventory management",
        status: Status::Warning,
        ai_insight: "Three key suppliers showing delayed response times. Risk of supply chain disruption.",
        kpi: Kpi { label: "Supplier Performance", value: "87%", trend: Trend::Down },
        ai_recommendation: Some(
            "Initiate automated communication protocols with affected suppliers. If no response within 4 hours, trigger alternative supplier options to maintain inventory levels.",
        ),
    },
    Integration {
        name: "Weather Data Services",
        icon: Icon::Cloud,
        description: "Weather data integration for demand forecasting",
        status: Status::Normal,
        ai_insight: "Weather patterns normal. Demand forecasts adjusted for seasonal trends.",
        kpi: Kpi { label: "Forecast Adjustment", value: "+2%", trend: Trend::Up },
        ai_recommendation: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_of_integrations_carry_recommendation() {
        let with = INTEGRATIONS.iter().filter(|i| i.has_recommendation()).count();
        assert_eq!(with, 3);
        assert_eq!(INTEGRATIONS.len() - with, 3);
    }

    #[test]
    fn test_status_defaults_to_normal() {
        assert_eq!(Status::default(), Status::Normal);
        assert_eq!(Status::Issue.label(), "Issue");
    }
}
