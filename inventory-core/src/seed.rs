//! Nordic demo data set backing mock mode.

use crate::country::Country;
use crate::records::{
    AgentStatus, Analytics, DeliveryAgent, ForecastResult, InventoryItem, KpiMetric,
    PricingSuggestion, RegionalProduct, StockEntry, TopSoldProduct, Weather,
};
use std::collections::BTreeMap;

/// Identifier handed out by mock account creation.
pub const DEMO_USER_ID: &str = "690e541f164b48a3147069dd";

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    product_name: &str,
    quantity: u32,
    selling_price: f64,
    cost_price: f64,
    country: Country,
    month: u8,
    created_at: &str,
) -> InventoryItem {
    InventoryItem {
        id: id.into(),
        product_name: product_name.into(),
        quantity,
        cost_price: Some(cost_price),
        selling_price: Some(selling_price),
        current_price: None,
        sales: None,
        expiry_date: None,
        country: country.key().into(),
        month,
        created_at: created_at.into(),
    }
}

#[rustfmt::skip]
pub fn inventory_items() -> Vec<InventoryItem> {
    vec![
        item("1", "Nordic Shampoo", 150, 12.99, 8.50, Country::Finland, 1, "2026-01-01T10:00:00Z"),
        item("2", "Organic Toothpaste", 200, 6.50, 3.20, Country::Sweden, 1, "2026-01-02T11:00:00Z"),
        item("3", "Birch Body Lotion", 75, 18.99, 12.00, Country::Norway, 1, "2026-01-03T09:30:00Z"),
        item("4", "Arctic Face Cream", 45, 34.50, 22.00, Country::Iceland, 1, "2026-01-04T14:00:00Z"),
        item("5", "Sea Salt Scrub", 120, 15.99, 9.50, Country::Denmark, 1, "2026-01-05T08:45:00Z"),
        item("6", "Herbal Conditioner", 180, 14.50, 9.00, Country::Finland, 2, "2026-01-06T16:20:00Z"),
        item("7", "Vitamin E Oil", 60, 22.00, 14.50, Country::Sweden, 2, "2026-01-07T12:15:00Z"),
        item("8", "Aloe Vera Gel", 250, 8.99, 4.50, Country::Norway, 2, "2026-01-08T10:30:00Z"),
    ]
}

pub fn analytics() -> Analytics {
    let metric = |id: &str, metric: &str, value: &str, change: &str| KpiMetric {
        id: id.into(),
        metric: metric.into(),
        value: value.into(),
        change: change.into(),
    };
    Analytics {
        metrics: vec![
            metric("1", "totalRevenue", "€45,231.89", "+12.5%"),
            metric("2", "newCustomers", "1,204", "+8.2%"),
            metric("3", "conversionRate", "3.12%", "-1.5%"),
            metric("4", "avgOrderValue", "€120.50", "+0.5%"),
        ],
    }
}

pub fn top_sold() -> Vec<TopSoldProduct> {
    let p = |name: &str, total_sales: u32, avg_price: f64| TopSoldProduct {
        product_name: name.into(),
        total_sales,
        avg_price,
    };
    vec![
        p("Nordic Shampoo", 15420, 12.99),
        p("Organic Toothpaste", 12850, 6.50),
        p("Sea Salt Scrub", 9780, 15.99),
        p("Aloe Vera Gel", 8640, 8.99),
        p("Birch Body Lotion", 7520, 18.99),
    ]
}

fn regional(rows: [(&str, u32, f64, u32); 5]) -> Vec<RegionalProduct> {
    rows.into_iter()
        .map(|(name, total_sales, avg_price, retailer_count)| RegionalProduct {
            product_name: name.into(),
            total_sales,
            avg_price,
            retailer_count,
        })
        .collect()
}

/// Best sellers per country, keyed by [`Country::key`], in display order.
pub fn regional_top() -> BTreeMap<String, Vec<RegionalProduct>> {
    let mut out = BTreeMap::new();
    out.insert(
        Country::Finland.key().to_string(),
        regional([
            ("Nordic Shampoo", 1250, 12.99, 15),
            ("Herbal Conditioner", 980, 14.50, 12),
            ("Birch Body Lotion", 750, 18.99, 10),
            ("Sauna Honey Cream", 620, 24.99, 8),
            ("Arctic Berry Serum", 480, 32.00, 6),
        ]),
    );
    out.insert(
        Country::Sweden.key().to_string(),
        regional([
            ("Organic Toothpaste", 1500, 6.50, 22),
            ("Vitamin E Oil", 890, 22.00, 14),
            ("Lavender Soap", 720, 5.99, 18),
            ("Oat Milk Lotion", 650, 16.50, 11),
            ("Pine Tar Shampoo", 520, 14.99, 9),
        ]),
    );
    out.insert(
        Country::Norway.key().to_string(),
        regional([
            ("Birch Body Lotion", 1100, 18.99, 16),
            ("Aloe Vera Gel", 920, 8.99, 20),
            ("Fjord Sea Salt Scrub", 680, 19.99, 12),
            ("Cloudberry Cream", 540, 28.50, 8),
            ("Salmon Oil Capsules", 420, 35.00, 7),
        ]),
    );
    out.insert(
        Country::Iceland.key().to_string(),
        regional([
            ("Arctic Face Cream", 800, 34.50, 8),
            ("Geothermal Mud Mask", 650, 29.99, 6),
            ("Icelandic Moss Extract", 480, 42.00, 5),
            ("Blue Lagoon Lotion", 390, 38.50, 4),
            ("Glacier Water Mist", 320, 25.00, 5),
        ]),
    );
    out.insert(
        Country::Denmark.key().to_string(),
        regional([
            ("Sea Salt Scrub", 1300, 15.99, 19),
            ("Hygge Candle Set", 950, 24.99, 15),
            ("Danish Rose Oil", 720, 45.00, 10),
            ("Rye Flour Soap", 580, 8.50, 14),
            ("Baltic Amber Serum", 440, 55.00, 6),
        ]),
    );
    out
}

pub fn delivery_agents() -> Vec<DeliveryAgent> {
    let a = |id: &str, name: &str, location: &str, phone: &str, status: AgentStatus| DeliveryAgent {
        id: id.into(),
        name: name.into(),
        location: location.into(),
        phone: phone.into(),
        status,
    };
    vec![
        a("1", "Erik Johansson", "Stockholm", "+46 70 123 4567", AgentStatus::Active),
        a("2", "Anna Virtanen", "Helsinki", "+358 40 123 4567", AgentStatus::Active),
        a("3", "Magnus Olsen", "Oslo", "+47 90 12 34 56", AgentStatus::Busy),
        a("4", "Sigrid Ísleifsdóttir", "Reykjavik", "+354 612 3456", AgentStatus::Active),
        a("5", "Lars Andersen", "Copenhagen", "+45 20 12 34 56", AgentStatus::Offline),
    ]
}

pub fn stock() -> Vec<StockEntry> {
    let s = |name: &str, country: Country, quantity: u32, reorder_level: u32| StockEntry {
        product_name: name.into(),
        country: country.key().into(),
        quantity,
        reorder_level,
    };
    vec![
        s("Nordic Shampoo", Country::Finland, 150, 50),
        s("Organic Toothpaste", Country::Sweden, 200, 75),
        s("Sea Salt Scrub", Country::Denmark, 120, 40),
        s("Aloe Vera Gel", Country::Norway, 30, 60),
        s("Arctic Face Cream", Country::Iceland, 45, 20),
    ]
}

pub fn forecast() -> ForecastResult {
    ForecastResult {
        prediction: "+12.5%".into(),
        confidence: "87%".into(),
        trend: "upward".into(),
    }
}

pub fn pricing_suggestion() -> PricingSuggestion {
    PricingSuggestion {
        current_price: 24.99,
        optimized_price: 29.99,
        improvement: "+20%".into(),
    }
}

/// Current conditions for a country display name, or the region-wide
/// default when no location is selected.
pub fn weather(location: Option<&str>) -> Weather {
    let Some(location) = location else {
        return Weather {
            location: "Nordic Region".into(),
            temperature: 10,
            condition: "Cloudy".into(),
        };
    };

    let (temperature, condition) = match Country::from_code_or_name(location) {
        Some(Country::Sweden) => (15, "Cloudy"),
        Some(Country::Finland) => (10, "Rainy"),
        Some(Country::Norway) => (12, "Windy"),
        Some(Country::Denmark) => (18, "Sunny"),
        Some(Country::Iceland) => (5, "Snowy"),
        None => (10, "Cloudy"),
    };

    Weather {
        location: Country::from_code_or_name(location)
            .map(|c| c.capital().to_string())
            .unwrap_or_else(|| location.to_string()),
        temperature,
        condition: condition.into(),
    }
}
