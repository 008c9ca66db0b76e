use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub product_name: String,
    #[serde(alias = "Quantity")]
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selling_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales: Option<u32>,
    #[serde(rename = "expiryDate", default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    pub country: String,
    pub month: u8,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Payload of "add item". Everything an [`InventoryItem`] carries except
/// the server-assigned id and timestamp.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewItem {
    pub product_name: String,
    #[serde(alias = "Quantity")]
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selling_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales: Option<u32>,
    #[serde(rename = "expiryDate", default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    pub country: String,
    pub month: u8,
}

impl NewItem {
    pub fn into_item(self, id: String, created_at: String) -> InventoryItem {
        InventoryItem {
            id,
            product_name: self.product_name,
            quantity: self.quantity,
            cost_price: self.cost_price,
            selling_price: self.selling_price,
            current_price: self.current_price,
            sales: self.sales,
            expiry_date: self.expiry_date,
            country: self.country,
            month: self.month,
            created_at,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiMetric {
    #[serde(rename = "_id")]
    pub id: String,
    pub metric: String,
    pub value: String,
    pub change: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analytics {
    pub metrics: Vec<KpiMetric>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopSoldProduct {
    #[serde(rename = "product_name")]
    pub product_name: String,
    pub total_sales: u32,
    pub avg_price: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalProduct {
    #[serde(rename = "product_name")]
    pub product_name: String,
    pub total_sales: u32,
    pub avg_price: f64,
    pub retailer_count: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Active,
    Busy,
    Offline,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryAgent {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub location: String,
    pub phone: String,
    pub status: AgentStatus,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewDeliveryAgent {
    pub name: String,
    pub location: String,
    pub phone: String,
    #[serde(default = "default_agent_status")]
    pub status: AgentStatus,
}

fn default_agent_status() -> AgentStatus {
    AgentStatus::Active
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockEntry {
    #[serde(rename = "product_name")]
    pub product_name: String,
    pub country: String,
    pub quantity: u32,
    pub reorder_level: u32,
}

impl StockEntry {
    pub fn is_low(&self) -> bool {
        self.quantity < self.reorder_level
    }
}

/// Narrowing applied to a stock listing. Product names match as a
/// case-insensitive substring, countries as a case-insensitive equality.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl StockFilter {
    pub fn matches(&self, entry: &StockEntry) -> bool {
        if let Some(name) = &self.product_name {
            if !entry
                .product_name
                .to_lowercase()
                .contains(&name.to_lowercase())
            {
                return false;
            }
        }
        if let Some(country) = &self.country {
            if !entry.country.eq_ignore_ascii_case(country) {
                return false;
            }
        }
        true
    }

    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(name) = &self.product_name {
            query.push(("product_name".to_string(), name.clone()));
        }
        if let Some(country) = &self.country {
            query.push(("country".to_string(), country.clone()));
        }
        query
    }
}

/// User row served by the static JSON server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiUser {
    pub id: u32,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewUser {
    pub username: String,
    pub email: Option<String>,
    pub region: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedUser {
    #[serde(rename = "userId")]
    pub user_id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PriceUpdate {
    pub product_name: String,
    pub selling_price: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForecastRequest {
    pub period_days: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub prediction: String,
    pub confidence: String,
    pub trend: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BillLine {
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl BillLine {
    pub fn amount(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BillRequest {
    pub lines: Vec<BillLine>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub lines: Vec<BillLine>,
    pub total: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PricingRequest {
    pub product_id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingSuggestion {
    pub current_price: f64,
    pub optimized_price: f64,
    pub improvement: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplenishReport {
    pub low_stock: Vec<StockEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weather {
    pub location: String,
    pub temperature: i32,
    pub condition: String,
}
