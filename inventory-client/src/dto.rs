use inventory_core::{DeliveryAgent, InventoryItem, RegionalProduct, StockEntry, TopSoldProduct};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemsResponse {
    pub items: Vec<InventoryItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AddItemResponse {
    pub success: bool,
    pub item: InventoryItem,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TopSoldResponse {
    #[serde(rename = "topSold")]
    pub top_sold: Vec<TopSoldProduct>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionalTopResponse {
    #[serde(rename = "topRegional")]
    pub top_regional: Vec<RegionalProduct>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentsResponse {
    pub agents: Vec<DeliveryAgent>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddAgentResponse {
    pub success: bool,
    pub agent: DeliveryAgent,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockResponse {
    pub stock: Vec<StockEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SetPriceResponse {
    pub success: bool,
    /// Rows whose price changed; empty when no item carries the product.
    #[serde(default)]
    pub updated: Vec<InventoryItem>,
}
