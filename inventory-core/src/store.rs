use crate::country;
use crate::records::{
    Analytics, Bill, BillRequest, DeliveryAgent, ForecastResult, InventoryItem, NewDeliveryAgent,
    NewItem, PriceUpdate, PricingSuggestion, RegionalProduct, StockEntry, StockFilter,
    TopSoldProduct,
};
use crate::seed;
use crate::validate::{self, ValidationError};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Default)]
struct Collections {
    items: Vec<InventoryItem>,
    agents: Vec<DeliveryAgent>,
    analytics: Analytics,
    top_sold: Vec<TopSoldProduct>,
    regional_top: BTreeMap<String, Vec<RegionalProduct>>,
    stock: Vec<StockEntry>,
}

/// In-memory repository behind mock mode.
///
/// Each store owns its collections; writes are visible to later reads on
/// the same instance and nowhere else. Share it behind an `Arc` when more
/// than one caller needs the same view.
pub struct MockStore {
    data: RwLock<Collections>,
    next_id: AtomicU64,
}

impl MockStore {
    pub fn empty() -> Self {
        Self::with(Collections::default())
    }

    pub fn seeded() -> Self {
        Self::with(Collections {
            items: seed::inventory_items(),
            agents: seed::delivery_agents(),
            analytics: seed::analytics(),
            top_sold: seed::top_sold(),
            regional_top: seed::regional_top(),
            stock: seed::stock(),
        })
    }

    fn with(data: Collections) -> Self {
        let start = chrono::Utc::now().timestamp_millis().max(0) as u64;
        Self {
            data: RwLock::new(data),
            next_id: AtomicU64::new(start),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.data.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        self.data.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn fresh_id(&self) -> String {
        self.next_id.fetch_add(1, Ordering::Relaxed).to_string()
    }

    pub fn items(&self) -> Vec<InventoryItem> {
        self.read().items.clone()
    }

    pub fn item_count(&self) -> usize {
        self.read().items.len()
    }

    pub fn add_item(&self, item: NewItem) -> Result<InventoryItem, StoreError> {
        validate::validate_new_item(&item)?;
        let created_at = chrono::Utc::now().to_rfc3339();
        let item = item.into_item(self.fresh_id(), created_at);
        self.write().items.push(item.clone());
        tracing::debug!(id = %item.id, product = %item.product_name, "mock item added");
        Ok(item)
    }

    /// Sets the selling price of every item with a matching product name
    /// and returns the rows it touched. A product with no inventory row
    /// updates nothing.
    pub fn set_price(&self, update: PriceUpdate) -> Result<Vec<InventoryItem>, StoreError> {
        validate::check_price("selling_price", update.selling_price)?;
        let mut data = self.write();
        let updated: Vec<InventoryItem> = data
            .items
            .iter_mut()
            .filter(|i| i.product_name.eq_ignore_ascii_case(&update.product_name))
            .map(|item| {
                item.selling_price = Some(update.selling_price);
                item.clone()
            })
            .collect();
        if updated.is_empty() {
            tracing::debug!(product = %update.product_name, "mock price update matched no items");
        }
        Ok(updated)
    }

    pub fn analytics(&self) -> Analytics {
        self.read().analytics.clone()
    }

    pub fn top_sold(&self, limit: usize) -> Vec<TopSoldProduct> {
        self.read().top_sold.iter().take(limit).cloned().collect()
    }

    /// Regional best sellers in stored order, truncated to `limit`.
    /// Accepts either a country code (`fi`) or name (`finland`).
    pub fn regional_top(&self, country_code: &str, limit: usize) -> Vec<RegionalProduct> {
        let key = country::resolve(country_code);
        self.read()
            .regional_top
            .get(&key)
            .map(|rows| rows.iter().take(limit).cloned().collect())
            .unwrap_or_default()
    }

    pub fn delivery_agents(&self, location: Option<&str>) -> Vec<DeliveryAgent> {
        let data = self.read();
        match location {
            Some(location) => {
                let needle = location.to_lowercase();
                data.agents
                    .iter()
                    .filter(|a| a.location.to_lowercase().contains(&needle))
                    .cloned()
                    .collect()
            }
            None => data.agents.clone(),
        }
    }

    pub fn add_delivery_agent(&self, agent: NewDeliveryAgent) -> Result<DeliveryAgent, StoreError> {
        validate::validate_new_agent(&agent)?;
        let agent = DeliveryAgent {
            id: self.fresh_id(),
            name: agent.name,
            location: agent.location,
            phone: agent.phone,
            status: agent.status,
        };
        self.write().agents.push(agent.clone());
        tracing::debug!(id = %agent.id, name = %agent.name, "mock delivery agent added");
        Ok(agent)
    }

    pub fn stock(&self, filter: &StockFilter) -> Vec<StockEntry> {
        self.read()
            .stock
            .iter()
            .filter(|s| filter.matches(s))
            .cloned()
            .collect()
    }

    pub fn low_stock(&self) -> Vec<StockEntry> {
        self.read()
            .stock
            .iter()
            .filter(|s| s.is_low())
            .cloned()
            .collect()
    }

    pub fn bill(&self, request: BillRequest) -> Result<Bill, StoreError> {
        for line in &request.lines {
            validate::check_price("unit_price", line.unit_price)?;
        }
        let total = request.lines.iter().map(|l| l.amount()).sum::<f64>();
        Ok(Bill {
            lines: request.lines,
            total: (total * 100.0).round() / 100.0,
        })
    }

    pub fn forecast(&self) -> ForecastResult {
        seed::forecast()
    }

    pub fn pricing_suggestion(&self) -> PricingSuggestion {
        seed::pricing_suggestion()
    }
}

impl Default for MockStore {
    fn default() -> Self {
        Self::seeded()
    }
}
