//! Per-widget loading. A failed load never propagates past its widget: it
//! either degrades to cached mock values or shows an empty state.

use crate::error::ApiError;
use crate::facade::{InventoryApi, DEFAULT_LIMIT};
use crate::session::Location;
use inventory_core::seed;
use inventory_core::{Analytics, RegionalProduct, StockEntry, TopSoldProduct, Weather};
use serde::Serialize;
use std::future::Future;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum WidgetState<T> {
    Ready { value: T },
    Degraded { value: T, reason: String },
    Unavailable { message: String },
}

impl<T> WidgetState<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            WidgetState::Ready { value } | WidgetState::Degraded { value, .. } => Some(value),
            WidgetState::Unavailable { .. } => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, WidgetState::Ready { .. })
    }
}

/// Falls back to `fallback` when the load fails.
pub async fn load_or_fallback<T, F>(widget: &str, load: F, fallback: T) -> WidgetState<T>
where
    F: Future<Output = Result<T, ApiError>>,
{
    match load.await {
        Ok(value) => WidgetState::Ready { value },
        Err(err) => {
            tracing::warn!(widget, error = %err, "widget degraded to cached values");
            WidgetState::Degraded {
                value: fallback,
                reason: err.user_message(),
            }
        }
    }
}

/// Shows an empty state when the load fails.
pub async fn load_or_empty<T, F>(widget: &str, load: F) -> WidgetState<T>
where
    F: Future<Output = Result<T, ApiError>>,
{
    match load.await {
        Ok(value) => WidgetState::Ready { value },
        Err(err) => {
            tracing::warn!(widget, error = %err, "widget unavailable");
            WidgetState::Unavailable {
                message: err.user_message(),
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub location: String,
    pub weather: Weather,
    pub analytics: WidgetState<Analytics>,
    pub top_sold: WidgetState<Vec<TopSoldProduct>>,
    pub regional_top: WidgetState<Vec<RegionalProduct>>,
    pub low_stock: WidgetState<Vec<StockEntry>>,
}

impl DashboardSnapshot {
    /// Loads every dashboard widget, one after another. Analytics and top
    /// sellers fall back to the demo data set; the rest go empty.
    pub async fn load(api: &InventoryApi, user_id: &str, location: Option<&Location>) -> Self {
        let location_name = location
            .map(|l| l.name.clone())
            .unwrap_or_else(|| "Norway".to_string());
        let country_code = location
            .map(|l| l.code.to_lowercase())
            .unwrap_or_else(|| "no".to_string());

        let analytics =
            load_or_fallback("analytics", api.get_analytics(user_id), seed::analytics()).await;

        let top_sold = load_or_fallback(
            "top_sold",
            async { Ok::<_, ApiError>(api.top_sold(user_id, DEFAULT_LIMIT).await?.top_sold) },
            seed::top_sold(),
        )
        .await;

        let regional_top = load_or_empty("regional_top", async {
            Ok::<_, ApiError>(api.regional_top(&country_code, DEFAULT_LIMIT).await?.top_regional)
        })
        .await;

        let low_stock = load_or_empty("low_stock", async {
            Ok::<_, ApiError>(api.replenish_check(user_id).await?.low_stock)
        })
        .await;

        Self {
            weather: api.weather(location.map(|l| l.name.as_str())),
            location: location_name,
            analytics,
            top_sold,
            regional_top,
            low_stock,
        }
    }
}
