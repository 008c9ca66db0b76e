//! The single entry point through which UI code reads and mutates data.
//!
//! An [`InventoryApi`] is built over a [`DataSource`]. In mock mode every
//! operation is answered from an injected [`MockStore`] without any I/O;
//! in live mode it goes out through a [`CandidateChain`].

use crate::candidates::CandidateChain;
use crate::config::ClientConfig;
use crate::dto::{
    AddAgentResponse, AddItemResponse, AgentsResponse, ItemsResponse, RegionalTopResponse,
    SetPriceResponse, StockResponse, TopSoldResponse,
};
use crate::error::ApiError;
use crate::token::{self, TokenSource};
use crate::transport::{ApiRequest, HttpTransport, Transport};
use inventory_core::seed::{self, DEMO_USER_ID};
use inventory_core::{
    Analytics, Bill, BillRequest, CreatedUser, ForecastRequest, ForecastResult, ItemForm,
    MockStore, NewDeliveryAgent, NewItem, NewUser, PriceUpdate, PricingRequest, PricingSuggestion,
    ReplenishReport, StockFilter, Weather,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

pub const DEFAULT_LIMIT: usize = 5;

pub struct LiveBackend {
    pub chain: CandidateChain,
    pub transport: Arc<dyn Transport>,
    pub tokens: Arc<dyn TokenSource>,
}

impl LiveBackend {
    async fn call<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let request = if request.bearer.is_some() {
            request
        } else {
            let token = self.tokens.token().await?;
            request.bearer(token)
        };
        let value = self.chain.execute(&*self.transport, &request).await?;
        serde_json::from_value(value)
            .map_err(|e| ApiError::Decode(format!("{}: {e}", request.display_path())))
    }
}

pub enum DataSource {
    Mock(Arc<MockStore>),
    Live(LiveBackend),
}

pub struct InventoryApi {
    source: DataSource,
}

fn with_body(request: ApiRequest, body: &impl Serialize) -> Result<ApiRequest, ApiError> {
    request
        .json(body)
        .map_err(|e| ApiError::Decode(format!("request body: {e}")))
}

impl InventoryApi {
    pub fn new(source: DataSource) -> Self {
        Self { source }
    }

    pub fn mock(store: Arc<MockStore>) -> Self {
        Self::new(DataSource::Mock(store))
    }

    pub fn live(
        chain: CandidateChain,
        transport: Arc<dyn Transport>,
        tokens: Arc<dyn TokenSource>,
    ) -> Self {
        Self::new(DataSource::Live(LiveBackend {
            chain,
            transport,
            tokens,
        }))
    }

    /// Mock mode gets a freshly seeded store; live mode talks HTTP and
    /// attaches the configured ID token, if any.
    pub fn from_config(config: &ClientConfig) -> Self {
        if config.mock {
            return Self::mock(Arc::new(MockStore::seeded()));
        }
        Self::live(
            config.chain(),
            Arc::new(HttpTransport::new()),
            token::from_config(config),
        )
    }

    pub fn is_mock(&self) -> bool {
        matches!(self.source, DataSource::Mock(_))
    }

    /// Registers (or looks up) the account for a signed-in user. The
    /// identity provider's token is forwarded as-is.
    pub async fn create_user(&self, user: &NewUser, token: &str) -> Result<CreatedUser, ApiError> {
        match &self.source {
            DataSource::Mock(_) => {
                tracing::debug!(username = %user.username, "[mock] create user");
                Ok(CreatedUser {
                    user_id: DEMO_USER_ID.to_string(),
                })
            }
            DataSource::Live(live) => {
                let req = with_body(ApiRequest::post(["create-db"]), user)?
                    .bearer(Some(token.to_string()));
                live.call(req).await
            }
        }
    }

    pub async fn get_items(&self, user_id: &str) -> Result<ItemsResponse, ApiError> {
        match &self.source {
            DataSource::Mock(store) => {
                tracing::debug!("[mock] returning inventory items");
                Ok(ItemsResponse {
                    items: store.items(),
                })
            }
            DataSource::Live(live) => live.call(ApiRequest::get(["getItems", user_id])).await,
        }
    }

    pub async fn add_item(
        &self,
        user_id: &str,
        item: NewItem,
    ) -> Result<AddItemResponse, ApiError> {
        match &self.source {
            DataSource::Mock(store) => {
                let item = store.add_item(item)?;
                tracing::debug!(id = %item.id, "[mock] item added");
                Ok(AddItemResponse {
                    success: true,
                    item,
                })
            }
            DataSource::Live(live) => {
                inventory_core::validate::validate_new_item(&item)?;
                let req = with_body(ApiRequest::post(["add-item", user_id]), &item)?;
                live.call(req).await
            }
        }
    }

    /// Parses raw form input, then adds the item. Unparseable numbers are
    /// rejected here and never reach the store or the network.
    pub async fn add_item_form(
        &self,
        user_id: &str,
        form: &ItemForm,
    ) -> Result<AddItemResponse, ApiError> {
        let item = form.parse()?;
        self.add_item(user_id, item).await
    }

    pub async fn get_analytics(&self, user_id: &str) -> Result<Analytics, ApiError> {
        match &self.source {
            DataSource::Mock(store) => Ok(store.analytics()),
            DataSource::Live(live) => live.call(ApiRequest::get(["analytics", user_id])).await,
        }
    }

    pub async fn top_sold(&self, user_id: &str, limit: usize) -> Result<TopSoldResponse, ApiError> {
        match &self.source {
            DataSource::Mock(store) => Ok(TopSoldResponse {
                top_sold: store.top_sold(limit),
            }),
            DataSource::Live(live) => {
                live.call(ApiRequest::get(["top-sold", user_id]).query("limit", limit))
                    .await
            }
        }
    }

    pub async fn regional_top(
        &self,
        country: &str,
        limit: usize,
    ) -> Result<RegionalTopResponse, ApiError> {
        match &self.source {
            DataSource::Mock(store) => {
                tracing::debug!(country, "[mock] regional top");
                Ok(RegionalTopResponse {
                    top_regional: store.regional_top(country, limit),
                })
            }
            DataSource::Live(live) => {
                live.call(ApiRequest::get(["regional-top", country]).query("limit", limit))
                    .await
            }
        }
    }

    pub async fn delivery_agents(
        &self,
        user_id: &str,
        location: Option<&str>,
    ) -> Result<AgentsResponse, ApiError> {
        match &self.source {
            DataSource::Mock(store) => Ok(AgentsResponse {
                agents: store.delivery_agents(location),
            }),
            DataSource::Live(live) => {
                let mut req = ApiRequest::get(["getDeliveryAgents", user_id]);
                if let Some(location) = location {
                    req = req.query("location", location);
                }
                live.call(req).await
            }
        }
    }

    pub async fn add_delivery_agent(
        &self,
        user_id: &str,
        agent: NewDeliveryAgent,
    ) -> Result<AddAgentResponse, ApiError> {
        match &self.source {
            DataSource::Mock(store) => Ok(AddAgentResponse {
                success: true,
                agent: store.add_delivery_agent(agent)?,
            }),
            DataSource::Live(live) => {
                inventory_core::validate::validate_new_agent(&agent)?;
                let req = with_body(ApiRequest::post(["addDeliveryAgent", user_id]), &agent)?;
                live.call(req).await
            }
        }
    }

    pub async fn stock(
        &self,
        user_id: &str,
        filter: &StockFilter,
    ) -> Result<StockResponse, ApiError> {
        match &self.source {
            DataSource::Mock(store) => Ok(StockResponse {
                stock: store.stock(filter),
            }),
            DataSource::Live(live) => {
                let mut req = ApiRequest::get(["stock", user_id]);
                req.query = filter.to_query();
                live.call(req).await
            }
        }
    }

    pub async fn set_price(
        &self,
        user_id: &str,
        update: PriceUpdate,
    ) -> Result<SetPriceResponse, ApiError> {
        match &self.source {
            DataSource::Mock(store) => Ok(SetPriceResponse {
                success: true,
                updated: store.set_price(update)?,
            }),
            DataSource::Live(live) => {
                let req = with_body(ApiRequest::post(["set-price", user_id]), &update)?;
                live.call(req).await
            }
        }
    }

    pub async fn forecast(&self, request: &ForecastRequest) -> Result<ForecastResult, ApiError> {
        match &self.source {
            DataSource::Mock(store) => Ok(store.forecast()),
            DataSource::Live(live) => {
                let req = with_body(ApiRequest::post(["forecast"]), request)?;
                live.call(req).await
            }
        }
    }

    pub async fn create_bill(&self, user_id: &str, request: BillRequest) -> Result<Bill, ApiError> {
        match &self.source {
            DataSource::Mock(store) => Ok(store.bill(request)?),
            DataSource::Live(live) => {
                let req = with_body(ApiRequest::post(["bill", user_id]), &request)?;
                live.call(req).await
            }
        }
    }

    pub async fn dynamic_pricing(
        &self,
        user_id: &str,
        request: &PricingRequest,
    ) -> Result<PricingSuggestion, ApiError> {
        match &self.source {
            DataSource::Mock(store) => Ok(store.pricing_suggestion()),
            DataSource::Live(live) => {
                let req = with_body(ApiRequest::post(["dynamic-pricing", user_id]), request)?;
                live.call(req).await
            }
        }
    }

    pub async fn replenish_check(&self, user_id: &str) -> Result<ReplenishReport, ApiError> {
        match &self.source {
            DataSource::Mock(store) => Ok(ReplenishReport {
                low_stock: store.low_stock(),
            }),
            DataSource::Live(live) => {
                live.call(ApiRequest::post(["replenish", "check", user_id]))
                    .await
            }
        }
    }

    /// Weather has no backend endpoint; it is always answered locally.
    pub fn weather(&self, location: Option<&str>) -> Weather {
        seed::weather(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AttemptError;
    use crate::token::{IdToken, NoAuth};
    use crate::transport::{Method, RawResponse, TransportError};
    use inventory_core::{AgentStatus, BillLine};
    use serde_json::json;
    use std::sync::Mutex;

    /// Fails every request and counts it.
    #[derive(Default)]
    struct Tripwire {
        calls: Mutex<usize>,
    }

    #[async_trait::async_trait]
    impl Transport for Tripwire {
        async fn send(
            &self,
            _base: &str,
            _req: &ApiRequest,
        ) -> Result<RawResponse, TransportError> {
            *self.calls.lock().unwrap() += 1;
            Err(TransportError("tripwire".into()))
        }
    }

    /// Always answers with a fixed JSON body and remembers the last request.
    struct Canned {
        body: String,
        last: Mutex<Option<ApiRequest>>,
    }

    impl Canned {
        fn new(body: impl Into<String>) -> Self {
            Self {
                body: body.into(),
                last: Mutex::new(None),
            }
        }

        fn sent(&self) -> ApiRequest {
            self.last.lock().unwrap().clone().expect("request")
        }
    }

    /// Live façade whose single host replies with `reply` serialised.
    fn replying(reply: &impl Serialize) -> (InventoryApi, Arc<Canned>) {
        let canned = Arc::new(Canned::new(serde_json::to_string(reply).unwrap()));
        let api = InventoryApi::live(
            CandidateChain::new(["http://a"]),
            canned.clone(),
            Arc::new(NoAuth),
        );
        (api, canned)
    }

    #[async_trait::async_trait]
    impl Transport for Canned {
        async fn send(
            &self,
            _base: &str,
            req: &ApiRequest,
        ) -> Result<RawResponse, TransportError> {
            *self.last.lock().unwrap() = Some(req.clone());
            Ok(RawResponse {
                status: 200,
                content_type: Some("application/json".into()),
                body: self.body.clone(),
            })
        }
    }

    fn new_item(quantity: u32) -> NewItem {
        NewItem {
            product_name: "Sauna Honey Cream".into(),
            quantity,
            cost_price: Some(15.0),
            selling_price: Some(24.99),
            current_price: None,
            sales: None,
            expiry_date: None,
            country: "finland".into(),
            month: 5,
        }
    }

    #[tokio::test]
    async fn mock_add_item_is_visible_to_next_read() {
        let store = Arc::new(MockStore::seeded());
        let api = InventoryApi::mock(store.clone());
        let before = api.get_items("u1").await.expect("items").items.len();

        let added = api.add_item("u1", new_item(12)).await.expect("add");

        let after = api.get_items("u1").await.expect("items").items;
        assert!(added.success);
        assert_eq!(after.len(), before + 1);
        assert!(after.contains(&added.item));
        assert_eq!(store.item_count(), before + 1);
    }

    #[tokio::test]
    async fn mock_regional_top_for_fi_is_truncated_in_stored_order() {
        let api = InventoryApi::mock(Arc::new(MockStore::seeded()));

        let resp = api.regional_top("fi", 2).await.expect("regional");

        let names: Vec<_> = resp.top_regional.iter().map(|p| p.product_name.as_str()).collect();
        assert_eq!(names, vec!["Nordic Shampoo", "Herbal Conditioner"]);
    }

    #[tokio::test]
    async fn mock_form_with_non_numeric_quantity_is_rejected() {
        let store = Arc::new(MockStore::seeded());
        let api = InventoryApi::mock(store.clone());
        let before = store.item_count();
        let form = ItemForm {
            product_name: "Lavender Soap".into(),
            quantity: "abc".into(),
            country: "sweden".into(),
            month: "2".into(),
            ..Default::default()
        };

        let err = api.add_item_form("u1", &form).await.unwrap_err();

        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(store.item_count(), before);
    }

    #[tokio::test]
    async fn every_mock_operation_resolves() {
        let api = InventoryApi::mock(Arc::new(MockStore::seeded()));
        assert!(api.is_mock());

        let user = api
            .create_user(
                &NewUser {
                    username: "Dhanush".into(),
                    email: None,
                    region: Some("norway".into()),
                },
                "token",
            )
            .await
            .expect("create user");
        assert_eq!(user.user_id, DEMO_USER_ID);

        assert!(!api.get_items("u").await.expect("items").items.is_empty());
        assert!(api.add_item("u", new_item(1)).await.expect("add").success);
        assert_eq!(api.get_analytics("u").await.expect("analytics").metrics.len(), 4);
        assert_eq!(api.top_sold("u", 3).await.expect("top").top_sold.len(), 3);
        assert_eq!(
            api.regional_top("se", 5).await.expect("regional").top_regional.len(),
            5
        );
        assert_eq!(
            api.delivery_agents("u", Some("oslo")).await.expect("agents").agents.len(),
            1
        );
        let agent = api
            .add_delivery_agent(
                "u",
                NewDeliveryAgent {
                    name: "Sigrid".into(),
                    location: "Bergen".into(),
                    phone: "+47 55 00 00 00".into(),
                    status: AgentStatus::Active,
                },
            )
            .await
            .expect("add agent");
        assert_eq!(agent.agent.location, "Bergen");
        let stock = api
            .stock(
                "u",
                &StockFilter {
                    product_name: None,
                    country: Some("Denmark".into()),
                },
            )
            .await
            .expect("stock");
        assert_eq!(stock.stock.len(), 1);
        let forecast = api
            .forecast(&ForecastRequest { period_days: 30 })
            .await
            .expect("forecast");
        assert_eq!(forecast.trend, "upward");
        let pricing = api
            .dynamic_pricing("u", &PricingRequest { product_id: "1".into() })
            .await
            .expect("pricing");
        assert_eq!(pricing.improvement, "+20%");
        assert_eq!(api.replenish_check("u").await.expect("replenish").low_stock.len(), 1);
        let price = api
            .set_price(
                "u",
                PriceUpdate {
                    product_name: "Aloe Vera Gel".into(),
                    selling_price: 9.49,
                },
            )
            .await
            .expect("set price");
        assert_eq!(price.updated[0].selling_price, Some(9.49));
        let bill = api
            .create_bill("u", BillRequest { lines: vec![] })
            .await
            .expect("bill");
        assert_eq!(bill.total, 0.0);
    }

    #[tokio::test]
    async fn mock_set_price_for_unknown_product_resolves_empty() {
        let store = Arc::new(MockStore::seeded());
        let api = InventoryApi::mock(store.clone());
        let before = store.items();

        let resp = api
            .set_price(
                "u",
                PriceUpdate {
                    product_name: "Pine Tar Shampoo".into(),
                    selling_price: 15.0,
                },
            )
            .await
            .expect("set price");

        assert!(resp.success);
        assert!(resp.updated.is_empty());
        assert_eq!(store.items(), before);
    }

    #[tokio::test]
    async fn live_operations_send_expected_requests() {
        let mock = InventoryApi::mock(Arc::new(MockStore::seeded()));
        let mut sent = Vec::new();

        let user = NewUser {
            username: "Allen".into(),
            email: None,
            region: Some("sweden".into()),
        };
        let (api, canned) = replying(&mock.create_user(&user, "t").await.unwrap());
        api.create_user(&user, "t").await.expect("create user");
        sent.push((
            canned.sent(),
            Method::Post,
            vec!["create-db"],
            vec![],
            Some(json!({"username": "Allen", "email": null, "region": "sweden"})),
        ));

        let (api, canned) = replying(&mock.get_items("u1").await.unwrap());
        api.get_items("u1").await.expect("items");
        sent.push((canned.sent(), Method::Get, vec!["getItems", "u1"], vec![], None));

        let item = new_item(12);
        let (api, canned) = replying(&mock.add_item("u1", item.clone()).await.unwrap());
        api.add_item("u1", item).await.expect("add item");
        sent.push((
            canned.sent(),
            Method::Post,
            vec!["add-item", "u1"],
            vec![],
            Some(json!({
                "product_name": "Sauna Honey Cream",
                "quantity": 12,
                "cost_price": 15.0,
                "selling_price": 24.99,
                "country": "finland",
                "month": 5
            })),
        ));

        let (api, canned) = replying(&mock.get_analytics("u1").await.unwrap());
        api.get_analytics("u1").await.expect("analytics");
        sent.push((canned.sent(), Method::Get, vec!["analytics", "u1"], vec![], None));

        let (api, canned) = replying(&mock.top_sold("u1", 3).await.unwrap());
        api.top_sold("u1", 3).await.expect("top sold");
        sent.push((
            canned.sent(),
            Method::Get,
            vec!["top-sold", "u1"],
            vec![("limit", "3")],
            None,
        ));

        let (api, canned) = replying(&mock.regional_top("fi", 5).await.unwrap());
        api.regional_top("fi", 5).await.expect("regional top");
        sent.push((
            canned.sent(),
            Method::Get,
            vec!["regional-top", "fi"],
            vec![("limit", "5")],
            None,
        ));

        let (api, canned) = replying(&mock.delivery_agents("u1", None).await.unwrap());
        api.delivery_agents("u1", None).await.expect("agents");
        sent.push((canned.sent(), Method::Get, vec!["getDeliveryAgents", "u1"], vec![], None));

        let agent = NewDeliveryAgent {
            name: "Sigrid".into(),
            location: "Bergen".into(),
            phone: "+47 55 00 00 00".into(),
            status: AgentStatus::Busy,
        };
        let (api, canned) = replying(&mock.add_delivery_agent("u1", agent.clone()).await.unwrap());
        api.add_delivery_agent("u1", agent).await.expect("add agent");
        sent.push((
            canned.sent(),
            Method::Post,
            vec!["addDeliveryAgent", "u1"],
            vec![],
            Some(json!({
                "name": "Sigrid",
                "location": "Bergen",
                "phone": "+47 55 00 00 00",
                "status": "busy"
            })),
        ));

        let filter = StockFilter {
            product_name: Some("soap".into()),
            country: Some("Sweden".into()),
        };
        let (api, canned) = replying(&mock.stock("u1", &filter).await.unwrap());
        api.stock("u1", &filter).await.expect("stock");
        sent.push((
            canned.sent(),
            Method::Get,
            vec!["stock", "u1"],
            vec![("product_name", "soap"), ("country", "Sweden")],
            None,
        ));

        let update = PriceUpdate {
            product_name: "Aloe Vera Gel".into(),
            selling_price: 9.49,
        };
        let (api, canned) = replying(&mock.set_price("u1", update.clone()).await.unwrap());
        api.set_price("u1", update).await.expect("set price");
        sent.push((
            canned.sent(),
            Method::Post,
            vec!["set-price", "u1"],
            vec![],
            Some(json!({"product_name": "Aloe Vera Gel", "selling_price": 9.49})),
        ));

        let request = ForecastRequest { period_days: 30 };
        let (api, canned) = replying(&mock.forecast(&request).await.unwrap());
        api.forecast(&request).await.expect("forecast");
        sent.push((
            canned.sent(),
            Method::Post,
            vec!["forecast"],
            vec![],
            Some(json!({"period_days": 30})),
        ));

        let bill = BillRequest {
            lines: vec![BillLine {
                product_name: "Lavender Soap".into(),
                quantity: 3,
                unit_price: 5.99,
            }],
        };
        let (api, canned) = replying(&mock.create_bill("u1", bill.clone()).await.unwrap());
        api.create_bill("u1", bill).await.expect("bill");
        sent.push((
            canned.sent(),
            Method::Post,
            vec!["bill", "u1"],
            vec![],
            Some(json!({
                "lines": [{"product_name": "Lavender Soap", "quantity": 3, "unit_price": 5.99}]
            })),
        ));

        let pricing = PricingRequest { product_id: "7".into() };
        let (api, canned) = replying(&mock.dynamic_pricing("u1", &pricing).await.unwrap());
        api.dynamic_pricing("u1", &pricing).await.expect("pricing");
        sent.push((
            canned.sent(),
            Method::Post,
            vec!["dynamic-pricing", "u1"],
            vec![],
            Some(json!({"product_id": "7"})),
        ));

        let (api, canned) = replying(&mock.replenish_check("u1").await.unwrap());
        api.replenish_check("u1").await.expect("replenish");
        sent.push((canned.sent(), Method::Post, vec!["replenish", "check", "u1"], vec![], None));

        assert_eq!(sent.len(), 14);
        for (req, method, segments, query, body) in sent {
            let path = req.display_path();
            let query: Vec<(String, String)> = query
                .into_iter()
                .map(|(k, v): (&str, &str)| (k.to_string(), v.to_string()))
                .collect();
            assert_eq!(req.method, method, "{path}");
            assert_eq!(req.segments, segments, "{path}");
            assert_eq!(req.query, query, "{path}");
            assert_eq!(req.body, body, "{path}");
        }
    }

    #[tokio::test]
    async fn live_forwards_bearer_and_builds_path() {
        let canned = Arc::new(Canned::new(r#"{"topSold":[]}"#));
        let token = Arc::new(IdToken::new("abc"));
        let api = InventoryApi::live(CandidateChain::new(["http://a"]), canned.clone(), token);

        let resp = api.top_sold("u 1", 7).await.expect("top sold");

        assert!(resp.top_sold.is_empty());
        let req = canned.sent();
        assert_eq!(req.segments, vec!["top-sold", "u 1"]);
        assert_eq!(req.query, vec![("limit".to_string(), "7".to_string())]);
        assert_eq!(req.bearer.as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn create_user_uses_explicit_token() {
        let canned = Arc::new(Canned::new(r#"{"userId":"42"}"#));
        let api = InventoryApi::live(
            CandidateChain::new(["http://a"]),
            canned.clone(),
            Arc::new(IdToken::new("ambient")),
        );

        let created = api
            .create_user(
                &NewUser {
                    username: "Allen".into(),
                    email: Some("allen@example.test".into()),
                    region: None,
                },
                "id-token",
            )
            .await
            .expect("create");

        assert_eq!(created.user_id, "42");
        let req = canned.sent();
        assert_eq!(req.bearer.as_deref(), Some("id-token"));
        assert_eq!(req.body.expect("body")["username"], "Allen");
    }

    #[tokio::test]
    async fn live_wrong_shape_is_a_decode_error() {
        let canned = Arc::new(Canned::new(r#"{"unexpected":true}"#));
        let api = InventoryApi::live(CandidateChain::new(["http://a"]), canned, Arc::new(NoAuth));

        let err = api.get_items("u").await.unwrap_err();

        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn live_invalid_item_is_rejected_before_sending() {
        let wire = Arc::new(Tripwire::default());
        let api = InventoryApi::live(
            CandidateChain::new(["http://a"]),
            wire.clone(),
            Arc::new(NoAuth),
        );
        let mut item = new_item(1);
        item.product_name = String::new();

        let err = api.add_item("u", item).await.unwrap_err();

        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(*wire.calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn live_failure_keeps_last_transport_error() {
        let api = InventoryApi::live(
            CandidateChain::new(["http://a", "http://b"]),
            Arc::new(Tripwire::default()),
            Arc::new(NoAuth),
        );

        let err = api.replenish_check("u").await.unwrap_err();

        assert_eq!(
            err.last_attempt(),
            Some(&AttemptError::Transport("tripwire".into()))
        );
    }
}
