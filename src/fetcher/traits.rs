use crate::model::{FetchError, PriceSeries, SeriesRequest};

#[async_trait::async_trait]
pub trait MarketDataProvider: Send + Sync {
    async fn fetch_series(&self, req: &SeriesRequest) -> Result<PriceSeries, FetchError>;
}
