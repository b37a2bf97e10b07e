use crate::domain::currency::CurrencyRateTable;
use crate::domain::ports::RateSource;
use crate::error::Result;
use async_trait::async_trait;

/// Serves a fixed rate table. The default serves the built-in rates.
#[derive(Debug, Clone, Default)]
pub struct StaticRateSource {
    table: CurrencyRateTable,
}

impl StaticRateSource {
    pub fn new(table: CurrencyRateTable) -> Self {
        Self { table }
    }
}

#[async_trait]
impl RateSource for StaticRateSource {
    async fn load_rates(&self) -> Result<CurrencyRateTable> {
        Ok(self.table.clone())
    }
}
