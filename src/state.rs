use std::sync::Arc;

use crate::external::price_provider::PriceProvider;
use crate::models::FormDefaults;

#[derive(Clone)]
pub struct AppState {
    pub price_provider: Arc<dyn PriceProvider>,
    pub defaults: FormDefaults,
}

impl AppState {
    pub fn new(price_provider: Arc<dyn PriceProvider>) -> Self {
        Self {
            price_provider,
            defaults: FormDefaults::default(),
        }
    }
}
