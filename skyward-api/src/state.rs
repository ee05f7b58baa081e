use std::sync::Arc;

use skyward_core::BookingRegistry;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<BookingRegistry>,
}
