//! Supplier catalog and order clients.
//!
//! Normalizes two third-party dropshipping APIs (CJ-style and EPROLO-style)
//! behind one [`SupplierClient`] capability set and exposes the thin search
//! and order-submission services the HTTP layer composes over. Every
//! operation is a single outbound request: no caching, no retries, no shared
//! mutable state beyond the fixed credential, so concurrent calls are safe.

mod cj;
mod client;
mod eprolo;
mod error;
mod normalize;
mod service;

pub use cj::{CjClient, CJ_SUPPLIER_NAME};
pub use client::{OrderConfirmation, OrderRequest, SearchQuery, SupplierClient};
pub use eprolo::{EproloClient, EPROLO_SUPPLIER_NAME};
pub use error::SupplierError;
pub use service::{
    OrderService, SearchService, SupplierKind, SupplierRegistry, DEFAULT_PAGE, DEFAULT_PAGE_SIZE,
};
