//! The browsing session: paging through the remote catalog and keeping
//! favorite flags in step between the list and detail screens.

mod controller;
mod detail;
mod endpoint;

#[cfg(test)]
pub(crate) mod testing;

pub use controller::{PaginatedListController, StateChanged};
pub use detail::ItemDetail;
pub use endpoint::PageEndpoint;
