//! Service layer for the budget tracker
//!
//! Pure ledger logic: filtering, aggregation, and currency conversion.
//! Everything here is side-effect free; persistence lives in `storage`.

pub mod exchange;
pub mod filter;
pub mod summary;

pub use exchange::{convert, Conversion};
pub use filter::{filter, TypeFilter};
pub use summary::{aggregate, CategoryTotal, Summary};
