pub mod export;
pub mod filters;
pub mod granularity;
pub mod pagination;

pub use export::{ExportColumn, ExportSelection};
pub use filters::{FilterOptions, FilterState, QueryParams, Sentiment, ALL};
pub use granularity::{ActivityKind, Period};
pub use pagination::{PageQuery, PageSize, Pager, TableState};
