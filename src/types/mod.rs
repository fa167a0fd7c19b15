//! Input types accepted by the WorldClim query generators.

mod collection;
mod distance;
mod paging;
mod result_type;

pub use collection::Collection;
pub use distance::{DistanceRange, Sort};
pub use paging::Paging;
pub use result_type::{Aggregate, ResultType};
