mod query;
mod request_ctx;


pub use query::{equals_one, query_param};
pub use request_ctx::RequestCtx;
