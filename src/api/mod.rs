//! JSON API client layer

mod client;
mod error;
mod response;
mod transport;

pub use client::{ApiClient, ApiClientConfig, RequestOptions, DEFAULT_TIMEOUT_MS};
pub use error::{codes, ApiClientError, ErrorDetails};
pub use response::{
    ApiErrorInfo, ApiErrorResponse, ApiSuccessResponse, Paginated, PaginatedResponse, Pagination,
};
pub use transport::{
    Headers, HttpMethod, ReqwestTransport, Transport, TransportError, TransportRequest,
    TransportResponse,
};

#[cfg(test)]
pub use transport::MockTransport;
