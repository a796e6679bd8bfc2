//! API description providers - remote export and built-in document.

mod static_doc;

#[cfg(feature = "http-docs")]
mod http;

pub use static_doc::StaticDescriptionProvider;

#[cfg(feature = "http-docs")]
pub use http::HttpDescriptionProvider;
