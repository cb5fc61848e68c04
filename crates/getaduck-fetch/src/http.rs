use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use futures_util::Stream;

/// A boxed stream type for HTTP response bodies.
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = T> + Send + 'a>>;

/// Response to a GET request, before its body has been read.
pub struct Response<E> {
    pub status: u16,
    /// Value of the `ETag` header, if any.
    pub validator: Option<String>,
    /// Value of the `Content-Length` header, if any.
    pub content_length: Option<u64>,
    pub body: BoxStream<'static, Result<Bytes, E>>,
}

/// Outcome of a request sent with redirect following disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probe {
    pub status: u16,
    /// Value of the `Location` header, if any.
    pub location: Option<String>,
}

impl Probe {
    /// Whether the status is one a client would follow (301, 302, 303, 307
    /// or 308). `300 Multiple Choices` and `304 Not Modified` are not.
    pub fn is_redirect(&self) -> bool {
        matches!(self.status, 301 | 302 | 303 | 307 | 308)
    }
}

/// Asynchronous HTTP client abstraction.
///
/// Implementations perform exactly one request per call and report
/// non-success statuses through the returned value rather than as errors.
///
/// # Implementations
///
/// - [`ReqwestClient`]: Production implementation using `reqwest`
/// - Stub implementations for testing
pub trait HttpClient: Send + Sync {
    /// Error type for transport failures.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Send a GET request, following redirects.
    fn get(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<Response<Self::Error>, Self::Error>> + Send;

    /// Send a HEAD request without following redirects.
    fn probe(&self, url: &str) -> impl Future<Output = Result<Probe, Self::Error>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_client {
    use super::*;
    use futures_util::StreamExt;
    use reqwest::header::{CONTENT_LENGTH, ETAG, HeaderMap, HeaderName, LOCATION};
    use reqwest::{Client, redirect};

    /// Production HTTP client implementation using reqwest.
    pub struct ReqwestClient {
        client: Client,
        no_redirect: Client,
    }

    impl ReqwestClient {
        pub fn new() -> crate::Result<Self> {
            let user_agent = concat!("getaduck/", env!("CARGO_PKG_VERSION"));
            let client = Client::builder()
                .user_agent(user_agent)
                .build()
                .map_err(crate::Error::Client)?;
            let no_redirect = Client::builder()
                .user_agent(user_agent)
                .redirect(redirect::Policy::none())
                .build()
                .map_err(crate::Error::Client)?;
            Ok(Self {
                client,
                no_redirect,
            })
        }
    }

    fn header_str(headers: &HeaderMap, name: HeaderName) -> Option<String> {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }

    impl HttpClient for ReqwestClient {
        type Error = reqwest::Error;

        async fn get(&self, url: &str) -> Result<Response<Self::Error>, Self::Error> {
            let response = self.client.get(url).send().await?;
            let headers = response.headers();
            let validator = header_str(headers, ETAG);
            let content_length =
                header_str(headers, CONTENT_LENGTH).and_then(|s| s.parse::<u64>().ok());

            Ok(Response {
                status: response.status().as_u16(),
                validator,
                content_length,
                body: response.bytes_stream().boxed(),
            })
        }

        async fn probe(&self, url: &str) -> Result<Probe, Self::Error> {
            let response = self.no_redirect.head(url).send().await?;
            Ok(Probe {
                status: response.status().as_u16(),
                location: header_str(response.headers(), LOCATION),
            })
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_client::ReqwestClient;
