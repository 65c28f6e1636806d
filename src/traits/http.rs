use crate::landscape::FetchError;

/// HTTP client trait for testing
pub trait HttpClient: Send + Sync {
    /// Fetch the body of `url` as text in a single attempt
    fn get(&self, url: &str) -> Result<String, FetchError>;
}

/// Real HTTP client using reqwest
pub struct ReqwestClient;

impl ReqwestClient {
    /// Blocking client without reqwest's default 30s request timeout;
    /// only the network stack's own limits apply
    fn client() -> reqwest::Result<reqwest::blocking::Client> {
        reqwest::blocking::Client::builder().timeout(None).build()
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        let request_error = |source: reqwest::Error| FetchError::Request {
            url: url.to_string(),
            source,
        };

        let response = Self::client()
            .map_err(request_error)?
            .get(url)
            .send()
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        response.text().map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })
    }
}

/// Mock HTTP client returning a canned body or status
#[cfg(test)]
pub struct MockHttpClient {
    response: Result<String, (u16, String)>,
    requests: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl MockHttpClient {
    pub fn with_response(body: &str) -> Self {
        Self {
            response: Ok(body.to_string()),
            requests: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn with_status(status: u16, reason: &str) -> Self {
        Self {
            response: Err((status, reason.to_string())),
            requests: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// URLs requested so far
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl HttpClient for MockHttpClient {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());

        match &self.response {
            Ok(body) => Ok(body.clone()),
            Err((status, reason)) => Err(FetchError::Status {
                url: url.to_string(),
                status: *status,
                reason: reason.clone(),
            }),
        }
    }
}
