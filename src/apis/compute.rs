use crate::client::Client;
use crate::errors::ScwError;
use crate::http::resources::ResourceProxy;

/// The regions the compute control plane is deployed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Paris, France
    Par1,
    /// Amsterdam, Netherlands
    Ams1,
}

impl Region {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Par1 => "par1",
            Self::Ams1 => "ams1",
        }
    }

    /// The control-plane base URL for this region.
    #[must_use]
    pub fn api_url(self) -> String {
        format!("https://cp-{}.scaleway.com", self.as_str())
    }
}

/// Entry point for the compute API (servers, volumes, images) of one region.
#[derive(Debug, Clone)]
pub struct ComputeApi {
    client: Client,
    region: Region,
}

impl ComputeApi {
    /// Creates a compute API client for `region` with its default base URL.
    #[must_use]
    pub fn new(region: Region, auth_token: Option<String>) -> Self {
        let mut builder = Client::builder(region.api_url());
        if let Some(token) = auth_token {
            builder = builder.auth_token(token);
        }
        Self {
            client: builder.build(),
            region,
        }
    }

    /// Shorthand for [`ComputeApi::new`] with [`Region::Par1`].
    #[must_use]
    pub fn par1(auth_token: Option<String>) -> Self {
        Self::new(Region::Par1, auth_token)
    }

    /// Shorthand for [`ComputeApi::new`] with [`Region::Ams1`].
    #[must_use]
    pub fn ams1(auth_token: Option<String>) -> Self {
        Self::new(Region::Ams1, auth_token)
    }

    /// Wraps an already configured [`Client`], e.g. one pointed at a
    /// staging control plane. The region is kept for reference only; the
    /// client's base URL wins.
    #[must_use]
    pub const fn from_client(client: Client, region: Region) -> Self {
        Self { client, region }
    }

    /// The underlying client configuration.
    #[must_use]
    pub const fn client(&self) -> &Client {
        &self.client
    }

    /// The region this client was created for.
    #[must_use]
    pub const fn region(&self) -> Region {
        self.region
    }

    /// Returns a [`ResourceProxy`] bound to this region's compute API.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be built; see
    /// [`Client::build_session`].
    pub fn query(&self) -> Result<ResourceProxy, ScwError> {
        self.client.query()
    }
}
