//! Defines the environment variables to use.

use crate::static_lazy_lock;

use std::env;

static_lazy_lock! {
    /// The GitHub token used to authenticate API requests.
    ///
    /// An unset or empty variable is accepted: requests are then sent
    /// unauthenticated and are subject to the API's own rate limits.
    pub GITHUB_TOKEN: String = env::var("GITHUB_TOKEN").unwrap_or_default();
}
