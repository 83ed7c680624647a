//! Provider factory functions.

use std::sync::Arc;

use crate::error::Result;
use crate::traits::RenewalProvider;
use crate::types::{ProviderOptions, ProviderType};

#[cfg(feature = "dnshe")]
use crate::providers::DnsheProvider;

/// Creates a [`RenewalProvider`] instance for the given registrar.
///
/// The returned provider owns one HTTP client and serves any number of
/// accounts; credentials are passed per call.
///
/// # Examples
///
/// ```rust,no_run
/// use domain_renewer_provider::{create_provider, ProviderOptions, ProviderType, RenewalProvider};
///
/// let provider = create_provider(ProviderType::Dnshe, ProviderOptions::default()).unwrap();
/// assert_eq!(provider.id(), "dnshe");
/// ```
pub fn create_provider(
    provider_type: ProviderType,
    options: ProviderOptions,
) -> Result<Arc<dyn RenewalProvider>> {
    log::debug!("Creating {provider_type} provider");
    match provider_type {
        #[cfg(feature = "dnshe")]
        ProviderType::Dnshe => Ok(Arc::new(DnsheProvider::with_options(options)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;

    #[test]
    fn creates_dnshe_provider() {
        let res = create_provider(ProviderType::Dnshe, ProviderOptions::default());
        assert!(
            matches!(&res, Ok(p) if p.id() == "dnshe"),
            "unexpected result: {:?}",
            res.err()
        );
    }

    #[test]
    fn rejects_invalid_api_base() {
        let options = ProviderOptions {
            api_base: Some("not-a-url".to_string()),
            ..ProviderOptions::default()
        };
        let res = create_provider(ProviderType::Dnshe, options);
        assert!(
            matches!(&res, Err(ProviderError::InvalidParameter { .. })),
            "unexpected result: {:?}",
            res.err()
        );
    }
}
