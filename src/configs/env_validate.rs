/// Build-time override for where the contact form posts, from
/// `PORTFOLIO_FORM_ENDPOINT`.
pub(crate) fn endpoint_override() -> Option<&'static str> {
    option_env!("PORTFOLIO_FORM_ENDPOINT")
}

/// A non-empty override wins over the endpoint from the content file.
pub(crate) fn resolve_endpoint(overridden: Option<&str>, configured: &str) -> String {
    match overridden.map(str::trim).filter(|s| !s.is_empty()) {
        Some(endpoint) => {
            log::info!("Contact form endpoint overridden at build time: {}", endpoint);
            endpoint.to_string()
        }
        None => configured.to_string(),
    }
}
