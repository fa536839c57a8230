use super::*;

#[test]
fn default_policy_is_quiet() {
    let config = ClientConfig::default();
    assert!(!config.revalidate.revalidate_on_focus);
    assert!(!config.revalidate.retry_on_error);
    assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn from_values_uses_default_when_url_missing_or_blank() {
    assert_eq!(ClientConfig::from_values(None, None, None).api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(ClientConfig::from_values(Some("  "), None, None).api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn from_values_trims_trailing_slash() {
    let config = ClientConfig::from_values(Some("http://localhost:5000/api/"), None, None);
    assert_eq!(config.api_base_url, "http://localhost:5000/api");
}

#[test]
fn revalidate_on_focus_flag_parses_true_and_one() {
    assert!(ClientConfig::from_values(None, Some("true"), None).revalidate.revalidate_on_focus);
    assert!(ClientConfig::from_values(None, Some("TRUE"), None).revalidate.revalidate_on_focus);
    assert!(ClientConfig::from_values(None, Some("1"), None).revalidate.revalidate_on_focus);
    assert!(!ClientConfig::from_values(None, Some("yes"), None).revalidate.revalidate_on_focus);
    assert!(!ClientConfig::from_values(None, None, None).revalidate.revalidate_on_focus);
}

#[test]
fn focus_and_retry_flags_are_independent() {
    let focus_only = ClientConfig::from_values(None, Some("true"), None);
    assert!(!focus_only.revalidate.retry_on_error);
    let retry_only = ClientConfig::from_values(None, None, Some("1"));
    assert!(retry_only.revalidate.retry_on_error);
    assert!(!retry_only.revalidate.revalidate_on_focus);
}
