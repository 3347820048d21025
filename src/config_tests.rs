use crate::config::Config;
use crate::domain::pricing::PricingPolicy;
use std::env;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::OnceLock;

// Global lock to prevent race conditions when modifying environment variables in tests
static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn get_env_lock() -> &'static Mutex<()> {
    ENV_LOCK.get_or_init(|| Mutex::new(()))
}

fn clear_env() {
    unsafe {
        env::remove_var("ASSETS_DIR");
        env::remove_var("PRICING_POLICY");
        env::remove_var("LOW_SPEC_DAMPENING");
    }
}

#[test]
fn test_config_defaults() {
    let _guard = get_env_lock().lock().unwrap();
    clear_env();

    let config = Config::from_env().unwrap();

    assert_eq!(config.assets_dir, PathBuf::from("assets"));
    assert_eq!(config.pricing_policy, PricingPolicy::ExchangeRatePegged);
    assert!(!config.low_spec_dampening);
}

#[test]
fn test_direct_policy_arms_dampening_by_default() {
    let _guard = get_env_lock().lock().unwrap();
    clear_env();
    unsafe {
        env::set_var("PRICING_POLICY", "direct");
    }

    let config = Config::from_env().unwrap();

    assert_eq!(config.pricing_policy, PricingPolicy::DirectRupiah);
    assert!(config.low_spec_dampening);

    clear_env();
}

#[test]
fn test_explicit_dampening_overrides_policy_default() {
    let _guard = get_env_lock().lock().unwrap();
    clear_env();
    unsafe {
        env::set_var("PRICING_POLICY", "direct");
        env::set_var("LOW_SPEC_DAMPENING", "false");
    }

    let config = Config::from_env().unwrap();

    assert_eq!(config.pricing_policy, PricingPolicy::DirectRupiah);
    assert!(!config.low_spec_dampening);

    clear_env();
}

#[test]
fn test_invalid_policy_is_rejected() {
    let _guard = get_env_lock().lock().unwrap();
    clear_env();
    unsafe {
        env::set_var("PRICING_POLICY", "freemium");
    }

    assert!(Config::from_env().is_err());

    clear_env();
}
