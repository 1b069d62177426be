// vitrina/src/config.rs

use crate::error::{CartError, CartResult};
use dotenvy::dotenv;
use std::env;

/// Client-side configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
  /// Base URL of the backend REST API.
  pub api_base_url: String,
  /// Route the synchronizer redirects unauthenticated users to.
  pub login_route: String,
  /// Page size for the landing page's featured-products fetch.
  pub featured_page_size: u32,
  /// Stock at or below this counts as "last units" for the card badge.
  pub low_stock_threshold: u32,
  /// Stock at or below this counts as "limited".
  pub limited_stock_threshold: u32,
}

impl StorefrontConfig {
  pub fn from_env() -> CartResult<Self> {
    dotenv().ok();

    let get_env = |var_name: &str| env::var(var_name);

    let parse_u32 = |var_name: &str, default: u32| -> CartResult<u32> {
      match get_env(var_name) {
        Ok(raw) => raw
          .parse::<u32>()
          .map_err(|e| CartError::Config(format!("Invalid {}: {}", var_name, e))),
        Err(_) => Ok(default),
      }
    };

    let api_base_url =
      get_env("VITRINA_API_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:8000/api".to_string());
    let login_route = get_env("VITRINA_LOGIN_ROUTE").unwrap_or_else(|_| "/login".to_string());
    let featured_page_size = parse_u32("VITRINA_FEATURED_PAGE_SIZE", 8)?;
    let low_stock_threshold =
      parse_u32("VITRINA_LOW_STOCK_THRESHOLD", crate::model::stock::DEFAULT_LOW_STOCK_THRESHOLD)?;
    let limited_stock_threshold = parse_u32(
      "VITRINA_LIMITED_STOCK_THRESHOLD",
      crate::model::stock::DEFAULT_LIMITED_STOCK_THRESHOLD,
    )?;

    if limited_stock_threshold < low_stock_threshold {
      return Err(CartError::Config(format!(
        "VITRINA_LIMITED_STOCK_THRESHOLD ({}) must be >= VITRINA_LOW_STOCK_THRESHOLD ({})",
        limited_stock_threshold, low_stock_threshold
      )));
    }

    tracing::info!("Storefront configuration loaded.");

    Ok(Self {
      api_base_url,
      login_route,
      featured_page_size,
      low_stock_threshold,
      limited_stock_threshold,
    })
  }
}

impl Default for StorefrontConfig {
  fn default() -> Self {
    Self {
      api_base_url: "http://127.0.0.1:8000/api".to_string(),
      login_route: "/login".to_string(),
      featured_page_size: 8,
      low_stock_threshold: crate::model::stock::DEFAULT_LOW_STOCK_THRESHOLD,
      limited_stock_threshold: crate::model::stock::DEFAULT_LIMITED_STOCK_THRESHOLD,
    }
  }
}
