use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Page size used when the caller does not ask for one
    pub default_page_size: u64,
    /// Upper bound applied to caller-supplied page sizes
    pub max_page_size: u64,
    pub cors_allowed_origins: Vec<String>,
    /// Insert the reference regions on startup
    pub seed_regions: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://school_registry.db?mode=rwc".to_string(),
            port: 8000,
            default_page_size: 5,
            max_page_size: 100,
            cors_allowed_origins: Vec::new(),
            seed_regions: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let max_page_size = env::var("MAX_PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|v: &u64| *v > 0)
            .unwrap_or(defaults.max_page_size);

        Self {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            default_page_size: env::var("DEFAULT_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v: &u64| *v > 0)
                .unwrap_or(defaults.default_page_size)
                .min(max_page_size),
            max_page_size,
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            seed_regions: env::var("SEED_DEMO")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(false),
        }
    }

    /// Clamp a requested page size into `1..=max_page_size`
    pub fn page_size(&self, requested: Option<u64>) -> u64 {
        requested
            .unwrap_or(self.default_page_size)
            .clamp(1, self.max_page_size.max(1))
    }
}
