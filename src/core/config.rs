use std::env;
use std::path::PathBuf;

use crate::shared::constants::DEFAULT_SPP_AMOUNT;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub letters: LetterConfig,
    pub payments: PaymentConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

/// Settings for the generated clearance letters (Surat Bebas SPP)
#[derive(Debug, Clone)]
pub struct LetterConfig {
    /// Directory the letters are written to, one file per NIM
    pub output_dir: PathBuf,
    /// City printed next to the letter date
    pub city: String,
    /// Institution name printed in the letter header
    pub institution: String,
}

#[derive(Debug, Clone)]
pub struct PaymentConfig {
    /// Amount used by the payment simulation when the request omits `jumlah`
    pub default_amount: i64,
    /// Reject activation of students without a `lunas` payment
    pub require_payment_for_activation: bool,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            letters: LetterConfig::from_env(),
            payments: PaymentConfig::from_env()?,
            swagger: SwaggerConfig::from_env(),
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    const DEFAULT_URL: &'static str = "sqlite://spp.db";
    const DEFAULT_MAX_CONNECTIONS: u32 = 5;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800; // 30 minutes

    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL").unwrap_or_else(|_| Self::DEFAULT_URL.to_string());

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MAX_CONNECTIONS must be a valid number".to_string())?;

        let min_connections = env::var("DB_MIN_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MIN_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MIN_CONNECTIONS must be a valid number".to_string())?;

        let acquire_timeout_secs = env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_ACQUIRE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_ACQUIRE_TIMEOUT_SECS must be a valid number".to_string())?;

        let idle_timeout_secs = env::var("DB_IDLE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_IDLE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_IDLE_TIMEOUT_SECS must be a valid number".to_string())?;

        let max_lifetime_secs = env::var("DB_MAX_LIFETIME_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_LIFETIME_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_MAX_LIFETIME_SECS must be a valid number".to_string())?;

        Ok(Self {
            url,
            max_connections,
            min_connections,
            acquire_timeout_secs,
            idle_timeout_secs,
            max_lifetime_secs,
        })
    }

    /// Filesystem path of the store file, `None` for in-memory databases
    pub fn file_path(&self) -> Option<PathBuf> {
        let path = self
            .url
            .strip_prefix("sqlite://")
            .or_else(|| self.url.strip_prefix("sqlite:"))
            .unwrap_or(&self.url);
        let path = path.split('?').next().unwrap_or(path);

        if path.is_empty() || path == ":memory:" {
            None
        } else {
            Some(PathBuf::from(path))
        }
    }
}

impl LetterConfig {
    pub fn from_env() -> Self {
        let output_dir = env::var("LETTERS_DIR").unwrap_or_else(|_| "static/surat".to_string());
        let city = env::var("LETTER_CITY").unwrap_or_else(|_| "Jakarta".to_string());
        let institution =
            env::var("LETTER_INSTITUTION").unwrap_or_else(|_| "UNIVERSITAS CONTOH".to_string());

        Self {
            output_dir: PathBuf::from(output_dir),
            city,
            institution,
        }
    }
}

impl Default for LetterConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("static/surat"),
            city: "Jakarta".to_string(),
            institution: "UNIVERSITAS CONTOH".to_string(),
        }
    }
}

impl PaymentConfig {
    pub fn from_env() -> Result<Self, String> {
        let default_amount = env::var("SPP_DEFAULT_AMOUNT")
            .unwrap_or_else(|_| DEFAULT_SPP_AMOUNT.to_string())
            .parse::<i64>()
            .map_err(|_| "SPP_DEFAULT_AMOUNT must be a valid number".to_string())?;
        if default_amount < 1 {
            return Err("SPP_DEFAULT_AMOUNT must be positive".to_string());
        }

        let require_payment_for_activation = parse_bool(
            "REQUIRE_PAYMENT_FOR_ACTIVATION",
            env::var("REQUIRE_PAYMENT_FOR_ACTIVATION").ok(),
        )?;

        Ok(Self {
            default_amount,
            require_payment_for_activation,
        })
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            default_amount: DEFAULT_SPP_AMOUNT,
            require_payment_for_activation: false,
        }
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Self {
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "SPP Tracker API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "API documentation for the SPP administration tracker".to_string());

        Self {
            title,
            version,
            description,
        }
    }
}

fn parse_bool(name: &str, value: Option<String>) -> Result<bool, String> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(false),
        Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => Ok(true),
        Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => Ok(false),
        Some(v) => Err(format!("{} must be true or false, got '{}'", name, v)),
    }
}
