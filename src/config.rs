use std::net::SocketAddr;

use anyhow::Context;

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub database_url: String,
    pub session_ttl_hours: i64,
    pub bcrypt_cost: u32,
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 =
            std::env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().context("PORT")?;

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://cinepass.db?mode=rwc".to_string());

        let session_ttl_hours: i64 =
            std::env::var("SESSION_TTL_HOURS").ok().and_then(|s| s.parse().ok()).unwrap_or(24 * 14);

        let bcrypt_cost: u32 =
            std::env::var("BCRYPT_COST").ok().and_then(|s| s.parse().ok()).unwrap_or(bcrypt::DEFAULT_COST);

        let seed_demo_data = std::env::var("SEED_DEMO_DATA")
            .map(|s| s == "true" || s == "1")
            .unwrap_or(false);

        Ok(Self {
            addr: format!("{host}:{port}").parse().context("HOST/PORT")?,
            database_url,
            session_ttl_hours,
            bcrypt_cost,
            seed_demo_data,
        })
    }
}
