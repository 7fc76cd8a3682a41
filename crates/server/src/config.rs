use anyhow::Result;
use std::env;
use ticketline_core::SaleWindow;
use ticketline_core::config::CoreConfig;

#[derive(Debug, Clone)]
pub struct UnifiedConfig {
    pub core: CoreConfig,
    pub bot: BotSettings,
    pub worker: WorkerSettings,
}

#[derive(Debug, Clone)]
pub struct BotSettings {
    pub host: String,
    pub port: u16,
    pub sales_window: SaleWindow,
    pub fallback: bot::Fallback,
}

#[derive(Debug, Clone)]
pub struct WorkerSettings {
    pub poll_interval_secs: u64,
    pub window: SaleWindow,
}

impl UnifiedConfig {
    pub fn from_env() -> Result<Self> {
        let core = CoreConfig::from_env()?;

        Ok(Self {
            core,
            bot: BotSettings {
                host: env::var("BOT_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
                port: env::var("BOT_PORT")
                    .unwrap_or_else(|_| "3000".into())
                    .parse()?,
                sales_window: env::var("BOT_SALES_WINDOW")
                    .unwrap_or_else(|_| "same-day".into())
                    .parse()?,
                fallback: env::var("BOT_FALLBACK")
                    .unwrap_or_else(|_| "register".into())
                    .parse()?,
            },
            worker: WorkerSettings {
                poll_interval_secs: env::var("WORKER_POLL_INTERVAL_SECS")
                    .unwrap_or_else(|_| "3600".into())
                    .parse()?,
                window: env::var("WORKER_WINDOW")
                    .unwrap_or_else(|_| "next-hour".into())
                    .parse()?,
            },
        })
    }

    pub fn to_bot_config(&self) -> bot::Config {
        bot::Config {
            core: self.core.clone(),
            host: self.bot.host.clone(),
            port: self.bot.port,
            sales_window: self.bot.sales_window,
            fallback: self.bot.fallback,
        }
    }

    pub fn to_worker_config(&self) -> worker::Config {
        worker::Config {
            core: self.core.clone(),
            poll_interval_secs: self.worker.poll_interval_secs,
            window: self.worker.window,
        }
    }
}
