use tracing_core::Level;
use tracing_subscriber::{filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Install the global tracing subscriber.
///
/// Migration progress is reported at [`Level::INFO`] regardless of the
/// configured level. Per-statement logs of `sqlx` and `sea_orm` are capped
/// at [`Level::WARN`].
pub fn init(config: &Config) {
    let fmt = fmt::format().with_target(false).compact();

    let target_filters = Targets::new()
        .with_target("sqlx", Level::WARN)
        .with_target("sea_orm::driver", Level::WARN)
        .with_target("sea_orm_migration", Level::INFO)
        .with_target("migration", Level::INFO)
        .with_default(config.logging.level);

    tracing_subscriber::registry()
        .with(fmt::layer().event_format(fmt))
        .with(target_filters)
        .init();
}
