//! Built-in feature plugins.

mod cron;
mod redis;

pub use cron::CronPlugin;
pub use redis::RedisPlugin;

use crate::plugin::FeaturePlugin;

/// All built-in plugins, in registration order.
pub fn builtin_plugins() -> Vec<Box<dyn FeaturePlugin>> {
    vec![Box::new(RedisPlugin), Box::new(CronPlugin)]
}
