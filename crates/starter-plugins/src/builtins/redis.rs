//! Redis caching plugin.
//!
//! Drops a ready-made Redis client into the project, wires it into the
//! entry point and environment config, and ships a docker-compose file
//! for a local instance.

use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use starter_inject::{Directive, Location};

use crate::actions::FileActions;
use crate::error::Result;
use crate::language::LanguageVariant;
use crate::plugin::{DependencyMap, FeaturePlugin};

const CLIENT_TS: &str = "import { createClient } from 'redis';
import { logger } from '../config/logger';
import { env } from '../config/env';

export const redisClient = createClient({
  url: env.redis.url
});

redisClient.on('error', (err) => logger.error('Redis Client Error', err));
redisClient.on('connect', () => logger.info('Redis Client Connected'));

export const connectRedis = async () => {
  if (!redisClient.isOpen) {
    await redisClient.connect();
  }
};

export const disconnectRedis = async () => {
  if (redisClient.isOpen) {
    await redisClient.disconnect();
    logger.info('Redis disconnected');
  }
};
";

const CLIENT_JS: &str = "const { createClient } = require('redis');
const { logger } = require('../config/logger');
const env = require('../config/env');

const redisClient = createClient({
  url: env.redis.url
});

redisClient.on('error', (err) => logger.error('Redis Client Error', err));
redisClient.on('connect', () => logger.info('Redis Client Connected'));

const connectRedis = async () => {
  if (!redisClient.isOpen) {
    await redisClient.connect();
  }
};

const disconnectRedis = async () => {
  if (redisClient.isOpen) {
    await redisClient.disconnect();
    logger.info('Redis disconnected');
  }
};

module.exports = { redisClient, connectRedis, disconnectRedis };
";

const DOCKER_COMPOSE: &str = "services:
  redis:
    image: redis:alpine
    container_name: redis_cache
    restart: always
    ports:
      - \"6379:6379\"
    volumes:
      - redis_data:/data

  redis-insight:
    image: redis/redisinsight:latest
    container_name: redis_insight
    restart: always
    ports:
      - \"5540:5540\"
    volumes:
      - redis_insight_data:/data

volumes:
  redis_data:
  redis_insight_data:
";

/// Entry-point statements that mark "the database is connected"; the
/// cache connect call goes right after whichever one the template uses.
const CONNECT_ANCHORS: [&str; 3] = [
    "await prisma.$connect();",
    "await mongoose.connect(env.mongoose.url);",
    "await db.execute('SELECT 1');",
];

pub struct RedisPlugin;

impl FeaturePlugin for RedisPlugin {
    fn slug(&self) -> &str {
        "redis"
    }

    fn name(&self) -> &str {
        "Redis (Caching)"
    }

    fn dependencies(&self) -> DependencyMap {
        BTreeMap::from([("redis".to_string(), "^4.6.12".to_string())])
    }

    fn apply(
        &self,
        project_root: &Path,
        language: LanguageVariant,
        actions: &mut FileActions,
    ) -> Result<()> {
        let ext = language.extension();

        let client = if language.is_typescript() {
            CLIENT_TS
        } else {
            CLIENT_JS
        };
        actions.create_file(&format!("src/lib/redis.{ext}"), client)?;
        actions.create_file("docker-compose.redis.yml", DOCKER_COMPOSE)?;

        actions.update_file(
            "package.json",
            &[Directive::inject(
                r#"    "redis:up": "docker compose -f docker-compose.redis.yml up -d","#,
                r#""scripts": {"#,
                Location::After,
            )],
        )?;

        if language.is_typescript() {
            actions.update_file(
                "src/config/env.ts",
                &[
                    Directive::inject(
                        "  REDIS_URL: z.string().default('redis://localhost:6379'),",
                        "z.object({",
                        Location::After,
                    ),
                    Directive::inject(
                        "  redis: {\n    url: envVars.REDIS_URL,\n  },",
                        "export const env = {",
                        Location::After,
                    ),
                ],
            )?;
        } else {
            actions.update_file(
                "src/config/env.js",
                &[
                    Directive::inject(
                        "    REDIS_URL: Joi.string().default('redis://localhost:6379').description('Redis URL'),",
                        ".keys({",
                        Location::After,
                    ),
                    Directive::inject(
                        "  redis: {\n    url: envVars.REDIS_URL,\n  },",
                        "module.exports = {",
                        Location::After,
                    ),
                ],
            )?;
        }

        for env_file in [".env", ".env.example"] {
            append_env_block(&project_root.join(env_file))?;
        }

        let import_statement = if language.is_typescript() {
            "import { connectRedis } from './lib/redis';"
        } else {
            "const { connectRedis } = require('./lib/redis');"
        };

        actions.update_file(
            &format!("src/index.{ext}"),
            &[
                Directive::import(import_statement),
                Directive::Inject {
                    text: "await connectRedis();".to_string(),
                    anchors: CONNECT_ANCHORS.iter().map(|a| a.to_string()).collect(),
                    location: Location::After,
                },
            ],
        )?;

        Ok(())
    }
}

/// Append the Redis connection variable unless the file already has one.
fn append_env_block(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Ok(());
    }
    let content = std::fs::read_to_string(path)?;
    if content.contains("REDIS_URL") {
        return Ok(());
    }
    let mut file = OpenOptions::new().append(true).open(path)?;
    file.write_all(b"\n# Redis\nREDIS_URL=redis://localhost:6379\n")?;
    Ok(())
}
