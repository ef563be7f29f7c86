//! Cron job scheduling plugin.
//!
//! Adds a small job scheduler built on node-cron and starts it from the
//! entry point once the database connection is up.

use std::collections::BTreeMap;
use std::path::Path;

use starter_inject::{Directive, Location};

use crate::actions::FileActions;
use crate::error::Result;
use crate::language::LanguageVariant;
use crate::plugin::{DependencyMap, FeaturePlugin};

const SCHEDULER_TS: &str = "import cron from 'node-cron';
import { logger } from '../config/logger';

interface Job {
  name: string;
  schedule: string;
  task: () => Promise<void> | void;
}

const jobs: Job[] = [];

export const registerJob = (job: Job) => {
  jobs.push(job);
};

export const startJobs = () => {
  for (const job of jobs) {
    cron.schedule(job.schedule, async () => {
      try {
        await job.task();
      } catch (err) {
        logger.error(`Job ${job.name} failed`, err);
      }
    });
    logger.info(`Scheduled job: ${job.name} (${job.schedule})`);
  }
};
";

const SCHEDULER_JS: &str = "const cron = require('node-cron');
const { logger } = require('../config/logger');

const jobs = [];

const registerJob = (job) => {
  jobs.push(job);
};

const startJobs = () => {
  for (const job of jobs) {
    cron.schedule(job.schedule, async () => {
      try {
        await job.task();
      } catch (err) {
        logger.error(`Job ${job.name} failed`, err);
      }
    });
    logger.info(`Scheduled job: ${job.name} (${job.schedule})`);
  }
};

module.exports = { registerJob, startJobs };
";

/// Same database-connected anchors the redis plugin uses; the scheduler
/// starts once the entry point has a live connection.
const CONNECT_ANCHORS: [&str; 3] = [
    "await prisma.$connect();",
    "await mongoose.connect(env.mongoose.url);",
    "await db.execute('SELECT 1');",
];

pub struct CronPlugin;

impl FeaturePlugin for CronPlugin {
    fn slug(&self) -> &str {
        "cron"
    }

    fn name(&self) -> &str {
        "Cron (Job Scheduling)"
    }

    fn dependencies(&self) -> DependencyMap {
        BTreeMap::from([("node-cron".to_string(), "^3.0.3".to_string())])
    }

    fn apply(
        &self,
        _project_root: &Path,
        language: LanguageVariant,
        actions: &mut FileActions,
    ) -> Result<()> {
        let ext = language.extension();

        let scheduler = if language.is_typescript() {
            SCHEDULER_TS
        } else {
            SCHEDULER_JS
        };
        actions.create_file(&format!("src/jobs/scheduler.{ext}"), scheduler)?;

        let import_statement = if language.is_typescript() {
            "import { startJobs } from './jobs/scheduler';"
        } else {
            "const { startJobs } = require('./jobs/scheduler');"
        };

        actions.update_file(
            &format!("src/index.{ext}"),
            &[
                Directive::import(import_statement),
                Directive::Inject {
                    text: "startJobs();".to_string(),
                    anchors: CONNECT_ANCHORS.iter().map(|a| a.to_string()).collect(),
                    location: Location::After,
                },
            ],
        )?;

        Ok(())
    }
}
