//! Background maintenance for Dropcode.
//!
//! The only periodic task is the reclamation sweep. It is off by default and
//! the `POST /api/cleanup` endpoint stays the primary trigger; when enabled in
//! configuration, a cron schedule runs the same sweep in-process.

pub mod jobs;
pub mod scheduler;

pub use jobs::SweepJob;
pub use scheduler::CronScheduler;
