pub mod autoscaling;
pub mod aws;
pub mod config;
pub mod error;
pub mod find;
pub mod logging;
pub mod matcher;
pub mod model;
pub mod properties;
pub mod report;
pub mod tags;

use crate::error::Result;
use crate::model::Group;

/// Source of Auto Scaling Group snapshots for one region.
///
/// Implementations return the complete, unpaginated inventory or an error;
/// the matcher never sees partial data.
#[allow(async_fn_in_trait)]
pub trait GroupSource {
    async fn list_auto_scaling_groups(&self) -> Result<Vec<Group>>;
}
