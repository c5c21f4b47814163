use tracing::info;

use crate::error::Result;
use crate::matcher::match_groups;
use crate::model::MatchResult;
use crate::tags::TagFilter;
use crate::GroupSource;

/// Fetches every group visible to `source` and reports those matching `filter`.
///
/// Either the whole snapshot is matched or the fetch error is returned; there
/// are no partial results.
pub async fn find<S: GroupSource>(source: &S, filter: &TagFilter) -> Result<MatchResult> {
    let groups = source.list_auto_scaling_groups().await?;
    let as_groups = match_groups(&groups, filter);

    info!(
        total_groups = groups.len(),
        matching_groups = as_groups.len(),
        tag_count = filter.len(),
        "Tag search complete"
    );

    Ok(MatchResult::new(as_groups))
}
