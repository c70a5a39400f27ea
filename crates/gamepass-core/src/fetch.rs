//! Paginated creator filter.
//!
//! Walks every page of a user's inventory and keeps the assets whose creator
//! is that same user. The upstream has no creator filter of its own, so the
//! listing is always drained to the last page unless a page fails.

use tracing::{debug, instrument, warn};

use crate::inventory::{Completion, FetchOutcome};
use crate::traits::InventorySource;
use crate::types::{PageCursor, UserId};

/// Collect every asset in `user`'s inventory that `user` created.
///
/// Pages are requested strictly one after another. A failed page stops the
/// walk; the records gathered so far are returned with
/// [`Completion::Truncated`] instead of an error, so callers always get
/// a best-effort result.
#[instrument(skip_all, fields(user_id = %user))]
pub async fn fetch_created_assets<S>(source: &S, user: UserId) -> FetchOutcome
where
    S: InventorySource + ?Sized,
{
    let mut records = Vec::new();
    let mut cursor: Option<PageCursor> = None;
    let mut pages_fetched = 0usize;

    loop {
        let page = match source.fetch_page(user, cursor.as_ref()).await {
            Ok(page) => page,
            Err(cause) => {
                match cause.upstream_status() {
                    Some(status) => warn!(
                        status,
                        pages_fetched,
                        kept = records.len(),
                        error = %cause,
                        "inventory API returned an error status, stopping pagination"
                    ),
                    None => warn!(
                        pages_fetched,
                        kept = records.len(),
                        error = %cause,
                        "inventory fetch failed, stopping pagination"
                    ),
                }
                return FetchOutcome {
                    records,
                    completion: Completion::Truncated {
                        pages_fetched,
                        cause,
                    },
                };
            }
        };
        pages_fetched += 1;

        let before = records.len();
        records.extend(page.records.into_iter().filter(|r| r.is_created_by(user)));
        debug!(
            page = pages_fetched,
            matched = records.len() - before,
            "inventory page consumed"
        );

        match page.next_cursor {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    debug!(pages_fetched, total = records.len(), "inventory fully drained");

    FetchOutcome {
        records,
        completion: Completion::Complete,
    }
}
