use encodeforge_common::Status;

/// Map a Zencoder job state onto the canonical [`Status`].
///
/// Matching is case-sensitive. Unknown states map to [`Status::Failed`] so
/// an unexpected state is never reported as progress or success.
pub fn map_status(state: &str) -> Status {
    match state {
        "waiting" | "pending" | "assigning" => Status::Queued,
        "processing" => Status::Started,
        "finished" => Status::Finished,
        "cancelled" => Status::Canceled,
        "failed" => Status::Failed,
        _ => Status::Failed,
    }
}
