/// A record that belongs to exactly one user.
pub trait Owned {
    fn owner_id(&self) -> i64;
}

/// Keeps `record` only if it exists and `caller` owns it.
///
/// Missing and foreign records both come back as `None`; mutation handlers
/// answer both with the same 403.
pub fn owned_by<T: Owned>(record: Option<T>, caller: i64) -> Option<T> {
    record.filter(|r| r.owner_id() == caller)
}
