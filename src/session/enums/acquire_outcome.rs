/// How a `LoadData` request ended up owning its key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcquireOutcome {
    /// The key was unowned.
    Acquired,
    /// The requesting node already owned the key.
    AlreadyOwner,
    /// Another node owned the key and was evicted first.
    Transferred { previous_owner: String },
}
