//! Diesel schema for todo persistence.

diesel::table! {
    /// Todo records keyed by a storage-assigned identifier.
    todos (id) {
        /// Storage-assigned record identifier.
        id -> BigInt,
        /// Trimmed todo text.
        #[max_length = 500]
        text -> Varchar,
        /// Completion flag.
        completed -> Bool,
        /// Calendar date the record is scoped to.
        date -> Date,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last mutation timestamp.
        updated_at -> Timestamptz,
    }
}
