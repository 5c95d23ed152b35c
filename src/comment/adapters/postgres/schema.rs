//! Diesel schema for comment persistence.

diesel::table! {
    /// Comments attached to commentable entities of any kind.
    comments (id) {
        /// Comment identifier.
        id -> Uuid,
        /// Kind discriminator of the owning entity.
        #[max_length = 100]
        commentable_type -> Varchar,
        /// Identifier of the owning entity within its kind.
        commentable_id -> Uuid,
        /// Author, absent for anonymous comments.
        user_id -> Nullable<Uuid>,
        /// Comment text.
        body -> Text,
        /// Publication flag.
        published -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
