//! Message factory for creating test flavor message entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test flavor messages with customizable fields.
pub struct MessageFactory<'a> {
    db: &'a DatabaseConnection,
    kind: String,
    content: Option<String>,
    image: Option<Vec<u8>>,
}

impl<'a> MessageFactory<'a> {
    /// Creates a new MessageFactory with default values.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `kind` - Message pool this entry belongs to (`first_try`, `won`, `lose`)
    pub fn new(db: &'a DatabaseConnection, kind: impl Into<String>) -> Self {
        Self {
            db,
            kind: kind.into(),
            content: Some("Nice one!".to_string()),
            image: None,
        }
    }

    /// Sets the text content.
    pub fn content(mut self, content: Option<String>) -> Self {
        self.content = content;
        self
    }

    /// Sets the raw image bytes.
    pub fn image(mut self, image: Option<Vec<u8>>) -> Self {
        self.image = image;
        self
    }

    /// Builds and inserts the message entity into the database.
    pub async fn build(self) -> Result<entity::rankedle_message::Model, DbErr> {
        entity::rankedle_message::ActiveModel {
            id: ActiveValue::NotSet,
            kind: ActiveValue::Set(self.kind),
            content: ActiveValue::Set(self.content),
            image: ActiveValue::Set(self.image),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a flavor message with default values for the given kind.
///
/// Shorthand for `MessageFactory::new(db, kind).build().await`.
pub async fn create_message(
    db: &DatabaseConnection,
    kind: impl Into<String>,
) -> Result<entity::rankedle_message::Model, DbErr> {
    MessageFactory::new(db, kind).build().await
}
