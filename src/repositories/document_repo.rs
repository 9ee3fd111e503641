use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    Collection,
};

use crate::error::ApiError;

/// Generic CRUD over one document collection. Both admin collections share
/// this contract; the entity label only feeds messages.
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    fn entity(&self) -> &'static str;

    /// Every document, in the store's natural iteration order.
    async fn list(&self) -> Result<Vec<Document>, ApiError>;

    /// Insert the partial record verbatim and return the full stored
    /// document, identity included.
    async fn create(&self, record: Document) -> Result<Document, ApiError>;

    /// Merge the given fields into the document with this identity and
    /// return the full updated document. Unspecified fields are untouched.
    async fn update(&self, id: &str, changes: Document) -> Result<Document, ApiError>;

    /// Remove the document with this identity; exactly one deletion is the
    /// success criterion.
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

pub struct MongoDocumentRepository {
    collection: Collection<Document>,
    entity: &'static str,
}

impl MongoDocumentRepository {
    pub fn new(collection: Collection<Document>, entity: &'static str) -> Self {
        Self { collection, entity }
    }

    /// An identity that does not parse is indistinguishable from one that
    /// matches nothing.
    fn parse_id(&self, id: &str) -> Result<ObjectId, ApiError> {
        ObjectId::parse_str(id).map_err(|_| self.not_found())
    }

    fn not_found(&self) -> ApiError {
        ApiError::not_found(format!("{} not found", self.entity))
    }
}

#[async_trait]
impl DocumentRepository for MongoDocumentRepository {
    fn entity(&self) -> &'static str {
        self.entity
    }

    async fn list(&self) -> Result<Vec<Document>, ApiError> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn create(&self, record: Document) -> Result<Document, ApiError> {
        let inserted = self.collection.insert_one(record).await?;
        self.collection
            .find_one(doc! { "_id": inserted.inserted_id })
            .await?
            .ok_or_else(|| {
                ApiError::internal(format!("{} missing after insert", self.entity))
            })
    }

    async fn update(&self, id: &str, mut changes: Document) -> Result<Document, ApiError> {
        let id = self.parse_id(id)?;

        // Identity is store-assigned and immutable.
        changes.remove("_id");

        if !changes.is_empty() {
            let result = self
                .collection
                .update_one(doc! { "_id": id }, doc! { "$set": changes })
                .await?;
            if result.matched_count == 0 {
                return Err(self.not_found());
            }
        }

        self.collection
            .find_one(doc! { "_id": id })
            .await?
            .ok_or_else(|| self.not_found())
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let id = self.parse_id(id)?;

        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        if result.deleted_count == 1 {
            Ok(())
        } else {
            Err(self.not_found())
        }
    }
}
