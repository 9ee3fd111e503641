pub mod document_repo;

pub use document_repo::{DocumentRepository, MongoDocumentRepository};
