//! GraphQL view types and argument payloads

use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, ID, Result, SimpleObject};
use serde::Serialize;

use crate::db::{AuthorRecord, BookRecord, NewAuthor, NewBook};

use super::errors::internal_error;
use super::loaders::BookCountLoader;

// ============================================================================
// Output types
// ============================================================================

#[derive(Debug, Clone, SimpleObject)]
pub struct Book {
    pub id: ID,
    pub title: String,
    pub published: Option<i32>,
    /// Author display name, stored by value
    pub author: String,
    pub genres: Vec<String>,
}

impl From<BookRecord> for Book {
    fn from(r: BookRecord) -> Self {
        Self {
            id: ID::from(r.id.to_string()),
            title: r.title,
            published: r.published,
            author: r.author,
            genres: r.genres,
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
#[graphql(complex)]
pub struct Author {
    pub id: ID,
    pub name: String,
    pub born: i32,
}

#[ComplexObject]
impl Author {
    /// Number of books whose author field equals this author's name
    async fn book_count(&self, ctx: &Context<'_>) -> Result<i64> {
        let loader = ctx.data_unchecked::<DataLoader<BookCountLoader>>();
        let count = loader
            .load_one(self.name.clone())
            .await
            .map_err(|e| internal_error(&e))?;
        Ok(count.unwrap_or(0))
    }
}

impl From<AuthorRecord> for Author {
    fn from(r: AuthorRecord) -> Self {
        Self {
            id: ID::from(r.id.to_string()),
            name: r.name,
            born: r.born,
        }
    }
}

// ============================================================================
// Mutation arguments
//
// Serialized verbatim into `invalidArgs` when the store rejects them, so the
// field names mirror the GraphQL argument names.
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct AddBookArgs {
    pub title: String,
    pub author: String,
    pub published: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
}

impl AddBookArgs {
    pub fn to_new_book(&self) -> NewBook {
        NewBook {
            title: self.title.clone(),
            author: self.author.clone(),
            published: Some(self.published),
            genres: self.genres.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AddAuthorArgs {
    pub name: String,
    pub born: i32,
}

impl AddAuthorArgs {
    pub fn to_new_author(&self) -> NewAuthor {
        NewAuthor {
            name: self.name.clone(),
            born: self.born,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EditAuthorArgs {
    pub name: String,
    pub born: i32,
}
