pub mod authors;
pub mod books;

pub use authors::AuthorMutations;
pub use books::BookMutations;

pub(crate) mod prelude {
    pub(crate) use async_graphql::{Context, Object, Result};

    pub(crate) use crate::db::*;
    pub(crate) use crate::graphql::errors::StoreResultExt;
    pub(crate) use crate::graphql::types::*;
}
