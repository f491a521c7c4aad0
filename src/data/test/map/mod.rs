use crate::data::map::{MapRepository, SEARCH_LIMIT};
use crate::model::catalog::{CatalogMap, CatalogMapMetadata, CatalogMapVersion};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod search;
mod upsert_from_catalog;
