pub mod providers;
pub mod recommendations;
pub mod text_model;

pub use providers::{CatalogProvider, GoogleBooksProvider};
pub use recommendations::{Recommender, RecommenderSettings};
pub use text_model::TextModel;
