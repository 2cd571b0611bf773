pub mod search_bar;
pub mod search_input;
pub mod variant_components;

pub use search_bar::SearchBar;
pub use search_input::SearchInput;
pub use variant_components::VariantHitRow;
