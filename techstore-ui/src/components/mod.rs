//! Storefront components

pub mod app_layout;
pub mod banner_experiment;
pub mod button;
pub mod feature_flag;
pub mod personalized_content;
pub mod product_list;
pub mod storefront;
pub mod tracking_button;

pub use app_layout::Layout;
pub use banner_experiment::ExperimentStub;
pub use button::{Button, ChromelessButton};
pub use feature_flag::FeatureFlagStub;
pub use personalized_content::PersonalizationStub;
pub use product_list::{ProductCard, ProductList};
pub use storefront::Storefront;
pub use tracking_button::TrackingButton;
