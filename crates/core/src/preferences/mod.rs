//! Investor preferences module - models and the source trait.

mod preferences_model;
mod preferences_traits;

pub use preferences_model::InvestorPreferences;
pub use preferences_traits::PreferencesSourceTrait;
