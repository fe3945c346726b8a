pub mod prediction_detail;

pub use prediction_detail::Entity as PredictionDetailEntity;
