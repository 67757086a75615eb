pub mod settings;

pub use settings::LinkerSettings;
