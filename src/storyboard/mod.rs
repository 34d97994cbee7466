pub mod chain;
pub mod effect;
pub mod record;
pub mod registry;
pub mod sprite;
pub mod timeline;
