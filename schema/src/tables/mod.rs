//! Static protocol tables.

mod entity;
mod template;

pub(crate) use entity::ENTITY_SCHEMAS;
pub use template::template_layout;
