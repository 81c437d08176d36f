// lsi library - exposes all core modules for the binaries and for testing

pub mod app;
pub mod config;
pub mod config_io;
pub mod primitives;
pub mod services;
pub mod view;

pub use config::Config;
pub use view::presenter::{Item, ItemKind, ItemPresenter, SiblingPlace};
pub use view::styled_text::StyledText;
pub use view::theme::{Tag, TagVocabulary};
