mod model;
mod persistence;

pub use model::{LayoutConfig, PageConfig, ScrollConfig, StripConfig};
pub use persistence::{config_path, load_config, load_config_from, save_config_to};
