mod component;
mod debounce;
mod render;
pub mod scale;
mod scene;
mod state;

pub use component::TopicMap;
pub use scene::Scene;
