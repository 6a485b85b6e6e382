mod danmaku;
mod map;
mod modals;
mod scripts;
mod view;

pub use map::{EchartsSurface, MapCanvas};
pub use view::QuizView;

#[cfg(test)]
pub(crate) use view::QuizTestHandles;
