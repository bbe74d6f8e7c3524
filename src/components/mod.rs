//! UI Components

mod create_point;
mod home;
mod map_view;

pub use create_point::CreatePoint;
pub use home::Home;
pub use map_view::MapView;
