pub mod compose;
pub mod landing;
pub mod main_window;
