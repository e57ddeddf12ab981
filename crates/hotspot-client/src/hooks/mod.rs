mod use_host_requests;
mod use_window_resize;

pub use use_host_requests::use_host_requests;
pub use use_window_resize::use_window_resize;
