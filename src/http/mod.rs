//! HTTP utility module
//!
//! Response builders shared by the handlers.

pub mod response;

pub use response::{
    build_404_response, build_405_response, build_500_response, build_health_response,
    build_html_response, build_options_response, build_png_response, build_svg_response,
};
