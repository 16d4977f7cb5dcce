pub mod add_ten;
pub mod health;
pub mod style_text;

pub use add_ten::add_ten;
pub use health::health_check;
pub use style_text::style_text;
