pub mod forecast;
pub mod quantity;
pub mod tabs;
