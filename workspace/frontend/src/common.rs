pub mod fetch_hook;
pub mod loading;
