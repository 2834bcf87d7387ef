pub mod load_failed;
pub mod loading;
pub mod question;
pub mod results;
pub mod welcome;
