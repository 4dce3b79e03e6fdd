pub mod category;
pub mod db;
pub mod dispatch;
pub mod failure;
pub mod question;
pub mod quiz;
pub mod shared;
