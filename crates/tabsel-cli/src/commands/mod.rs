pub mod scale;
pub mod subset;
