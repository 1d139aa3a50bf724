pub mod event;
pub mod facility;
