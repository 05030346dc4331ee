pub mod selection;
pub mod view;
