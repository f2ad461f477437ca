pub mod experience;
pub mod pages;
pub mod personal;
pub mod post;
pub mod project;
pub mod section;
pub mod technology;
